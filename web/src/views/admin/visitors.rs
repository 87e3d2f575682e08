use std::collections::HashMap;

use dioxus::prelude::*;

use api::models::Visitor;
use ui::{toast_error, use_admin_api, use_toasts};

#[derive(Debug, Default, Clone, PartialEq)]
struct VisitorStats {
    total: usize,
    desktop: usize,
    mobile: usize,
    tablet: usize,
    top_countries: Vec<(String, usize)>,
    top_browsers: Vec<(String, usize)>,
}

fn top_five(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    // Highest count first; ties broken alphabetically so the order is stable.
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(5);
    entries
}

fn compute_stats(visitors: &[Visitor]) -> VisitorStats {
    let mut countries: HashMap<String, usize> = HashMap::new();
    let mut browsers: HashMap<String, usize> = HashMap::new();
    for visitor in visitors {
        *countries.entry(visitor.country.clone()).or_default() += 1;
        *browsers.entry(visitor.browser.clone()).or_default() += 1;
    }

    VisitorStats {
        total: visitors.len(),
        desktop: visitors.iter().filter(|v| v.device == "Desktop").count(),
        mobile: visitors.iter().filter(|v| v.device == "Mobile").count(),
        tablet: visitors.iter().filter(|v| v.device == "Tablet").count(),
        top_countries: top_five(countries),
        top_browsers: top_five(browsers),
    }
}

/// Visitor analytics: the raw visit log plus client-side tallies.
#[component]
pub fn AdminVisitors() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut visitors = use_signal(Vec::<Visitor>::new);
    let mut stats = use_signal(VisitorStats::default);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match api::admin::list_visitors(&client).await {
                Ok(loaded) => {
                    stats.set(compute_stats(&loaded));
                    visitors.set(loaded);
                }
                Err(e) => toast_error(&mut toasts, format!("Could not load visitors: {e}")),
            }
            loading.set(false);
        }
    });

    let s = stats();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Visitors" }
            }

            if loading() {
                ui::components::Loading {}
            } else {
                div { class: "stat-grid",
                    div { class: "stat",
                        span { class: "stat-value", "{s.total}" }
                        span { class: "stat-label", "Total visits" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{s.desktop}" }
                        span { class: "stat-label", "Desktop" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{s.mobile}" }
                        span { class: "stat-label", "Mobile" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{s.tablet}" }
                        span { class: "stat-label", "Tablet" }
                    }
                }

                div { class: "detail-columns",
                    div { class: "card",
                        h2 { class: "section-title", "Top countries" }
                        for (country, count) in s.top_countries.iter() {
                            div { class: "tally-row", key: "{country}",
                                span { "{country}" }
                                span { class: "muted", "{count}" }
                            }
                        }
                    }
                    div { class: "card",
                        h2 { class: "section-title", "Top browsers" }
                        for (browser, count) in s.top_browsers.iter() {
                            div { class: "tally-row", key: "{browser}",
                                span { "{browser}" }
                                span { class: "muted", "{count}" }
                            }
                        }
                    }
                }

                h2 { class: "section-title", "Visit log" }
                if visitors().is_empty() {
                    ui::components::EmptyState { message: "No visits recorded yet" }
                } else {
                    div { class: "table-wrap",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Page" }
                                    th { "Location" }
                                    th { "Device" }
                                    th { "Browser" }
                                    th { "OS" }
                                    th { "When" }
                                }
                            }
                            tbody {
                                for visitor in visitors() {
                                    tr { key: "{visitor.id}",
                                        td { code { "{visitor.page}" } }
                                        td { "{visitor.city}, {visitor.country}" }
                                        td { "{visitor.device}" }
                                        td { "{visitor.browser}" }
                                        td { "{visitor.os}" }
                                        td { {ui::datetime(&visitor.visited_at)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn visitor(country: &str, browser: &str, device: &str) -> Visitor {
        Visitor {
            id: "v".into(),
            page: "/".into(),
            ip: "10.0.0.1".into(),
            country: country.into(),
            city: "X".into(),
            browser: browser.into(),
            os: "Linux".into(),
            device: device.into(),
            visited_at: Utc::now(),
        }
    }

    #[test]
    fn test_device_counts() {
        let visits = vec![
            visitor("DE", "Chrome", "Desktop"),
            visitor("DE", "Firefox", "Mobile"),
            visitor("FR", "Chrome", "Tablet"),
            visitor("FR", "Chrome", "Desktop"),
        ];
        let stats = compute_stats(&visits);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.desktop, 2);
        assert_eq!(stats.mobile, 1);
        assert_eq!(stats.tablet, 1);
    }

    #[test]
    fn test_top_lists_sorted_and_capped() {
        let mut visits = Vec::new();
        for (country, n) in [("AA", 1), ("BB", 3), ("CC", 2), ("DD", 1), ("EE", 5), ("FF", 4)] {
            for _ in 0..n {
                visits.push(visitor(country, "Chrome", "Desktop"));
            }
        }
        let stats = compute_stats(&visits);
        assert_eq!(stats.top_countries.len(), 5);
        assert_eq!(stats.top_countries[0], ("EE".to_string(), 5));
        assert_eq!(stats.top_countries[1], ("FF".to_string(), 4));
        // Tie between AA and DD resolved alphabetically.
        assert_eq!(stats.top_countries[4].0, "AA");
    }
}
