use std::collections::HashSet;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use api::models::{Product, Quote, QuoteStatus};
use ui::components::{quote_status_tone, Badge};
use ui::{use_admin_api, use_toasts};

use crate::Route;

#[derive(Debug, Default, Clone, PartialEq)]
struct DashboardStats {
    products: usize,
    quotes: usize,
    pending: usize,
    approved: usize,
    rejected: usize,
    today: usize,
    customers: usize,
}

/// Everything on the dashboard is derived client-side from the two lists.
fn compute_stats(products: &[Product], quotes: &[Quote], now: DateTime<Utc>) -> DashboardStats {
    let today = now.date_naive();
    let customers: HashSet<&str> = quotes.iter().map(|q| q.email.as_str()).collect();

    DashboardStats {
        products: products.len(),
        quotes: quotes.len(),
        pending: quotes
            .iter()
            .filter(|q| q.status == QuoteStatus::Pending)
            .count(),
        approved: quotes
            .iter()
            .filter(|q| q.status == QuoteStatus::Approved)
            .count(),
        rejected: quotes
            .iter()
            .filter(|q| q.status == QuoteStatus::Rejected)
            .count(),
        today: quotes
            .iter()
            .filter(|q| q.created_at.date_naive() == today)
            .count(),
        customers: customers.len(),
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();
    let mut stats = use_signal(DashboardStats::default);
    let mut recent = use_signal(Vec::<Quote>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let (products, quotes) = futures::join!(
                api::catalog::list_products(&client, None),
                api::quotes::list_quotes(&client, None),
            );
            match (products, quotes) {
                (Ok(products), Ok(quotes)) => {
                    stats.set(compute_stats(&products, &quotes, Utc::now()));
                    recent.set(quotes.into_iter().take(6).collect());
                }
                (Err(e), _) | (_, Err(e)) => {
                    ui::toast_error(&mut toasts, format!("Could not load the dashboard: {e}"));
                }
            }
            loading.set(false);
        }
    });

    let s = stats();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
            }

            if loading() {
                ui::components::Loading {}
            } else {
                div { class: "stat-grid",
                    StatCard { label: "Products", value: s.products }
                    StatCard { label: "Quotes", value: s.quotes }
                    StatCard { label: "Pending", value: s.pending }
                    StatCard { label: "Approved", value: s.approved }
                    StatCard { label: "Rejected", value: s.rejected }
                    StatCard { label: "Today", value: s.today }
                    StatCard { label: "Customers", value: s.customers }
                }

                h2 { class: "section-title", "Recent quotes" }
                if recent().is_empty() {
                    ui::components::EmptyState { message: "No quotes yet" }
                } else {
                    div { class: "table-wrap",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Customer" }
                                    th { "Items" }
                                    th { "Status" }
                                    th { "Received" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for quote in recent() {
                                    tr { key: "{quote.id}",
                                        td { "{quote.customer_name}" }
                                        td { "{quote.items.len()}" }
                                        td {
                                            Badge {
                                                tone: quote_status_tone(quote.status),
                                                label: quote.status.label().to_string(),
                                            }
                                        }
                                        td { {ui::datetime(&quote.created_at)} }
                                        td {
                                            Link {
                                                class: "btn btn-outline btn-sm",
                                                to: Route::AdminQuoteDetail { id: quote.id.clone() },
                                                "Open"
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
    }
}

#[component]
fn StatCard(label: String, value: usize) -> Element {
    rsx! {
        div { class: "stat",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quote(email: &str, status: QuoteStatus, created_at: DateTime<Utc>) -> Quote {
        serde_json::from_value(serde_json::json!({
            "id": "q",
            "customer_name": "A",
            "email": email,
            "items": [],
            "status": status.as_str(),
            "created_at": created_at.to_rfc3339(),
        }))
        .unwrap()
    }

    #[test]
    fn test_stats_count_statuses_and_distinct_customers() {
        let now = Utc.with_ymd_and_hms(2026, 5, 10, 15, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2026, 5, 9, 23, 59, 0).unwrap();
        let quotes = vec![
            quote("a@x.test", QuoteStatus::Pending, now),
            quote("a@x.test", QuoteStatus::Approved, earlier),
            quote("b@x.test", QuoteStatus::Rejected, now),
        ];

        let stats = compute_stats(&[], &quotes, now);
        assert_eq!(stats.quotes, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.customers, 2);
    }
}
