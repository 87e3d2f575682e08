use dioxus::prelude::*;

use api::models::{Quote, QuoteStatus};
use api::ApiClient;
use ui::components::{confirm, quote_status_tone, Badge};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

use crate::Route;

async fn reload(client: &ApiClient, status: Option<QuoteStatus>, mut quotes: Signal<Vec<Quote>>) {
    if let Ok(loaded) = api::quotes::list_quotes(client, status).await {
        quotes.set(loaded);
    }
}

/// Incoming quotes with status filter tabs.
#[component]
pub fn AdminQuotes() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut quotes = use_signal(Vec::<Quote>::new);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(|| Option::<QuoteStatus>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let status = filter();
            async move {
                loading.set(true);
                match api::quotes::list_quotes(&client, status).await {
                    Ok(loaded) => quotes.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load quotes: {e}")),
                }
                loading.set(false);
            }
        }
    });

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Quotes" }
                    p { class: "page-subtitle", "Review incoming requests and move them through the workflow" }
                }
            }

            div { class: "filter-row",
                button {
                    class: if filter().is_none() { "filter-btn filter-btn-active" } else { "filter-btn" },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for status in QuoteStatus::ALL {
                    button {
                        key: "{status.as_str()}",
                        class: if filter() == Some(status) { "filter-btn filter-btn-active" } else { "filter-btn" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status.label()}"
                    }
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if quotes().is_empty() {
                ui::components::EmptyState { message: "No quotes in this view" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Customer" }
                                th { "Company" }
                                th { "Items" }
                                th { "Status" }
                                th { "Received" }
                                th { "" }
                            }
                        }
                        tbody {
                            for quote in quotes() {
                                tr { key: "{quote.id}",
                                    td { "{quote.customer_name}" }
                                    td { {quote.company.clone().unwrap_or_else(|| "—".to_string())} }
                                    td { "{quote.items.len()}" }
                                    td {
                                        Badge {
                                            tone: quote_status_tone(quote.status),
                                            label: quote.status.label().to_string(),
                                        }
                                    }
                                    td { {ui::datetime(&quote.created_at)} }
                                    td {
                                        div { class: "row-actions",
                                            Link {
                                                class: "btn btn-outline btn-sm",
                                                to: Route::AdminQuoteDetail { id: quote.id.clone() },
                                                "Open"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = quote.id.clone();
                                                    move |_| {
                                                        if !confirm("Delete this quote?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match api::quotes::delete_quote(&client, &id).await {
                                                                Ok(()) => {
                                                                    toast_success(&mut toasts, "Quote deleted");
                                                                    reload(&client, filter(), quotes).await;
                                                                }
                                                                Err(e) => toast_error(&mut toasts, format!("Delete failed: {e}")),
                                                            }
                                                        });
                                                    }
                                                },
                                                "Delete"
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
