use dioxus::prelude::*;

use api::models::{Customer, Quote};
use ui::components::{quote_status_tone, Badge, ModalOverlay};
use ui::{toast_error, use_admin_api, use_toasts};

use crate::Route;

/// Customer archive: searchable table, per-customer quote history, and the
/// entry point into balance editing.
#[component]
pub fn AdminCustomers() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut customers = use_signal(Vec::<Customer>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Customer>::None);
    let mut history = use_signal(Vec::<Quote>::new);
    let mut history_loading = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::customers::list_customers(&client).await {
                    Ok(loaded) => customers.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load customers: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let term = search();
    let visible: Vec<Customer> = customers()
        .into_iter()
        .filter(|c| term.trim().is_empty() || c.matches(term.trim()))
        .collect();
    let total_quotes: u32 = visible.iter().map(|c| c.quote_count).sum();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Customers" }
                    p { class: "page-subtitle", "Registered customers and their quote history" }
                }
            }

            input {
                class: "search-box",
                r#type: "text",
                placeholder: "Search by name, email or company...",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }

            div { class: "stat-grid",
                div { class: "stat",
                    span { class: "stat-value", "{visible.len()}" }
                    span { class: "stat-label", "Customers" }
                }
                div { class: "stat",
                    span { class: "stat-value", "{total_quotes}" }
                    span { class: "stat-label", "Quotes" }
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if visible.is_empty() {
                ui::components::EmptyState {
                    message: if search().trim().is_empty() { "No customers yet".to_string() } else { "No customer matches your search".to_string() },
                }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Company" }
                                th { "Phone" }
                                th { "Balance" }
                                th { "Quotes" }
                                th { "Registered" }
                                th { "" }
                            }
                        }
                        tbody {
                            for customer in visible {
                                tr { key: "{customer.id}",
                                    td { "{customer.name}" }
                                    td { "{customer.email}" }
                                    td { {customer.company.clone().unwrap_or_else(|| "—".to_string())} }
                                    td { {customer.phone.clone().unwrap_or_else(|| "—".to_string())} }
                                    td {
                                        span { class: "balance-pill", {ui::money(customer.balance)} }
                                    }
                                    td { "{customer.quote_count}" }
                                    td { {ui::date(&customer.created_at)} }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-outline btn-sm",
                                                onclick: {
                                                    let client = client.clone();
                                                    let customer = customer.clone();
                                                    move |_| {
                                                        selected.set(Some(customer.clone()));
                                                        history.set(Vec::new());
                                                        history_loading.set(true);
                                                        let client = client.clone();
                                                        let id = customer.id.clone();
                                                        spawn(async move {
                                                            match api::customers::customer_quote_history(&client, &id).await {
                                                                Ok(result) => history.set(result.quotes),
                                                                Err(e) => toast_error(&mut toasts, format!("Could not load quotes: {e}")),
                                                            }
                                                            history_loading.set(false);
                                                        });
                                                    }
                                                },
                                                "Quotes"
                                            }
                                            Link {
                                                class: "btn btn-warning btn-sm",
                                                to: Route::AdminBalance { id: customer.id.clone() },
                                                "Balance"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(customer) = selected() {
                ModalOverlay {
                    on_close: move |_| selected.set(None),
                    div { class: "modal-body modal-wide",
                        h2 { class: "modal-title", "{customer.name} — quotes" }
                        if history_loading() {
                            ui::components::Loading {}
                        } else if history().is_empty() {
                            ui::components::EmptyState { message: "No quotes for this customer" }
                        } else {
                            div { class: "quote-list",
                                for quote in history() {
                                    div { key: "{quote.id}", class: "card quote-card",
                                        div { class: "quote-card-header",
                                            span { class: "quote-id", "#{ui::short_id(&quote.id)}" }
                                            Badge {
                                                tone: quote_status_tone(quote.status),
                                                label: quote.status.label().to_string(),
                                            }
                                            span { class: "muted", {ui::date(&quote.created_at)} }
                                        }
                                        div { class: "chip-row",
                                            for item in &quote.items {
                                                span { class: "chip", "{item.product_name} ×{item.quantity}" }
                                            }
                                        }
                                        if let Some(message) = &quote.message {
                                            p { class: "muted", "{message}" }
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
