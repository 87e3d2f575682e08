use dioxus::prelude::*;

use api::models::{Quote, QuoteLine, QuoteStatus, QuoteUpdate};
use ui::components::{open_url, quote_status_tone, Badge};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

use crate::Route;

/// One quote: customer info, requested items, the pricing editor, status
/// transitions, PDF download and the send-email action.
#[component]
pub fn AdminQuoteDetail(id: String) -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut quote = use_signal(|| Option::<Quote>::None);
    let mut admin_note = use_signal(String::new);
    let mut unit_prices = use_signal(Vec::<String>::new);
    let mut show_pricing = use_signal(|| false);
    let mut updating = use_signal(|| false);
    let mut sending = use_signal(|| false);

    let id_signal = use_signal(|| id.clone());

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = id_signal();
            async move {
                match api::quotes::get_quote(&client, &id).await {
                    Ok(loaded) => {
                        admin_note.set(loaded.admin_note.clone().unwrap_or_default());
                        // Pre-fill the pricing editor from existing lines.
                        let prices = loaded
                            .items
                            .iter()
                            .map(|item| {
                                loaded
                                    .pricing
                                    .iter()
                                    .find(|line| line.product_id == item.product_id)
                                    .map(|line| line.unit_price.to_string())
                                    .unwrap_or_default()
                            })
                            .collect();
                        unit_prices.set(prices);
                        quote.set(Some(loaded));
                    }
                    Err(e) => toast_error(&mut toasts, format!("Could not load the quote: {e}")),
                }
            }
        }
    });

    let Some(current) = quote() else {
        return rsx! {
            ui::components::Loading {}
        };
    };

    let apply_update = {
        let client = client.clone();
        move |update: QuoteUpdate, success: &'static str| {
            let client = client.clone();
            let id = id_signal();
            spawn(async move {
                updating.set(true);
                match api::quotes::update_quote(&client, &id, &update).await {
                    Ok(saved) => {
                        toast_success(&mut toasts, success);
                        admin_note.set(saved.admin_note.clone().unwrap_or_default());
                        quote.set(Some(saved));
                    }
                    Err(e) => toast_error(&mut toasts, format!("Update failed: {e}")),
                }
                updating.set(false);
            });
        }
    };

    let handle_save_pricing = {
        let current = current.clone();
        let mut apply_update = apply_update.clone();
        move |_| {
            let mut lines = Vec::new();
            for (index, item) in current.items.iter().enumerate() {
                let Some(unit_price) = unit_prices()
                    .get(index)
                    .and_then(|raw| raw.trim().parse::<f64>().ok())
                    .filter(|p| *p >= 0.0)
                else {
                    toast_error(&mut toasts, format!("Enter a unit price for {}", item.product_name));
                    return;
                };
                lines.push(QuoteLine {
                    product_id: item.product_id.clone(),
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    unit_price,
                    total_price: unit_price * item.quantity as f64,
                });
            }
            apply_update(
                QuoteUpdate {
                    status: Some(QuoteStatus::Priced),
                    pricing: Some(lines),
                    ..Default::default()
                },
                "Pricing saved",
            );
            show_pricing.set(false);
        }
    };

    let handle_send_email = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let id = id_signal();
            spawn(async move {
                sending.set(true);
                match api::quotes::send_quote_email(&client, &id).await {
                    Ok(()) => toast_success(&mut toasts, "Quote emailed to the customer"),
                    Err(e) => toast_error(&mut toasts, format!("Email failed: {e}")),
                }
                sending.set(false);
            });
        }
    };

    let pdf_url = api::quotes::quote_pdf_url(&client, &id_signal());

    rsx! {
        div { class: "page",
            Link { class: "btn btn-outline btn-sm", to: Route::AdminQuotes {}, "← Back to quotes" }

            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Quote #{ui::short_id(&current.id)}" }
                    p { class: "page-subtitle", {ui::datetime(&current.created_at)} }
                }
                Badge {
                    tone: quote_status_tone(current.status),
                    label: current.status.label().to_string(),
                }
            }

            div { class: "detail-columns",
                div { class: "card",
                    h2 { class: "section-title", "Customer" }
                    p { "{current.customer_name}" }
                    if let Some(company) = &current.company {
                        p { class: "muted", "{company}" }
                    }
                    p { class: "muted", "{current.email}" }
                    if let Some(phone) = &current.phone {
                        p { class: "muted", "{phone}" }
                    }
                    if let Some(message) = &current.message {
                        p { class: "quote-message", "\"{message}\"" }
                    }
                    if let Some(file_url) = &current.file_url {
                        a { class: "link-btn", href: "{file_url}", target: "_blank", "Attachment" }
                    }
                }

                div { class: "card",
                    h2 { class: "section-title", "Requested items" }
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Quantity" }
                                if show_pricing() {
                                    th { "Unit price (₺)" }
                                    th { "Line total" }
                                } else if !current.pricing.is_empty() {
                                    th { "Unit price" }
                                    th { "Line total" }
                                }
                            }
                        }
                        tbody {
                            for (index, item) in current.items.iter().enumerate() {
                                tr { key: "{item.product_id}",
                                    td { "{item.product_name}" }
                                    td { "{item.quantity}" }
                                    if show_pricing() {
                                        td {
                                            input {
                                                r#type: "number",
                                                min: "0",
                                                step: "0.01",
                                                value: unit_prices().get(index).cloned().unwrap_or_default(),
                                                oninput: move |evt: FormEvent| {
                                                    let mut prices = unit_prices();
                                                    if index < prices.len() {
                                                        prices[index] = evt.value();
                                                        unit_prices.set(prices);
                                                    }
                                                },
                                            }
                                        }
                                        td {
                                            {
                                                unit_prices()
                                                    .get(index)
                                                    .and_then(|raw| raw.trim().parse::<f64>().ok())
                                                    .map(|p| ui::money(p * item.quantity as f64))
                                                    .unwrap_or_else(|| "—".to_string())
                                            }
                                        }
                                    } else if let Some(line) = current.pricing.iter().find(|l| l.product_id == item.product_id) {
                                        td { {ui::money(line.unit_price)} }
                                        td { {ui::money(line.total_price)} }
                                    }
                                }
                            }
                        }
                    }
                    if let Some(total) = current.priced_total() {
                        p { class: "quote-total", "Total: {ui::money(total)}" }
                    }

                    if show_pricing() {
                        div { class: "form-actions",
                            button {
                                class: "btn btn-primary",
                                disabled: updating(),
                                onclick: handle_save_pricing,
                                "Save pricing"
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| show_pricing.set(false),
                                "Cancel"
                            }
                        }
                    } else {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| show_pricing.set(true),
                            if current.pricing.is_empty() { "Enter pricing" } else { "Edit pricing" }
                        }
                    }
                }
            }

            div { class: "card",
                h2 { class: "section-title", "Workflow" }
                div { class: "field",
                    label { "Internal note" }
                    textarea {
                        rows: 3,
                        value: admin_note(),
                        oninput: move |evt: FormEvent| admin_note.set(evt.value()),
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        disabled: updating() || current.status == QuoteStatus::Reviewing,
                        onclick: {
                            let mut apply_update = apply_update.clone();
                            move |_| apply_update(
                                QuoteUpdate {
                                    status: Some(QuoteStatus::Reviewing),
                                    admin_note: Some(admin_note()),
                                    ..Default::default()
                                },
                                "Marked as in review",
                            )
                        },
                        "Mark in review"
                    }
                    button {
                        class: "btn btn-success",
                        disabled: updating() || current.status == QuoteStatus::Approved,
                        onclick: {
                            let mut apply_update = apply_update.clone();
                            move |_| apply_update(
                                QuoteUpdate {
                                    status: Some(QuoteStatus::Approved),
                                    admin_note: Some(admin_note()),
                                    ..Default::default()
                                },
                                "Quote approved",
                            )
                        },
                        "Approve"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: updating() || current.status == QuoteStatus::Rejected,
                        onclick: {
                            let mut apply_update = apply_update.clone();
                            move |_| apply_update(
                                QuoteUpdate {
                                    status: Some(QuoteStatus::Rejected),
                                    admin_note: Some(admin_note()),
                                    ..Default::default()
                                },
                                "Quote rejected",
                            )
                        },
                        "Reject"
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: updating(),
                        onclick: {
                            let mut apply_update = apply_update.clone();
                            move |_| apply_update(
                                QuoteUpdate {
                                    admin_note: Some(admin_note()),
                                    ..Default::default()
                                },
                                "Note saved",
                            )
                        },
                        "Save note"
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: {
                            let pdf_url = pdf_url.clone();
                            move |_| open_url(&pdf_url)
                        },
                        "Download PDF"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: sending(),
                        onclick: handle_send_email,
                        if sending() { "Sending..." } else { "Email quote to customer" }
                    }
                }
            }
        }
    }
}
