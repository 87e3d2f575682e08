use dioxus::prelude::*;

use api::models::Quote;
use ui::components::{quote_status_tone, Badge};
use ui::{customer_signed_out, use_api, use_customer_auth, use_store};

use crate::Route;

/// The signed-in customer's own quote history.
#[component]
pub fn CustomerPanel() -> Element {
    let client = use_api();
    let auth = use_customer_auth();
    let shop_store = use_store();
    let nav = use_navigator();

    let mut quotes = use_signal(Vec::<Quote>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        let email = auth().customer.as_ref().map(|c| c.email.clone());
        async move {
            if let Some(email) = email {
                if let Ok(loaded) = api::quotes::customer_quotes(&client, &email).await {
                    quotes.set(loaded);
                }
            }
            loading.set(false);
        }
    });

    let Some(session) = auth().customer else {
        nav.replace(Route::CustomerLogin {});
        return rsx! {};
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "My quote requests" }
                    p { class: "page-subtitle", "{session.name} · {session.email}" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: {
                        let shop_store = shop_store.clone();
                        move |_| {
                            customer_signed_out(auth, &shop_store);
                            nav.push(Route::Home {});
                        }
                    },
                    "Sign out"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if quotes().is_empty() {
                ui::components::EmptyState { message: "You have not requested any quotes yet" }
            } else {
                div { class: "quote-list",
                    for quote in quotes() {
                        div { key: "{quote.id}", class: "card quote-card",
                            div { class: "quote-card-header",
                                span { class: "quote-id", "#{ui::short_id(&quote.id)}" }
                                Badge { tone: quote_status_tone(quote.status), label: quote.status.label().to_string() }
                                span { class: "muted", {ui::date(&quote.created_at)} }
                            }
                            div { class: "chip-row",
                                for item in &quote.items {
                                    span { class: "chip", "{item.product_name} ×{item.quantity}" }
                                }
                            }
                            if let Some(total) = quote.priced_total() {
                                p { class: "quote-total", "Quoted total: {ui::money(total)}" }
                            }
                            if let Some(note) = &quote.admin_note {
                                p { class: "muted", "Note: {note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
