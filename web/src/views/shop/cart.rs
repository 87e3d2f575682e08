use dioxus::prelude::*;

use ui::{mutate_cart, use_quote_cart, use_store, use_visit_tracker};

use crate::Route;

/// The quote cart: line list with quantity steppers, remove/clear, and the
/// hand-off to the quote request form.
#[component]
pub fn QuoteCart() -> Element {
    use_visit_tracker("/cart");

    let cart = use_quote_cart();
    let shop_store = use_store();

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "Quote cart" }
                p { class: "page-subtitle", "Collect products, then request pricing for all of them at once" }
            }

            if cart().is_empty() {
                ui::components::EmptyState { message: "Your quote cart is empty" }
                div { class: "form-actions",
                    Link { class: "btn btn-primary", to: Route::Products {}, "Browse products" }
                }
            } else {
                div { class: "cart-list",
                    for line in cart().lines {
                        div { key: "{line.product_id}", class: "cart-line",
                            if let Some(src) = &line.image {
                                img { class: "cart-thumb", src: "{src}", alt: "{line.name}" }
                            } else {
                                div { class: "cart-thumb product-image-placeholder" }
                            }
                            span { class: "cart-name", "{line.name}" }
                            div { class: "qty-stepper",
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: {
                                        let shop_store = shop_store.clone();
                                        let id = line.product_id.clone();
                                        let quantity = line.quantity;
                                        move |_| mutate_cart(cart, &shop_store, |c| {
                                            c.set_quantity(&id, quantity.saturating_sub(1));
                                        })
                                    },
                                    "−"
                                }
                                span { class: "qty-value", "{line.quantity}" }
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: {
                                        let shop_store = shop_store.clone();
                                        let id = line.product_id.clone();
                                        let quantity = line.quantity;
                                        move |_| mutate_cart(cart, &shop_store, |c| {
                                            c.set_quantity(&id, quantity + 1);
                                        })
                                    },
                                    "+"
                                }
                            }
                            button {
                                class: "btn btn-danger btn-sm",
                                onclick: {
                                    let shop_store = shop_store.clone();
                                    let id = line.product_id.clone();
                                    move |_| mutate_cart(cart, &shop_store, |c| c.remove(&id))
                                },
                                "Remove"
                            }
                        }
                    }
                }

                div { class: "cart-footer",
                    span { class: "muted", "{cart().item_count()} items in total" }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-outline",
                            onclick: {
                                let shop_store = shop_store.clone();
                                move |_| mutate_cart(cart, &shop_store, |c| c.clear())
                            },
                            "Clear cart"
                        }
                        Link { class: "btn btn-primary", to: Route::QuoteForm {}, "Request a quote" }
                    }
                }
            }
        }
    }
}
