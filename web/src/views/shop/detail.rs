use dioxus::prelude::*;

use api::models::Product;
use store::CartLine;
use ui::{mutate_cart, toast_success, use_api, use_quote_cart, use_store, use_toasts, use_visit_tracker};

use crate::Route;

/// Product page: gallery, specs, quantity selector, add-to-cart.
#[component]
pub fn ProductDetail(id: String) -> Element {
    use_visit_tracker("/products/detail");

    let client = use_api();
    let cart = use_quote_cart();
    let shop_store = use_store();
    let mut toasts = use_toasts();
    let mut product = use_signal(|| Option::<Product>::None);
    let mut selected_image = use_signal(|| 0usize);
    let mut quantity = use_signal(|| 1u32);

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let _loader = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            if let Ok(loaded) = api::catalog::get_product(&client, &id).await {
                quantity.set(loaded.minimum_quantity());
                selected_image.set(0);
                product.set(Some(loaded));
            }
        }
    });

    let Some(item) = product() else {
        return rsx! {
            ui::components::Loading {}
        };
    };

    let minimum = item.minimum_quantity();
    let image = item.images.get(selected_image()).cloned();

    rsx! {
        div { class: "page",
            div { class: "detail-grid",
                div { class: "gallery",
                    if let Some(src) = image {
                        img { class: "gallery-main", src: "{src}", alt: "{item.name}" }
                    } else {
                        div { class: "gallery-main product-image-placeholder" }
                    }
                    if item.images.len() > 1 {
                        div { class: "thumb-row",
                            for (index, src) in item.images.iter().enumerate() {
                                img {
                                    key: "{index}",
                                    class: if index == selected_image() { "thumb thumb-active" } else { "thumb" },
                                    src: "{src}",
                                    onclick: move |_| selected_image.set(index),
                                }
                            }
                        }
                    }
                }

                div { class: "detail-info",
                    h1 { class: "page-title", "{item.name}" }
                    if let Some(range) = &item.price_range {
                        span { class: "price-tag", "{range}" }
                    }
                    p { class: "muted", "{item.description}" }

                    if !item.variants.is_empty() {
                        div { class: "chip-row",
                            for variant in &item.variants {
                                span { class: "chip", "{variant}" }
                            }
                        }
                    }

                    div { class: "field",
                        label { "Quantity (minimum {minimum})" }
                        div { class: "qty-stepper",
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| {
                                    let next = quantity().saturating_sub(1).max(minimum);
                                    quantity.set(next);
                                },
                                "−"
                            }
                            span { class: "qty-value", "{quantity()}" }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| quantity.set(quantity() + 1),
                                "+"
                            }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        onclick: {
                            let item = item.clone();
                            let shop_store = shop_store.clone();
                            move |_| {
                                mutate_cart(cart, &shop_store, |c| {
                                    c.add(CartLine {
                                        product_id: item.id.clone(),
                                        name: item.name.clone(),
                                        image: item.images.first().cloned(),
                                        quantity: quantity(),
                                    });
                                });
                                toast_success(&mut toasts, format!("{} added to your quote cart", item.name));
                            }
                        },
                        "Add to quote cart"
                    }
                    Link { class: "btn btn-outline btn-block", to: Route::QuoteCart {}, "Go to quote cart" }
                }
            }
        }
    }
}
