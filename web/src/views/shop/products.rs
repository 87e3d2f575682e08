use dioxus::prelude::*;

use api::models::{Category, Product};
use ui::{use_api, use_visit_tracker};

use super::home::ProductCard;

/// Catalog grid with a category filter and client-side name search.
#[component]
pub fn Products() -> Element {
    use_visit_tracker("/products");

    let client = use_api();
    let mut products = use_signal(Vec::<Product>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut category_filter = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        let selected = category_filter();
        async move {
            loading.set(true);
            if categories().is_empty() {
                if let Ok(c) = api::catalog::list_categories(&client).await {
                    categories.set(c);
                }
            }
            if let Ok(p) = api::catalog::list_products(&client, selected.as_deref()).await {
                products.set(p.into_iter().filter(|p| p.is_active).collect());
            }
            loading.set(false);
        }
    });

    let term = search().to_lowercase();
    let visible: Vec<Product> = products()
        .into_iter()
        .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
        .collect();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Products" }
            }

            div { class: "toolbar",
                input {
                    class: "search-box",
                    r#type: "text",
                    placeholder: "Search products...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                div { class: "filter-row",
                    button {
                        class: if category_filter().is_none() { "filter-btn filter-btn-active" } else { "filter-btn" },
                        onclick: move |_| category_filter.set(None),
                        "All"
                    }
                    for category in categories() {
                        button {
                            key: "{category.id}",
                            class: if category_filter().as_deref() == Some(category.slug.as_str()) { "filter-btn filter-btn-active" } else { "filter-btn" },
                            onclick: {
                                let slug = category.slug.clone();
                                move |_| category_filter.set(Some(slug.clone()))
                            },
                            "{category.name}"
                        }
                    }
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if visible.is_empty() {
                ui::components::EmptyState { message: "No products match your search" }
            } else {
                div { class: "product-grid",
                    for product in visible {
                        ProductCard { key: "{product.id}", product }
                    }
                }
            }
        }
    }
}
