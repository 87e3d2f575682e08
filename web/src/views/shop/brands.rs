use dioxus::prelude::*;

use api::models::Brand;
use ui::{use_api, use_visit_tracker};

/// Public brand directory.
#[component]
pub fn Brands() -> Element {
    use_visit_tracker("/brands");

    let client = use_api();
    let mut brands = use_signal(Vec::<Brand>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            if let Ok(loaded) = api::catalog::list_brands(&client).await {
                brands.set(loaded);
            }
            loading.set(false);
        }
    });

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Brands" }
                p { class: "page-subtitle", "Manufacturers we source and quote" }
            }

            if loading() {
                ui::components::Loading {}
            } else if brands().is_empty() {
                ui::components::EmptyState { message: "No brands yet" }
            } else {
                div { class: "card-grid",
                    for brand in brands() {
                        div { key: "{brand.id}", class: "card",
                            if let Some(logo) = &brand.logo_url {
                                img { class: "brand-logo-img", src: "{logo}", alt: "{brand.name}" }
                            }
                            h3 { class: "card-title", "{brand.name}" }
                            if let Some(text) = &brand.description {
                                p { class: "card-text", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
