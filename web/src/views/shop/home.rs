use dioxus::prelude::*;

use api::models::{Campaign, Category, Faq, Product, SiteSettings};
use store::session;
use ui::components::open_url;
use ui::{use_api, use_store, use_visit_tracker};

use crate::Route;

#[component]
pub fn Home() -> Element {
    use_visit_tracker("/");

    let client = use_api();
    let mut settings = use_signal(SiteSettings::default);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut featured = use_signal(Vec::<Product>::new);
    let mut faqs = use_signal(Vec::<Faq>::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let (loaded_settings, loaded_categories, loaded_products, loaded_faqs) = futures::join!(
                api::content::get_settings(&client),
                api::catalog::list_categories(&client),
                api::catalog::list_products(&client, None),
                api::content::list_faqs(&client),
            );
            if let Ok(s) = loaded_settings {
                settings.set(s);
            }
            if let Ok(c) = loaded_categories {
                categories.set(c);
            }
            if let Ok(p) = loaded_products {
                featured.set(
                    p.into_iter()
                        .filter(|p| p.is_active && p.is_featured)
                        .collect(),
                );
            }
            if let Ok(mut f) = loaded_faqs {
                f.retain(|faq| faq.is_active);
                f.sort_by_key(|faq| faq.order);
                faqs.set(f);
            }
        }
    });

    let hero_title = settings()
        .hero_title
        .unwrap_or_else(|| "Request volume pricing in minutes".to_string());
    let hero_subtitle = settings()
        .hero_subtitle
        .unwrap_or_else(|| "Browse the catalog and send your quote request.".to_string());

    rsx! {
        CampaignPopup {}

        section { class: "hero",
            h1 { class: "hero-title", "{hero_title}" }
            p { class: "hero-sub", "{hero_subtitle}" }
            Link { class: "btn btn-primary", to: Route::Products {}, "Browse products" }
        }

        if !categories().is_empty() {
            section { class: "section",
                h2 { class: "section-title", "Categories" }
                div { class: "chip-row",
                    for category in categories() {
                        Link {
                            key: "{category.id}",
                            class: "chip",
                            to: Route::Products {},
                            "{category.name}"
                        }
                    }
                }
            }
        }

        if !featured().is_empty() {
            section { class: "section",
                h2 { class: "section-title", "Featured products" }
                div { class: "product-grid",
                    for product in featured() {
                        ProductCard { key: "{product.id}", product }
                    }
                }
            }
        }

        if let Some(about) = settings().about_text {
            section { class: "section",
                if let Some(title) = settings().about_title {
                    h2 { class: "section-title", "{title}" }
                }
                p { class: "muted", "{about}" }
            }
        }

        if !faqs().is_empty() {
            section { class: "section",
                h2 { class: "section-title", "Frequently asked questions" }
                div { class: "faq-list",
                    for faq in faqs() {
                        div { key: "{faq.id}", class: "card",
                            h3 { class: "card-title", "{faq.question}" }
                            p { class: "card-text", "{faq.answer}" }
                        }
                    }
                }
            }
        }
    }
}

/// Card used on the home page and the product list.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let image = product.images.first().cloned();
    rsx! {
        Link {
            class: "product-card",
            to: Route::ProductDetail { id: product.id.clone() },
            if let Some(src) = image {
                img { class: "product-image", src: "{src}", alt: "{product.name}" }
            } else {
                div { class: "product-image product-image-placeholder" }
            }
            div { class: "product-info",
                h3 { "{product.name}" }
                if let Some(range) = &product.price_range {
                    span { class: "price-tag", "{range}" }
                }
            }
        }
    }
}

/// Promotional popup, shown at most once per tab session and only while the
/// backend reports a running campaign.
#[component]
fn CampaignPopup() -> Element {
    let client = use_api();
    let store = use_store();
    let mut campaign = use_signal(|| Option::<Campaign>::None);

    let _loader = use_resource({
        let store = store.clone();
        move || {
            let client = client.clone();
            let store = store.clone();
            async move {
                if session::campaign_seen(&store) {
                    return;
                }
                if let Ok(Some(active)) = api::content::active_campaign(&client).await {
                    campaign.set(Some(active));
                }
            }
        }
    });

    let dismiss = {
        let store = store.clone();
        move |_| {
            session::mark_campaign_seen(&store);
            campaign.set(None);
        }
    };

    let Some(active) = campaign() else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-overlay", onclick: dismiss.clone(),
            div {
                class: "modal-card popup-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button { class: "modal-close", onclick: dismiss.clone(), "×" }
                h2 { "{active.title}" }
                p { class: "muted", "{active.description}" }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: {
                        let store = store.clone();
                        let url = active.button_url.clone();
                        move |_| {
                            session::mark_campaign_seen(&store);
                            campaign.set(None);
                            open_url(&url);
                        }
                    },
                    "{active.button_label}"
                }
            }
        }
    }
}
