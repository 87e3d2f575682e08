use dioxus::prelude::*;

use api::models::SiteSettings;
use ui::{use_api, use_customer_auth, use_quote_cart};

use crate::Route;

/// Storefront shell: header with navigation and the cart badge, footer with
/// company identity from the site settings.
#[component]
pub fn StorefrontLayout() -> Element {
    let client = use_api();
    let cart = use_quote_cart();
    let customer = use_customer_auth();
    let mut settings = use_signal(SiteSettings::default);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            if let Ok(loaded) = api::content::get_settings(&client).await {
                settings.set(loaded);
            }
        }
    });

    let company = settings()
        .company_name
        .unwrap_or_else(|| "QuoteDesk".to_string());
    let item_count = cart().item_count();

    rsx! {
        header { class: "storefront-header",
            div { class: "header-inner",
                Link { class: "brand-logo", to: Route::Home {}, "{company}" }
                nav { class: "nav-links",
                    Link { class: "nav-link", to: Route::Products {}, "Products" }
                    Link { class: "nav-link", to: Route::Brands {}, "Brands" }
                    Link { class: "nav-link", to: Route::Contact {}, "Contact" }
                    Link { class: "nav-link", to: Route::QuoteCart {},
                        "Quote cart"
                        if item_count > 0 {
                            span { class: "cart-badge", "{item_count}" }
                        }
                    }
                    if customer().is_authenticated() {
                        Link { class: "nav-link", to: Route::CustomerPanel {}, "My quotes" }
                    } else {
                        Link { class: "nav-link", to: Route::CustomerLogin {}, "Sign in" }
                    }
                }
            }
        }

        main { class: "storefront-main",
            Outlet::<Route> {}
        }

        footer { class: "storefront-footer",
            div { class: "footer-grid",
                div {
                    h4 { "{company}" }
                    if let Some(address) = settings().company_address {
                        p { class: "muted", "{address}" }
                    }
                }
                div {
                    if let Some(phone) = settings().company_phone {
                        p { class: "muted", "{phone}" }
                    }
                    if let Some(email) = settings().company_email {
                        p { class: "muted", "{email}" }
                    }
                    if let Some(website) = settings().company_website {
                        p { class: "muted", "{website}" }
                    }
                }
            }
        }
    }
}
