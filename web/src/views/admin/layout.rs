use dioxus::prelude::*;

use ui::{admin_signed_out, use_admin_auth, use_store};

use crate::Route;

/// Admin shell: sidebar navigation plus the routed content. Anyone without a
/// stored session is pushed to the login form.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_admin_auth();
    let admin_store = use_store();
    let nav = use_navigator();

    if !auth().is_authenticated() {
        nav.replace(Route::AdminLogin {});
        return rsx! {};
    }

    let username = auth().username().unwrap_or_default().to_string();

    rsx! {
        div { class: "admin-shell",
            aside { class: "admin-sidebar",
                div { class: "sidebar-title", "QuoteDesk Admin" }

                nav { class: "sidebar-nav",
                    div { class: "sidebar-group", "Overview" }
                    Link { class: "sidebar-link", to: Route::AdminDashboard {}, "Dashboard" }
                    Link { class: "sidebar-link", to: Route::AdminVisitors {}, "Visitors" }

                    div { class: "sidebar-group", "Catalog" }
                    Link { class: "sidebar-link", to: Route::AdminProducts {}, "Products" }
                    Link { class: "sidebar-link", to: Route::AdminCategories {}, "Categories" }
                    Link { class: "sidebar-link", to: Route::AdminBrands {}, "Brands" }
                    Link { class: "sidebar-link", to: Route::AdminCampaigns {}, "Campaigns" }

                    div { class: "sidebar-group", "Sales" }
                    Link { class: "sidebar-link", to: Route::AdminQuotes {}, "Quotes" }
                    Link { class: "sidebar-link", to: Route::AdminCustomers {}, "Customers" }
                    Link { class: "sidebar-link", to: Route::AdminMessages {}, "Messages" }

                    div { class: "sidebar-group", "Operations" }
                    Link { class: "sidebar-link", to: Route::AdminVehicles {}, "Fleet" }
                    Link { class: "sidebar-link", to: Route::AdminFaqs {}, "FAQ" }
                    Link { class: "sidebar-link", to: Route::AdminUsers {}, "Staff" }
                    Link { class: "sidebar-link", to: Route::AdminSettings {}, "Settings" }
                    Link { class: "sidebar-link", to: Route::AdminSecurity {}, "Security" }
                }

                div { class: "admin-user",
                    span { "{username}" }
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: {
                            let admin_store = admin_store.clone();
                            move |_| {
                                admin_signed_out(auth, &admin_store);
                                nav.push(Route::AdminLogin {});
                            }
                        },
                        "Log out"
                    }
                }
            }

            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/admin` to the dashboard.
#[component]
pub fn AdminHome() -> Element {
    let nav = use_navigator();
    nav.replace(Route::AdminDashboard {});
    rsx! {}
}
