use dioxus::prelude::*;

use ui::{AppProviders, ToastHost};
use views::{
    AdminBalance, AdminBrands, AdminCampaigns, AdminCategories, AdminCustomers, AdminDashboard,
    AdminFaqs, AdminHome, AdminLayout, AdminLogin, AdminMessages, AdminProducts, AdminQuoteDetail,
    AdminQuotes, AdminSecurity, AdminSettings, AdminUsers, AdminVehicles, AdminVisitors, Brands,
    Contact, CustomerLogin, CustomerPanel, CustomerRegister, Home, ProductDetail, Products,
    QuoteCart, QuoteForm, ResetPassword, StorefrontLayout,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(StorefrontLayout)]
        #[route("/")]
        Home {},
        #[route("/products")]
        Products {},
        #[route("/products/:id")]
        ProductDetail { id: String },
        #[route("/brands")]
        Brands {},
        #[route("/contact")]
        Contact {},
        #[route("/cart")]
        QuoteCart {},
        #[route("/request-quote")]
        QuoteForm {},
        #[route("/login")]
        CustomerLogin {},
        #[route("/register")]
        CustomerRegister {},
        #[route("/reset-password?:token")]
        ResetPassword { token: String },
        #[route("/account")]
        CustomerPanel {},
    #[end_layout]
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminHome {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/categories")]
        AdminCategories {},
        #[route("/admin/products")]
        AdminProducts {},
        #[route("/admin/brands")]
        AdminBrands {},
        #[route("/admin/campaigns")]
        AdminCampaigns {},
        #[route("/admin/vehicles")]
        AdminVehicles {},
        #[route("/admin/customers")]
        AdminCustomers {},
        #[route("/admin/customers/:id/balance")]
        AdminBalance { id: String },
        #[route("/admin/quotes")]
        AdminQuotes {},
        #[route("/admin/quotes/:id")]
        AdminQuoteDetail { id: String },
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/faqs")]
        AdminFaqs {},
        #[route("/admin/messages")]
        AdminMessages {},
        #[route("/admin/visitors")]
        AdminVisitors {},
        #[route("/admin/settings")]
        AdminSettings {},
        #[route("/admin/security")]
        AdminSecurity {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProviders {
            ToastHost {}
            Router::<Route> {}
        }
    }
}
