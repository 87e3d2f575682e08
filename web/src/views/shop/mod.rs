//! Customer-facing storefront views.

mod brands;
mod cart;
mod contact;
mod detail;
mod home;
mod layout;
mod login;
mod panel;
mod products;
mod quote_form;
mod register;
mod reset_password;

pub use brands::Brands;
pub use cart::QuoteCart;
pub use contact::Contact;
pub use detail::ProductDetail;
pub use home::Home;
pub use layout::StorefrontLayout;
pub use login::CustomerLogin;
pub use panel::CustomerPanel;
pub use products::Products;
pub use quote_form::QuoteForm;
pub use register::CustomerRegister;
pub use reset_password::ResetPassword;
