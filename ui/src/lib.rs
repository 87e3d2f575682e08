//! This crate contains the shared UI infrastructure for the workspace:
//! context providers (API client, sessions, quote cart), toast notifications,
//! and the small components every view leans on.

pub mod components;

mod auth;
pub use auth::{
    admin_signed_in, admin_signed_out, customer_signed_in, customer_signed_out, use_admin_api,
    use_admin_auth, use_api, use_customer_auth, use_store, AdminAuthProvider, AdminAuthState,
    AppProviders, CustomerAuthProvider, CustomerAuthState,
};

mod cart;
pub use cart::{mutate_cart, use_quote_cart, CartProvider};

mod toast;
pub use toast::{toast_error, toast_success, use_toasts, ToastHost, ToastLevel, Toasts};

mod tracking;
pub use tracking::use_visit_tracker;

mod format;
pub use format::{date, datetime, money, parse_datetime_input, short_id, to_datetime_input};
