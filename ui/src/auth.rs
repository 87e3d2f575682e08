//! Session contexts for the two audiences: staff (Basic credentials) and
//! storefront customers.
//!
//! Both providers hydrate from browser storage on creation, so a reload keeps
//! the user logged in. Login and logout mutate the signal *and* the store;
//! the signal is the single source the views render from.

use api::models::{Credentials, CustomerSession};
use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::{session, Store};

/// One component wiring every app-wide context: storage, API client, both
/// auth providers, the quote cart, and toasts.
#[component]
pub fn AppProviders(children: Element) -> Element {
    use_context_provider(Store::browser);
    use_context_provider(|| ApiClient::new(ApiConfig::from_env()));
    use_context_provider(|| Signal::new(crate::toast::Toasts::default()));

    rsx! {
        AdminAuthProvider {
            CustomerAuthProvider {
                crate::cart::CartProvider {
                    {children}
                }
            }
        }
    }
}

pub fn use_store() -> Store {
    use_context::<Store>()
}

/// Unauthenticated API client for the public surface.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// API client signing requests with the logged-in admin's credentials.
/// Falls back to the bare client when nobody is logged in; the backend
/// answers 401 and the views route to the login form.
pub fn use_admin_api() -> ApiClient {
    let client = use_api();
    let auth = use_admin_auth();
    match auth().admin {
        Some(credentials) => client.with_credentials(credentials),
        None => client,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminAuthState {
    pub admin: Option<Credentials>,
}

impl AdminAuthState {
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.admin.as_ref().map(|c| c.username.as_str())
    }
}

pub fn use_admin_auth() -> Signal<AdminAuthState> {
    use_context::<Signal<AdminAuthState>>()
}

#[component]
pub fn AdminAuthProvider(children: Element) -> Element {
    let store = use_store();
    let state = use_signal(|| AdminAuthState {
        admin: session::load_admin(&store),
    });
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a successful admin login.
pub fn admin_signed_in(mut auth: Signal<AdminAuthState>, store: &Store, credentials: Credentials) {
    session::save_admin(store, &credentials);
    auth.set(AdminAuthState {
        admin: Some(credentials),
    });
}

pub fn admin_signed_out(mut auth: Signal<AdminAuthState>, store: &Store) {
    session::clear_admin(store);
    auth.set(AdminAuthState::default());
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerAuthState {
    pub customer: Option<CustomerSession>,
}

impl CustomerAuthState {
    pub fn is_authenticated(&self) -> bool {
        self.customer.is_some()
    }
}

pub fn use_customer_auth() -> Signal<CustomerAuthState> {
    use_context::<Signal<CustomerAuthState>>()
}

#[component]
pub fn CustomerAuthProvider(children: Element) -> Element {
    let store = use_store();
    let state = use_signal(|| CustomerAuthState {
        customer: session::load_customer(&store),
    });
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

pub fn customer_signed_in(
    mut auth: Signal<CustomerAuthState>,
    store: &Store,
    customer: CustomerSession,
) {
    session::save_customer(store, &customer);
    auth.set(CustomerAuthState {
        customer: Some(customer),
    });
}

pub fn customer_signed_out(mut auth: Signal<CustomerAuthState>, store: &Store) {
    session::clear_customer(store);
    auth.set(CustomerAuthState::default());
}
