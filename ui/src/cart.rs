//! Quote cart context. The cart itself lives in `store::Cart`; this module
//! only wires it into the component tree and persists every mutation.

use dioxus::prelude::*;
use store::{Cart, Store};

use crate::use_store;

pub fn use_quote_cart() -> Signal<Cart> {
    use_context::<Signal<Cart>>()
}

#[component]
pub fn CartProvider(children: Element) -> Element {
    let store = use_store();
    let cart = use_signal(|| Cart::load(&store));
    use_context_provider(|| cart);

    rsx! {
        {children}
    }
}

/// Apply a mutation and persist the result in one step.
pub fn mutate_cart(mut cart: Signal<Cart>, store: &Store, mutate: impl FnOnce(&mut Cart)) {
    let mut guard = cart.write();
    mutate(&mut guard);
    guard.save(store);
}
