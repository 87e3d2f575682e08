use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
        }
    }
}

/// Centered placeholder for empty lists.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}
