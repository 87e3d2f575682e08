//! Transient notifications. Every request error and every successful
//! mutation surfaces here, mirroring how the views report outcomes.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<ToastEntry>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.next_id += 1;
        self.entries.push(ToastEntry {
            id: self.next_id,
            level,
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn toast_success(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    toasts.write().push(ToastLevel::Success, message);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    toasts.write().push(ToastLevel::Error, message);
}

/// Renders the toast stack; mount once near the app root.
/// Entries dismiss on click.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            for entry in toasts().entries {
                div {
                    key: "{entry.id}",
                    class: "toast {entry.level.class()}",
                    onclick: move |_| toasts.write().dismiss(entry.id),
                    "{entry.message}"
                }
            }
        }
    }
}
