use dioxus::prelude::*;

use api::models::ResetPasswordRequest;
use ui::use_api;

use crate::Route;

/// Landing page for the password-reset link emailed to customers. The token
/// arrives as a query parameter.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let client = use_api();
    let nav = use_navigator();

    let mut password = use_signal(String::new);
    let mut repeat = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = {
        let token = token.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if password().len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if password() != repeat() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            let client = client.clone();
            let token = token.clone();
            spawn(async move {
                loading.set(true);
                error.set(None);
                let request = ResetPasswordRequest {
                    token,
                    password: password(),
                };
                match api::customers::reset_customer_password(&client, &request).await {
                    Ok(()) => done.set(true),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "auth-card",
                h1 { class: "page-title", "Choose a new password" }

                if done() {
                    div { class: "form-info", "Your password has been reset. You can sign in now." }
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: move |_| { nav.push(Route::CustomerLogin {}); },
                        "Go to sign in"
                    }
                } else {
                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }
                    form { class: "form-grid", onsubmit: handle_submit,
                        div { class: "field",
                            label { "New password" }
                            input {
                                r#type: "password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                        div { class: "field",
                            label { "Repeat new password" }
                            input {
                                r#type: "password",
                                value: repeat(),
                                oninput: move |evt: FormEvent| repeat.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Saving..." } else { "Reset password" }
                        }
                    }
                }
            }
        }
    }
}
