use dioxus::prelude::*;

use api::models::Credentials;
use ui::{admin_signed_in, use_admin_auth, use_api, use_store};

use crate::Route;

/// Staff login. The backend only verifies the pair; on success the
/// credentials are persisted and replayed as Basic auth from then on.
#[component]
pub fn AdminLogin() -> Element {
    let client = use_api();
    let auth = use_admin_auth();
    let admin_store = use_store();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut reset_sent = use_signal(|| false);
    let mut show_forgot = use_signal(|| false);
    let mut reset_email = use_signal(String::new);

    if auth().is_authenticated() {
        nav.replace(Route::AdminDashboard {});
        return rsx! {};
    }

    let handle_submit = {
        let client = client.clone();
        let admin_store = admin_store.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let admin_store = admin_store.clone();
            spawn(async move {
                loading.set(true);
                error.set(None);
                let credentials = Credentials {
                    username: username().trim().to_string(),
                    password: password(),
                };
                match api::admin::login(&client, &credentials).await {
                    Ok(()) => {
                        admin_signed_in(auth, &admin_store, credentials);
                        nav.push(Route::AdminDashboard {});
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }
    };

    let handle_forgot = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            match api::admin::forgot_password(&client, reset_email().trim()).await {
                Ok(()) => {
                    reset_sent.set(true);
                    show_forgot.set(false);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div { class: "admin-login-page",
            div { class: "auth-card",
                h1 { class: "page-title", "Back-office sign in" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                if reset_sent() {
                    div { class: "form-info", "Password reset instructions sent." }
                }

                if show_forgot() {
                    form { class: "form-grid", onsubmit: handle_forgot,
                        div { class: "field",
                            label { "Account email" }
                            input {
                                r#type: "email",
                                value: reset_email(),
                                oninput: move |evt: FormEvent| reset_email.set(evt.value()),
                            }
                        }
                        button { class: "btn btn-primary btn-block", r#type: "submit", "Send reset link" }
                        button {
                            class: "link-btn",
                            r#type: "button",
                            onclick: move |_| show_forgot.set(false),
                            "Back to sign in"
                        }
                    }
                } else {
                    form { class: "form-grid", onsubmit: handle_submit,
                        div { class: "field",
                            label { "Username" }
                            input {
                                r#type: "text",
                                value: username(),
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                        }
                        div { class: "field",
                            label { "Password" }
                            input {
                                r#type: "password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                        button {
                            class: "link-btn",
                            r#type: "button",
                            onclick: move |_| show_forgot.set(true),
                            "Forgot password?"
                        }
                    }
                }
            }
        }
    }
}
