use dioxus::prelude::*;

use api::models::CustomerLoginRequest;
use ui::{customer_signed_in, toast_success, use_api, use_customer_auth, use_store, use_toasts};

use crate::Route;

#[component]
pub fn CustomerLogin() -> Element {
    let client = use_api();
    let auth = use_customer_auth();
    let shop_store = use_store();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut reset_sent = use_signal(|| false);

    // Already signed in; nothing to do here.
    if auth().is_authenticated() {
        nav.replace(Route::CustomerPanel {});
        return rsx! {};
    }

    let handle_submit = {
        let client = client.clone();
        let shop_store = shop_store.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let shop_store = shop_store.clone();
            spawn(async move {
                loading.set(true);
                error.set(None);
                let request = CustomerLoginRequest {
                    email: email().trim().to_string(),
                    password: password(),
                };
                match api::customers::login_customer(&client, &request).await {
                    Ok(session) => {
                        customer_signed_in(auth, &shop_store, session);
                        toast_success(&mut toasts, "Welcome back");
                        nav.push(Route::CustomerPanel {});
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }
    };

    let handle_forgot = move |_| {
        let client = client.clone();
        spawn(async move {
            if email().trim().is_empty() {
                error.set(Some("Enter your email first".to_string()));
                return;
            }
            match api::customers::forgot_customer_password(&client, email().trim()).await {
                Ok(()) => reset_sent.set(true),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "auth-card",
                h1 { class: "page-title", "Sign in" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                if reset_sent() {
                    div { class: "form-info", "If that address is registered, a reset link is on its way." }
                }

                form { class: "form-grid", onsubmit: handle_submit,
                    div { class: "field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
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
                }

                div { class: "auth-links",
                    button { class: "link-btn", onclick: handle_forgot, "Forgot password?" }
                    Link { class: "link-btn", to: Route::CustomerRegister {}, "Create an account" }
                }
            }
        }
    }
}
