use dioxus::prelude::*;

use api::models::CustomerRegisterRequest;
use ui::{customer_signed_in, toast_success, use_api, use_customer_auth, use_store, use_toasts};

use crate::Route;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[component]
pub fn CustomerRegister() -> Element {
    let client = use_api();
    let auth = use_customer_auth();
    let shop_store = use_store();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if name().trim().is_empty() || email().trim().is_empty() {
            error.set(Some("Name and email are required".to_string()));
            return;
        }
        if password().len() < 8 {
            error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }

        let client = client.clone();
        let shop_store = shop_store.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            let request = CustomerRegisterRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                company: optional(company()),
                phone: optional(phone()),
            };
            match api::customers::register_customer(&client, &request).await {
                Ok(session) => {
                    customer_signed_in(auth, &shop_store, session);
                    toast_success(&mut toasts, "Account created");
                    nav.push(Route::CustomerPanel {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "auth-card",
                h1 { class: "page-title", "Create an account" }
                p { class: "page-subtitle", "Track your quote requests in one place" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form { class: "form-grid", onsubmit: handle_submit,
                    div { class: "field",
                        label { "Name *" }
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Email *" }
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Password *" }
                        input {
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Company" }
                        input {
                            r#type: "text",
                            value: company(),
                            oninput: move |evt: FormEvent| company.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Phone" }
                        input {
                            r#type: "tel",
                            value: phone(),
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating..." } else { "Create account" }
                    }
                }

                div { class: "auth-links",
                    Link { class: "link-btn", to: Route::CustomerLogin {}, "Already registered? Sign in" }
                }
            }
        }
    }
}
