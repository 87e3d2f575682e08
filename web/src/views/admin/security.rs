use dioxus::prelude::*;

use api::models::{ChangePasswordRequest, Credentials};
use ui::{admin_signed_in, toast_error, toast_success, use_admin_api, use_admin_auth, use_store, use_toasts};

/// Change the logged-in admin's password. On success the stored credentials
/// are updated in place so later requests keep working.
#[component]
pub fn AdminSecurity() -> Element {
    let client = use_admin_api();
    let auth = use_admin_auth();
    let admin_store = use_store();
    let mut toasts = use_toasts();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut repeat_password = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if new_password().len() < 8 {
            toast_error(&mut toasts, "The new password must be at least 8 characters");
            return;
        }
        if new_password() != repeat_password() {
            toast_error(&mut toasts, "Passwords do not match");
            return;
        }

        let client = client.clone();
        let admin_store = admin_store.clone();
        spawn(async move {
            saving.set(true);
            let request = ChangePasswordRequest {
                current_password: current_password(),
                new_password: new_password(),
            };
            match api::admin::change_password(&client, &request).await {
                Ok(()) => {
                    if let Some(username) = auth().username().map(str::to_string) {
                        admin_signed_in(
                            auth,
                            &admin_store,
                            Credentials {
                                username,
                                password: new_password(),
                            },
                        );
                    }
                    toast_success(&mut toasts, "Password updated");
                    current_password.set(String::new());
                    new_password.set(String::new());
                    repeat_password.set(String::new());
                }
                Err(e) => toast_error(&mut toasts, format!("Password change failed: {e}")),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "Security" }
            }

            form { class: "form-grid", onsubmit: handle_submit,
                div { class: "field",
                    label { "Current password" }
                    input {
                        r#type: "password",
                        value: current_password(),
                        oninput: move |evt: FormEvent| current_password.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "New password" }
                    input {
                        r#type: "password",
                        value: new_password(),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "Repeat new password" }
                    input {
                        r#type: "password",
                        value: repeat_password(),
                        oninput: move |evt: FormEvent| repeat_password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Updating..." } else { "Change password" }
                }
            }
        }
    }
}
