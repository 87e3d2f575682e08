use dioxus::prelude::*;

use api::models::{AdminUser, AdminUserInput};
use api::ApiClient;
use ui::components::{confirm, ModalOverlay};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

async fn reload(client: &ApiClient, mut users: Signal<Vec<AdminUser>>) {
    if let Ok(loaded) = api::admin::list_users(client).await {
        users.set(loaded);
    }
}

/// Staff accounts. New accounts need a password; on edit an empty password
/// field leaves the existing one in place.
#[component]
pub fn AdminUsers() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut users = use_signal(Vec::<AdminUser>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<AdminUser>::None);

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "admin".to_string());

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::admin::list_users(&client).await {
                    Ok(loaded) => users.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load staff accounts: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        username.set(String::new());
        email.set(String::new());
        password.set(String::new());
        role.set("admin".to_string());
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if username().trim().is_empty() || email().trim().is_empty() {
                toast_error(&mut toasts, "Username and email are required");
                return;
            }
            if editing().is_none() && password().len() < 8 {
                toast_error(&mut toasts, "Password must be at least 8 characters");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let input = AdminUserInput {
                    username: username().trim().to_string(),
                    email: email().trim().to_string(),
                    password: (!password().is_empty()).then(|| password()),
                    role: role(),
                    permissions: vec!["all".to_string()],
                };
                let result = match editing() {
                    Some(user) => api::admin::update_user(&client, &user.id, &input)
                        .await
                        .map(|_| "Account updated"),
                    None => api::admin::create_user(&client, &input)
                        .await
                        .map(|_| "Account created"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, users).await;
                        show_modal.set(false);
                        editing.set(None);
                        username.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        role.set("admin".to_string());
                    }
                    Err(e) => toast_error(&mut toasts, format!("Saving failed: {e}")),
                }
            });
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Staff" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New account"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if users().is_empty() {
                ui::components::EmptyState { message: "No staff accounts yet" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Role" }
                                th { "Created" }
                                th { "" }
                            }
                        }
                        tbody {
                            for user in users() {
                                tr { key: "{user.id}",
                                    td { "{user.username}" }
                                    td { "{user.email}" }
                                    td { "{user.role}" }
                                    td {
                                        {user.created_at.map(|dt| ui::date(&dt)).unwrap_or_else(|| "—".to_string())}
                                    }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-outline btn-sm",
                                                onclick: {
                                                    let user = user.clone();
                                                    move |_| {
                                                        username.set(user.username.clone());
                                                        email.set(user.email.clone());
                                                        password.set(String::new());
                                                        role.set(user.role.clone());
                                                        editing.set(Some(user.clone()));
                                                        show_modal.set(true);
                                                    }
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = user.id.clone();
                                                    move |_| {
                                                        if !confirm("Delete this account?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match api::admin::delete_user(&client, &id).await {
                                                                Ok(()) => {
                                                                    toast_success(&mut toasts, "Account deleted");
                                                                    reload(&client, users).await;
                                                                }
                                                                Err(e) => toast_error(&mut toasts, format!("Delete failed: {e}")),
                                                            }
                                                        });
                                                    }
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_modal() {
                ModalOverlay {
                    on_close: move |_| close_modal(),
                    div { class: "modal-body",
                        h2 { class: "modal-title",
                            if editing().is_some() { "Edit account" } else { "New account" }
                        }
                        form { class: "form-grid", onsubmit: handle_submit,
                            div { class: "field",
                                label { "Username *" }
                                input {
                                    r#type: "text",
                                    value: username(),
                                    oninput: move |evt: FormEvent| username.set(evt.value()),
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
                                label {
                                    if editing().is_some() { "New password (leave empty to keep)" } else { "Password *" }
                                }
                                input {
                                    r#type: "password",
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Role" }
                                select {
                                    value: role(),
                                    onchange: move |evt: FormEvent| role.set(evt.value()),
                                    option { value: "admin", "Administrator" }
                                    option { value: "editor", "Editor" }
                                    option { value: "viewer", "Viewer" }
                                }
                            }
                            div { class: "form-actions",
                                button { class: "btn btn-primary", r#type: "submit",
                                    if editing().is_some() { "Update" } else { "Create" }
                                }
                                button {
                                    class: "btn btn-outline",
                                    r#type: "button",
                                    onclick: move |_| close_modal(),
                                    "Cancel"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
