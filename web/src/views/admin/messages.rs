use dioxus::prelude::*;

use api::models::{ContactMessage, MessageStatus};
use api::ApiClient;
use ui::components::{confirm, message_status_tone, Badge, ModalOverlay};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

async fn reload(
    client: &ApiClient,
    status: Option<MessageStatus>,
    mut messages: Signal<Vec<ContactMessage>>,
) {
    if let Ok(loaded) = api::content::list_messages(client, status).await {
        messages.set(loaded);
    }
}

/// Contact-form inbox. Opening a new message marks it read; replied is an
/// explicit action.
#[component]
pub fn AdminMessages() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut messages = use_signal(Vec::<ContactMessage>::new);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(|| Option::<MessageStatus>::None);
    let mut selected = use_signal(|| Option::<ContactMessage>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let status = filter();
            async move {
                loading.set(true);
                match api::content::list_messages(&client, status).await {
                    Ok(loaded) => messages.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load messages: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let open_message = {
        let client = client.clone();
        move |message: ContactMessage| {
            // Opening an unread message flips it to read, like any inbox.
            if message.status == MessageStatus::New {
                let client = client.clone();
                let id = message.id.clone();
                spawn(async move {
                    if api::content::set_message_status(&client, &id, MessageStatus::Read)
                        .await
                        .is_ok()
                    {
                        reload(&client, filter(), messages).await;
                    }
                });
                selected.set(Some(ContactMessage {
                    status: MessageStatus::Read,
                    ..message
                }));
            } else {
                selected.set(Some(message));
            }
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Contact messages" }
            }

            div { class: "filter-row",
                button {
                    class: if filter().is_none() { "filter-btn filter-btn-active" } else { "filter-btn" },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for status in [MessageStatus::New, MessageStatus::Read, MessageStatus::Replied] {
                    button {
                        key: "{status.as_str()}",
                        class: if filter() == Some(status) { "filter-btn filter-btn-active" } else { "filter-btn" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status.label()}"
                    }
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if messages().is_empty() {
                ui::components::EmptyState { message: "No messages in this view" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "From" }
                                th { "Subject" }
                                th { "Status" }
                                th { "Received" }
                                th { "" }
                            }
                        }
                        tbody {
                            for message in messages() {
                                tr {
                                    key: "{message.id}",
                                    class: if message.status == MessageStatus::New { "row-unread" } else { "" },
                                    td {
                                        div { "{message.name}" }
                                        div { class: "muted", "{message.email}" }
                                    }
                                    td { "{message.subject}" }
                                    td {
                                        Badge {
                                            tone: message_status_tone(message.status),
                                            label: message.status.label().to_string(),
                                        }
                                    }
                                    td { {ui::datetime(&message.created_at)} }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-outline btn-sm",
                                                onclick: {
                                                    let mut open_message = open_message.clone();
                                                    let message = message.clone();
                                                    move |_| open_message(message.clone())
                                                },
                                                "Open"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = message.id.clone();
                                                    move |_| {
                                                        if !confirm("Delete this message?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match api::content::delete_message(&client, &id).await {
                                                                Ok(()) => {
                                                                    toast_success(&mut toasts, "Message deleted");
                                                                    reload(&client, filter(), messages).await;
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

            if let Some(message) = selected() {
                ModalOverlay {
                    on_close: move |_| selected.set(None),
                    div { class: "modal-body",
                        div { class: "faq-head",
                            h2 { class: "modal-title", "{message.subject}" }
                            Badge {
                                tone: message_status_tone(message.status),
                                label: message.status.label().to_string(),
                            }
                        }
                        p { class: "muted",
                            "{message.name} · {message.email}"
                            if let Some(phone) = &message.phone {
                                " · {phone}"
                            }
                        }
                        p { class: "muted", {ui::datetime(&message.created_at)} }
                        p { class: "message-body", "{message.message}" }

                        if message.status != MessageStatus::Replied {
                            div { class: "form-actions",
                                button {
                                    class: "btn btn-success",
                                    onclick: {
                                        let client = client.clone();
                                        let id = message.id.clone();
                                        move |_| {
                                            let client = client.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match api::content::set_message_status(&client, &id, MessageStatus::Replied).await {
                                                    Ok(()) => {
                                                        toast_success(&mut toasts, "Marked as replied");
                                                        selected.set(None);
                                                        reload(&client, filter(), messages).await;
                                                    }
                                                    Err(e) => toast_error(&mut toasts, format!("Update failed: {e}")),
                                                }
                                            });
                                        }
                                    },
                                    "Mark as replied"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
