use dioxus::prelude::*;

use api::models::{Faq, FaqInput};
use api::ApiClient;
use ui::components::{confirm, Badge, ModalOverlay, Tone};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

async fn reload(client: &ApiClient, mut faqs: Signal<Vec<Faq>>) {
    if let Ok(mut loaded) = api::content::list_all_faqs(client).await {
        loaded.sort_by_key(|f| f.order);
        faqs.set(loaded);
    }
}

#[component]
pub fn AdminFaqs() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut faqs = use_signal(Vec::<Faq>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Faq>::None);

    let mut question = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut order = use_signal(|| 0u32);
    let mut is_active = use_signal(|| true);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::content::list_all_faqs(&client).await {
                    Ok(mut loaded) => {
                        loaded.sort_by_key(|f| f.order);
                        faqs.set(loaded);
                    }
                    Err(e) => toast_error(&mut toasts, format!("Could not load FAQ entries: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        question.set(String::new());
        answer.set(String::new());
        order.set(0);
        is_active.set(true);
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if question().trim().is_empty() || answer().trim().is_empty() {
                toast_error(&mut toasts, "Question and answer are required");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let input = FaqInput {
                    question: question().trim().to_string(),
                    answer: answer().trim().to_string(),
                    order: order(),
                    is_active: is_active(),
                };
                let result = match editing() {
                    Some(faq) => api::content::update_faq(&client, &faq.id, &input)
                        .await
                        .map(|_| "FAQ entry updated"),
                    None => api::content::create_faq(&client, &input)
                        .await
                        .map(|_| "FAQ entry added"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, faqs).await;
                        show_modal.set(false);
                        editing.set(None);
                        question.set(String::new());
                        answer.set(String::new());
                        order.set(0);
                        is_active.set(true);
                    }
                    Err(e) => toast_error(&mut toasts, format!("Saving failed: {e}")),
                }
            });
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "FAQ" }
                    p { class: "page-subtitle", "Entries show on the storefront in this order" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New entry"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if faqs().is_empty() {
                ui::components::EmptyState { message: "No FAQ entries yet" }
            } else {
                div { class: "faq-list",
                    for faq in faqs() {
                        div { key: "{faq.id}", class: "card",
                            div { class: "faq-head",
                                span { class: "faq-order", "#{faq.order}" }
                                h3 { class: "card-title", "{faq.question}" }
                                if faq.is_active {
                                    Badge { tone: Tone::Success, label: "Active".to_string() }
                                } else {
                                    Badge { tone: Tone::Neutral, label: "Hidden".to_string() }
                                }
                            }
                            p { class: "card-text", "{faq.answer}" }
                            div { class: "card-actions",
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: {
                                        let faq = faq.clone();
                                        move |_| {
                                            question.set(faq.question.clone());
                                            answer.set(faq.answer.clone());
                                            order.set(faq.order);
                                            is_active.set(faq.is_active);
                                            editing.set(Some(faq.clone()));
                                            show_modal.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger btn-sm",
                                    onclick: {
                                        let client = client.clone();
                                        let id = faq.id.clone();
                                        move |_| {
                                            if !confirm("Delete this FAQ entry?") {
                                                return;
                                            }
                                            let client = client.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match api::content::delete_faq(&client, &id).await {
                                                    Ok(()) => {
                                                        toast_success(&mut toasts, "FAQ entry deleted");
                                                        reload(&client, faqs).await;
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

            if show_modal() {
                ModalOverlay {
                    on_close: move |_| close_modal(),
                    div { class: "modal-body",
                        h2 { class: "modal-title",
                            if editing().is_some() { "Edit FAQ entry" } else { "New FAQ entry" }
                        }
                        form { class: "form-grid", onsubmit: handle_submit,
                            div { class: "field",
                                label { "Question *" }
                                input {
                                    r#type: "text",
                                    value: question(),
                                    oninput: move |evt: FormEvent| question.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Answer *" }
                                textarea {
                                    rows: 4,
                                    value: answer(),
                                    oninput: move |evt: FormEvent| answer.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Display order" }
                                input {
                                    r#type: "number",
                                    min: "0",
                                    value: "{order()}",
                                    oninput: move |evt: FormEvent| {
                                        if let Ok(v) = evt.value().parse::<u32>() {
                                            order.set(v);
                                        }
                                    },
                                }
                            }
                            label { class: "checkbox-row",
                                input {
                                    r#type: "checkbox",
                                    checked: is_active(),
                                    onchange: move |evt: FormEvent| is_active.set(evt.checked()),
                                }
                                "Visible on the storefront"
                            }
                            div { class: "form-actions",
                                button { class: "btn btn-primary", r#type: "submit",
                                    if editing().is_some() { "Update" } else { "Save" }
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
