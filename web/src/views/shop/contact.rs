use dioxus::prelude::*;

use api::models::{ContactRequest, SiteSettings};
use ui::{toast_error, toast_success, use_api, use_toasts, use_visit_tracker};

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Public contact form. The success message comes from the site settings when
/// one is configured.
#[component]
pub fn Contact() -> Element {
    use_visit_tracker("/contact");

    let client = use_api();
    let mut toasts = use_toasts();
    let mut settings = use_signal(SiteSettings::default);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                if let Ok(loaded) = api::content::get_settings(&client).await {
                    settings.set(loaded);
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if name().trim().is_empty()
            || email().trim().is_empty()
            || subject().trim().is_empty()
            || message().trim().is_empty()
        {
            toast_error(&mut toasts, "Please fill in all required fields");
            return;
        }

        let client = client.clone();
        spawn(async move {
            submitting.set(true);
            let request = ContactRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                phone: optional(phone()),
                subject: subject().trim().to_string(),
                message: message().trim().to_string(),
            };
            match api::content::submit_contact(&client, &request).await {
                Ok(()) => {
                    let success = settings()
                        .contact_form_success_message
                        .unwrap_or_else(|| "Your message has been sent. We will get back to you shortly.".to_string());
                    toast_success(&mut toasts, success);
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(e) => toast_error(&mut toasts, format!("Could not send your message: {e}")),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "Contact us" }
                if let Some(address) = settings().company_address {
                    p { class: "page-subtitle", "{address}" }
                }
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
                    label { "Phone" }
                    input {
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "Subject *" }
                    input {
                        r#type: "text",
                        value: subject(),
                        oninput: move |evt: FormEvent| subject.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "Message *" }
                    textarea {
                        rows: 6,
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Sending..." } else { "Send message" }
                }
            }
        }
    }
}
