use dioxus::prelude::*;

use api::models::QuoteRequest;
use ui::{
    mutate_cart, toast_error, toast_success, use_api, use_customer_auth, use_quote_cart,
    use_store, use_toasts, use_visit_tracker,
};

use crate::Route;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Final step of the RFQ flow: contact details, an optional attachment, and
/// the cart contents become one quote request.
#[component]
pub fn QuoteForm() -> Element {
    use_visit_tracker("/request-quote");

    let client = use_api();
    let cart = use_quote_cart();
    let shop_store = use_store();
    let customer = use_customer_auth();
    let mut toasts = use_toasts();

    // Pre-fill from the logged-in customer, if any.
    let session = customer().customer;
    let mut customer_name = use_signal(|| session.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let mut company = use_signal(|| {
        session
            .as_ref()
            .and_then(|c| c.company.clone())
            .unwrap_or_default()
    });
    let mut email = use_signal(|| session.as_ref().map(|c| c.email.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        session
            .as_ref()
            .and_then(|c| c.phone.clone())
            .unwrap_or_default()
    });
    let mut message = use_signal(String::new);
    let mut attachment = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let handle_file = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(name) = file_engine.files().first().cloned() {
                if let Some(bytes) = file_engine.read_file(&name).await {
                    attachment.set(Some((name, bytes)));
                }
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if customer_name().trim().is_empty() || email().trim().is_empty() {
            toast_error(&mut toasts, "Name and email are required");
            return;
        }
        if cart().is_empty() {
            toast_error(&mut toasts, "Your quote cart is empty");
            return;
        }

        let client = client.clone();
        let shop_store = shop_store.clone();
        spawn(async move {
            submitting.set(true);

            let mut file_url = None;
            if let Some((name, bytes)) = attachment() {
                match api::catalog::upload_file(&client, &name, bytes).await {
                    Ok(uploaded) => file_url = Some(uploaded.url),
                    Err(e) => {
                        toast_error(&mut toasts, format!("Attachment upload failed: {e}"));
                        submitting.set(false);
                        return;
                    }
                }
            }

            let request = QuoteRequest {
                customer_name: customer_name().trim().to_string(),
                company: optional(company()),
                email: email().trim().to_string(),
                phone: optional(phone()),
                message: optional(message()),
                items: cart().to_quote_items(),
                file_url,
            };

            match api::quotes::submit_quote(&client, &request).await {
                Ok(_) => {
                    mutate_cart(cart, &shop_store, |c| c.clear());
                    submitted.set(true);
                    toast_success(&mut toasts, "Your quote request has been sent");
                }
                Err(e) => toast_error(&mut toasts, format!("Could not send the request: {e}")),
            }
            submitting.set(false);
        });
    };

    if submitted() {
        return rsx! {
            div { class: "page page-narrow",
                div { class: "confirmation",
                    h1 { class: "page-title", "Request received" }
                    p { class: "muted",
                        "Our team will review your request and reply with pricing by email."
                    }
                    Link { class: "btn btn-primary", to: Route::Home {}, "Back to the storefront" }
                }
            }
        };
    }

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "Request a quote" }
                p { class: "page-subtitle", "{cart().item_count()} items from your cart will be included" }
            }

            form { class: "form-grid", onsubmit: handle_submit,
                div { class: "field",
                    label { "Your name *" }
                    input {
                        r#type: "text",
                        value: customer_name(),
                        oninput: move |evt: FormEvent| customer_name.set(evt.value()),
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
                    label { "Message" }
                    textarea {
                        rows: 4,
                        placeholder: "Target delivery dates, packaging requirements, ...",
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "Attachment (drawing, spec sheet)" }
                    input { r#type: "file", onchange: handle_file }
                    if let Some((name, _)) = attachment() {
                        p { class: "muted", "Attached: {name}" }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Sending..." } else { "Send quote request" }
                }
            }
        }
    }
}
