use chrono::Utc;
use dioxus::prelude::*;

use api::models::{Campaign, CampaignInput};
use api::ApiClient;
use ui::components::{campaign_state_tone, confirm, Badge, ModalOverlay};
use ui::{parse_datetime_input, to_datetime_input, toast_error, toast_success, use_admin_api, use_toasts};

async fn reload(client: &ApiClient, mut campaigns: Signal<Vec<Campaign>>) {
    if let Ok(loaded) = api::content::list_campaigns(client).await {
        campaigns.set(loaded);
    }
}

/// Promotional campaigns. The running/scheduled/expired badge is computed
/// locally from the schedule; the storefront popup asks the backend.
#[component]
pub fn AdminCampaigns() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Campaign>::None);

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut button_label = use_signal(String::new);
    let mut button_url = use_signal(String::new);
    let mut starts_at = use_signal(String::new);
    let mut ends_at = use_signal(String::new);
    let mut active = use_signal(|| true);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::content::list_campaigns(&client).await {
                    Ok(loaded) => campaigns.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load campaigns: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        title.set(String::new());
        description.set(String::new());
        button_label.set(String::new());
        button_url.set(String::new());
        starts_at.set(String::new());
        ends_at.set(String::new());
        active.set(true);
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if title().trim().is_empty()
                || description().trim().is_empty()
                || button_label().trim().is_empty()
                || button_url().trim().is_empty()
            {
                toast_error(&mut toasts, "Please fill in all required fields");
                return;
            }
            let (Some(start), Some(end)) = (
                parse_datetime_input(&starts_at()),
                parse_datetime_input(&ends_at()),
            ) else {
                toast_error(&mut toasts, "Start and end dates are required");
                return;
            };
            if end < start {
                toast_error(&mut toasts, "The campaign cannot end before it starts");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let input = CampaignInput {
                    title: title().trim().to_string(),
                    description: description().trim().to_string(),
                    button_label: button_label().trim().to_string(),
                    button_url: button_url().trim().to_string(),
                    starts_at: start,
                    ends_at: end,
                    active: active(),
                };
                let result = match editing() {
                    Some(campaign) => api::content::update_campaign(&client, &campaign.id, &input)
                        .await
                        .map(|_| "Campaign updated"),
                    None => api::content::create_campaign(&client, &input)
                        .await
                        .map(|_| "Campaign created"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, campaigns).await;
                        show_modal.set(false);
                        editing.set(None);
                        title.set(String::new());
                        description.set(String::new());
                        button_label.set(String::new());
                        button_url.set(String::new());
                        starts_at.set(String::new());
                        ends_at.set(String::new());
                        active.set(true);
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
                    h1 { class: "page-title", "Campaigns" }
                    p { class: "page-subtitle", "Popups shown to storefront visitors while running" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New campaign"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if campaigns().is_empty() {
                ui::components::EmptyState { message: "No campaigns yet" }
            } else {
                div { class: "card-grid",
                    for campaign in campaigns() {
                        div { key: "{campaign.id}", class: "card",
                            div { class: "faq-head",
                                h3 { class: "card-title", "{campaign.title}" }
                                Badge {
                                    tone: campaign_state_tone(campaign.state(Utc::now())),
                                    label: campaign.state(Utc::now()).label().to_string(),
                                }
                            }
                            p { class: "card-text", "{campaign.description}" }
                            p { class: "muted",
                                {format!("{} → {}", ui::datetime(&campaign.starts_at), ui::datetime(&campaign.ends_at))}
                            }
                            p { class: "muted", "Button: \"{campaign.button_label}\" → {campaign.button_url}" }
                            div { class: "card-actions",
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: {
                                        let campaign = campaign.clone();
                                        move |_| {
                                            title.set(campaign.title.clone());
                                            description.set(campaign.description.clone());
                                            button_label.set(campaign.button_label.clone());
                                            button_url.set(campaign.button_url.clone());
                                            starts_at.set(to_datetime_input(&campaign.starts_at));
                                            ends_at.set(to_datetime_input(&campaign.ends_at));
                                            active.set(campaign.active);
                                            editing.set(Some(campaign.clone()));
                                            show_modal.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger btn-sm",
                                    onclick: {
                                        let client = client.clone();
                                        let id = campaign.id.clone();
                                        move |_| {
                                            if !confirm("Delete this campaign?") {
                                                return;
                                            }
                                            let client = client.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match api::content::delete_campaign(&client, &id).await {
                                                    Ok(()) => {
                                                        toast_success(&mut toasts, "Campaign deleted");
                                                        reload(&client, campaigns).await;
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
                            if editing().is_some() { "Edit campaign" } else { "New campaign" }
                        }
                        form { class: "form-grid", onsubmit: handle_submit,
                            div { class: "field",
                                label { "Title *" }
                                input {
                                    r#type: "text",
                                    value: title(),
                                    oninput: move |evt: FormEvent| title.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Description *" }
                                textarea {
                                    rows: 3,
                                    value: description(),
                                    oninput: move |evt: FormEvent| description.set(evt.value()),
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Button label *" }
                                    input {
                                        r#type: "text",
                                        value: button_label(),
                                        oninput: move |evt: FormEvent| button_label.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Button link *" }
                                    input {
                                        r#type: "text",
                                        placeholder: "/products or https://...",
                                        value: button_url(),
                                        oninput: move |evt: FormEvent| button_url.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Starts *" }
                                    input {
                                        r#type: "datetime-local",
                                        value: starts_at(),
                                        oninput: move |evt: FormEvent| starts_at.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Ends *" }
                                    input {
                                        r#type: "datetime-local",
                                        value: ends_at(),
                                        oninput: move |evt: FormEvent| ends_at.set(evt.value()),
                                    }
                                }
                            }
                            label { class: "checkbox-row",
                                input {
                                    r#type: "checkbox",
                                    checked: active(),
                                    onchange: move |evt: FormEvent| active.set(evt.checked()),
                                }
                                "Active"
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
