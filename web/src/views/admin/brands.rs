use dioxus::prelude::*;

use api::models::{Brand, BrandInput};
use api::ApiClient;
use ui::components::{confirm, ModalOverlay};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

async fn reload(client: &ApiClient, mut brands: Signal<Vec<Brand>>) {
    if let Ok(loaded) = api::catalog::list_brands(client).await {
        brands.set(loaded);
    }
}

#[component]
pub fn AdminBrands() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut brands = use_signal(Vec::<Brand>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Brand>::None);

    let mut name = use_signal(String::new);
    let mut logo_url = use_signal(String::new);
    let mut description = use_signal(String::new);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::catalog::list_brands(&client).await {
                    Ok(loaded) => brands.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load brands: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        name.set(String::new());
        logo_url.set(String::new());
        description.set(String::new());
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if name().trim().is_empty() {
                toast_error(&mut toasts, "Brand name is required");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let input = BrandInput {
                    name: name().trim().to_string(),
                    logo_url: optional(logo_url()),
                    description: optional(description()),
                };
                let result = match editing() {
                    Some(brand) => api::catalog::update_brand(&client, &brand.id, &input)
                        .await
                        .map(|_| "Brand updated"),
                    None => api::catalog::create_brand(&client, &input)
                        .await
                        .map(|_| "Brand added"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, brands).await;
                        show_modal.set(false);
                        editing.set(None);
                        name.set(String::new());
                        logo_url.set(String::new());
                        description.set(String::new());
                    }
                    Err(e) => toast_error(&mut toasts, format!("Saving failed: {e}")),
                }
            });
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Brands" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New brand"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if brands().is_empty() {
                ui::components::EmptyState { message: "No brands yet" }
            } else {
                div { class: "card-grid",
                    for brand in brands() {
                        div { key: "{brand.id}", class: "card",
                            if let Some(logo) = &brand.logo_url {
                                img { class: "brand-logo-img", src: "{logo}", alt: "{brand.name}" }
                            }
                            h3 { class: "card-title", "{brand.name}" }
                            if let Some(text) = &brand.description {
                                p { class: "card-text", "{text}" }
                            }
                            div { class: "card-actions",
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: {
                                        let brand = brand.clone();
                                        move |_| {
                                            name.set(brand.name.clone());
                                            logo_url.set(brand.logo_url.clone().unwrap_or_default());
                                            description.set(brand.description.clone().unwrap_or_default());
                                            editing.set(Some(brand.clone()));
                                            show_modal.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger btn-sm",
                                    onclick: {
                                        let client = client.clone();
                                        let id = brand.id.clone();
                                        move |_| {
                                            if !confirm("Delete this brand?") {
                                                return;
                                            }
                                            let client = client.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match api::catalog::delete_brand(&client, &id).await {
                                                    Ok(()) => {
                                                        toast_success(&mut toasts, "Brand deleted");
                                                        reload(&client, brands).await;
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
                            if editing().is_some() { "Edit brand" } else { "New brand" }
                        }
                        form { class: "form-grid", onsubmit: handle_submit,
                            div { class: "field",
                                label { "Brand name *" }
                                input {
                                    r#type: "text",
                                    value: name(),
                                    oninput: move |evt: FormEvent| name.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Logo URL" }
                                input {
                                    r#type: "text",
                                    value: logo_url(),
                                    oninput: move |evt: FormEvent| logo_url.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Description" }
                                textarea {
                                    rows: 3,
                                    value: description(),
                                    oninput: move |evt: FormEvent| description.set(evt.value()),
                                }
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
