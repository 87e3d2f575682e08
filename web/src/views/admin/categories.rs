use dioxus::prelude::*;

use api::models::{Category, CategoryInput};
use api::ApiClient;
use ui::components::{confirm, ModalOverlay};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

async fn reload(client: &ApiClient, mut categories: Signal<Vec<Category>>) {
    if let Ok(loaded) = api::catalog::list_categories(client).await {
        categories.set(loaded);
    }
}

/// Derive a URL slug from the category name, the way the storefront links
/// expect it (lowercase, dashes).
fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[component]
pub fn AdminCategories() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Category>::None);

    let mut name = use_signal(String::new);
    let mut slug = use_signal(String::new);
    let mut icon = use_signal(String::new);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::catalog::list_categories(&client).await {
                    Ok(loaded) => categories.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load categories: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        name.set(String::new());
        slug.set(String::new());
        icon.set(String::new());
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if name().trim().is_empty() {
                toast_error(&mut toasts, "Category name is required");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let slug_value = if slug().trim().is_empty() {
                    slugify(&name())
                } else {
                    slug().trim().to_string()
                };
                let input = CategoryInput {
                    name: name().trim().to_string(),
                    slug: slug_value,
                    icon: {
                        let trimmed = icon().trim().to_string();
                        (!trimmed.is_empty()).then_some(trimmed)
                    },
                };
                let result = match editing() {
                    Some(category) => api::catalog::update_category(&client, &category.id, &input)
                        .await
                        .map(|_| "Category updated"),
                    None => api::catalog::create_category(&client, &input)
                        .await
                        .map(|_| "Category added"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, categories).await;
                        show_modal.set(false);
                        editing.set(None);
                        name.set(String::new());
                        slug.set(String::new());
                        icon.set(String::new());
                    }
                    Err(e) => toast_error(&mut toasts, format!("Saving failed: {e}")),
                }
            });
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Categories" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New category"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if categories().is_empty() {
                ui::components::EmptyState { message: "No categories yet" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Slug" }
                                th { "Icon" }
                                th { "" }
                            }
                        }
                        tbody {
                            for category in categories() {
                                tr { key: "{category.id}",
                                    td { "{category.name}" }
                                    td { code { "{category.slug}" } }
                                    td { {category.icon.clone().unwrap_or_else(|| "—".to_string())} }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-outline btn-sm",
                                                onclick: {
                                                    let category = category.clone();
                                                    move |_| {
                                                        name.set(category.name.clone());
                                                        slug.set(category.slug.clone());
                                                        icon.set(category.icon.clone().unwrap_or_default());
                                                        editing.set(Some(category.clone()));
                                                        show_modal.set(true);
                                                    }
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = category.id.clone();
                                                    move |_| {
                                                        if !confirm("Delete this category?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match api::catalog::delete_category(&client, &id).await {
                                                                Ok(()) => {
                                                                    toast_success(&mut toasts, "Category deleted");
                                                                    reload(&client, categories).await;
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
                            if editing().is_some() { "Edit category" } else { "New category" }
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
                                label { "Slug" }
                                input {
                                    r#type: "text",
                                    placeholder: "left empty, derived from the name",
                                    value: slug(),
                                    oninput: move |evt: FormEvent| slug.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Icon" }
                                input {
                                    r#type: "text",
                                    placeholder: "icon name or emoji",
                                    value: icon(),
                                    oninput: move |evt: FormEvent| icon.set(evt.value()),
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

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Brake Pads"), "brake-pads");
        assert_eq!(slugify("  Oil & Filters  "), "oil-filters");
        assert_eq!(slugify("A--B"), "a-b");
    }
}
