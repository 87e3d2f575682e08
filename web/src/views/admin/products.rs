use dioxus::prelude::*;

use api::models::{Category, Product, ProductInput};
use api::ApiClient;
use ui::components::{confirm, Badge, ModalOverlay, Tone};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// "S, M, L" → ["S", "M", "L"]
fn parse_variants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

async fn reload(client: &ApiClient, mut products: Signal<Vec<Product>>) {
    if let Ok(loaded) = api::catalog::list_products(client, None).await {
        products.set(loaded);
    }
}

/// Product management: the full catalog form with image upload.
#[component]
pub fn AdminProducts() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut products = use_signal(Vec::<Product>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Product>::None);

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut images = use_signal(Vec::<String>::new);
    let mut variants = use_signal(String::new);
    let mut min_order = use_signal(String::new);
    let mut price_range = use_signal(String::new);
    let mut stock = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut is_featured = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let (loaded_products, loaded_categories) = futures::join!(
                    api::catalog::list_products(&client, None),
                    api::catalog::list_categories(&client),
                );
                match loaded_products {
                    Ok(p) => products.set(p),
                    Err(e) => toast_error(&mut toasts, format!("Could not load products: {e}")),
                }
                if let Ok(c) = loaded_categories {
                    categories.set(c);
                }
                loading.set(false);
            }
        }
    });

    let mut clear_form = move || {
        name.set(String::new());
        description.set(String::new());
        category.set(String::new());
        images.set(Vec::new());
        variants.set(String::new());
        min_order.set(String::new());
        price_range.set(String::new());
        stock.set(String::new());
        is_active.set(true);
        is_featured.set(false);
    };

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        clear_form();
    };

    let handle_upload = {
        let client = client.clone();
        move |evt: FormEvent| {
            let client = client.clone();
            async move {
                let Some(file_engine) = evt.files() else {
                    return;
                };
                uploading.set(true);
                for file_name in file_engine.files() {
                    if let Some(bytes) = file_engine.read_file(&file_name).await {
                        match api::catalog::upload_file(&client, &file_name, bytes).await {
                            Ok(uploaded) => images.write().push(uploaded.url),
                            Err(e) => toast_error(&mut toasts, format!("Upload failed: {e}")),
                        }
                    }
                }
                uploading.set(false);
            }
        }
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if name().trim().is_empty() || category().is_empty() {
                toast_error(&mut toasts, "Name and category are required");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let input = ProductInput {
                    name: name().trim().to_string(),
                    description: description().trim().to_string(),
                    images: images(),
                    category: category(),
                    variants: parse_variants(&variants()),
                    min_order_quantity: min_order().trim().parse().ok(),
                    price_range: optional(price_range()),
                    stock_quantity: stock().trim().parse().ok(),
                    is_active: is_active(),
                    is_featured: is_featured(),
                };
                let result = match editing() {
                    Some(product) => api::catalog::update_product(&client, &product.id, &input)
                        .await
                        .map(|_| "Product updated"),
                    None => api::catalog::create_product(&client, &input)
                        .await
                        .map(|_| "Product added"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, products).await;
                        show_modal.set(false);
                        editing.set(None);
                        name.set(String::new());
                        description.set(String::new());
                        category.set(String::new());
                        images.set(Vec::new());
                        variants.set(String::new());
                        min_order.set(String::new());
                        price_range.set(String::new());
                        stock.set(String::new());
                        is_active.set(true);
                        is_featured.set(false);
                    }
                    Err(e) => toast_error(&mut toasts, format!("Saving failed: {e}")),
                }
            });
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Products" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New product"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if products().is_empty() {
                ui::components::EmptyState { message: "No products yet" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Category" }
                                th { "Price range" }
                                th { "Stock" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for product in products() {
                                tr { key: "{product.id}",
                                    td {
                                        div { class: "product-cell",
                                            if let Some(src) = product.images.first() {
                                                img { class: "product-thumb", src: "{src}", alt: "{product.name}" }
                                            }
                                            div {
                                                div { "{product.name}" }
                                                if product.is_featured {
                                                    span { class: "muted", "Featured" }
                                                }
                                            }
                                        }
                                    }
                                    td { code { "{product.category}" } }
                                    td { {product.price_range.clone().unwrap_or_else(|| "—".to_string())} }
                                    td {
                                        {product.stock_quantity.map(|s| s.to_string()).unwrap_or_else(|| "—".to_string())}
                                    }
                                    td {
                                        if product.is_active {
                                            Badge { tone: Tone::Success, label: "Active".to_string() }
                                        } else {
                                            Badge { tone: Tone::Neutral, label: "Hidden".to_string() }
                                        }
                                    }
                                    td {
                                        div { class: "row-actions",
                                            button {
                                                class: "btn btn-outline btn-sm",
                                                onclick: {
                                                    let product = product.clone();
                                                    move |_| {
                                                        name.set(product.name.clone());
                                                        description.set(product.description.clone());
                                                        category.set(product.category.clone());
                                                        images.set(product.images.clone());
                                                        variants.set(product.variants.join(", "));
                                                        min_order.set(product.min_order_quantity.map(|m| m.to_string()).unwrap_or_default());
                                                        price_range.set(product.price_range.clone().unwrap_or_default());
                                                        stock.set(product.stock_quantity.map(|s| s.to_string()).unwrap_or_default());
                                                        is_active.set(product.is_active);
                                                        is_featured.set(product.is_featured);
                                                        editing.set(Some(product.clone()));
                                                        show_modal.set(true);
                                                    }
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = product.id.clone();
                                                    move |_| {
                                                        if !confirm("Delete this product?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match api::catalog::delete_product(&client, &id).await {
                                                                Ok(()) => {
                                                                    toast_success(&mut toasts, "Product deleted");
                                                                    reload(&client, products).await;
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
                    div { class: "modal-body modal-wide",
                        h2 { class: "modal-title",
                            if editing().is_some() { "Edit product" } else { "New product" }
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
                                label { "Description" }
                                textarea {
                                    rows: 3,
                                    value: description(),
                                    oninput: move |evt: FormEvent| description.set(evt.value()),
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Category *" }
                                    select {
                                        value: category(),
                                        onchange: move |evt: FormEvent| category.set(evt.value()),
                                        option { value: "", "Select a category" }
                                        for c in categories() {
                                            option { key: "{c.id}", value: "{c.slug}", "{c.name}" }
                                        }
                                    }
                                }
                                div { class: "field",
                                    label { "Price range" }
                                    input {
                                        r#type: "text",
                                        placeholder: "e.g. ₺120 – ₺180 / unit",
                                        value: price_range(),
                                        oninput: move |evt: FormEvent| price_range.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Minimum order quantity" }
                                    input {
                                        r#type: "number",
                                        min: "1",
                                        value: min_order(),
                                        oninput: move |evt: FormEvent| min_order.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Stock quantity" }
                                    input {
                                        r#type: "number",
                                        min: "0",
                                        value: stock(),
                                        oninput: move |evt: FormEvent| stock.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field",
                                label { "Variants (comma separated)" }
                                input {
                                    r#type: "text",
                                    placeholder: "S, M, L, XL",
                                    value: variants(),
                                    oninput: move |evt: FormEvent| variants.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { "Images" }
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    multiple: true,
                                    onchange: handle_upload,
                                }
                                if uploading() {
                                    p { class: "muted", "Uploading..." }
                                }
                                if !images().is_empty() {
                                    div { class: "thumb-row",
                                        for (index, src) in images().iter().enumerate() {
                                            div { class: "thumb-box", key: "{index}",
                                                img { class: "thumb", src: "{src}" }
                                                button {
                                                    class: "thumb-remove",
                                                    r#type: "button",
                                                    onclick: move |_| {
                                                        images.write().remove(index);
                                                    },
                                                    "×"
                                                }
                                            }
                                        }
                                    }
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
                            label { class: "checkbox-row",
                                input {
                                    r#type: "checkbox",
                                    checked: is_featured(),
                                    onchange: move |evt: FormEvent| is_featured.set(evt.checked()),
                                }
                                "Featured on the home page"
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
    use super::parse_variants;

    #[test]
    fn test_parse_variants() {
        assert_eq!(parse_variants("S, M , L"), vec!["S", "M", "L"]);
        assert_eq!(parse_variants(""), Vec::<String>::new());
        assert_eq!(parse_variants(" ,X,, "), vec!["X"]);
    }
}
