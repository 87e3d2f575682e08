use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use api::models::{DueStatus, Vehicle, VehicleInput};
use api::ApiClient;
use ui::components::{confirm, due_status_tone, Badge, ModalOverlay};
use ui::{parse_datetime_input, to_datetime_input, toast_error, toast_success, use_admin_api, use_toasts};

async fn reload(client: &ApiClient, mut vehicles: Signal<Vec<Vehicle>>) {
    if let Ok(loaded) = api::fleet::list_vehicles(client).await {
        vehicles.set(loaded);
    }
}

fn due_badge_label(due: &DateTime<Utc>, status: DueStatus) -> String {
    match status {
        DueStatus::Overdue { days } => format!("{} ({days} days overdue)", ui::date(due)),
        DueStatus::DueSoon { days } => format!("{} (in {days} days)", ui::date(due)),
        DueStatus::Ok { .. } => ui::date(due),
    }
}

#[component]
fn DueBadge(label: String, due: Option<DateTime<Utc>>) -> Element {
    let Some(due) = due else {
        return rsx! {};
    };
    let status = DueStatus::of(due, Utc::now());
    rsx! {
        div { class: "due-row",
            span { class: "due-label", "{label}" }
            Badge { tone: due_status_tone(status), label: due_badge_label(&due, status) }
        }
    }
}

/// Fleet tracking: vehicle cards with badges for the four dated obligations.
#[component]
pub fn AdminVehicles() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut vehicles = use_signal(Vec::<Vehicle>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Vehicle>::None);

    let mut plate = use_signal(String::new);
    let mut make_model = use_signal(String::new);
    let mut mileage = use_signal(String::new);
    let mut route = use_signal(String::new);
    let mut note = use_signal(String::new);
    let mut maintenance_due = use_signal(String::new);
    let mut inspection_due = use_signal(String::new);
    let mut casco_due = use_signal(String::new);
    let mut insurance_due = use_signal(String::new);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::fleet::list_vehicles(&client).await {
                    Ok(loaded) => vehicles.set(loaded),
                    Err(e) => toast_error(&mut toasts, format!("Could not load vehicles: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let mut clear_form = move || {
        plate.set(String::new());
        make_model.set(String::new());
        mileage.set(String::new());
        route.set(String::new());
        note.set(String::new());
        maintenance_due.set(String::new());
        inspection_due.set(String::new());
        casco_due.set(String::new());
        insurance_due.set(String::new());
    };

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        clear_form();
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if plate().trim().is_empty() || make_model().trim().is_empty() {
                toast_error(&mut toasts, "Plate and make/model are required");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let input = VehicleInput {
                    plate: plate().trim().to_uppercase(),
                    make_model: make_model().trim().to_string(),
                    mileage: mileage().trim().parse().ok(),
                    route: {
                        let trimmed = route().trim().to_string();
                        (!trimmed.is_empty()).then_some(trimmed)
                    },
                    note: {
                        let trimmed = note().trim().to_string();
                        (!trimmed.is_empty()).then_some(trimmed)
                    },
                    maintenance_due: parse_datetime_input(&maintenance_due()),
                    inspection_due: parse_datetime_input(&inspection_due()),
                    casco_due: parse_datetime_input(&casco_due()),
                    insurance_due: parse_datetime_input(&insurance_due()),
                };
                let result = match editing() {
                    Some(vehicle) => api::fleet::update_vehicle(&client, &vehicle.id, &input)
                        .await
                        .map(|_| "Vehicle updated"),
                    None => api::fleet::create_vehicle(&client, &input)
                        .await
                        .map(|_| "Vehicle added"),
                };
                match result {
                    Ok(message) => {
                        toast_success(&mut toasts, message);
                        reload(&client, vehicles).await;
                        show_modal.set(false);
                        editing.set(None);
                        plate.set(String::new());
                        make_model.set(String::new());
                        mileage.set(String::new());
                        route.set(String::new());
                        note.set(String::new());
                        maintenance_due.set(String::new());
                        inspection_due.set(String::new());
                        casco_due.set(String::new());
                        insurance_due.set(String::new());
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
                    h1 { class: "page-title", "Fleet" }
                    p { class: "page-subtitle", "Vehicles and their maintenance, inspection and insurance deadlines" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_modal.set(true),
                    "New vehicle"
                }
            }

            if loading() {
                ui::components::Loading {}
            } else if vehicles().is_empty() {
                ui::components::EmptyState { message: "No vehicles yet" }
            } else {
                div { class: "card-grid",
                    for vehicle in vehicles() {
                        div { key: "{vehicle.id}", class: "card",
                            div { class: "vehicle-head",
                                span { class: "vehicle-plate", "{vehicle.plate}" }
                                span { class: "muted", "{vehicle.make_model}" }
                            }
                            if let Some(km) = vehicle.mileage {
                                p { class: "card-text", "{km} km" }
                            }
                            if let Some(assignment) = &vehicle.route {
                                p { class: "card-text", "Route: {assignment}" }
                            }

                            DueBadge { label: "Maintenance".to_string(), due: vehicle.maintenance_due }
                            DueBadge { label: "Inspection".to_string(), due: vehicle.inspection_due }
                            DueBadge { label: "Casco".to_string(), due: vehicle.casco_due }
                            DueBadge { label: "Insurance".to_string(), due: vehicle.insurance_due }

                            if let Some(text) = &vehicle.note {
                                p { class: "muted", "{text}" }
                            }

                            div { class: "card-actions",
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: {
                                        let vehicle = vehicle.clone();
                                        move |_| {
                                            plate.set(vehicle.plate.clone());
                                            make_model.set(vehicle.make_model.clone());
                                            mileage.set(vehicle.mileage.map(|m| m.to_string()).unwrap_or_default());
                                            route.set(vehicle.route.clone().unwrap_or_default());
                                            note.set(vehicle.note.clone().unwrap_or_default());
                                            maintenance_due.set(vehicle.maintenance_due.map(|d| to_datetime_input(&d)).unwrap_or_default());
                                            inspection_due.set(vehicle.inspection_due.map(|d| to_datetime_input(&d)).unwrap_or_default());
                                            casco_due.set(vehicle.casco_due.map(|d| to_datetime_input(&d)).unwrap_or_default());
                                            insurance_due.set(vehicle.insurance_due.map(|d| to_datetime_input(&d)).unwrap_or_default());
                                            editing.set(Some(vehicle.clone()));
                                            show_modal.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger btn-sm",
                                    onclick: {
                                        let client = client.clone();
                                        let id = vehicle.id.clone();
                                        move |_| {
                                            if !confirm("Delete this vehicle?") {
                                                return;
                                            }
                                            let client = client.clone();
                                            let id = id.clone();
                                            spawn(async move {
                                                match api::fleet::delete_vehicle(&client, &id).await {
                                                    Ok(()) => {
                                                        toast_success(&mut toasts, "Vehicle deleted");
                                                        reload(&client, vehicles).await;
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
                            if editing().is_some() { "Edit vehicle" } else { "New vehicle" }
                        }
                        form { class: "form-grid", onsubmit: handle_submit,
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Plate *" }
                                    input {
                                        r#type: "text",
                                        value: plate(),
                                        oninput: move |evt: FormEvent| plate.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Make / model *" }
                                    input {
                                        r#type: "text",
                                        value: make_model(),
                                        oninput: move |evt: FormEvent| make_model.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Mileage (km)" }
                                    input {
                                        r#type: "number",
                                        min: "0",
                                        value: mileage(),
                                        oninput: move |evt: FormEvent| mileage.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Route / depot" }
                                    input {
                                        r#type: "text",
                                        value: route(),
                                        oninput: move |evt: FormEvent| route.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Maintenance due" }
                                    input {
                                        r#type: "datetime-local",
                                        value: maintenance_due(),
                                        oninput: move |evt: FormEvent| maintenance_due.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Inspection due" }
                                    input {
                                        r#type: "datetime-local",
                                        value: inspection_due(),
                                        oninput: move |evt: FormEvent| inspection_due.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    label { "Casco due" }
                                    input {
                                        r#type: "datetime-local",
                                        value: casco_due(),
                                        oninput: move |evt: FormEvent| casco_due.set(evt.value()),
                                    }
                                }
                                div { class: "field",
                                    label { "Insurance due" }
                                    input {
                                        r#type: "datetime-local",
                                        value: insurance_due(),
                                        oninput: move |evt: FormEvent| insurance_due.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "field",
                                label { "Note" }
                                textarea {
                                    rows: 2,
                                    value: note(),
                                    oninput: move |evt: FormEvent| note.set(evt.value()),
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
