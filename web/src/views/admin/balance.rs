use dioxus::prelude::*;

use api::models::{BalanceAction, BalanceEntry, Customer, CustomerUpdate};
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

use crate::Route;

/// Balance editing for one customer: pick add/subtract/set, enter an amount,
/// preview the result, save. Every change is mirrored into the audit log.
#[component]
pub fn AdminBalance(id: String) -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut customer = use_signal(|| Option::<Customer>::None);
    let mut loading = use_signal(|| true);
    let mut action = use_signal(|| BalanceAction::Add);
    let mut amount = use_signal(String::new);
    let mut note = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let id_signal = use_signal(|| id.clone());

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = id_signal();
            async move {
                match api::customers::list_customers(&client).await {
                    Ok(customers) => {
                        customer.set(customers.into_iter().find(|c| c.id == id));
                    }
                    Err(e) => toast_error(&mut toasts, format!("Could not load the customer: {e}")),
                }
                loading.set(false);
            }
        }
    });

    if loading() {
        return rsx! {
            ui::components::Loading {}
        };
    }

    let Some(current) = customer() else {
        return rsx! {
            div { class: "page page-narrow",
                ui::components::EmptyState { message: "Customer not found" }
                Link { class: "btn btn-outline", to: Route::AdminCustomers {}, "Back to customers" }
            }
        };
    };

    let parsed_amount = amount().trim().parse::<f64>().ok();
    let preview = parsed_amount.and_then(|a| action().apply(current.balance, a));

    let handle_save = {
        let client = client.clone();
        let current = current.clone();
        move |_| {
            let Some(amount_value) = amount().trim().parse::<f64>().ok().filter(|a| *a >= 0.0) else {
                toast_error(&mut toasts, "Enter a valid amount");
                return;
            };
            let Some(new_balance) = action().apply(current.balance, amount_value) else {
                toast_error(&mut toasts, "The balance cannot go negative");
                return;
            };

            let client = client.clone();
            let current = current.clone();
            spawn(async move {
                saving.set(true);
                let update = CustomerUpdate {
                    balance: new_balance,
                };
                match api::customers::update_customer(&client, &current.id, &update).await {
                    Ok(()) => {
                        let entry = BalanceEntry {
                            customer_id: current.id.clone(),
                            customer_name: current.name.clone(),
                            action: action(),
                            amount: amount_value,
                            old_balance: current.balance,
                            new_balance,
                            note: {
                                let trimmed = note().trim().to_string();
                                (!trimmed.is_empty()).then_some(trimmed)
                            },
                        };
                        if let Err(e) = api::customers::log_balance_change(&client, &entry).await {
                            tracing::warn!("balance audit entry failed: {e}");
                        }
                        toast_success(&mut toasts, "Balance updated");
                        nav.push(Route::AdminCustomers {});
                    }
                    Err(e) => toast_error(&mut toasts, format!("Balance update failed: {e}")),
                }
                saving.set(false);
            });
        }
    };

    let amount_label = match action() {
        BalanceAction::Add => "Amount to add (₺)",
        BalanceAction::Subtract => "Amount to subtract (₺)",
        BalanceAction::Set => "New balance (₺)",
    };
    let save_label = match action() {
        BalanceAction::Add => "Add and save",
        BalanceAction::Subtract => "Subtract and save",
        BalanceAction::Set => "Set balance",
    };

    let action_button = |this: BalanceAction, label: &'static str| {
        rsx! {
            button {
                class: if action() == this { "action-btn action-btn-active" } else { "action-btn" },
                onclick: move |_| action.set(this),
                "{label}"
            }
        }
    };

    rsx! {
        div { class: "page page-narrow",
            Link { class: "btn btn-outline btn-sm", to: Route::AdminCustomers {}, "← Back to customers" }

            div { class: "page-header",
                h1 { class: "page-title", "Balance adjustment" }
            }

            div { class: "balance-summary",
                div {
                    span { class: "stat-label", "Customer" }
                    span { class: "stat-value", "{current.name}" }
                }
                div {
                    span { class: "stat-label", "Current balance" }
                    span { class: "stat-value", {ui::money(current.balance)} }
                }
            }

            div { class: "card",
                div { class: "field",
                    label { "Operation" }
                    div { class: "action-row",
                        {action_button(BalanceAction::Add, "Add")}
                        {action_button(BalanceAction::Subtract, "Subtract")}
                        {action_button(BalanceAction::Set, "Set")}
                    }
                }

                div { class: "field",
                    label { "{amount_label}" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        placeholder: "0.00",
                        value: amount(),
                        oninput: move |evt: FormEvent| amount.set(evt.value()),
                    }
                    if let Some(result) = preview {
                        p { class: "muted", "New balance: ", strong { {ui::money(result)} } }
                    } else if parsed_amount.is_some() {
                        p { class: "form-error", "The balance cannot go negative" }
                    }
                }

                div { class: "field",
                    label { "Note (optional)" }
                    input {
                        r#type: "text",
                        placeholder: "payment, order, refund, ...",
                        value: note(),
                        oninput: move |evt: FormEvent| note.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "{save_label}" }
                }
            }
        }
    }
}
