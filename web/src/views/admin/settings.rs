use dioxus::prelude::*;

use api::models::SiteSettings;
use ui::{toast_error, toast_success, use_admin_api, use_toasts};

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Site-wide settings, edited and saved wholesale.
#[component]
pub fn AdminSettings() -> Element {
    let client = use_admin_api();
    let mut toasts = use_toasts();

    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let mut company_name = use_signal(String::new);
    let mut company_address = use_signal(String::new);
    let mut company_phone = use_signal(String::new);
    let mut company_email = use_signal(String::new);
    let mut company_website = use_signal(String::new);
    let mut tax_number = use_signal(String::new);
    let mut logo_url = use_signal(String::new);
    let mut hero_title = use_signal(String::new);
    let mut hero_subtitle = use_signal(String::new);
    let mut about_title = use_signal(String::new);
    let mut about_text = use_signal(String::new);
    let mut terms = use_signal(String::new);
    let mut bank_info = use_signal(String::new);
    let mut contact_success = use_signal(String::new);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match api::content::get_settings(&client).await {
                    Ok(s) => {
                        company_name.set(s.company_name.unwrap_or_default());
                        company_address.set(s.company_address.unwrap_or_default());
                        company_phone.set(s.company_phone.unwrap_or_default());
                        company_email.set(s.company_email.unwrap_or_default());
                        company_website.set(s.company_website.unwrap_or_default());
                        tax_number.set(s.tax_number.unwrap_or_default());
                        logo_url.set(s.logo_url.unwrap_or_default());
                        hero_title.set(s.hero_title.unwrap_or_default());
                        hero_subtitle.set(s.hero_subtitle.unwrap_or_default());
                        about_title.set(s.about_title.unwrap_or_default());
                        about_text.set(s.about_text.unwrap_or_default());
                        terms.set(s.terms_and_conditions.unwrap_or_default());
                        bank_info.set(s.bank_info.unwrap_or_default());
                        contact_success.set(s.contact_form_success_message.unwrap_or_default());
                    }
                    Err(e) => toast_error(&mut toasts, format!("Could not load settings: {e}")),
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            saving.set(true);
            let settings = SiteSettings {
                company_name: optional(company_name()),
                company_address: optional(company_address()),
                company_phone: optional(company_phone()),
                company_email: optional(company_email()),
                company_website: optional(company_website()),
                tax_number: optional(tax_number()),
                logo_url: optional(logo_url()),
                hero_title: optional(hero_title()),
                hero_subtitle: optional(hero_subtitle()),
                about_title: optional(about_title()),
                about_text: optional(about_text()),
                terms_and_conditions: optional(terms()),
                bank_info: optional(bank_info()),
                contact_form_success_message: optional(contact_success()),
            };
            match api::content::save_settings(&client, &settings).await {
                Ok(()) => toast_success(&mut toasts, "Settings saved"),
                Err(e) => toast_error(&mut toasts, format!("Saving failed: {e}")),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "Settings" }
            }

            if loading() {
                ui::components::Loading {}
            } else {
                form { class: "form-grid", onsubmit: handle_submit,
                    h2 { class: "section-title", "Company" }
                    div { class: "field-row",
                        div { class: "field",
                            label { "Company name" }
                            input {
                                r#type: "text",
                                value: company_name(),
                                oninput: move |evt: FormEvent| company_name.set(evt.value()),
                            }
                        }
                        div { class: "field",
                            label { "Tax number" }
                            input {
                                r#type: "text",
                                value: tax_number(),
                                oninput: move |evt: FormEvent| tax_number.set(evt.value()),
                            }
                        }
                    }
                    div { class: "field",
                        label { "Address" }
                        textarea {
                            rows: 2,
                            value: company_address(),
                            oninput: move |evt: FormEvent| company_address.set(evt.value()),
                        }
                    }
                    div { class: "field-row",
                        div { class: "field",
                            label { "Phone" }
                            input {
                                r#type: "tel",
                                value: company_phone(),
                                oninput: move |evt: FormEvent| company_phone.set(evt.value()),
                            }
                        }
                        div { class: "field",
                            label { "Email" }
                            input {
                                r#type: "email",
                                value: company_email(),
                                oninput: move |evt: FormEvent| company_email.set(evt.value()),
                            }
                        }
                    }
                    div { class: "field-row",
                        div { class: "field",
                            label { "Website" }
                            input {
                                r#type: "text",
                                value: company_website(),
                                oninput: move |evt: FormEvent| company_website.set(evt.value()),
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
                    }

                    h2 { class: "section-title", "Storefront copy" }
                    div { class: "field",
                        label { "Hero title" }
                        input {
                            r#type: "text",
                            value: hero_title(),
                            oninput: move |evt: FormEvent| hero_title.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Hero subtitle" }
                        input {
                            r#type: "text",
                            value: hero_subtitle(),
                            oninput: move |evt: FormEvent| hero_subtitle.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "About title" }
                        input {
                            r#type: "text",
                            value: about_title(),
                            oninput: move |evt: FormEvent| about_title.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "About text" }
                        textarea {
                            rows: 4,
                            value: about_text(),
                            oninput: move |evt: FormEvent| about_text.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Contact form success message" }
                        input {
                            r#type: "text",
                            value: contact_success(),
                            oninput: move |evt: FormEvent| contact_success.set(evt.value()),
                        }
                    }

                    h2 { class: "section-title", "Quoting" }
                    div { class: "field",
                        label { "Terms and conditions" }
                        textarea {
                            rows: 5,
                            value: terms(),
                            oninput: move |evt: FormEvent| terms.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Bank details (shown on quote PDFs)" }
                        textarea {
                            rows: 3,
                            value: bank_info(),
                            oninput: move |evt: FormEvent| bank_info.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save settings" }
                    }
                }
            }
        }
    }
}
