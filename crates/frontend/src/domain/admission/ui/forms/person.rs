use chrono::NaiveDate;
use contracts::enums::AdmissionContext;
use contracts::person::PersonDto;
use contracts::reference::Country;
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::admission::api;
use crate::domain::reference::{api as reference_api, AutocompletePicker};
use crate::routes::routes::{admission_tab_url, use_navigator};
use crate::shared::components::ui::{Input, Select};

/// Identification form of the "update" mode.
///
/// Loads the current data, then saves the whole DTO at once and returns to
/// the read view.
#[component]
#[allow(non_snake_case)]
pub fn PersonForm(context: AdmissionContext, uuid: Uuid) -> impl IntoView {
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (birth_date, set_birth_date) = signal(String::new());
    let (birth_country, set_birth_country) = signal::<Option<String>>(None);
    let (national_register_number, set_national_register_number) = signal(String::new());
    let (sex, set_sex) = signal(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let (countries, set_countries) = signal::<Vec<Country>>(Vec::new());
    let (country_error, set_country_error) = signal::<Option<String>>(None);

    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_person(context, uuid).await {
            Ok(person) => {
                set_first_name.set(person.first_name);
                set_last_name.set(person.last_name);
                set_email.set(person.email);
                set_birth_date.set(
                    person
                        .birth_date
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                );
                set_birth_country.set(person.birth_country);
                set_national_register_number
                    .set(person.national_register_number.unwrap_or_default());
                set_sex.set(person.sex.unwrap_or_default());
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    let search_countries = Callback::new(move |term: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match reference_api::search_countries(&term).await {
                Ok(page) => {
                    set_country_error.set(None);
                    set_countries.set(page.results);
                }
                Err(e) => set_country_error.set(Some(e)),
            }
        });
    });

    let select_country = Callback::new(move |country: Country| {
        set_birth_country.set(Some(country.iso_code));
    });

    let save = move |_| {
        let dto = PersonDto {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            birth_date: NaiveDate::parse_from_str(&birth_date.get_untracked(), "%Y-%m-%d").ok(),
            birth_country: birth_country.get_untracked(),
            national_register_number: Some(national_register_number.get_untracked())
                .filter(|v| !v.is_empty()),
            sex: Some(sex.get_untracked()).filter(|v| !v.is_empty()),
        };
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_person(context, uuid, &dto).await {
                Ok(()) => navigator.navigate(&admission_tab_url(context, uuid, "person")),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let sex_options = Signal::derive(|| {
        vec![
            (String::new(), "-".to_string()),
            ("F".to_string(), "Female".to_string()),
            ("M".to_string(), "Male".to_string()),
            ("X".to_string(), "Other".to_string()),
        ]
    });

    view! {
        <section class="tab-content">
            <h2>"Edit identification"</h2>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <Input
                label="Last name"
                value=last_name
                on_input=Callback::new(move |v| set_last_name.set(v))
                required=true
            />
            <Input
                label="First name"
                value=first_name
                on_input=Callback::new(move |v| set_first_name.set(v))
                required=true
            />
            <Input
                label="Email"
                value=email
                input_type="email"
                on_input=Callback::new(move |v| set_email.set(v))
                required=true
            />
            <Input
                label="Birth date"
                value=birth_date
                input_type="date"
                on_input=Callback::new(move |v| set_birth_date.set(v))
            />
            <AutocompletePicker
                label="Birth country"
                placeholder="Search a country..."
                initial=Signal::derive(move || birth_country.get().unwrap_or_default())
                results=countries
                error=country_error
                on_query=search_countries
                on_select=select_country
            />
            <Input
                label="National register number"
                value=national_register_number
                on_input=Callback::new(move |v| set_national_register_number.set(v))
            />
            <Select
                label="Sex"
                value=sex
                options=sex_options
                on_change=Callback::new(move |v| set_sex.set(v))
            />

            <div class="form-actions">
                <button
                    class="button"
                    on:click=move |_| {
                        navigator.navigate(&admission_tab_url(context, uuid, "person"))
                    }
                >
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=save.clone()
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}
