use contracts::enums::AdmissionContext;
use contracts::person::{AddressDto, CoordinatesDto};
use contracts::reference::Country;
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::admission::api;
use crate::domain::reference::{api as reference_api, AutocompletePicker};
use crate::routes::routes::{admission_tab_url, use_navigator};
use crate::shared::components::ui::Input;

fn has_address_data(address: &AddressDto) -> bool {
    !(address.street.is_empty()
        && address.street_number.is_empty()
        && address.postal_code.is_empty()
        && address.city.is_empty()
        && address.country.is_empty())
}

/// Contact address sent only when the candidate asked for one and filled it in
fn contact_address(show_contact: bool, address: AddressDto) -> Option<AddressDto> {
    (show_contact && has_address_data(&address)).then_some(address)
}

/// Contact details form of the "update" mode.
///
/// The contact address block starts open only when the stored contact
/// address holds data; unticking the box drops it on save.
#[component]
#[allow(non_snake_case)]
pub fn CoordinatesForm(context: AdmissionContext, uuid: Uuid) -> impl IntoView {
    let residential = RwSignal::new(AddressDto::default());
    let contact = RwSignal::new(AddressDto::default());
    let (show_contact, set_show_contact) = signal(false);
    let (phone_mobile, set_phone_mobile) = signal(String::new());
    let (private_email, set_private_email) = signal(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_coordinates(context, uuid).await {
            Ok(coordinates) => {
                residential.set(coordinates.residential);
                if let Some(address) = coordinates.contact {
                    set_show_contact.set(has_address_data(&address));
                    contact.set(address);
                }
                set_phone_mobile.set(coordinates.phone_mobile.unwrap_or_default());
                set_private_email.set(coordinates.private_email.unwrap_or_default());
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    let save = move |_| {
        let dto = CoordinatesDto {
            residential: residential.get_untracked(),
            contact: contact_address(show_contact.get_untracked(), contact.get_untracked()),
            phone_mobile: Some(phone_mobile.get_untracked()).filter(|v| !v.is_empty()),
            private_email: Some(private_email.get_untracked()).filter(|v| !v.is_empty()),
        };
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_coordinates(context, uuid, &dto).await {
                Ok(()) => navigator.navigate(&admission_tab_url(context, uuid, "coordonnees")),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <section class="tab-content">
            <h2>"Edit contact details"</h2>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <fieldset class="form-fieldset">
                <legend>"Residential address"</legend>
                <AddressFields address=residential />
            </fieldset>

            <label class="form-field__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || show_contact.get()
                    on:change=move |ev| set_show_contact.set(event_target_checked(&ev))
                />
                "Is your contact address different from your residential address?"
            </label>
            <Show when=move || show_contact.get()>
                <fieldset class="form-fieldset">
                    <legend>"Contact address"</legend>
                    <AddressFields address=contact />
                </fieldset>
            </Show>

            <Input
                label="Mobile phone"
                value=phone_mobile
                on_input=Callback::new(move |v| set_phone_mobile.set(v))
            />
            <Input
                label="Personal email"
                value=private_email
                input_type="email"
                on_input=Callback::new(move |v| set_private_email.set(v))
            />

            <div class="form-actions">
                <button
                    class="button"
                    on:click=move |_| {
                        navigator.navigate(&admission_tab_url(context, uuid, "coordonnees"))
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

/// One address block; the country goes through the reference autocomplete
#[component]
#[allow(non_snake_case)]
fn AddressFields(address: RwSignal<AddressDto>) -> impl IntoView {
    let (countries, set_countries) = signal::<Vec<Country>>(Vec::new());
    let (country_error, set_country_error) = signal::<Option<String>>(None);

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
        address.update(|a| a.country = country.iso_code);
    });

    view! {
        <Input
            label="Street"
            value=Signal::derive(move || address.with(|a| a.street.clone()))
            on_input=Callback::new(move |v| address.update(|a| a.street = v))
        />
        <Input
            label="Street number"
            value=Signal::derive(move || address.with(|a| a.street_number.clone()))
            on_input=Callback::new(move |v| address.update(|a| a.street_number = v))
        />
        <Input
            label="Postal code"
            value=Signal::derive(move || address.with(|a| a.postal_code.clone()))
            on_input=Callback::new(move |v| address.update(|a| a.postal_code = v))
        />
        <Input
            label="City"
            value=Signal::derive(move || address.with(|a| a.city.clone()))
            on_input=Callback::new(move |v| address.update(|a| a.city = v))
        />
        <AutocompletePicker
            label="Country"
            placeholder="Search a country..."
            initial=Signal::derive(move || address.with(|a| a.country.clone()))
            results=countries
            error=country_error
            on_query=search_countries
            on_select=select_country
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> AddressDto {
        AddressDto {
            street: "Rue du Compas".to_string(),
            street_number: "12".to_string(),
            postal_code: "1348".to_string(),
            city: "Louvain-la-Neuve".to_string(),
            country: "BE".to_string(),
        }
    }

    #[test]
    fn test_has_address_data() {
        assert!(has_address_data(&address()));
        assert!(!has_address_data(&AddressDto::default()));
        let city_only = AddressDto {
            city: "Bruxelles".to_string(),
            ..Default::default()
        };
        assert!(has_address_data(&city_only));
    }

    #[test]
    fn test_contact_address_needs_the_box_and_data() {
        assert_eq!(contact_address(true, address()), Some(address()));
        assert_eq!(contact_address(false, address()), None);
        assert_eq!(contact_address(true, AddressDto::default()), None);
    }
}
