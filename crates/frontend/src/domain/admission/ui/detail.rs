use contracts::admission::{ActionLinked, Proposition};
use contracts::enums::AdmissionContext;
use contracts::person::{CoordinatesDto, PersonDto};
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::admission::api;
use crate::domain::admission::status_display::status_badge_variant;
use crate::domain::admission::ui::confirm_submit::ConfirmSubmitTab;
use crate::domain::admission::ui::forms::coordinates::CoordinatesForm;
use crate::domain::admission::ui::forms::languages::LanguagesForm;
use crate::domain::admission::ui::forms::person::PersonForm;
use crate::domain::admission::ui::languages::LanguagesTab;
use crate::domain::admission::ui::supervision::SupervisionTab;
use crate::domain::admission::ui::tab_bar::TabBar;
use crate::navigation::tab::tab_label;
use crate::navigation::{
    active_parent, can_update_tab, filter_tab_tree, resolve_active_tab, tab_tree, UPDATE_NAMESPACE,
};
use crate::routes::routes::{admission_form_url, route_namespaces, use_navigator, DASHBOARD_URL};
use crate::shared::components::ui::Badge;
use crate::shared::components::FieldData;
use crate::shared::format::{format_academic_year, format_address};

/// One tab of an existing admission.
///
/// Fetches the proposition (links included) on every visit, filters the
/// context's tab tree against it and renders the active tab's content.
/// While the proposition is unknown no tab is shown: a failed fetch must
/// never widen visibility.
#[component]
#[allow(non_snake_case)]
pub fn AdmissionDetailPage(
    context: AdmissionContext,
    uuid: Uuid,
    /// Path segments after the uuid: `["update"]?, <tab>, <sub>...`
    segments: Vec<String>,
) -> impl IntoView {
    let (proposition, set_proposition) = signal::<Option<Proposition>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_proposition(context, uuid).await {
            Ok(data) => set_proposition.set(Some(data)),
            Err(e) => {
                log::error!("Failed to load proposition: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    let namespaces = route_namespaces(context, &segments);
    let active_tab: Option<String> = resolve_active_tab(&namespaces).map(str::to_string);
    let parent = active_tab
        .as_deref()
        .and_then(|tab| active_parent(tab_tree(context), tab));
    let in_update_mode = segments.first().is_some_and(|s| s == UPDATE_NAMESPACE);

    view! {
        <div class="page admission-detail">
            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || {
                let active_tab = active_tab.clone();
                proposition.get().map(move |prop| {
                    let tree = filter_tab_tree(tab_tree(context), Some(&prop));
                    view! {
                        <AdmissionHeader proposition=prop.clone() />
                        <TabBar
                            tree=tree.clone()
                            context=context
                            uuid=uuid
                            active_tab=active_tab.clone()
                            active_parent=parent
                        />
                        {match active_tab {
                            Some(tab) if tree.contains(&tab) => tab_content(
                                &tab,
                                context,
                                uuid,
                                &prop,
                                in_update_mode,
                            ),
                            Some(_) | None => view! {
                                <div class="alert alert--warning">
                                    "This page is not available for your application."
                                </div>
                            }.into_any(),
                        }}
                    }
                })
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn AdmissionHeader(proposition: Proposition) -> impl IntoView {
    let navigator = use_navigator();
    let can_cancel = proposition.links().allows("destroy_proposition");
    let context = proposition.context;
    let uuid = proposition.uuid;

    let cancel = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::cancel_proposition(context, uuid).await {
                Ok(()) => navigator.navigate(DASHBOARD_URL),
                Err(e) => log::error!("Failed to cancel proposition: {}", e),
            }
        });
    };

    view! {
        <header class="admission-detail__header">
            <h1>{proposition.training.title.clone()}</h1>
            <span class="admission-detail__reference">{proposition.reference.clone()}</span>
            <Badge variant=status_badge_variant(proposition.status)>
                {proposition.status.display_name()}
            </Badge>
            <Show when=move || can_cancel>
                <button class="button button--danger" on:click=cancel.clone()>
                    "Cancel application"
                </button>
            </Show>
        </header>
    }
}

fn tab_content(
    tab: &str,
    context: AdmissionContext,
    uuid: Uuid,
    proposition: &Proposition,
    in_update_mode: bool,
) -> AnyView {
    match tab {
        "person" => {
            if in_update_mode && can_update_tab(Some(proposition), "person") {
                view! { <PersonForm context=context uuid=uuid /> }.into_any()
            } else {
                let can_edit = can_update_tab(Some(proposition), "person");
                view! { <PersonTab context=context uuid=uuid can_edit=can_edit /> }.into_any()
            }
        }
        "coordonnees" => {
            if in_update_mode && can_update_tab(Some(proposition), "coordonnees") {
                view! { <CoordinatesForm context=context uuid=uuid /> }.into_any()
            } else {
                let can_edit = can_update_tab(Some(proposition), "coordonnees");
                view! { <CoordinatesTab context=context uuid=uuid can_edit=can_edit /> }
                    .into_any()
            }
        }
        "languages" => {
            if in_update_mode && can_update_tab(Some(proposition), "languages") {
                view! { <LanguagesForm context=context uuid=uuid /> }.into_any()
            } else {
                let can_edit = can_update_tab(Some(proposition), "languages");
                view! { <LanguagesTab context=context uuid=uuid can_edit=can_edit /> }.into_any()
            }
        }
        "training-choice" => {
            view! { <TrainingChoiceTab proposition=proposition.clone() /> }.into_any()
        }
        "supervision" => {
            view! { <SupervisionTab proposition=proposition.clone() /> }.into_any()
        }
        "confirm-submit" => {
            view! { <ConfirmSubmitTab proposition=proposition.clone() /> }.into_any()
        }
        other => view! {
            <section class="tab-content tab-content--placeholder">
                <h2>{tab_label(other)}</h2>
                <p>"This section is not available yet."</p>
            </section>
        }
        .into_any(),
    }
}

/// Read-only identification tab
#[component]
#[allow(non_snake_case)]
fn PersonTab(context: AdmissionContext, uuid: Uuid, can_edit: bool) -> impl IntoView {
    let (person, set_person) = signal::<Option<PersonDto>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_person(context, uuid).await {
            Ok(data) => set_person.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <section class="tab-content">
            <div class="tab-content__header">
                <h2>{tab_label("person")}</h2>
                <Show when=move || can_edit>
                    <button
                        class="button"
                        on:click=move |_| {
                            navigator.navigate(&admission_form_url(context, uuid, "person"))
                        }
                    >
                        "Edit"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || person.get().map(|person| view! {
                <FieldData name="Last name" data=person.last_name.clone() />
                <FieldData name="First name" data=person.first_name.clone() />
                <FieldData name="Email" data=person.email.clone() />
                <FieldData
                    name="Birth date"
                    data=person.birth_date.map(|d| d.to_string()).unwrap_or_default()
                />
                <FieldData
                    name="Birth country"
                    data=person.birth_country.clone().unwrap_or_default()
                />
                <FieldData
                    name="National register number"
                    data=person.national_register_number.clone().unwrap_or_default()
                />
                <FieldData name="Sex" data=person.sex.clone().unwrap_or_default() />
            })}
        </section>
    }
}

/// Read-only contact details tab
#[component]
#[allow(non_snake_case)]
fn CoordinatesTab(context: AdmissionContext, uuid: Uuid, can_edit: bool) -> impl IntoView {
    let (coordinates, set_coordinates) = signal::<Option<CoordinatesDto>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_coordinates(context, uuid).await {
            Ok(data) => set_coordinates.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <section class="tab-content">
            <div class="tab-content__header">
                <h2>{tab_label("coordonnees")}</h2>
                <Show when=move || can_edit>
                    <button
                        class="button"
                        on:click=move |_| {
                            navigator.navigate(&admission_form_url(context, uuid, "coordonnees"))
                        }
                    >
                        "Edit"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || coordinates.get().map(|coordinates| {
                let residential = &coordinates.residential;
                let residential_line = format_address(
                    &residential.street,
                    &residential.street_number,
                    &residential.postal_code,
                    &residential.city,
                    &residential.country,
                );
                let contact_line = coordinates.contact.as_ref().map(|contact| {
                    format_address(
                        &contact.street,
                        &contact.street_number,
                        &contact.postal_code,
                        &contact.city,
                        &contact.country,
                    )
                });
                view! {
                    <FieldData name="Residential address" data=residential_line />
                    <FieldData
                        name="Contact address"
                        data=contact_line.unwrap_or_default()
                    />
                    <FieldData
                        name="Mobile phone"
                        data=coordinates.phone_mobile.clone().unwrap_or_default()
                    />
                    <FieldData
                        name="Personal email"
                        data=coordinates.private_email.clone().unwrap_or_default()
                    />
                }
            })}
        </section>
    }
}

/// Read-only view of the chosen course
#[component]
#[allow(non_snake_case)]
fn TrainingChoiceTab(proposition: Proposition) -> impl IntoView {
    let training = proposition.training;
    view! {
        <section class="tab-content">
            <h2>{tab_label("training-choice")}</h2>
            <FieldData name="Course" data=training.title.clone() />
            <FieldData name="Acronym" data=training.acronym.clone() />
            <FieldData name="Academic year" data=format_academic_year(training.academic_year) />
            <FieldData name="Campus" data=training.campus.clone() />
            <FieldData
                name="Course type"
                data=training.training_type.display_name().to_string()
            />
        </section>
    }
}
