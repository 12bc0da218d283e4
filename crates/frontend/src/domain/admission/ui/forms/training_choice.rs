use contracts::admission::CreatePropositionDto;
use contracts::enums::{AdmissionContext, TrainingType};
use contracts::reference::{Scholarship, Training};
use leptos::prelude::*;

use crate::domain::admission::api;
use crate::domain::reference::{api as reference_api, AutocompletePicker};
use crate::routes::routes::{admission_tab_url, use_navigator, DASHBOARD_URL};
use crate::shared::components::ui::{Select, Textarea};

/// Creation flow: pick a course, then start an application for it.
///
/// The admission context is not chosen directly; it follows from the
/// training type, and the created proposition decides which portal the
/// candidate lands in.
#[component]
#[allow(non_snake_case)]
pub fn CreatePropositionPage() -> impl IntoView {
    let (training_type_code, set_training_type_code) = signal(String::new());
    let (training, set_training) = signal::<Option<Training>>(None);
    let (scholarship, set_scholarship) = signal::<Option<Scholarship>>(None);
    let (justification, set_justification) = signal(String::new());

    let (trainings, set_trainings) = signal::<Vec<Training>>(Vec::new());
    let (training_error, set_training_error) = signal::<Option<String>>(None);
    let (scholarships, set_scholarships) = signal::<Vec<Scholarship>>(Vec::new());
    let (scholarship_error, set_scholarship_error) = signal::<Option<String>>(None);

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let navigator = use_navigator();

    let selected_type = move || TrainingType::from_code(&training_type_code.get());

    let type_options = Signal::derive(|| {
        let mut options = vec![(String::new(), "-".to_string())];
        options.extend(
            TrainingType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), t.display_name().to_string())),
        );
        options
    });

    let change_type = Callback::new(move |code: String| {
        set_training_type_code.set(code);
        // a course picked for another type is no longer valid
        set_training.set(None);
        set_trainings.set(Vec::new());
    });

    let search_trainings = Callback::new(move |term: String| {
        let Some(training_type) = TrainingType::from_code(&training_type_code.get_untracked())
        else {
            return;
        };
        let context = training_type.admission_context();
        wasm_bindgen_futures::spawn_local(async move {
            match reference_api::search_trainings(context, &term).await {
                Ok(page) => {
                    set_training_error.set(None);
                    set_trainings.set(page.results);
                }
                Err(e) => set_training_error.set(Some(e)),
            }
        });
    });

    let search_scholarships = Callback::new(move |term: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match reference_api::search_scholarships(&term).await {
                Ok(page) => {
                    set_scholarship_error.set(None);
                    set_scholarships.set(page.results);
                }
                Err(e) => set_scholarship_error.set(Some(e)),
            }
        });
    });

    let submit = move |_| {
        let Some(training_type) = TrainingType::from_code(&training_type_code.get_untracked())
        else {
            set_error.set(Some("Choose a course type first.".to_string()));
            return;
        };
        let Some(training) = training.get_untracked() else {
            set_error.set(Some("Choose a course first.".to_string()));
            return;
        };
        let dto = CreatePropositionDto {
            training_type,
            training_id: training.training_id(),
            scholarship_uuid: scholarship.get_untracked().map(|s| s.uuid),
            justification: Some(justification.get_untracked()).filter(|v| !v.is_empty()),
        };
        set_saving.set(true);
        let context = training_type.admission_context();
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_proposition(&dto).await {
                Ok(identity) => {
                    navigator.navigate(&admission_tab_url(context, identity.uuid, "person"));
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page create-proposition">
            <h1>"New application"</h1>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <Select
                label="Course type"
                value=training_type_code
                options=type_options
                on_change=change_type
                required=true
            />

            <Show when=move || selected_type().is_some()>
                <AutocompletePicker
                    label="Course"
                    placeholder="Search a course..."
                    results=trainings
                    error=training_error
                    on_query=search_trainings
                    on_select=Callback::new(move |t: Training| set_training.set(Some(t)))
                />
            </Show>

            <Show when=move || {
                selected_type()
                    .is_some_and(|t| t.admission_context() == AdmissionContext::GeneralEducation)
            }>
                <AutocompletePicker
                    label="Scholarship"
                    placeholder="Search a scholarship..."
                    results=scholarships
                    error=scholarship_error
                    on_query=search_scholarships
                    on_select=Callback::new(move |s: Scholarship| set_scholarship.set(Some(s)))
                />
            </Show>

            <Show when=move || selected_type() == Some(TrainingType::Doctorate)>
                <Textarea
                    label="Justification of your pre-admission request"
                    value=justification
                    on_input=Callback::new(move |v| set_justification.set(v))
                    rows=5
                />
            </Show>

            <div class="form-actions">
                <button class="button" on:click=move |_| navigator.navigate(DASHBOARD_URL)>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=submit.clone()
                >
                    "Start my application"
                </button>
            </div>
        </div>
    }
}
