use contracts::enums::AdmissionContext;
use contracts::person::LanguageKnowledgeDto;
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::admission::api;
use crate::navigation::tab::tab_label;
use crate::routes::routes::{admission_form_url, use_navigator};
use crate::shared::components::FieldData;

/// Read-only knowledge-of-languages tab
#[component]
#[allow(non_snake_case)]
pub fn LanguagesTab(context: AdmissionContext, uuid: Uuid, can_edit: bool) -> impl IntoView {
    let (entries, set_entries) = signal::<Option<Vec<LanguageKnowledgeDto>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_languages_knowledge(context, uuid).await {
            Ok(data) => set_entries.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <section class="tab-content">
            <div class="tab-content__header">
                <h2>{tab_label("languages")}</h2>
                <Show when=move || can_edit>
                    <button
                        class="button"
                        on:click=move |_| {
                            navigator.navigate(&admission_form_url(context, uuid, "languages"))
                        }
                    >
                        "Edit"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || entries.get().map(|entries| {
                if entries.is_empty() {
                    view! {
                        <p class="tab-content__empty">"No language declared yet."</p>
                    }.into_any()
                } else {
                    entries.into_iter().map(|entry| {
                        let grades = format!(
                            "listening {}, speaking {}, writing {}",
                            entry.listening_comprehension.code(),
                            entry.speaking_ability.code(),
                            entry.writing_ability.code(),
                        );
                        view! {
                            <FieldData name=entry.language.clone() data=grades />
                        }
                    }).collect_view().into_any()
                }
            })}
        </section>
    }
}
