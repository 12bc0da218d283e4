use contracts::enums::{AdmissionContext, LanguageKnowledgeGrade};
use contracts::person::LanguageKnowledgeDto;
use contracts::reference::Language;
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::admission::api;
use crate::domain::reference::{api as reference_api, AutocompletePicker};
use crate::routes::routes::{admission_tab_url, use_navigator};
use crate::shared::components::ui::Select;

/// Languages every application must declare a knowledge of
const MANDATORY_LANGUAGES: &[&str] = &["EN", "FR"];

fn is_mandatory_language(code: &str) -> bool {
    MANDATORY_LANGUAGES.contains(&code)
}

/// Prepends the mandatory languages missing from the stored list, keeping
/// the stored entries and their order.
fn with_mandatory_languages(mut entries: Vec<LanguageKnowledgeDto>) -> Vec<LanguageKnowledgeDto> {
    for code in MANDATORY_LANGUAGES.iter().rev() {
        if !entries.iter().any(|entry| entry.language == *code) {
            entries.insert(
                0,
                LanguageKnowledgeDto {
                    language: code.to_string(),
                    ..Default::default()
                },
            );
        }
    }
    entries
}

fn grade_options() -> Vec<(String, String)> {
    LanguageKnowledgeGrade::all()
        .into_iter()
        .map(|grade| (grade.code().to_string(), grade.code().to_string()))
        .collect()
}

/// Knowledge-of-languages form of the "update" mode.
///
/// English and French are always listed and cannot be removed; further
/// languages come from the reference autocomplete.
#[component]
#[allow(non_snake_case)]
pub fn LanguagesForm(context: AdmissionContext, uuid: Uuid) -> impl IntoView {
    let (entries, set_entries) = signal::<Vec<LanguageKnowledgeDto>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let (languages, set_languages) = signal::<Vec<Language>>(Vec::new());
    let (language_error, set_language_error) = signal::<Option<String>>(None);

    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_languages_knowledge(context, uuid).await {
            Ok(stored) => set_entries.set(with_mandatory_languages(stored)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let search_languages = Callback::new(move |term: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match reference_api::search_languages(&term).await {
                Ok(page) => {
                    set_language_error.set(None);
                    set_languages.set(page.results);
                }
                Err(e) => set_language_error.set(Some(e)),
            }
        });
    });

    let add_language = Callback::new(move |language: Language| {
        set_entries.update(|list| {
            if !list.iter().any(|entry| entry.language == language.code) {
                list.push(LanguageKnowledgeDto {
                    language: language.code,
                    ..Default::default()
                });
            }
        });
    });

    let set_grade = move |index: usize, code: String, apply: fn(&mut LanguageKnowledgeDto, LanguageKnowledgeGrade)| {
        if let Some(grade) = LanguageKnowledgeGrade::from_code(&code) {
            set_entries.update(|list| {
                if let Some(entry) = list.get_mut(index) {
                    apply(entry, grade);
                }
            });
        }
    };

    let save = move |_| {
        let dto = entries.get_untracked();
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_languages_knowledge(context, uuid, &dto).await {
                Ok(()) => navigator.navigate(&admission_tab_url(context, uuid, "languages")),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <section class="tab-content">
            <h2>"Edit knowledge of languages"</h2>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            {move || entries.get().into_iter().enumerate().map(|(index, entry)| {
                let mandatory = is_mandatory_language(&entry.language);
                let listening = entry.listening_comprehension.code().to_string();
                let speaking = entry.speaking_ability.code().to_string();
                let writing = entry.writing_ability.code().to_string();
                view! {
                    <div class="language-entry">
                        <div class="language-entry__header">
                            <span class="language-entry__code">{entry.language.clone()}</span>
                            {mandatory.then(|| view! {
                                <span class="language-entry__mandatory">"Mandatory language"</span>
                            })}
                            {(!mandatory).then(|| view! {
                                <button
                                    class="button button--danger"
                                    on:click=move |_| set_entries.update(|list| {
                                        list.remove(index);
                                    })
                                >
                                    "Remove"
                                </button>
                            })}
                        </div>
                        <Select
                            label="Listening comprehension"
                            value=Signal::derive(move || listening.clone())
                            options=Signal::derive(grade_options)
                            on_change=Callback::new(move |v| set_grade(
                                index,
                                v,
                                |entry, grade| entry.listening_comprehension = grade,
                            ))
                        />
                        <Select
                            label="Speaking ability"
                            value=Signal::derive(move || speaking.clone())
                            options=Signal::derive(grade_options)
                            on_change=Callback::new(move |v| set_grade(
                                index,
                                v,
                                |entry, grade| entry.speaking_ability = grade,
                            ))
                        />
                        <Select
                            label="Writing ability"
                            value=Signal::derive(move || writing.clone())
                            options=Signal::derive(grade_options)
                            on_change=Callback::new(move |v| set_grade(
                                index,
                                v,
                                |entry, grade| entry.writing_ability = grade,
                            ))
                        />
                    </div>
                }
            }).collect_view()}

            <AutocompletePicker
                label="Add a language"
                placeholder="Search a language..."
                results=languages
                error=language_error
                on_query=search_languages
                on_select=add_language
            />

            <div class="form-actions">
                <button
                    class="button"
                    on:click=move |_| {
                        navigator.navigate(&admission_tab_url(context, uuid, "languages"))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(language: &str, grade: LanguageKnowledgeGrade) -> LanguageKnowledgeDto {
        LanguageKnowledgeDto {
            language: language.to_string(),
            listening_comprehension: grade,
            speaking_ability: grade,
            writing_ability: grade,
        }
    }

    #[test]
    fn test_mandatory_languages_are_prepended_once() {
        let entries = with_mandatory_languages(vec![entry("NL", LanguageKnowledgeGrade::B2)]);
        let codes: Vec<&str> = entries.iter().map(|e| e.language.as_str()).collect();
        assert_eq!(codes, vec!["EN", "FR", "NL"]);
    }

    #[test]
    fn test_stored_mandatory_entries_keep_their_grades() {
        let stored = vec![
            entry("FR", LanguageKnowledgeGrade::C2),
            entry("EN", LanguageKnowledgeGrade::B1),
        ];
        let entries = with_mandatory_languages(stored.clone());
        assert_eq!(entries, stored);
    }

    #[test]
    fn test_mandatory_language_codes() {
        assert!(is_mandatory_language("EN"));
        assert!(is_mandatory_language("FR"));
        assert!(!is_mandatory_language("NL"));
    }
}
