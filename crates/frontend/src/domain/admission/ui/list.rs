use contracts::admission::{ActionLinked, Proposition, PropositionCollection};
use leptos::prelude::*;

use crate::domain::admission::api;
use crate::domain::admission::status_display::status_badge_variant;
use crate::routes::routes::{admission_tab_url, use_navigator, CREATION_URL};
use crate::shared::components::ui::Badge;
use crate::shared::format::format_academic_year;

/// Candidate dashboard: every proposition, grouped per admission context.
#[component]
#[allow(non_snake_case)]
pub fn AdmissionListPage() -> impl IntoView {
    let (collection, set_collection) = signal::<Option<PropositionCollection>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_propositions().await {
            Ok(data) => set_collection.set(Some(data)),
            Err(e) => {
                log::error!("Failed to load propositions: {}", e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let navigator = use_navigator();
    let can_create = move || {
        collection.with(|c| {
            c.as_ref()
                .is_some_and(|c| c.links().allows("create_proposition"))
        })
    };

    view! {
        <div class="page admission-list">
            <header class="page__header">
                <h1>"My applications"</h1>
                <Show when=can_create>
                    <button
                        class="button button--primary"
                        on:click=move |_| navigator.navigate(CREATION_URL)
                    >
                        "New application"
                    </button>
                </Show>
            </header>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || collection.get().map(|collection| view! {
                <PropositionSection
                    title="Doctorate"
                    propositions=collection.doctorate_propositions
                />
                <PropositionSection
                    title="General education"
                    propositions=collection.general_education_propositions
                />
                <PropositionSection
                    title="Continuing education"
                    propositions=collection.continuing_education_propositions
                />
            })}
        </div>
    }
}

/// One dashboard section; hidden entirely when the candidate has no
/// proposition in that context.
#[component]
#[allow(non_snake_case)]
fn PropositionSection(title: &'static str, propositions: Vec<Proposition>) -> impl IntoView {
    let navigator = use_navigator();

    (!propositions.is_empty()).then(|| view! {
        <section class="admission-list__section">
            <h2>{title}</h2>
            <ul class="admission-list__items">
                {propositions.into_iter().map(|proposition| {
                    let target = admission_tab_url(
                        proposition.context,
                        proposition.uuid,
                        "person",
                    );
                    let training_label = format!(
                        "{} ({}) {}",
                        proposition.training.title,
                        proposition.training.acronym,
                        format_academic_year(proposition.training.academic_year),
                    );
                    let status = proposition.status;
                    let closed = status.is_cancelled() || status.is_decided();
                    view! {
                        <li
                            class="admission-list__item"
                            class:admission-list__item--closed=closed
                            on:click=move |_| navigator.navigate(&target)
                        >
                            <span class="admission-list__reference">
                                {proposition.reference.clone()}
                            </span>
                            <span class="admission-list__training">{training_label}</span>
                            <Badge variant=status_badge_variant(status)>
                                {status.display_name()}
                            </Badge>
                            <span class="admission-list__action">
                                {if status.is_in_progress() { "Continue" } else { "View" }}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    })
}
