use contracts::admission::{ActionLinked, Proposition, PropositionBusinessError};
use contracts::enums::AdmissionContext;
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::admission::api;
use crate::domain::admission::status_display::tab_for_business_error;
use crate::navigation::tab::tab_label;
use crate::routes::routes::{admission_tab_url, use_navigator, DASHBOARD_URL};

/// Confirmation tab: dry-run verification of the submission rules, then
/// the submit action itself.
///
/// Submission stays disabled until the backend reports no remaining
/// violation; each violation links to the tab where it can be fixed.
#[component]
#[allow(non_snake_case)]
pub fn ConfirmSubmitTab(proposition: Proposition) -> impl IntoView {
    let context = proposition.context;
    let uuid = proposition.uuid;
    let can_submit = proposition.links().allows("submit_proposition");
    let submit_refusal = proposition
        .links()
        .error("submit_proposition")
        .map(str::to_string);

    let (violations, set_violations) = signal::<Option<Vec<PropositionBusinessError>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let navigator = use_navigator();

    wasm_bindgen_futures::spawn_local(async move {
        match api::verify_proposition(context, uuid).await {
            Ok(errors) => set_violations.set(Some(errors)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let ready = move || violations.with(|v| v.as_ref().is_some_and(|v| v.is_empty()));

    let submit = move |_| {
        set_busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_proposition(context, uuid).await {
                Ok(()) => navigator.navigate(DASHBOARD_URL),
                Err(e) => {
                    set_error.set(Some(e));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="tab-content confirm-submit">
            <h2>{tab_label("confirm-submit")}</h2>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || violations.get().map(|violations| {
                if violations.is_empty() {
                    view! {
                        <div class="alert alert--success">
                            "Your application is complete and can be submitted."
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <ul class="confirm-submit__violations">
                            {violations.into_iter().map(|violation| {
                                view! {
                                    <ViolationItem
                                        context=context
                                        uuid=uuid
                                        violation=violation
                                    />
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            })}

            <div class="confirm-submit__actions">
                {submit_refusal.map(|reason| view! {
                    <div class="alert alert--warning">{reason}</div>
                })}
                <Show when=move || can_submit>
                    <button
                        class="button button--primary"
                        disabled=move || busy.get() || !ready()
                        on:click=submit.clone()
                    >
                        "Submit my application"
                    </button>
                </Show>
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn ViolationItem(
    context: AdmissionContext,
    uuid: Uuid,
    violation: PropositionBusinessError,
) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <li class="confirm-submit__violation">
            <span>{violation.detail.clone()}</span>
            {tab_for_business_error(&violation.status_code).map(|tab| {
                let target = admission_tab_url(context, uuid, tab);
                view! {
                    <a
                        class="confirm-submit__fix-link"
                        on:click=move |_| navigator.navigate(&target)
                    >
                        {format!("Go to {}", tab_label(tab))}
                    </a>
                }
            })}
        </li>
    }
}
