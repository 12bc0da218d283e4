use contracts::admission::{ActionLinked, Proposition, SupervisionMember};
use leptos::prelude::*;

use crate::domain::admission::api;
use crate::domain::admission::status_display::signature_badge_variant;
use crate::navigation::tab::tab_label;
use crate::shared::components::ui::Badge;
use crate::shared::format::force_title;

/// Doctorate supervision panel: members, their signature progress, and the
/// signature-request action once the panel is complete (gated by the
/// proposition's links, like every other action).
#[component]
#[allow(non_snake_case)]
pub fn SupervisionTab(proposition: Proposition) -> impl IntoView {
    let uuid = proposition.uuid;
    let can_request_signatures = proposition.links().allows("request_signatures");

    let (members, set_members) = signal::<Option<Vec<SupervisionMember>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_supervision(uuid).await {
            Ok(data) => set_members.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let request_signatures = move |_| {
        set_busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::request_signatures(uuid).await {
                Ok(()) => set_notice.set(Some("Signature requests sent.".to_string())),
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="tab-content supervision">
            <h2>{tab_label("supervision")}</h2>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || notice.get().map(|msg| view! {
                <div class="alert alert--info">{msg}</div>
            })}

            {move || members.get().map(|members| {
                if members.is_empty() {
                    view! {
                        <p class="supervision__empty">
                            "No member in the supervision panel yet."
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <ul class="supervision__members">
                            {members.into_iter().map(|member| {
                                let name = force_title(&format!(
                                    "{} {}",
                                    member.first_name, member.last_name
                                ));
                                view! {
                                    <li class="supervision__member">
                                        <span class="supervision__name">{name}</span>
                                        <span class="supervision__role">
                                            {member.role.display_name()}
                                        </span>
                                        <Badge variant=signature_badge_variant(
                                            member.signature_state,
                                        )>
                                            {member.signature_state.display_name()}
                                        </Badge>
                                        {(!member.comment.is_empty()).then(|| view! {
                                            <p class="supervision__comment">
                                                {member.comment.clone()}
                                            </p>
                                        })}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            })}

            <Show when=move || can_request_signatures>
                <button
                    class="button button--primary"
                    disabled=move || busy.get()
                    on:click=request_signatures.clone()
                >
                    "Request signatures"
                </button>
            </Show>
        </section>
    }
}
