use contracts::enums::AdmissionContext;
use leptos::prelude::*;
use uuid::Uuid;

use crate::navigation::tab::{tab_icon, tab_label};
use crate::navigation::{Tab, TabTree};
use crate::routes::routes::{admission_tab_url, use_navigator};
use crate::shared::icons::icon;

/// Two-level tab navigation.
///
/// Renders the parents of an already-filtered tree, then the children of
/// the active parent, highlighting the active entries. Clicking a parent
/// goes to its first visible child.
#[component]
#[allow(non_snake_case)]
pub fn TabBar(
    /// Filtered tab tree of the current admission
    tree: TabTree,
    context: AdmissionContext,
    uuid: Uuid,
    /// Identifier of the active tab, if it belongs to this tree
    #[prop(optional_no_strip)]
    active_tab: Option<String>,
    /// Parent of the active tab, if any
    #[prop(optional_no_strip)]
    active_parent: Option<Tab>,
) -> impl IntoView {
    let navigator = use_navigator();

    let sub_tabs: Vec<Tab> = active_parent
        .and_then(|parent| tree.children_of(parent.id()))
        .map(|children| children.to_vec())
        .unwrap_or_default();

    let parents = tree
        .entries()
        .iter()
        .map(|(parent, children)| {
            let is_active = active_parent == Some(*parent);
            let target = admission_tab_url(context, uuid, children[0].id());
            view! {
                <li class="tab-bar__parent" class:tab-bar__parent--active=is_active>
                    <a class="tab-bar__link" on:click=move |_| navigator.navigate(&target)>
                        {tab_icon(parent.id()).map(icon)}
                        <span>{tab_label(parent.id())}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    let children = sub_tabs
        .into_iter()
        .map(|tab| {
            let is_active = active_tab.as_deref() == Some(tab.id());
            let target = admission_tab_url(context, uuid, tab.id());
            view! {
                <li class="tab-bar__child" class:tab-bar__child--active=is_active>
                    <a class="tab-bar__link" on:click=move |_| navigator.navigate(&target)>
                        {tab_label(tab.id())}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="tab-bar">
            <ul class="tab-bar__parents">{parents}</ul>
            <ul class="tab-bar__children">{children}</ul>
        </nav>
    }
}
