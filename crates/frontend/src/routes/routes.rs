//! Location handling: path parsing, URL building and in-app navigation.
//!
//! Paths follow the scheme of the admissions portal:
//! `/admission/<context>/<uuid>[/update]/<tab>[/<sub>]`, with
//! `/admission/create/...` for the pre-creation flow where no admission
//! record exists yet.

use contracts::enums::AdmissionContext;
use leptos::prelude::*;
use uuid::Uuid;

pub const DASHBOARD_URL: &str = "/admission";
pub const CREATION_URL: &str = "/admission/create/training-choice";

/// Parsed portal route
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// The candidate's application dashboard
    Dashboard,
    /// Creation flow, before any admission record exists
    Creation,
    /// One tab of an existing admission
    AdmissionTab {
        context: AdmissionContext,
        uuid: Uuid,
        /// Segments after the uuid: `["update"]?, <tab>, <sub>...`
        segments: Vec<String>,
    },
    NotFound,
}

/// Split a pathname into its non-empty segments
pub fn path_segments(pathname: &str) -> Vec<String> {
    pathname
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_route(pathname: &str) -> Route {
    let segments = path_segments(pathname);
    match segments.as_slice() {
        [] => Route::Dashboard,
        [first] if first.as_str() == "admission" => Route::Dashboard,
        [first, second, ..] if first.as_str() == "admission" && second.as_str() == "create" => {
            Route::Creation
        }
        [first, context, uuid, rest @ ..] if first.as_str() == "admission" => {
            let Some(context) = AdmissionContext::from_code(context) else {
                return Route::NotFound;
            };
            let Ok(uuid) = Uuid::parse_str(uuid) else {
                return Route::NotFound;
            };
            let segments = if rest.is_empty() {
                // bare admission URL lands on the first tab
                vec!["person".to_string()]
            } else {
                rest.to_vec()
            };
            Route::AdmissionTab {
                context,
                uuid,
                segments,
            }
        }
        _ => Route::NotFound,
    }
}

/// Route namespaces + leaf for the active-tab resolver: the fixed
/// `admission` prefix, the context, then the in-admission segments.
pub fn route_namespaces<'a>(context: AdmissionContext, segments: &'a [String]) -> Vec<&'a str> {
    let mut namespaces = vec!["admission", context.code()];
    namespaces.extend(segments.iter().map(String::as_str));
    namespaces
}

pub fn admission_tab_url(context: AdmissionContext, uuid: Uuid, tab: &str) -> String {
    format!("/admission/{}/{}/{}", context.code(), uuid, tab)
}

pub fn admission_form_url(context: AdmissionContext, uuid: Uuid, tab: &str) -> String {
    format!("/admission/{}/{}/update/{}", context.code(), uuid, tab)
}

/// Client-side navigation: pushes a history entry and updates the path
/// signal the route dispatch listens to.
#[derive(Clone, Copy)]
pub struct Navigator {
    path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl Navigator {
    pub fn new() -> Self {
        let (path, set_path) = signal(current_pathname());
        Self { path, set_path }
    }

    pub fn path(&self) -> ReadSignal<String> {
        self.path
    }

    pub fn navigate(&self, to: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to));
            }
        }
        self.set_path.set(to.to_string());
    }

    /// Re-read the browser location without pushing a history entry.
    /// Called on `popstate` so back/forward drive the route dispatch.
    pub fn sync_from_location(&self) {
        self.set_path.set(current_pathname());
    }

    /// Attach the `popstate` listener. Called once, at app start.
    pub fn listen(&self) {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let navigator = *self;
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut()>::new(move || navigator.sync_from_location());
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            // the listener lives as long as the app does
            closure.forget();
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in context")
}

/// Route dispatch: re-renders the page component when the path changes.
#[component]
#[allow(non_snake_case)]
pub fn AppRoutes() -> impl IntoView {
    use crate::domain::admission::ui::{
        AdmissionDetailPage, AdmissionListPage, CreatePropositionPage,
    };

    let navigator = use_navigator();
    let path = navigator.path();

    view! {
        {move || match parse_route(&path.get()) {
            Route::Dashboard => view! { <AdmissionListPage /> }.into_any(),
            Route::Creation => view! { <CreatePropositionPage /> }.into_any(),
            Route::AdmissionTab { context, uuid, segments } => view! {
                <AdmissionDetailPage context=context uuid=uuid segments=segments />
            }.into_any(),
            Route::NotFound => view! {
                <div class="page not-found">
                    <h1>"Page not found"</h1>
                    <a on:click=move |_| navigator.navigate(DASHBOARD_URL)>
                        "Back to my applications"
                    </a>
                </div>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_routes() {
        assert_eq!(parse_route("/"), Route::Dashboard);
        assert_eq!(parse_route("/admission"), Route::Dashboard);
        assert_eq!(parse_route("/admission/"), Route::Dashboard);
    }

    #[test]
    fn test_creation_route() {
        assert_eq!(parse_route("/admission/create/training-choice"), Route::Creation);
    }

    #[test]
    fn test_admission_tab_route() {
        let uuid = "55375049-9d61-4c11-9f41-7460463a5ae3";
        let route = parse_route(&format!("/admission/doctorate/{uuid}/update/curriculum"));
        assert_eq!(
            route,
            Route::AdmissionTab {
                context: AdmissionContext::Doctorate,
                uuid: Uuid::parse_str(uuid).unwrap(),
                segments: vec!["update".to_string(), "curriculum".to_string()],
            }
        );
    }

    #[test]
    fn test_bare_admission_url_defaults_to_person() {
        let uuid = "55375049-9d61-4c11-9f41-7460463a5ae3";
        let route = parse_route(&format!("/admission/general-education/{uuid}"));
        match route {
            Route::AdmissionTab { segments, .. } => {
                assert_eq!(segments, vec!["person".to_string()])
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_routes() {
        assert_eq!(parse_route("/admission/bachelor/xyz"), Route::NotFound);
        assert_eq!(
            parse_route("/admission/doctorate/not-a-uuid/person"),
            Route::NotFound
        );
        assert_eq!(parse_route("/something-else"), Route::NotFound);
    }

    #[test]
    fn test_route_namespaces_feed_the_resolver() {
        use crate::navigation::resolve_active_tab;

        let segments = vec!["update".to_string(), "curriculum".to_string(), "educational".to_string()];
        let namespaces = route_namespaces(AdmissionContext::Doctorate, &segments);
        assert_eq!(
            namespaces,
            vec!["admission", "doctorate", "update", "curriculum", "educational"]
        );
        assert_eq!(resolve_active_tab(&namespaces), Some("curriculum"));
    }
}
