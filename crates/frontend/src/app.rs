use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::routes::Navigator;

#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    // Provide the navigator to the whole app via context.
    let navigator = Navigator::new();
    navigator.listen();
    provide_context(navigator);

    view! {
        <AppRoutes />
    }
}
