use leptos::prelude::*;

/// Labelled read-only value, the building block of every detail tab.
///
/// Empty values render a dash so the layout stays aligned.
#[component]
pub fn FieldData(
    /// Field label
    #[prop(into)]
    name: String,
    /// Field value
    #[prop(optional, into)]
    data: MaybeProp<String>,
    /// Additional CSS classes on the wrapping element
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let value = move || {
        data.get()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "-".to_string())
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <dl class=move || format!("field-data {}", additional_class())>
            <dt class="field-data__label">{name}</dt>
            <dd class="field-data__value">{value}</dd>
        </dl>
    }
}
