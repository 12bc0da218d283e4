use contracts::reference::{Country, Language, Scholarship, Training};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::format::{format_country, format_training_with_year};

/// Debounce applied to autocomplete keystrokes, in milliseconds
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Item displayable in an autocomplete dropdown
pub trait AutocompleteItem {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
}

impl AutocompleteItem for Country {
    fn id(&self) -> String {
        self.iso_code.clone()
    }

    fn display_name(&self) -> String {
        format_country(self)
    }
}

impl AutocompleteItem for Language {
    fn id(&self) -> String {
        self.code.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl AutocompleteItem for Scholarship {
    fn id(&self) -> String {
        self.uuid.to_string()
    }

    fn display_name(&self) -> String {
        Scholarship::display_name(self).to_string()
    }
}

impl AutocompleteItem for Training {
    fn id(&self) -> String {
        self.training_id()
    }

    fn display_name(&self) -> String {
        format_training_with_year(self)
    }
}

/// A stored value only fills an untouched search box
fn should_seed(query: &str, value: &str) -> bool {
    query.is_empty() && !value.is_empty()
}

/// Autocomplete picker bound to a remote search.
///
/// The parent owns the fetch: this component debounces keystrokes, emits
/// `on_query` for the term to search, and renders whatever lands in
/// `results`. A stale in-flight debounce is dropped when a newer keystroke
/// arrives.
#[component]
#[allow(non_snake_case)]
pub fn AutocompletePicker<T>(
    /// Field label
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Placeholder of the search input
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Stored value shown in the search box before the user types,
    /// typically loaded after the picker mounted
    #[prop(optional, into)]
    initial: MaybeProp<String>,
    /// Search results to display
    results: ReadSignal<Vec<T>>,
    /// Search error (if any)
    #[prop(optional)]
    error: Option<ReadSignal<Option<String>>>,
    /// Emitted (debounced) when the user types a search term
    on_query: Callback<String>,
    /// Emitted when the user picks an item
    on_select: Callback<T>,
) -> impl IntoView
where
    T: AutocompleteItem + Clone + Send + Sync + 'static,
{
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);
    let (generation, set_generation) = signal(0u32);

    let error_signal = error.unwrap_or_else(|| {
        let (r, _) = signal(None);
        r
    });

    Effect::new(move |_| {
        if let Some(value) = initial.get() {
            if should_seed(&query.get_untracked(), &value) {
                set_query.set(value);
            }
        }
    });

    let handle_input = move |value: String| {
        set_query.set(value.clone());
        set_open.set(true);
        let this_generation = generation.get_untracked() + 1;
        set_generation.set(this_generation);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // only the latest keystroke triggers a search
            if generation.get_untracked() == this_generation {
                on_query.run(value);
            }
        });
    };

    let field_placeholder = move || placeholder.get().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="form-field autocomplete">
            {move || label.get().map(|l| view! {
                <label class="form-field__label">{l}</label>
            })}
            <input
                class="form-field__input"
                type="text"
                value=move || query.get()
                placeholder=field_placeholder
                on:input=move |ev| handle_input(event_target_value(&ev))
                on:focus=move |_| set_open.set(true)
            />
            <Show when=move || open.get()>
                <ul class="autocomplete__results">
                    {move || {
                        if let Some(err) = error_signal.get() {
                            view! {
                                <li class="autocomplete__error">{err}</li>
                            }.into_any()
                        } else if results.get().is_empty() {
                            view! {
                                <li class="autocomplete__empty">"No result"</li>
                            }.into_any()
                        } else {
                            results.get().into_iter().map(|item| {
                                let display = item.display_name();
                                let display_for_click = display.clone();
                                let item_for_click = item.clone();
                                view! {
                                    <li
                                        class="autocomplete__item"
                                        on:click=move |_| {
                                            set_query.set(display_for_click.clone());
                                            set_open.set(false);
                                            on_select.run(item_for_click.clone());
                                        }
                                    >
                                        {display}
                                    </li>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_never_overwrites_typed_input() {
        assert!(should_seed("", "BE"));
        assert!(!should_seed("Fra", "BE"));
        assert!(!should_seed("", ""));
    }
}

