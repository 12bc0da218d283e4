pub mod api;
pub mod picker;

pub use picker::{AutocompleteItem, AutocompletePicker};
