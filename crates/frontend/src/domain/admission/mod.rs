pub mod api;
pub mod status_display;
pub mod ui;
