pub mod field_data;
pub mod ui;

pub use field_data::FieldData;
