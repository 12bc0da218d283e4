pub mod coordinates;
pub mod languages;
pub mod person;
pub mod training_choice;
