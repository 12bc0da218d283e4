pub mod admission;
pub mod enums;
pub mod person;
pub mod reference;
