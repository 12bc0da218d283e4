pub mod admission;
pub mod reference;
