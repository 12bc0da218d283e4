pub mod admission_context;
pub mod admission_status;
pub mod language_knowledge;
pub mod training_type;

pub use admission_context::AdmissionContext;
pub use admission_status::AdmissionStatus;
pub use language_knowledge::LanguageKnowledgeGrade;
pub use training_type::TrainingType;
