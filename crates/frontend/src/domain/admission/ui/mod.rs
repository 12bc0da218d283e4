pub mod confirm_submit;
pub mod detail;
pub mod forms;
pub mod languages;
pub mod list;
pub mod supervision;
pub mod tab_bar;

pub use detail::AdmissionDetailPage;
pub use forms::training_choice::CreatePropositionPage;
pub use list::AdmissionListPage;
