pub mod links;
pub mod proposition;
pub mod supervision;

pub use links::{ActionLink, ActionLinkMap, ActionLinked};
pub use proposition::{
    CreatePropositionDto, Proposition, PropositionBusinessError, PropositionCollection,
    PropositionIdentity, TrainingSummary,
};
pub use supervision::{ActorRole, SignatureState, SupervisionMember};
