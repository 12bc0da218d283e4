use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an actor in a doctorate supervision panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    Promoter,
    CaMember,
}

impl ActorRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActorRole::Promoter => "Supervisor",
            ActorRole::CaMember => "Committee member",
        }
    }
}

/// Where an actor stands in the signature workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureState {
    NotInvited,
    Invited,
    Approved,
    Declined,
}

impl SignatureState {
    pub fn display_name(&self) -> &'static str {
        match self {
            SignatureState::NotInvited => "Not invited",
            SignatureState::Invited => "Invited",
            SignatureState::Approved => "Approved",
            SignatureState::Declined => "Declined",
        }
    }
}

/// One member of the supervision panel, with their signature progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisionMember {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: ActorRole,
    pub signature_state: SignatureState,
    /// Comment the actor left for the candidate when answering
    #[serde(default)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "uuid": "3290efd4-9e05-4a35-aa5a-8a2ad961e870",
            "first_name": "Marie",
            "last_name": "Curie",
            "role": "CA_MEMBER",
            "signature_state": "INVITED"
        }"#;
        let member: SupervisionMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.role, ActorRole::CaMember);
        assert_eq!(member.signature_state, SignatureState::Invited);
        assert_eq!(member.comment, "");
    }
}
