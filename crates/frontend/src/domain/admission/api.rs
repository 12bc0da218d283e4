//! Client for the admissions API gateway.
//!
//! Every call fetches fresh data; permission links are never cached across
//! requests, so visibility always reflects the latest backend state.

use contracts::admission::{
    CreatePropositionDto, Proposition, PropositionBusinessError, PropositionCollection,
    PropositionIdentity, SupervisionMember,
};
use contracts::enums::AdmissionContext;
use contracts::person::{CoordinatesDto, LanguageKnowledgeDto, PersonDto};
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::api_base;

fn admission_url(context: AdmissionContext, uuid: Uuid, suffix: &str) -> String {
    format!(
        "{}/api/propositions/{}/{}{}",
        api_base(),
        context.code(),
        uuid,
        suffix
    )
}

/// All propositions of the current candidate, split per context
pub async fn fetch_propositions() -> Result<PropositionCollection, String> {
    let response = Request::get(&format!("{}/api/propositions", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch propositions: {}", response.status()));
    }

    response
        .json::<PropositionCollection>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// One proposition with its fresh permission links
pub async fn fetch_proposition(
    context: AdmissionContext,
    uuid: Uuid,
) -> Result<Proposition, String> {
    let response = Request::get(&admission_url(context, uuid, ""))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch proposition: {}", response.status()));
    }

    response
        .json::<Proposition>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_proposition(
    dto: &CreatePropositionDto,
) -> Result<PropositionIdentity, String> {
    let response = Request::post(&format!("{}/api/propositions", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create proposition: {}", response.status()));
    }

    response
        .json::<PropositionIdentity>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_person(context: AdmissionContext, uuid: Uuid) -> Result<PersonDto, String> {
    let response = Request::get(&admission_url(context, uuid, "/person"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch person: {}", response.status()));
    }

    response
        .json::<PersonDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_person(
    context: AdmissionContext,
    uuid: Uuid,
    dto: &PersonDto,
) -> Result<(), String> {
    let response = Request::put(&admission_url(context, uuid, "/person"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update person: {}", response.status()));
    }

    Ok(())
}

pub async fn fetch_coordinates(
    context: AdmissionContext,
    uuid: Uuid,
) -> Result<CoordinatesDto, String> {
    let response = Request::get(&admission_url(context, uuid, "/coordonnees"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch coordinates: {}", response.status()));
    }

    response
        .json::<CoordinatesDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_coordinates(
    context: AdmissionContext,
    uuid: Uuid,
    dto: &CoordinatesDto,
) -> Result<(), String> {
    let response = Request::put(&admission_url(context, uuid, "/coordonnees"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update coordinates: {}", response.status()));
    }

    Ok(())
}

/// Languages the candidate declared a knowledge of
pub async fn fetch_languages_knowledge(
    context: AdmissionContext,
    uuid: Uuid,
) -> Result<Vec<LanguageKnowledgeDto>, String> {
    let response = Request::get(&admission_url(context, uuid, "/languages"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch languages: {}", response.status()));
    }

    response
        .json::<Vec<LanguageKnowledgeDto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Replaces the declared languages with `entries`
pub async fn update_languages_knowledge(
    context: AdmissionContext,
    uuid: Uuid,
    entries: &[LanguageKnowledgeDto],
) -> Result<(), String> {
    let response = Request::put(&admission_url(context, uuid, "/languages"))
        .json(&entries)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update languages: {}", response.status()));
    }

    Ok(())
}

/// Dry-run of the submission rules; returns the remaining violations
pub async fn verify_proposition(
    context: AdmissionContext,
    uuid: Uuid,
) -> Result<Vec<PropositionBusinessError>, String> {
    let response = Request::get(&admission_url(context, uuid, "/verify"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to verify proposition: {}", response.status()));
    }

    response
        .json::<Vec<PropositionBusinessError>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn submit_proposition(context: AdmissionContext, uuid: Uuid) -> Result<(), String> {
    let response = Request::post(&admission_url(context, uuid, "/submit"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to submit proposition: {}", response.status()));
    }

    Ok(())
}

/// Supervision panel of a doctorate proposition
pub async fn fetch_supervision(uuid: Uuid) -> Result<Vec<SupervisionMember>, String> {
    let url = admission_url(AdmissionContext::Doctorate, uuid, "/supervision");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch supervision: {}", response.status()));
    }

    response
        .json::<Vec<SupervisionMember>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn request_signatures(uuid: Uuid) -> Result<(), String> {
    let url = admission_url(AdmissionContext::Doctorate, uuid, "/request-signatures");
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to request signatures: {}", response.status()));
    }

    Ok(())
}

pub async fn cancel_proposition(context: AdmissionContext, uuid: Uuid) -> Result<(), String> {
    let response = Request::delete(&admission_url(context, uuid, ""))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to cancel proposition: {}", response.status()));
    }

    Ok(())
}
