//! Search clients for the reference-data services (countries, languages,
//! scholarships, trainings). All endpoints take a free-text `search` term
//! and answer one page of results.

use contracts::enums::AdmissionContext;
use contracts::reference::{Country, Language, Paginated, Scholarship, Training};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

const PAGE_SIZE: usize = 20;

async fn search<T: serde::de::DeserializeOwned>(
    path: &str,
    term: &str,
    extra: &str,
) -> Result<Paginated<T>, String> {
    let url = format!(
        "{}{}?search={}&page_size={}{}",
        api_base(),
        path,
        urlencoding::encode(term),
        PAGE_SIZE,
        extra,
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Search failed: {}", response.status()));
    }

    let page = response
        .json::<Paginated<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if page.has_next(0, PAGE_SIZE) {
        log::debug!(
            "Search '{}' on {} matched {} results, showing the first {}",
            term,
            path,
            page.count,
            PAGE_SIZE,
        );
    }
    Ok(page)
}

pub async fn search_countries(term: &str) -> Result<Paginated<Country>, String> {
    search("/api/reference/countries", term, "").await
}

pub async fn search_languages(term: &str) -> Result<Paginated<Language>, String> {
    search("/api/reference/languages", term, "").await
}

pub async fn search_scholarships(term: &str) -> Result<Paginated<Scholarship>, String> {
    search("/api/reference/scholarships", term, "").await
}

/// Trainings open to the given admission context
pub async fn search_trainings(
    context: AdmissionContext,
    term: &str,
) -> Result<Paginated<Training>, String> {
    let extra = format!("&context={}", context.code());
    search("/api/reference/trainings", term, &extra).await
}
