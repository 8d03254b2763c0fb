use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use advisor_core::advisors::{AdvisorProfile, NewAdvisorProfile};
use advisor_core::health_status::HealthStatus;
use advisor_core::pagination::PagedResult;

const MASKED_SIN: &str = "*********";
const MASKED_PHONE_NUMBER: &str = "***-***-****";

/// Masks a SIN down to its last four digits: `***-**-6789`.
pub fn mask_sin(sin: Option<&str>) -> String {
    match sin {
        Some(value) if value.chars().count() == 9 => format!("***-**-{}", last_four(value)),
        _ => MASKED_SIN.to_string(),
    }
}

/// Masks a phone number down to its last four digits: `***-***-7890`.
pub fn mask_phone_number(phone_number: Option<&str>) -> String {
    match phone_number {
        Some(value) if value.chars().count() == 10 => format!("***-***-{}", last_four(value)),
        _ => MASKED_PHONE_NUMBER.to_string(),
    }
}

fn last_four(value: &str) -> String {
    let skip = value.chars().count().saturating_sub(4);
    value.chars().skip(skip).collect()
}

/// Body of create and update requests.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisorProfileRequest {
    pub full_name: Option<String>,
    pub sin: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl From<AdvisorProfileRequest> for NewAdvisorProfile {
    fn from(r: AdvisorProfileRequest) -> Self {
        Self {
            full_name: r.full_name.unwrap_or_default(),
            sin: r.sin.unwrap_or_default(),
            address: r.address,
            phone_number: r.phone_number,
        }
    }
}

/// Advisor profile as returned to clients, with sensitive fields masked.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    #[schema(example = "***-**-6789")]
    pub sin: String,
    pub address: Option<String>,
    #[schema(example = "***-***-7890")]
    pub phone_number: String,
    #[schema(value_type = String, example = "Green")]
    pub health_status: HealthStatus,
}

impl From<AdvisorProfile> for AdvisorProfileResponse {
    fn from(p: AdvisorProfile) -> Self {
        Self {
            id: p.id,
            sin: mask_sin(Some(&p.sin)),
            phone_number: mask_phone_number(p.phone_number.as_deref()),
            full_name: p.full_name,
            address: p.address,
            health_status: p.health_status,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorPageResponse {
    pub items: Vec<AdvisorProfileResponse>,
    pub total_records: usize,
    pub page_number: u32,
    pub page_size: u32,
}

impl From<PagedResult<AdvisorProfile>> for AdvisorPageResponse {
    fn from(page: PagedResult<AdvisorProfile>) -> Self {
        let page = page.map(AdvisorProfileResponse::from);
        Self {
            items: page.items,
            total_records: page.total_records,
            page_number: page.page_number,
            page_size: page.page_size,
        }
    }
}

/// Paging parameters. Either one being present selects the paged listing.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number.
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

/// `application/problem+json` error body.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub detail: String,
}
