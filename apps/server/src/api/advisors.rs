use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{
        AdvisorPageResponse, AdvisorProfileRequest, AdvisorProfileResponse, PageParams,
        ProblemDetails,
    },
};
use advisor_core::{
    advisors::{AdvisorProfile, AdvisorProfileValidator, ModelValidator, NewAdvisorProfile},
    errors::Error as CoreError,
    repository::Entity,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

fn not_found(id: Uuid) -> ApiError {
    CoreError::NotFound(format!("{} with Id '{}' not found.", AdvisorProfile::NAME, id)).into()
}

/// A literal `null` body decodes to `None`.
fn require_profile(body: Option<AdvisorProfileRequest>) -> ApiResult<NewAdvisorProfile> {
    body.map(NewAdvisorProfile::from).ok_or_else(|| {
        CoreError::NullInput(AdvisorProfileValidator::new().null_message().to_string()).into()
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/advisors",
    params(PageParams),
    responses(
        (status = 200, description = "All advisors, or one page when paging parameters are given", body = [AdvisorProfileResponse]),
        (status = 400, body = ProblemDetails),
        (status = 422, body = ProblemDetails)
    )
)]
pub async fn list_advisors(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    if params.page_number.is_none() && params.page_size.is_none() {
        let advisors = state.advisor_query_service.get_advisors().await?;
        let body: Vec<AdvisorProfileResponse> =
            advisors.into_iter().map(AdvisorProfileResponse::from).collect();
        return Ok(Json(body).into_response());
    }

    let page_number = params.page_number.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.default_page_size);
    if page_size > state.max_page_size {
        return Err(CoreError::invalid(format!(
            "pageSize must be {} or less.",
            state.max_page_size
        ))
        .into());
    }
    let page = state
        .advisor_query_service
        .get_advisors_paged(page_number, page_size)
        .await?;
    Ok(Json(AdvisorPageResponse::from(page)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/advisors/{id}",
    params(("id" = Uuid, Path, description = "Advisor id")),
    responses((status = 200, body = AdvisorProfileResponse), (status = 404, body = ProblemDetails))
)]
pub async fn get_advisor(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<AdvisorProfileResponse>> {
    let Path(id) = id?;
    let advisor = state
        .advisor_query_service
        .get_advisor(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(AdvisorProfileResponse::from(advisor)))
}

#[utoipa::path(
    post,
    path = "/api/v1/advisors",
    request_body = AdvisorProfileRequest,
    responses(
        (status = 201, body = AdvisorProfileResponse),
        (status = 400, body = ProblemDetails),
        (status = 422, body = ProblemDetails)
    )
)]
pub async fn create_advisor(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<AdvisorProfileRequest>>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = payload?;
    let created = state
        .advisor_command_service
        .create_advisor(require_profile(body)?)
        .await?;
    let location = format!("/api/v1/advisors/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AdvisorProfileResponse::from(created)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/advisors/{id}",
    params(("id" = Uuid, Path, description = "Advisor id")),
    request_body = AdvisorProfileRequest,
    responses(
        (status = 200, body = AdvisorProfileResponse),
        (status = 400, body = ProblemDetails),
        (status = 404, body = ProblemDetails),
        (status = 422, body = ProblemDetails)
    )
)]
pub async fn update_advisor(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Option<AdvisorProfileRequest>>, JsonRejection>,
) -> ApiResult<Json<AdvisorProfileResponse>> {
    let Path(id) = id?;
    let Json(body) = payload?;
    let updated = state
        .advisor_command_service
        .update_advisor(id, require_profile(body)?)
        .await?;
    Ok(Json(AdvisorProfileResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/advisors/{id}",
    params(("id" = Uuid, Path, description = "Advisor id")),
    responses((status = 200, body = AdvisorProfileResponse), (status = 404, body = ProblemDetails))
)]
pub async fn delete_advisor(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<AdvisorProfileResponse>> {
    let Path(id) = id?;
    let deleted = state
        .advisor_command_service
        .delete_advisor(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(AdvisorProfileResponse::from(deleted)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/advisors", get(list_advisors).post(create_advisor))
        .route(
            "/advisors/{id}",
            get(get_advisor).put(update_advisor).delete(delete_advisor),
        )
}
