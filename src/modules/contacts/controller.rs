use axum::{Json, extract::State, http::StatusCode};
use schoolpro_core::{ApiResponse, AppError};
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{Contact, CreateContactDto};
use super::service::ContactService;

/// Submit a contact request from the public site
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact recorded", body = ApiResponse<Contact>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Email or school already submitted")
    ),
    tag = "Contacts"
)]
#[instrument(skip(state, dto), fields(contact.email = %dto.email))]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), AppError> {
    let contact = ContactService::create_contact(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(contact))))
}

#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    responses(
        (status = 200, description = "All contacts, newest first", body = ApiResponse<Vec<Contact>>)
    ),
    tag = "Contacts"
)]
pub async fn get_contacts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Contact>>>, AppError> {
    let contacts = ContactService::get_contacts(&state.db).await?;
    Ok(Json(ApiResponse::success(contacts)))
}
