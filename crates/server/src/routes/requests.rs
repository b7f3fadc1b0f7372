use axum::extract::{Path, State};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use models::errors::ModelError;
use models::service_request::{self, Decision, RequestId};

use super::auth::ServerState;
use super::MessageOutput;
use crate::errors::ApiError;

fn default_status() -> String {
    service_request::STATUS_PENDING.to_string()
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestInput {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub service_type: String,
    pub requirements: String,
    pub cost: f64,
    #[serde(default = "default_status")]
    pub status: String,
    pub created_at: String,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestOutput {
    pub message: String,
    pub request_id: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionInput {
    pub caregiver_id: String,
    pub caregiver_name: String,
    pub caregiver_email: String,
}

/// Stored request with the store id surfaced as a plain string field.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestOutput {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub service_type: String,
    pub requirements: String,
    pub cost: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
}

impl From<service_request::Model> for RequestOutput {
    fn from(model: service_request::Model) -> Self {
        Self {
            id: model.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user_id: model.user_id,
            user_name: model.user_name,
            user_email: model.user_email,
            service_type: model.service_type,
            requirements: model.requirements,
            cost: model.cost,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            caregiver_id: model.caregiver_id,
            caregiver_name: model.caregiver_name,
            caregiver_email: model.caregiver_email,
            processed_at: model.processed_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PendingOutput {
    pub requests: Vec<RequestOutput>,
}

#[utoipa::path(post, path = "/service-request", tag = "requests", request_body = CreateRequestInput, responses((status = 200, description = "Request created"), (status = 500, description = "Server error")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateRequestInput>,
) -> Result<Json<CreateRequestOutput>, ApiError> {
    let model = service_request::Model {
        id: None,
        user_id: input.user_id,
        user_name: input.user_name,
        user_email: input.user_email,
        service_type: input.service_type,
        requirements: input.requirements,
        cost: input.cost,
        status: input.status,
        created_at: input.created_at,
        // server-set; client input is ignored
        updated_at: now_iso(),
        caregiver_id: None,
        caregiver_name: None,
        caregiver_email: None,
        processed_at: None,
    };

    let id = service_request::create(&state.db, model)
        .await
        .map_err(|e| match e {
            ModelError::Unacknowledged => {
                ApiError::Server("Failed to create service request".to_string())
            }
            other => ApiError::server("Failed to create service request", other),
        })?;

    Ok(Json(CreateRequestOutput {
        message: "Service request created successfully!".to_string(),
        request_id: id.to_hex(),
    }))
}

#[utoipa::path(get, path = "/service-requests/pending", tag = "requests", responses((status = 200, description = "Pending requests, newest first"), (status = 500, description = "Server error")))]
pub async fn pending(
    State(state): State<ServerState>,
) -> Result<Json<PendingOutput>, ApiError> {
    let requests = service_request::find_pending(&state.db)
        .await
        .map_err(|e| ApiError::server("Failed to fetch service requests", e))?;
    Ok(Json(PendingOutput {
        requests: requests.into_iter().map(RequestOutput::from).collect(),
    }))
}

#[utoipa::path(
    patch,
    path = "/service-request/{id}/{action}",
    tag = "requests",
    params(
        ("id" = String, Path, description = "Service request identifier"),
        ("action" = String, Path, description = "approve or reject")
    ),
    request_body = ActionInput,
    responses(
        (status = 200, description = "Decision recorded"),
        (status = 400, description = "Invalid action or id"),
        (status = 404, description = "No such request"),
        (status = 500, description = "Server error")
    )
)]
pub async fn handle_action(
    State(state): State<ServerState>,
    Path((request_id, action)): Path<(String, String)>,
    Json(input): Json<ActionInput>,
) -> Result<Json<MessageOutput>, ApiError> {
    let status = match action.as_str() {
        "approve" => service_request::STATUS_APPROVED,
        "reject" => service_request::STATUS_REJECTED,
        _ => {
            return Err(ApiError::BadRequest(
                "Invalid action. Use 'approve' or 'reject'".to_string(),
            ))
        }
    };

    let id: RequestId = request_id
        .parse()
        .map_err(|_: ModelError| ApiError::BadRequest("Invalid request ID format".to_string()))?;

    // No current-status guard: a decided request is overwritten wholesale.
    let now = now_iso();
    let matched = service_request::apply_decision(
        &state.db,
        &id,
        &Decision {
            status: status.to_string(),
            caregiver_id: input.caregiver_id,
            caregiver_name: input.caregiver_name,
            caregiver_email: input.caregiver_email,
            processed_at: now.clone(),
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::server("Failed to process service request", e))?;

    if !matched {
        return Err(ApiError::NotFound("Service request not found".to_string()));
    }

    Ok(Json(MessageOutput {
        message: format!("Request {status} successfully!"),
    }))
}
