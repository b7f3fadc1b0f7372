use axum::{extract::State, Json};
use mongodb::Database;
use serde::{Deserialize, Serialize};

use models::errors::ModelError;
use models::user;

use super::MessageOutput;
use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub db: Database,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
    pub role: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Account record echoed back on login. The password never appears here.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub dob: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginOutput {
    pub message: String,
    pub user: LoginUser,
}

#[utoipa::path(post, path = "/signup", tag = "auth", request_body = SignupInput, responses((status = 200, description = "Account created"), (status = 409, description = "Email already registered"), (status = 500, description = "Server error")))]
pub async fn signup(
    State(state): State<ServerState>,
    Json(input): Json<SignupInput>,
) -> Result<Json<MessageOutput>, ApiError> {
    // Existence check then insert; two concurrent signups with the same
    // email can both pass the check.
    let existing = user::find_by_email(&state.db, &input.email)
        .await
        .map_err(|e| ApiError::server("Signup failed due to server error", e))?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Email already registered. Please use a different email or login to your existing account."
                .to_string(),
        ));
    }

    let model = user::Model {
        id: None,
        name: input.name,
        email: input.email,
        password: input.password,
        dob: input.dob,
        role: input.role,
    };
    user::create(&state.db, model).await.map_err(|e| match e {
        ModelError::Unacknowledged => ApiError::Server("Signup failed".to_string()),
        other => ApiError::server("Signup failed due to server error", other),
    })?;

    Ok(Json(MessageOutput {
        message: "Account created successfully!".to_string(),
    }))
}

#[utoipa::path(post, path = "/login", tag = "auth", request_body = LoginInput, responses((status = 200, description = "Logged in"), (status = 404, description = "No such user"), (status = 401, description = "Incorrect password"), (status = 500, description = "Server error")))]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let found = user::find_by_email(&state.db, &input.email)
        .await
        .map_err(|e| ApiError::server("Login failed due to server error", e))?;
    let Some(user) = found else {
        return Err(ApiError::NotFound(
            "User not found. Please check your email or sign up.".to_string(),
        ));
    };

    // Passwords are stored verbatim; plain string comparison.
    if user.password != input.password {
        return Err(ApiError::Unauthorized(
            "Incorrect password. Please try again.".to_string(),
        ));
    }

    let id = user.id.map(|oid| oid.to_hex()).unwrap_or_default();
    Ok(Json(LoginOutput {
        message: "Login successful!".to_string(),
        user: LoginUser {
            id,
            name: user.name,
            email: user.email,
            role: user.role,
            dob: user.dob,
        },
    }))
}
