//! User management endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::{ApiError, ErrorCode, ErrorResponse};
use crate::state::AppState;
use crate::users::User;
use crate::validation::ValidatedJson;

use super::types::{CreateUserRequest, ListUsersResponse};

/// Create a user.
///
/// The payload is validated before this handler runs; a duplicate email
/// address is rejected with `EMAIL_DUPLICATION`.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.users().create(&req.name, &req.email)?;
    Ok(Json(user))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = u64, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users()
        .get(id)
        .ok_or_else(|| ApiError::code(ErrorCode::UserNotFound))?;
    Ok(Json(user))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = ListUsersResponse),
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.users().list();
    let count = users.len();
    Json(ListUsersResponse { users, count })
}
