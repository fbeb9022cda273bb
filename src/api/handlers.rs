//! API Handlers
//!
//! HTTP request handlers for each user endpoint. Each handler is a direct
//! mapping from validated request to store call to response; handlers do not
//! call each other.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{
    CreateUserRequest, CreatedResponse, DeletedResponse, HealthResponse, UpdateUserRequest,
    UpdatedResponse, UserPayload, WelcomeResponse,
};
use crate::store::{user_key, StoreStatus, UserStore};

/// Application state shared across all handlers.
///
/// Holds the long-lived store handle created by the process entry point; the
/// handle is injected here rather than living in a global.
#[derive(Clone)]
pub struct AppState {
    /// Shared backend store handle
    pub store: Arc<dyn UserStore>,
    /// Environment label reported by the welcome endpoint
    pub environment: String,
    /// Backend connection state decided at startup
    pub store_status: StoreStatus,
}

impl AppState {
    /// Creates a new AppState with the given store and environment label.
    pub fn new(
        store: Arc<dyn UserStore>,
        environment: impl Into<String>,
        store_status: StoreStatus,
    ) -> Self {
        Self {
            store,
            environment: environment.into(),
            store_status,
        }
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// Handler for GET /
///
/// Reports the environment label and whether the backend connected at startup.
pub async fn welcome_handler(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new(
        state.environment.clone(),
        state.store_status.as_str(),
    ))
}

/// Handler for POST /users
///
/// Requires `id`, `name` and `email` to all be present and truthy; validation
/// happens before any store call, so a rejected request performs no write.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let (Some(id), Some(name), Some(email)) = (req.id(), req.name(), req.email()) else {
        return Err(ApiError::Validation(
            "id, name, and email are required".to_string(),
        ));
    };

    let fields = vec![
        ("name".to_string(), name.clone()),
        ("email".to_string(), email.clone()),
    ];
    state.store.hash_set(&user_key(&id), &fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, name, email)),
    ))
}

/// Handler for GET /users/:id
///
/// A user exists iff its hash has at least one field; an empty mapping means
/// not found.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserPayload>> {
    let fields = state.store.hash_get_all(&user_key(&id)).await?;
    if fields.is_empty() {
        return Err(ApiError::user_not_found(&id));
    }

    Ok(Json(UserPayload::new(id, fields)))
}

/// Handler for PUT /users/:id
///
/// Accepts partial updates; fields not supplied keep their stored values, and
/// the response echoes only the supplied fields.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UpdatedResponse>> {
    let fields = req.supplied_fields();
    if fields.is_empty() {
        return Err(ApiError::Validation(
            "At least one of name or email is required".to_string(),
        ));
    }

    let key = user_key(&id);
    // exists and hash_set are separate round-trips: a concurrent delete
    // between them recreates the key with only the supplied fields.
    if !state.store.exists(&key).await? {
        return Err(ApiError::user_not_found(&id));
    }
    state.store.hash_set(&key, &fields).await?;

    Ok(Json(UpdatedResponse::new(id, &fields)))
}

/// Handler for DELETE /users/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let removed = state.store.delete(&user_key(&id)).await?;
    if removed == 0 {
        return Err(ApiError::user_not_found(&id));
    }

    Ok(Json(DeletedResponse::new(&id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryUserStore::new()),
            "development",
            StoreStatus::Connected,
        )
    }

    fn create_request(id: &str, name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            id: Some(json!(id)),
            name: Some(json!(name)),
            email: Some(json!(email)),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let state = test_state();

        let req = create_request("123", "Test User", "test@example.com");
        let (status, _) = create_user_handler(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let response = get_user_handler(State(state), Path("123".to_string()))
            .await
            .unwrap();
        assert_eq!(response.id, "123");
        assert_eq!(
            response.fields.get("email").map(String::as_str),
            Some("test@example.com")
        );
    }

    #[tokio::test]
    async fn test_create_missing_field_writes_nothing() {
        let state = test_state();

        let req = CreateUserRequest {
            id: Some(json!("123")),
            name: Some(json!("")),
            email: Some(json!("test@example.com")),
        };
        let result = create_user_handler(State(state.clone()), Json(req)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let result = get_user_handler(State(state), Path("123".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_user() {
        let state = test_state();

        let result = get_user_handler(State(state), Path("ghost".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_requires_a_field() {
        let state = test_state();

        let result = update_user_handler(
            State(state),
            Path("123".to_string()),
            Json(UpdateUserRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_nonexistent_user() {
        let state = test_state();

        let req = UpdateUserRequest {
            name: Some(json!("Updated Name")),
            email: None,
        };
        let result = update_user_handler(State(state), Path("ghost".to_string()), Json(req)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_field() {
        let state = test_state();

        let req = create_request("123", "Test User", "test@example.com");
        create_user_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        let update = UpdateUserRequest {
            name: Some(json!("Updated Name")),
            email: None,
        };
        let response = update_user_handler(State(state.clone()), Path("123".to_string()), Json(update))
            .await
            .unwrap();
        // Only the supplied field is echoed
        assert!(response.user.fields.get("email").is_none());

        let stored = get_user_handler(State(state), Path("123".to_string()))
            .await
            .unwrap();
        assert_eq!(
            stored.fields.get("name").map(String::as_str),
            Some("Updated Name")
        );
        assert_eq!(
            stored.fields.get("email").map(String::as_str),
            Some("test@example.com")
        );
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let state = test_state();

        let req = create_request("123", "Test User", "test@example.com");
        create_user_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        let response = delete_user_handler(State(state.clone()), Path("123".to_string()))
            .await
            .unwrap();
        assert_eq!(response.message, "User with id 123 deleted");

        let result = delete_user_handler(State(state), Path("123".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "UP");
    }

    #[tokio::test]
    async fn test_welcome_handler() {
        let response = welcome_handler(State(test_state())).await;
        assert_eq!(response.message, "Welcome to UserAPI");
        assert_eq!(response.environment, "development");
        assert_eq!(response.redis_status, "connected");
    }
}
