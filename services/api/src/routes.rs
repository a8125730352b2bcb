//! Chat API routes

use anyhow::{Context, Result, bail};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::Utc;
use common::config::CorsConfig;
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::{
        AuthResponse, ChatListResponse, ChatResponse, CreateChatResponse, LoginRequest,
        MessageRequest, SendMessageResponse, SignupRequest, VerifyResponse,
        user::{NewUser, UserView},
    },
    state::AppState,
    validation::MISSING_SIGNUP_FIELDS,
};

/// Every route served, for the startup banner
pub const ROUTES: &[(&str, &str)] = &[
    ("POST", "/api/auth/signup"),
    ("POST", "/api/auth/login"),
    ("GET", "/api/auth/verify"),
    ("POST", "/api/auth/logout"),
    ("GET", "/api/chat/history"),
    ("GET", "/api/chat/:id"),
    ("POST", "/api/chat"),
    ("POST", "/api/chat/:id/message"),
    ("DELETE", "/api/chat/:id"),
    ("DELETE", "/api/chat/clear"),
    ("GET", "/health"),
];

/// Create the router for the chat API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/auth/verify", get(verify))
        .route("/api/chat/history", get(get_chat_history))
        .route("/api/chat", post(create_chat))
        .route("/api/chat/clear", get(get_clear_chat).delete(clear_chats))
        .route("/api/chat/:id", get(get_chat).delete(delete_chat))
        .route("/api/chat/:id/message", post(send_message))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .merge(protected_routes)
        .with_state(state)
}

/// CORS policy for the browser client
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        bail!("wildcard CORS origin cannot be combined with credentials");
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}

fn issue_token(state: &AppState, user_id: &str) -> ApiResult<String> {
    state.jwt_service.issue_token(user_id).map_err(|e| {
        error!("Failed to issue token for user {}: {}", user_id, e);
        ApiError::InternalServerError
    })
}

/// User signup endpoint
pub async fn signup(
    State(state): State<AppState>,
    payload: Option<Json<SignupRequest>>,
) -> ApiResult<impl IntoResponse> {
    let Some(Json(payload)) = payload else {
        return Err(ApiError::BadRequest(MISSING_SIGNUP_FIELDS.to_string()));
    };

    let new_user = NewUser {
        name: payload.name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };

    let user = state.user_repository.register(&new_user)?;
    state.chat_repository.ensure_user(&user.id);
    let token = issue_token(&state, &user.id)?;

    let response = AuthResponse {
        message: "User created successfully".to_string(),
        token,
        user: UserView::from(&user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    payload: Option<Json<LoginRequest>>,
) -> ApiResult<impl IntoResponse> {
    let credentials = payload.and_then(|Json(payload)| {
        let email = payload.email.filter(|email| !email.is_empty())?;
        let password = payload.password.filter(|password| !password.is_empty())?;
        Some((email, password))
    });
    let Some((email, password)) = credentials else {
        return Err(ApiError::BadRequest("Missing email or password".to_string()));
    };

    let user = state.user_repository.authenticate(&email, &password)?;
    let token = issue_token(&state, &user.id)?;
    info!("User {} logged in", user.id);

    let response = AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserView::from(&user),
    };

    Ok(Json(response))
}

/// Token verification endpoint
pub async fn verify(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_id(&auth_user.id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(VerifyResponse {
        user: UserView::from(&user),
    }))
}

/// Logout endpoint
///
/// Tokens are stateless, so there is nothing to revoke server-side.
pub async fn logout() -> impl IntoResponse {
    Json(json!({"message": "Logged out successfully"}))
}

/// List the caller's chats without messages
pub async fn get_chat_history(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let chats = state.chat_repository.list_chats(&auth_user.id).await;
    Ok(Json(ChatListResponse { chats }))
}

/// Get one of the caller's chats
pub async fn get_chat(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let chat = state.chat_repository.get_chat(&auth_user.id, &id).await?;
    Ok(Json(ChatResponse { chat }))
}

/// `clear` only names the DELETE route, so as a chat id it never matches
pub async fn get_clear_chat(
    state: State<AppState>,
    auth_user: Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    get_chat(state, auth_user, Path("clear".to_string())).await
}

/// Start a new chat
pub async fn create_chat(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    payload: Option<Json<MessageRequest>>,
) -> ApiResult<impl IntoResponse> {
    let text = payload.map(|Json(payload)| payload.message).unwrap_or_default();
    let chat = state.chat_repository.create_chat(&auth_user.id, &text).await?;

    let response = CreateChatResponse {
        chat,
        message: "Chat created successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Send a follow-up message to an existing chat
pub async fn send_message(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Option<Json<MessageRequest>>,
) -> ApiResult<impl IntoResponse> {
    let text = payload.map(|Json(payload)| payload.message).unwrap_or_default();
    let reply = state
        .chat_repository
        .append_message(&auth_user.id, &id, &text)
        .await?;

    Ok(Json(SendMessageResponse {
        message: reply.message,
        chat_id: reply.chat_id,
    }))
}

/// Delete one of the caller's chats
pub async fn delete_chat(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.chat_repository.delete_chat(&auth_user.id, &id).await?;
    Ok(Json(json!({"message": "Chat deleted successfully"})))
}

/// Delete all of the caller's chats
pub async fn clear_chats(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    state.chat_repository.clear_all(&auth_user.id).await;
    Ok(Json(json!({"message": "All chats cleared successfully"})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generator::FixedResponseGenerator,
        jwt::{JwtConfig, JwtService},
    };
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let jwt_service = JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry: 3600,
        });
        let state = AppState::new(jwt_service, Arc::new(FixedResponseGenerator::new("Sure.")));
        create_router(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn signup_user(app: &Router, name: &str, email: &str) -> String {
        let (status, body) = send(
            app,
            request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"name": name, "email": email, "password": "pw1"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }

    async fn create_chat_as(app: &Router, token: &str, message: &str) -> Value {
        let (status, body) = send(
            app,
            request(Method::POST, "/api/chat", Some(token), Some(json!({"message": message}))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["chat"].clone()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app();
        let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_signup_login_and_chat_scenario() {
        let app = app();

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"name": "Jane", "email": "jane@x.com", "password": "pw1"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["name"], "Jane");
        assert_eq!(body["user"]["email"], "jane@x.com");
        assert!(body["user"].get("password").is_none());
        let token = body["token"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "jane@x.com", "password": "wrong"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");

        let chat = create_chat_as(&app, &token, "Hi").await;
        assert_eq!(chat["title"], "Hi");
        assert_eq!(chat["messages"].as_array().unwrap().len(), 2);
        assert_eq!(chat["messages"][0]["role"], "user");
        assert_eq!(chat["messages"][1]["role"], "assistant");
        let chat_id = chat["id"].as_str().unwrap();

        let other = signup_user(&app, "John", "john@x.com").await;
        let (status, body) = send(
            &app,
            request(Method::GET, &format!("/api/chat/{chat_id}"), Some(&other), None),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Chat not found");

        let (status, body) = send(
            &app,
            request(Method::GET, &format!("/api/chat/{chat_id}"), Some(&token), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chat"]["id"], chat_id);
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let app = app();

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"name": "Jane", "email": "jane@x.com"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields");

        let (status, _) = send(&app, request(Method::POST, "/api/auth/signup", None, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        signup_user(&app, "Jane", "jane@x.com").await;
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"name": "Other Jane", "email": "jane@x.com", "password": "pw2"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "User already exists");
    }

    #[tokio::test]
    async fn test_signup_accepts_credential_alias() {
        let app = app();
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"name": "Jane", "email": "jane@x.com", "credential": "pw1"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "jane@x.com", "password": "pw1"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
    }

    #[tokio::test]
    async fn test_login_validation_and_uniform_failure() {
        let app = app();
        signup_user(&app, "Jane", "jane@x.com").await;

        let (status, body) = send(
            &app,
            request(Method::POST, "/api/auth/login", None, Some(json!({"email": "jane@x.com"}))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing email or password");

        let (status, unknown) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "nobody@x.com", "password": "pw1"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (_, wrong) = send(
            &app,
            request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "jane@x.com", "password": "nope"})),
            ),
        )
        .await;
        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn test_verify_returns_user() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;

        let (status, body) =
            send(&app, request(Method::GET, "/api/auth/verify", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], "1");
        assert_eq!(body["user"]["email"], "jane@x.com");
    }

    #[tokio::test]
    async fn test_verify_for_vanished_user_is_not_found() {
        let app = app();
        let jwt_service = JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry: 3600,
        });
        let token = jwt_service.issue_token("404").unwrap();

        let (status, body) =
            send(&app, request(Method::GET, "/api/auth/verify", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_protected_routes_require_a_token() {
        let app = app();
        let routes = [
            (Method::GET, "/api/auth/verify"),
            (Method::GET, "/api/chat/history"),
            (Method::GET, "/api/chat/chat-1"),
            (Method::POST, "/api/chat"),
            (Method::POST, "/api/chat/chat-1/message"),
            (Method::DELETE, "/api/chat/chat-1"),
            (Method::DELETE, "/api/chat/clear"),
        ];

        for (method, uri) in routes {
            let (status, body) = send(&app, request(method.clone(), uri, None, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(body["error"], "No token provided");

            let (status, body) =
                send(&app, request(method.clone(), uri, Some("garbage"), None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(body["error"], "Invalid token");
        }
    }

    #[tokio::test]
    async fn test_token_from_another_secret_is_rejected() {
        let app = app();
        let foreign = JwtService::new(JwtConfig {
            secret: "someone-else".to_string(),
            token_expiry: 3600,
        })
        .issue_token("1")
        .unwrap();

        let (status, _) =
            send(&app, request(Method::GET, "/api/chat/history", Some(&foreign), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_always_succeeds() {
        let app = app();
        let (status, body) = send(&app, request(Method::POST, "/api/auth/logout", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Logged out successfully");
    }

    #[tokio::test]
    async fn test_history_lists_newest_first_without_messages() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;

        let (status, body) =
            send(&app, request(Method::GET, "/api/chat/history", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chats"], json!([]));

        let c1 = create_chat_as(&app, &token, "first").await;
        let c2 = create_chat_as(&app, &token, "second").await;

        let (_, body) =
            send(&app, request(Method::GET, "/api/chat/history", Some(&token), None)).await;
        let chats = body["chats"].as_array().unwrap();
        assert_eq!(chats.len(), 2);
        assert_eq!(chats[0]["id"], c2["id"]);
        assert_eq!(chats[1]["id"], c1["id"]);
        assert!(chats[0].get("messages").is_none());
        assert!(chats[0]["created_at"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_create_chat_requires_a_message() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;

        for body in [Some(json!({"message": ""})), Some(json!({})), None] {
            let (status, response) =
                send(&app, request(Method::POST, "/api/chat", Some(&token), body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], "Message is required");
        }
    }

    #[tokio::test]
    async fn test_send_message_returns_only_the_reply() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;
        let chat = create_chat_as(&app, &token, "Hi").await;
        let chat_id = chat["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                &format!("/api/chat/{chat_id}/message"),
                Some(&token),
                Some(json!({"message": "Tell me more"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chat_id"], chat_id);
        assert_eq!(body["message"]["role"], "assistant");
        assert_eq!(body["message"]["content"], "Sure.");

        let (_, body) = send(
            &app,
            request(Method::GET, &format!("/api/chat/{chat_id}"), Some(&token), None),
        )
        .await;
        assert_eq!(body["chat"]["messages"].as_array().unwrap().len(), 4);
        assert_eq!(body["chat"]["messages"][2]["content"], "Tell me more");
    }

    #[tokio::test]
    async fn test_get_clear_is_chat_not_found() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;
        create_chat_as(&app, &token, "Hi").await;

        let (status, body) =
            send(&app, request(Method::GET, "/api/chat/clear", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Chat not found");

        let (status, _) = send(&app, request(Method::GET, "/api/chat/clear", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (_, body) =
            send(&app, request(Method::GET, "/api/chat/history", Some(&token), None)).await;
        assert_eq!(body["chats"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_message_errors() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;
        let chat = create_chat_as(&app, &token, "Hi").await;
        let chat_id = chat["id"].as_str().unwrap();

        let (status, _) = send(
            &app,
            request(
                Method::POST,
                &format!("/api/chat/{chat_id}/message"),
                Some(&token),
                Some(json!({"message": ""})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/chat/chat-missing/message",
                Some(&token),
                Some(json!({"message": "hello"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let other = signup_user(&app, "John", "john@x.com").await;
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                &format!("/api/chat/{chat_id}/message"),
                Some(&other),
                Some(json!({"message": "hijack"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_chat_then_not_found() {
        let app = app();
        let token = signup_user(&app, "Jane", "jane@x.com").await;
        let chat = create_chat_as(&app, &token, "Hi").await;
        let uri = format!("/api/chat/{}", chat["id"].as_str().unwrap());

        let (status, body) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Chat deleted successfully");

        let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request(Method::GET, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent_and_scoped_to_caller() {
        let app = app();
        let jane = signup_user(&app, "Jane", "jane@x.com").await;
        let john = signup_user(&app, "John", "john@x.com").await;
        create_chat_as(&app, &jane, "one").await;
        create_chat_as(&app, &jane, "two").await;
        create_chat_as(&app, &john, "mine").await;

        for _ in 0..2 {
            let (status, body) =
                send(&app, request(Method::DELETE, "/api/chat/clear", Some(&jane), None)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "All chats cleared successfully");
        }

        let (_, body) =
            send(&app, request(Method::GET, "/api/chat/history", Some(&jane), None)).await;
        assert_eq!(body["chats"], json!([]));

        let (_, body) =
            send(&app, request(Method::GET, "/api/chat/history", Some(&john), None)).await;
        assert_eq!(body["chats"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string(), "bad\norigin".to_string()],
        };
        assert!(cors_layer(&config).is_err());

        let wildcard = CorsConfig {
            allowed_origins: vec!["*".to_string()],
        };
        assert!(cors_layer(&wildcard).is_err());

        let valid = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        };
        assert!(cors_layer(&valid).is_ok());
    }
}
