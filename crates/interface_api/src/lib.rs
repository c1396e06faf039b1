//! HTTP API Layer
//!
//! This crate provides the REST API for the lost & found service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, config::ApiConfig};
//!
//! let state = AppState::initialize(pool, ApiConfig::from_env()?)?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimResolutionService;
use domain_matching::MatchSelector;
use infra_db::{
    ChatRepository, ClaimsRepository, ItemRepository, NotificationFeedSubscriber,
    NotificationRepository, PostgresClaimStore, PostgresFoundItemSource, UserRepository,
};
use infra_external::{
    AdvisorConfig, ChatCompletionAdvisor, EmailClient, EmailConfig, ExternalError,
    ResolutionEmailSubscriber,
};

use crate::config::ApiConfig;
use crate::handlers::{chat, claims, health, items, matching, notifications, users};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
    pub users: UserRepository,
    pub items: ItemRepository,
    pub claims: ClaimsRepository,
    pub notifications: NotificationRepository,
    pub chat: ChatRepository,
    pub resolution: Arc<ClaimResolutionService>,
    pub selector: Arc<MatchSelector>,
}

impl AppState {
    /// Wires repositories, external clients, and domain services from
    /// the pool and configuration.
    ///
    /// Fails only when an HTTP client cannot be constructed; no network
    /// traffic happens here.
    pub fn initialize(pool: PgPool, config: ApiConfig) -> Result<Self, ExternalError> {
        let users = UserRepository::new(pool.clone());
        let items = ItemRepository::new(pool.clone());
        let claims = ClaimsRepository::new(pool.clone());
        let notifications = NotificationRepository::new(pool.clone());
        let chat = ChatRepository::new(pool.clone());

        let email = EmailClient::new(EmailConfig {
            api_url: config.email_api_url.clone(),
            api_key: config.email_api_key.clone(),
            from: config.email_from.clone(),
            ..EmailConfig::default()
        })?;

        let advisor = ChatCompletionAdvisor::new(AdvisorConfig {
            api_url: config.advisor_api_url.clone(),
            api_key: config.advisor_api_key.clone(),
            model: config.advisor_model.clone(),
            timeout: Duration::from_secs(30),
            ..AdvisorConfig::default()
        })?;

        let store = Arc::new(PostgresClaimStore::new(claims.clone(), items.clone()));
        let resolution = Arc::new(
            ClaimResolutionService::new(store)
                .with_subscriber(Arc::new(NotificationFeedSubscriber::new(
                    notifications.clone(),
                )))
                .with_subscriber(Arc::new(ResolutionEmailSubscriber::new(email))),
        );

        let selector = Arc::new(MatchSelector::new(
            Arc::new(PostgresFoundItemSource::new(items.clone())),
            Arc::new(advisor),
            config.storage_public_base.clone(),
        ));

        Ok(Self {
            pool,
            config,
            users,
            items,
            claims,
            notifications,
            chat,
            resolution,
            selector,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Wired application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", post(claims::create_claim))
        .route("/", get(claims::list_claims))
        .route("/:id/process", post(claims::process_claim));

    // Item catalog routes, including per-item chat threads
    let item_routes = Router::new()
        .route("/", get(items::list_items))
        .route("/", post(items::report_item))
        .route("/:id", get(items::get_item))
        .route("/:id/messages", get(chat::list_messages))
        .route("/:id/messages", post(chat::post_message));

    // User routes
    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .route("/me", put(users::sync_profile));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/items", item_routes)
        .nest("/users", user_routes)
        .route("/match", post(matching::find_match))
        .route("/notifications", get(notifications::list_notifications))
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
