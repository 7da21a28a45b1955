/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use tradeledger_api::{app::{build_router, AppState}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let app = build_router(AppState::new(pool, config));
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::auth::jwt_auth_layer};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use tradeledger_shared::{
    services::{AccountService, TradeService, UserService},
    stores::{AccountStore, PgStore, TradeStore, UserStore},
};

/// Shared application state
///
/// Cloned for each request via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used by the health check
    pub db: PgPool,

    pub config: Arc<Config>,

    pub users: UserService,

    pub accounts: AccountService,

    pub trades: TradeService,
}

impl AppState {
    /// Creates state whose services run on PostgreSQL
    pub fn new(db: PgPool, config: Config) -> Self {
        let store = Arc::new(PgStore::new(db.clone()));
        Self::with_store(db, config, store)
    }

    /// Creates state whose services run on any store
    pub fn with_store<S>(db: PgPool, config: Config, store: Arc<S>) -> Self
    where
        S: UserStore + AccountStore + TradeStore + 'static,
    {
        Self {
            db,
            config: Arc::new(config),
            users: UserService::new(store.clone()),
            accounts: AccountService::new(store.clone()),
            trades: TradeService::new(store.clone(), store),
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// ```text
/// /
/// ├── GET  /                       # greeting (public)
/// ├── GET  /health                 # health check (public)
/// ├── /auth/                       # public
/// │   ├── POST /register
/// │   ├── POST /login
/// │   └── POST /refresh
/// ├── POST   /accounts             # everything below needs a Bearer token
/// ├── GET    /accounts/:id
/// ├── PATCH  /accounts/:id
/// ├── DELETE /accounts/:id
/// ├── GET    /accounts/:id/trades
/// ├── GET    /users/me
/// ├── GET    /users/:id/accounts
/// ├── POST   /trades
/// └── GET    /trades/:id
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let public_routes = Router::new()
        .route("/", get(routes::home::home))
        .route("/health", get(routes::health::health_check));

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/refresh", post(routes::auth::refresh));

    let protected_routes = Router::new()
        .route("/accounts", post(routes::accounts::create_account))
        .route(
            "/accounts/:id",
            get(routes::accounts::get_account)
                .patch(routes::accounts::update_account)
                .delete(routes::accounts::delete_account),
        )
        .route("/accounts/:id/trades", get(routes::trades::list_account_trades))
        .route("/users/me", get(routes::auth::me))
        .route("/users/:id/accounts", get(routes::accounts::list_user_accounts))
        .route("/trades", post(routes::trades::create_trade))
        .route("/trades/:id", get(routes::trades::get_trade))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let cors = if state.config.allows_any_origin() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(public_routes)
        .nest("/auth", auth_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
