use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use application::relay::RelayHub;
use cache::{FreshnessCache, SessionStore};
use config::Config;
use database::{ProductStore, UserStore};
use graphql::ProductSchema;

pub mod application;
pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub products: Arc<ProductStore>,
    pub users: Arc<UserStore>,
    pub sessions: Arc<SessionStore>,
    pub data_cache: Arc<FreshnessCache>,
    pub relay: Arc<RelayHub>,
    pub schema: ProductSchema,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let products = Arc::new(ProductStore::new(config.products_path.clone()));
        Self {
            users: Arc::new(UserStore::new()),
            sessions: Arc::new(SessionStore::new(config.session_ttl())),
            data_cache: Arc::new(FreshnessCache::new(
                config.cache_path.clone(),
                config.cache_ttl(),
            )),
            relay: Arc::new(RelayHub::new()),
            schema: graphql::build_schema(products.clone()),
            products,
            config: Arc::new(config),
        }
    }
}

/// 组装 HTTP API：公开路由、需要会话的路由、GraphQL 与前端静态资源
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route(
            "/products",
            get(routes::product::list_products).post(routes::product::create_product),
        )
        .route(
            "/products/{id}",
            get(routes::product::get_product)
                .put(routes::product::update_product)
                .delete(routes::product::delete_product),
        )
        .route("/register", post(routes::user::register))
        .route("/login", post(routes::user::login))
        .route("/logout", post(routes::user::logout))
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route("/health", get(|| async { "ok" }));

    let protected_routes = Router::new()
        .route("/profile", get(routes::user::profile))
        .route("/data", get(routes::data::get_data))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(axum::middleware::from_fn(middleware::log_errors));

    let router = router.layer(cors_layer(state.config.cors_origin.clone()));

    router.with_state(state)
}

/// 允许单一前端来源携带 cookie 访问
fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
