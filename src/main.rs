use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use airdrop_tracker::bootstrap::app_context::{AppContext, AppServices};
use airdrop_tracker::bootstrap::config::{Config, StorageBackend};
use airdrop_tracker::infrastructure::local::{JsonFileKvStore, LocalBackend};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            airdrop_tracker::presentation::http::health::health,
            airdrop_tracker::presentation::http::auth::register,
            airdrop_tracker::presentation::http::auth::login,
            airdrop_tracker::presentation::http::auth::logout,
            airdrop_tracker::presentation::http::auth::me,
            airdrop_tracker::presentation::http::auth::delete_me,
            airdrop_tracker::presentation::http::airdrops::list_airdrops,
            airdrop_tracker::presentation::http::airdrops::create_airdrop,
            airdrop_tracker::presentation::http::airdrops::get_airdrop,
            airdrop_tracker::presentation::http::airdrops::update_airdrop,
            airdrop_tracker::presentation::http::airdrops::delete_airdrop,
            airdrop_tracker::presentation::http::airdrops::get_stats,
            airdrop_tracker::presentation::http::wallets::list_wallets,
            airdrop_tracker::presentation::http::wallets::create_wallet,
            airdrop_tracker::presentation::http::wallets::delete_wallet,
            airdrop_tracker::presentation::http::social_accounts::list_social_accounts,
            airdrop_tracker::presentation::http::social_accounts::create_social_account,
            airdrop_tracker::presentation::http::social_accounts::delete_social_account,
            airdrop_tracker::presentation::http::categories::list_categories,
            airdrop_tracker::presentation::http::categories::create_category,
            airdrop_tracker::presentation::http::categories::delete_category,
            airdrop_tracker::presentation::http::preferences::get_theme,
            airdrop_tracker::presentation::http::preferences::set_theme,
        ),
        components(schemas(
            airdrop_tracker::presentation::http::error::ErrorBody,
            airdrop_tracker::presentation::http::health::HealthResp,
            airdrop_tracker::presentation::http::auth::RegisterRequest,
            airdrop_tracker::presentation::http::auth::LoginRequest,
            airdrop_tracker::presentation::http::auth::LoginResponse,
            airdrop_tracker::presentation::http::auth::UserResponse,
            airdrop_tracker::presentation::http::airdrops::AirdropResponse,
            airdrop_tracker::presentation::http::airdrops::AirdropCard,
            airdrop_tracker::presentation::http::airdrops::AirdropRequest,
            airdrop_tracker::presentation::http::airdrops::DashboardResponse,
            airdrop_tracker::presentation::http::airdrops::PaginationResponse,
            airdrop_tracker::presentation::http::airdrops::StatsResponse,
            airdrop_tracker::presentation::http::wallets::WalletResponse,
            airdrop_tracker::presentation::http::wallets::WalletListResponse,
            airdrop_tracker::presentation::http::wallets::CreateWalletRequest,
            airdrop_tracker::presentation::http::social_accounts::SocialAccountResponse,
            airdrop_tracker::presentation::http::social_accounts::SocialAccountListResponse,
            airdrop_tracker::presentation::http::social_accounts::CreateSocialAccountRequest,
            airdrop_tracker::presentation::http::categories::CategoryResponse,
            airdrop_tracker::presentation::http::categories::CategoryListResponse,
            airdrop_tracker::presentation::http::categories::CreateCategoryRequest,
            airdrop_tracker::presentation::http::preferences::ThemeBody,
            airdrop_tracker::domain::airdrops::airdrop::AirdropStatus,
            airdrop_tracker::domain::social_accounts::social_account::SocialPlatform,
            airdrop_tracker::domain::preferences::theme::Theme,
        )),
        tags(
            (name = "Auth", description = "Authentication"),
            (name = "Airdrops", description = "Airdrop tracking and dashboard"),
            (name = "Settings", description = "Wallets, social accounts and categories"),
            (name = "Preferences", description = "Per-user preferences"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn cors_layer(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin).allow_credentials(true),
        // In production FRONTEND_URL is mandatory (enforced by Config); deny anything else
        _ if cfg.is_production => {
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
        }
        // Development convenience
        _ => base
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "airdrop_tracker=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(storage = ?cfg.storage_backend, api_port = cfg.api_port, "Starting airdrop tracker");

    let services = match cfg.storage_backend {
        StorageBackend::Local => {
            let store = Arc::new(JsonFileKvStore::open(&cfg.local_store_path).await?);
            info!(path = %store.path().display(), "local_store_ready");
            AppServices::local(LocalBackend::new(store.clone()), store)
        }
        StorageBackend::Postgres => {
            let pool = airdrop_tracker::infrastructure::db::connect_pool(&cfg.database_url).await?;
            airdrop_tracker::infrastructure::db::migrate(&pool).await?;
            info!("database_ready");
            AppServices::postgres(pool)
        }
    };

    let ctx = AppContext::new(cfg.clone(), services);

    let app = airdrop_tracker::presentation::http::router(ctx)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
    }
}
