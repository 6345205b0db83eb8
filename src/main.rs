pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::jwt::DemoTokenSigner;
use crate::modules::auth::adapter::outgoing::{GoTrueAuthProvider, UnconfiguredAuthProvider};
use crate::modules::auth::application::ports::outgoing::{AuthProvider, DemoTokenProvider};
use crate::modules::auth::application::services::AuthService;
use crate::modules::client_state::adapter::outgoing::CookiePolicy;
use crate::modules::client_state::application::services::PreferencesService;
use crate::modules::contact::application::ports::incoming::use_cases::ContactUseCase;
use crate::modules::contact::application::services::ContactService;
use crate::modules::content::application::ports::incoming::use_cases::PublicContentUseCase;
use crate::modules::content::application::services::{AdminContentService, PublicContentService};
use crate::modules::dashboard::application::services::DashboardService;
use crate::modules::remote_store::adapter::outgoing::{
    InMemoryRemoteStore, NullRemoteStore, PostgrestStore,
};
use crate::modules::remote_store::application::ports::outgoing::RemoteStore;
use crate::modules::remote_store::application::services::DataAccess;
use crate::modules::seed::application::domain::SampleContent;
use crate::modules::seed::application::services::SeedSync;
use crate::modules::visitor::application::domain::TrackerPolicy;
use crate::modules::visitor::application::services::VisitorTracker;
use crate::shared::api::custom_json_config;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::config::{AppConfig, StoreMode};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Every service the routes use, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub public_content: Arc<dyn PublicContentUseCase + Send + Sync>,
    pub admin_content: AdminContentService,
    pub contact: Arc<dyn ContactUseCase + Send + Sync>,
    pub visitors: VisitorTracker,
    pub auth: AuthService,
    pub dashboard: DashboardService,
    pub seed: SeedSync,
    pub preferences: PreferencesService,
    pub cookie_policy: CookiePolicy,
    pub store: DataAccess,
}

fn build_store(config: &AppConfig) -> std::io::Result<Arc<dyn RemoteStore>> {
    match (config.store_mode, config.remote.as_ref()) {
        (StoreMode::Remote, Some(remote)) => {
            let store = PostgrestStore::new(remote)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            info!(url = %remote.url, "Using remote store");
            Ok(Arc::new(store))
        }
        (StoreMode::Memory, _) => {
            warn!("Using in-memory store: content is lost on restart");
            Ok(Arc::new(InMemoryRemoteStore::new()))
        }
        _ => {
            warn!("No remote store configured: serving empty content");
            Ok(Arc::new(NullRemoteStore))
        }
    }
}

fn build_auth_provider(config: &AppConfig) -> std::io::Result<Arc<dyn AuthProvider>> {
    match config.remote.as_ref() {
        Some(remote) if config.store_mode == StoreMode::Remote => {
            let provider = GoTrueAuthProvider::new(remote, config.jwt_secret.as_deref())
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            if config.jwt_secret.is_none() {
                warn!("SUPABASE_JWT_SECRET is not set: stored sign-ins cannot be verified");
            }
            Ok(Arc::new(provider))
        }
        _ => Ok(Arc::new(UnconfiguredAuthProvider)),
    }
}

fn build_demo_tokens(config: &AppConfig) -> Arc<dyn DemoTokenProvider> {
    match config.demo_token_secret.as_deref() {
        Some(secret) => Arc::new(DemoTokenSigner::new(secret.as_bytes())),
        None => {
            if config.demo.enabled {
                warn!("DEMO_TOKEN_SECRET is not set: demo sessions end on restart");
            }
            Arc::new(DemoTokenSigner::ephemeral())
        }
    }
}

fn build_state(config: &AppConfig) -> std::io::Result<AppState> {
    let access = DataAccess::new(build_store(config)?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let tracker_policy = TrackerPolicy {
        dedupe_window: config.visit_dedupe_window,
    };
    if !config.demo.enabled {
        info!("Demo sign-in is disabled");
    }

    Ok(AppState {
        public_content: Arc::new(PublicContentService::new(access.clone())),
        admin_content: AdminContentService::new(access.clone()),
        contact: Arc::new(ContactService::new(access.clone())),
        visitors: VisitorTracker::new(access.clone(), clock.clone(), tracker_policy),
        auth: AuthService::new(
            build_auth_provider(config)?,
            config.demo.clone(),
            build_demo_tokens(config),
        ),
        dashboard: DashboardService::new(access.clone(), clock),
        seed: SeedSync::new(access.clone(), SampleContent::default_portfolio()),
        preferences: PreferencesService::new(),
        cookie_policy: CookiePolicy {
            secure: config.cookie_secure,
        },
        store: access,
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_env_files();
    let config = AppConfig::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;

    let state = build_state(&config)?;
    let server_url = config.bind_address();
    info!(environment = %config.environment, "Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{auth, client_state, contact, content, dashboard, seed, visitor};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public content
    cfg.service(content::adapter::incoming::web::routes::get_site_handler);
    cfg.service(content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(content::adapter::incoming::web::routes::get_project_handler);
    cfg.service(content::adapter::incoming::web::routes::get_certificates_handler);
    cfg.service(content::adapter::incoming::web::routes::get_posts_handler);
    cfg.service(content::adapter::incoming::web::routes::get_post_handler);
    cfg.service(content::adapter::incoming::web::routes::get_gallery_handler);
    cfg.service(content::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(content::adapter::incoming::web::routes::get_education_handler);
    cfg.service(content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(content::adapter::incoming::web::routes::get_cv_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::submit_message_handler);
    // Visitors
    cfg.service(visitor::adapter::incoming::web::routes::track_visit_handler);
    // Preferences
    cfg.service(client_state::adapter::incoming::web::routes::get_preferences_handler);
    cfg.service(client_state::adapter::incoming::web::routes::put_preferences_handler);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_handler);
    cfg.service(auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(auth::adapter::incoming::web::routes::session_handler);
    // Admin
    cfg.service(dashboard::adapter::incoming::web::routes::get_dashboard_handler);
    cfg.service(contact::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(contact::adapter::incoming::web::routes::mark_message_handler);
    cfg.service(contact::adapter::incoming::web::routes::delete_message_handler);
    cfg.service(visitor::adapter::incoming::web::routes::list_visitors_handler);
    cfg.service(seed::adapter::incoming::web::routes::run_seed_handler);
    content::adapter::incoming::web::routes::configure_admin_content(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
