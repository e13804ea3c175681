pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{admin, auth, content, inbox};

use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::admin::adapter::outgoing::ContentWriterPostgres;
use crate::admin::application::ports::outgoing::ContentWriter;
use crate::admin::application::services::{
    DeleteBlogPostService, DeleteProjectService, EditingContext, NotificationCenter,
    SaveBlogPostService, SaveProfileService, SaveProjectService, SeedContentService,
};
use crate::admin::application::AdminUseCases;
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{AdminAccountsPostgres, RedisSessionRevocation};
use crate::auth::application::ports::outgoing::{AdminAccounts, SessionRevocation};
use crate::auth::application::services::{
    BootstrapAdminService, GetSessionService, LoginService, LogoutService,
};
use crate::auth::application::AuthUseCases;
use crate::config::{AppConfig, ConfigError};
use crate::content::adapter::outgoing::ContentQueryPostgres;
use crate::content::application::domain::defaults::DefaultContentBundle;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::services::ContentRepository;
use crate::inbox::adapter::outgoing::MessageStorePostgres;
use crate::inbox::application::ports::outgoing::MessageStore;
use crate::inbox::application::services::{
    DeleteMessageService, ListMessagesService, OpenMessageService, SubmitMessageService,
};
use crate::inbox::application::InboxUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::backend::{BackendHandles, UnconfiguredBackend};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentRepository>,
    pub notices: Arc<NotificationCenter>,
    pub admin: AdminUseCases,
    pub inbox: InboxUseCases,
    pub auth: AuthUseCases,
}

/// Port implementations for one backend choice.
struct Ports<W, M, A, R> {
    query: Arc<dyn ContentQuery>,
    writer: W,
    messages: M,
    accounts: A,
    revocation: R,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    config::load_dotenv();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    let jwt_config = match JwtConfig::from_env() {
        Ok(jwt_config) => jwt_config,
        Err(ConfigError::Missing(key)) if !config.backend_configured() => {
            warn!(key, "JWT secret not set, signing with an ephemeral key");
            JwtConfig::ephemeral()
        }
        Err(e) => return Err(e).context("Invalid JWT configuration"),
    };
    let tokens = JwtTokenService::new(jwt_config);
    let hasher = Argon2Hasher::from_env().context("Invalid Argon2 parameters")?;

    let (state, handles) = match (&config.database_url, &config.redis_url) {
        (Some(database_url), Some(redis_url)) => {
            let db = Arc::new(connect_database(database_url).await?);
            let redis = Arc::new(
                RedisConfig::from_url(redis_url)
                    .create_pool(Some(Runtime::Tokio1))
                    .context("Failed to create Redis pool")?,
            );

            let ports = Ports {
                query: Arc::new(ContentQueryPostgres::new(Arc::clone(&db))),
                writer: ContentWriterPostgres::new(Arc::clone(&db)),
                messages: MessageStorePostgres::new(Arc::clone(&db)),
                accounts: AdminAccountsPostgres::new(Arc::clone(&db)),
                revocation: RedisSessionRevocation::new(Arc::clone(&redis)),
            };
            let state = build_state(&config, ports, tokens, hasher).await;

            (
                state,
                BackendHandles {
                    db: Some(db),
                    redis: Some(redis),
                },
            )
        }
        _ => {
            warn!("DATABASE_URL not set, serving built-in content with editing disabled");
            let ports = Ports {
                query: Arc::new(UnconfiguredBackend),
                writer: UnconfiguredBackend,
                messages: UnconfiguredBackend,
                accounts: UnconfiguredBackend,
                revocation: UnconfiguredBackend,
            };
            let state = build_state(&config, ports, tokens, hasher).await;

            (state, BackendHandles::unconfigured())
        }
    };

    let snapshot = state.content.load().await;
    info!(
        configured = snapshot.configured,
        sources = ?snapshot.sources,
        "Initial content loaded"
    );

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let state = web::Data::new(state);
    let handles = web::Data::new(handles);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(state.clone())
            .app_data(handles.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
async fn build_state<W, M, A, R>(
    config: &AppConfig,
    ports: Ports<W, M, A, R>,
    tokens: JwtTokenService,
    hasher: Argon2Hasher,
) -> AppState
where
    W: ContentWriter + Clone + 'static,
    M: MessageStore + Clone + 'static,
    A: AdminAccounts + Clone + 'static,
    R: SessionRevocation + Clone + 'static,
{
    let timeouts = config.timeouts;
    let content = Arc::new(ContentRepository::new(
        ports.query,
        DefaultContentBundle::builtin(),
        timeouts.read,
    ));
    let notices = Arc::new(NotificationCenter::new(config.notice_ttl));
    let ctx = EditingContext::new(Arc::clone(&content), Arc::clone(&notices), timeouts.write);

    if let Some(bootstrap) = &config.admin_bootstrap {
        let service = BootstrapAdminService::new(ports.accounts.clone(), hasher.clone());
        match service.run(&bootstrap.email, &bootstrap.password).await {
            Ok(outcome) => info!(?outcome, "Admin bootstrap finished"),
            Err(e) => warn!(error = %e, "Admin bootstrap failed"),
        }
    }

    let writer = ports.writer;
    let admin = AdminUseCases {
        save_project: Arc::new(SaveProjectService::new(writer.clone(), ctx.clone())),
        delete_project: Arc::new(DeleteProjectService::new(writer.clone(), ctx.clone())),
        save_blog_post: Arc::new(SaveBlogPostService::new(writer.clone(), ctx.clone())),
        delete_blog_post: Arc::new(DeleteBlogPostService::new(writer.clone(), ctx.clone())),
        save_profile: Arc::new(SaveProfileService::new(writer.clone(), ctx.clone())),
        seed: Arc::new(SeedContentService::new(writer, ctx)),
    };

    let messages = ports.messages;
    let inbox = InboxUseCases {
        submit: Arc::new(SubmitMessageService::new(messages.clone(), timeouts.write)),
        list: Arc::new(ListMessagesService::new(messages.clone(), timeouts.read)),
        open: Arc::new(OpenMessageService::new(messages.clone(), timeouts.write)),
        delete: Arc::new(DeleteMessageService::new(
            messages,
            Arc::clone(&notices),
            timeouts.write,
        )),
    };

    let auth = AuthUseCases {
        login: Arc::new(LoginService::new(
            ports.accounts,
            hasher,
            tokens.clone(),
            timeouts.read,
        )),
        session: Arc::new(GetSessionService::new(tokens, ports.revocation.clone())),
        logout: Arc::new(LogoutService::new(ports.revocation)),
    };

    AppState {
        content,
        notices,
        admin,
        inbox,
        auth,
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public
    cfg.service(crate::content::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_message_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::save_project_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::new_blog_post_draft_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::save_blog_post_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::delete_blog_post_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_profile_text_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::save_profile_text_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::save_main_info_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::save_contact_info_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::save_skills_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::seed_content_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_notice_handler);
    // Inbox
    cfg.service(crate::inbox::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::open_message_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::delete_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
