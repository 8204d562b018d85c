use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use rt_api::app::configure_api;
use rt_api::middleware::auth::{AuthGate, SessionAuthenticator};
use rt_api::middleware::cors::create_cors;
use rt_api::routes::AppState;

use rt_core::services::session::{InMemoryRevocationRegistry, SessionService, SessionServiceConfig};
use rt_infra::database::create_pool;
use rt_infra::database::mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};
use rt_infra::security::BcryptPasswordHasher;
use rt_shared::config::{AuthConfig, DatabaseConfig, ServerConfig};

type UserRepo = Arc<MySqlUserRepository>;
type RefreshRepo = Arc<MySqlRefreshTokenRepository>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RunTrack API Server");

    let server_config = load_server_config();
    let auth_config = load_auth_config();
    let database_config = load_database_config();

    if auth_config.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the placeholder signing secret");
    }

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let user_repository: UserRepo = Arc::new(MySqlUserRepository::new(pool.clone()));
    let refresh_token_repository: RefreshRepo = Arc::new(MySqlRefreshTokenRepository::new(pool));
    let registry = Arc::new(InMemoryRevocationRegistry::new());

    let session_service = Arc::new(SessionService::new(
        refresh_token_repository.clone(),
        user_repository.clone(),
        registry,
        SessionServiceConfig::from(&auth_config),
    ));

    let app_state = web::Data::new(AppState {
        session_service: session_service.clone(),
        user_repository: user_repository.clone(),
        password_hasher: BcryptPasswordHasher::new(),
    });
    let authenticator: web::Data<Arc<dyn SessionAuthenticator>> =
        web::Data::new(session_service as Arc<dyn SessionAuthenticator>);

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let login_path = auth_config.login_path.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(authenticator.clone())
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthGate::new(login_path.clone()))
            .configure(configure_api::<RefreshRepo, UserRepo, BcryptPasswordHasher>)
    })
    .bind(&bind_address)?;

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.run().await
}

fn load_server_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        config.host = host;
    }
    if let Ok(port) = env::var("SERVER_PORT") {
        match port.parse() {
            Ok(port) => config.port = port,
            Err(_) => log::warn!("SERVER_PORT is not a valid port number; using {}", config.port),
        }
    }
    if let Ok(workers) = env::var("SERVER_WORKERS") {
        config.workers = workers.parse().unwrap_or(0);
    }
    config
}

fn load_auth_config() -> AuthConfig {
    let mut config = match env::var("JWT_SECRET") {
        Ok(secret) => AuthConfig::new(secret),
        Err(_) => AuthConfig::default(),
    };
    if let Ok(ttl) = env::var("ACCESS_TOKEN_TTL_SECS") {
        if let Ok(ttl) = ttl.parse() {
            config.access_token_ttl = ttl;
        }
    }
    if let Ok(ttl) = env::var("REFRESH_TOKEN_TTL_SECS") {
        if let Ok(ttl) = ttl.parse() {
            config.refresh_token_ttl = ttl;
        }
    }
    config
}

fn load_database_config() -> DatabaseConfig {
    let mut config = DatabaseConfig::default();
    if let Ok(url) = env::var("DATABASE_URL") {
        config.url = url;
    }
    if let Ok(max) = env::var("DATABASE_MAX_CONNECTIONS") {
        config.max_connections = max.parse().unwrap_or(config.max_connections);
    }
    config
}
