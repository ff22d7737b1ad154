//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use membership_backend::Trace;
use membership_backend::domain::{ProfileService, UserService};
use membership_backend::inbound::http::health::{HealthState, health, live, ready};
use membership_backend::inbound::http::profile::{get_profile, update_profile};
use membership_backend::inbound::http::state::HttpState;
use membership_backend::inbound::http::users::{get_user, list_users, register};
use membership_backend::outbound::memory::InMemoryUserRepository;
#[cfg(debug_assertions)]
use membership_backend::doc::{ApiDoc, OPENAPI_PATH};
#[cfg(not(debug_assertions))]
use membership_backend::doc::openapi_document;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let users = UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        config.clock.clone(),
    );
    let profile = Arc::new(ProfileService::new(config.profile.clone()));
    web::Data::new(HttpState::new(Arc::new(users), profile.clone(), profile))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(get_profile)
        .service(update_profile)
        .service(register)
        .service(get_user)
        .service(list_users)
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/swagger/{_:.*}").url(OPENAPI_PATH, ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app.service(openapi_document);

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Application state is built once and shared by every worker, so all
/// workers see the same user store and profile.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "membership server listening");
    health_state.mark_ready();
    Ok(server)
}

/// Wait for `signal`, then fail liveness and stop the server gracefully.
///
/// Liveness flips before the stop begins so probes report the drain while
/// in-flight requests finish.
pub async fn drain_on(
    signal: impl Future<Output = ()>,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) {
    signal.await;
    health_state.mark_unhealthy();
    info!("shutdown requested, draining connections");
    handle.stop(true).await;
}

/// Resolve on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
