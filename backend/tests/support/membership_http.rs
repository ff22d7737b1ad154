//! In-process HTTP world shared by the membership behaviour suites.
//!
//! Each world owns an Actix `SystemRunner` and real in-memory adapters, so
//! steps drive the same handlers and middleware the binary mounts without
//! binding a socket.

use std::sync::Arc;

use actix_rt::SystemRunner;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use membership_backend::Trace;
use membership_backend::domain::{ProfileService, TRACE_ID_HEADER, UserService};
use membership_backend::inbound::http::profile::{get_profile, update_profile};
use membership_backend::inbound::http::state::HttpState;
use membership_backend::inbound::http::users::{get_user, list_users, register};
use membership_backend::outbound::memory::InMemoryUserRepository;
use mockable::DefaultClock;
use serde_json::Value;

pub(crate) struct HttpWorld {
    runner: SystemRunner,
    state: web::Data<HttpState>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

impl HttpWorld {
    /// Build a world backed by an empty user store and the seed profile.
    pub(crate) fn new() -> Self {
        let users = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(DefaultClock),
        );
        let profile = Arc::new(ProfileService::default());
        Self {
            runner: actix_rt::System::new(),
            state: web::Data::new(HttpState::new(Arc::new(users), profile.clone(), profile)),
            last_status: None,
            last_body: None,
            last_trace_id: None,
        }
    }

    /// Send `request` through a freshly initialised app sharing this world's
    /// state, recording status, JSON body, and trace header.
    pub(crate) fn send(&mut self, request: test::TestRequest) {
        let state = self.state.clone();
        let (status, trace_id, body) = self.runner.block_on(async move {
            let app = test::init_service(app(state)).await;
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = test::read_body(response).await;
            let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
            (status, trace_id, body)
        });
        self.last_status = Some(status);
        self.last_trace_id = trace_id;
        self.last_body = Some(body);
    }

    pub(crate) fn body(&self) -> &Value {
        self.last_body.as_ref().expect("a response should be recorded")
    }

    pub(crate) fn status(&self) -> u16 {
        self.last_status.expect("a response should be recorded")
    }
}

fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .service(register)
        .service(get_user)
        .service(list_users)
        .service(get_profile)
        .service(update_profile)
}
