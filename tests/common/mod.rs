#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;

use wordrelay::config::UpstreamConfig;
use wordrelay::handlers;
use wordrelay::models::AppState;

/// Canned answer of a stub server.
#[derive(Clone)]
pub struct StubReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

struct StubState {
    reply: StubReply,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn stub_handler(req: HttpRequest, data: web::Data<StubState>) -> HttpResponse {
    data.queries.lock().unwrap().push(req.query_string().to_string());

    if let Some(delay) = data.reply.delay {
        tokio::time::sleep(delay).await;
    }

    HttpResponse::build(StatusCode::from_u16(data.reply.status).unwrap())
        .content_type(data.reply.content_type)
        .body(data.reply.body.clone())
}

/// HTTP server answering GET `path` with a fixed reply and recording every
/// query string it receives.
pub struct StubServer {
    pub url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(path: &str, reply: StubReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let port = listener.local_addr().unwrap().port();
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(StubState {
            reply,
            queries: queries.clone(),
        });

        let route = path.to_string();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .route(&route, web::get().to(stub_handler))
        })
        .workers(1)
        .listen(listener)
        .expect("listen stub")
        .run();
        actix_web::rt::spawn(server);

        Self {
            url: format!("http://127.0.0.1:{}{}", port, path),
            queries,
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// Relay application state pointed at `base_url`.
pub fn relay_state(base_url: &str, timeout: Duration) -> web::Data<AppState> {
    web::Data::new(AppState::new(UpstreamConfig {
        base_url: base_url.to_string(),
        timeout,
    }))
}

/// Run the real relay on an ephemeral port and return its words endpoint.
pub fn start_relay(upstream_url: &str, timeout: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind relay listener");
    let port = listener.local_addr().unwrap().port();
    let state = relay_state(upstream_url, timeout);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .workers(1)
    .listen(listener)
    .expect("listen relay")
    .run();
    actix_web::rt::spawn(server);

    format!("http://127.0.0.1:{}/api/words", port)
}

/// An address nothing listens on.
pub fn closed_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}
