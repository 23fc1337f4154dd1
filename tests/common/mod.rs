#![allow(dead_code)]

// In-process HTTP server standing in for the remote fixture host.
//
// Routes:
// - /big.json   serves the configured body and counts hits
// - /moved      302 redirect to /big.json
// - /missing    404

use actix_web::dev::ServerHandle;
use actix_web::{http::header, web, App, HttpResponse, HttpServer};
use fixture_prep::FixtureConfig;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

struct ServerState {
    body: Vec<u8>,
    hits: Arc<AtomicUsize>,
}

async fn serve_fixture(state: web::Data<ServerState>) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok()
        .content_type("application/json")
        .body(state.body.clone())
}

async fn redirect_to_fixture() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/big.json"))
        .finish()
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("no such fixture")
}

pub struct FixtureServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl FixtureServer {
    /// Binds to an ephemeral localhost port and serves `body` at /big.json.
    /// Must be called from within an actix runtime (`#[actix_web::test]`).
    pub fn start(body: impl Into<Vec<u8>>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let data = web::Data::new(ServerState { body: body.into(), hits: hits.clone() });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/big.json", web::get().to(serve_fixture))
                .route("/moved", web::get().to(redirect_to_fixture))
                .route("/missing", web::get().to(not_found))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fixture server");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: format!("http://{}", addr),
            hits,
            handle,
        }
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Number of requests served at /big.json so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Scratch directory holding the JSON and CBOR fixture paths for one test.
pub struct TestEnv {
    _tmp: TempDir,
    pub json_path: PathBuf,
    pub cbor_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let json_path = tmp.path().join("big.json");
        let cbor_path = tmp.path().join("big.cbor");
        Self { _tmp: tmp, json_path, cbor_path }
    }

    pub fn config(&self, url: impl Into<String>) -> FixtureConfig {
        FixtureConfig::new(url, &self.json_path, &self.cbor_path)
    }
}

/// Client that ignores proxy settings from the environment so localhost is reached directly.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().expect("build client")
}
