//! Integration tests for Launchkit.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p launchkit-integration-tests
//! ```
//!
//! Every [`TestContext`] serves the real router on an ephemeral local port,
//! backed by its own migrated in-memory SQLite database. No external services
//! are needed.
//!
//! # Test Categories
//!
//! - `http_routes` - End-to-end HTTP behavior of every route
//! - `landing_pages` - Service-level properties of page and signup storage

#![allow(clippy::expect_used)]

use std::net::SocketAddr;

use reqwest::{Client, Response, StatusCode, header::LOCATION, redirect::Policy};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;

use launchkit_web::state::AppState;
use launchkit_web::{db, routes};

/// A running server plus a client that does not follow redirects.
pub struct TestContext {
    pub client: Client,
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a server on `127.0.0.1:0` with a fresh database.
    pub async fn new() -> Self {
        let pool = migrated_pool().await;
        let app = routes::app(AppState::new(pool.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("build HTTP client");

        Self {
            client,
            addr,
            pool,
            server,
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET a path.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
    }

    /// POST a urlencoded form to a path.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request")
    }

    /// Create a landing page through the HTTP form and return the path it
    /// redirected to.
    pub async fn create_page(&self, title: &str, stripe_url: &str) -> String {
        let response = self
            .post_form(
                "/pages/new",
                &[
                    ("title", title),
                    ("hero_text", "Launch faster with ready-made pages"),
                    ("value_prop", "Collect emails before you build"),
                    ("cta_text", "Buy now"),
                    ("price", "$29"),
                    ("stripe_url", stripe_url),
                ],
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        location(&response)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Fresh, migrated in-memory database.
pub async fn migrated_pool() -> SqlitePool {
    let pool = db::create_in_memory_pool()
        .await
        .expect("in-memory pool");
    db::run_migrations(&pool).await.expect("migrations");
    pool
}

/// The `Location` header of a redirect.
#[must_use]
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("Location header")
        .to_str()
        .expect("ASCII Location header")
        .to_string()
}
