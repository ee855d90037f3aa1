//! Shared setup for API integration tests.
//!
//! The router is the production one; only the store is swapped for the
//! in-memory implementation so tests run without PostgreSQL.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use vidshelf_api::setup::routes::setup_routes;
use vidshelf_api::state::AppState;
use vidshelf_core::models::VideoResponse;
use vidshelf_core::Config;
use vidshelf_db::{InMemoryVideoStore, VideoStore};

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryVideoStore>,
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(Config::default())
}

pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let store = Arc::new(InMemoryVideoStore::new());
    let videos: Arc<dyn VideoStore> = store.clone();
    let state = Arc::new(AppState::new(config.clone(), videos));

    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp { server, store }
}

impl TestApp {
    /// POST a video and assert it was created.
    pub async fn add_video(&self, name: &str, url: &str, notes: &str) -> VideoResponse {
        let response = self
            .server
            .post("/api/v0/videos")
            .json(&json!({ "name": name, "url": url, "notes": notes }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<VideoResponse>()
    }

    pub async fn stored_count(&self) -> i64 {
        self.store
            .count_videos()
            .await
            .expect("Failed to count videos")
    }
}
