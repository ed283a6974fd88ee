//! Common test utilities for integration tests.
//!
//! Each test builds the router over a fresh in-memory store, so tests run
//! fully isolated with no external services.

pub mod fixtures;

use axum_test::TestServer;

use expound_backend::{router, AppState};

/// Build a test server over a fresh application state.
pub fn test_server() -> TestServer {
    TestServer::new(router(AppState::new())).expect("failed to build test server")
}
