//! # quickstart-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/`, `/models/…`, `/files/…`, `/items…`)
//! - Read path segments, query values and bodies through extractors that
//!   reject unreadable requests before dispatch
//! - Hand raw values to the domain parsing functions and map their
//!   [`QuickstartError`](quickstart_domain::error::QuickstartError)s to
//!   `422` responses
//! - Map application documents into JSON responses
//!
//! ## Dependency rule
//! Depends on `quickstart-app` (for port traits, services and documents) and
//! `quickstart-domain` (for parsing and error types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
