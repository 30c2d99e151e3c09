//! # quickstart-app
//!
//! Application layer — use-cases, response documents and **port definitions**.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ItemCatalog` — ordered, read-only listing of demo items
//! - Define **use-case services**:
//!   - `ItemService` — paged catalog reads
//! - Define the **response documents** each endpoint returns, so their JSON
//!   shape is owned here rather than by the HTTP adapter
//!
//! ## Dependency rule
//! Depends on `quickstart-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod documents;
pub mod ports;
pub mod services;
