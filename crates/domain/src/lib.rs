//! # quickstart-domain
//!
//! Pure domain model for the quickstart API.
//!
//! ## Responsibilities
//! - Foundational types: error conventions and parameter coercion
//! - Define **model names** (the closed set of known architectures)
//! - Define **items** (the request-body record) and the bounded item id
//! - Define **catalog entries** and paging over them
//! - Contain all validation rules, so adapters only decide *where* a value
//!   came from, never *whether* it is valid
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.

pub mod error;
pub mod param;

pub mod catalog;
pub mod item;
pub mod model_name;
