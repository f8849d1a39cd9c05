//! Service layer for business logic orchestration
//!
//! This module contains the service layer that orchestrates resolution,
//! separating concerns from the CLI layer in main.rs.

pub mod resolve;

pub use resolve::{ResolveRequest, ResolveResult, ResolveService};
