//! # API Shared
//!
//! Shared definitions for the ChargedFile APIs.
//!
//! Contains:
//! - Response types (`types` module), serialisable and described for OpenAPI
//! - The fixed response messages every surface answers with
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; kept separate so another surface can answer with the same shapes.

pub mod health;
pub mod messages;
pub mod types;

pub use health::HealthService;
pub use types::*;
