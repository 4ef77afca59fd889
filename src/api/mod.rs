//! HTTP API module for the Shift Salary Engine.
//!
//! This module provides the REST API endpoints for calculating single-shift
//! salaries and for importing calendar feeds.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ImportRequest};
pub use response::{ApiError, CalculationResponse, ImportResponse};
pub use state::AppState;
