//! HTTP API module for the Hotel Operations Engine.
//!
//! This module provides the REST API endpoints for capacity forecasting and
//! payroll calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_FORECAST_DAYS, create_router};
pub use request::{ForecastQuery, ForecastRequest, PayrollRequest, PayrollRunRequest, RosterQuery};
pub use response::{ApiError, ForecastResponse, HealthResponse, PayrollRunResponse};
pub use state::AppState;
