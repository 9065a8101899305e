//! HTTP request handlers for the Hotel Operations Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_payroll, compute_payroll_with, forecast, summarize_forecast, summarize_payroll,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DateRange, HotelCapacityConfig, MaintenanceHold, MultiDayBooking, PayrollCalculation,
    SingleDayBooking, StaffRecord,
};

use super::request::{
    ForecastQuery, ForecastRequest, PayrollRequest, PayrollRunRequest, RosterQuery,
};
use super::response::{
    ApiError, ApiErrorResponse, ForecastResponse, HealthResponse, PayrollRunResponse,
};
use super::state::AppState;

/// Longest forecast window accepted, in days.
pub const MAX_FORECAST_DAYS: i64 = 366;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/capacity/forecast",
            post(forecast_handler).get(stored_forecast_handler),
        )
        .route("/payroll/calculate", post(payroll_calculate_handler))
        .route("/payroll/run", post(payroll_run_handler))
        .route("/payroll/roster", get(roster_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Handler for POST /capacity/forecast.
///
/// Forecasts over the bookings and holds supplied in the body.
async fn forecast_handler(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    let hotel = request
        .hotel
        .clone()
        .unwrap_or_else(|| state.config().hotel().clone());

    let result = validate_forecast_range(&request.range).and_then(|range| {
        request
            .multi_day_bookings
            .iter()
            .try_for_each(MultiDayBooking::validate)?;
        Ok(run_forecast(
            &range,
            &request.multi_day_bookings,
            &request.single_day_bookings,
            &request.maintenance_holds,
            &hotel,
            correlation_id,
        ))
    });

    match result {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => engine_error_response(err, correlation_id, "Forecast failed"),
    }
}

/// Handler for GET /capacity/forecast.
///
/// Forecasts over the bookings, holds and inventory held in the store.
async fn stored_forecast_handler(
    State(state): State<AppState>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing stored forecast request");

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => return error_response(query_rejection_error(rejection, correlation_id)),
    };

    let result = (|| -> EngineResult<ForecastResponse> {
        let range = validate_forecast_range(&DateRange {
            start: query.start,
            end: query.end,
        })?;
        let inputs = state.bookings().load_forecast_inputs(&range)?;
        Ok(run_forecast(
            &range,
            &inputs.multi_day_bookings,
            &inputs.single_day_bookings,
            &inputs.maintenance_holds,
            &inputs.hotel,
            correlation_id,
        ))
    })();

    match result {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => engine_error_response(err, correlation_id, "Stored forecast failed"),
    }
}

/// Handler for POST /payroll/calculate.
///
/// Returns one payroll line with its audit trace.
async fn payroll_calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    let pay_date = request.pay_date.unwrap_or_else(|| Utc::now().date_naive());
    let result = perform_payroll_calculation(&state, &request.staff, pay_date);

    match result {
        Ok(calculation) => {
            for warning in &calculation.audit_trace.warnings {
                warn!(
                    correlation_id = %correlation_id,
                    staff_id = %request.staff.id,
                    code = %warning.code,
                    "{}",
                    warning.message
                );
            }
            info!(
                correlation_id = %correlation_id,
                staff_id = %request.staff.id,
                schedule = %calculation.tax_schedule_version,
                net_pay = %calculation.line.net_pay,
                duration_us = calculation.audit_trace.duration_us,
                "Payroll calculation completed successfully"
            );
            json_response(StatusCode::OK, calculation)
        }
        Err(err) => engine_error_response(err, correlation_id, "Payroll calculation failed"),
    }
}

/// Handler for POST /payroll/run.
async fn payroll_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    let pay_date = request.pay_date.unwrap_or_else(|| Utc::now().date_naive());
    match perform_payroll_run(&state, &request.staff, pay_date, correlation_id) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => engine_error_response(err, correlation_id, "Payroll run failed"),
    }
}

/// Handler for GET /payroll/roster.
///
/// Runs payroll over every staff member in the store.
async fn roster_handler(
    State(state): State<AppState>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster payroll request");

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => return error_response(query_rejection_error(rejection, correlation_id)),
    };

    let pay_date = query.pay_date.unwrap_or_else(|| Utc::now().date_naive());
    let result = state
        .staff()
        .load_staff_roster()
        .and_then(|roster| perform_payroll_run(&state, &roster, pay_date, correlation_id));

    match result {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => engine_error_response(err, correlation_id, "Roster payroll failed"),
    }
}

/// Rejects inverted ranges and windows longer than [`MAX_FORECAST_DAYS`].
fn validate_forecast_range(range: &DateRange) -> EngineResult<DateRange> {
    let range = DateRange::new(range.start, range.end)?;
    let days = range.num_days();
    if days > MAX_FORECAST_DAYS {
        return Err(EngineError::ForecastWindowTooLarge {
            days,
            max: MAX_FORECAST_DAYS,
        });
    }
    Ok(range)
}

fn run_forecast(
    range: &DateRange,
    multi_day_bookings: &[MultiDayBooking],
    single_day_bookings: &[SingleDayBooking],
    maintenance_holds: &[MaintenanceHold],
    hotel: &HotelCapacityConfig,
    correlation_id: Uuid,
) -> ForecastResponse {
    let start_time = Instant::now();
    let days = forecast(
        range,
        multi_day_bookings,
        single_day_bookings,
        maintenance_holds,
        hotel,
    );
    let summary = summarize_forecast(&days);

    info!(
        correlation_id = %correlation_id,
        start = %range.start,
        end = %range.end,
        bookings = multi_day_bookings.len(),
        room_only = single_day_bookings.len(),
        holds = maintenance_holds.len(),
        days_needing_outsourcing = summary.days_needing_outsourcing,
        duration_us = start_time.elapsed().as_micros(),
        "Forecast completed successfully"
    );

    ForecastResponse {
        forecast_id: Uuid::new_v4(),
        days,
        summary,
    }
}

fn perform_payroll_calculation(
    state: &AppState,
    staff: &StaffRecord,
    pay_date: NaiveDate,
) -> EngineResult<PayrollCalculation> {
    staff.validate()?;
    let rules = state.config().payroll_rules(pay_date)?;
    Ok(calculate_payroll(staff, &rules))
}

fn perform_payroll_run(
    state: &AppState,
    staff: &[StaffRecord],
    pay_date: NaiveDate,
    correlation_id: Uuid,
) -> EngineResult<PayrollRunResponse> {
    let start_time = Instant::now();
    staff.iter().try_for_each(StaffRecord::validate)?;
    check_roster_total(staff)?;
    let rules = state.config().payroll_rules(pay_date)?;

    let lines: Vec<_> = staff
        .iter()
        .map(|s| compute_payroll_with(s, &rules))
        .collect();
    let totals = summarize_payroll(&lines);

    info!(
        correlation_id = %correlation_id,
        headcount = totals.headcount,
        schedule = %rules.tax_schedule.version,
        net_pay = %totals.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll run completed successfully"
    );

    Ok(PayrollRunResponse {
        lines,
        totals,
        schedule_version: rules.tax_schedule.version,
    })
}

/// Every run total is bounded by the roster's total gross income.
fn check_roster_total(staff: &[StaffRecord]) -> EngineResult<()> {
    staff
        .iter()
        .try_fold(Decimal::ZERO, |total, s| {
            total.checked_add(s.checked_gross_income()?)
        })
        .map(|_| ())
        .ok_or_else(|| EngineError::InvalidStaff {
            field: "staff".to_string(),
            message: "roster gross income total is out of range".to_string(),
        })
}

fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn query_rejection_error(rejection: QueryRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string error"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
}

fn engine_error_response(err: EngineError, correlation_id: Uuid, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}",
        context
    );
    error_response(err.into())
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
