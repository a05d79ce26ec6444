//! Seat allocation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use seatplan_seating::{allocate_demand, AllocationError, Demand, SeatAssignment};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

/// Create allocation routes, merged under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/allocate", post(allocate_seats))
}

/// Request body for an allocation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateRequest {
    /// Student count, as a JSON integer or the text typed into a form.
    pub total_students: Option<Value>,
}

/// Allocation plan returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateResponse {
    pub total_students: u32,
    pub rooms_used: usize,
    pub spare_seats: u32,
    pub allocated_rooms: Vec<SeatAssignment>,
}

fn demand_from(value: Option<&Value>) -> Result<Demand, AllocationError> {
    match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Demand::new(v),
            None => Err(AllocationError::InvalidDemand {
                input: n.to_string(),
            }),
        },
        Some(Value::String(s)) => Demand::parse(s),
        Some(other) => Err(AllocationError::InvalidDemand {
            input: other.to_string(),
        }),
        None => Err(AllocationError::InvalidDemand {
            input: String::new(),
        }),
    }
}

/// Allocate rooms for a number of students.
///
/// POST /api/allocate
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
async fn allocate_seats(
    ctx: RequestContext,
    State(state): State<AppState>,
    body: Result<Json<AllocateRequest>, JsonRejection>,
) -> Result<Json<AllocateResponse>, ApiError> {
    // The demand is the only field, so an unreadable body is an unreadable demand.
    let Json(req) = body.map_err(|rejection| {
        let e = AllocationError::InvalidDemand {
            input: rejection.body_text(),
        };
        warn!(error = %e, "Rejected allocation request body");
        ApiError::from(e).with_request_id(ctx.request_id.clone())
    })?;

    // Reject bad demand before reading the catalog.
    let demand = demand_from(req.total_students.as_ref()).map_err(|e| {
        warn!(error = %e, "Rejected allocation request");
        ApiError::from(e).with_request_id(ctx.request_id.clone())
    })?;

    let rooms = state
        .catalog()
        .list()
        .await
        .map_err(|e| ApiError::from(e).with_request_id(ctx.request_id.clone()))?;

    let plan = allocate_demand(demand, &rooms).map_err(|e| {
        match &e {
            AllocationError::Internal { .. } => {
                error!(error = %e, catalog_rooms = rooms.len(), "Allocation invariant violated")
            }
            _ => warn!(error = %e, catalog_rooms = rooms.len(), "Allocation failed"),
        }
        ApiError::from(e).with_request_id(ctx.request_id.clone())
    })?;

    info!(
        total_students = plan.total_students(),
        rooms_used = plan.rooms_used(),
        spare_seats = plan.spare_seats(),
        "Seats allocated"
    );

    Ok(Json(AllocateResponse {
        total_students: plan.total_students(),
        rooms_used: plan.rooms_used(),
        spare_seats: plan.spare_seats(),
        allocated_rooms: plan.into_assignments(),
    }))
}
