//! Classroom catalog endpoints.
//!
//! Thin CRUD over the room catalog: add, list, get and remove rooms.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use seatplan_id::RoomId;
use seatplan_seating::{Classroom, ClassroomError};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::api::error::{ApiError, FieldError};
use crate::api::fields;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

/// Create classroom routes, nested under `/api/classrooms`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classrooms).post(create_classroom))
        .route("/{room_id}", get(get_classroom).delete(delete_classroom))
}

/// Request to add a classroom.
///
/// Numeric fields are kept as raw JSON so both `30` and `"30"` are accepted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassroomRequest {
    pub room_id: Option<String>,
    pub capacity: Option<serde_json::Value>,
    pub floor_no: Option<serde_json::Value>,
    pub near_washroom: Option<serde_json::Value>,
}

impl CreateClassroomRequest {
    /// Validate every field, collecting all problems at once.
    fn into_classroom(self) -> Result<Classroom, Vec<FieldError>> {
        let mut errors = Vec::new();

        let room_id = match self.room_id.as_deref().map(RoomId::parse) {
            Some(Ok(id)) => Some(id),
            Some(Err(e)) => {
                errors.push(FieldError::new("roomId", e.to_string()));
                None
            }
            None => {
                errors.push(FieldError::new("roomId", "is required"));
                None
            }
        };

        let capacity = fields::bounded::<u32>("capacity", self.capacity.as_ref())
            .map_err(|e| errors.push(e))
            .ok();
        let floor_no = fields::bounded::<i32>("floorNo", self.floor_no.as_ref())
            .map_err(|e| errors.push(e))
            .ok();
        let near_washroom = fields::flag("nearWashroom", self.near_washroom.as_ref())
            .map_err(|e| errors.push(e))
            .ok();

        let (Some(room_id), Some(capacity), Some(floor_no), Some(near_washroom)) =
            (room_id, capacity, floor_no, near_washroom)
        else {
            return Err(errors);
        };

        Classroom::new(room_id, capacity, floor_no, near_washroom).map_err(|e| match e {
            ClassroomError::ZeroCapacity => {
                vec![FieldError::new("capacity", "must be greater than zero")]
            }
            ClassroomError::CapacityTooLarge { max, .. } => {
                vec![FieldError::new("capacity", format!("must be at most {max}"))]
            }
            ClassroomError::InvalidRoomId(e) => vec![FieldError::new("roomId", e.to_string())],
        })
    }
}

fn parse_room_id(raw: &str, ctx: &RequestContext) -> Result<RoomId, ApiError> {
    RoomId::parse(raw).map_err(|e| {
        ApiError::bad_request("invalid_room_id", format!("Invalid room ID: {e}"))
            .with_request_id(ctx.request_id.clone())
    })
}

/// List classrooms in catalog order.
///
/// GET /api/classrooms
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
async fn list_classrooms(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> Result<Json<Vec<Classroom>>, ApiError> {
    let rooms = state
        .catalog()
        .list()
        .await
        .map_err(|e| ApiError::from(e).with_request_id(ctx.request_id.clone()))?;
    Ok(Json(rooms))
}

/// Add a classroom.
///
/// POST /api/classrooms
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
async fn create_classroom(
    ctx: RequestContext,
    State(state): State<AppState>,
    body: Result<Json<CreateClassroomRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::from(e).with_request_id(ctx.request_id.clone()))?;

    let room = req.into_classroom().map_err(|details| {
        ApiError::bad_request("invalid_classroom", "Classroom fields are invalid")
            .with_details(details)
            .with_request_id(ctx.request_id.clone())
    })?;

    state
        .catalog()
        .insert(room.clone())
        .await
        .map_err(|e| ApiError::from(e).with_request_id(ctx.request_id.clone()))?;

    info!(
        room_id = %room.room_id(),
        capacity = room.capacity(),
        floor_no = room.floor_no(),
        "Classroom added"
    );

    Ok((StatusCode::CREATED, Json(room)))
}

/// Get one classroom.
///
/// GET /api/classrooms/{room_id}
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
async fn get_classroom(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Classroom>, ApiError> {
    let room_id = parse_room_id(&room_id, &ctx)?;
    let room = state
        .catalog()
        .get(&room_id)
        .await
        .map_err(|e| ApiError::from(e).with_request_id(ctx.request_id.clone()))?;
    Ok(Json(room))
}

/// Remove a classroom.
///
/// DELETE /api/classrooms/{room_id}
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
async fn delete_classroom(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let room_id = parse_room_id(&room_id, &ctx)?;
    state
        .catalog()
        .remove(&room_id)
        .await
        .map_err(|e| ApiError::from(e).with_request_id(ctx.request_id.clone()))?;

    info!(room_id = %room_id, "Classroom removed");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateClassroomRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_form_strings_accepted() {
        let room = request(json!({
            "roomId": "A-101",
            "capacity": "30",
            "floorNo": "2",
            "nearWashroom": false
        }))
        .into_classroom()
        .unwrap();
        assert_eq!(room.capacity(), 30);
        assert_eq!(room.floor_no(), 2);
    }

    #[test]
    fn test_all_field_errors_reported() {
        let errors = request(json!({ "roomId": "", "capacity": "lots" }))
            .into_classroom()
            .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["roomId", "capacity", "floorNo"]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let errors = request(json!({ "roomId": "B", "capacity": 0, "floorNo": 1 }))
            .into_classroom()
            .unwrap_err();
        assert_eq!(errors[0].field, "capacity");
    }

    #[test]
    fn test_capacity_beyond_storage_range_rejected() {
        let errors = request(json!({ "roomId": "HALL", "capacity": 3_000_000_000u64, "floorNo": 0 }))
            .into_classroom()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "capacity");
        assert_eq!(errors[0].message, "must be at most 2147483647");
    }
}
