//! Seat allocation command.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::output::{print_json, print_output, OutputFormat};

use super::CommandContext;

/// Allocate exam seats (minimum rooms, lowest floors first).
#[derive(Debug, Args)]
pub struct AllocateCommand {
    /// Total number of students to seat.
    #[arg(allow_negative_numbers = true)]
    students: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AllocateBody {
    total_students: i64,
}

/// Allocation plan as returned by the API.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllocationView {
    total_students: u32,
    rooms_used: usize,
    spare_seats: u32,
    allocated_rooms: Vec<AssignmentRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct AssignmentRow {
    #[tabled(rename = "Room")]
    room_id: String,

    #[tabled(rename = "Floor")]
    floor_no: i32,

    #[tabled(rename = "Capacity")]
    capacity: u32,

    #[tabled(rename = "Allocated")]
    allocated_seats: u32,
}

impl AllocateCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        if self.students <= 0 {
            bail!("Please enter valid student count (got {})", self.students);
        }

        let client = ctx.client()?;
        let plan: AllocationView = client
            .post(
                "/api/allocate",
                &AllocateBody {
                    total_students: self.students,
                },
            )
            .await?;

        match ctx.format {
            OutputFormat::Json => print_json(&plan),
            OutputFormat::Table => {
                print_output(&plan.allocated_rooms, ctx.format);
                println!("{}", summary(&plan).bold());
            }
        }
        Ok(())
    }
}

fn summary(plan: &AllocationView) -> String {
    let rooms = if plan.rooms_used == 1 { "room" } else { "rooms" };
    format!(
        "{} students seated in {} {} ({} spare seats)",
        plan.total_students, plan.rooms_used, rooms, plan.spare_seats
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_server_plan() {
        let plan: AllocationView = serde_json::from_value(serde_json::json!({
            "totalStudents": 50,
            "roomsUsed": 2,
            "spareSeats": 10,
            "allocatedRooms": [
                { "roomId": "B", "floorNo": 1, "capacity": 40, "allocatedSeats": 40 },
                { "roomId": "C", "floorNo": 1, "capacity": 20, "allocatedSeats": 10 }
            ]
        }))
        .unwrap();

        assert_eq!(plan.allocated_rooms[1].allocated_seats, 10);
        assert_eq!(summary(&plan), "50 students seated in 2 rooms (10 spare seats)");
    }

    #[test]
    fn test_summary_singular() {
        let plan = AllocationView {
            total_students: 25,
            rooms_used: 1,
            spare_seats: 0,
            allocated_rooms: Vec::new(),
        };
        assert_eq!(summary(&plan), "25 students seated in 1 room (0 spare seats)");
    }

    #[tokio::test]
    async fn test_rejects_non_positive_before_request() {
        let ctx = CommandContext {
            config: crate::config::Config::default(),
            // Nothing listens here; the command must fail before connecting.
            api_url: "http://127.0.0.1:9".to_string(),
            format: OutputFormat::Table,
        };
        let err = AllocateCommand { students: 0 }.run(ctx).await.unwrap_err();
        assert!(err.to_string().contains("valid student count"));
    }
}
