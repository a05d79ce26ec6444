//! Classroom commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use seatplan_id::RoomId;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_json, print_output, print_success, OutputFormat};

use super::CommandContext;

/// Classroom commands.
#[derive(Debug, Args)]
pub struct RoomsCommand {
    #[command(subcommand)]
    command: RoomsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoomsSubcommand {
    /// List all classrooms.
    List,

    /// Show one classroom.
    Get(RoomArgs),

    /// Add a classroom.
    Add(AddRoomArgs),

    /// Remove a classroom.
    Remove(RoomArgs),
}

#[derive(Debug, Args)]
struct RoomArgs {
    /// Room ID (e.g. A-101).
    room: RoomId,
}

#[derive(Debug, Args)]
struct AddRoomArgs {
    /// Room ID (e.g. A-101).
    room: RoomId,

    /// Number of seats.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(i32::MAX)))]
    capacity: u32,

    /// Floor number (negative for basements).
    #[arg(long, allow_negative_numbers = true)]
    floor: i32,

    /// Mark the room as near a washroom.
    #[arg(long)]
    near_washroom: bool,
}

impl RoomsCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            RoomsSubcommand::List => list_rooms(ctx).await,
            RoomsSubcommand::Get(args) => get_room(ctx, args).await,
            RoomsSubcommand::Add(args) => add_room(ctx, args).await,
            RoomsSubcommand::Remove(args) => remove_room(ctx, args).await,
        }
    }
}

/// Classroom as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassroomView {
    #[tabled(rename = "Room ID")]
    room_id: String,

    #[tabled(rename = "Floor")]
    floor_no: i32,

    #[tabled(rename = "Capacity")]
    capacity: u32,

    #[tabled(rename = "Washroom", display = "display_yes_no")]
    near_washroom: bool,
}

fn display_yes_no(value: &bool) -> String {
    if *value { "Yes" } else { "No" }.to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateClassroomBody<'a> {
    room_id: &'a str,
    capacity: u32,
    floor_no: i32,
    near_washroom: bool,
}

fn not_found(room: &RoomId) -> impl FnOnce(CliError) -> CliError + '_ {
    move |e| match e {
        CliError::Api { status: 404, .. } => CliError::NotFound(format!("Room '{room}' not found")),
        other => other,
    }
}

async fn list_rooms(ctx: CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let rooms: Vec<ClassroomView> = client.get("/api/classrooms").await?;

    print_output(&rooms, ctx.format);
    if ctx.format == OutputFormat::Table && !rooms.is_empty() {
        let seats: u64 = rooms.iter().map(|r| u64::from(r.capacity)).sum();
        println!("{} rooms, {} seats", rooms.len(), seats);
    }
    Ok(())
}

async fn get_room(ctx: CommandContext, args: RoomArgs) -> Result<()> {
    let client = ctx.client()?;
    let room: ClassroomView = client
        .get(&format!("/api/classrooms/{}", args.room))
        .await
        .map_err(not_found(&args.room))?;

    match ctx.format {
        OutputFormat::Table => print_output(&[room], ctx.format),
        OutputFormat::Json => print_json(&room),
    }
    Ok(())
}

async fn add_room(ctx: CommandContext, args: AddRoomArgs) -> Result<()> {
    let client = ctx.client()?;
    let body = CreateClassroomBody {
        room_id: args.room.as_str(),
        capacity: args.capacity,
        floor_no: args.floor,
        near_washroom: args.near_washroom,
    };
    let room: ClassroomView = client.post("/api/classrooms", &body).await?;

    match ctx.format {
        OutputFormat::Table => print_success(&format!(
            "Added room {} (floor {}, {} seats)",
            room.room_id, room.floor_no, room.capacity
        )),
        OutputFormat::Json => print_json(&room),
    }
    Ok(())
}

async fn remove_room(ctx: CommandContext, args: RoomArgs) -> Result<()> {
    let client = ctx.client()?;
    client
        .delete(&format!("/api/classrooms/{}", args.room))
        .await
        .map_err(not_found(&args.room))?;

    match ctx.format {
        OutputFormat::Table => print_success(&format!("Removed room {}", args.room)),
        OutputFormat::Json => print_json(&serde_json::json!({ "removed": args.room })),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::commands::Cli;
    use crate::config::Config;

    fn context(api_url: String) -> CommandContext {
        CommandContext {
            config: Config::default(),
            api_url,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_create_body_shape() {
        let body = CreateClassroomBody {
            room_id: "A-101",
            capacity: 30,
            floor_no: 2,
            near_washroom: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "roomId": "A-101",
                "capacity": 30,
                "floorNo": 2,
                "nearWashroom": true
            })
        );
    }

    #[test]
    fn test_not_found_mapping() {
        let room = RoomId::parse("Z-9").unwrap();
        let mapped = not_found(&room)(CliError::api(404, "room_not_found", "gone", None));
        assert!(matches!(mapped, CliError::NotFound(msg) if msg.contains("Z-9")));

        let passthrough = not_found(&room)(CliError::api(500, "x", "y", None));
        assert!(matches!(passthrough, CliError::Api { status: 500, .. }));
    }

    #[test]
    fn test_path_unsafe_room_ids_rejected_at_parse() {
        for room in ["B/1", "..", "."] {
            assert!(Cli::try_parse_from(["seatctl", "rooms", "get", room]).is_err(), "{room}");
        }
    }

    #[test]
    fn test_capacity_bounded_to_storage_range() {
        let too_big = Cli::try_parse_from([
            "seatctl",
            "rooms",
            "add",
            "HALL",
            "--capacity",
            "3000000000",
            "--floor",
            "0",
        ]);
        assert!(too_big.is_err());
    }

    #[tokio::test]
    async fn test_get_and_remove_hit_room_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/classrooms/LAB.2_B"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "roomId": "LAB.2_B",
                "capacity": 24,
                "floorNo": 2,
                "nearWashroom": false
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/classrooms/LAB.2_B"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let room = RoomId::parse("LAB.2_B").unwrap();
        get_room(context(server.uri()), RoomArgs { room: room.clone() })
            .await
            .unwrap();
        remove_room(context(server.uri()), RoomArgs { room }).await.unwrap();
    }
}
