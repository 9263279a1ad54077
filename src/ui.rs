// UI layer: everything the seeder prints to the terminal. The upload
// itself lives in `upload`; this module only renders its progress.

use crate::api::{CreateOutcome, RoomSink};
use crate::room::Room;
use crate::upload::{upload_rooms, UploadReport};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// How many rooms are shown before uploading.
pub const PREVIEW_COUNT: usize = 5;

/// Print the first `count` rooms as pretty JSON.
pub fn print_preview(rooms: &[Room], count: usize) -> Result<()> {
    let sample = &rooms[..count.min(rooms.len())];
    let json = serde_json::to_string_pretty(sample).context("Serializing preview rooms")?;
    println!("Preview sample data:");
    println!("{}", json);
    Ok(())
}

/// Upload all rooms behind a progress bar, printing one line per room.
pub fn run_upload<S: RoomSink + ?Sized>(sink: &S, rooms: &[Room]) -> Result<UploadReport> {
    println!();
    println!("Uploading to PocketBase...");

    let pb = ProgressBar::new(rooms.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let result = upload_rooms(sink, rooms, |room, outcome| {
        // suspend() still prints when the bar is hidden (stdout not a tty)
        pb.suspend(|| println!("{}", result_line(room, outcome)));
        pb.inc(1);
    });
    pb.finish_and_clear();
    result
}

pub fn print_summary(report: &UploadReport) {
    println!();
    println!(
        "Completed! Success: {}, Failed: {}",
        report.success, report.fail
    );
}

fn result_line(room: &Room, outcome: &CreateOutcome) -> String {
    match outcome {
        CreateOutcome::Created => {
            format!("Added Room {} ({})", room.room_number, room.room_type)
        }
        CreateOutcome::Rejected { body, .. } => {
            format!("Failed to add Room {}: {}", room.room_number, body)
        }
    }
}
