// Sequential upload loop. One request per room, in order, no retries.

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::api::{CreateOutcome, RoomSink};
use crate::room::Room;

/// Counts of accepted and rejected rooms after an upload run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadReport {
    pub success: usize,
    pub fail: usize,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.success + self.fail
    }

    fn record(&mut self, outcome: &CreateOutcome) {
        match outcome {
            CreateOutcome::Created => self.success += 1,
            CreateOutcome::Rejected { .. } => self.fail += 1,
        }
    }
}

/// POST every room through `sink` and tally the outcomes. `on_result` is
/// called after each room that got a response.
///
/// A transport error aborts the run immediately; rooms after it are not
/// attempted and the partial counts are dropped.
pub fn upload_rooms<S, F>(sink: &S, rooms: &[Room], mut on_result: F) -> Result<UploadReport>
where
    S: RoomSink + ?Sized,
    F: FnMut(&Room, &CreateOutcome),
{
    let mut report = UploadReport::default();
    for room in rooms {
        debug!("Creating room {}", room.room_number);
        let outcome = sink
            .create_room(room)
            .with_context(|| format!("Uploading room {}", room.room_number))?;
        if let CreateOutcome::Rejected { status, body } = &outcome {
            warn!("Room {} rejected with {}: {}", room.room_number, status, body);
        }
        report.record(&outcome);
        on_result(room, &outcome);
    }
    info!(
        "Upload finished: {} succeeded, {} failed",
        report.success, report.fail
    );
    Ok(report)
}
