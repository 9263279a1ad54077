use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use stayeasy_seeder::{
    api::{CreateOutcome, RoomSink},
    room::{generate_rooms, Room, DEFAULT_ROOM_COUNT},
    upload::{upload_rooms, UploadReport},
};

/// Endpoint stand-in that answers every request with the same status.
struct FixedStatusSink {
    status: u16,
    seen: RefCell<Vec<String>>,
}

impl FixedStatusSink {
    fn new(status: u16) -> Self {
        FixedStatusSink {
            status,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl RoomSink for FixedStatusSink {
    fn create_room(&self, room: &Room) -> Result<CreateOutcome> {
        self.seen.borrow_mut().push(room.room_number.clone());
        if self.status == 200 {
            Ok(CreateOutcome::Created)
        } else {
            Ok(CreateOutcome::Rejected {
                status: self.status,
                body: "server error".into(),
            })
        }
    }
}

/// Rejects odd room numbers, accepts even ones.
struct AlternatingSink;

impl RoomSink for AlternatingSink {
    fn create_room(&self, room: &Room) -> Result<CreateOutcome> {
        let n: usize = room.room_number.parse()?;
        if n % 2 == 0 {
            Ok(CreateOutcome::Created)
        } else {
            Ok(CreateOutcome::Rejected {
                status: 400,
                body: "duplicate".into(),
            })
        }
    }
}

/// Loses the connection after a number of successful calls.
struct FlakySink {
    ok_calls: usize,
    calls: Cell<usize>,
}

impl RoomSink for FlakySink {
    fn create_room(&self, _room: &Room) -> Result<CreateOutcome> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n < self.ok_calls {
            Ok(CreateOutcome::Created)
        } else {
            Err(anyhow!("connection refused"))
        }
    }
}

fn rooms() -> Vec<Room> {
    generate_rooms(DEFAULT_ROOM_COUNT, &mut StdRng::seed_from_u64(1))
}

#[test]
fn all_ok_counts_every_room_as_success() {
    let sink = FixedStatusSink::new(200);
    let report = upload_rooms(&sink, &rooms(), |_, _| {}).unwrap();
    assert_eq!(report, UploadReport { success: 100, fail: 0 });
}

#[test]
fn all_500_counts_every_room_as_failure() {
    let sink = FixedStatusSink::new(500);
    let report = upload_rooms(&sink, &rooms(), |_, _| {}).unwrap();
    assert_eq!(report, UploadReport { success: 0, fail: 100 });
}

#[test]
fn counts_always_add_up_to_attempts() {
    let report = upload_rooms(&AlternatingSink, &rooms(), |_, _| {}).unwrap();
    assert_eq!(report.success, 50);
    assert_eq!(report.fail, 50);
    assert_eq!(report.total(), 100);
}

#[test]
fn rooms_are_sent_once_in_order() {
    let sink = FixedStatusSink::new(200);
    let rooms = rooms();
    upload_rooms(&sink, &rooms, |_, _| {}).unwrap();
    let expected: Vec<String> = rooms.iter().map(|r| r.room_number.clone()).collect();
    assert_eq!(*sink.seen.borrow(), expected);
}

#[test]
fn callback_sees_each_outcome() {
    let mut lines = Vec::new();
    upload_rooms(&AlternatingSink, &rooms()[..3], |room, outcome| {
        lines.push((room.room_number.clone(), outcome.is_created()));
    })
    .unwrap();
    assert_eq!(
        lines,
        vec![
            ("100".to_string(), true),
            ("101".to_string(), false),
            ("102".to_string(), true),
        ]
    );
}

#[test]
fn transport_error_stops_the_run() {
    let sink = FlakySink {
        ok_calls: 3,
        calls: Cell::new(0),
    };
    let err = upload_rooms(&sink, &rooms(), |_, _| {}).unwrap_err();
    assert_eq!(sink.calls.get(), 4);
    assert!(format!("{:#}", err).contains("Uploading room 103"));
    assert!(format!("{:#}", err).contains("connection refused"));
}

#[test]
fn empty_input_gives_empty_report() {
    let report = upload_rooms(&FixedStatusSink::new(200), &[], |_, _| {}).unwrap();
    assert_eq!(report, UploadReport::default());
    assert_eq!(report.total(), 0);
}
