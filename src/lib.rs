// Library root
// ------------
// The binary (`main.rs`) wires these modules into a single seeding run:
// generate rooms, preview them, upload them, print the counts.
//
// Module responsibilities:
// - `room`: the Room Record type and the random generator.
// - `api`: HTTP client for the PocketBase records endpoint and the
//   `RoomSink` trait the upload loop is written against.
// - `upload`: the sequential upload loop and its success/fail report.
// - `ui`: terminal output (preview, progress, summary).
pub mod api;
pub mod room;
pub mod ui;
pub mod upload;
