// Room data model and the synthetic record generator.
// Records are plain serde structs; the JSON field names match the
// PocketBase `rooms` collection (note the camelCase `imageUrl`).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of records a default seeding run produces.
pub const DEFAULT_ROOM_COUNT: usize = 100;

/// First room number handed out; record `i` gets `FIRST_ROOM_NUMBER + i`.
pub const FIRST_ROOM_NUMBER: usize = 100;

pub const MIN_PRICE: f64 = 1000.0;
pub const MAX_PRICE: f64 = 10000.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
            RoomType::Deluxe => "Deluxe",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic hotel room, serialized as the POST body for the
/// records endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Room {
    pub room_number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub status: RoomStatus,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Room {
    /// Build the record at position `index` of a seeding run. The room
    /// number and image seed are derived from the index; type, status and
    /// price are drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Room {
        // ALL is non-empty, so choose() always returns Some
        let room_type = *RoomType::ALL.choose(rng).unwrap_or(&RoomType::Single);
        let status = *RoomStatus::ALL.choose(rng).unwrap_or(&RoomStatus::Available);
        Room {
            room_number: (FIRST_ROOM_NUMBER + index).to_string(),
            room_type,
            price: random_price(rng),
            status,
            image_url: format!("https://picsum.photos/seed/{}/400/300", index),
        }
    }
}

/// Uniform price in `[MIN_PRICE, MAX_PRICE]`, rounded to cents.
fn random_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw: f64 = rng.gen_range(MIN_PRICE..=MAX_PRICE);
    let rounded = (raw * 100.0).round() / 100.0;
    rounded.clamp(MIN_PRICE, MAX_PRICE)
}

/// Generate `count` rooms in order.
pub fn generate_rooms<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Room> {
    (0..count).map(|i| Room::generate(i, rng)).collect()
}
