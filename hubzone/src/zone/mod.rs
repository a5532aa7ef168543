//! HUBZone value objects.
//!
//! A [`ZoneRecord`] is one federally designated zone: metadata plus its
//! polygon boundary and the bounding box derived from it at load time.
//! Records are immutable once a snapshot is built; nothing in the engine
//! mutates a zone after the loader has produced it.

mod boundary;
mod record;

pub use boundary::{Boundary, BoundingBox, Polygon, Ring};
pub use record::{ZoneRecord, ZoneStatus, ZoneSummary, ZoneType};
