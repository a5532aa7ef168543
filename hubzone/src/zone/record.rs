//! Zone record and metadata types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::boundary::{Boundary, BoundingBox};

/// Federal HUBZone designation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    /// Qualified census tract.
    QualifiedCensusTract,
    /// Qualified non-metropolitan county.
    QualifiedNonMetroCounty,
    /// Indian land (reservation or trust land).
    IndianLand,
    /// Redesignated area in its transition period.
    Redesignated,
    /// Qualified disaster-designated area.
    DisasterArea,
}

impl ZoneType {
    /// Match-ordering priority. Lower sorts first when a point falls in
    /// several overlapping designations.
    pub fn priority(self) -> u8 {
        match self {
            ZoneType::QualifiedCensusTract => 0,
            ZoneType::QualifiedNonMetroCounty => 1,
            ZoneType::IndianLand => 2,
            ZoneType::Redesignated => 3,
            ZoneType::DisasterArea => 4,
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoneType::QualifiedCensusTract => "qualified_census_tract",
            ZoneType::QualifiedNonMetroCounty => "qualified_non_metro_county",
            ZoneType::IndianLand => "indian_land",
            ZoneType::Redesignated => "redesignated",
            ZoneType::DisasterArea => "disaster_area",
        };
        write!(f, "{}", name)
    }
}

/// Designation lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    Active,
    Pending,
    Expired,
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoneStatus::Active => "active",
            ZoneStatus::Pending => "pending",
            ZoneStatus::Expired => "expired",
        };
        write!(f, "{}", name)
    }
}

/// One federally designated HUBZone polygon with its metadata.
///
/// Immutable after load. `bounding_box` is always the tight box of
/// `boundary`, computed once by the loader.
#[derive(Debug, Clone)]
pub struct ZoneRecord {
    /// Opaque unique identifier, stable across reloads of a stable source.
    pub id: String,
    /// Human-readable zone name.
    pub name: String,
    /// Designation category.
    pub zone_type: ZoneType,
    /// Two-letter state abbreviation, uppercased at load.
    pub state: String,
    /// County name.
    pub county: String,
    /// Designation status.
    pub status: ZoneStatus,
    /// Date the designation takes effect, if known.
    pub effective_date: Option<DateTime<Utc>>,
    /// Date the designation lapses, if known.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Polygon pieces making up the zone boundary.
    pub boundary: Boundary,
    /// Tight bounding box of `boundary`, wrap-aware.
    pub bounding_box: BoundingBox,
    /// True when the boundary straddles the ±180° meridian. Flagged
    /// explicitly so downstream consumers never have to re-detect it.
    pub crosses_antimeridian: bool,
}

impl ZoneRecord {
    /// Reduced projection for list views (no geometry).
    pub fn summary(&self) -> ZoneSummary {
        ZoneSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            zone_type: self.zone_type,
            state: self.state.clone(),
            county: self.county.clone(),
            status: self.status,
        }
    }

    /// Returns true if the zone counts as active at the given instant:
    /// status is `Active` and the expiration date, when present, has not
    /// passed.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        if self.status != ZoneStatus::Active {
            return false;
        }
        match self.expiration_date {
            Some(expires) => now < expires,
            None => true,
        }
    }
}

/// Zone projection without boundary geometry, suitable for list payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub id: String,
    pub name: String,
    pub zone_type: ZoneType,
    pub state: String,
    pub county: String,
    pub status: ZoneStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::zone::{Polygon, Ring};
    use chrono::TimeZone;

    fn test_record(status: ZoneStatus, expiration: Option<DateTime<Utc>>) -> ZoneRecord {
        let outer = Ring::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(1.0, 1.0),
            Coord::new(1.0, 0.0),
        ]);
        ZoneRecord {
            id: "DC-001".to_string(),
            name: "Test Tract".to_string(),
            zone_type: ZoneType::QualifiedCensusTract,
            state: "DC".to_string(),
            county: "District of Columbia".to_string(),
            status,
            effective_date: None,
            expiration_date: expiration,
            boundary: vec![Polygon::new(outer, Vec::new())],
            bounding_box: BoundingBox {
                min_lat: 0.0,
                max_lat: 1.0,
                min_lon: 0.0,
                max_lon: 1.0,
            },
            crosses_antimeridian: false,
        }
    }

    #[test]
    fn test_zone_type_priority_ordering() {
        assert!(ZoneType::QualifiedCensusTract.priority() < ZoneType::IndianLand.priority());
        assert!(ZoneType::IndianLand.priority() < ZoneType::Redesignated.priority());
        assert!(ZoneType::Redesignated.priority() < ZoneType::DisasterArea.priority());
    }

    #[test]
    fn test_zone_type_serde_names() {
        let json = serde_json::to_string(&ZoneType::QualifiedCensusTract).unwrap();
        assert_eq!(json, "\"qualified_census_tract\"");

        let parsed: ZoneType = serde_json::from_str("\"indian_land\"").unwrap();
        assert_eq!(parsed, ZoneType::IndianLand);
    }

    #[test]
    fn test_summary_projection_drops_geometry() {
        let record = test_record(ZoneStatus::Active, None);
        let summary = record.summary();
        assert_eq!(summary.id, "DC-001");
        assert_eq!(summary.name, "Test Tract");
        assert_eq!(summary.zone_type, ZoneType::QualifiedCensusTract);
    }

    #[test]
    fn test_is_active_at_status_gate() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert!(test_record(ZoneStatus::Active, None).is_active_at(now));
        assert!(!test_record(ZoneStatus::Pending, None).is_active_at(now));
        assert!(!test_record(ZoneStatus::Expired, None).is_active_at(now));
    }

    #[test]
    fn test_is_active_at_respects_expiration_date() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        assert!(!test_record(ZoneStatus::Active, Some(past)).is_active_at(now));
        assert!(test_record(ZoneStatus::Active, Some(future)).is_active_at(now));
    }
}
