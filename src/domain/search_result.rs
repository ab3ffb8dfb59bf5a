use crate::domain::AmenityType;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

/// Per-neighborhood amenity tallies, in the order the backend sent them.
///
/// Display code sorts these by count and relies on a stable sort, so the
/// original key order is the tie-breaker and must survive deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenityCounts(Vec<(AmenityType, u32)>);

impl AmenityCounts {
    pub fn iter(&self) -> impl Iterator<Item = (AmenityType, u32)> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AmenityType, u32)> for AmenityCounts {
    fn from_iter<I: IntoIterator<Item = (AmenityType, u32)>>(iter: I) -> Self {
        let mut counts = AmenityCounts::default();
        for (amenity, count) in iter {
            match counts.0.iter_mut().find(|(a, _)| *a == amenity) {
                Some(entry) => entry.1 = count,
                None => counts.0.push((amenity, count)),
            }
        }
        counts
    }
}

impl Serialize for AmenityCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (amenity, count) in &self.0 {
            map.serialize_entry(amenity, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AmenityCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = AmenityCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of amenity type to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((amenity, count)) = access.next_entry::<AmenityType, u32>()? {
                    entries.push((amenity, count));
                }
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// One ranked entry of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodResult {
    #[serde(rename = "neighborhood_id", alias = "id")]
    pub id: i64,
    #[serde(rename = "neighborhood_name", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub amenity_counts: AmenityCounts,
    #[serde(default)]
    pub total_amenities: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commute_time: Option<i64>,
    /// Backend match score, 0 to 100.
    pub score: f64,
    pub coordinates: Coordinates,
}

/// Response of `POST /search-neighborhoods`. `neighborhoods[0]` is rank 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub neighborhoods: Vec<NeighborhoodResult>,
    pub total_results: i64,
    /// Whatever the backend echoed back; its shape is the backend's business.
    #[serde(default)]
    pub search_criteria: Map<String, Value>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty()
    }
}
