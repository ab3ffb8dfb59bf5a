use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories of points of interest the backend counts per neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmenityType {
    Park,
    School,
    Restaurant,
    Transit,
    Grocery,
    Hospital,
    Cafe,
    Library,
    Gym,
}

impl AmenityType {
    pub const ALL: [AmenityType; 9] = [
        AmenityType::Park,
        AmenityType::School,
        AmenityType::Restaurant,
        AmenityType::Transit,
        AmenityType::Grocery,
        AmenityType::Hospital,
        AmenityType::Cafe,
        AmenityType::Library,
        AmenityType::Gym,
    ];

    /// Wire code used by the backend and by the form fields.
    pub fn code(self) -> &'static str {
        match self {
            AmenityType::Park => "park",
            AmenityType::School => "school",
            AmenityType::Restaurant => "restaurant",
            AmenityType::Transit => "transit",
            AmenityType::Grocery => "grocery",
            AmenityType::Hospital => "hospital",
            AmenityType::Cafe => "cafe",
            AmenityType::Library => "library",
            AmenityType::Gym => "gym",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|amenity| amenity.code() == code)
    }
}

impl fmt::Display for AmenityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for amenity in AmenityType::ALL {
            assert_eq!(AmenityType::from_code(amenity.code()), Some(amenity));
        }
        assert_eq!(AmenityType::from_code("casino"), None);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&[AmenityType::Park, AmenityType::Gym]).unwrap();
        assert_eq!(json, r#"["park","gym"]"#);
    }
}
