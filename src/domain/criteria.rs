use crate::domain::{AmenityType, RentType};
use serde::{Deserialize, Serialize};

/// Request body for `POST /search-neighborhoods`.
///
/// `max_commute_time` and `destination_neighborhood` are either both set or
/// both absent; `SearchForm::validate` is the only producer and enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(with = "whole_number")]
    pub budget: f64,
    pub city: String,

    #[serde(
        default,
        with = "whole_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_commute_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_neighborhood: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<AmenityType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rent_types: Vec<RentType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_neighborhoods: Vec<String>,
}

/// Form inputs are parsed as floats, but the backend models budgets and
/// minutes as integers, so integral values go out without a fraction.
mod whole_number {
    use serde::{Deserialize, Deserializer, Serializer};

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<f64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<f64>, D::Error> {
            Option::<f64>::deserialize(deserializer)
        }
    }
}
