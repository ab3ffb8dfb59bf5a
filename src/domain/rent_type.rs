use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit sizes a renter can ask for. The backend spells the bedroom
/// variants with spaces and capitals, so the wire codes follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentType {
    #[serde(rename = "studio")]
    Studio,
    #[serde(rename = "One Bed")]
    OneBed,
    #[serde(rename = "Two Bed")]
    TwoBed,
    #[serde(rename = "Three Bed")]
    ThreePlusBed,
}

impl RentType {
    pub const ALL: [RentType; 4] = [
        RentType::Studio,
        RentType::OneBed,
        RentType::TwoBed,
        RentType::ThreePlusBed,
    ];

    pub fn code(self) -> &'static str {
        match self {
            RentType::Studio => "studio",
            RentType::OneBed => "One Bed",
            RentType::TwoBed => "Two Bed",
            RentType::ThreePlusBed => "Three Bed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rent| rent.code() == code)
    }
}

impl fmt::Display for RentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_match_backend_spelling() {
        let json = serde_json::to_string(&RentType::ALL).unwrap();
        assert_eq!(json, r#"["studio","One Bed","Two Bed","Three Bed"]"#);
    }

    #[test]
    fn from_code_rejects_unknown_sizes() {
        assert_eq!(RentType::from_code("Two Bed"), Some(RentType::TwoBed));
        assert_eq!(RentType::from_code("two-bed"), None);
    }
}
