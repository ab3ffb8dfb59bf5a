//! Single mapping from closed enumerations to presentation.
//!
//! Every class name, icon and color used by the templates for amenity
//! types, unit sizes, podium places, score tiers and landing hotspots lives
//! here as static data.

use crate::domain::{AmenityType, RentType};
use crate::results::{PodiumPosition, ScoreTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodiumStyle {
    pub class: &'static str,
    pub medal: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    pub class: &'static str,
    pub color: &'static str,
}

pub const fn amenity(amenity: AmenityType) -> OptionStyle {
    match amenity {
        AmenityType::Park => OptionStyle { label: "Parks", icon: "🌳", color: "#4A7C59" },
        AmenityType::School => OptionStyle { label: "Schools", icon: "🎓", color: "#B8D4E3" },
        AmenityType::Restaurant => OptionStyle { label: "Restaurants", icon: "🍽️", color: "#FF6B6B" },
        AmenityType::Transit => OptionStyle { label: "Transit", icon: "🚇", color: "#4ECDC4" },
        AmenityType::Grocery => OptionStyle { label: "Grocery", icon: "🛒", color: "#C4D63A" },
        AmenityType::Hospital => OptionStyle { label: "Hospital", icon: "🏥", color: "#F4A6CD" },
        AmenityType::Cafe => OptionStyle { label: "Cafes", icon: "☕", color: "#FF6B6B" },
        AmenityType::Library => OptionStyle { label: "Libraries", icon: "📚", color: "#B8D4E3" },
        AmenityType::Gym => OptionStyle { label: "Gyms", icon: "💪", color: "#4ECDC4" },
    }
}

pub const fn rent_type(rent: RentType) -> OptionStyle {
    match rent {
        RentType::Studio => OptionStyle { label: "Studio", icon: "🏠", color: "#C4D63A" },
        RentType::OneBed => OptionStyle { label: "1 Bedroom", icon: "🛏️", color: "#B8D4E3" },
        RentType::TwoBed => OptionStyle { label: "2 Bedrooms", icon: "🏡", color: "#F4A6CD" },
        RentType::ThreePlusBed => OptionStyle { label: "3+ Bedrooms", icon: "🏘️", color: "#4ECDC4" },
    }
}

pub const fn podium(position: PodiumPosition) -> PodiumStyle {
    match position {
        PodiumPosition::First => PodiumStyle { class: "podium-card first", medal: "🥇" },
        PodiumPosition::Second => PodiumStyle { class: "podium-card second", medal: "🥈" },
        PodiumPosition::Third => PodiumStyle { class: "podium-card third", medal: "🥉" },
    }
}

pub const fn tier(tier: ScoreTier) -> TierStyle {
    match tier {
        ScoreTier::Excellent => TierStyle { class: "score-excellent", color: "#4ECDC4" },
        ScoreTier::Good => TierStyle { class: "score-good", color: "#C4D63A" },
        ScoreTier::Fair => TierStyle { class: "score-fair", color: "#FF6B6B" },
        ScoreTier::Low => TierStyle { class: "score-low", color: "#F4A6CD" },
    }
}

/// Corners of the landing page a hotspot can sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

pub const fn corner(corner: Corner) -> &'static str {
    match corner {
        Corner::TopLeft => "corner-image top-left",
        Corner::TopRight => "corner-image top-right",
        Corner::BottomLeft => "corner-image bottom-left",
        Corner::BottomRight => "corner-image bottom-right",
    }
}

/// Inline custom property consumed by the option-card stylesheet.
pub fn card_color(style: &OptionStyle) -> String {
    format!("--card-color: {}", style.color)
}
