use crate::templates::styles::{self, Corner};
use maud::{html, Markup};

/// Decorative neighborhood photo pinned to a corner of the landing page.
pub struct Hotspot {
    pub name: &'static str,
    pub image: &'static str,
    pub corner: Corner,
}

pub const HOTSPOTS: [Hotspot; 4] = [
    Hotspot {
        name: "Old Montreal",
        image: "https://images.unsplash.com/photo-1549340748-6d9ac911ad70?w=400&h=300&fit=crop&crop=center",
        corner: Corner::TopLeft,
    },
    Hotspot {
        name: "Plateau",
        image: "https://images.unsplash.com/photo-1565008447742-97f6f38c985c?w=400&h=300&fit=crop&crop=center",
        corner: Corner::TopRight,
    },
    Hotspot {
        name: "Downtown",
        image: "https://images.unsplash.com/photo-1517935706615-2717063c2225?w=400&h=300&fit=crop&crop=center",
        corner: Corner::BottomLeft,
    },
    Hotspot {
        name: "Mile End",
        image: "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=400&h=300&fit=crop&crop=center",
        corner: Corner::BottomRight,
    },
];

pub fn hotspot(spot: &Hotspot) -> Markup {
    html! {
        div class=(styles::corner(spot.corner)) title=(spot.name) {
            img src=(spot.image) alt="" class="image-element" loading="lazy";
        }
    }
}
