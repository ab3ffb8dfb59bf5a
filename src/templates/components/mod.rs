pub mod hotspot;
pub mod neighborhood_card;
pub mod podium_card;
pub mod search_form;

pub use hotspot::{hotspot, HOTSPOTS};
pub use neighborhood_card::neighborhood_card;
pub use podium_card::podium_card;
pub use search_form::{search_form, SearchFormVm};
