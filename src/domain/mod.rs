mod amenity;
mod criteria;
mod rent_type;
mod search_result;

pub use amenity::AmenityType;
pub use criteria::SearchCriteria;
pub use rent_type::RentType;
pub use search_result::{AmenityCounts, Coordinates, NeighborhoodResult, SearchResult};
