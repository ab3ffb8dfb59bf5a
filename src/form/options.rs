use crate::api::NeighborhoodBackend;
use crate::domain::{AmenityType, RentType};
use tracing::warn;

/// Choices offered by the search form, fetched when the form opens.
#[derive(Debug, Clone, PartialEq)]
pub struct FormOptions {
    pub neighborhoods: Vec<String>,
    pub amenities: Vec<AmenityType>,
    pub rent_types: Vec<RentType>,
}

impl FormOptions {
    /// One request per list. A failed neighborhood list renders empty; the
    /// amenity and unit-size lists fall back to their closed enumerations.
    pub fn load(backend: &dyn NeighborhoodBackend) -> Self {
        let neighborhoods = backend.list_neighborhoods().unwrap_or_else(|err| {
            warn!(error = %err, "neighborhood list unavailable");
            Vec::new()
        });

        let amenities = backend.list_amenities().unwrap_or_else(|err| {
            warn!(error = %err, "amenity list unavailable, offering all types");
            AmenityType::ALL.to_vec()
        });

        let rent_types = backend.list_rent_types().unwrap_or_else(|err| {
            warn!(error = %err, "rent type list unavailable, offering all sizes");
            RentType::ALL.to_vec()
        });

        Self {
            neighborhoods,
            amenities,
            rent_types,
        }
    }
}
