use crate::api::{FetchError, NeighborhoodBackend};
use crate::domain::{AmenityType, RentType, SearchCriteria};
use crate::form::validation::{CommutePair, FormField, ValidationErrors};
use crate::handoff::Handoff;
use std::error::Error;
use std::fmt;

/// Raw state of the search form, exactly as the user typed it.
///
/// Text inputs stay strings until `validate` runs. Selections keep the order
/// in which they were picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    city: String,
    budget: String,
    max_commute_time: String,
    destination_neighborhood: String,
    amenities: Vec<AmenityType>,
    rent_types: Vec<RentType>,
    preferred_neighborhoods: Vec<String>,
}

#[derive(Debug)]
pub enum SubmitError {
    Invalid(ValidationErrors),
    Backend(FetchError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => write!(f, "search form rejected: {errors}"),
            SubmitError::Backend(err) => write!(f, "search failed: {err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Backend(err) => Some(err),
        }
    }
}

impl SearchForm {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }

    /// Build the form from an `application/x-www-form-urlencoded` body.
    /// Repeated keys carry the selections; unknown codes are ignored.
    pub fn from_form_body(city: impl Into<String>, body: &[u8]) -> Self {
        let mut form = Self::new(city);

        for (key, value) in url::form_urlencoded::parse(body) {
            match &*key {
                "budget" => form.set_budget(value),
                "max_commute_time" => form.set_max_commute(value),
                "destination_neighborhood" => form.set_destination(value),
                "amenities" => match AmenityType::from_code(&value) {
                    Some(amenity) if !form.has_amenity(amenity) => form.toggle_amenity(amenity),
                    _ => {}
                },
                "rent_types" => match RentType::from_code(&value) {
                    Some(rent) if !form.has_rent_type(rent) => form.toggle_rent_type(rent),
                    _ => {}
                },
                "preferred_neighborhoods" if !value.trim().is_empty() && !form.prefers(&value) => {
                    form.toggle_neighborhood(value);
                }
                _ => {}
            }
        }

        form
    }

    pub fn set_budget(&mut self, value: impl Into<String>) {
        self.budget = value.into();
    }

    pub fn set_max_commute(&mut self, value: impl Into<String>) {
        self.max_commute_time = value.into();
    }

    pub fn set_destination(&mut self, value: impl Into<String>) {
        self.destination_neighborhood = value.into();
    }

    pub fn toggle_amenity(&mut self, amenity: AmenityType) {
        toggle(&mut self.amenities, amenity);
    }

    pub fn toggle_rent_type(&mut self, rent: RentType) {
        toggle(&mut self.rent_types, rent);
    }

    pub fn toggle_neighborhood(&mut self, name: impl Into<String>) {
        toggle(&mut self.preferred_neighborhoods, name.into());
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn max_commute_time(&self) -> &str {
        &self.max_commute_time
    }

    pub fn destination(&self) -> &str {
        &self.destination_neighborhood
    }

    pub fn has_amenity(&self, amenity: AmenityType) -> bool {
        self.amenities.contains(&amenity)
    }

    pub fn has_rent_type(&self, rent: RentType) -> bool {
        self.rent_types.contains(&rent)
    }

    pub fn prefers(&self, name: &str) -> bool {
        self.preferred_neighborhoods.iter().any(|n| n == name)
    }

    pub fn commute_pair(&self) -> CommutePair {
        let has_destination = !self.destination_neighborhood.trim().is_empty();
        let has_commute = parse_positive(&self.max_commute_time).is_some();

        match (has_destination, has_commute) {
            (false, false) => CommutePair::BothEmpty,
            (true, true) => CommutePair::BothSet,
            (true, false) => CommutePair::DestinationOnly,
            (false, true) => CommutePair::CommuteOnly,
        }
    }

    /// Check every rule and collect all failures; on success the raw inputs
    /// are coerced into the request body.
    pub fn validate(&self) -> Result<SearchCriteria, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let budget = parse_positive(&self.budget);
        if budget.is_none() {
            errors.mark(FormField::Budget);
        }

        match self.commute_pair() {
            CommutePair::DestinationOnly => errors.mark(FormField::MaxCommuteTime),
            CommutePair::CommuteOnly => errors.mark(FormField::DestinationNeighborhood),
            CommutePair::BothEmpty | CommutePair::BothSet => {}
        }

        let budget = match budget {
            Some(budget) if errors.is_empty() => budget,
            _ => return Err(errors),
        };

        let (max_commute_time, destination_neighborhood) = match self.commute_pair() {
            CommutePair::BothSet => (
                parse_positive(&self.max_commute_time),
                Some(self.destination_neighborhood.trim().to_string()),
            ),
            _ => (None, None),
        };

        Ok(SearchCriteria {
            budget,
            city: self.city.clone(),
            max_commute_time,
            destination_neighborhood,
            amenities: self.amenities.clone(),
            rent_types: self.rent_types.clone(),
            preferred_neighborhoods: self.preferred_neighborhoods.clone(),
        })
    }

    /// Validate, then run the search. Nothing is sent when validation fails
    /// and a backend failure is returned as-is, without retry.
    pub fn submit(&self, backend: &dyn NeighborhoodBackend) -> Result<Handoff, SubmitError> {
        let criteria = self.validate().map_err(SubmitError::Invalid)?;
        let results = backend
            .search_neighborhoods(&criteria)
            .map_err(SubmitError::Backend)?;

        Ok(Handoff::new(results, criteria))
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, value: T) {
    match items.iter().position(|item| *item == value) {
        Some(pos) => {
            items.remove(pos);
        }
        None => items.push(value),
    }
}
