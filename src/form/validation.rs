use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

/// Inputs that can be flagged by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Budget,
    MaxCommuteTime,
    DestinationNeighborhood,
}

impl FormField {
    /// Name of the HTML input carrying this field.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Budget => "budget",
            FormField::MaxCommuteTime => "max_commute_time",
            FormField::DestinationNeighborhood => "destination_neighborhood",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FormField::Budget => "Enter a monthly budget greater than zero.",
            FormField::MaxCommuteTime => "Enter a commute time for your destination.",
            FormField::DestinationNeighborhood => "Pick a destination for your commute time.",
        }
    }
}

/// Every field that failed validation. Rules are evaluated independently,
/// so one submit can flag several fields at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeSet<FormField>,
}

impl ValidationErrors {
    pub fn mark(&mut self, field: FormField) {
        self.fields.insert(field);
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FormField> + '_ {
        self.fields.iter().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(FormField::input_name).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

impl Error for ValidationErrors {}

/// Where the destination/commute pair stands. Only `BothEmpty` and
/// `BothSet` can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommutePair {
    BothEmpty,
    BothSet,
    DestinationOnly,
    CommuteOnly,
}
