mod options;
mod search_form;
mod validation;

pub use options::FormOptions;
pub use search_form::{SearchForm, SubmitError};
pub use validation::{CommutePair, FormField, ValidationErrors};
