pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML response
pub use html::{html_response, html_response_with_status, text_response};
pub use redirect::{see_other, see_other_with_cookie};
