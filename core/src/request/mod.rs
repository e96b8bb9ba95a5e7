pub mod body;
pub mod form;

pub use body::{read_body, BodyReader};
pub use form::{parse_form_body, parse_query_string, FormFields};
