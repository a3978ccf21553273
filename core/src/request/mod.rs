pub mod parser;
pub mod source;

pub use parser::{parse_form_body, parse_query_string};
pub use source::{QueryValues, ValueSource};
