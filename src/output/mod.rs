//! Output formatting and response generation.

mod response;

pub use response::{format_response, GUIDANCE};
