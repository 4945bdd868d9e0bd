//! Binary and stream normalization utilities.

pub mod binary;
pub mod detect;
pub mod mime;

pub use binary::{blob_to_data_url, bytes_to_base64, parse_data_url, url_to_data_url};
pub use detect::{is_named_tool_choice, is_streaming_result};
