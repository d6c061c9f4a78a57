//! Application-level helpers: input normalization and progress logging.

pub mod logging;
pub mod url;

pub use logging::{log_progress, print_error_statistics};
pub use url::validate_and_normalize_input;
