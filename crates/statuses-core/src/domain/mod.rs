//! Domain model (labels, raw definitions, built-in table, descriptors, errors).

pub mod builtin;
pub mod definition;
pub mod errors;
pub mod labels;
pub mod status;

pub use self::builtin::{BuiltinStatus, DEFAULT_DASHICON, TEXT_DOMAIN};
pub use self::definition::{StatusDefinition, definitions_from_json_str};
pub use self::errors::StatusError;
pub use self::labels::StatusLabels;
pub use self::status::StatusDescriptor;
