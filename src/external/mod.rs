pub mod embedded;
pub mod json_file;
pub mod profile_source;

pub use embedded::EmbeddedSource;
pub use json_file::JsonFileSource;
pub use profile_source::{ProfileSource, SourceError};
