pub mod directory;
pub mod sample;

pub use directory::{DatasetError, UserDirectory};
