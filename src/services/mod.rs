pub mod directory_service;
pub mod story_service;
