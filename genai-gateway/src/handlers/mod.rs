pub mod generate;
pub mod health;

pub use generate::{generate_from_audio, generate_from_document, generate_from_image, generate_text};
pub use health::{health_check, index, readiness_check};
