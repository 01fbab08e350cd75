//! genai-gateway: HTTP gateway that forwards a prompt plus an optional
//! binary upload (image, document, or audio) to a generative inference
//! backend and returns the generated text.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;
pub mod startup;
