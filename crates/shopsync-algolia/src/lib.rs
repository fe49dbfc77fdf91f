pub mod client;
pub mod error;

pub use client::{IndexClient, SaveObjectsResponse};
pub use error::IndexError;
