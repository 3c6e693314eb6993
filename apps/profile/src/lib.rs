//! Job seeker profile form core.
//!
//! Holds the multi-section profile form in memory (scalars, skill tags,
//! repeatable education / certification / job experience blocks, consent),
//! normalizes it and submits it to the job board backend.

pub mod api_client;
pub mod config;
pub mod draft;
pub mod errors;
pub mod form;
pub mod models;
pub mod session;
pub mod submission;

#[cfg(test)]
mod tests;
