//! Data models for the team admin backend.
//!
//! Field names serialize in camelCase to match the frontend TypeScript interfaces.

mod team;

pub use team::*;
