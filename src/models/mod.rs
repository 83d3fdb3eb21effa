//! Data models for the Developer Directory application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod developer;

pub use developer::*;
