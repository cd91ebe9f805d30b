//! Domain layer: course and price types, the discount rules, and form validation.
//!
//! Nothing in here performs I/O or keeps state between calls.

pub mod course;
pub mod discount;
pub mod plan;
pub mod ports;
pub mod presentation;
pub mod validation;
