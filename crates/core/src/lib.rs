//! Core types for the Lamina analytical engine
//!
//! This crate defines the foundational vocabulary used throughout the
//! system:
//! - PhysicalType / LogicalType: the closed type set and its storage mapping
//! - Value: boxed scalar values for the engine boundary
//! - TypeError: type-system error hierarchy
//! - limits: fixed chunk/vector capacities

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use error::{TypeError, TypeResult};
pub use limits::{NULLMASK_WORDS, VECTOR_CAPACITY};
pub use types::{LogicalType, PhysicalType};
pub use value::Value;
