//! Capacity limits for the vectorized engine
//!
//! Operators process data in fixed-size chunks; every vector buffer,
//! selection vector and nullmask is sized against `VECTOR_CAPACITY`.

/// Maximum number of lanes in one vector batch
///
/// Nullmasks are fixed bitsets of this capacity, and producing operators
/// never emit more than this many rows per chunk.
pub const VECTOR_CAPACITY: usize = 1024;

/// Number of 64-bit words in a nullmask of `VECTOR_CAPACITY` bits
pub const NULLMASK_WORDS: usize = VECTOR_CAPACITY / 64;
