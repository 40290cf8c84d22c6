//! String heap and fixed-width string handles
//!
//! Varchar vectors do not store their bytes inline: each lane holds a
//! fixed-width [`StrHandle`] referencing a string owned by the producing
//! vector's [`StringHeap`]. This keeps the varchar lane representation
//! constant-size at the copy layer, which moves the handle word and never
//! the backing bytes.

use serde::{Deserialize, Serialize};

/// Fixed-width handle to a string in a [`StringHeap`]
///
/// The handle is an opaque 64-bit word at the copy layer. `StrHandle::NULL`
/// is the reserved sentinel written when NULL varchar lanes are
/// materialized into storage without a validity channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrHandle(u64);

impl StrHandle {
    /// Sentinel handle standing in for NULL
    pub const NULL: StrHandle = StrHandle(u64::MAX);

    /// Whether this handle is the NULL sentinel
    pub fn is_null(&self) -> bool {
        *self == StrHandle::NULL
    }

    /// The raw 64-bit word of this handle
    pub fn as_word(&self) -> u64 {
        self.0
    }
}

impl Default for StrHandle {
    fn default() -> Self {
        StrHandle::NULL
    }
}

/// Chunk-scoped arena owning the bytes behind varchar lanes
///
/// Handles issued by one heap are only meaningful against that heap; a
/// copy that moves handles across vectors leaves them tied to the
/// producer's heap, mirroring the pointer semantics of the storage layer.
#[derive(Debug, Clone, Default)]
pub struct StringHeap {
    strings: Vec<String>,
}

impl StringHeap {
    /// Create an empty heap
    pub fn new() -> Self {
        StringHeap {
            strings: Vec::new(),
        }
    }

    /// Copy `s` into the heap and return its handle
    pub fn add(&mut self, s: &str) -> StrHandle {
        let handle = StrHandle(self.strings.len() as u64);
        self.strings.push(s.to_string());
        handle
    }

    /// Resolve a handle issued by this heap
    ///
    /// Returns `None` for the NULL sentinel or a foreign handle.
    pub fn get(&self, handle: StrHandle) -> Option<&str> {
        if handle.is_null() {
            return None;
        }
        self.strings.get(handle.0 as usize).map(|s| s.as_str())
    }

    /// Number of strings owned by the heap
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the heap owns no strings
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_resolve() {
        let mut heap = StringHeap::new();
        let a = heap.add("hello");
        let b = heap.add("world");
        assert_eq!(heap.get(a), Some("hello"));
        assert_eq!(heap.get(b), Some("world"));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_null_handle_resolves_to_none() {
        let heap = StringHeap::new();
        assert!(StrHandle::NULL.is_null());
        assert_eq!(heap.get(StrHandle::NULL), None);
    }

    #[test]
    fn test_default_handle_is_null() {
        assert!(StrHandle::default().is_null());
    }
}
