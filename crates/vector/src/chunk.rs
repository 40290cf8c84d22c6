//! DataChunk: the unit of work exchanged between operators
//!
//! A chunk bundles one vector per output column, all sharing a cardinality
//! and, after a filter, one selection vector. The copy primitives do not
//! know about chunks; operators use them column by column.

use crate::error::VectorResult;
use crate::selection::SelectionVector;
use crate::vector::Vector;
use lamina_core::LogicalType;
use std::sync::Arc;

/// A batch of columns moved between operators as one unit
#[derive(Debug, Clone, Default)]
pub struct DataChunk {
    columns: Vec<Vector>,
}

impl DataChunk {
    /// Create a chunk with one empty full-capacity vector per type
    pub fn new(types: &[LogicalType]) -> Self {
        DataChunk {
            columns: types.iter().map(|ty| Vector::with_capacity(*ty)).collect(),
        }
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cardinality of the chunk (count of the first column)
    pub fn size(&self) -> usize {
        self.columns.first().map(|c| c.count()).unwrap_or(0)
    }

    /// Borrow column `i`
    pub fn column(&self, i: usize) -> &Vector {
        &self.columns[i]
    }

    /// Mutably borrow column `i`
    pub fn column_mut(&mut self, i: usize) -> &mut Vector {
        &mut self.columns[i]
    }

    /// Set the logical count of every column
    pub fn set_cardinality(&mut self, count: usize) -> VectorResult<()> {
        for column in &mut self.columns {
            column.set_count(count)?;
        }
        Ok(())
    }

    /// Attach one shared selection vector to every column
    ///
    /// This is the post-filter shape: all columns of the chunk reference
    /// the same immutable selection.
    pub fn set_selection(&mut self, sel: Arc<SelectionVector>, count: usize) -> VectorResult<()> {
        for column in &mut self.columns {
            column.set_selection(Arc::clone(&sel));
            column.set_count(count)?;
        }
        Ok(())
    }

    /// Reset the chunk for buffer reuse on the next batch
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.clear_selection();
            column.nullmask_mut().reset();
            // count of 0 always fits
            let _ = column.set_count(0);
        }
    }
}
