//! The Vector batch abstraction
//!
//! A `Vector` is one column's worth of a batch: a typed buffer of up to
//! [`VECTOR_CAPACITY`] lanes, a logical count, an optional shared selection
//! vector and a nullmask. Ownership is chunk-scoped: the producing operator
//! creates the vector for one batch and may reuse its buffer on the next;
//! nothing here is reference-counted except the selection indirection.
//!
//! The nullmask is indexed by physical (pre-selection) position and the
//! selection vector maps logical to physical positions; both axes are
//! independent and must be consulted together when materializing. The copy
//! primitives in [`crate::ops`] are the supported way to do that.

use crate::data::VectorData;
use crate::error::{VectorError, VectorResult};
use crate::heap::StringHeap;
use crate::nullmask::NullMask;
use crate::selection::SelectionVector;
use lamina_core::{LogicalType, PhysicalType, Value, VECTOR_CAPACITY};
use std::sync::Arc;

/// A batch of same-typed values with selection indirection and a nullmask
#[derive(Debug, Clone)]
pub struct Vector {
    pub(crate) ltype: LogicalType,
    pub(crate) count: usize,
    pub(crate) data: VectorData,
    pub(crate) sel: Option<Arc<SelectionVector>>,
    pub(crate) nullmask: NullMask,
    pub(crate) heap: StringHeap,
}

impl Vector {
    /// Create an empty vector of `ltype` with a full-capacity buffer
    pub fn with_capacity(ltype: LogicalType) -> Self {
        Vector {
            ltype,
            count: 0,
            data: VectorData::with_capacity(ltype.physical(), VECTOR_CAPACITY),
            sel: None,
            nullmask: NullMask::new(),
            heap: StringHeap::new(),
        }
    }

    /// Build a vector of `ltype` from boxed values
    ///
    /// `Value::Null` entries set the corresponding null bit and leave the
    /// lane at its zeroed default. Varchar values are copied into the
    /// vector's own string heap.
    ///
    /// # Errors
    /// `CapacityExceeded` when more than [`VECTOR_CAPACITY`] values are
    /// given; `ValueTypeMismatch` when a non-null value does not match
    /// `ltype`.
    pub fn from_values(ltype: LogicalType, values: &[Value]) -> VectorResult<Self> {
        if values.len() > VECTOR_CAPACITY {
            return Err(VectorError::CapacityExceeded {
                requested: values.len(),
                capacity: VECTOR_CAPACITY,
            });
        }
        let mut vector = Vector::with_capacity(ltype);
        for (i, value) in values.iter().enumerate() {
            vector.write_value(i, value)?;
        }
        vector.count = values.len();
        Ok(vector)
    }

    fn write_value(&mut self, i: usize, value: &Value) -> VectorResult<()> {
        if value.is_null() {
            self.nullmask.set(i);
            return Ok(());
        }
        let mismatch = VectorError::ValueTypeMismatch {
            value_type: value.logical_type(),
            vector_type: self.ltype,
        };
        match (&mut self.data, value) {
            (VectorData::Bool(lanes), Value::Boolean(v)) => lanes[i] = *v,
            (VectorData::Int8(lanes), Value::TinyInt(v)) => lanes[i] = *v,
            (VectorData::Int16(lanes), Value::SmallInt(v)) => lanes[i] = *v,
            (VectorData::Int32(lanes), Value::Integer(v)) if self.ltype == LogicalType::Integer => {
                lanes[i] = *v
            }
            (VectorData::Int32(lanes), Value::Date(v)) if self.ltype == LogicalType::Date => {
                lanes[i] = *v
            }
            (VectorData::Int64(lanes), Value::BigInt(v)) if self.ltype == LogicalType::BigInt => {
                lanes[i] = *v
            }
            (VectorData::Int64(lanes), Value::Timestamp(v))
                if self.ltype == LogicalType::Timestamp =>
            {
                lanes[i] = *v
            }
            (VectorData::Double(lanes), Value::Decimal(v)) => lanes[i] = *v,
            (VectorData::Pointer(lanes), Value::Pointer(v)) => lanes[i] = *v,
            (VectorData::Varchar(lanes), Value::Varchar(s)) => lanes[i] = self.heap.add(s),
            _ => return Err(mismatch),
        }
        Ok(())
    }

    /// The logical type tag
    pub fn logical_type(&self) -> LogicalType {
        self.ltype
    }

    /// The physical representation of the lanes
    pub fn physical_type(&self) -> PhysicalType {
        self.ltype.physical()
    }

    /// Logical element count of the batch
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the batch holds zero elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Set the logical count
    ///
    /// # Errors
    /// `CapacityExceeded` when `count` exceeds the buffer capacity.
    pub fn set_count(&mut self, count: usize) -> VectorResult<()> {
        if count > self.data.len() {
            return Err(VectorError::CapacityExceeded {
                requested: count,
                capacity: self.data.len(),
            });
        }
        self.count = count;
        Ok(())
    }

    /// The active selection vector, if any
    pub fn selection(&self) -> Option<&SelectionVector> {
        self.sel.as_deref()
    }

    /// Attach a shared selection vector
    ///
    /// The selection is logically immutable once published; several
    /// vectors from one operator pass may share it.
    pub fn set_selection(&mut self, sel: Arc<SelectionVector>) {
        self.sel = Some(sel);
    }

    /// Detach the selection vector, restoring identity mapping
    pub fn clear_selection(&mut self) {
        self.sel = None;
    }

    /// The nullmask, indexed by physical position
    pub fn nullmask(&self) -> &NullMask {
        &self.nullmask
    }

    /// Mutable access to the nullmask
    pub fn nullmask_mut(&mut self) -> &mut NullMask {
        &mut self.nullmask
    }

    /// Mark physical position `i` NULL
    pub fn set_null(&mut self, i: usize) {
        self.nullmask.set(i);
    }

    /// The typed backing buffer
    pub fn data(&self) -> &VectorData {
        &self.data
    }

    /// Mutable access to the typed backing buffer
    pub fn data_mut(&mut self) -> &mut VectorData {
        &mut self.data
    }

    /// Split mutable access to buffer and nullmask
    ///
    /// Element-wise producers write lanes and null bits in one pass; this
    /// hands out both halves without aliasing.
    pub fn data_and_nullmask_mut(&mut self) -> (&mut VectorData, &mut NullMask) {
        (&mut self.data, &mut self.nullmask)
    }

    /// The string heap backing varchar lanes
    pub fn heap(&self) -> &StringHeap {
        &self.heap
    }

    /// Physical buffer index for logical position `k`
    pub fn resolve_index(&self, k: usize) -> usize {
        match &self.sel {
            Some(sel) => sel.get(k),
            None => k,
        }
    }

    /// Read the value at logical position `k`, selection- and null-aware
    ///
    /// This is the boundary accessor; per-batch algorithms go through
    /// [`crate::ops`] instead of reading one lane at a time.
    pub fn value(&self, k: usize) -> VectorResult<Value> {
        if k >= self.count {
            return Err(VectorError::OutOfBounds {
                offset: k,
                element_count: 1,
                count: self.count,
            });
        }
        let i = self.resolve_index(k);
        if self.nullmask.is_set(i) {
            return Ok(Value::Null);
        }
        let value = match (&self.data, self.ltype) {
            (VectorData::Bool(lanes), _) => Value::Boolean(lanes[i]),
            (VectorData::Int8(lanes), _) => Value::TinyInt(lanes[i]),
            (VectorData::Int16(lanes), _) => Value::SmallInt(lanes[i]),
            (VectorData::Int32(lanes), LogicalType::Date) => Value::Date(lanes[i]),
            (VectorData::Int32(lanes), _) => Value::Integer(lanes[i]),
            (VectorData::Int64(lanes), LogicalType::Timestamp) => Value::Timestamp(lanes[i]),
            (VectorData::Int64(lanes), _) => Value::BigInt(lanes[i]),
            (VectorData::Double(lanes), _) => Value::Decimal(lanes[i]),
            (VectorData::Pointer(lanes), _) => Value::Pointer(lanes[i]),
            (VectorData::Varchar(lanes), _) => match self.heap.get(lanes[i]) {
                Some(s) => Value::Varchar(s.to_string()),
                None => Value::Null,
            },
        };
        Ok(value)
    }
}
