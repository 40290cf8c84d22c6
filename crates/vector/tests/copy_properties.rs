//! Contract tests for the Copy family
//!
//! These pin the observable laws of the copy primitives:
//! - selection transparency (resolution is invisible in the output layout)
//! - null-substitution idempotence (no nulls => storage copy == plain copy)
//! - offset composition (destinations are dense from zero)
//! - the vector-to-vector nullmask right-shift law
//! - exhaustive type-mismatch rejection

use lamina_core::{LogicalType, TypeError, Value};
use lamina_vector::ops;
use lamina_vector::{SelectionVector, Vector, VectorData, VectorError};
use proptest::prelude::*;

fn int32_vector(values: &[Option<i32>]) -> Vector {
    let boxed: Vec<Value> = values
        .iter()
        .map(|v| v.map(Value::Integer).unwrap_or(Value::Null))
        .collect();
    Vector::from_values(LogicalType::Integer, &boxed).unwrap()
}

fn int32_lanes(data: &VectorData, n: usize) -> Vec<i32> {
    match data {
        VectorData::Int32(lanes) => lanes[..n].to_vec(),
        _ => panic!("expected int32 buffer"),
    }
}

fn sample_value(ty: LogicalType) -> Value {
    match ty {
        LogicalType::Boolean => Value::Boolean(true),
        LogicalType::TinyInt => Value::TinyInt(1),
        LogicalType::SmallInt => Value::SmallInt(2),
        LogicalType::Integer => Value::Integer(3),
        LogicalType::BigInt => Value::BigInt(4),
        LogicalType::Decimal => Value::Decimal(5.5),
        LogicalType::Date => Value::Date(6),
        LogicalType::Timestamp => Value::Timestamp(7),
        LogicalType::Pointer => Value::Pointer(8),
        LogicalType::Varchar => Value::Varchar("nine".to_string()),
    }
}

const ALL_TYPES: [LogicalType; 10] = [
    LogicalType::Boolean,
    LogicalType::TinyInt,
    LogicalType::SmallInt,
    LogicalType::Integer,
    LogicalType::BigInt,
    LogicalType::Decimal,
    LogicalType::Date,
    LogicalType::Timestamp,
    LogicalType::Pointer,
    LogicalType::Varchar,
];

#[test]
fn test_worked_int32_scenario() {
    // Source: [10, NULL, 30, 40, NULL], no selection vector.
    let source = int32_vector(&[Some(10), None, Some(30), Some(40), None]);

    // Storage copy materializes sentinels at null positions.
    let mut storage = VectorData::with_capacity(source.physical_type(), 5);
    ops::copy_to_storage(&source, &mut storage, 0, 5).unwrap();
    assert_eq!(
        int32_lanes(&storage, 5),
        vec![10, i32::MIN, 30, 40, i32::MIN]
    );

    // Vector-to-vector copy at offset 2: count 3, null bit follows the
    // surviving NULL at physical position 4, payload is dense and raw.
    let mut target = Vector::with_capacity(LogicalType::Integer);
    ops::copy_to_vector(&source, &mut target, 2).unwrap();
    assert_eq!(target.count(), 3);
    let set: Vec<usize> = (0..3).filter(|&i| target.nullmask().is_set(i)).collect();
    assert_eq!(set, vec![2]);
    assert_eq!(int32_lanes(target.data(), 2), vec![30, 40]);
}

#[test]
fn test_type_mismatch_rejected_for_every_distinct_pair() {
    for left in ALL_TYPES {
        for right in ALL_TYPES {
            let source = Vector::from_values(left, &[sample_value(left)]).unwrap();
            let mut target = Vector::with_capacity(right);
            let result = ops::copy_to_vector(&source, &mut target, 0);
            if left.physical() == right.physical() {
                if left.physical().is_constant_size() {
                    assert!(result.is_ok(), "{left} -> {right} should copy");
                }
            } else {
                match result {
                    Err(VectorError::Type(TypeError::Mismatch { left: l, right: r })) => {
                        assert_eq!(l, left.physical());
                        assert_eq!(r, right.physical());
                    }
                    other => panic!("{left} -> {right}: expected mismatch, got {other:?}"),
                }
            }
        }
    }
}

#[test]
fn test_materialized_vector_is_directly_indexable() {
    let mut source = int32_vector(&[Some(0), Some(10), Some(20), Some(30), Some(40)]);
    source.set_selection(SelectionVector::shared(vec![4, 0, 2]));
    source.set_count(3).unwrap();

    let mut dense = Vector::with_capacity(LogicalType::Integer);
    ops::copy_to_vector(&source, &mut dense, 0).unwrap();
    assert!(dense.selection().is_none());
    assert_eq!(dense.value(0).unwrap(), Value::Integer(40));
    assert_eq!(dense.value(1).unwrap(), Value::Integer(0));
    assert_eq!(dense.value(2).unwrap(), Value::Integer(20));
}

proptest! {
    #[test]
    fn prop_selection_transparency(
        physical in prop::collection::vec(prop::option::of(-1000i32..1000), 1..64),
        raw_sel in prop::collection::vec(0usize..64, 1..64),
    ) {
        // Build a selected view over `physical`, then compare copying the
        // view against copying its dense materialization.
        let sel: Vec<usize> = raw_sel.into_iter().map(|i| i % physical.len()).collect();
        let mut source = int32_vector(&physical);
        source.set_selection(SelectionVector::shared(sel.clone()));
        source.set_count(sel.len()).unwrap();

        let mut direct = VectorData::with_capacity(source.physical_type(), sel.len());
        ops::copy(&source, &mut direct, 0, sel.len()).unwrap();

        let mut dense = Vector::with_capacity(LogicalType::Integer);
        ops::copy_to_vector(&source, &mut dense, 0).unwrap();
        let mut via_dense = VectorData::with_capacity(dense.physical_type(), sel.len());
        ops::copy(&dense, &mut via_dense, 0, sel.len()).unwrap();

        prop_assert_eq!(int32_lanes(&direct, sel.len()), int32_lanes(&via_dense, sel.len()));
    }

    #[test]
    fn prop_storage_copy_equals_copy_without_nulls(
        values in prop::collection::vec(-1000i32..1000, 1..64),
    ) {
        let source = int32_vector(&values.iter().map(|v| Some(*v)).collect::<Vec<_>>());
        let mut plain = VectorData::with_capacity(source.physical_type(), values.len());
        let mut storage = VectorData::with_capacity(source.physical_type(), values.len());
        ops::copy(&source, &mut plain, 0, values.len()).unwrap();
        ops::copy_to_storage(&source, &mut storage, 0, values.len()).unwrap();
        prop_assert_eq!(plain, storage);
    }

    #[test]
    fn prop_offset_composition(
        values in prop::collection::vec(prop::option::of(-1000i32..1000), 2..64),
        split in 1usize..63,
    ) {
        // copy(V, buf, k, n) must equal the tail of copy(V, buf2, 0, k + n).
        let k = split % (values.len() - 1) + 1;
        let n = values.len() - k;
        let source = int32_vector(&values);

        let mut tail = VectorData::with_capacity(source.physical_type(), n);
        ops::copy(&source, &mut tail, k, n).unwrap();

        let mut full = VectorData::with_capacity(source.physical_type(), values.len());
        ops::copy(&source, &mut full, 0, values.len()).unwrap();

        prop_assert_eq!(
            int32_lanes(&tail, n),
            int32_lanes(&full, values.len())[k..].to_vec()
        );
    }

    #[test]
    fn prop_right_shift_law(
        values in prop::collection::vec(prop::option::of(-1000i32..1000), 1..64),
        offset in 0usize..64,
    ) {
        // Selection-free source: the target nullmask is the source mask
        // shifted right by `offset`, and the count shrinks accordingly.
        let offset = offset % values.len();
        let source = int32_vector(&values);
        let mut target = Vector::with_capacity(LogicalType::Integer);
        ops::copy_to_vector(&source, &mut target, offset).unwrap();

        prop_assert_eq!(target.count(), values.len() - offset);
        for i in 0..target.count() {
            prop_assert_eq!(target.nullmask().is_set(i), values[offset + i].is_none());
        }
    }
}
