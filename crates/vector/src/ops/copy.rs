//! The Copy family: materializing vectors into dense buffers
//!
//! Three entry points, all dispatching once on the physical type tag and
//! then running a monomorphized loop over [`exec`]:
//!
//! - [`copy`]: constant-size types only, no null substitution. The
//!   destination receives the raw lane values; null positions carry
//!   whatever the producer stored there. Consumers that pair the buffer
//!   with a validity channel rely on exactly this.
//! - [`copy_to_storage`]: every physical type, including varchar (whose
//!   handle word is the payload at this layer). Null positions receive
//!   the per-type [`PhysicalValue::NULL_REPR`] sentinel. When the source
//!   mask has no set bits this MUST produce byte-identical output to
//!   [`copy`], and takes that path outright.
//! - [`copy_to_vector`]: vector-to-vector materialization. Resolves the
//!   selection vector while transferring the nullmask, so the target is a
//!   dense, directly indexable vector with no selection attached.
//!
//! Destinations are always written densely from slot 0; the offset only
//! selects which source elements are read.

use crate::data::{PhysicalValue, VectorData};
use crate::error::{VectorError, VectorResult};
use crate::nullmask::NullMask;
use crate::ops::exec::exec;
use crate::selection::SelectionVector;
use crate::vector::Vector;
use lamina_core::TypeError;

/// Copy lanes without consulting the nullmask
fn copy_lanes<T: PhysicalValue>(
    src: &[T],
    dst: &mut [T],
    sel: Option<&SelectionVector>,
    offset: usize,
    count: usize,
) {
    exec(sel, count + offset, offset, |i, k| {
        dst[k - offset] = src[i];
    });
}

/// Copy lanes, writing the NULL sentinel where the mask is set
///
/// A mask with no set bits takes the plain [`copy_lanes`] loop; the two
/// paths are required to produce identical output for such input.
fn copy_lanes_set_null<T: PhysicalValue>(
    src: &[T],
    dst: &mut [T],
    sel: Option<&SelectionVector>,
    offset: usize,
    count: usize,
    nullmask: &NullMask,
) {
    if nullmask.any() {
        exec(sel, count + offset, offset, |i, k| {
            dst[k - offset] = if nullmask.is_set(i) {
                T::NULL_REPR
            } else {
                src[i]
            };
        });
    } else {
        copy_lanes(src, dst, sel, offset, count);
    }
}

fn copy_variant<T: PhysicalValue>(
    src: &[T],
    dst: &mut [T],
    source: &Vector,
    offset: usize,
    count: usize,
    set_null: bool,
) -> VectorResult<()> {
    if dst.len() < count {
        return Err(VectorError::TargetTooSmall {
            needed: count,
            actual: dst.len(),
        });
    }
    if set_null {
        copy_lanes_set_null(src, dst, source.selection(), offset, count, source.nullmask());
    } else {
        copy_lanes(src, dst, source.selection(), offset, count);
    }
    Ok(())
}

/// Type-dispatched copy loop shared by [`copy`] and [`copy_to_storage`]
fn generic_copy(
    source: &Vector,
    target: &mut VectorData,
    offset: usize,
    mut element_count: usize,
    set_null: bool,
) -> VectorResult<()> {
    if source.count() == 0 {
        return Ok(());
    }
    // element_count == 0 is the copy-everything shorthand
    if element_count == 0 {
        element_count = source.count();
    }
    if offset + element_count > source.count() {
        return Err(VectorError::OutOfBounds {
            offset,
            element_count,
            count: source.count(),
        });
    }
    match (source.data(), target) {
        (VectorData::Bool(src), VectorData::Bool(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Int8(src), VectorData::Int8(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Int16(src), VectorData::Int16(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Int32(src), VectorData::Int32(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Int64(src), VectorData::Int64(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Double(src), VectorData::Double(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Pointer(src), VectorData::Pointer(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (VectorData::Varchar(src), VectorData::Varchar(dst)) => {
            copy_variant(src, dst, source, offset, element_count, set_null)
        }
        (src, dst) => Err(TypeError::Mismatch {
            left: src.physical_type(),
            right: dst.physical_type(),
        }
        .into()),
    }
}

/// Copy a constant-size vector into a dense buffer, nulls not applied
///
/// Reads source elements `[offset, offset + element_count)` (resolving the
/// selection vector) and writes them densely into `target[0..element_count)`.
/// An `element_count` of 0 copies everything. Null bits are ignored: the
/// destination receives the raw stored lane, including any sentinel the
/// producer may already have written.
///
/// # Errors
/// `InvalidType` for variable-size source types; `Mismatch` when the
/// target buffer's type differs; `OutOfBounds`/`TargetTooSmall` for range
/// violations.
pub fn copy(
    source: &Vector,
    target: &mut VectorData,
    offset: usize,
    element_count: usize,
) -> VectorResult<()> {
    if !source.physical_type().is_constant_size() {
        return Err(TypeError::InvalidType {
            ty: source.physical_type(),
            reason: "cannot copy non-constant size types using this method".to_string(),
        }
        .into());
    }
    generic_copy(source, target, offset, element_count, false)
}

/// Copy a vector into dense storage, substituting NULL sentinels
///
/// Like [`copy`], but every physical type is accepted (varchar lanes are
/// fixed-width handle words at this layer) and lanes whose resolved
/// physical position is null in the source mask receive the per-type
/// sentinel instead of the stored value. Sources without any null bit take
/// the exact non-branching path of [`copy`].
pub fn copy_to_storage(
    source: &Vector,
    target: &mut VectorData,
    offset: usize,
    element_count: usize,
) -> VectorResult<()> {
    generic_copy(source, target, offset, element_count, true)
}

/// Materialize `source[offset..]` into `target` as a dense vector
///
/// Sets `target.count = source.count - offset`, computes the target
/// nullmask from the *resolved* physical source positions (a plain
/// right-shift when no selection vector is attached), detaches any
/// selection from the target and copies the payload densely. The result is
/// fully independent of the source's selection vector and directly
/// indexable.
///
/// # Errors
/// `Mismatch` when the physical types differ (reported with both types);
/// `OutOfBounds` when `offset > source.count`; plus the [`copy`] errors
/// for the payload transfer.
pub fn copy_to_vector(source: &Vector, target: &mut Vector, offset: usize) -> VectorResult<()> {
    if source.physical_type() != target.physical_type() {
        return Err(TypeError::Mismatch {
            left: source.physical_type(),
            right: target.physical_type(),
        }
        .into());
    }
    if offset > source.count() {
        return Err(VectorError::OutOfBounds {
            offset,
            element_count: 0,
            count: source.count(),
        });
    }
    target.count = source.count() - offset;
    match source.selection() {
        Some(sel) => {
            target.nullmask.reset();
            for k in 0..target.count {
                if source.nullmask().is_set(sel.get(offset + k)) {
                    target.nullmask.set(k);
                }
            }
        }
        None => {
            target.nullmask = source.nullmask().shift_right(offset);
        }
    }
    // The target is dense from here on; it never keeps a selection.
    target.clear_selection();
    if target.count == 0 {
        return Ok(());
    }
    copy(source, &mut target.data, offset, target.count)
}
