//! Built-in scalar math functions
//!
//! Every executor here follows the framework contract: inputs may carry
//! arbitrary selection vectors and nullmasks, results come out dense with
//! nulls propagated per lane. The executors loop through
//! [`lamina_vector::ops::exec`] so selection handling is never re-derived.

use crate::descriptor::{
    decimal_return_type, no_arguments, same_return_type, single_numeric_argument,
    tinyint_return_type, FunctionData, ScalarExecutor, ScalarFunction,
};
use crate::error::{FunctionError, FunctionResult};
use lamina_core::{LogicalType, TypeError};
use lamina_vector::{ops, NullMask, SelectionVector, Vector, VectorData};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::any::Any;
use std::f64::consts::PI;

fn single_input<'a>(name: &'static str, inputs: &'a [Vector]) -> FunctionResult<&'a Vector> {
    match inputs {
        [input] => Ok(input),
        _ => Err(FunctionError::InvalidArgumentCount {
            name,
            expected: 1,
            got: inputs.len(),
        }),
    }
}

fn expect_no_inputs(name: &'static str, inputs: &[Vector]) -> FunctionResult<()> {
    if inputs.is_empty() {
        Ok(())
    } else {
        Err(FunctionError::InvalidArgumentCount {
            name,
            expected: 0,
            got: inputs.len(),
        })
    }
}

/// One null-propagating pass over the resolved input lanes
fn unary_lanes<T: Copy, R: Copy>(
    src: &[T],
    sel: Option<&SelectionVector>,
    mask: &NullMask,
    count: usize,
    dst: &mut [R],
    out_mask: &mut NullMask,
    f: impl Fn(T) -> R,
) {
    ops::exec(sel, count, 0, |i, k| {
        if mask.is_set(i) {
            out_mask.set(k);
        } else {
            dst[k] = f(src[i]);
        }
    });
}

fn prepare_result(result: &mut Vector, count: usize) -> FunctionResult<()> {
    result.clear_selection();
    result.nullmask_mut().reset();
    result.set_count(count)?;
    Ok(())
}

/// Unary numeric function whose result keeps the argument type
fn unary_numeric_same(
    operation: &'static str,
    inputs: &[Vector],
    result: &mut Vector,
    int_op: impl Fn(i64) -> i64 + Copy,
    double_op: impl Fn(f64) -> f64 + Copy,
) -> FunctionResult<()> {
    let input = single_input(operation, inputs)?;
    let count = input.count();
    prepare_result(result, count)?;
    let sel = input.selection();
    let mask = input.nullmask();
    let (out_data, out_mask) = result.data_and_nullmask_mut();
    match (input.data(), out_data) {
        (VectorData::Int8(src), VectorData::Int8(dst)) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| {
                int_op(x as i64) as i8
            })
        }
        (VectorData::Int16(src), VectorData::Int16(dst)) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| {
                int_op(x as i64) as i16
            })
        }
        (VectorData::Int32(src), VectorData::Int32(dst)) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| {
                int_op(x as i64) as i32
            })
        }
        (VectorData::Int64(src), VectorData::Int64(dst)) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, int_op)
        }
        (VectorData::Double(src), VectorData::Double(dst)) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, double_op)
        }
        (src, _) => {
            return Err(TypeError::NotImplemented {
                operation,
                ty: src.physical_type(),
            }
            .into())
        }
    }
    Ok(())
}

/// Unary numeric function producing a decimal result
fn unary_double(
    operation: &'static str,
    inputs: &[Vector],
    result: &mut Vector,
    f: impl Fn(f64) -> f64 + Copy,
) -> FunctionResult<()> {
    let input = single_input(operation, inputs)?;
    let count = input.count();
    prepare_result(result, count)?;
    let sel = input.selection();
    let mask = input.nullmask();
    let (out_data, out_mask) = result.data_and_nullmask_mut();
    let dst = match out_data {
        VectorData::Double(dst) => dst,
        other => {
            return Err(TypeError::NotImplemented {
                operation,
                ty: other.physical_type(),
            }
            .into())
        }
    };
    match input.data() {
        VectorData::Int8(src) => unary_lanes(src, sel, mask, count, dst, out_mask, |x| f(x as f64)),
        VectorData::Int16(src) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| f(x as f64))
        }
        VectorData::Int32(src) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| f(x as f64))
        }
        VectorData::Int64(src) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| f(x as f64))
        }
        VectorData::Double(src) => unary_lanes(src, sel, mask, count, dst, out_mask, f),
        src => {
            return Err(TypeError::NotImplemented {
                operation,
                ty: src.physical_type(),
            }
            .into())
        }
    }
    Ok(())
}

fn abs_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_numeric_same("abs", inputs, result, |x| x.wrapping_abs(), f64::abs)
}

fn ceil_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    // integers are already integral; only the decimal lanes move
    unary_numeric_same("ceil", inputs, result, |x| x, f64::ceil)
}

fn floor_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_numeric_same("floor", inputs, result, |x| x, f64::floor)
}

fn sqrt_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_numeric_same(
        "sqrt",
        inputs,
        result,
        |x| (x as f64).sqrt() as i64,
        f64::sqrt,
    )
}

fn cbrt_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("cbrt", inputs, result, f64::cbrt)
}

fn exp_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("exp", inputs, result, f64::exp)
}

fn ln_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("ln", inputs, result, f64::ln)
}

fn log10_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("log10", inputs, result, f64::log10)
}

fn log2_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("log2", inputs, result, f64::log2)
}

fn degrees_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("degrees", inputs, result, f64::to_degrees)
}

fn radians_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    unary_double("radians", inputs, result, f64::to_radians)
}

fn sign_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    let input = single_input("sign", inputs)?;
    let count = input.count();
    prepare_result(result, count)?;
    let sel = input.selection();
    let mask = input.nullmask();
    let (out_data, out_mask) = result.data_and_nullmask_mut();
    let dst = match out_data {
        VectorData::Int8(dst) => dst,
        other => {
            return Err(TypeError::NotImplemented {
                operation: "sign",
                ty: other.physical_type(),
            }
            .into())
        }
    };
    match input.data() {
        VectorData::Int8(src) => unary_lanes(src, sel, mask, count, dst, out_mask, |x| x.signum()),
        VectorData::Int16(src) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| x.signum() as i8)
        }
        VectorData::Int32(src) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| x.signum() as i8)
        }
        VectorData::Int64(src) => {
            unary_lanes(src, sel, mask, count, dst, out_mask, |x| x.signum() as i8)
        }
        VectorData::Double(src) => unary_lanes(src, sel, mask, count, dst, out_mask, |x: f64| {
            if x > 0.0 {
                1
            } else if x < 0.0 {
                -1
            } else {
                0
            }
        }),
        src => {
            return Err(TypeError::NotImplemented {
                operation: "sign",
                ty: src.physical_type(),
            }
            .into())
        }
    }
    Ok(())
}

fn pi_function(
    inputs: &[Vector],
    _data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    expect_no_inputs("pi", inputs)?;
    // constant vector: a single lane
    prepare_result(result, 1)?;
    match result.data_mut() {
        VectorData::Double(dst) => {
            dst[0] = PI;
            Ok(())
        }
        other => Err(TypeError::NotImplemented {
            operation: "pi",
            ty: other.physical_type(),
        }
        .into()),
    }
}

/// Bound state for `random`: the per-binding RNG
#[derive(Debug)]
pub struct RandomBindData {
    rng: StdRng,
}

impl RandomBindData {
    /// Seeded constructor, used by tests that need determinism
    pub fn with_seed(seed: u64) -> Self {
        RandomBindData {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FunctionData for RandomBindData {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Bind hook for `random`: seed one RNG per binding site
pub fn random_bind(_arguments: &[LogicalType]) -> FunctionResult<Box<dyn FunctionData>> {
    Ok(Box::new(RandomBindData {
        rng: StdRng::from_entropy(),
    }))
}

fn random_function(
    inputs: &[Vector],
    data: Option<&mut (dyn FunctionData + 'static)>,
    result: &mut Vector,
) -> FunctionResult<()> {
    expect_no_inputs("random", inputs)?;
    // no argument to take a cardinality from: the caller pre-sizes the
    // result to its chunk, a fresh vector yields a single lane
    let count = result.count().max(1);
    prepare_result(result, count)?;
    let dst = match result.data_mut() {
        VectorData::Double(dst) => dst,
        other => {
            return Err(TypeError::NotImplemented {
                operation: "random",
                ty: other.physical_type(),
            }
            .into())
        }
    };
    match data.and_then(|d| d.as_any_mut().downcast_mut::<RandomBindData>()) {
        Some(bound) => {
            for lane in dst[..count].iter_mut() {
                *lane = bound.rng.gen::<f64>();
            }
        }
        None => {
            let mut rng = StdRng::from_entropy();
            for lane in dst[..count].iter_mut() {
                *lane = rng.gen::<f64>();
            }
        }
    }
    Ok(())
}

/// Descriptor table for the built-in math functions
pub static BUILTIN_MATH_FUNCTIONS: Lazy<Vec<ScalarFunction>> = Lazy::new(|| {
    let same_type = |name: &'static str, function: ScalarExecutor| ScalarFunction {
        name,
        matches: single_numeric_argument,
        return_type: same_return_type,
        function,
        bind: None,
        dependencies: None,
        has_side_effects: false,
    };
    let decimal = |name: &'static str, function: ScalarExecutor| ScalarFunction {
        name,
        matches: single_numeric_argument,
        return_type: decimal_return_type,
        function,
        bind: None,
        dependencies: None,
        has_side_effects: false,
    };
    vec![
        same_type("abs", abs_function),
        same_type("ceil", ceil_function),
        same_type("ceiling", ceil_function),
        same_type("floor", floor_function),
        same_type("sqrt", sqrt_function),
        decimal("cbrt", cbrt_function),
        decimal("degrees", degrees_function),
        decimal("exp", exp_function),
        decimal("ln", ln_function),
        decimal("log", log10_function),
        decimal("log10", log10_function),
        decimal("log2", log2_function),
        decimal("radians", radians_function),
        ScalarFunction {
            name: "sign",
            matches: single_numeric_argument,
            return_type: tinyint_return_type,
            function: sign_function,
            bind: None,
            dependencies: None,
            has_side_effects: false,
        },
        ScalarFunction {
            name: "pi",
            matches: no_arguments,
            return_type: decimal_return_type,
            function: pi_function,
            bind: None,
            dependencies: None,
            has_side_effects: false,
        },
        ScalarFunction {
            name: "random",
            matches: no_arguments,
            return_type: decimal_return_type,
            function: random_function,
            bind: Some(random_bind),
            dependencies: None,
            has_side_effects: true,
        },
    ]
});
