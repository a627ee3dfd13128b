//! C ABI for the limb addition kernel.
//!
//! Lengths and the output capacity are passed explicitly and validated before any memory is
//! touched. Every function returns the number of significant limbs written to `out`, or
//! [`LIMBADD_INVALID_ARGUMENT`] when the arguments break a precondition.

use std::slice;

use limbadd_core::{add_equal, add_greater, Limb, LimbAddError};

pub const LIMBADD_INVALID_ARGUMENT: i64 = -1;

/// `out[..n] = left + right` for two operands of `length` limbs each.
///
/// ### Safety
///
/// `left` and `right` must be valid for reads of `length` limbs and `out` for writes of
/// `out_capacity` limbs. `out` must not overlap either operand. Operand pointers may be null
/// only when `length` is 0.
#[no_mangle]
pub unsafe extern "C" fn limbadd_add_equal(
    length: i64,
    left: *const u64,
    right: *const u64,
    out: *mut u64,
    out_capacity: i64,
) -> i64 {
    to_c_result(checked_add_equal(length, left, right, out, out_capacity))
}

/// `out[..n] = greater + lesser` with `greater_length >= lesser_length`.
///
/// ### Safety
///
/// `greater` must be valid for reads of `greater_length` limbs, `lesser` for reads of
/// `lesser_length` limbs and `out` for writes of `out_capacity` limbs. `out` must not overlap
/// either operand. Operand pointers may be null only when their length is 0.
#[no_mangle]
pub unsafe extern "C" fn limbadd_add_greater(
    greater_length: i64,
    lesser_length: i64,
    greater: *const u64,
    lesser: *const u64,
    out: *mut u64,
    out_capacity: i64,
) -> i64 {
    to_c_result(checked_add_greater(
        greater_length,
        lesser_length,
        greater,
        lesser,
        out,
        out_capacity,
    ))
}

unsafe fn checked_add_equal(
    length: i64,
    left: *const u64,
    right: *const u64,
    out: *mut u64,
    out_capacity: i64,
) -> Result<usize, LimbAddError> {
    let left = operand(left, length, "left")?;
    let right = operand(right, length, "right")?;
    let out = output(out, out_capacity)?;
    add_equal(left, right, out)
}

unsafe fn checked_add_greater(
    greater_length: i64,
    lesser_length: i64,
    greater: *const u64,
    lesser: *const u64,
    out: *mut u64,
    out_capacity: i64,
) -> Result<usize, LimbAddError> {
    let greater = operand(greater, greater_length, "greater")?;
    let lesser = operand(lesser, lesser_length, "lesser")?;
    let out = output(out, out_capacity)?;
    add_greater(greater, lesser, out)
}

fn to_c_result(result: Result<usize, LimbAddError>) -> i64 {
    match result {
        Ok(len) => len as i64,
        Err(_) => LIMBADD_INVALID_ARGUMENT,
    }
}

fn checked_len(len: i64, name: &'static str) -> Result<usize, LimbAddError> {
    usize::try_from(len).map_err(|_| LimbAddError::NegativeLength { name, len })
}

unsafe fn operand<'a>(
    ptr: *const u64,
    len: i64,
    name: &'static str,
) -> Result<&'a [Limb], LimbAddError> {
    let len = checked_len(len, name)?;
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(LimbAddError::NullPointer { name });
    }
    Ok(slice::from_raw_parts(ptr, len))
}

unsafe fn output<'a>(ptr: *mut u64, capacity: i64) -> Result<&'a mut [Limb], LimbAddError> {
    let capacity = checked_len(capacity, "out")?;
    if ptr.is_null() {
        return Err(LimbAddError::NullPointer { name: "out" });
    }
    Ok(slice::from_raw_parts_mut(ptr, capacity))
}
