use crate::{adc, sum_capacity, Limb, LimbAddError};

/// Addition of two large numbers of the same length (represented as arrays of limbs)
///
/// Writes `left + right` into the prefix of `out` and returns the number of limbs written,
/// `left.len()` or `left.len() + 1` when the carry escapes the most significant limb.
/// `out` must hold at least `left.len() + 1` limbs.
pub fn add_equal(left: &[Limb], right: &[Limb], out: &mut [Limb]) -> Result<usize, LimbAddError> {
    let len = left.len();
    if right.len() != len {
        return Err(LimbAddError::LengthMismatch { left: len, right: right.len() });
    }
    check_capacity(len, out)?;

    let carry = add_overlap(left, right, &mut out[..len]);
    Ok(finish(len, carry, out))
}

/// Addition of two large numbers (represented as arrays of limbs)
///
/// It assumes that len(greater) >= len(lesser); routing the longer operand is up to the
/// caller (see [`add`]). `out` must hold at least `greater.len() + 1` limbs.
pub fn add_greater(
    greater: &[Limb],
    lesser: &[Limb],
    out: &mut [Limb],
) -> Result<usize, LimbAddError> {
    let len_g = greater.len();
    let len_l = lesser.len();
    if len_g < len_l {
        return Err(LimbAddError::OperandOrder { greater: len_g, lesser: len_l });
    }
    check_capacity(len_g, out)?;

    Ok(add_routed(greater, lesser, out))
}

/// Adds two operands of any lengths, routing the longer one as the greater operand.
///
/// `out` must hold at least [`sum_capacity`]`(left.len(), right.len())` limbs.
pub fn add(left: &[Limb], right: &[Limb], out: &mut [Limb]) -> Result<usize, LimbAddError> {
    let (greater, lesser) = route(left, right);
    if greater.len() == lesser.len() {
        add_equal(greater, lesser, out)
    } else {
        add_greater(greater, lesser, out)
    }
}

/// Returns `left + right` as a new vector truncated to the significant limbs of the sum.
pub fn add_to_vec(left: &[Limb], right: &[Limb]) -> Vec<Limb> {
    let (greater, lesser) = route(left, right);
    let mut out = vec![0; sum_capacity(greater.len(), lesser.len())];
    let len = add_routed(greater, lesser, &mut out);
    out.truncate(len);
    out
}

/// Orders two operands as `(greater, lesser)` by length.
#[inline]
fn route<'a>(left: &'a [Limb], right: &'a [Limb]) -> (&'a [Limb], &'a [Limb]) {
    if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

/// Two-phase addition. Requires `greater.len() >= lesser.len()` and
/// `out.len() > greater.len()`.
fn add_routed(greater: &[Limb], lesser: &[Limb], out: &mut [Limb]) -> usize {
    let len_g = greater.len();
    let len_l = lesser.len();

    let (out_low, out_high) = out[..len_g].split_at_mut(len_l);
    let carry = add_overlap(&greater[..len_l], lesser, out_low);
    let carry = add_tail(&greater[len_l..], carry, out_high);
    finish(len_g, carry, out)
}

#[inline]
fn check_capacity(len: usize, out: &[Limb]) -> Result<(), LimbAddError> {
    if out.len() <= len {
        return Err(LimbAddError::OutputCapacity { capacity: out.len(), required: len + 1 });
    }
    Ok(())
}

/// Limb-wise `a + b` with carry chain, returns the carry out of the last limb.
#[inline]
fn add_overlap(a: &[Limb], b: &[Limb], out: &mut [Limb]) -> Limb {
    let mut carry = 0;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let (sum, c) = adc(x, y, carry);
        *o = sum;
        carry = c;
    }
    carry
}

/// Propagates `carry` into `tail` until it clears, then copies the rest of `tail` verbatim.
#[inline]
fn add_tail(tail: &[Limb], mut carry: Limb, out: &mut [Limb]) -> Limb {
    let mut i = 0;
    while carry == 1 && i < tail.len() {
        let (sum, overflow) = tail[i].overflowing_add(1);
        out[i] = sum;
        carry = overflow as Limb;
        i += 1;
    }
    // No carry, just copy the rest
    out[i..].copy_from_slice(&tail[i..]);
    carry
}

#[inline]
fn finish(len: usize, carry: Limb, out: &mut [Limb]) -> usize {
    if carry == 0 {
        len
    } else {
        out[len] = carry;
        len + 1
    }
}
