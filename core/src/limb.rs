/// One 64-bit word of a big integer. Index 0 holds the least significant limb.
pub type Limb = u64;

/// Add with carry: `a + b + carry = (carry_out << 64) | sum`.
///
/// `carry` must be 0 or 1, and so is the returned carry.
#[inline(always)]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry);
    (sum, (c1 | c2) as Limb)
}

/// Minimum output buffer length able to hold the sum of two operands of the given lengths.
#[inline]
pub const fn sum_capacity(left_len: usize, right_len: usize) -> usize {
    if left_len >= right_len {
        left_len + 1
    } else {
        right_len + 1
    }
}
