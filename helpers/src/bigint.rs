use num_bigint::BigUint;

/// Builds the value of a little-endian limb sequence. An empty sequence is zero.
pub fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

pub fn reference_sum(left: &[u64], right: &[u64]) -> BigUint {
    limbs_to_biguint(left) + limbs_to_biguint(right)
}

/// Checks `sum` against an independent `BigUint` addition of the operands.
pub fn verify_sum(left: &[u64], right: &[u64], sum: &[u64]) -> bool {
    let expected = reference_sum(left, right);
    let actual = limbs_to_biguint(sum);
    if expected != actual {
        tracing::debug!(
            "verify_sum mismatch left_len:{} right_len:{} sum_len:{} expected_bits:{} actual_bits:{}",
            left.len(),
            right.len(),
            sum.len(),
            expected.bits(),
            actual.bits()
        );
        return false;
    }
    true
}

/// Checks the length contract of a sum: it has `max(left_len, right_len)` limbs, or one more
/// limb when the carry escaped, and that extra limb is exactly 1.
pub fn check_result_length(left_len: usize, right_len: usize, sum: &[u64]) -> bool {
    let len = left_len.max(right_len);
    match sum.len() {
        l if l == len => true,
        l if l == len + 1 => sum[len] == 1,
        _ => false,
    }
}

/// Number of decimal digits of the value of `limbs`.
pub fn decimal_digits(limbs: &[u64]) -> usize {
    limbs_to_biguint(limbs).to_str_radix(10).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn limbs_value_ignores_leading_zeros() {
        let value = limbs_to_biguint(&[1, 2, 0, 0]);
        assert_eq!(value, (BigUint::from(2u64) << 64) + 1u64);
        assert_eq!(limbs_to_biguint(&[1, 2]), value);
        assert!(limbs_to_biguint(&[]).is_zero());
        assert!(limbs_to_biguint(&[0, 0]).is_zero());
    }

    #[test]
    fn verify_detects_wrong_sums() {
        assert!(verify_sum(&[5, 3], &[2], &[7, 3]));
        assert!(verify_sum(&[u64::MAX], &[1], &[0, 1]));
        assert!(!verify_sum(&[5, 3], &[2], &[7, 4]));
        assert!(!verify_sum(&[u64::MAX], &[1], &[0]));
    }

    #[test]
    fn result_length_contract() {
        assert!(check_result_length(2, 1, &[7, 3]));
        assert!(check_result_length(2, 2, &[1, 2, 1]));
        assert!(!check_result_length(2, 2, &[1, 2, 2]));
        assert!(!check_result_length(2, 2, &[1]));
        assert!(check_result_length(0, 0, &[]));
    }

    #[test]
    fn digits_of_saturated_values() {
        assert_eq!(decimal_digits(&[]), 1);
        assert_eq!(decimal_digits(&vec![u64::MAX; 64]), 1234);
        assert_eq!(decimal_digits(&vec![u64::MAX; 128]), 2467);
        assert_eq!(decimal_digits(&vec![u64::MAX; 256]), 4933);
        assert_eq!(decimal_digits(&vec![u64::MAX; 512]), 9865);
        assert_eq!(decimal_digits(&vec![u32::MAX as u64; 1024]), 19719);
        assert_eq!(decimal_digits(&vec![u32::MAX as u64; 2048]), 39447);
    }
}
