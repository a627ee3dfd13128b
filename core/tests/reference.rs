use limbadd_core::{add, add_equal, add_greater, add_to_vec, sum_capacity, Limb};
use limbadd_helpers::{
    boundary_cases, check_result_length, operand_rng, random_limbs, verify_sum, VERIFY_LENGTHS,
};

#[test]
fn random_operands_match_reference() {
    let mut rng = operand_rng(Some(0x5eed));
    for &left_len in VERIFY_LENGTHS.iter() {
        for &right_len in VERIFY_LENGTHS.iter() {
            let left = random_limbs(&mut rng, left_len);
            let right = random_limbs(&mut rng, right_len);

            let sum = add_to_vec(&left, &right);
            assert!(verify_sum(&left, &right, &sum), "left_len:{left_len} right_len:{right_len}");
            assert!(check_result_length(left_len, right_len, &sum));
            assert_eq!(add_to_vec(&right, &left), sum, "addition must be commutative");
        }
    }
}

#[test]
fn boundary_operands_match_reference() {
    for (left, right) in boundary_cases() {
        let sum = add_to_vec(&left, &right);
        assert!(verify_sum(&left, &right, &sum), "left:{left:?} right:{right:?}");
        assert!(check_result_length(left.len(), right.len(), &sum));
    }
}

#[test]
fn entry_points_agree_with_wrapper() {
    let mut rng = operand_rng(Some(11));
    let greater = random_limbs(&mut rng, 300);
    let lesser = random_limbs(&mut rng, 120);
    let same = random_limbs(&mut rng, 300);

    let mut out = vec![0; sum_capacity(greater.len(), lesser.len())];
    let len = add_greater(&greater, &lesser, &mut out).unwrap();
    assert_eq!(&out[..len], add_to_vec(&lesser, &greater).as_slice());

    let mut out = vec![0; sum_capacity(greater.len(), same.len())];
    let len = add_equal(&greater, &same, &mut out).unwrap();
    assert_eq!(&out[..len], add_to_vec(&same, &greater).as_slice());
}

#[test]
fn long_carry_chain_through_tail() {
    let mut greater: Vec<Limb> = vec![Limb::MAX; 4096];
    greater.push(41);
    let lesser = [1, 0];

    let mut out = vec![0; sum_capacity(greater.len(), lesser.len())];
    let len = add(&lesser, &greater, &mut out).unwrap();
    assert_eq!(len, greater.len());
    assert!(out[..4096].iter().all(|&l| l == 0));
    assert_eq!(out[4096], 42);
    assert!(verify_sum(&greater, &lesser, &out[..len]));
}

#[test]
fn concurrent_calls_on_independent_buffers() {
    let mut rng = operand_rng(Some(3));
    let left = random_limbs(&mut rng, 2048);
    let right = random_limbs(&mut rng, 1000);
    let expected = add_to_vec(&left, &right);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut out = vec![0; sum_capacity(left.len(), right.len())];
                let len = add(&left, &right, &mut out).unwrap();
                assert_eq!(&out[..len], expected.as_slice());
            });
        }
    });
}
