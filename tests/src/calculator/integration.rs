#![cfg(test)]
use primer_common::error::ValueError;
use primer_core::calculator::{Accumulator, Operation};

#[test]
fn parsed_operands_drive_every_operation() {
    let accumulator: Accumulator = "12 4 2".parse().unwrap();

    assert_eq!(Operation::Addition.apply(&accumulator), Ok(18.0));
    assert_eq!(Operation::Subtraction.apply(&accumulator), Ok(-18.0));
    assert_eq!(Operation::Multiplication.apply(&accumulator), Ok(96.0));
    assert_eq!(Operation::Division.apply(&accumulator), Ok(3.0));

    // operands are never consumed by a derivation
    assert_eq!(accumulator.operands(), &[12.0, 4.0, 2.0]);
}

#[test]
fn empty_accumulator_identities() {
    let accumulator = Accumulator::default();

    assert_eq!(accumulator.sum(), 0.0);
    assert_eq!(accumulator.sequential_difference(), 0.0);
    assert_eq!(accumulator.product(), 1.0);
    assert_eq!(
        accumulator.quotient(),
        Err(ValueError::IndexOutOfRange {
            operation: "division",
            required: 2,
            supplied: 0,
        })
    );
}

#[test]
fn quotient_checks_operand_count_before_zero() {
    let single = Accumulator::new([0.0]);
    assert!(matches!(
        single.quotient(),
        Err(ValueError::IndexOutOfRange { supplied: 1, .. })
    ));

    let zero_denominator = Accumulator::new([3.0, 0.0, 5.0]);
    assert_eq!(zero_denominator.quotient(), Err(ValueError::DivisionByZero));
}

#[test]
fn collected_from_iterator() {
    let accumulator: Accumulator = (1..=5).map(f64::from).collect();
    assert_eq!(accumulator.sum(), 15.0);
    assert_eq!(accumulator.sequential_difference(), -15.0);
    assert_eq!(accumulator.product(), 120.0);
    assert_eq!(accumulator.quotient(), Ok(0.5));
}
