//! GF(2^16) field arithmetic.
//!
//! Multiplication and division go through the precomputed log/exp tables in
//! `crate::tables`. Both mask zero operands with a branch-free select so
//! that timing does not reveal whether an operand was zero.

use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::tables::{EXP_TABLE, LOG_TABLE};

/// Number of elements in the field.
pub const FIELD_SIZE: usize = 65536;

/// Order of the multiplicative group.
const GROUP_ORDER: usize = FIELD_SIZE - 1;

/// Addition in GF(2^16). Doubles as subtraction in characteristic two.
#[inline]
pub(crate) fn add(a: u16, b: u16) -> u16 {
    a ^ b
}

/// Multiplication in GF(2^16).
pub(crate) fn mult(a: u16, b: u16) -> u16 {
    let log_a = LOG_TABLE[a as usize] as usize;
    let log_b = LOG_TABLE[b as usize] as usize;
    let product = EXP_TABLE[(log_a + log_b) % GROUP_ORDER];

    // A zero operand indexes LOG_TABLE[0], whose contents are meaningless;
    // the select discards the bogus product without branching on either
    // operand.
    let either_zero = a.ct_eq(&0) | b.ct_eq(&0);
    u16::conditional_select(&product, &0, either_zero)
}

/// Division in GF(2^16).
///
/// Panics on a zero divisor. Split and combine never divide by zero on
/// validated inputs, so reaching the panic means field arithmetic is
/// already corrupted.
pub(crate) fn div(a: u16, b: u16) -> u16 {
    if b == 0 {
        panic!("divide by zero in GF(2^16)");
    }

    let log_a = LOG_TABLE[a as usize] as usize;
    let log_b = LOG_TABLE[b as usize] as usize;
    let quotient = EXP_TABLE[(log_a + GROUP_ORDER - log_b) % GROUP_ORDER];

    u16::conditional_select(&quotient, &0, a.ct_eq(&0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_roundtrip() {
        for v in 1..=u16::MAX {
            let log_v = LOG_TABLE[v as usize];
            assert_eq!(EXP_TABLE[log_v as usize], v, "exp(log({v})) != {v}");
        }
    }

    #[test]
    fn exp_table_is_a_permutation() {
        assert_eq!(EXP_TABLE[0], 1);

        let mut seen = vec![false; FIELD_SIZE];
        for &v in &EXP_TABLE[..GROUP_ORDER] {
            assert_ne!(v, 0);
            assert!(!seen[v as usize], "{v} repeats before the cycle closes");
            seen[v as usize] = true;
        }

        // The generator has order 65535, so the next power wraps to one.
        assert_eq!(EXP_TABLE[GROUP_ORDER], 1);
    }

    #[test]
    fn add_is_xor() {
        assert_eq!(add(16, 16), 0);
        assert_eq!(add(3, 4), 7);

        for a in (0..=u16::MAX).step_by(257) {
            assert_eq!(add(a, 0), a);
            assert_eq!(add(a, a), 0);
        }
    }

    #[test]
    fn mult_identities() {
        assert_eq!(mult(3, 7), 9);
        assert_eq!(mult(3, 0), 0);
        assert_eq!(mult(0, 3), 0);

        for a in (0..=u16::MAX).step_by(251) {
            assert_eq!(mult(a, 1), a);
            assert_eq!(mult(1, a), a);
            assert_eq!(mult(a, 0), 0);
        }
    }

    #[test]
    fn div_consistency() {
        assert_eq!(div(0, 7), 0);
        assert_eq!(div(3, 3), 1);
        assert_eq!(div(6, 3), 2);

        for a in (0..=u16::MAX).step_by(193) {
            for b in (1..=u16::MAX).step_by(197) {
                assert_eq!(mult(div(a, b), b), a, "({a} / {b}) * {b} != {a}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn div_by_zero_panics() {
        div(1, 0);
    }
}
