//! Random polynomials over GF(2^16) and Lagrange interpolation.

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::gf16::{add, div, mult};
use crate::Error;

/// A polynomial over GF(2^16) with a fixed intercept and random higher
/// coefficients. The coefficients are secret material and are wiped on
/// drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Polynomial {
    coefficients: Vec<u16>,
}

impl Polynomial {
    /// Construct a polynomial of the given degree with `intercept` as the
    /// constant term and uniformly random remaining coefficients.
    pub(crate) fn random<R: RngCore + CryptoRng>(
        intercept: u16,
        degree: u16,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut coefficients = Vec::with_capacity(degree as usize + 1);
        coefficients.push(intercept);

        let mut random = vec![0u8; degree as usize * 2];
        rng.try_fill_bytes(&mut random).map_err(Error::Randomness)?;
        coefficients.extend(
            random
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]])),
        );
        random.zeroize();

        Ok(Self { coefficients })
    }

    /// The value of the polynomial at `x`, via Horner's method.
    pub(crate) fn evaluate(&self, x: u16) -> u16 {
        // Special-case the origin; this also keeps zero out of the log
        // table.
        if x == 0 {
            return self.coefficients[0];
        }

        let degree = self.coefficients.len() - 1;
        let mut out = self.coefficients[degree];
        for &coefficient in self.coefficients[..degree].iter().rev() {
            out = add(mult(out, x), coefficient);
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn coefficient(&self, i: usize) -> u16 {
        self.coefficients[i]
    }
}

/// Evaluate at `x` the unique polynomial through the given sample points,
/// by Lagrange interpolation.
///
/// The x coordinates must be pairwise distinct; a repeated coordinate puts
/// a zero denominator under [`div`].
pub(crate) fn interpolate(x_samples: &[u16], y_samples: &[u16], x: u16) -> u16 {
    let mut result = 0;
    for (i, (&x_i, &y_i)) in x_samples.iter().zip(y_samples).enumerate() {
        let mut basis = 1;
        for (j, &x_j) in x_samples.iter().enumerate() {
            if i == j {
                continue;
            }
            let numerator = add(x, x_j);
            let denominator = add(x_i, x_j);
            basis = mult(basis, div(numerator, denominator));
        }
        result = add(result, mult(y_i, basis));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn degree_zero_is_constant() {
        let p = Polynomial::random(42, 0, &mut OsRng).unwrap();
        assert_eq!(p.evaluate(0), 42);
        assert_eq!(p.evaluate(1), 42);
        assert_eq!(p.evaluate(u16::MAX), 42);
    }

    #[test]
    fn intercept_is_preserved() {
        let p = Polynomial::random(42, 2, &mut OsRng).unwrap();
        assert_eq!(p.coefficient(0), 42);
        assert_eq!(p.evaluate(0), 42);
    }

    #[test]
    fn degree_one_evaluation() {
        let p = Polynomial::random(42, 1, &mut OsRng).unwrap();
        let expected = add(42, mult(1, p.coefficient(1)));
        assert_eq!(p.evaluate(1), expected);
    }

    #[test]
    fn interpolate_recovers_every_intercept() {
        for intercept in 0..=u16::MAX {
            let p = Polynomial::random(intercept, 2, &mut OsRng).unwrap();
            let x_samples = [1, 2, 3];
            let y_samples = [p.evaluate(1), p.evaluate(2), p.evaluate(3)];
            assert_eq!(interpolate(&x_samples, &y_samples, 0), intercept);
        }
    }
}
