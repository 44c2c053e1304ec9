//! Polynomials over a prime field, suitable for secret sharing: a secret sits
//! in the constant term, shares are evaluations at nonzero indices, and the
//! secret (or any linear image of it, such as a signature) is recovered by
//! Lagrange interpolation at zero.

use crate::curve::group::{Element, Scalar};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Index of a share holder. Indices start at 1; 0 is the evaluation point of
/// the secret itself and is never handed out.
pub type Idx = u32;

/// A group element tagged with the index it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedValue<A> {
    pub index: Idx,
    pub value: A,
}

/// The value of a polynomial at one index.
pub type Eval<A> = IndexedValue<A>;

/// Errors arising from polynomial construction and interpolation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// Fewer than two coefficients means no threshold at all.
    #[error("threshold must be at least 2, got {0}")]
    InvalidThreshold(usize),

    /// A zero leading coefficient silently lowers the effective threshold.
    #[error("polynomial has a zero leading coefficient")]
    DegenerateKey,

    /// Interpolation needs at least the threshold number of evaluations.
    #[error("not enough shares: {0}/{1}")]
    InsufficientShares(usize, usize),

    /// Two evaluations at the same index make the interpolation denominator
    /// non-invertible.
    #[error("two shares carry the same index {0}")]
    DuplicateIndex(Idx),

    /// Index 0 holds the secret and never appears in a share.
    #[error("index 0 is reserved for the secret evaluation point")]
    ReservedIndex,
}

/// A polynomial of degree m-1 represented by its m coefficients, the constant
/// term first. The coefficients are secret; the polynomial itself is never
/// serialized or shared, only its evaluations are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly<C>(Vec<C>);

impl<C: Element> Poly<C> {
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }
}

impl<X: Scalar> Poly<X> {
    /// Builds a polynomial from its coefficients, rejecting thresholds below
    /// 2 and degenerate leading coefficients.
    pub fn new(coeffs: Vec<X>) -> Result<Self, PolyError> {
        if coeffs.len() < 2 {
            return Err(PolyError::InvalidThreshold(coeffs.len()));
        }
        if coeffs[coeffs.len() - 1].is_zero() {
            return Err(PolyError::DegenerateKey);
        }
        Ok(Self(coeffs))
    }

    /// Derives one coefficient per seed. Deterministic: the same seeds always
    /// produce the same polynomial.
    pub fn from_seeds(seeds: &[crate::curve::group::Seed]) -> Result<Self, PolyError> {
        Self::new(seeds.iter().map(X::derive).collect())
    }

    /// One-way image of the constant term in the given group. The term itself
    /// stays private.
    pub(crate) fn public_key<P: Element<RHS = X>>(&self) -> P {
        let mut p = P::one();
        p.mul(&self.0[0]);
        p
    }
}

impl<C> Poly<C>
where
    C: Element,
    C::RHS: Scalar,
{
    /// Evaluates the polynomial at `x = i` by Horner's rule. Callers hand out
    /// shares for indices starting at 1; evaluating at 0 yields the secret.
    pub fn eval(&self, i: Idx) -> Eval<C> {
        let mut xi = C::RHS::new();
        xi.set_int(u64::from(i));
        let value = self.0.iter().rev().fold(C::new(), |mut sum, coeff| {
            sum.mul(&xi);
            sum.add(coeff);
            sum
        });
        Eval { index: i, value }
    }

    /// Recovers the polynomial's value at zero from `threshold` evaluations
    /// by Lagrange interpolation. When more evaluations are supplied, the
    /// lowest-indexed `threshold` of them are used.
    pub fn recover_c0(threshold: usize, evals: &[Eval<C>]) -> Result<C, PolyError> {
        let required = threshold.max(2);
        if evals.len() < required {
            return Err(PolyError::InsufficientShares(evals.len(), required));
        }

        let mut evals: Vec<&Eval<C>> = evals.iter().collect();
        evals.sort_by_key(|e| e.index);
        evals.truncate(required);

        let indices: Vec<Idx> = evals.iter().map(|e| e.index).collect();
        let coeffs = lagrange_coefficients::<C::RHS>(&indices)?;

        let mut c0 = C::new();
        for (lambda, eval) in coeffs.iter().zip(&evals) {
            let mut term = eval.value.clone();
            term.mul(lambda);
            c0.add(&term);
        }
        Ok(c0)
    }
}

/// Lagrange coefficients at zero for the given indices:
/// `l_i = (prod_j idx_j) / (idx_i * prod_{j != i} (idx_j - idx_i))`.
fn lagrange_coefficients<X: Scalar>(indices: &[Idx]) -> Result<Vec<X>, PolyError> {
    if indices.contains(&0) {
        return Err(PolyError::ReservedIndex);
    }

    let xs: Vec<X> = indices
        .iter()
        .map(|&i| {
            let mut x = X::new();
            x.set_int(u64::from(i));
            x
        })
        .collect();

    let mut w = X::one();
    for x in &xs {
        w.mul(x);
    }

    let mut coeffs = Vec::with_capacity(xs.len());
    for (i, xi) in xs.iter().enumerate() {
        let mut denom = xi.clone();
        for (j, xj) in xs.iter().enumerate() {
            if j == i {
                continue;
            }
            let mut diff = xj.clone();
            diff.sub(xi);
            denom.mul(&diff);
        }
        // A repeated index zeroes one of the pairwise differences, which
        // surfaces here as a non-invertible denominator.
        let inv = denom
            .inverse()
            .ok_or(PolyError::DuplicateIndex(indices[i]))?;
        let mut lambda = w.clone();
        lambda.mul(&inv);
        coeffs.push(lambda);
    }
    Ok(coeffs)
}
