//! The fixed CMOD-IFR2 coefficient table.

use std::ops::Index;

/// Number of entries in the CMOD-IFR2 table (index 0 is unused).
pub const COEFFICIENT_COUNT: usize = 26;

/// An immutable table of model coefficients, indexed 1-based as in the
/// published model (`C[1]..C[25]`), with `C[0]` held at zero.
///
/// The table can only be built inside this crate, so the published values are the
/// only ones a model can ever be evaluated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTable([f64; COEFFICIENT_COUNT]);

impl CoefficientTable {
    pub(crate) const fn new(values: [f64; COEFFICIENT_COUNT]) -> Self {
        Self(values)
    }

    /// Returns coefficient `C[index]`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// All coefficients in index order, `C[0]` first.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries, including the unused `C[0]`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a published table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for CoefficientTable {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// CMOD-IFR2 coefficients.
pub const CMOD_IFR2_COEFFICIENTS: CoefficientTable = CoefficientTable::new([
    0.0,
    // alpha: Legendre expansion in incidence
    -2.437597, -1.5670307, 0.3708242, -0.040590,
    // beta
    0.404678, 0.188397, -0.027262,
    // b1: upwind/downwind term
    0.064650, 0.054500, 0.086350, 0.055100, -0.058450, -0.096100,
    // b2: upwind/crosswind term
    0.412754, 0.121785, -0.024333, 0.072163, -0.062954, 0.015958, -0.069514, -0.062945,
    0.035538, 0.023049, 0.074654, -0.014713,
]);
