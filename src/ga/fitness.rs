//! Linear fitness evaluation.

use super::error::GaError;
use super::population::Population;

/// The fixed coefficient vector that defines the objective.
///
/// `score(x) = Σ x[i] * w[i]`; higher is better.
///
/// # Examples
///
/// ```
/// use ga_decimal::ga::Equation;
///
/// let eq = Equation::new(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(eq.score(&[1.0, 1.0, 1.0]), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    coefficients: Vec<f64>,
}

impl Equation {
    /// Wraps a non-empty coefficient vector.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, GaError> {
        if coefficients.is_empty() {
            return Err(GaError::EmptyEquation);
        }
        Ok(Self { coefficients })
    }

    /// Coefficients in gene order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of coefficients (G).
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// `true` for an equation built without coefficients via [`From`].
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Scores one candidate. Extra genes or coefficients are ignored.
    pub fn score(&self, candidate: &[f64]) -> f64 {
        candidate
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum()
    }

    /// Scores every candidate of `population`, in row order.
    ///
    /// Pure: neither the equation nor the population is modified, and two
    /// calls on the same inputs return identical vectors.
    ///
    /// # Errors
    /// [`GaError::ShapeMismatch`] if the population's gene count differs from
    /// the number of coefficients.
    pub fn evaluate(&self, population: &Population) -> Result<Vec<f64>, GaError> {
        if population.genes() != self.len() {
            return Err(GaError::ShapeMismatch {
                expected: self.len(),
                found: population.genes(),
            });
        }
        Ok(population.rows().map(|row| self.score(row)).collect())
    }
}

impl From<Vec<f64>> for Equation {
    /// Wraps coefficients without checking them; [`GaConfig::validate`]
    /// rejects an empty equation before a run starts.
    ///
    /// [`GaConfig::validate`]: super::GaConfig::validate
    fn from(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }
}

impl Default for Equation {
    fn default() -> Self {
        Self {
            coefficients: vec![4.0, -2.0, 3.5, 5.0, -11.0, -4.7],
        }
    }
}
