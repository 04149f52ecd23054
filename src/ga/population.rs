//! Population storage and initialization.
//!
//! A [`Population`] is a fixed-shape matrix: `rows` candidates of `genes`
//! real-valued genes each, stored contiguously in row-major order. The same
//! type is used for the full population, the parent pool, and the offspring
//! pool.

use super::error::GaError;
use rand::distr::{Distribution, Uniform};
use rand::Rng;

/// A P×G matrix of candidate solutions.
///
/// With the `serde` feature, deserialization goes through
/// [`Population::from_flat`], so a payload whose gene buffer does not split
/// into whole rows is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPopulation")
)]
pub struct Population {
    data: Vec<f64>,
    genes: usize,
}

/// Unchecked wire form of [`Population`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPopulation {
    data: Vec<f64>,
    genes: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPopulation> for Population {
    type Error = GaError;

    fn try_from(raw: RawPopulation) -> Result<Self, Self::Error> {
        Population::from_flat(raw.data, raw.genes)
    }
}

impl Population {
    /// Creates a population of `rows` candidates with every gene set to zero.
    pub fn zeros(rows: usize, genes: usize) -> Self {
        Self {
            data: vec![0.0; rows * genes],
            genes,
        }
    }

    /// Builds a population from explicit rows.
    ///
    /// Returns [`GaError::ShapeMismatch`] if the rows differ in length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GaError> {
        let genes = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * genes);
        for row in rows {
            let row = row.as_ref();
            if row.len() != genes {
                return Err(GaError::ShapeMismatch {
                    expected: genes,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, genes })
    }

    /// Wraps a row-major gene buffer of `data.len() / genes` candidates.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if `genes` is zero but `data` is not empty
    /// - [`GaError::ShapeMismatch`] if `data.len()` is not a multiple of `genes`
    pub fn from_flat(data: Vec<f64>, genes: usize) -> Result<Self, GaError> {
        if genes == 0 {
            return if data.is_empty() {
                Ok(Self { data, genes })
            } else {
                Err(GaError::EmptyPopulation)
            };
        }
        let remainder = data.len() % genes;
        if remainder != 0 {
            return Err(GaError::ShapeMismatch {
                expected: genes,
                found: remainder,
            });
        }
        Ok(Self { data, genes })
    }

    /// Samples every gene independently from a continuous uniform
    /// distribution over `[low, high]`.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if `rows` or `genes` is zero
    /// - [`GaError::InvalidGeneRange`] if `low >= high` or a bound is not finite
    pub fn random<R: Rng>(
        rows: usize,
        genes: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        if rows == 0 || genes == 0 {
            return Err(GaError::EmptyPopulation);
        }
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(GaError::InvalidGeneRange { low, high });
        }
        let dist =
            Uniform::new_inclusive(low, high).map_err(|_| GaError::InvalidGeneRange { low, high })?;
        let data = dist.sample_iter(rng).take(rows * genes).collect();
        Ok(Self { data, genes })
    }

    /// Number of candidates (P).
    pub fn len(&self) -> usize {
        if self.genes == 0 {
            0
        } else {
            self.data.len() / self.genes
        }
    }

    /// Returns `true` if the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of genes per candidate (G).
    pub fn genes(&self) -> usize {
        self.genes
    }

    /// `(rows, genes)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.genes)
    }

    /// Candidate `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.genes..(i + 1) * self.genes]
    }

    /// Iterates over candidates in row order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.data.chunks_exact(self.genes.max(1))
    }

    /// Iterates mutably over candidates in row order.
    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [f64]> {
        self.data.chunks_exact_mut(self.genes.max(1))
    }

    /// Overwrites rows `[start, start + block.len())` with the rows of `block`.
    ///
    /// # Errors
    /// [`GaError::ShapeMismatch`] if `block` has a different gene count or
    /// does not fit below `start`.
    pub fn write_rows(&mut self, start: usize, block: &Population) -> Result<(), GaError> {
        if block.is_empty() {
            return Ok(());
        }
        if block.genes != self.genes {
            return Err(GaError::ShapeMismatch {
                expected: self.genes,
                found: block.genes,
            });
        }
        if start + block.len() > self.len() {
            return Err(GaError::ShapeMismatch {
                expected: self.len(),
                found: start + block.len(),
            });
        }
        let offset = start * self.genes;
        self.data[offset..offset + block.data.len()].copy_from_slice(&block.data);
        Ok(())
    }

    /// Copies the candidates at `indices`, in that order, into a new population.
    pub fn gather(&self, indices: &[usize]) -> Population {
        let mut data = Vec::with_capacity(indices.len() * self.genes);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Population {
            data,
            genes: self.genes,
        }
    }

    /// Copies the population into one `Vec` per candidate.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}
