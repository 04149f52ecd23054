//! Truncation selection.
//!
//! The `k` best-scoring candidates survive as parents, in descending score
//! order. Selection is fully deterministic: ties are broken in favour of the
//! lowest population index.
//!
//! Already-chosen candidates are tracked in an explicit mask instead of being
//! overwritten with a sentinel score, so the caller's fitness slice is left
//! untouched and a genuinely very low score can never collide with an
//! exclusion marker.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::error::GaError;
use super::population::Population;

/// Returns the indices of the `k` best candidates in selection order.
///
/// Each pass picks the highest score among candidates not yet chosen; on a
/// tie the lowest index wins. NaN scores rank below every real score.
///
/// # Errors
/// [`GaError::TooManyParents`] if `k > fitness.len()`.
///
/// # Examples
///
/// ```
/// use ga_decimal::ga::select_indices;
///
/// assert_eq!(select_indices(&[3.0, 7.0, 1.0, 7.0], 2).unwrap(), vec![1, 3]);
/// ```
pub fn select_indices(fitness: &[f64], k: usize) -> Result<Vec<usize>, GaError> {
    if k > fitness.len() {
        return Err(GaError::TooManyParents {
            requested: k,
            available: fitness.len(),
        });
    }

    let mut taken = vec![false; fitness.len()];
    let mut selected = Vec::with_capacity(k);

    for _ in 0..k {
        let mut best: Option<usize> = None;
        for (i, &score) in fitness.iter().enumerate() {
            if taken[i] {
                continue;
            }
            best = match best {
                None => Some(i),
                Some(b) if beats(score, fitness[b]) => Some(i),
                keep => keep,
            };
        }
        // k <= len guarantees an untaken candidate remains.
        let Some(idx) = best else { break };
        taken[idx] = true;
        selected.push(idx);
    }

    Ok(selected)
}

/// Copies the `k` best candidates into a new parent pool, best first.
///
/// `fitness[i]` must be the score of `population.row(i)`.
///
/// # Errors
/// - [`GaError::ShapeMismatch`] if `fitness.len() != population.len()`
/// - [`GaError::TooManyParents`] if `k > population.len()`
pub fn select_parents(
    population: &Population,
    fitness: &[f64],
    k: usize,
) -> Result<Population, GaError> {
    if fitness.len() != population.len() {
        return Err(GaError::ShapeMismatch {
            expected: population.len(),
            found: fitness.len(),
        });
    }
    let indices = select_indices(fitness, k)?;
    Ok(population.gather(&indices))
}

/// `true` if `challenger` strictly outranks `incumbent`.
///
/// Strictness keeps the earlier index on ties.
fn beats(challenger: f64, incumbent: f64) -> bool {
    match (challenger.is_nan(), incumbent.is_nan()) {
        (false, true) => true,
        (_, false) => challenger > incumbent,
        (true, true) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_index_tie_break() {
        assert_eq!(select_indices(&[3.0, 7.0, 1.0, 7.0], 2).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_full_ordering() {
        let fitness = [0.5, -2.0, 9.0, 0.5, 4.0];
        assert_eq!(select_indices(&fitness, 5).unwrap(), vec![2, 4, 0, 3, 1]);
    }

    #[test]
    fn test_fitness_not_mutated() {
        let fitness = vec![1.0, 2.0, 3.0];
        let copy = fitness.clone();
        select_indices(&fitness, 3).unwrap();
        assert_eq!(fitness, copy);
    }

    #[test]
    fn test_very_low_scores_still_distinct() {
        // Scores far below any sentinel a destructive scheme would use.
        let fitness = [-1e300, f64::MIN, -1e300];
        let idx = select_indices(&fitness, 3).unwrap();
        assert_eq!(idx, vec![0, 2, 1]);
    }

    #[test]
    fn test_nan_ranks_last() {
        let fitness = [f64::NAN, 1.0, f64::NAN, -5.0];
        assert_eq!(select_indices(&fitness, 4).unwrap(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_all_equal_keeps_index_order() {
        assert_eq!(select_indices(&[2.0; 4], 4).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_parents() {
        assert!(select_indices(&[1.0, 2.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_too_many_parents() {
        assert_eq!(
            select_indices(&[1.0, 2.0], 3),
            Err(GaError::TooManyParents {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_select_parents_copies_rows() {
        let pop = Population::from_rows(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]).unwrap();
        let fitness = [3.0, 7.0, 1.0, 7.0];
        let parents = select_parents(&pop, &fitness, 2).unwrap();
        assert_eq!(parents.shape(), (2, 2));
        assert_eq!(parents.to_rows(), vec![vec![1.0, 1.0], vec![3.0, 3.0]]);
    }

    #[test]
    fn test_select_parents_length_mismatch() {
        let pop = Population::zeros(3, 2);
        assert!(select_parents(&pop, &[1.0, 2.0], 1).is_err());
    }
}
