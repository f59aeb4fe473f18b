use crate::domain::Points;
use crate::errors::ConfigurationError;

/// How many results count towards a league total; `None` counts everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestN(Option<usize>);

impl BestN {
    pub fn all() -> Self {
        Self(None)
    }

    pub fn limit(n: usize) -> Self {
        if n == 0 { Self(None) } else { Self(Some(n)) }
    }

    /// Negative values are rejected; missing or zero means count all.
    pub fn from_raw(raw: Option<i64>) -> Result<Self, ConfigurationError> {
        match raw {
            None => Ok(Self::all()),
            Some(n) if n < 0 => Err(ConfigurationError::NegativeBestN(n)),
            Some(n) => Ok(Self::limit(n as usize)),
        }
    }

    pub fn value(&self) -> Option<usize> {
        self.0
    }
}

/// Outcome of applying best-N to one player's chronological scores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Parallel to the input scores
    pub counted: Vec<bool>,
    pub total: Points,
    pub counted_count: usize,
    pub lowest_counted: Option<Points>,
}

/// Pick the scores that count.
///
/// Only positive scores are candidates. Candidates are ordered by score,
/// highest first, and equal scores by position, earliest first; the first N
/// positions are counted. Standings, history and matrix all go through here.
pub fn select(scores: &[Points], best_n: BestN) -> Selection {
    let mut candidates: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] > 0).collect();
    candidates.sort_by(|&a, &b| scores[b].cmp(&scores[a]).then(a.cmp(&b)));

    if let Some(limit) = best_n.value() {
        candidates.truncate(limit);
    }

    let mut counted = vec![false; scores.len()];
    for &idx in &candidates {
        counted[idx] = true;
    }

    Selection {
        counted,
        total: candidates.iter().map(|&i| scores[i]).sum(),
        counted_count: candidates.len(),
        lowest_counted: candidates.last().map(|&i| scores[i]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_scores_prefer_earlier_tournament() {
        let selection = select(&[10, 10, 6, 0], BestN::limit(2));
        assert_eq!(selection.counted, vec![true, true, false, false]);
        assert_eq!(selection.total, 20);
        assert_eq!(selection.lowest_counted, Some(10));

        let selection = select(&[6, 9, 9, 9], BestN::limit(2));
        assert_eq!(selection.counted, vec![false, true, true, false]);
    }

    #[test]
    fn test_count_all() {
        let selection = select(&[5, 7, 3], BestN::all());
        assert_eq!(selection.total, 15);
        assert_eq!(selection.counted_count, 3);
        assert_eq!(selection.lowest_counted, Some(3));
    }

    #[test]
    fn test_zero_scores_never_take_a_slot() {
        let selection = select(&[0, 4, 0, 0], BestN::limit(3));
        assert_eq!(selection.counted, vec![false, true, false, false]);
        assert_eq!(selection.total, 4);
        assert_eq!(selection.counted_count, 1);

        let empty = select(&[], BestN::limit(3));
        assert_eq!(empty.total, 0);
        assert_eq!(empty.lowest_counted, None);
    }

    #[test]
    fn test_best_n_from_raw() {
        assert_eq!(BestN::from_raw(None), Ok(BestN::all()));
        assert_eq!(BestN::from_raw(Some(0)), Ok(BestN::all()));
        assert_eq!(BestN::from_raw(Some(7)), Ok(BestN::limit(7)));
        assert_eq!(
            BestN::from_raw(Some(-1)),
            Err(ConfigurationError::NegativeBestN(-1))
        );
    }

    #[test]
    fn test_selection_is_repeatable() {
        let scores = [3, 9, 3, 9, 6, 3];
        assert_eq!(select(&scores, BestN::limit(4)), select(&scores, BestN::limit(4)));
    }
}
