//! Match results, the per-kind scoring strategy seam, and ranking.

use serde::Serialize;

use crate::error::MatchError;
use crate::types::DbId;

use super::candidate::RequiredSkills;

/// Upper bound of every total score.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Developer,
    Company,
}

/// Total score plus its components.
///
/// Company results carry their rounded base score in `skill` and zero in the
/// developer-only bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub skill: u32,
    pub availability: u32,
    pub rate: u32,
    pub experience: u32,
}

/// A scored candidate. Computed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate_id: DbId,
    pub kind: CandidateKind,
    pub scores: ScoreBreakdown,
    /// Share of required skills the candidate covers, 0-100.
    pub match_percentage: u32,
    pub matching_skills: Vec<String>,
    pub total_skill_count: usize,
    pub recommendation_reason: String,
}

/// Scoring rules for one kind of candidate.
pub trait MatchStrategy {
    type Candidate;

    const KIND: CandidateKind;

    /// Score a single candidate. Returns `None` when the candidate shares no
    /// skill with `required`.
    fn score(&self, required: &RequiredSkills, candidate: &Self::Candidate) -> Option<MatchResult>;
}

/// Run `strategy` over every candidate, dropping those without a matched skill.
///
/// Output keeps input order; use [`rank`] to order by score.
pub fn score_all<S: MatchStrategy>(
    strategy: &S,
    required: &RequiredSkills,
    candidates: &[S::Candidate],
) -> Result<Vec<MatchResult>, MatchError> {
    if required.is_empty() {
        return Err(MatchError::NoRequiredSkills);
    }

    Ok(candidates
        .iter()
        .filter_map(|candidate| strategy.score(required, candidate))
        .inspect(|result| debug_assert!(result.scores.total <= MAX_SCORE))
        .collect())
}

/// Order results by descending total score.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.scores.total.cmp(&a.scores.total));
    results
}

/// Round a non-negative ratio scaled by `scale` to the nearest integer.
pub(crate) fn scaled_ratio(numerator: usize, denominator: usize, scale: f64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (scale * numerator as f64 / denominator as f64).round() as u32
}
