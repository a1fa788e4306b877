//! Company scoring: weighted skill base with multiplicative boosts.
//!
//! Unlike developer scoring the boosted score can exceed 100, so it is
//! clamped explicitly before rounding.

use super::candidate::{CompanyCandidate, RequiredSkills};
use super::config::MatchingConfig;
use super::reasons::company_reason;
use super::result::{
    scaled_ratio, CandidateKind, MatchResult, MatchStrategy, ScoreBreakdown, MAX_SCORE,
};

/// Scores companies for one project.
#[derive(Debug, Clone)]
pub struct CompanyStrategy<'a> {
    config: &'a MatchingConfig,
}

impl<'a> CompanyStrategy<'a> {
    pub fn new(config: &'a MatchingConfig) -> Self {
        Self { config }
    }

    fn is_large_team(&self, candidate: &CompanyCandidate) -> bool {
        candidate
            .team_size
            .is_some_and(|size| size > self.config.team_boost_min_size)
    }
}

impl MatchStrategy for CompanyStrategy<'_> {
    type Candidate = CompanyCandidate;

    const KIND: CandidateKind = CandidateKind::Company;

    fn score(
        &self,
        required: &RequiredSkills,
        candidate: &CompanyCandidate,
    ) -> Option<MatchResult> {
        let matched = candidate.matched_skills(required);
        if matched.is_empty() {
            return None;
        }

        let matched_count = matched.len() as f64;
        let overlap = matched_count / required.len() as f64;
        let coverage = matched_count / candidate.skill_count().max(1) as f64;
        let base = overlap * self.config.company_overlap_weight
            + coverage * self.config.company_coverage_weight;

        let has_capacity = candidate.has_capacity();
        let large_team = self.is_large_team(candidate);

        let mut boosted = base;
        if has_capacity {
            boosted *= self.config.capacity_boost;
        }
        if large_team {
            boosted *= self.config.team_boost;
        }

        let total = boosted.min(MAX_SCORE as f64).round() as u32;
        let match_percentage = scaled_ratio(matched.len(), required.len(), 100.0);

        Some(MatchResult {
            candidate_id: candidate.id,
            kind: Self::KIND,
            scores: ScoreBreakdown {
                total,
                skill: base.min(MAX_SCORE as f64).round() as u32,
                ..ScoreBreakdown::default()
            },
            match_percentage,
            matching_skills: matched.iter().map(|s| s.label.clone()).collect(),
            total_skill_count: candidate.skill_count(),
            recommendation_reason: company_reason(match_percentage, has_capacity, large_team),
        })
    }
}
