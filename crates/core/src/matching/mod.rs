//! Candidate match scoring.
//!
//! Ranks developers and companies against a project's required skills.
//! Developers are scored with additive capped bands; companies with a
//! weighted base and multiplicative boosts. The two shapes sit behind
//! [`MatchStrategy`] so callers only ever see [`MatchResult`].
//!
//! Typical flow:
//!
//! 1. Fold flattened skill-join rows into candidates ([`aggregate`]).
//! 2. Score each pool ([`score_developers`], [`score_companies`]).
//! 3. Merge and order with [`rank`].

pub mod aggregate;
pub mod candidate;
pub mod company;
pub mod config;
pub mod developer;
pub mod reasons;
pub mod result;

pub use aggregate::{aggregate_companies, aggregate_developers, CompanySkillRow, DeveloperSkillRow};
pub use candidate::{
    CompanyCandidate, CompanySkill, DeveloperCandidate, DeveloperSkill, RequiredSkills,
};
pub use company::CompanyStrategy;
pub use config::MatchingConfig;
pub use developer::DeveloperStrategy;
pub use reasons::recommendation_reason;
pub use result::{rank, score_all, CandidateKind, MatchResult, MatchStrategy, ScoreBreakdown};

use crate::error::MatchError;

/// Score approved developers against `required`.
///
/// `budget_max` is the project's budget ceiling; it only feeds the rate band.
pub fn score_developers(
    required: &RequiredSkills,
    candidates: &[DeveloperCandidate],
    budget_max: Option<f64>,
    config: &MatchingConfig,
) -> Result<Vec<MatchResult>, MatchError> {
    config.validate()?;
    score_all(&DeveloperStrategy::new(config, budget_max), required, candidates)
}

/// Score companies against `required`.
pub fn score_companies(
    required: &RequiredSkills,
    candidates: &[CompanyCandidate],
    config: &MatchingConfig,
) -> Result<Vec<MatchResult>, MatchError> {
    config.validate()?;
    score_all(&CompanyStrategy::new(config), required, candidates)
}
