//! Developer scoring: four additive bands, each capped before summation.
//!
//! | Band         | Range |
//! |--------------|-------|
//! | skill        | 0-40  |
//! | availability | 0-25  |
//! | rate         | 0-20  |
//! | experience   | 0-15  |

use crate::skills::{Availability, ProficiencyLevel};

use super::candidate::{DeveloperCandidate, RequiredSkills};
use super::config::MatchingConfig;
use super::reasons::recommendation_reason;
use super::result::{scaled_ratio, CandidateKind, MatchResult, MatchStrategy, ScoreBreakdown};

pub const SKILL_BAND_MAX: u32 = 40;
pub const AVAILABILITY_BAND_MAX: u32 = 25;
pub const RATE_BAND_MAX: u32 = 20;
pub const EXPERIENCE_BAND_MAX: u32 = 15;

/// Availability points for profiles with a missing or unrecognized status.
pub const AVAILABILITY_DEFAULT: u32 = 10;
/// Rate points when either the developer rate or the project budget is unknown.
pub const RATE_DEFAULT: u32 = 10;

/// Scores developers for one project.
#[derive(Debug, Clone)]
pub struct DeveloperStrategy<'a> {
    config: &'a MatchingConfig,
    budget_max: Option<f64>,
}

impl<'a> DeveloperStrategy<'a> {
    pub fn new(config: &'a MatchingConfig, budget_max: Option<f64>) -> Self {
        Self { config, budget_max }
    }
}

impl MatchStrategy for DeveloperStrategy<'_> {
    type Candidate = DeveloperCandidate;

    const KIND: CandidateKind = CandidateKind::Developer;

    fn score(
        &self,
        required: &RequiredSkills,
        candidate: &DeveloperCandidate,
    ) -> Option<MatchResult> {
        let matched = candidate.matched_skills(required);
        if matched.is_empty() {
            return None;
        }

        let skill = skill_band(matched.len(), required.len());
        let availability = availability_band(candidate.availability.as_ref());
        let rate = rate_band(
            candidate.hourly_rate,
            self.budget_max,
            self.config.hours_per_month,
        );
        let experience = experience_band(matched.iter().map(|(_, level)| *level));
        let match_percentage = scaled_ratio(matched.len(), required.len(), 100.0);

        Some(MatchResult {
            candidate_id: candidate.id,
            kind: Self::KIND,
            scores: ScoreBreakdown {
                total: skill + availability + rate + experience,
                skill,
                availability,
                rate,
                experience,
            },
            match_percentage,
            matching_skills: matched.iter().map(|(s, _)| s.label.clone()).collect(),
            total_skill_count: candidate.skill_count(),
            recommendation_reason: recommendation_reason(
                match_percentage,
                candidate.availability.as_ref(),
                experience,
                rate,
            ),
        })
    }
}

/// Share of required skills covered, scaled to 40.
pub fn skill_band(matched: usize, required: usize) -> u32 {
    scaled_ratio(matched.min(required), required, SKILL_BAND_MAX as f64)
}

pub fn availability_band(availability: Option<&Availability>) -> u32 {
    match availability {
        Some(Availability::Available) => AVAILABILITY_BAND_MAX,
        Some(Availability::Busy) => 15,
        Some(Availability::Unavailable) => 5,
        Some(Availability::Other(_)) | None => AVAILABILITY_DEFAULT,
    }
}

/// Compare the hourly rate to the budget ceiling spread over one month.
pub fn rate_band(hourly_rate: Option<f64>, budget_max: Option<f64>, hours_per_month: f64) -> u32 {
    let (Some(rate), Some(budget)) = (hourly_rate, budget_max) else {
        return RATE_DEFAULT;
    };

    let implied = budget / hours_per_month;
    if rate <= implied {
        RATE_BAND_MAX
    } else if rate <= implied * 1.2 {
        15
    } else if rate <= implied * 1.5 {
        10
    } else {
        5
    }
}

/// Points per matched skill by level, capped at 15.
pub fn experience_band(levels: impl IntoIterator<Item = ProficiencyLevel>) -> u32 {
    let points: u32 = levels
        .into_iter()
        .map(|level| match level {
            ProficiencyLevel::Expert => 5,
            ProficiencyLevel::Advanced => 3,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Beginner => 0,
        })
        .sum();
    points.min(EXPERIENCE_BAND_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::candidate::DeveloperSkill;
    use crate::matching::{rank, score_developers};
    use crate::skills::SkillRef;
    use crate::types::DbId;

    const REACT: DbId = 1;
    const NODE: DbId = 2;
    const CSS: DbId = 3;

    fn skill(id: DbId, level: ProficiencyLevel) -> DeveloperSkill {
        let label = match id {
            REACT => "React",
            NODE => "Node.js",
            CSS => "CSS",
            _ => "Other",
        };
        DeveloperSkill {
            skill: SkillRef::new(id, label),
            level,
        }
    }

    fn developer(
        id: DbId,
        skills: Vec<DeveloperSkill>,
        availability: Option<Availability>,
        hourly_rate: Option<f64>,
    ) -> DeveloperCandidate {
        DeveloperCandidate {
            id,
            display_name: format!("dev-{id}"),
            skills,
            availability,
            hourly_rate,
        }
    }

    fn react_and_node() -> RequiredSkills {
        [REACT, NODE].into_iter().collect()
    }

    fn candidate_a() -> DeveloperCandidate {
        developer(
            1,
            vec![
                skill(REACT, ProficiencyLevel::Expert),
                skill(NODE, ProficiencyLevel::Advanced),
                skill(CSS, ProficiencyLevel::Beginner),
            ],
            Some(Availability::Available),
            Some(80.0),
        )
    }

    fn candidate_b() -> DeveloperCandidate {
        developer(
            2,
            vec![skill(REACT, ProficiencyLevel::Beginner)],
            Some(Availability::Available),
            Some(80.0),
        )
    }

    // -- Scenarios -------------------------------------------------------------

    #[test]
    fn full_stack_expert_scores_93() {
        let results = score_developers(
            &react_and_node(),
            &[candidate_a()],
            Some(19_200.0),
            &MatchingConfig::default(),
        )
        .unwrap();

        let a = &results[0];
        assert_eq!(a.scores.skill, 40);
        assert_eq!(a.scores.availability, 25);
        assert_eq!(a.scores.rate, 20);
        assert_eq!(a.scores.experience, 8);
        assert_eq!(a.scores.total, 93);
        assert_eq!(a.match_percentage, 100);
        assert_eq!(a.matching_skills, vec!["React", "Node.js"]);
        assert_eq!(a.total_skill_count, 3);
        assert_eq!(a.kind, CandidateKind::Developer);
        assert_eq!(
            a.recommendation_reason,
            "Perfect skill match, Available now, Advanced skills, Within budget"
        );
    }

    #[test]
    fn partial_beginner_ranks_below_expert() {
        let results = score_developers(
            &react_and_node(),
            &[candidate_b(), candidate_a()],
            Some(19_200.0),
            &MatchingConfig::default(),
        )
        .unwrap();

        let b = results.iter().find(|r| r.candidate_id == 2).unwrap();
        assert_eq!(b.scores.skill, 20);
        assert_eq!(b.scores.experience, 0);
        assert_eq!(b.match_percentage, 50);

        let ranked = rank(results);
        assert_eq!(ranked[0].candidate_id, 1);
        assert_eq!(ranked[1].candidate_id, 2);
    }

    // -- Properties ------------------------------------------------------------

    #[test]
    fn candidate_without_matching_skill_is_absent() {
        let outsider = developer(3, vec![skill(CSS, ProficiencyLevel::Expert)], None, None);
        let results = score_developers(
            &react_and_node(),
            &[outsider, candidate_a()],
            None,
            &MatchingConfig::default(),
        )
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate_id, 1);
    }

    #[test]
    fn empty_required_set_is_a_precondition_failure() {
        let err = score_developers(
            &RequiredSkills::default(),
            &[candidate_a()],
            None,
            &MatchingConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, crate::error::MatchError::NoRequiredSkills);
    }

    #[test]
    fn no_candidates_is_an_empty_result() {
        let results =
            score_developers(&react_and_node(), &[], None, &MatchingConfig::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn scoring_is_idempotent() {
        let pool = [candidate_a(), candidate_b()];
        let config = MatchingConfig::default();
        let first = score_developers(&react_and_node(), &pool, Some(10_000.0), &config).unwrap();
        let second = score_developers(&react_and_node(), &pool, Some(10_000.0), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn totals_stay_in_range_and_matched_count_is_bounded() {
        let levels = [
            ProficiencyLevel::Beginner,
            ProficiencyLevel::Intermediate,
            ProficiencyLevel::Advanced,
            ProficiencyLevel::Expert,
        ];
        let required: RequiredSkills = (1..=4).collect();
        let availabilities = [
            Some(Availability::Available),
            Some(Availability::Busy),
            Some(Availability::Unavailable),
            Some(Availability::Other("away".into())),
            None,
        ];

        let mut pool = Vec::new();
        for (i, availability) in availabilities.iter().enumerate() {
            for skill_count in 1..=6 {
                let skills = (1..=skill_count)
                    .map(|id| skill(id as DbId, levels[id % levels.len()]))
                    .collect();
                pool.push(developer(
                    (i * 10 + skill_count) as DbId,
                    skills,
                    availability.clone(),
                    Some(skill_count as f64 * 40.0),
                ));
            }
        }

        let results =
            score_developers(&required, &pool, Some(16_000.0), &MatchingConfig::default()).unwrap();

        for result in &results {
            assert!(result.scores.total <= 100);
            assert!(result.matching_skills.len() <= result.total_skill_count.min(required.len()));
        }
    }

    // -- Band defaults -----------------------------------------------------------

    #[test]
    fn unknown_availability_gets_default_points() {
        assert_eq!(
            availability_band(Some(&Availability::Other("on_vacation".into()))),
            10
        );
        assert_eq!(availability_band(None), 10);
        assert_eq!(availability_band(Some(&Availability::Busy)), 15);
        assert_eq!(availability_band(Some(&Availability::Unavailable)), 5);
    }

    #[test]
    fn rate_without_budget_gets_default_points() {
        assert_eq!(rate_band(Some(80.0), None, 160.0), 10);
        assert_eq!(rate_band(None, Some(19_200.0), 160.0), 10);
    }

    #[test]
    fn rate_tiers_follow_implied_hourly_budget() {
        // 16_000 / 160 = 100 per hour.
        assert_eq!(rate_band(Some(100.0), Some(16_000.0), 160.0), 20);
        assert_eq!(rate_band(Some(119.0), Some(16_000.0), 160.0), 15);
        assert_eq!(rate_band(Some(150.0), Some(16_000.0), 160.0), 10);
        assert_eq!(rate_band(Some(151.0), Some(16_000.0), 160.0), 5);
    }

    #[test]
    fn rate_tier_boundaries_are_inclusive() {
        assert_eq!(rate_band(Some(120.0), Some(16_000.0), 160.0), 15);
        // 19_200 / 160 = 120 per hour; 1.2x is 144.
        assert_eq!(rate_band(Some(144.0), Some(19_200.0), 160.0), 15);
        assert_eq!(rate_band(Some(180.0), Some(19_200.0), 160.0), 10);
    }

    #[test]
    fn zero_budget_only_fits_zero_rate() {
        assert_eq!(rate_band(Some(0.0), Some(0.0), 160.0), 20);
        assert_eq!(rate_band(Some(1.0), Some(0.0), 160.0), 5);
    }

    #[test]
    fn hours_per_month_changes_implied_budget() {
        // 16_000 / 100 = 160 per hour.
        assert_eq!(rate_band(Some(150.0), Some(16_000.0), 100.0), 20);
    }

    #[test]
    fn experience_band_is_capped() {
        let four_experts = [ProficiencyLevel::Expert; 4];
        assert_eq!(experience_band(four_experts), 15);
        assert_eq!(
            experience_band([ProficiencyLevel::Intermediate, ProficiencyLevel::Beginner]),
            2
        );
    }

    #[test]
    fn experience_counts_matched_skills_only() {
        let dev = developer(
            9,
            vec![
                skill(REACT, ProficiencyLevel::Intermediate),
                skill(CSS, ProficiencyLevel::Expert),
            ],
            None,
            None,
        );
        let results =
            score_developers(&react_and_node(), &[dev], None, &MatchingConfig::default()).unwrap();
        assert_eq!(results[0].scores.experience, 2);
    }
}
