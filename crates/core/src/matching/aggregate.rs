//! Fold flattened `(candidate, skill)` join rows into candidate aggregates.
//!
//! The store returns one row per candidate skill. Candidates come out in
//! order of first appearance, which is the tie-break order used by
//! [`rank`](super::rank).

use std::collections::HashMap;

use crate::skills::{Availability, ProficiencyLevel, SkillRef};
use crate::types::DbId;

use super::candidate::{CompanyCandidate, CompanySkill, DeveloperCandidate, DeveloperSkill};

/// One developer-skill pair as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperSkillRow {
    pub developer_id: DbId,
    pub display_name: String,
    pub availability: Option<String>,
    pub hourly_rate: Option<f64>,
    pub skill_id: DbId,
    pub skill_label: String,
    pub level: ProficiencyLevel,
}

/// One company-skill pair as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySkillRow {
    pub company_id: DbId,
    pub display_name: String,
    pub organization_name: String,
    pub team_size: Option<u32>,
    pub current_projects: Option<u32>,
    pub max_projects: Option<u32>,
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
    pub skill_id: DbId,
    pub skill_label: String,
    pub importance: Option<String>,
}

/// Group developer rows by developer id.
pub fn aggregate_developers<I>(rows: I) -> Vec<DeveloperCandidate>
where
    I: IntoIterator<Item = DeveloperSkillRow>,
{
    group_by_candidate(
        rows,
        |row: &DeveloperSkillRow| row.developer_id,
        |row: &DeveloperSkillRow| DeveloperCandidate {
            id: row.developer_id,
            display_name: row.display_name.clone(),
            skills: Vec::new(),
            availability: row.availability.as_deref().map(Availability::parse),
            hourly_rate: row.hourly_rate,
        },
        |candidate: &mut DeveloperCandidate, row: DeveloperSkillRow| {
            candidate.skills.push(DeveloperSkill {
                skill: SkillRef::new(row.skill_id, row.skill_label),
                level: row.level,
            })
        },
    )
}

/// Group company rows by company id.
pub fn aggregate_companies<I>(rows: I) -> Vec<CompanyCandidate>
where
    I: IntoIterator<Item = CompanySkillRow>,
{
    group_by_candidate(
        rows,
        |row: &CompanySkillRow| row.company_id,
        |row: &CompanySkillRow| CompanyCandidate {
            id: row.company_id,
            display_name: row.display_name.clone(),
            organization_name: row.organization_name.clone(),
            skills: Vec::new(),
            team_size: row.team_size,
            current_projects: row.current_projects,
            max_projects: row.max_projects,
            rate_min: row.rate_min,
            rate_max: row.rate_max,
        },
        |candidate: &mut CompanyCandidate, row: CompanySkillRow| {
            candidate.skills.push(CompanySkill {
                skill: SkillRef::new(row.skill_id, row.skill_label),
                importance: row.importance,
            })
        },
    )
}

/// Profile columns are taken from the first row seen for each candidate.
fn group_by_candidate<R, C, I>(
    rows: I,
    key: impl Fn(&R) -> DbId,
    init: impl Fn(&R) -> C,
    push: impl Fn(&mut C, R),
) -> Vec<C>
where
    I: IntoIterator<Item = R>,
{
    let (candidates, _) = rows.into_iter().fold(
        (Vec::<C>::new(), HashMap::<DbId, usize>::new()),
        |(mut candidates, mut index), row| {
            let slot = *index.entry(key(&row)).or_insert_with(|| {
                candidates.push(init(&row));
                candidates.len() - 1
            });
            push(&mut candidates[slot], row);
            (candidates, index)
        },
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_row(developer_id: DbId, skill_id: DbId, label: &str) -> DeveloperSkillRow {
        DeveloperSkillRow {
            developer_id,
            display_name: format!("dev-{developer_id}"),
            availability: Some("available".into()),
            hourly_rate: Some(50.0),
            skill_id,
            skill_label: label.into(),
            level: ProficiencyLevel::Advanced,
        }
    }

    fn company_row(company_id: DbId, skill_id: DbId) -> CompanySkillRow {
        CompanySkillRow {
            company_id,
            display_name: format!("company-{company_id}"),
            organization_name: "Org".into(),
            team_size: Some(8),
            current_projects: Some(1),
            max_projects: Some(4),
            rate_min: Some(40.0),
            rate_max: None,
            skill_id,
            skill_label: format!("skill-{skill_id}"),
            importance: None,
        }
    }

    #[test]
    fn developer_rows_grouped_in_first_seen_order() {
        let rows = vec![
            dev_row(7, 1, "React"),
            dev_row(3, 1, "React"),
            dev_row(7, 2, "Node.js"),
        ];

        let candidates = aggregate_developers(rows);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, 7);
        assert_eq!(candidates[0].skills.len(), 2);
        assert_eq!(candidates[0].availability, Some(Availability::Available));
        assert_eq!(candidates[1].id, 3);
        assert_eq!(candidates[1].skills.len(), 1);
    }

    #[test]
    fn company_rows_grouped() {
        let rows = vec![company_row(1, 10), company_row(1, 11), company_row(2, 10)];

        let candidates = aggregate_companies(rows);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].skill_count(), 2);
        assert_eq!(candidates[1].skill_count(), 1);
        assert_eq!(candidates[0].team_size, Some(8));
        // A half-known rate range survives grouping.
        assert_eq!(candidates[0].rate_min, Some(40.0));
        assert_eq!(candidates[0].rate_max, None);
    }

    #[test]
    fn empty_rows_yield_no_candidates() {
        assert!(aggregate_developers(Vec::new()).is_empty());
        assert!(aggregate_companies(Vec::new()).is_empty());
    }
}
