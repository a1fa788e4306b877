//! Candidate aggregates and the required-skill set they are scored against.

use std::collections::BTreeSet;

use crate::skills::{Availability, ProficiencyLevel, SkillRef};
use crate::types::DbId;

/// The distinct skill ids a project requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredSkills(BTreeSet<DbId>);

impl RequiredSkills {
    pub fn new(ids: BTreeSet<DbId>) -> Self {
        Self(ids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: DbId) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = DbId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<DbId> for RequiredSkills {
    fn from_iter<I: IntoIterator<Item = DbId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperSkill {
    pub skill: SkillRef,
    pub level: ProficiencyLevel,
}

/// An approved developer profile with its full skill mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperCandidate {
    pub id: DbId,
    pub display_name: String,
    pub skills: Vec<DeveloperSkill>,
    pub availability: Option<Availability>,
    pub hourly_rate: Option<f64>,
}

impl DeveloperCandidate {
    /// Required skills this developer lists, one entry per skill id.
    ///
    /// When a skill appears more than once the highest level wins. Entries
    /// keep the order of first appearance.
    pub fn matched_skills(&self, required: &RequiredSkills) -> Vec<(&SkillRef, ProficiencyLevel)> {
        let mut matched: Vec<(&SkillRef, ProficiencyLevel)> = Vec::new();
        for entry in self.skills.iter().filter(|s| required.contains(s.skill.id)) {
            match matched.iter_mut().find(|(s, _)| s.id == entry.skill.id) {
                Some((_, level)) => *level = (*level).max(entry.level),
                None => matched.push((&entry.skill, entry.level)),
            }
        }
        matched
    }

    /// Number of distinct skills on the profile.
    pub fn skill_count(&self) -> usize {
        distinct_count(self.skills.iter().map(|s| s.skill.id))
    }

    /// Distinct skill labels in profile order.
    pub fn skill_labels(&self) -> Vec<String> {
        distinct_labels(self.skills.iter().map(|s| &s.skill))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanySkill {
    pub skill: SkillRef,
    /// Carried for display; not weighted by the scorer.
    pub importance: Option<String>,
}

/// A company profile with its full skill mapping and capacity data.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyCandidate {
    pub id: DbId,
    pub display_name: String,
    pub organization_name: String,
    pub skills: Vec<CompanySkill>,
    pub team_size: Option<u32>,
    pub current_projects: Option<u32>,
    pub max_projects: Option<u32>,
    /// Hourly rate bounds; either may be unknown on its own.
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
}

impl CompanyCandidate {
    /// Distinct required skills this company lists, in order of first appearance.
    pub fn matched_skills(&self, required: &RequiredSkills) -> Vec<&SkillRef> {
        let mut seen = BTreeSet::new();
        self.skills
            .iter()
            .map(|s| &s.skill)
            .filter(|s| required.contains(s.id) && seen.insert(s.id))
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        distinct_count(self.skills.iter().map(|s| s.skill.id))
    }

    pub fn skill_labels(&self) -> Vec<String> {
        distinct_labels(self.skills.iter().map(|s| &s.skill))
    }

    /// `true` when both capacity fields are known and there is room for more work.
    pub fn has_capacity(&self) -> bool {
        matches!(
            (self.current_projects, self.max_projects),
            (Some(current), Some(max)) if current < max
        )
    }
}

fn distinct_count(ids: impl Iterator<Item = DbId>) -> usize {
    ids.collect::<BTreeSet<_>>().len()
}

fn distinct_labels<'a>(skills: impl Iterator<Item = &'a SkillRef>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    skills
        .filter(|s| seen.insert(s.id))
        .map(|s| s.label.clone())
        .collect()
}
