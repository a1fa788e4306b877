//! Shared query parameter types for API handlers.

use devmatch_core::matching::CandidateKind;
use serde::Deserialize;
use validator::Validate;

/// Which candidate pools a match request covers (`?kind=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Developer,
    Company,
}

impl KindFilter {
    pub fn kinds(self) -> &'static [CandidateKind] {
        match self {
            KindFilter::All => &[CandidateKind::Developer, CandidateKind::Company],
            KindFilter::Developer => &[CandidateKind::Developer],
            KindFilter::Company => &[CandidateKind::Company],
        }
    }
}

/// Query parameters for `GET /projects/{id}/matches` (`?kind=&limit=`).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MatchQuery {
    #[serde(default)]
    pub kind: KindFilter,
    /// Falls back to the configured result limit when omitted.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}
