//! Human-readable justifications attached to match results.

use crate::skills::Availability;

/// Fallback when no other phrase applies.
pub const REASON_FALLBACK: &str = "Potential match";

fn skill_phrase(match_percentage: u32) -> Option<&'static str> {
    match match_percentage {
        100.. => Some("Perfect skill match"),
        80..=99 => Some("Excellent skill match"),
        60..=79 => Some("Good skill match"),
        _ => None,
    }
}

fn join_or_fallback(phrases: Vec<&'static str>) -> String {
    if phrases.is_empty() {
        REASON_FALLBACK.to_string()
    } else {
        phrases.join(", ")
    }
}

/// Build the recommendation text for a developer match.
///
/// `experience` and `rate` are the already-computed band values.
pub fn recommendation_reason(
    match_percentage: u32,
    availability: Option<&Availability>,
    experience: u32,
    rate: u32,
) -> String {
    let mut phrases = Vec::with_capacity(4);

    phrases.extend(skill_phrase(match_percentage));

    if availability == Some(&Availability::Available) {
        phrases.push("Available now");
    }

    if experience >= 12 {
        phrases.push("Expert level skills");
    } else if experience >= 8 {
        phrases.push("Advanced skills");
    }

    if rate >= 18 {
        phrases.push("Within budget");
    }

    join_or_fallback(phrases)
}

/// Build the recommendation text for a company match.
pub fn company_reason(match_percentage: u32, has_capacity: bool, large_team: bool) -> String {
    let mut phrases = Vec::with_capacity(3);

    phrases.extend(skill_phrase(match_percentage));

    if has_capacity {
        phrases.push("Has capacity");
    }
    if large_team {
        phrases.push("Large team");
    }

    join_or_fallback(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_phrases_in_order() {
        let reason = recommendation_reason(100, Some(&Availability::Available), 14, 19);
        assert_eq!(
            reason,
            "Perfect skill match, Available now, Expert level skills, Within budget"
        );
    }

    #[test]
    fn skill_thresholds() {
        assert_eq!(recommendation_reason(80, None, 0, 0), "Excellent skill match");
        assert_eq!(recommendation_reason(79, None, 0, 0), "Good skill match");
        assert_eq!(recommendation_reason(60, None, 0, 0), "Good skill match");
        assert_eq!(recommendation_reason(59, None, 0, 0), REASON_FALLBACK);
    }

    #[test]
    fn experience_thresholds() {
        assert_eq!(recommendation_reason(0, None, 12, 0), "Expert level skills");
        assert_eq!(recommendation_reason(0, None, 11, 0), "Advanced skills");
        assert_eq!(recommendation_reason(0, None, 8, 0), "Advanced skills");
        assert_eq!(recommendation_reason(0, None, 7, 0), REASON_FALLBACK);
    }

    #[test]
    fn busy_developer_not_available_now() {
        let reason = recommendation_reason(50, Some(&Availability::Busy), 0, 18);
        assert_eq!(reason, "Within budget");
    }

    #[test]
    fn nothing_qualifies_yields_fallback() {
        assert_eq!(recommendation_reason(10, None, 2, 10), "Potential match");
    }

    #[test]
    fn company_reason_lists_boosts() {
        assert_eq!(
            company_reason(100, true, true),
            "Perfect skill match, Has capacity, Large team"
        );
        assert_eq!(company_reason(50, false, true), "Large team");
        assert_eq!(company_reason(20, false, false), REASON_FALLBACK);
    }
}
