use std::fmt;

use serde::{Deserialize, Serialize};

pub(crate) const PROCEED_THRESHOLD: f64 = 75.0;
pub(crate) const PREPARE_THRESHOLD: f64 = 50.0;

/// Three-way career readiness call derived from the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::No => "no",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "Proceed with Healthcare Data Analytics",
            Self::Maybe => "Consider Healthcare Data Analytics with Preparation",
            Self::No => "Explore Alternative Career Paths",
        }
    }

    pub const fn narrative(self) -> &'static str {
        match self {
            Self::Yes => "You show strong alignment with healthcare data analytics. Your combination of interest, skills, and cognitive fit indicates good potential for success in this field.",
            Self::Maybe => "You have potential for healthcare data analytics but may benefit from additional preparation in key areas before pursuing this career path.",
            Self::No => "Based on your current profile, you might want to consider alternative career paths that better align with your interests and strengths.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bands are closed at their lower bound: [75, ∞) yes, [50, 75) maybe, below 50 no.
pub(crate) fn decide_recommendation(confidence: f64) -> Recommendation {
    if confidence >= PROCEED_THRESHOLD {
        Recommendation::Yes
    } else if confidence >= PREPARE_THRESHOLD {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}
