use serde::Serialize;

use super::super::scoring::Recommendation;

/// Qualitative reading of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsDevelopment,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::NeedsDevelopment
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsDevelopment => "Needs Development",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Match",
            Self::Medium => "Medium Match",
            Self::Low => "Low Match",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionEntry {
    pub label: &'static str,
    pub percent: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub title: &'static str,
    pub percent: i32,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub dimensions: Vec<DimensionEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathView {
    pub title: &'static str,
    pub description: &'static str,
    pub match_level: MatchLevel,
    pub match_label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LearningStage {
    pub stage: &'static str,
    pub title: &'static str,
    pub skills: &'static str,
}

/// Display-ready reading of a score report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessInsights {
    pub recommendation: Recommendation,
    pub headline: &'static str,
    pub narrative: &'static str,
    pub confidence_percent: i32,
    pub blocks: Vec<BlockSummary>,
    pub career_paths: Vec<CareerPathView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub development_areas: Vec<&'static str>,
    pub learning_path: Vec<LearningStage>,
}
