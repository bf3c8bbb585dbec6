mod insights;
pub mod views;

pub use views::{
    BlockSummary, CareerPathView, DimensionEntry, LearningStage, MatchLevel, ReadinessInsights,
    ScoreBand,
};

use super::scoring::ScoreReport;

impl ScoreReport {
    /// Bands, career matches and development areas for this report.
    pub fn insights(&self) -> ReadinessInsights {
        insights::generate_insights(self)
    }
}
