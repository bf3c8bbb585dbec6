use super::super::domain::{Dimension, SectionId};
use super::super::scoring::{Recommendation, ScoreReport};
use super::views::{
    BlockSummary, CareerPathView, DimensionEntry, LearningStage, MatchLevel, ReadinessInsights,
    ScoreBand,
};

const DEVELOPMENT_THRESHOLD: f64 = 60.0;

const LEARNING_PATH: [LearningStage; 5] = [
    LearningStage {
        stage: "Stage 1",
        title: "Data Foundations",
        skills: "Excel, Basic Statistics, Data Visualization",
    },
    LearningStage {
        stage: "Stage 2",
        title: "Healthcare Systems",
        skills: "EHR Systems, HIPAA, Healthcare Terminology",
    },
    LearningStage {
        stage: "Stage 3",
        title: "Technical Skills",
        skills: "SQL, Tableau, Basic Python",
    },
    LearningStage {
        stage: "Stage 4",
        title: "Advanced Analytics",
        skills: "Clinical Data Analysis, Predictive Modeling",
    },
    LearningStage {
        stage: "Stage 5",
        title: "Specialization",
        skills: "Real-World Projects, Industry Certifications",
    },
];

/// Rounds half up, the way percentages are shown to respondents.
pub(crate) fn display_percent(score: f64) -> i32 {
    (score + 0.5).floor() as i32
}

pub(crate) fn generate_insights(report: &ScoreReport) -> ReadinessInsights {
    let recommendation = report.recommendation;

    let blocks = vec![
        block_summary(
            report,
            "Psychological Fit",
            SectionId::Psychometric,
            report.psychological.overall,
        ),
        block_summary(
            report,
            "Technical Readiness",
            SectionId::Technical,
            report.technical.overall,
        ),
        block_summary(
            report,
            "WISCAR Profile",
            SectionId::Wiscar,
            report.wiscar.overall,
        ),
    ];

    ReadinessInsights {
        recommendation,
        headline: recommendation.headline(),
        narrative: recommendation.narrative(),
        confidence_percent: display_percent(report.confidence),
        blocks,
        career_paths: career_paths(report),
        development_areas: development_areas(report),
        learning_path: LEARNING_PATH.to_vec(),
    }
}

fn block_summary(
    report: &ScoreReport,
    title: &'static str,
    section: SectionId,
    overall: f64,
) -> BlockSummary {
    let band = ScoreBand::from_score(overall);
    let dimensions = Dimension::in_section(section)
        .map(|dimension| DimensionEntry {
            label: dimension.label(),
            percent: display_percent(report.dimension(dimension)),
        })
        .collect();

    BlockSummary {
        title,
        percent: display_percent(overall),
        band,
        band_label: band.label(),
        dimensions,
    }
}

fn career_paths(report: &ScoreReport) -> Vec<CareerPathView> {
    let analyst = match report.recommendation {
        Recommendation::Yes => MatchLevel::High,
        Recommendation::Maybe => MatchLevel::Medium,
        Recommendation::No => MatchLevel::Low,
    };

    let high_or_medium = |strong: bool| {
        if strong {
            MatchLevel::High
        } else {
            MatchLevel::Medium
        }
    };

    [
        (
            "Healthcare Data Analyst",
            "Analyze clinical and operational data to improve healthcare outcomes",
            analyst,
        ),
        (
            "Clinical Data Specialist",
            "Manage and analyze clinical trial and research data",
            high_or_medium(report.technical.overall >= 70.0),
        ),
        (
            "Medical Informatics Analyst",
            "Design and optimize healthcare information systems",
            high_or_medium(report.technical.programming >= 60.0),
        ),
        (
            "Population Health Analyst",
            "Track disease trends and community health patterns",
            high_or_medium(report.psychological.interest >= 70.0),
        ),
    ]
    .into_iter()
    .map(|(title, description, match_level)| CareerPathView {
        title,
        description,
        match_level,
        match_label: match_level.label(),
    })
    .collect()
}

fn development_areas(report: &ScoreReport) -> Vec<&'static str> {
    let mut areas = Vec::new();
    if report.technical.programming < DEVELOPMENT_THRESHOLD {
        areas.push("Programming & SQL Skills");
    }
    if report.technical.healthcare_domain < DEVELOPMENT_THRESHOLD {
        areas.push("Healthcare Domain Knowledge");
    }
    if report.psychological.personality < DEVELOPMENT_THRESHOLD {
        areas.push("Analytical Thinking");
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::store::ResponseStore;
    use crate::assessment::ScoringEngine;

    fn empty_report() -> ScoreReport {
        ScoringEngine::new().score(&ResponseStore::new())
    }

    #[test]
    fn score_bands_use_inclusive_lower_bounds() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39.9), ScoreBand::NeedsDevelopment);
    }

    #[test]
    fn display_percent_rounds_half_up() {
        assert_eq!(display_percent(33.333), 33);
        assert_eq!(display_percent(62.5), 63);
        assert_eq!(display_percent(100.0), 100);
    }

    #[test]
    fn empty_report_flags_every_development_area() {
        let insights = generate_insights(&empty_report());

        assert_eq!(insights.recommendation, Recommendation::No);
        assert_eq!(insights.headline, "Explore Alternative Career Paths");
        assert_eq!(insights.confidence_percent, 33);
        assert_eq!(
            insights.development_areas,
            vec![
                "Programming & SQL Skills",
                "Healthcare Domain Knowledge",
                "Analytical Thinking"
            ]
        );
        assert_eq!(insights.learning_path.len(), 5);
    }

    #[test]
    fn career_matches_follow_block_scores() {
        let mut report = empty_report();
        report.recommendation = Recommendation::Yes;
        report.technical.overall = 70.0;
        report.technical.programming = 59.9;
        report.psychological.interest = 90.0;

        let insights = generate_insights(&report);
        let levels: Vec<MatchLevel> = insights
            .career_paths
            .iter()
            .map(|path| path.match_level)
            .collect();

        assert_eq!(
            levels,
            vec![
                MatchLevel::High,
                MatchLevel::High,
                MatchLevel::Medium,
                MatchLevel::High
            ]
        );
    }

    #[test]
    fn blocks_list_their_dimensions() {
        let insights = generate_insights(&empty_report());
        let sizes: Vec<usize> = insights
            .blocks
            .iter()
            .map(|block| block.dimensions.len())
            .collect();
        assert_eq!(sizes, vec![4, 4, 6]);
        assert_eq!(insights.blocks[1].band, ScoreBand::NeedsDevelopment);
        assert_eq!(insights.blocks[0].band_label, "Fair");
    }
}
