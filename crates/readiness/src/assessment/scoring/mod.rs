mod policy;
mod rules;

pub use policy::Recommendation;

use super::domain::Dimension;
use super::store::ResponseStore;
use policy::decide_recommendation;
use rules::{mean, score_dimension};
use serde::{Deserialize, Serialize};

/// Stateless scorer turning an answer set into a [`ScoreReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Recomputes every dimension from scratch. Partial answer sets are allowed.
    pub fn score(&self, store: &ResponseStore) -> ScoreReport {
        let score = |dimension| score_dimension(store, dimension);

        let psychological = PsychologicalScores::new(
            score(Dimension::Interest),
            score(Dimension::Personality),
            score(Dimension::CognitiveStyle),
            score(Dimension::Motivation),
        );
        let technical = TechnicalScores::new(
            score(Dimension::LogicalReasoning),
            score(Dimension::Quantitative),
            score(Dimension::Programming),
            score(Dimension::HealthcareDomain),
        );
        let wiscar = WiscarScores::new(
            score(Dimension::Will),
            score(Dimension::WiscarInterest),
            score(Dimension::Skill),
            score(Dimension::WiscarCognitive),
            score(Dimension::Ability),
            score(Dimension::RealWorld),
        );

        let confidence = mean(&[psychological.overall, technical.overall, wiscar.overall]);
        let recommendation = decide_recommendation(confidence);

        ScoreReport {
            psychological,
            technical,
            wiscar,
            confidence,
            recommendation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologicalScores {
    pub interest: f64,
    pub personality: f64,
    pub cognitive_style: f64,
    pub motivation: f64,
    pub overall: f64,
}

impl PsychologicalScores {
    fn new(interest: f64, personality: f64, cognitive_style: f64, motivation: f64) -> Self {
        Self {
            interest,
            personality,
            cognitive_style,
            motivation,
            overall: mean(&[interest, personality, cognitive_style, motivation]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalScores {
    pub logical_reasoning: f64,
    pub quantitative: f64,
    pub programming: f64,
    pub healthcare_domain: f64,
    pub overall: f64,
}

impl TechnicalScores {
    fn new(
        logical_reasoning: f64,
        quantitative: f64,
        programming: f64,
        healthcare_domain: f64,
    ) -> Self {
        Self {
            logical_reasoning,
            quantitative,
            programming,
            healthcare_domain,
            overall: mean(&[
                logical_reasoning,
                quantitative,
                programming,
                healthcare_domain,
            ]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability: f64,
    pub real_world: f64,
    pub overall: f64,
}

impl WiscarScores {
    fn new(
        will: f64,
        interest: f64,
        skill: f64,
        cognitive: f64,
        ability: f64,
        real_world: f64,
    ) -> Self {
        Self {
            will,
            interest,
            skill,
            cognitive,
            ability,
            real_world,
            overall: mean(&[will, interest, skill, cognitive, ability, real_world]),
        }
    }
}

/// Immutable result of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub psychological: PsychologicalScores,
    pub technical: TechnicalScores,
    pub wiscar: WiscarScores,
    pub confidence: f64,
    pub recommendation: Recommendation,
}

impl ScoreReport {
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Interest => self.psychological.interest,
            Dimension::Personality => self.psychological.personality,
            Dimension::CognitiveStyle => self.psychological.cognitive_style,
            Dimension::Motivation => self.psychological.motivation,
            Dimension::LogicalReasoning => self.technical.logical_reasoning,
            Dimension::Quantitative => self.technical.quantitative,
            Dimension::Programming => self.technical.programming,
            Dimension::HealthcareDomain => self.technical.healthcare_domain,
            Dimension::Will => self.wiscar.will,
            Dimension::WiscarInterest => self.wiscar.interest,
            Dimension::Skill => self.wiscar.skill,
            Dimension::WiscarCognitive => self.wiscar.cognitive,
            Dimension::Ability => self.wiscar.ability,
            Dimension::RealWorld => self.wiscar.real_world,
        }
    }

    /// Per-dimension breakdown for audits and display.
    pub fn components(&self) -> Vec<ScoreComponent> {
        Dimension::ALL
            .into_iter()
            .map(|dimension| ScoreComponent {
                dimension,
                label: dimension.label(),
                score: self.dimension(dimension),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: f64,
}
