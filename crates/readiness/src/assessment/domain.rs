use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Questionnaire sections a respondent works through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [Self::Psychometric, Self::Technical, Self::Wiscar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Assessment",
            Self::Technical => "Technical & Aptitude",
            Self::Wiscar => "WISCAR Analysis",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "psychometric" => Ok(Self::Psychometric),
            "technical" => Ok(Self::Technical),
            "wiscar" => Ok(Self::Wiscar),
            _ => Err(UnknownSection(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assessment section '{0}'")]
pub struct UnknownSection(pub String);

/// Identifier of a question within its section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const CORRECT: &str = "correct";
pub const INCORRECT: &str = "incorrect";

/// Raw answer as supplied by the questionnaire front end.
///
/// Shape is never validated on write; scorers coerce whatever arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl AnswerValue {
    pub fn rating(value: u8) -> Self {
        Self::Number(f64::from(value))
    }

    pub fn correct() -> Self {
        Self::Text(CORRECT.to_string())
    }

    pub fn incorrect() -> Self {
        Self::Text(INCORRECT.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Text(text) if text == CORRECT)
    }
}

/// How a dimension turns its answers into a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerFamily {
    /// Mean of 1-5 ratings rescaled by 20.
    Likert,
    /// Share of knowledge checks answered correctly.
    Correctness,
}

/// Scored dimension. Authored questions carry exactly one; other ids feed every dimension whose
/// tag they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Interest,
    Personality,
    CognitiveStyle,
    Motivation,
    LogicalReasoning,
    Quantitative,
    Programming,
    HealthcareDomain,
    Will,
    WiscarInterest,
    Skill,
    WiscarCognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    /// Declaration order doubles as the precedence for id classification.
    pub const ALL: [Dimension; 14] = [
        Self::Interest,
        Self::Personality,
        Self::CognitiveStyle,
        Self::Motivation,
        Self::LogicalReasoning,
        Self::Quantitative,
        Self::Programming,
        Self::HealthcareDomain,
        Self::Will,
        Self::WiscarInterest,
        Self::Skill,
        Self::WiscarCognitive,
        Self::Ability,
        Self::RealWorld,
    ];

    pub const fn section(self) -> SectionId {
        match self {
            Self::Interest | Self::Personality | Self::CognitiveStyle | Self::Motivation => {
                SectionId::Psychometric
            }
            Self::LogicalReasoning
            | Self::Quantitative
            | Self::Programming
            | Self::HealthcareDomain => SectionId::Technical,
            Self::Will
            | Self::WiscarInterest
            | Self::Skill
            | Self::WiscarCognitive
            | Self::Ability
            | Self::RealWorld => SectionId::Wiscar,
        }
    }

    pub const fn family(self) -> ScorerFamily {
        match self.section() {
            SectionId::Technical => ScorerFamily::Correctness,
            SectionId::Psychometric | SectionId::Wiscar => ScorerFamily::Likert,
        }
    }

    /// Fragment that question ids of this dimension carry by convention.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Interest => "interest",
            Self::Personality => "personality",
            Self::CognitiveStyle => "cognitive",
            Self::Motivation => "motivation",
            Self::LogicalReasoning => "logical",
            Self::Quantitative => "quant",
            Self::Programming => "programming",
            Self::HealthcareDomain => "healthcare",
            Self::Will => "will",
            Self::WiscarInterest => "wiscar-interest",
            Self::Skill => "skill",
            Self::WiscarCognitive => "wiscar-cognitive",
            Self::Ability => "ability",
            Self::RealWorld => "real-world",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest | Self::WiscarInterest => "Interest",
            Self::Personality => "Personality",
            Self::CognitiveStyle => "Cognitive Style",
            Self::Motivation => "Motivation",
            Self::LogicalReasoning => "Logical Reasoning",
            Self::Quantitative => "Quantitative",
            Self::Programming => "Programming",
            Self::HealthcareDomain => "Healthcare Domain",
            Self::Will => "Will",
            Self::Skill => "Skill",
            Self::WiscarCognitive => "Cognitive",
            Self::Ability => "Ability",
            Self::RealWorld => "Real-World",
        }
    }

    pub fn in_section(section: SectionId) -> impl Iterator<Item = Dimension> {
        Self::ALL
            .into_iter()
            .filter(move |dimension| dimension.section() == section)
    }

    /// Every dimension of `section` whose tag appears in `question_id`, in declaration order.
    ///
    /// Used once when an answer is first recorded, never while scoring.
    pub fn classify(section: SectionId, question_id: &str) -> Vec<Dimension> {
        Self::in_section(section)
            .filter(|dimension| question_id.contains(dimension.tag()))
            .collect()
    }
}

/// Current answer for one question of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub section_id: SectionId,
    pub question_id: QuestionId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    pub answer: AnswerValue,
}
