use serde::Serialize;

use super::domain::{Dimension, SectionId};

/// One weighted option of a preference question.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceOption {
    pub weight: u8,
    pub text: &'static str,
}

/// One option of a knowledge check.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KnowledgeOption {
    pub correct: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Agreement on a 1-5 scale.
    Likert,
    Choice { options: Vec<ChoiceOption> },
    Knowledge { options: Vec<KnowledgeOption> },
}

/// Authored question carrying its explicit dimension tag.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub section: SectionId,
    pub dimension: Dimension,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<QuestionDefinition>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuestionDefinition>) -> Self {
        Self { questions }
    }

    /// Healthcare Data Analyst readiness questionnaire.
    pub fn standard() -> Self {
        Self::new(standard_questions())
    }

    pub fn question(&self, section: SectionId, id: &str) -> Option<&QuestionDefinition> {
        self.questions
            .iter()
            .find(|question| question.section == section && question.id == id)
    }

    pub fn questions_for_section(&self, section: SectionId) -> Vec<&QuestionDefinition> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn questions_for_dimension(&self, dimension: Dimension) -> Vec<&QuestionDefinition> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    /// Explicit tag for an authored question, falling back to every tag the id carries.
    pub fn resolve_dimensions(&self, section: SectionId, id: &str) -> Vec<Dimension> {
        match self.question(section, id) {
            Some(question) => vec![question.dimension],
            None => Dimension::classify(section, id),
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn likert(
    id: &'static str,
    section: SectionId,
    dimension: Dimension,
    prompt: &'static str,
) -> QuestionDefinition {
    QuestionDefinition {
        id,
        section,
        dimension,
        prompt,
        kind: QuestionKind::Likert,
    }
}

fn choice(
    id: &'static str,
    section: SectionId,
    dimension: Dimension,
    prompt: &'static str,
    options: &[(u8, &'static str)],
) -> QuestionDefinition {
    QuestionDefinition {
        id,
        section,
        dimension,
        prompt,
        kind: QuestionKind::Choice {
            options: options
                .iter()
                .map(|&(weight, text)| ChoiceOption { weight, text })
                .collect(),
        },
    }
}

fn knowledge(
    id: &'static str,
    dimension: Dimension,
    prompt: &'static str,
    options: &[(bool, &'static str)],
) -> QuestionDefinition {
    QuestionDefinition {
        id,
        section: SectionId::Technical,
        dimension,
        prompt,
        kind: QuestionKind::Knowledge {
            options: options
                .iter()
                .map(|&(correct, text)| KnowledgeOption { correct, text })
                .collect(),
        },
    }
}

fn standard_questions() -> Vec<QuestionDefinition> {
    use Dimension::*;
    use SectionId::{Psychometric, Wiscar};

    vec![
        likert(
            "interest-1",
            Psychometric,
            Interest,
            "You discover a pattern in patient readmission data that could reduce costs by 15%. How excited would this make you?",
        ),
        choice(
            "interest-2",
            Psychometric,
            Interest,
            "Which scenario interests you more?",
            &[
                (5, "Analyzing hospital infection trends to improve patient safety"),
                (3, "Creating marketing campaigns for consumer products"),
                (1, "Managing social media content for brands"),
            ],
        ),
        likert(
            "interest-3",
            Psychometric,
            Interest,
            "How much do you enjoy working with healthcare-related data and outcomes?",
        ),
        likert(
            "personality-1",
            Psychometric,
            Personality,
            "I pay close attention to details and accuracy in my work",
        ),
        likert(
            "personality-2",
            Psychometric,
            Personality,
            "I enjoy exploring new technologies and analytical tools",
        ),
        likert(
            "personality-3",
            Psychometric,
            Personality,
            "I can handle working with sensitive and confidential information responsibly",
        ),
        likert(
            "personality-4",
            Psychometric,
            Personality,
            "I work well independently on complex analytical tasks",
        ),
        choice(
            "cognitive-1",
            Psychometric,
            CognitiveStyle,
            "I prefer work environments that are:",
            &[
                (5, "Structured with clear methodologies and processes"),
                (3, "Balanced between structure and flexibility"),
                (1, "Completely open-ended and creative"),
            ],
        ),
        choice(
            "cognitive-2",
            Psychometric,
            CognitiveStyle,
            "When solving problems, I prefer:",
            &[
                (5, "Systematic, step-by-step analytical approaches"),
                (3, "A mix of analysis and creative thinking"),
                (1, "Intuitive and creative solutions"),
            ],
        ),
        likert(
            "motivation-1",
            Psychometric,
            Motivation,
            "I persist through challenging problems even when progress is slow",
        ),
        likert(
            "motivation-2",
            Psychometric,
            Motivation,
            "I believe my abilities can be developed through dedication and hard work",
        ),
        likert(
            "motivation-3",
            Psychometric,
            Motivation,
            "I am passionate about using data to improve healthcare outcomes",
        ),
        knowledge(
            "logical-1",
            LogicalReasoning,
            "If Patient A has diabetes (D) and hypertension (H), and all diabetic patients in the dataset require medication monitoring (M), what can we conclude?",
            &[
                (true, "Patient A requires medication monitoring"),
                (false, "Patient A has cardiovascular disease"),
                (false, "All hypertensive patients have diabetes"),
                (false, "Patient A does not need monitoring"),
            ],
        ),
        knowledge(
            "logical-2",
            LogicalReasoning,
            "In a flowchart, if \"Patient arrives\" → \"Triage assessment\" → \"Priority level assigned\", what comes next logically?",
            &[
                (false, "Patient leaves"),
                (true, "Patient directed to appropriate care level"),
                (false, "Patient billed"),
                (false, "Patient registered again"),
            ],
        ),
        knowledge(
            "quant-1",
            Quantitative,
            "Hospital A has a 12% readmission rate with 500 patients. Hospital B has a 15% readmission rate with 400 patients. Which hospital has more total readmissions?",
            &[
                (true, "Hospital A (60 readmissions)"),
                (false, "Hospital B (60 readmissions)"),
                (false, "They are equal"),
                (false, "Cannot determine from given data"),
            ],
        ),
        knowledge(
            "quant-2",
            Quantitative,
            "If the average length of stay (LOS) for surgery patients is 3.2 days with a standard deviation of 1.1 days, what does this tell us?",
            &[
                (false, "All patients stay exactly 3.2 days"),
                (true, "Most patients stay between 2.1-4.3 days"),
                (false, "The data is normally distributed"),
                (false, "There are no outliers"),
            ],
        ),
        knowledge(
            "programming-1",
            Programming,
            "Which SQL query would find all patients with diabetes in a patient table?",
            &[
                (false, "SELECT * WHERE diabetes = true"),
                (true, "SELECT * FROM patients WHERE diagnosis = \"diabetes\""),
                (false, "FIND patients diabetes = yes"),
                (false, "GET diabetes FROM patients"),
            ],
        ),
        knowledge(
            "programming-2",
            Programming,
            "In Excel, which formula calculates the average of cells A1 through A10?",
            &[
                (false, "=SUM(A1:A10)/10"),
                (true, "=AVERAGE(A1:A10)"),
                (false, "=MEAN(A1:A10)"),
                (false, "=AVG(A1-A10)"),
            ],
        ),
        knowledge(
            "healthcare-1",
            HealthcareDomain,
            "What does EHR stand for in healthcare?",
            &[
                (false, "Emergency Health Response"),
                (true, "Electronic Health Record"),
                (false, "External Health Registry"),
                (false, "Enhanced Health Reporting"),
            ],
        ),
        knowledge(
            "healthcare-2",
            HealthcareDomain,
            "HIPAA primarily deals with:",
            &[
                (false, "Hospital staffing requirements"),
                (false, "Medical device regulations"),
                (true, "Patient privacy and data security"),
                (false, "Insurance billing procedures"),
            ],
        ),
        knowledge(
            "healthcare-3",
            HealthcareDomain,
            "What is a key metric for measuring hospital efficiency?",
            &[
                (false, "Number of parking spaces"),
                (true, "Average Length of Stay (LOS)"),
                (false, "Number of employees"),
                (false, "Building square footage"),
            ],
        ),
        likert(
            "will-1",
            Wiscar,
            Will,
            "I have a strong drive to succeed in healthcare analytics",
        ),
        likert(
            "will-2",
            Wiscar,
            Will,
            "I am willing to invest significant time learning new technical skills",
        ),
        likert(
            "wiscar-interest-1",
            Wiscar,
            WiscarInterest,
            "Working with healthcare data to improve patient outcomes excites me",
        ),
        likert(
            "wiscar-interest-2",
            Wiscar,
            WiscarInterest,
            "I find myself naturally curious about healthcare trends and statistics",
        ),
        choice(
            "skill-1",
            Wiscar,
            Skill,
            "How would you rate your current data analysis abilities?",
            &[
                (1, "Beginner - Little to no experience"),
                (2, "Basic - Can work with simple spreadsheets"),
                (3, "Intermediate - Comfortable with Excel, basic statistics"),
                (4, "Advanced - Experience with SQL, data visualization tools"),
                (5, "Expert - Proficient in multiple programming languages and advanced analytics"),
            ],
        ),
        choice(
            "skill-2",
            Wiscar,
            Skill,
            "How quickly do you typically learn new technical concepts?",
            &[
                (1, "Very slowly - Need extensive practice and support"),
                (2, "Slowly - Prefer step-by-step guidance"),
                (3, "Moderately - Can learn with some effort"),
                (4, "Quickly - Pick up new concepts with minimal guidance"),
                (5, "Very quickly - Can master new tools independently"),
            ],
        ),
        likert(
            "wiscar-cognitive-1",
            Wiscar,
            WiscarCognitive,
            "I enjoy breaking down complex problems into manageable parts",
        ),
        likert(
            "wiscar-cognitive-2",
            Wiscar,
            WiscarCognitive,
            "I think systematically and methodically when analyzing information",
        ),
        likert(
            "ability-1",
            Wiscar,
            Ability,
            "I actively seek feedback to improve my performance",
        ),
        likert(
            "ability-2",
            Wiscar,
            Ability,
            "I adapt quickly when learning new methodologies or tools",
        ),
        choice(
            "real-world-1",
            Wiscar,
            RealWorld,
            "Which work environment appeals to you most?",
            &[
                (5, "Hospital or healthcare system analytics department"),
                (4, "Healthcare consulting firm"),
                (3, "Health tech startup"),
                (2, "General corporate analytics role"),
                (1, "Non-analytical role in any setting"),
            ],
        ),
        choice(
            "real-world-2",
            Wiscar,
            RealWorld,
            "How important is work-life balance to you in your career choice?",
            &[
                (3, "Very important - Need flexible hours and low stress"),
                (4, "Somewhat important - Willing to work hard but need balance"),
                (5, "Less important - Career growth and impact matter more"),
                (2, "Not sure what to expect in healthcare analytics"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_tags_agree_with_id_convention() {
        let bank = QuestionBank::standard();
        for question in bank.questions() {
            assert_eq!(
                Dimension::classify(question.section, question.id),
                vec![question.dimension],
                "question {} is tagged {:?}",
                question.id,
                question.dimension
            );
            assert_eq!(question.dimension.section(), question.section);
        }
    }

    #[test]
    fn every_dimension_has_questions() {
        let bank = QuestionBank::standard();
        for dimension in Dimension::ALL {
            assert!(
                !bank.questions_for_dimension(dimension).is_empty(),
                "{dimension:?} has no questions"
            );
        }
        assert_eq!(bank.questions_for_section(SectionId::Psychometric).len(), 12);
        assert_eq!(bank.questions_for_section(SectionId::Technical).len(), 9);
        assert_eq!(bank.questions_for_section(SectionId::Wiscar).len(), 12);
    }

    #[test]
    fn knowledge_checks_have_exactly_one_correct_option() {
        let bank = QuestionBank::standard();
        for question in bank.questions_for_section(SectionId::Technical) {
            match &question.kind {
                QuestionKind::Knowledge { options } => {
                    assert_eq!(options.iter().filter(|option| option.correct).count(), 1);
                }
                other => panic!("{} should be a knowledge check, got {other:?}", question.id),
            }
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_convention() {
        let bank = QuestionBank::standard();
        assert_eq!(
            bank.resolve_dimensions(SectionId::Technical, "quant-bonus"),
            vec![Dimension::Quantitative]
        );
        assert_eq!(
            bank.resolve_dimensions(SectionId::Psychometric, "interest-motivation-x"),
            vec![Dimension::Interest, Dimension::Motivation]
        );
        assert!(bank
            .resolve_dimensions(SectionId::Technical, "free-text")
            .is_empty());
    }
}
