use super::super::domain::{AnswerValue, Dimension, ScorerFamily};
use super::super::store::ResponseStore;

/// Likert score reported when a dimension has no answers at all.
pub(crate) const NO_SIGNAL_SCORE: f64 = 50.0;
/// Stand-in for answers that are not numbers.
pub(crate) const NEUTRAL_RATING: f64 = 3.0;
const RATING_SCALE: f64 = 20.0;
const MAX_SCORE: f64 = 100.0;

pub(crate) fn score_dimension(store: &ResponseStore, dimension: Dimension) -> f64 {
    let answers = store.answers_for(dimension).map(|answer| &answer.answer);
    match dimension.family() {
        ScorerFamily::Likert => likert_score(answers),
        ScorerFamily::Correctness => correctness_score(answers),
    }
}

/// Mean rating times 20, capped at 100. Only the upper bound is clamped.
pub(crate) fn likert_score<'a, I>(answers: I) -> f64
where
    I: IntoIterator<Item = &'a AnswerValue>,
{
    let ratings: Vec<f64> = answers
        .into_iter()
        .map(|answer| answer.as_number().unwrap_or(NEUTRAL_RATING))
        .collect();

    if ratings.is_empty() {
        return NO_SIGNAL_SCORE;
    }

    (mean(&ratings) * RATING_SCALE).min(MAX_SCORE)
}

/// Percentage of answers equal to `"correct"`; zero answers score 0.
pub(crate) fn correctness_score<'a, I>(answers: I) -> f64
where
    I: IntoIterator<Item = &'a AnswerValue>,
{
    let (correct, selected) = answers
        .into_iter()
        .fold((0usize, 0usize), |(correct, selected), answer| {
            (correct + usize::from(answer.is_correct()), selected + 1)
        });

    (correct as f64 / selected.max(1) as f64 * MAX_SCORE).min(MAX_SCORE)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{QuestionId, SectionId};

    fn ratings(values: &[f64]) -> Vec<AnswerValue> {
        values.iter().copied().map(AnswerValue::Number).collect()
    }

    #[test]
    fn likert_without_answers_is_neutral() {
        assert_eq!(likert_score(&Vec::<AnswerValue>::new()), 50.0);
    }

    #[test]
    fn likert_rescales_the_mean_rating() {
        assert_eq!(likert_score(&ratings(&[5.0, 5.0, 5.0])), 100.0);
        assert_eq!(likert_score(&ratings(&[1.0])), 20.0);
        assert_eq!(likert_score(&ratings(&[4.0, 3.0])), 70.0);
    }

    #[test]
    fn likert_coerces_non_numeric_answers_to_the_midpoint() {
        let answers = vec![
            AnswerValue::Number(5.0),
            AnswerValue::Text("strongly agree".to_string()),
        ];
        assert_eq!(likert_score(&answers), 80.0);
        assert_eq!(likert_score(&[AnswerValue::correct()]), 60.0);
    }

    #[test]
    fn likert_caps_at_one_hundred_but_has_no_floor() {
        assert_eq!(likert_score(&ratings(&[9.0])), 100.0);
        assert_eq!(likert_score(&ratings(&[0.0])), 0.0);
        assert_eq!(likert_score(&ratings(&[-1.0])), -20.0);
    }

    #[test]
    fn likert_is_monotonic_in_the_mean() {
        let mut previous = f64::MIN;
        for step in 0..=8 {
            let rating = 1.0 + f64::from(step) * 0.5;
            let score = likert_score(&ratings(&[rating, rating]));
            assert!(score >= previous);
            assert!((20.0..=100.0).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn correctness_without_answers_is_zero() {
        assert_eq!(correctness_score(&Vec::<AnswerValue>::new()), 0.0);
    }

    #[test]
    fn correctness_is_the_hit_rate() {
        let answers = vec![
            AnswerValue::correct(),
            AnswerValue::incorrect(),
            AnswerValue::correct(),
            AnswerValue::Number(5.0),
        ];
        assert_eq!(correctness_score(&answers), 50.0);
        assert_eq!(
            correctness_score(&[AnswerValue::correct(), AnswerValue::correct()]),
            100.0
        );
    }

    #[test]
    fn correctness_requires_the_exact_literal() {
        let answers = vec![AnswerValue::Text("Correct".to_string())];
        assert_eq!(correctness_score(&answers), 0.0);
    }

    #[test]
    fn dimension_scores_only_read_tagged_answers() {
        let mut store = ResponseStore::new();
        store.upsert(
            SectionId::Technical,
            QuestionId::from("logical-1"),
            vec![Dimension::LogicalReasoning],
            AnswerValue::correct(),
        );
        store.upsert(
            SectionId::Technical,
            QuestionId::from("scratch"),
            Vec::new(),
            AnswerValue::correct(),
        );

        assert_eq!(score_dimension(&store, Dimension::LogicalReasoning), 100.0);
        assert_eq!(score_dimension(&store, Dimension::Quantitative), 0.0);
        assert_eq!(score_dimension(&store, Dimension::Will), 50.0);
    }
}
