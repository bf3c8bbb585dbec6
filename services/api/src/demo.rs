use crate::infra::InMemorySessionRepository;
use crate::routes::ScoreResponse;
use clap::Args;
use readiness::assessment::{
    AnswerValue, AssessmentService, QuestionBank, QuestionDefinition, QuestionKind,
    ResponseImporter, ResponseSubmission, SessionId, SessionRepository,
};
use readiness::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export with `section,question,answer` rows
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { responses, json } = args;

    let bank = Arc::new(QuestionBank::standard());
    let mut session = ResponseImporter::from_path(&responses, bank)?;
    if !session.is_complete() {
        warn!(path = %responses.display(), "response export does not cover every section");
    }

    let scored = ScoreResponse::from_session(&mut session);
    if json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        println!("Readiness report for {}", responses.display());
        render_score(&scored);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let bank = Arc::new(QuestionBank::standard());
    let repository = Arc::new(InMemorySessionRepository::new(1));
    let service = AssessmentService::new(repository, Arc::clone(&bank));

    let (session_id, scored) = scripted_session(&service)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    println!("Healthcare Data Analyst readiness demo");
    println!(
        "- Session {} answered {} of {} questions",
        session_id,
        scored.answered,
        bank.questions().len()
    );
    render_score(&scored);
    Ok(())
}

/// Runs one strong candidate through `service` and removes the session afterwards.
fn scripted_session<R>(
    service: &AssessmentService<R>,
) -> Result<(SessionId, ScoreResponse), AppError>
where
    R: SessionRepository + 'static,
{
    let session_id = service.start()?.session_id;
    for question in service.bank().questions() {
        service.record_response(&session_id, scripted_submission(question))?;
    }
    let report = service.calculate(&session_id)?;

    let record = service.get(&session_id)?;
    let scored = ScoreResponse::new(&record.session, report);
    service.finish(&session_id)?;
    Ok((session_id, scored))
}

/// Strongest answer for each question: top rating, heaviest option or the correct option.
fn scripted_submission(question: &QuestionDefinition) -> ResponseSubmission {
    let answer = match &question.kind {
        QuestionKind::Likert => AnswerValue::rating(5),
        QuestionKind::Choice { options } => {
            let weight = options.iter().map(|option| option.weight).max().unwrap_or(5);
            AnswerValue::rating(weight)
        }
        QuestionKind::Knowledge { .. } => AnswerValue::correct(),
    };

    ResponseSubmission {
        section_id: question.section,
        question_id: question.id.into(),
        answer,
    }
}

fn render_score(scored: &ScoreResponse) {
    let insights = &scored.insights;

    println!(
        "- {} answers recorded | all sections covered: {}",
        scored.answered,
        if scored.complete { "yes" } else { "no" }
    );
    println!(
        "- Confidence {}% -> {}",
        insights.confidence_percent, insights.headline
    );
    println!("  {}", insights.narrative);

    for block in &insights.blocks {
        println!(
            "\n{}: {}% ({})",
            block.title, block.percent, block.band_label
        );
        for dimension in &block.dimensions {
            println!("  - {}: {}%", dimension.label, dimension.percent);
        }
    }

    println!("\nCareer paths:");
    for path in &insights.career_paths {
        println!("  - {} [{}]: {}", path.title, path.match_label, path.description);
    }

    if !insights.development_areas.is_empty() {
        println!("\nDevelopment areas:");
        for area in &insights.development_areas {
            println!("  - {area}");
        }
    }

    println!("\nLearning path:");
    for stage in &insights.learning_path {
        println!("  - {} {}: {}", stage.stage, stage.title, stage.skills);
    }
}
