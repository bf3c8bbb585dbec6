use std::sync::Arc;

use super::common::{bank, build_service, UnavailableRepository};
use crate::assessment::domain::{AnswerValue, QuestionId, SectionId, SessionId};
use crate::assessment::repository::{RepositoryError, SessionRepository};
use crate::assessment::scoring::Recommendation;
use crate::assessment::{AssessmentService, AssessmentServiceError, ResponseSubmission};

fn submission(section: SectionId, question: &str, answer: AnswerValue) -> ResponseSubmission {
    ResponseSubmission {
        section_id: section,
        question_id: QuestionId::from(question),
        answer,
    }
}

#[test]
fn started_sessions_get_distinct_ids() {
    let (service, repository) = build_service();

    let first = service.start().expect("first session");
    let second = service.start().expect("second session");

    assert_ne!(first.session_id, second.session_id);
    assert!(first.session_id.0.starts_with("asmt-"));
    assert_eq!(repository.records.lock().unwrap().len(), 2);
}

#[test]
fn recorded_answers_are_persisted() {
    let (service, repository) = build_service();
    let record = service.start().expect("session");

    service
        .record_response(
            &record.session_id,
            submission(SectionId::Technical, "logical-1", AnswerValue::correct()),
        )
        .expect("record answer");

    let stored = repository
        .fetch(&record.session_id)
        .expect("fetch")
        .expect("stored record");
    assert_eq!(
        stored.session.lookup(SectionId::Technical, "logical-1"),
        Some(&AnswerValue::correct())
    );
    assert_eq!(
        service
            .lookup(&record.session_id, SectionId::Technical, "logical-1")
            .expect("lookup"),
        Some(AnswerValue::correct())
    );
}

#[test]
fn calculation_is_stored_with_a_timestamp() {
    let (service, _) = build_service();
    let record = service.start().expect("session");
    assert!(service.report(&record.session_id).expect("report").is_none());

    let report = service.calculate(&record.session_id).expect("calculate");

    assert_eq!(report.recommendation, Recommendation::No);
    let status = service.get(&record.session_id).expect("get").status_view();
    assert!(status.calculated_at.is_some());
    assert_eq!(status.recommendation, Some(Recommendation::No));
    assert_eq!(
        service.report(&record.session_id).expect("report"),
        Some(report)
    );
}

#[test]
fn reset_discards_answers_and_report() {
    let (service, _) = build_service();
    let record = service.start().expect("session");
    for section in SectionId::ALL {
        service
            .record_response(
                &record.session_id,
                submission(section, "any", AnswerValue::rating(4)),
            )
            .expect("record");
    }
    assert!(service.is_complete(&record.session_id).expect("complete"));
    service.calculate(&record.session_id).expect("calculate");

    let reset = service.reset(&record.session_id).expect("reset");

    assert!(reset.calculated_at.is_none());
    let status = reset.status_view();
    assert_eq!(status.answered, 0);
    assert!(!status.complete);
    assert!(status.recommendation.is_none());
    assert!(service.report(&record.session_id).expect("report").is_none());
}

#[test]
fn status_counts_answers_per_section() {
    let (service, _) = build_service();
    let record = service.start().expect("session");
    service
        .record_response(
            &record.session_id,
            submission(SectionId::Wiscar, "will-1", AnswerValue::rating(3)),
        )
        .expect("record");
    service
        .record_response(
            &record.session_id,
            submission(SectionId::Wiscar, "will-2", AnswerValue::rating(5)),
        )
        .expect("record");

    let status = service.get(&record.session_id).expect("get").status_view();

    assert_eq!(status.answered, 2);
    assert_eq!(status.answered_by_section[&SectionId::Wiscar], 2);
    assert_eq!(status.answered_by_section[&SectionId::Technical], 0);
}

#[test]
fn unknown_sessions_are_reported_as_not_found() {
    let (service, _) = build_service();
    let missing = SessionId("asmt-missing".to_string());

    let error = service.calculate(&missing).expect_err("missing session");

    assert!(matches!(
        error,
        AssessmentServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn finished_sessions_are_removed() {
    let (service, repository) = build_service();
    let record = service.start().expect("session");

    service.finish(&record.session_id).expect("finish");

    assert!(repository.records.lock().unwrap().is_empty());
    assert!(service.get(&record.session_id).is_err());
}

#[test]
fn repository_failures_propagate() {
    let service = AssessmentService::new(Arc::new(UnavailableRepository), bank());

    let error = service.start().expect_err("repository offline");

    assert!(matches!(
        error,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn concurrent_writers_and_calculation_lose_no_answers() {
    const WRITERS: usize = 4;
    const ANSWERS_PER_WRITER: usize = 25;

    let (service, _) = build_service();
    let session_id = service.start().expect("session").session_id;

    std::thread::scope(|scope| {
        for writer in 0..WRITERS {
            let service = &service;
            let session_id = &session_id;
            scope.spawn(move || {
                for n in 0..ANSWERS_PER_WRITER {
                    let question = format!("writer{writer}-{n}");
                    service
                        .record_response(
                            session_id,
                            submission(SectionId::Wiscar, &question, AnswerValue::rating(4)),
                        )
                        .expect("record");
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..ANSWERS_PER_WRITER {
                service.calculate(&session_id).expect("calculate");
            }
        });
    });

    let status = service.get(&session_id).expect("get").status_view();
    assert_eq!(status.answered, WRITERS * ANSWERS_PER_WRITER);
    for writer in 0..WRITERS {
        for n in 0..ANSWERS_PER_WRITER {
            let question = format!("writer{writer}-{n}");
            assert_eq!(
                service
                    .lookup(&session_id, SectionId::Wiscar, &question)
                    .expect("lookup"),
                Some(AnswerValue::rating(4)),
                "{question} was lost"
            );
        }
    }
    assert!(service.report(&session_id).expect("report").is_some());
}
