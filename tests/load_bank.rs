use std::path::Path;

use permis_quiz::{load_questions_from_json, parse_questions, Answer, LoadError, QuestionBank};

#[test]
fn test_load_fixture_bank() {
    let questions = load_questions_from_json("fixtures/two_questions.json").unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[0].name.as_deref(), Some("Q1"));
    assert_eq!(questions[0].vehicle.answer.image_path(), Some("/Img/Q01.png"));
    match &questions[1].secours.answer {
        Answer::Multiple(parts) => assert_eq!(parts, &vec!["Sécuriser la zone".to_string()]),
        other => panic!("Expected Multiple, got {:?}", other),
    }
}

#[test]
fn test_vehicle_answer_without_picture() {
    let questions = load_questions_from_json("fixtures/mixed_bank.json").unwrap();
    let plate = questions.iter().find(|q| q.id == 12).unwrap();

    assert!(plate.vehicle.answer.image.is_none());
    assert!(plate.secours.answer == Answer::Single("Un écoulement de sang abondant et prolongé".to_string()));
}

#[test]
fn test_empty_bank_is_rejected() {
    match load_questions_from_json("fixtures/empty.json") {
        Err(LoadError::Empty { path }) => assert!(path.ends_with("empty.json")),
        other => panic!("Expected Empty, got {:?}", other),
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let err = load_questions_from_json("fixtures/duplicate_ids.json").unwrap_err();
    assert!(matches!(err, LoadError::DuplicateId { id: 4, .. }));
    assert!(err.to_string().contains("question id 4"));
}

#[test]
fn test_missing_file() {
    let err = load_questions_from_json("fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_malformed_document() {
    let err = parse_questions("{\"id\": 1}", Path::new("inline.json")).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse inline.json"));
}

#[test]
fn test_pick_random_on_empty_bank() {
    let bank = QuestionBank::default();
    let mut rng = rand::rngs::mock::StepRng::new(0, 0);
    assert_eq!(bank.pick_random(&mut rng, None), None);
}
