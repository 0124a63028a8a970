use rand::rngs::StdRng;
use rand::SeedableRng;

use permis_quiz::quiz::{build_choices, shuffle, NONE_OF_THE_ABOVE};
use permis_quiz::{load_questions_from_json, Category, ChoiceKind, QuestionBank};

fn bank() -> QuestionBank {
    QuestionBank::new(load_questions_from_json("fixtures/mixed_bank.json").unwrap())
}

#[test]
fn test_knowledge_choices_hold_one_correct_answer() {
    let bank = bank();

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        for question in &bank {
            for category in [Category::Qser, Category::Secours] {
                let choices = build_choices(&bank, question, category, &mut rng);
                let expected = question.knowledge(category).unwrap().answer.normalized();

                assert_eq!(choices.len(), 4);
                let correct: Vec<_> = choices.iter().filter(|c| c.is_correct).collect();
                assert_eq!(correct.len(), 1, "question {} {:?}", question.id, category);
                assert_eq!(correct[0].text_value(), Some(expected.as_str()));
                assert!(choices.iter().all(|c| c.kind() == ChoiceKind::Text));
            }
        }
    }
}

#[test]
fn test_multi_part_answer_is_offered_as_one_option() {
    let bank = bank();
    let question = bank.iter().find(|q| q.id == 10).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let choices = build_choices(&bank, question, Category::Secours, &mut rng);
    let correct = choices.iter().find(|c| c.is_correct).unwrap();
    assert_eq!(
        correct.text_value(),
        Some("Sans intervention rapide, la victime risque de mourir")
    );
}

#[test]
fn test_vehicle_choices_mark_the_right_option() {
    let bank = bank();

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        for question in &bank {
            let choices = build_choices(&bank, question, Category::Vehicle, &mut rng);
            assert_eq!(choices.len(), 4);

            let none: Vec<_> = choices
                .iter()
                .filter(|c| c.text_value() == Some(NONE_OF_THE_ABOVE))
                .collect();
            assert_eq!(none.len(), 1);

            let images: Vec<_> = choices.iter().filter(|c| c.kind() == ChoiceKind::Image).collect();
            assert_eq!(images.len(), 3);

            match question.vehicle.answer.image_path() {
                Some(src) => {
                    assert!(!none[0].is_correct);
                    let correct: Vec<_> = images.iter().filter(|c| c.is_correct).collect();
                    assert_eq!(correct.len(), 1);
                    assert_eq!(correct[0].image_src(), Some(src));
                }
                None => {
                    assert!(none[0].is_correct);
                    assert!(images.iter().all(|c| !c.is_correct));
                }
            }
        }
    }
}

#[test]
fn test_shared_picture_is_not_used_as_distractor() {
    // Q10 and Q14 share the same picture.
    let bank = bank();
    let question = bank.iter().find(|q| q.id == 10).unwrap();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choices = build_choices(&bank, question, Category::Vehicle, &mut rng);
        let same_picture = choices
            .iter()
            .filter(|c| c.image_src() == Some("/Img/Q10.png"))
            .count();
        assert_eq!(same_picture, 1);
    }
}

#[test]
fn test_shuffle_is_a_permutation() {
    let source: Vec<u32> = (0..25).collect();
    let mut rng = StdRng::seed_from_u64(11);

    let mut shuffled = shuffle(&source, &mut rng);
    assert_eq!(source, (0..25).collect::<Vec<_>>());
    shuffled.sort();
    assert_eq!(shuffled, source);
}
