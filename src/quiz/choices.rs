//! Answer option generation.
//!
//! Options are rebuilt every time a category is entered fresh. Distractors
//! come from the same category of the other questions in the bank.

use rand::Rng;

use crate::data::QuestionBank;
use crate::models::{AnswerChoice, Category, Question};

use super::shuffle::shuffle;

/// Image options offered for a vehicle check, before the "none" option.
pub const VEHICLE_IMAGE_OPTIONS: usize = 3;
/// Upper bound on the number of options of a knowledge question.
pub const MAX_OPTIONS: usize = 4;
/// Knowledge questions are padded up to this many options when possible.
pub const MIN_OPTIONS: usize = 3;
/// Minimum number of wrong answers asked for.
const MIN_DISTRACTORS: usize = 2;

pub const NONE_OF_THE_ABOVE: &str = "Aucune des autres réponses";

/// Build the options for `question` in `category`.
pub fn build_choices<R: Rng + ?Sized>(
    bank: &QuestionBank,
    question: &Question,
    category: Category,
    rng: &mut R,
) -> Vec<AnswerChoice> {
    match category {
        Category::Vehicle => build_vehicle_choices(bank, question, rng),
        Category::Qser | Category::Secours => {
            build_knowledge_choices(bank, question, category, rng)
        }
    }
}

/// Up to three pictures plus a textual "none of the above" option.
///
/// The "none" option is the correct one exactly when the question has no
/// picture of its own.
pub fn build_vehicle_choices<R: Rng + ?Sized>(
    bank: &QuestionBank,
    question: &Question,
    rng: &mut R,
) -> Vec<AnswerChoice> {
    let correct_image = question.vehicle.answer.image_path();

    let mut unique_images: Vec<&str> = Vec::new();
    for src in bank
        .iter()
        .filter(|other| other.id != question.id)
        .filter_map(|other| other.vehicle.answer.image_path())
    {
        if !unique_images.contains(&src) {
            unique_images.push(src);
        }
    }

    let mut images = ImageOptions::new(question.id);

    if let Some(src) = correct_image {
        images.push(src, true);
    }

    let mut available: Vec<&str> = unique_images
        .iter()
        .copied()
        .filter(|src| Some(*src) != correct_image)
        .collect();
    while !images.is_full() && !available.is_empty() {
        let index = rng.gen_range(0..available.len());
        images.push(available.remove(index), false);
    }

    for &src in &unique_images {
        if images.is_full() {
            break;
        }
        if Some(src) != correct_image {
            images.push(src, false);
        }
    }

    if let Some(src) = correct_image {
        while !images.is_full() {
            images.push(src, false);
        }
    }

    let mut cursor = 0;
    while !images.is_full() && !unique_images.is_empty() {
        images.push(unique_images[cursor % unique_images.len()], false);
        cursor += 1;
    }

    let mut options = images.into_choices();
    options.push(AnswerChoice::text(
        format!("vehicle-none-{}", question.id),
        NONE_OF_THE_ABOVE,
        correct_image.is_none(),
    ));

    shuffle(&options, rng)
}

struct ImageOptions {
    question_id: u32,
    choices: Vec<AnswerChoice>,
}

impl ImageOptions {
    fn new(question_id: u32) -> Self {
        Self {
            question_id,
            choices: Vec::with_capacity(VEHICLE_IMAGE_OPTIONS),
        }
    }

    fn is_full(&self) -> bool {
        self.choices.len() >= VEHICLE_IMAGE_OPTIONS
    }

    fn push(&mut self, src: &str, is_correct: bool) {
        let id = format!("vehicle-image-{}-{}", self.question_id, self.choices.len());
        self.choices.push(AnswerChoice::image(id, src, is_correct));
    }

    fn into_choices(self) -> Vec<AnswerChoice> {
        self.choices
    }
}

/// Text options for a road-safety or first-aid question: the reference
/// answer plus distractors drawn from the other questions.
pub fn build_knowledge_choices<R: Rng + ?Sized>(
    bank: &QuestionBank,
    question: &Question,
    category: Category,
    rng: &mut R,
) -> Vec<AnswerChoice> {
    let correct = question.answer_texts(category);

    let same_category_pool: Vec<String> = bank
        .iter()
        .filter(|other| other.id != question.id)
        .flat_map(|other| other.answer_texts(category))
        .collect();

    let mut unique_pool: Vec<&str> = Vec::new();
    for text in &same_category_pool {
        if !unique_pool.contains(&text.as_str()) {
            unique_pool.push(text);
        }
    }

    let target_total = if correct.len() >= 2 {
        (correct.len() + 2).min(MAX_OPTIONS)
    } else {
        MAX_OPTIONS
    };
    let needed = target_total
        .saturating_sub(correct.len())
        .max(MIN_DISTRACTORS);

    let is_correct_text = |text: &str| correct.iter().any(|c| c == text);
    let fallback_pool: Vec<&str> = same_category_pool
        .iter()
        .map(String::as_str)
        .filter(|text| !is_correct_text(*text))
        .collect();

    let mut distractors: Vec<&str> = Vec::with_capacity(needed);
    while distractors.len() < needed && !unique_pool.is_empty() {
        let index = rng.gen_range(0..unique_pool.len());
        let candidate = unique_pool.remove(index);
        if !is_correct_text(candidate) {
            distractors.push(candidate);
        }
    }

    if !fallback_pool.is_empty() {
        let mut cursor = 0;
        while distractors.len() < needed {
            distractors.push(fallback_pool[cursor % fallback_pool.len()]);
            cursor += 1;
        }
    }

    let mut options: Vec<AnswerChoice> = correct
        .iter()
        .enumerate()
        .map(|(idx, text)| AnswerChoice::text(format!("correct-{}-{}", question.id, idx), text, true))
        .chain(distractors.iter().enumerate().map(|(idx, text)| {
            AnswerChoice::text(format!("false-{}-{}", question.id, idx), *text, false)
        }))
        .collect();

    let filler_pool = if distractors.is_empty() {
        &fallback_pool
    } else {
        &distractors
    };
    let mut cursor = 0;
    while options.len() < MIN_OPTIONS && !filler_pool.is_empty() {
        let text = filler_pool[cursor % filler_pool.len()];
        options.push(AnswerChoice::text(
            format!("fallback-{}-{}", question.id, cursor),
            text,
            false,
        ));
        cursor += 1;
    }

    let mut shuffled = shuffle(&options, rng);
    shuffled.truncate(MAX_OPTIONS);
    shuffled
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::models::{Answer, KnowledgeSection, VehicleAnswer, VehicleSection};

    fn question(id: u32, image: Option<&str>, qser: &str) -> Question {
        Question {
            id,
            name: None,
            theme: "Vérifications intérieures".to_string(),
            vehicle: VehicleSection {
                question: format!("Vérification {}", id),
                answer: VehicleAnswer {
                    text: format!("Réponse véhicule {}", id),
                    image: image.map(str::to_string),
                },
            },
            qser: KnowledgeSection {
                question: format!("Question sécurité {}", id),
                answer: Answer::Single(qser.to_string()),
                multiple: false,
            },
            secours: KnowledgeSection {
                question: format!("Question secours {}", id),
                answer: Answer::Multiple(vec!["Protéger".to_string(), "alerter".to_string()]),
                multiple: true,
            },
        }
    }

    #[test]
    fn test_single_distractor_is_cycled() {
        let bank = QuestionBank::new(vec![
            question(1, Some("/Img/Q01.png"), "50 km/h"),
            question(2, Some("/Img/Q02.png"), "Arrêt obligatoire"),
        ]);
        let mut rng = StepRng::new(0, 0);

        let choices = build_knowledge_choices(&bank, &bank.questions()[0], Category::Qser, &mut rng);
        assert_eq!(choices.len(), 4);
        assert_eq!(choices.iter().filter(|c| c.is_correct).count(), 1);
        assert_eq!(
            choices
                .iter()
                .filter(|c| c.text_value() == Some("Arrêt obligatoire"))
                .count(),
            3
        );
    }

    #[test]
    fn test_identical_answers_leave_correct_alone() {
        // Every other question shares the answer, so no distractor exists.
        let bank = QuestionBank::new(vec![
            question(1, None, "Même réponse"),
            question(2, None, "Même réponse"),
        ]);
        let mut rng = StepRng::new(0, 0);

        let choices = build_knowledge_choices(&bank, &bank.questions()[0], Category::Qser, &mut rng);
        assert_eq!(choices.len(), 1);
        assert!(choices[0].is_correct);
    }

    #[test]
    fn test_lonely_question_without_picture() {
        let bank = QuestionBank::new(vec![question(1, None, "50 km/h")]);
        let mut rng = StepRng::new(0, 0);

        let choices = build_vehicle_choices(&bank, &bank.questions()[0], &mut rng);
        assert_eq!(choices.len(), 1);
        assert!(choices[0].is_correct);
        assert_eq!(choices[0].text_value(), Some(NONE_OF_THE_ABOVE));
    }

    #[test]
    fn test_correct_picture_pads_when_pool_is_empty() {
        let bank = QuestionBank::new(vec![
            question(1, Some("/Img/Q01.png"), "a"),
            question(2, None, "b"),
        ]);
        let mut rng = StepRng::new(0, 0);

        let choices = build_vehicle_choices(&bank, &bank.questions()[0], &mut rng);
        assert_eq!(choices.len(), 4);
        let pictures: Vec<_> = choices.iter().filter(|c| c.image_src().is_some()).collect();
        assert_eq!(pictures.len(), 3);
        assert!(pictures.iter().all(|c| c.image_src() == Some("/Img/Q01.png")));
        assert_eq!(pictures.iter().filter(|c| c.is_correct).count(), 1);
    }

    #[test]
    fn test_choice_ids_are_unique() {
        let bank = QuestionBank::new(vec![
            question(1, Some("/Img/Q01.png"), "a"),
            question(2, Some("/Img/Q02.png"), "b"),
        ]);
        let mut rng = StepRng::new(0, 0);

        for category in Category::ORDER {
            let choices = build_choices(&bank, &bank.questions()[0], category, &mut rng);
            let mut ids: Vec<_> = choices.iter().map(|c| c.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), choices.len(), "{:?}", category);
        }
    }
}
