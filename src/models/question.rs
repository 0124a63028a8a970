use serde::{Deserialize, Serialize};

use super::Category;

/// One entry of the question bank: a vehicle check paired with a road-safety
/// and a first-aid question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    /// Display label, may cover several question numbers of the source booklet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub theme: String,
    #[serde(rename = "vehicule")]
    pub vehicle: VehicleSection,
    pub qser: KnowledgeSection,
    pub secours: KnowledgeSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSection {
    pub question: String,
    pub answer: VehicleAnswer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAnswer {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl VehicleAnswer {
    /// Trimmed image path, `None` when absent or blank.
    pub fn image_path(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSection {
    pub question: String,
    pub answer: Answer,
    /// Whether the source answer was a multi-part list.
    #[serde(default)]
    pub multiple: bool,
}

/// A knowledge answer as stored in the bank: either one text or an ordered
/// list of fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// The answer as one comparable string: fragments joined by single
    /// spaces, whitespace collapsed and trimmed.
    pub fn normalized(&self) -> String {
        match self {
            Answer::Single(text) => text.trim().to_string(),
            Answer::Multiple(parts) => parts
                .iter()
                .flat_map(|part| part.split_whitespace())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Fragments joined with a plain space, as shown after answering.
    pub fn joined(&self) -> String {
        match self {
            Answer::Single(text) => text.clone(),
            Answer::Multiple(parts) => parts.join(" "),
        }
    }

    /// One line per fragment, used by the revision screen.
    pub fn display_lines(&self) -> Vec<&str> {
        match self {
            Answer::Single(text) => vec![text.as_str()],
            Answer::Multiple(parts) => parts.iter().map(String::as_str).collect(),
        }
    }
}

/// The question/answer pair of one category of a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveQuestion<'a> {
    Vehicle(&'a VehicleSection),
    Knowledge(&'a KnowledgeSection),
}

impl<'a> ActiveQuestion<'a> {
    pub fn question(&self) -> &'a str {
        match self {
            ActiveQuestion::Vehicle(section) => &section.question,
            ActiveQuestion::Knowledge(section) => &section.question,
        }
    }
}

impl Question {
    pub fn section(&self, category: Category) -> ActiveQuestion<'_> {
        match category {
            Category::Vehicle => ActiveQuestion::Vehicle(&self.vehicle),
            Category::Qser => ActiveQuestion::Knowledge(&self.qser),
            Category::Secours => ActiveQuestion::Knowledge(&self.secours),
        }
    }

    /// The knowledge section for `qser`/`secours`, `None` for the vehicle check.
    pub fn knowledge(&self, category: Category) -> Option<&KnowledgeSection> {
        match self.section(category) {
            ActiveQuestion::Knowledge(section) => Some(section),
            ActiveQuestion::Vehicle(_) => None,
        }
    }

    /// Answer texts used as the comparison target when building choices.
    /// Holds at most one entry; empty when the stored answer is blank.
    pub fn answer_texts(&self, category: Category) -> Vec<String> {
        let text = match self.section(category) {
            ActiveQuestion::Vehicle(section) => section.answer.text.trim().to_string(),
            ActiveQuestion::Knowledge(section) => section.answer.normalized(),
        };
        if text.is_empty() { Vec::new() } else { vec![text] }
    }

    /// The reference answer shown to the player for `category`.
    pub fn correct_answer_text(&self, category: Category) -> String {
        match self.section(category) {
            ActiveQuestion::Vehicle(section) => section.answer.text.clone(),
            ActiveQuestion::Knowledge(section) => section.answer.joined(),
        }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Question {}", self.id))
    }
}
