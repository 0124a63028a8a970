/// What an answer option shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceContent {
    Text(String),
    /// Path of a picture from the vehicle-check booklet.
    Image(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Text,
    Image,
}

/// One selectable option for the active category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerChoice {
    pub id: String,
    pub content: ChoiceContent,
    pub is_correct: bool,
}

impl AnswerChoice {
    pub fn text(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            content: ChoiceContent::Text(text.into()),
            is_correct,
        }
    }

    pub fn image(id: impl Into<String>, src: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            content: ChoiceContent::Image(src.into()),
            is_correct,
        }
    }

    pub fn kind(&self) -> ChoiceKind {
        match self.content {
            ChoiceContent::Text(_) => ChoiceKind::Text,
            ChoiceContent::Image(_) => ChoiceKind::Image,
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            ChoiceContent::Text(text) => Some(text),
            ChoiceContent::Image(_) => None,
        }
    }

    pub fn image_src(&self) -> Option<&str> {
        match &self.content {
            ChoiceContent::Image(src) => Some(src),
            ChoiceContent::Text(_) => None,
        }
    }
}
