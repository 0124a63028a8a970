use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the three parts every exam question is made of.
///
/// The declaration order is the tab order and the order in which a question
/// is worked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Interior/exterior vehicle check, answered with a picture.
    #[serde(rename = "vehicule")]
    Vehicle,
    /// Road-safety knowledge question.
    #[serde(rename = "qser")]
    Qser,
    /// First-aid knowledge question.
    #[serde(rename = "secours")]
    Secours,
}

impl Category {
    pub const ORDER: [Category; 3] = [Category::Vehicle, Category::Qser, Category::Secours];

    pub fn index(self) -> usize {
        match self {
            Category::Vehicle => 0,
            Category::Qser => 1,
            Category::Secours => 2,
        }
    }

    /// The category that follows in a question, `None` after the last one.
    pub fn next(self) -> Option<Category> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Category> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::ORDER.len() - 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Vehicle => "Véhicule",
            Category::Qser => "Sécurité routière",
            Category::Secours => "Premiers secours",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for each category, indexable by [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerCategory<T>([T; 3]);

impl<T> PerCategory<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ORDER.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<Category> for PerCategory<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.0[category.index()]
    }
}

impl<T> IndexMut<Category> for PerCategory<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.0[category.index()]
    }
}
