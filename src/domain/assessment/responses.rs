//! Response store: ratings and free-text answers for one session.

use std::collections::BTreeMap;

use crate::domain::catalog::{CompetencyDomain, CompetencyKey, ResponseKey};
use crate::domain::foundation::Rating;

/// Everything the user has entered so far.
///
/// Absence of a key means "not answered". An empty string is a recorded
/// answer and is kept distinct from absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    ratings: BTreeMap<CompetencyKey, Rating>,
    qualitative: BTreeMap<(CompetencyDomain, usize), String>,
    reflections: BTreeMap<usize, String>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rating, replacing any earlier one for the item.
    pub fn set_rating(&mut self, key: CompetencyKey, rating: Rating) {
        self.ratings.insert(key, rating);
    }

    pub fn rating(&self, key: &CompetencyKey) -> Option<Rating> {
        self.ratings.get(key).copied()
    }

    /// Records a text answer, replacing any earlier one for the question.
    pub fn set_text(&mut self, key: ResponseKey, text: impl Into<String>) {
        let text = text.into();
        match key {
            ResponseKey::Qualitative { domain, index } => {
                self.qualitative.insert((domain, index), text);
            }
            ResponseKey::Reflection { index } => {
                self.reflections.insert(index, text);
            }
        }
    }

    pub fn text(&self, key: &ResponseKey) -> Option<&str> {
        match *key {
            ResponseKey::Qualitative { domain, index } => {
                self.qualitative.get(&(domain, index)).map(String::as_str)
            }
            ResponseKey::Reflection { index } => self.reflections.get(&index).map(String::as_str),
        }
    }

    /// Empties all three mappings.
    pub fn clear(&mut self) {
        self.ratings.clear();
        self.qualitative.clear();
        self.reflections.clear();
    }

    pub fn ratings(&self) -> impl Iterator<Item = (&CompetencyKey, &Rating)> {
        self.ratings.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = (ResponseKey, &str)> {
        let qualitative = self
            .qualitative
            .iter()
            .map(|((domain, index), text)| (ResponseKey::qualitative(*domain, *index), text.as_str()));
        let reflections = self
            .reflections
            .iter()
            .map(|(index, text)| (ResponseKey::reflection(*index), text.as_str()));
        qualitative.chain(reflections)
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn answered_count(&self) -> usize {
        self.qualitative.len() + self.reflections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rated_count() == 0 && self.answered_count() == 0
    }
}
