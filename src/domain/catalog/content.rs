//! Content catalog: competency items, open questions and reflection prompts.

use serde::Serialize;

use super::{CompetencyDomain, CompetencyKey, ResponseKey};

/// A single ratable skill statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetencyItem {
    pub key: CompetencyKey,
    pub label: String,
}

/// Open-ended question asked within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenQuestion {
    pub domain: CompetencyDomain,
    pub index: usize,
    pub prompt: String,
}

impl OpenQuestion {
    pub fn key(&self) -> ResponseKey {
        ResponseKey::qualitative(self.domain, self.index)
    }
}

/// Domain-independent strengths/development prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionQuestion {
    pub index: usize,
    pub prompt: String,
}

impl ReflectionQuestion {
    pub fn key(&self) -> ResponseKey {
        ResponseKey::reflection(self.index)
    }
}

/// Immutable questionnaire content.
///
/// Items and open questions are stored grouped by domain in
/// [`CompetencyDomain::ALL`] order, each with indices starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCatalog {
    items: Vec<CompetencyItem>,
    open_questions: Vec<OpenQuestion>,
    reflection_questions: Vec<ReflectionQuestion>,
}

impl ContentCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Domains in display order.
    pub fn domains(&self) -> impl Iterator<Item = CompetencyDomain> {
        CompetencyDomain::ALL.into_iter()
    }

    pub fn items(&self) -> &[CompetencyItem] {
        &self.items
    }

    pub fn items_in(&self, domain: CompetencyDomain) -> impl Iterator<Item = &CompetencyItem> {
        self.items.iter().filter(move |i| i.key.domain == domain)
    }

    pub fn item(&self, key: &CompetencyKey) -> Option<&CompetencyItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    pub fn open_questions(&self) -> &[OpenQuestion] {
        &self.open_questions
    }

    pub fn questions_in(&self, domain: CompetencyDomain) -> impl Iterator<Item = &OpenQuestion> {
        self.open_questions.iter().filter(move |q| q.domain == domain)
    }

    pub fn reflection_questions(&self) -> &[ReflectionQuestion] {
        &self.reflection_questions
    }

    /// Returns the prompt for a response key, or `None` if the key is not
    /// part of this catalog.
    pub fn prompt(&self, key: &ResponseKey) -> Option<&str> {
        match *key {
            ResponseKey::Qualitative { domain, index } => self
                .open_questions
                .iter()
                .find(|q| q.domain == domain && q.index == index)
                .map(|q| q.prompt.as_str()),
            ResponseKey::Reflection { index } => self
                .reflection_questions
                .get(index)
                .map(|q| q.prompt.as_str()),
        }
    }

    pub fn contains_item(&self, key: &CompetencyKey) -> bool {
        self.item(key).is_some()
    }

    pub fn contains_question(&self, key: &ResponseKey) -> bool {
        self.prompt(key).is_some()
    }
}

/// Builds a catalog, assigning per-domain indices in insertion order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<(CompetencyDomain, String)>,
    open_questions: Vec<(CompetencyDomain, String)>,
    reflection_questions: Vec<String>,
}

impl CatalogBuilder {
    pub fn competency(mut self, domain: CompetencyDomain, label: impl Into<String>) -> Self {
        self.items.push((domain, label.into()));
        self
    }

    pub fn open_question(mut self, domain: CompetencyDomain, prompt: impl Into<String>) -> Self {
        self.open_questions.push((domain, prompt.into()));
        self
    }

    pub fn reflection_question(mut self, prompt: impl Into<String>) -> Self {
        self.reflection_questions.push(prompt.into());
        self
    }

    pub fn build(self) -> ContentCatalog {
        let mut items = Vec::with_capacity(self.items.len());
        let mut open_questions = Vec::with_capacity(self.open_questions.len());

        for domain in CompetencyDomain::ALL {
            items.extend(
                self.items
                    .iter()
                    .filter(|(d, _)| *d == domain)
                    .enumerate()
                    .map(|(index, (_, label))| CompetencyItem {
                        key: CompetencyKey::new(domain, index),
                        label: label.clone(),
                    }),
            );
            open_questions.extend(
                self.open_questions
                    .iter()
                    .filter(|(d, _)| *d == domain)
                    .enumerate()
                    .map(|(index, (_, prompt))| OpenQuestion {
                        domain,
                        index,
                        prompt: prompt.clone(),
                    }),
            );
        }

        let reflection_questions = self
            .reflection_questions
            .into_iter()
            .enumerate()
            .map(|(index, prompt)| ReflectionQuestion { index, prompt })
            .collect();

        ContentCatalog {
            items,
            open_questions,
            reflection_questions,
        }
    }
}
