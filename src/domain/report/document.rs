//! Renderer-neutral report document.
//!
//! The assembler produces a `ReportDocument`; every output format renders the
//! same block sequence. Blocks cover the three kinds of content a report
//! needs: flowing text, tables, and the summary chart.

use serde::Serialize;

/// Placeholder shown for a competency the user never rated.
pub const NOT_RATED: &str = "Not rated";

/// Placeholder shown for a question the user never answered.
pub const NO_RESPONSE: &str = "No response provided";

/// Ordered list of blocks making up the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn answers(&self) -> impl Iterator<Item = &QuestionAnswer> {
        self.blocks.iter().filter_map(|b| match b {
            Block::QuestionAnswer(qa) => Some(qa),
            _ => None,
        })
    }

    pub fn charts(&self) -> impl Iterator<Item = &BarChart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
    }

    /// Headings at the given level, in order.
    pub fn headings(&self, level: HeadingLevel) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(move |b| match b {
            Block::Heading { level: l, text } if *l == level => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// "Part N" headings.
    Section,
    /// Per-domain headings inside a part.
    Subsection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    List { ordered: bool, items: Vec<String> },
    Table(Table),
    QuestionAnswer(QuestionAnswer),
    Chart(BarChart),
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Block::Heading {
            level: HeadingLevel::Section,
            text: text.into(),
        }
    }

    pub fn subsection(text: impl Into<String>) -> Self {
        Block::Heading {
            level: HeadingLevel::Subsection,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }
}

/// How a table column is laid out in fixed-width formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Free text; may be truncated to the configured label width.
    Label,
    /// Short value; never truncated, centred where supported.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// The two-column competency/rating table.
    pub fn ratings() -> Self {
        Self {
            columns: vec![
                Column {
                    header: "Competency".to_string(),
                    kind: ColumnKind::Label,
                },
                Column {
                    header: "Rating".to_string(),
                    kind: ColumnKind::Value,
                },
            ],
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }
}

/// A question and the recorded answer (or the placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    pub prompt: String,
    pub answer: String,
    pub answered: bool,
}

impl QuestionAnswer {
    pub fn new(prompt: impl Into<String>, answer: Option<&str>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.unwrap_or(NO_RESPONSE).to_string(),
            answered: answer.is_some(),
        }
    }
}

/// Categorical bar chart with a bounded value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub axis_min: f64,
    pub axis_max: f64,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Chart on the 0–5 rating axis.
    pub fn rating_scale(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            axis_min: 0.0,
            axis_max: 5.0,
            bars: Vec::new(),
        }
    }

    /// Adds a bar, clamping its value to the axis bounds.
    pub fn push_bar(&mut self, label: impl Into<String>, value: f64) {
        self.bars.push(Bar {
            label: label.into(),
            value: value.clamp(self.axis_min, self.axis_max),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    /// One-decimal label printed on the bar.
    pub fn value_label(&self) -> String {
        format!("{:.1}", self.value)
    }
}
