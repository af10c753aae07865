//! Markdown report renderer.
//!
//! Produces GitHub-flavoured Markdown. The PDF renderer feeds this output to
//! Pandoc and the HTML renderer reuses it block by block, so all three
//! formats share one layout.

use async_trait::async_trait;

use crate::domain::report::{
    truncate_label, BarChart, Block, ColumnKind, HeadingLevel, LayoutOptions, QuestionAnswer,
    ReportDocument, Table,
};
use crate::ports::{ExportFormat, RenderError, ReportRenderer};

/// Width of a full-scale text bar in the chart table.
const TEXT_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer {
    layout: LayoutOptions,
}

impl MarkdownReportRenderer {
    pub fn new(layout: LayoutOptions) -> Self {
        Self { layout }
    }

    /// Renders the whole document to a Markdown string.
    pub fn to_markdown(&self, document: &ReportDocument) -> String {
        let mut out = format!("# {}\n\n", escape_markdown(&document.title));
        for block in &document.blocks {
            self.push_block(&mut out, block);
        }
        out
    }

    /// Appends one block followed by a blank line.
    pub fn push_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                let marker = match level {
                    HeadingLevel::Section => "##",
                    HeadingLevel::Subsection => "###",
                };
                out.push_str(&format!("{} {}\n", marker, escape_markdown(text)));
            }
            Block::Paragraph { text } => {
                out.push_str(&escape_markdown(text));
                out.push('\n');
            }
            Block::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    if *ordered {
                        out.push_str(&format!("{}. {}\n", i + 1, escape_markdown(item)));
                    } else {
                        out.push_str(&format!("- {}\n", escape_markdown(item)));
                    }
                }
            }
            Block::Table(table) => self.push_table(out, table),
            Block::QuestionAnswer(qa) => push_question_answer(out, qa),
            Block::Chart(chart) => self.push_chart(out, chart),
        }
        out.push('\n');
    }

    fn push_table(&self, out: &mut String, table: &Table) {
        let headers: Vec<_> = table.columns.iter().map(|c| escape_cell(&c.header)).collect();
        out.push_str(&format!("| {} |\n", headers.join(" | ")));

        let rules: Vec<_> = table
            .columns
            .iter()
            .map(|c| match c.kind {
                ColumnKind::Label => ":---",
                ColumnKind::Value => ":---:",
            })
            .collect();
        out.push_str(&format!("|{}|\n", rules.join("|")));

        for row in &table.rows {
            let cells: Vec<_> = row
                .iter()
                .zip(&table.columns)
                .map(|(cell, column)| match column.kind {
                    ColumnKind::Label => {
                        escape_cell(&truncate_label(cell, self.layout.label_width))
                    }
                    ColumnKind::Value => escape_cell(cell),
                })
                .collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
    }

    fn push_chart(&self, out: &mut String, chart: &BarChart) {
        out.push_str(&format!("**{}**\n\n", escape_markdown(&chart.title)));
        out.push_str("| Domain | Average | |\n|:---|:---:|:---|\n");
        let span = chart.axis_max - chart.axis_min;
        for bar in &chart.bars {
            let filled = if span > 0.0 {
                (((bar.value - chart.axis_min) / span) * TEXT_BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&truncate_label(&bar.label, self.layout.label_width)),
                bar.value_label(),
                "█".repeat(filled.min(TEXT_BAR_WIDTH))
            ));
        }
    }
}

fn push_question_answer(out: &mut String, qa: &QuestionAnswer) {
    out.push_str(&format!("**{}**\n\n", escape_markdown(&qa.prompt)));
    if !qa.answered {
        out.push_str(&format!("*{}*\n", escape_markdown(&qa.answer)));
        return;
    }
    if qa.answer.is_empty() {
        out.push_str(">\n");
        return;
    }
    for line in qa.answer.lines() {
        out.push_str(&format!("> {}\n", escape_line(line)));
    }
}

/// Characters that start inline markup anywhere on a line.
///
/// `$`, `^` and `~` cover Pandoc's math, superscript and subscript syntax.
const INLINE_MARKUP: &[char] = &[
    '\\', '`', '*', '_', '[', ']', '<', '>', '&', '|', '~', '^', '$',
];

/// Characters that open a block when they lead a line.
const BLOCK_MARKERS: &[char] = &['#', '+', '-', '='];

/// Escapes text so every character renders literally, line by line.
pub(super) fn escape_markdown(text: &str) -> String {
    text.lines().map(escape_line).collect::<Vec<_>>().join("\n")
}

/// Escapes one line. Leading whitespace is dropped so the line cannot
/// become an indented code block.
fn escape_line(line: &str) -> String {
    let body = line.trim_start();
    let mut out = String::with_capacity(body.len() + 8);

    // `1.` or `1)` at the start would open an ordered list.
    let digits = body.chars().take_while(char::is_ascii_digit).count();
    let list_delimiter = match body[digits..].chars().next() {
        Some(c @ ('.' | ')')) if digits > 0 => Some((digits, c)),
        _ => None,
    };

    for (i, c) in body.char_indices() {
        let leads_block = i == 0 && BLOCK_MARKERS.contains(&c);
        let closes_list_number = list_delimiter == Some((i, c));
        if leads_block || closes_list_number || INLINE_MARKUP.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Makes text safe inside a single table cell.
fn escape_cell(text: &str) -> String {
    escape_line(&text.replace("\r\n", " ").replace(['\n', '\r'], " "))
}

#[async_trait]
impl ReportRenderer for MarkdownReportRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        Ok(self.to_markdown(document).into_bytes())
    }
}
