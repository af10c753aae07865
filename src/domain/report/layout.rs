//! Fixed-width layout helpers.

use std::borrow::Cow;

const ELLIPSIS: char = '…';

/// Layout parameters for fixed-width renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Maximum characters for a label cell before it is truncated.
    pub label_width: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { label_width: 60 }
    }
}

/// Shortens `label` to at most `width` characters, ending in an ellipsis.
///
/// Labels that already fit are returned unchanged. Counts `char`s, so
/// multi-byte text is never split inside a code point.
pub fn truncate_label(label: &str, width: usize) -> Cow<'_, str> {
    if label.chars().count() <= width {
        return Cow::Borrowed(label);
    }
    if width == 0 {
        return Cow::Owned(String::new());
    }

    let mut shortened: String = label.chars().take(width - 1).collect();
    let trimmed_len = shortened.trim_end().len();
    shortened.truncate(trimmed_len);
    shortened.push(ELLIPSIS);
    Cow::Owned(shortened)
}
