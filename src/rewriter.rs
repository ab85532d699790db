//!
//! Line-scanning rewriter that converts `sh '''` shell step blocks to `sh """`.
//!
//! The scan is a single forward pass over `\n`-separated lines with one piece of
//! state: whether a block opened with the source delimiter is still waiting for
//! its closing delimiter. Everything outside the recognised delimiters passes
//! through byte-for-byte.

use crate::quote_style::QuoteStyle;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    #[error("Marker must not be empty")]
    EmptyMarker,
    #[error("Marker must not contain line breaks: {0:?}")]
    MultilineMarker(String),
    #[error("Source and target quote styles are both {0}")]
    SameStyle(QuoteStyle),
}

/// What to look for and what to turn it into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteOptions {
    /// Step name that introduces a block, e.g. `sh`
    pub marker: String,
    /// Delimiter style being replaced
    pub from: QuoteStyle,
    /// Delimiter style written in its place
    pub to: QuoteStyle,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            marker: "sh".to_string(),
            from: QuoteStyle::Single,
            to: QuoteStyle::Double,
        }
    }
}

impl RewriteOptions {
    pub fn validate(&self) -> Result<(), RewriteError> {
        if self.marker.is_empty() {
            return Err(RewriteError::EmptyMarker);
        }
        if self.marker.contains(['\n', '\r']) {
            return Err(RewriteError::MultilineMarker(self.marker.clone()));
        }
        if self.from == self.to {
            return Err(RewriteError::SameStyle(self.from));
        }
        Ok(())
    }

    /// Opening pattern, e.g. `sh '''`
    pub fn opening_pattern(&self) -> String {
        format!("{} {}", self.marker, self.from.delimiter())
    }

    /// Replacement for the opening pattern, e.g. `sh """`
    pub fn opening_replacement(&self) -> String {
        format!("{} {}", self.marker, self.to.delimiter())
    }
}

/// One block opened during the pass (1-indexed line numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockConversion {
    pub open_line: usize,
    /// `None` when the input ended before a closing delimiter was seen
    pub close_line: Option<usize>,
}

/// Result of a rewrite pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub conversions: Vec<BlockConversion>,
    /// Line of the opening that was still unmatched at end of input
    pub unclosed_block: Option<usize>,
    changed: bool,
}

impl Rewrite {
    /// Whether the output differs from the input
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Rewrite every opening pattern and its matching closing delimiter.
///
/// Per line, an opening is only recognised outside a block and a closing only
/// inside one; the two branches are exclusive, so a line holding both an
/// opening and a closing delimiter opens a block that stays open. All
/// occurrences of the matched pattern on that line are replaced. Callers are
/// expected to pass validated options.
pub fn rewrite(content: &str, options: &RewriteOptions) -> Rewrite {
    let opening = options.opening_pattern();
    let opening_replacement = options.opening_replacement();
    let closing = options.from.delimiter();
    let closing_replacement = options.to.delimiter();

    let mut in_block = false;
    let mut conversions: Vec<BlockConversion> = Vec::new();
    let mut lines: Vec<Cow<'_, str>> = Vec::new();

    for (idx, line) in content.split('\n').enumerate() {
        let line_num = idx + 1;

        if !in_block && line.contains(opening.as_str()) {
            log::debug!("[rewriter] opening block at line {line_num}");
            lines.push(Cow::Owned(line.replace(opening.as_str(), &opening_replacement)));
            conversions.push(BlockConversion {
                open_line: line_num,
                close_line: None,
            });
            in_block = true;
        } else if in_block && line.contains(closing) {
            log::debug!("[rewriter] closing block at line {line_num}");
            lines.push(Cow::Owned(line.replace(closing, closing_replacement)));
            if let Some(last) = conversions.last_mut() {
                last.close_line = Some(line_num);
            }
            in_block = false;
        } else {
            lines.push(Cow::Borrowed(line));
        }
    }

    let unclosed_block = if in_block {
        conversions.last().map(|c| c.open_line)
    } else {
        None
    };

    let output = lines.join("\n");
    let changed = output != content;

    Rewrite {
        content: output,
        conversions,
        unclosed_block,
        changed,
    }
}

/// Validated rewriter bound to one set of options
#[derive(Debug, Clone)]
pub struct Rewriter {
    options: RewriteOptions,
}

impl Rewriter {
    pub fn new(options: RewriteOptions) -> Result<Self, RewriteError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn rewrite(&self, content: &str) -> Rewrite {
        rewrite(content, &self.options)
    }
}
