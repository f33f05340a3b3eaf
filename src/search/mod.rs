//! Match location for jump motions
//!
//! Finds every viewport-visible occurrence of a pattern relative to an
//! anchor position. Supports:
//! - Literal search text (with ignorecase / smartcase handling)
//! - Word-start and line-start patterns
//! - Directional constraints (only before / only after the anchor)
//!
//! The scan is a single pass in buffer order; distance-from-anchor ordering
//! is the marker allocator's concern, not this module's.

use crate::buffer::{line_text, BufferView};
use crate::config::JumpSettings;
use crate::constants::errors;
use crate::error::LeapError;
use crate::position::Position;
use crate::viewport::Viewport;
use monster_regex::{parse_rift_format, Regex};
use unicode_width::UnicodeWidthChar;

/// Which side of the anchor a match may fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchConstraint {
    Unconstrained,
    /// Strictly after the anchor; a match sitting on the anchor is dropped.
    AfterAnchor,
    /// Strictly before the anchor.
    BeforeAnchor,
}

/// What to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPattern {
    /// Accumulated search text. A single space matches a whole run of
    /// blanks, so consecutive spaces produce one target.
    Literal(String),
    /// Runs of word-constituent characters, positioned at the first char.
    WordStarts,
    /// First character of each line, adjusted to the first non-blank column.
    LineStarts,
}

/// One located occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub position: Position,
    pub text: String,
}

/// Find all pattern occurrences visible in the viewport, honoring the
/// directional constraint. Matches come back in buffer order.
///
/// An empty pattern or an empty visible region yields an empty vec; the
/// caller treats zero matches as a no-op, not an error.
pub fn locate(
    view: &impl BufferView,
    viewport: &Viewport,
    anchor: Position,
    pattern: &SearchPattern,
    constraint: SearchConstraint,
    settings: &JumpSettings,
) -> Result<Vec<Match>, LeapError> {
    let Some(query) = build_query(pattern, settings) else {
        return Ok(Vec::new());
    };

    // Parse query using the rift format parser ("pattern/flags")
    let (compiled, flags) = parse_rift_format(&query).map_err(|e| {
        LeapError::search(errors::REGEX_PARSE_ERROR, format!("{:?}", e))
    })?;
    let re = Regex::new(&compiled, flags).map_err(|e| {
        LeapError::search(errors::REGEX_COMPILE_ERROR, format!("{:?}", e))
    })?;

    let mut matches = Vec::new();

    for line in viewport.line_range(view.line_count()) {
        let line_str = line_text(view, line);

        for m in re.find_all(&line_str) {
            // m.start is a byte offset within the line
            let col = line_str[..m.start].chars().count();
            let raw = Position::new(line, col);

            let keep = match constraint {
                SearchConstraint::Unconstrained => true,
                SearchConstraint::AfterAnchor => raw > anchor,
                SearchConstraint::BeforeAnchor => raw < anchor,
            };
            if !keep {
                continue;
            }

            if !viewport.contains_display_col(display_col(&line_str, col)) {
                continue;
            }

            let position = match pattern {
                SearchPattern::LineStarts => {
                    Position::new(line, first_non_blank_col(&line_str))
                }
                _ => raw,
            };

            matches.push(Match {
                position,
                text: line_str[m.start..m.end].to_string(),
            });
        }
    }

    Ok(matches)
}

/// Assemble the rift-format query ("pattern/flags") for a search pattern.
/// Returns None when there is nothing to search for.
fn build_query(pattern: &SearchPattern, settings: &JumpSettings) -> Option<String> {
    match pattern {
        SearchPattern::Literal(text) => {
            if text.is_empty() {
                return None;
            }
            if text == " " {
                // Consecutive blanks collapse into one target
                return Some("[ \t]{1,}/".to_string());
            }
            let flags = literal_flags(text, settings);
            Some(format!("{}/{}", escape_literal(text), flags))
        }
        SearchPattern::WordStarts => Some(r"\w{1,}/".to_string()),
        SearchPattern::LineStarts => Some("^./".to_string()),
    }
}

/// Literal searches honor `ignore_case`, except that `smart_case` turns it
/// back off when the search text carries an uppercase letter.
fn literal_flags(text: &str, settings: &JumpSettings) -> &'static str {
    let has_upper = text.chars().any(char::is_uppercase);
    if settings.ignore_case && !(settings.smart_case && has_upper) {
        "i"
    } else {
        ""
    }
}

/// Backslash-escape regex metacharacters and the query delimiter.
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '/' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^'
                | '$'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Column of the first non-blank character, or 0 for blank lines.
fn first_non_blank_col(line: &str) -> usize {
    line.chars()
        .position(|c| !c.is_whitespace())
        .unwrap_or(0)
}

/// Display column (unicode width) of a code-point column.
fn display_col(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}
