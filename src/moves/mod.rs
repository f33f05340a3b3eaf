//! Move-definition registry
//!
//! Every supported motion kind is one row of declarative data: how its
//! search text is collected, what pattern it searches for, which side of
//! the anchor it looks on, and where the marker (and cursor) land relative
//! to the raw match. A single generic executor in the session drives all
//! of them; there is no per-motion code.

use crate::position::Position;
use crate::search::{Match, SearchConstraint};

/// How a motion collects its search text, if it needs any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRule {
    /// Fire as soon as this many characters have been typed
    Chars(usize),
    /// Accumulate until Enter
    UntilEnter,
}

/// What the motion searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// The collected search text, matched literally
    Literal,
    /// Beginnings of word-character runs
    WordStarts,
    /// First non-blank column of each line
    LineStarts,
}

/// Where the marker and the resolved cursor land relative to the raw match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    /// On the first matched character
    MatchStart,
    /// On the last matched character
    MatchEnd,
    /// One column before the match ("till" forward)
    OneBefore,
    /// One column after the match ("till" backward)
    OneAfter,
}

/// One motion kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDef {
    /// Trigger keys, as resolved by the host dispatcher after its leader
    /// prefix
    pub trigger: &'static str,
    pub input: Option<InputRule>,
    pub pattern: PatternKind,
    pub constraint: SearchConstraint,
    pub label_position: LabelPosition,
}

/// All supported motions.
pub const MOVE_DEFS: &[MoveDef] = &[
    // char search (bidirectional)
    MoveDef {
        trigger: "s",
        input: Some(InputRule::Chars(1)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::Unconstrained,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "2s",
        input: Some(InputRule::Chars(2)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::Unconstrained,
        label_position: LabelPosition::MatchStart,
    },
    // find
    MoveDef {
        trigger: "f",
        input: Some(InputRule::Chars(1)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "F",
        input: Some(InputRule::Chars(1)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "2f",
        input: Some(InputRule::Chars(2)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "2F",
        input: Some(InputRule::Chars(2)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::MatchStart,
    },
    // till
    MoveDef {
        trigger: "t",
        input: Some(InputRule::Chars(1)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::OneBefore,
    },
    MoveDef {
        trigger: "T",
        input: Some(InputRule::Chars(1)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::OneAfter,
    },
    MoveDef {
        trigger: "2t",
        input: Some(InputRule::Chars(2)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::OneBefore,
    },
    MoveDef {
        trigger: "2T",
        input: Some(InputRule::Chars(2)),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::OneAfter,
    },
    // free-form search
    MoveDef {
        trigger: "/",
        input: Some(InputRule::UntilEnter),
        pattern: PatternKind::Literal,
        constraint: SearchConstraint::Unconstrained,
        label_position: LabelPosition::MatchStart,
    },
    // words
    MoveDef {
        trigger: "w",
        input: None,
        pattern: PatternKind::WordStarts,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "b",
        input: None,
        pattern: PatternKind::WordStarts,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "e",
        input: None,
        pattern: PatternKind::WordStarts,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::MatchEnd,
    },
    MoveDef {
        trigger: "ge",
        input: None,
        pattern: PatternKind::WordStarts,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::MatchEnd,
    },
    // lines
    MoveDef {
        trigger: "j",
        input: None,
        pattern: PatternKind::LineStarts,
        constraint: SearchConstraint::AfterAnchor,
        label_position: LabelPosition::MatchStart,
    },
    MoveDef {
        trigger: "k",
        input: None,
        pattern: PatternKind::LineStarts,
        constraint: SearchConstraint::BeforeAnchor,
        label_position: LabelPosition::MatchStart,
    },
];

/// Look up a motion by its trigger keys.
#[must_use]
pub fn find_move(trigger: &str) -> Option<&'static MoveDef> {
    MOVE_DEFS.iter().find(|def| def.trigger == trigger)
}

/// Where the marker for a match goes, per the motion's label-position rule.
///
/// "Till" motions stop one column short of the match on their side of the
/// anchor: one before when jumping forward, one after when jumping
/// backward.
#[must_use]
pub fn target_position(m: &Match, rule: LabelPosition) -> Position {
    let pos = m.position;
    match rule {
        LabelPosition::MatchStart => pos,
        LabelPosition::MatchEnd => Position::new(
            pos.line,
            pos.col + m.text.chars().count().saturating_sub(1),
        ),
        LabelPosition::OneBefore => Position::new(pos.line, pos.col.saturating_sub(1)),
        LabelPosition::OneAfter => Position::new(pos.line, pos.col + 1),
    }
}
