//! Jump session state machine
//!
//! Owns the lifecycle of one in-progress motion: collecting search text,
//! showing markers, narrowing them keystroke by keystroke, and handing a
//! final cursor position back to the host.
//!
//! ## session/ Invariants
//!
//! - At most one motion is live at a time; triggering a new one replaces it.
//! - Every keystroke completes a full transition before the next arrives.
//! - Cancel is total: one keystroke back to the mode recorded at entry.
//! - The decoration list is non-empty only while markers are showing.
//! - "No matches", "still ambiguous", and "cancel" are transitions, never
//!   errors; the only recorded failures are search compilation and label
//!   capacity, and both abort the motion with the cursor untouched.

use crate::buffer::BufferView;
use crate::config::JumpSettings;
use crate::error::LeapError;
use crate::key::Key;
use crate::marker::{allocate, LabelTrie, Marker, NarrowResult, Target};
use crate::mode::Mode;
use crate::moves::{target_position, InputRule, MoveDef, PatternKind};
use crate::position::Position;
use crate::search::{locate, SearchPattern};
use crate::viewport::Viewport;

/// A selection's endpoints: `start` is the fixed anchor end, `end` the
/// active (moving) end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

/// The slice of host editor state this engine reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostState {
    pub mode: Mode,
    pub cursor: Position,
    pub selection: Option<Selection>,
}

/// Everything captured when a motion is triggered, carried until it ends.
#[derive(Debug, Clone, Copy)]
struct PendingMotion {
    def: &'static MoveDef,
    previous_mode: Mode,
    anchor: Position,
    selection: Option<Selection>,
}

/// Lifecycle of the in-progress motion.
#[derive(Debug)]
enum SessionState {
    Idle,
    /// Accumulating search text for an input-collecting motion
    CollectingInput {
        pending: PendingMotion,
        input: String,
    },
    /// Markers displayed, narrowing by label keys
    ShowingMarkers {
        pending: PendingMotion,
        markers: Vec<Marker>,
        trie: LabelTrie,
        accumulation: String,
    },
}

/// Owns all jump state for one editing context.
///
/// The host calls [`trigger`](JumpSession::trigger) when its dispatcher
/// resolves a jump trigger sequence, then routes every subsequent keystroke
/// through [`handle_key`](JumpSession::handle_key) while the returned mode
/// is one of the jump modes. Both return the next host state; failures are
/// absorbed here (motion aborted, prior mode restored) and recorded for
/// [`take_error`](JumpSession::take_error).
pub struct JumpSession {
    state: SessionState,
    last_error: Option<LeapError>,
}

impl Default for JumpSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            last_error: None,
        }
    }

    /// Whether no motion is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    /// Search text typed so far, while collecting input.
    pub fn pending_input(&self) -> Option<&str> {
        match &self.state {
            SessionState::CollectingInput { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Markers the renderer should draw right now. Empty unless markers are
    /// showing; already narrowed to the accumulated label prefix.
    pub fn decorations(&self) -> Vec<&Marker> {
        match &self.state {
            SessionState::ShowingMarkers {
                markers,
                accumulation,
                ..
            } => markers
                .iter()
                .filter(|m| m.label.starts_with(accumulation.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The failure that aborted the last motion, if any.
    pub fn take_error(&mut self) -> Option<LeapError> {
        self.last_error.take()
    }

    /// Start a motion. Replaces any motion already in progress.
    pub fn trigger(
        &mut self,
        def: &'static MoveDef,
        view: &impl BufferView,
        viewport: &Viewport,
        host: &HostState,
        settings: &JumpSettings,
    ) -> HostState {
        if !settings.enabled {
            return *host;
        }

        self.state = SessionState::Idle;
        let pending = PendingMotion {
            def,
            previous_mode: host.mode,
            anchor: host.cursor,
            selection: host.selection,
        };

        if def.input.is_some() {
            self.state = SessionState::CollectingInput {
                pending,
                input: String::new(),
            };
            return HostState {
                mode: Mode::JumpInput,
                ..*host
            };
        }

        self.run_search(pending, String::new(), view, viewport, host, settings)
    }

    /// Feed one keystroke into the live motion. A no-op when idle.
    pub fn handle_key(
        &mut self,
        key: Key,
        view: &impl BufferView,
        viewport: &Viewport,
        host: &HostState,
        settings: &JumpSettings,
    ) -> HostState {
        if !settings.enabled {
            return *host;
        }

        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => *host,
            SessionState::CollectingInput { pending, input } => {
                self.collect_input(pending, input, key, view, viewport, host, settings)
            }
            SessionState::ShowingMarkers {
                pending,
                markers,
                trie,
                accumulation,
            } => self.narrow_markers(
                pending,
                markers,
                trie,
                accumulation,
                key,
                host,
            ),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn collect_input(
        &mut self,
        pending: PendingMotion,
        mut input: String,
        key: Key,
        view: &impl BufferView,
        viewport: &Viewport,
        host: &HostState,
        settings: &JumpSettings,
    ) -> HostState {
        match key {
            Key::Escape => restore(&pending, host),
            Key::Backspace => {
                // Trimming past the start of the input cancels
                if input.pop().is_none() {
                    return restore(&pending, host);
                }
                self.state = SessionState::CollectingInput { pending, input };
                *host
            }
            Key::Enter => {
                let fires = matches!(pending.def.input, Some(InputRule::UntilEnter))
                    && !input.is_empty();
                if fires {
                    self.run_search(pending, input, view, viewport, host, settings)
                } else {
                    restore(&pending, host)
                }
            }
            Key::Char(ch) => {
                input.push(ch);
                if input_satisfied(pending.def, &input) {
                    self.run_search(pending, input, view, viewport, host, settings)
                } else {
                    self.state = SessionState::CollectingInput { pending, input };
                    *host
                }
            }
            // Keys with no meaning here are ignored, not fatal
            _ => {
                self.state = SessionState::CollectingInput { pending, input };
                *host
            }
        }
    }

    fn narrow_markers(
        &mut self,
        pending: PendingMotion,
        markers: Vec<Marker>,
        trie: LabelTrie,
        mut accumulation: String,
        key: Key,
        host: &HostState,
    ) -> HostState {
        let Key::Char(ch) = key else {
            // Escape, or any key that can never be part of a label
            return restore(&pending, host);
        };

        accumulation.push(ch);
        match trie.narrow(&accumulation) {
            NarrowResult::Resolved(index) => land(markers[index].position, &pending, host),
            NarrowResult::Exhausted => restore(&pending, host),
            NarrowResult::Pending(_) => {
                self.state = SessionState::ShowingMarkers {
                    pending,
                    markers,
                    trie,
                    accumulation,
                };
                *host
            }
        }
    }

    /// Run the locate -> allocate pipeline and enter the matching state.
    fn run_search(
        &mut self,
        pending: PendingMotion,
        input: String,
        view: &impl BufferView,
        viewport: &Viewport,
        host: &HostState,
        settings: &JumpSettings,
    ) -> HostState {
        let pattern = match pending.def.pattern {
            PatternKind::Literal => SearchPattern::Literal(input),
            PatternKind::WordStarts => SearchPattern::WordStarts,
            PatternKind::LineStarts => SearchPattern::LineStarts,
        };

        let matches = match locate(
            view,
            viewport,
            pending.anchor,
            &pattern,
            pending.def.constraint,
            settings,
        ) {
            Ok(matches) => matches,
            Err(err) => return self.abort(err, &pending, host),
        };

        if matches.is_empty() {
            return restore(&pending, host);
        }

        let targets: Vec<Target> = matches
            .iter()
            .map(|m| Target {
                matched: m.position,
                landing: target_position(m, pending.def.label_position),
            })
            .collect();

        if let [only] = targets.as_slice() {
            // A lone match needs no label; jump unless it sits on the anchor
            if only.matched == pending.anchor {
                return restore(&pending, host);
            }
            return land(only.landing, &pending, host);
        }

        let markers = match allocate(
            &targets,
            pending.anchor,
            &settings.alphabet(),
            &settings.excluded(),
        ) {
            Ok(markers) => markers,
            Err(err) => return self.abort(err, &pending, host),
        };
        if markers.is_empty() {
            return restore(&pending, host);
        }

        let trie = LabelTrie::build(&markers);
        self.state = SessionState::ShowingMarkers {
            pending,
            markers,
            trie,
            accumulation: String::new(),
        };
        HostState {
            mode: Mode::JumpMarker,
            ..*host
        }
    }

    /// Record a failure, drop the motion, and hand back the prior mode.
    fn abort(&mut self, err: LeapError, pending: &PendingMotion, host: &HostState) -> HostState {
        self.last_error = Some(err);
        self.state = SessionState::Idle;
        restore(pending, host)
    }
}

/// Leave the motion without moving: mode back to where it was.
fn restore(pending: &PendingMotion, host: &HostState) -> HostState {
    HostState {
        mode: pending.previous_mode,
        ..*host
    }
}

/// Finish the motion at `target`, restoring a visual selection's fixed end
/// before moving the active one.
fn land(target: Position, pending: &PendingMotion, host: &HostState) -> HostState {
    let mut next = *host;
    next.mode = pending.previous_mode;
    next.cursor = target;

    if pending.previous_mode.is_visual() {
        let start = pending
            .selection
            .map(|sel| sel.start)
            .unwrap_or(pending.anchor);
        next.selection = Some(Selection { start, end: target });
    }

    next
}

/// Whether a fixed-count input rule has enough characters to fire.
fn input_satisfied(def: &MoveDef, input: &str) -> bool {
    match def.input {
        Some(InputRule::Chars(count)) => input.chars().count() >= count,
        Some(InputRule::UntilEnter) => false,
        None => true,
    }
}
