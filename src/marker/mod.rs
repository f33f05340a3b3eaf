//! Marker allocation for jump motions
//!
//! Turns a located match set into labeled markers. Labels are drawn from a
//! fixed key alphabet and are prefix-free: no label is a strict prefix of
//! another, so typing keys narrows the set unambiguously. Matches nearer
//! the anchor receive shorter labels.
//!
//! ## Label construction
//!
//! With `n` matches over an alphabet of `A` usable keys:
//! - `n <= A`: every label is a single key, in alphabet order.
//! - otherwise: the smallest length `L` with `A^L >= n` is chosen (capped at
//!   [`markers::MAX_LABEL_LEN`]), as many leading keys as capacity allows
//!   stay single-key labels, and each remaining key becomes a group prefix
//!   followed by a fixed-width suffix counting over the full alphabet. A
//!   multi-key label therefore never starts with a key that was issued as a
//!   complete label, which is what keeps the set prefix-free.

pub mod trie;

pub use self::trie::{LabelTrie, NarrowResult};

use crate::constants::{errors, markers};
use crate::error::LeapError;
use crate::position::Position;

/// Where a marker comes from and where it lands.
///
/// Motion kinds may shift the landing spot relative to the raw match
/// ("till" stops short, "word end" lands on the last character); the raw
/// matched position is still what gets compared against the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Raw matched position
    pub matched: Position,
    /// Position the marker is displayed at and the cursor lands on
    pub landing: Position,
}

impl Target {
    /// A target that lands exactly on its match.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Target {
            matched: position,
            landing: position,
        }
    }
}

/// A labeled jump target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub label: String,
    pub position: Position,
}

/// Label every target that is not the anchor itself.
///
/// Targets nearest the anchor (same line first, then by column distance,
/// buffer order on ties) get the shortest labels and the earliest alphabet
/// keys. The returned list is sorted back into buffer order so decorations
/// are stable top-to-bottom.
///
/// Fails when the usable alphabet is empty or the target count exceeds what
/// [`markers::MAX_LABEL_LEN`]-length labels can cover.
pub fn allocate(
    targets: &[Target],
    anchor: Position,
    alphabet: &[char],
    excluded: &[char],
) -> Result<Vec<Marker>, LeapError> {
    let mut live: Vec<&Target> = targets
        .iter()
        .filter(|t| t.matched != anchor)
        .collect();
    if live.is_empty() {
        return Ok(Vec::new());
    }

    let keys: Vec<char> = alphabet
        .iter()
        .copied()
        .filter(|k| !excluded.contains(k))
        .collect();
    if keys.is_empty() {
        return Err(LeapError::allocation(
            errors::NO_MARKER_KEYS,
            "no usable marker keys after exclusions",
        ));
    }

    live.sort_by_key(|t| (t.matched.distance(anchor), t.matched));

    let codes = label_codes(live.len(), &keys)?;
    let mut allocated: Vec<Marker> = live
        .iter()
        .zip(codes)
        .map(|(target, label)| Marker {
            label,
            position: target.landing,
        })
        .collect();

    allocated.sort_by_key(|m| m.position);
    Ok(allocated)
}

/// Build `n` prefix-free codes over `keys`, shortest first.
fn label_codes(n: usize, keys: &[char]) -> Result<Vec<String>, LeapError> {
    let a = keys.len();
    if n <= a {
        return Ok(keys[..n].iter().map(ToString::to_string).collect());
    }
    if a < 2 {
        return Err(LeapError::allocation(
            errors::LABEL_CAPACITY,
            format!("{} matches cannot be labeled with one key", n),
        ));
    }

    // Smallest label length whose full tree covers n
    let mut group_cap = a; // a^(len - 1)
    let mut len = 2;
    while group_cap.saturating_mul(a) < n {
        group_cap = group_cap.saturating_mul(a);
        len += 1;
        if len > markers::MAX_LABEL_LEN {
            return Err(LeapError::allocation(
                errors::LABEL_CAPACITY,
                format!(
                    "{} matches exceed label capacity for a {}-key alphabet",
                    n, a
                ),
            ));
        }
    }

    // Keep as many single-key codes as capacity allows; the rest of the
    // alphabet becomes group prefixes.
    let mut singles = a - 1;
    while singles + (a - singles) * group_cap < n {
        singles -= 1;
    }

    let mut codes: Vec<String> = keys[..singles].iter().map(ToString::to_string).collect();
    let mut remaining = n - singles;
    for &prefix in &keys[singles..] {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(group_cap);
        for index in 0..take {
            codes.push(group_code(prefix, index, len - 1, keys));
        }
        remaining -= take;
    }

    Ok(codes)
}

/// The `index`-th code in a prefix group: the prefix key followed by
/// `width` suffix keys counting in base `keys.len()`.
fn group_code(prefix: char, mut index: usize, width: usize, keys: &[char]) -> String {
    let mut suffix = vec![keys[0]; width];
    for slot in (0..width).rev() {
        suffix[slot] = keys[index % keys.len()];
        index /= keys.len();
    }

    let mut code = String::with_capacity(width + 1);
    code.push(prefix);
    code.extend(suffix);
    code
}
