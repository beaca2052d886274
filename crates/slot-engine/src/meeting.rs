//! Per-meeting aggregate record.
//!
//! The external store keeps one record per meeting code: who was invited,
//! who has responded, and the anonymized busy pairs accumulated from every
//! response so far. Serializing concurrent responses (atomic append) is
//! the store's job; this type only defines the record and its transitions.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::PlainInterval;

/// Length of generated meeting codes.
pub const CODE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub code: String,
    pub description: String,
    /// Minimum meeting length in minutes, applied when computing windows.
    pub duration_minutes: i64,
    /// Invitees who have not responded yet, alphabetized.
    pub participants: Vec<String>,
    /// Invitees who have submitted their busy times.
    pub checked_in: Vec<String>,
    /// Anonymized busy pairs, appended per response, never replaced.
    pub busy: Vec<PlainInterval>,
}

impl Meeting {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: i64,
        mut participants: Vec<String>,
    ) -> Self {
        participants.sort();
        Self {
            code: code.into(),
            description: description.into(),
            duration_minutes,
            participants,
            checked_in: Vec::new(),
            busy: Vec::new(),
        }
    }

    /// Record one participant's response: move them to the checked-in list
    /// and append their busy pairs.
    ///
    /// A name not on the invite list still has its busy time recorded —
    /// two people picking the same name must not lose data.
    pub fn record_response(&mut self, name: &str, busy: impl IntoIterator<Item = PlainInterval>) {
        if let Some(pos) = self.participants.iter().position(|p| p == name) {
            let name = self.participants.remove(pos);
            self.checked_in.push(name);
        }
        self.busy.extend(busy);
    }

    pub fn everyone_checked_in(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Draw a fresh random meeting code: [`CODE_LEN`] ASCII letters, re-drawn
/// until it collides with nothing in `taken`.
pub fn fresh_code<R: Rng>(rng: &mut R, taken: &HashSet<String>) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    loop {
        let code: String = (0..CODE_LEN)
            .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
            .collect();
        if !taken.contains(&code) {
            return code;
        }
    }
}
