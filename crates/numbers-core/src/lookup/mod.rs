//! Outline lookup: turns a sequence of number strokes into text.
//!
//! Each stroke writes its digits, then at most one decorator rewrites the
//! trailing digit run. Decorated strokes ask for a space before whatever the
//! next stroke writes; plain digits run together.


use tracing::{debug, debug_span};

use crate::decorate::decorate;
use crate::digits;
use crate::settings::{settings, Settings};
use crate::stroke::Stroke;
use crate::words::WordsError;

/// Why a stroke has no entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundReason {
    #[error("stroke has no digit and is not a decorator stroke")]
    InvalidStroke,
    #[error("unhandled control keys {0:?}")]
    UnconsumedControls(String),
    #[error("no digits to decorate")]
    MissingDigits,
    #[error("{0} cannot be written as a roman numeral")]
    RomanOutOfRange(String),
    #[error("cannot spell out number: {0}")]
    WordsUnavailable(#[from] WordsError),
    #[error("outline has {0} strokes")]
    OutlineLength(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no entry for {stroke:?}: {reason}")]
    NotFound {
        stroke: String,
        reason: NotFoundReason,
    },
}

impl LookupError {
    pub fn not_found(stroke: impl Into<String>, reason: NotFoundReason) -> Self {
        Self::NotFound {
            stroke: stroke.into(),
            reason,
        }
    }

    /// Every lookup failure means "this dictionary has no entry".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn reason(&self) -> &NotFoundReason {
        match self {
            Self::NotFound { reason, .. } => reason,
        }
    }
}

/// Text accumulated over an outline, plus whether the next stroke must be
/// preceded by a space.
#[derive(Debug, Default)]
pub(crate) struct RunningResult {
    text: String,
    pending_space: bool,
}

impl RunningResult {
    #[cfg(test)]
    pub(crate) fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            pending_space: false,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub(crate) fn schedule_space(&mut self) {
        self.pending_space = true;
    }

    #[cfg(test)]
    pub(crate) fn space_pending(&self) -> bool {
        self.pending_space
    }

    fn flush_pending_space(&mut self) {
        if self.pending_space {
            self.text.push(' ');
            self.pending_space = false;
        }
    }

    fn trailing_digits_start(&self) -> usize {
        let run = self
            .text
            .bytes()
            .rev()
            .take_while(u8::is_ascii_digit)
            .count();
        self.text.len() - run
    }

    /// The maximal run of ASCII digits at the end of the text.
    pub(crate) fn trailing_digits(&self) -> &str {
        &self.text[self.trailing_digits_start()..]
    }

    pub(crate) fn replace_trailing_digits(&mut self, with: &str) {
        let start = self.trailing_digits_start();
        self.text.replace_range(start.., with);
    }

    /// Surround the trailing digit run. No-op when there is no run.
    pub(crate) fn wrap_trailing_digits(&mut self, prefix: &str, suffix: &str) {
        let start = self.trailing_digits_start();
        if start == self.text.len() {
            return;
        }
        self.text.push_str(suffix);
        self.text.insert_str(start, prefix);
    }

    fn into_string(self) -> String {
        self.text
    }
}

/// Look up an outline using the global settings.
pub fn lookup<S: AsRef<str>>(strokes: &[S]) -> Result<String, LookupError> {
    lookup_with(strokes, settings())
}

/// Look up an outline, one stroke at a time.
///
/// Fails with [`LookupError::NotFound`] on the first stroke that is malformed,
/// carries an unhandled control combination, or cannot be decorated.
pub fn lookup_with<S: AsRef<str>>(
    strokes: &[S],
    settings: &Settings,
) -> Result<String, LookupError> {
    let _span = debug_span!("lookup", strokes = strokes.len()).entered();
    let mut out = RunningResult::default();
    for stroke in strokes {
        let raw = stroke.as_ref();
        lookup_stroke(&mut out, raw, settings).map_err(|reason| {
            debug!(stroke = raw, %reason, "no entry");
            LookupError::not_found(raw, reason)
        })?;
    }
    Ok(out.into_string())
}

fn lookup_stroke(
    out: &mut RunningResult,
    raw: &str,
    settings: &Settings,
) -> Result<(), NotFoundReason> {
    let _span = debug_span!("stroke", raw).entered();
    let stroke = Stroke::parse(raw);
    if !stroke.is_well_formed() {
        return Err(NotFoundReason::InvalidStroke);
    }

    out.flush_pending_space();
    out.push_str(&digits::render(&stroke));

    let mut controls = stroke.into_controls();
    decorate(out, &mut controls, settings)
}
