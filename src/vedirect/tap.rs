//! Diagnostic tap for raw protocol lines.
//!
//! A tap receives each raw line as it passed the decoder, terminator
//! included. It only ever sees an immutable copy held apart from the
//! decoder's accumulators, so attaching or removing one cannot change what
//! gets decoded.

use crate::constants::{VEDIRECT_LF, VEDIRECT_MAX_TAP_LINE_LEN};

/// Observer of raw lines.
pub trait LineTap: Send {
    fn on_line(&mut self, line: &[u8]);
}

impl<F> LineTap for F
where
    F: FnMut(&[u8]) + Send,
{
    fn on_line(&mut self, line: &[u8]) {
        self(line)
    }
}

/// Line buffer in front of an optional tap.
pub(crate) struct TapChannel {
    sink: Option<Box<dyn LineTap>>,
    line: Vec<u8>,
}

impl TapChannel {
    pub(crate) fn new() -> Self {
        TapChannel {
            sink: None,
            line: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, tap: Box<dyn LineTap>) {
        self.line.clear();
        self.sink = Some(tap);
    }

    pub(crate) fn clear(&mut self) {
        self.sink = None;
        self.line.clear();
    }

    pub(crate) fn push(&mut self, byte: u8) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        self.line.push(byte);
        if byte == VEDIRECT_LF || self.line.len() >= VEDIRECT_MAX_TAP_LINE_LEN {
            sink.on_line(&self.line);
            self.line.clear();
        }
    }
}
