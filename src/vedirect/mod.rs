//! The vedirect module contains the text-protocol decoder and the pieces it
//! is built from: parser state, field dispatch, snapshot publication, the
//! diagnostic tap, counters and the async stream glue.

pub mod clock;
pub mod decoder;
pub mod fields;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod stream;
pub mod tap;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use decoder::FrameDecoder;
pub use fields::{apply_field, FieldOutcome};
pub use snapshot::{CodedText, OffReason, Snapshot, SnapshotHandle};
pub use state::ParserState;
pub use stats::DecoderStats;
pub use stream::{open_serial, pump, SerialConfig};
pub use tap::LineTap;
