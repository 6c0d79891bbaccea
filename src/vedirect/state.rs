use serde::Serialize;

/// Position of the decoder inside the text protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ParserState {
    /// Between fields. Stray CR/LF are absorbed here.
    #[default]
    Idle,
    /// Accumulating a label until TAB (or `:` for a hex frame).
    ReadingLabel,
    /// Accumulating a value until CR/LF.
    ReadingValue,
    /// Inside a `:` hex frame; everything up to CR/LF is dropped.
    DiscardingBinaryFrame,
}
