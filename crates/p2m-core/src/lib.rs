//! Pad configuration register decoder.
//!
//! Turns a pad's `PAD_CFG_DW0`/`PAD_CFG_DW1` register pair into the coreboot
//! GPIO macro that reproduces it, or into a raw `_PAD_CFG_STRUCT` constructor
//! when no macro covers every writable bit.
//!
//! Entry point is [`decode_pad`], or [`PadDecoder`] to decode the same pad
//! repeatedly.

/// Register field layout and symbol tables.
pub mod fields;
pub use fields::{
    BufferDisable, Field, InterruptRoute, ResetSource, StandbyState, StandbyTermination, Trigger,
};

/// Register word views with coverage accounting.
pub mod register;
pub use register::RegisterView;

/// Macro text buffer.
pub mod text;
pub use text::MacroText;

/// Decoder input.
pub mod pad;
pub use pad::{Pad, PadOwnership};

/// Decode diagnostics and parse errors.
pub mod diag;
pub use diag::{Diagnostic, ParseChipsetError, Severity};

/// Decode policy.
pub mod config;
pub use config::{DecodeConfig, Verbosity};

/// Field-level argument emitters.
pub mod builder;
pub use builder::{MacroBuilder, Word};

/// Chipset families and macro emitters.
pub mod chipset;
pub use chipset::Chipset;

/// Classification and the symbolic/raw decision.
pub mod engine;
pub use engine::{decode_pad, DecodedPad, MacroForm, PadDecoder, PadShape};

mod raw;

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use serde_json as _;
