//! `_PAD_CFG_STRUCT` rendering and ignored-bit annotations.
//!
//! The raw constructor lists each word as `|`-joined flag expressions. Bits
//! without a symbolic flag are printed as `(1 << n)` so the constructor
//! always reproduces the exact word values.

use crate::builder::{MacroBuilder, Word};
use crate::config::{DecodeConfig, Verbosity};
use crate::fields::{dw0, InterruptRoute, StandbyState};
use crate::pad::PadOwnership;

/// What a flag listing is printed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Arguments of the constructor. `PAD_FUNC` and ownership are always
    /// listed.
    Constructor,
    /// A comment decoding only the ignored bits.
    IgnoredBits,
}

/// Rendered raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    pub text: String,
    pub stripped: bool,
}

/// Renders the raw constructor, preceded by the comments `config` asks for.
///
/// The builder's text still holds the discarded symbolic attempt.
pub fn render(
    b: &mut MacroBuilder<'_>,
    config: DecodeConfig,
    dw0_ignored: u32,
    dw1_ignored: u32,
) -> RawOutput {
    let mut lines = Vec::new();
    let reference = b.take_text();
    let any_ignored = dw0_ignored != 0 || dw1_ignored != 0;

    if config.verbosity >= Verbosity::Reference {
        lines.push(format!("/* {reference} */"));
    }
    if config.verbosity >= Verbosity::IgnoredMask && any_ignored {
        lines.push(ignored_mask_comment(dw0_ignored, dw1_ignored));
    }
    if config.verbosity >= Verbosity::DecodedIgnored {
        if dw0_ignored != 0 {
            b.set("/* (!) DW0 : ");
            b.with_word_value(Word::Dw0, dw0_ignored, |b| dw0_flags(b, Scope::IgnoredBits));
            b.add(" - IGNORED */");
            lines.push(b.take_text());
        }
        if dw1_ignored != 0 {
            b.set("/* (!) DW1 : ");
            b.with_word_value(Word::Dw1, dw1_ignored, |b| dw1_flags(b, Scope::IgnoredBits));
            b.add(" - IGNORED */");
            lines.push(b.take_text());
        }
    }

    let stripped = config.strip_ignored_fields && any_ignored;
    let mut dw0_value = b.dw0().value();
    let mut dw1_value = b.dw1().value();
    if stripped {
        dw0_value &= !dw0_ignored;
        dw1_value &= !dw1_ignored;
        log::warn!(
            "{}: raw constructor omits ignored bits DW0({dw0_ignored:#010x}) DW1({dw1_ignored:#010x})",
            b.pad().id,
        );
    }

    b.set("_PAD_CFG_STRUCT(").id().add(", ");
    b.with_word_value(Word::Dw0, dw0_value, |b| dw0_flags(b, Scope::Constructor));
    b.add(", ");
    let mark = b.text().len();
    b.with_word_value(Word::Dw1, dw1_value, |b| dw1_flags(b, Scope::Constructor));
    if b.text().len() == mark {
        b.add("0");
    }
    b.add("),");
    lines.push(b.take_text());

    RawOutput {
        text: lines.join("\n\t"),
        stripped,
    }
}

fn ignored_mask_comment(dw0_ignored: u32, dw1_ignored: u32) -> String {
    let dw1 = if dw1_ignored == 0 {
        String::new()
    } else {
        format!("DW1(0x{dw1_ignored:08x}) ")
    };
    format!("/* (!) NEED TO IGNORE THESE FIELDS: DW0(0x{dw0_ignored:08x}) {dw1}*/")
}

fn dw0_flags(b: &mut MacroBuilder<'_>, scope: Scope) {
    let view = *b.dw0();

    if view.pad_mode() != 0 || scope == Scope::Constructor {
        b.or_join().add("PAD_FUNC(").padfn().add(")");
    }
    if view.reset_config() != 0 && b.reset_source().is_some() {
        b.or_join().add("PAD_RESET(").rstsrc().add(")");
    }
    if view.rx_level_edge() != 0 {
        b.or_join().add("PAD_TRIG(").trig().add(")");
    }
    for route in InterruptRoute::ALL {
        if view.route(route) {
            b.or_join().add("PAD_IRQ_ROUTE(").route(route).add(")");
        }
    }
    if view.rx_invert() {
        b.or_join().add("PAD_RX_POL(").invert().add(")");
    }
    if view.buffer_disable() != 0 {
        b.or_join().add("PAD_BUF(").bufdis().add(")");
    }
    residual_bits(b, Word::Dw0, dw0::TX_STATE.mask());
    if view.tx_state() != 0 {
        b.claim(Word::Dw0, dw0::TX_STATE).or_join().add("1");
    }
}

fn dw1_flags(b: &mut MacroBuilder<'_>, scope: Scope) {
    let view = *b.dw1();

    if view.termination() != 0 && b.pull_symbol().is_some() {
        b.or_join().add("PAD_PULL(").pull().add(")");
    }
    if view.io_standby_state() != 0 && StandbyState::from_u4(view.io_standby_state()).is_some() {
        b.or_join().add("PAD_IOSSTATE(").iosstate().add(")");
    }
    if view.io_standby_termination() != 0 {
        b.or_join().add("PAD_IOSTERM(").iosterm().add(")");
    }
    if scope == Scope::Constructor && b.pad().ownership == PadOwnership::Driver {
        b.or_join().add("PAD_CFG_OWN_GPIO(").own().add(")");
    }
    residual_bits(b, Word::Dw1, 0);
}

/// Prints every set, writable, still unclaimed bit outside `exclude` as
/// `(1 << n)`, highest first.
fn residual_bits(b: &mut MacroBuilder<'_>, word: Word, exclude: u32) {
    let residual = b.view(word).ignored_fields() & !exclude;
    for bit in (0..32).rev() {
        if residual & (1 << bit) != 0 {
            b.or_join().add(&format!("(1 << {bit})"));
        }
    }
    b.claim_bits(word, residual);
}
