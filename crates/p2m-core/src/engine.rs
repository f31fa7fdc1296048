//! Pad classification and the symbolic/raw decision.

use crate::builder::{MacroBuilder, Word};
use crate::chipset::{has_standby_config, Chipset};
use crate::config::DecodeConfig;
use crate::diag::Diagnostic;
use crate::fields::{dw0, BufferDisable};
use crate::pad::Pad;
use crate::raw;
use crate::register::RegisterView;

/// Macro family chosen from `PMODE` and `GPIORXTXDIS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PadShape {
    /// `PMODE` selects a native function.
    NativeFunction,
    /// GPIO with the output buffer disabled.
    Gpi,
    /// GPIO with the input buffer disabled.
    Gpo,
    /// GPIO with both buffers disabled.
    NoConnect,
    /// GPIO with both buffers enabled.
    Bidirectional,
}

impl PadShape {
    /// Classifies a `PAD_CFG_DW0` view.
    #[must_use]
    pub const fn classify(dw0: &RegisterView) -> Self {
        if dw0.pad_mode() != 0 {
            return Self::NativeFunction;
        }
        match BufferDisable::from_u2(dw0.buffer_disable()) {
            BufferDisable::TxDisable => Self::Gpi,
            BufferDisable::RxDisable => Self::Gpo,
            BufferDisable::TxRxDisable => Self::NoConnect,
            BufferDisable::NoDisable => Self::Bidirectional,
        }
    }

    /// Short name used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NativeFunction => "nf",
            Self::Gpi => "gpi",
            Self::Gpo => "gpo",
            Self::NoConnect => "nc",
            Self::Bidirectional => "bidirect",
        }
    }
}

/// Which of the two output forms was printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum MacroForm {
    /// A named coreboot macro reproducing every writable bit.
    Symbolic,
    /// `_PAD_CFG_STRUCT(...)` with optional comments.
    Raw,
}

/// Result of decoding one pad.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedPad {
    /// Output text, terminated by `,`.
    pub text: String,
    /// Form of [`DecodedPad::text`].
    pub form: MacroForm,
    /// Macro family the pad was classified as.
    pub shape: PadShape,
    /// Writable DW0 bits the symbolic attempt did not reproduce.
    pub dw0_ignored: u32,
    /// Writable DW1 bits the symbolic attempt did not reproduce.
    pub dw1_ignored: u32,
    /// `true` when ignored bits were dropped from the raw constructor.
    pub stripped_fields: bool,
    /// Problems found while decoding.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodedPad {
    /// Returns `true` for the symbolic form.
    #[must_use]
    pub fn is_symbolic(&self) -> bool {
        self.form == MacroForm::Symbolic
    }

    /// Returns `true` when the symbolic attempt reproduced every writable
    /// bit of both words.
    #[must_use]
    pub const fn coverage_complete(&self) -> bool {
        self.dw0_ignored == 0 && self.dw1_ignored == 0
    }
}

/// Decoder bound to one pad and chipset.
///
/// The decoder may be run any number of times; every call starts from a
/// clean coverage state and the pad's register values are never changed.
#[derive(Debug, Clone)]
pub struct PadDecoder<'p> {
    builder: MacroBuilder<'p>,
}

impl<'p> PadDecoder<'p> {
    /// Binds a decoder to `pad`.
    #[must_use]
    pub const fn new(pad: &'p Pad, chipset: Chipset) -> Self {
        Self {
            builder: MacroBuilder::new(pad, chipset),
        }
    }

    /// Current `PAD_CFG_DW0` view.
    #[must_use]
    pub const fn dw0(&self) -> &RegisterView {
        self.builder.dw0()
    }

    /// Current `PAD_CFG_DW1` view.
    #[must_use]
    pub const fn dw1(&self) -> &RegisterView {
        self.builder.dw1()
    }

    /// Produces the macro text for the bound pad.
    pub fn generate(&mut self, config: DecodeConfig) -> DecodedPad {
        let b = &mut self.builder;
        b.begin();

        let chipset = b.chipset();
        let shape = PadShape::classify(b.dw0());
        log::debug!(
            "{}: dw0={:#010x} dw1={:#010x} shape={} chipset={chipset}",
            b.pad().id,
            b.dw0().value(),
            b.dw1().value(),
            shape.as_str(),
        );

        match shape {
            PadShape::NativeFunction => chipset.emit_native_function(b),
            PadShape::Gpi => chipset.emit_gpi(b),
            PadShape::Gpo => chipset.emit_gpo(b),
            PadShape::NoConnect => chipset.emit_no_connect(b),
            PadShape::Bidirectional => emit_bidirectional(b),
        }

        let dw0_ignored = b.dw0().ignored_fields();
        let dw1_ignored = b.dw1().ignored_fields();
        let covered = dw0_ignored == 0
            && dw1_ignored == 0
            && b.ownership_covered()
            && b.implications_hold();

        let (text, form, stripped_fields) = if covered && !config.force_raw {
            (b.take_text(), MacroForm::Symbolic, false)
        } else {
            log::debug!(
                "{}: raw form, ignored dw0={dw0_ignored:#010x} dw1={dw1_ignored:#010x}",
                b.pad().id,
            );
            let output = raw::render(b, config, dw0_ignored, dw1_ignored);
            (output.text, MacroForm::Raw, output.stripped)
        };

        DecodedPad {
            text,
            form,
            shape,
            dw0_ignored,
            dw1_ignored,
            stripped_fields,
            diagnostics: b.diagnostics().to_vec(),
        }
    }
}

/// Decodes `pad` once with a fresh decoder.
#[must_use]
pub fn decode_pad(pad: &Pad, chipset: Chipset, config: DecodeConfig) -> DecodedPad {
    PadDecoder::new(pad, chipset).generate(config)
}

/// `PAD_CFG_GPIO_BIDIRECT`, with the `_IOS` variant when standby fields are
/// set. Shared by every family.
fn emit_bidirectional(b: &mut MacroBuilder<'_>) {
    let ios = has_standby_config(b);
    b.claim(Word::Dw0, dw0::BUFFER_DISABLE)
        .set("PAD_CFG_GPIO_BIDIRECT");
    if ios {
        b.add("_IOS");
    }
    b.add("(").id().val().pull().rstsrc().trig();
    if ios {
        b.iosstate().iosterm();
    }
    b.own().add("),");
}
