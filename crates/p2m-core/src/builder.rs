//! Per-field macro argument emitters.
//!
//! Every emitter reads its field through a [`RegisterView`], maps the code to
//! a symbol, appends it as the next argument, and claims the field's bits.
//! A field only counts as reproduced once it appears in the text.

use crate::chipset::Chipset;
use crate::diag::Diagnostic;
use crate::fields::{
    dw0, dw1, BufferDisable, Field, InterruptRoute, ResetSource, StandbyState,
    StandbyTermination, Trigger,
};
use crate::pad::{Pad, PadOwnership};
use crate::register::RegisterView;
use crate::text::MacroText;

/// Selects one of the two configuration words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Word {
    Dw0,
    Dw1,
}

/// Macro text under construction for one pad, with per-word coverage.
#[derive(Debug, Clone)]
pub struct MacroBuilder<'p> {
    pad: &'p Pad,
    chipset: Chipset,
    text: MacroText,
    dw0: RegisterView,
    dw1: RegisterView,
    ownership_emitted: bool,
    implied_mismatch: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> MacroBuilder<'p> {
    /// Creates a builder over `pad` with empty text and no claims.
    #[must_use]
    pub const fn new(pad: &'p Pad, chipset: Chipset) -> Self {
        Self {
            pad,
            chipset,
            text: MacroText::new(),
            dw0: RegisterView::dw0(pad.dw0),
            dw1: RegisterView::dw1(pad.dw1),
            ownership_emitted: false,
            implied_mismatch: false,
            diagnostics: Vec::new(),
        }
    }

    /// Drops text, claims, and diagnostics from a previous pass.
    pub fn begin(&mut self) {
        self.text = MacroText::new();
        self.dw0.clear_claims();
        self.dw1.clear_claims();
        self.ownership_emitted = false;
        self.implied_mismatch = false;
        self.diagnostics.clear();
    }

    /// Pad being decoded.
    #[must_use]
    pub const fn pad(&self) -> &'p Pad {
        self.pad
    }

    /// Chipset family supplying the symbol tables.
    #[must_use]
    pub const fn chipset(&self) -> Chipset {
        self.chipset
    }

    /// Text built so far.
    #[must_use]
    pub const fn text(&self) -> &MacroText {
        &self.text
    }

    /// Moves the text out, leaving the buffer empty.
    pub fn take_text(&mut self) -> String {
        self.text.take()
    }

    /// `PAD_CFG_DW0` view.
    #[must_use]
    pub const fn dw0(&self) -> &RegisterView {
        &self.dw0
    }

    /// `PAD_CFG_DW1` view.
    #[must_use]
    pub const fn dw1(&self) -> &RegisterView {
        &self.dw1
    }

    /// View of the selected word.
    #[must_use]
    pub const fn view(&self, word: Word) -> &RegisterView {
        match word {
            Word::Dw0 => &self.dw0,
            Word::Dw1 => &self.dw1,
        }
    }

    const fn view_mut(&mut self, word: Word) -> &mut RegisterView {
        match word {
            Word::Dw0 => &mut self.dw0,
            Word::Dw1 => &mut self.dw1,
        }
    }

    /// Diagnostics reported during the current pass.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` unless the pad is driver owned and no emitted argument
    /// says so.
    #[must_use]
    pub fn ownership_covered(&self) -> bool {
        self.pad.ownership == PadOwnership::Acpi || self.ownership_emitted
    }

    /// Returns `false` once a macro name fixed a field the register disagrees
    /// with, even when the disagreeing code is zero.
    #[must_use]
    pub const fn implications_hold(&self) -> bool {
        !self.implied_mismatch
    }

    /// Records a diagnostic and forwards it to the log.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }

    /// Runs `f` with the selected word temporarily rewritten to `value` and
    /// no claims. The word's value and claims are restored afterwards.
    pub fn with_word_value<R>(
        &mut self,
        word: Word,
        value: u32,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = *self.view(word);
        {
            let view = self.view_mut(word);
            view.set_value(value);
            view.clear_claims();
        }
        let result = f(self);
        *self.view_mut(word) = saved;
        result
    }

    /// Claims `field` of the selected word.
    pub const fn claim(&mut self, word: Word, field: Field) -> &mut Self {
        self.view_mut(word).claim_field(field);
        self
    }

    /// Claims arbitrary bits of the selected word.
    pub const fn claim_bits(&mut self, word: Word, mask: u32) -> &mut Self {
        self.view_mut(word).claim(mask);
        self
    }

    /// Drops every claim on the selected word.
    pub const fn clear_claims(&mut self, word: Word) -> &mut Self {
        self.view_mut(word).clear_claims();
        self
    }

    /// Claims `RXEVCFG` when the macro name fixes the trigger to `trigger`.
    pub fn imply_trigger(&mut self, trigger: Trigger) -> &mut Self {
        let holds = Trigger::from_u2(self.dw0.rx_level_edge()) == trigger;
        self.imply(Word::Dw0, dw0::RX_LEVEL_EDGE, holds, "RXEVCFG", trigger.as_str())
    }

    /// Claims `IOSSTATE` when the macro name fixes the standby state to
    /// `state`.
    pub fn imply_standby_state(&mut self, state: StandbyState) -> &mut Self {
        let holds = StandbyState::from_u4(self.dw1.io_standby_state()) == Some(state);
        self.imply(Word::Dw1, dw1::IO_STANDBY_STATE, holds, "IOSSTATE", state.as_str())
    }

    /// Claims `PADRSTCFG` when the macro name fixes the reset source to
    /// `source` and the register decodes to it.
    pub fn imply_reset(&mut self, source: ResetSource) -> &mut Self {
        let holds = self.reset_source() == Some(source);
        self.imply(Word::Dw0, dw0::PAD_RESET_CONFIG, holds, "PADRSTCFG", source.as_str())
    }

    fn imply(
        &mut self,
        word: Word,
        field: Field,
        holds: bool,
        name: &'static str,
        expected: &'static str,
    ) -> &mut Self {
        if holds {
            self.view_mut(word).claim_field(field);
        } else {
            self.implied_mismatch = true;
            let pad = self.pad.id.clone();
            self.report(Diagnostic::ImpliedFieldMismatch {
                pad,
                field: name,
                expected,
            });
        }
        self
    }

    /// Reset source the current `PADRSTCFG` code maps to, if defined.
    #[must_use]
    pub fn reset_source(&self) -> Option<ResetSource> {
        self.chipset.reset_source(self.pad, self.dw0.reset_config())
    }

    /// Pull name the current `TERM` code maps to, if defined.
    #[must_use]
    pub const fn pull_symbol(&self) -> Option<&'static str> {
        self.chipset.pull(self.dw1.termination())
    }

    /// Replaces the text with `text`.
    pub fn set(&mut self, text: &str) -> &mut Self {
        self.text.reset(text);
        self
    }

    /// Appends `text` verbatim.
    pub fn add(&mut self, text: &str) -> &mut Self {
        self.text.append(text);
        self
    }

    /// Appends `text` as the next argument.
    pub fn arg(&mut self, text: &str) -> &mut Self {
        self.text.argument(text);
        self
    }

    /// Appends `" | "` after a closed flag expression.
    pub fn or_join(&mut self) -> &mut Self {
        self.text.or_join();
        self
    }

    /// Pad identifier argument.
    pub fn id(&mut self) -> &mut Self {
        self.text.argument(&self.pad.id);
        self
    }

    /// Output value argument (`GPIOTXSTATE`).
    pub fn val(&mut self) -> &mut Self {
        let state = self.dw0.tx_state();
        self.dw0.claim_field(dw0::TX_STATE);
        self.arg(if state == 0 { "0" } else { "1" })
    }

    /// Trigger mode argument (`RXEVCFG`).
    pub fn trig(&mut self) -> &mut Self {
        let trigger = Trigger::from_u2(self.dw0.rx_level_edge());
        self.dw0.claim_field(dw0::RX_LEVEL_EDGE);
        self.arg(trigger.as_str())
    }

    /// Polarity inversion argument (`RXINV`).
    pub fn invert(&mut self) -> &mut Self {
        let inverted = self.dw0.rx_invert();
        self.dw0.claim_field(dw0::RX_INVERT);
        self.arg(if inverted { "INVERT" } else { "NONE" })
    }

    /// Buffer disable argument (`GPIORXTXDIS`).
    pub fn bufdis(&mut self) -> &mut Self {
        let state = BufferDisable::from_u2(self.dw0.buffer_disable());
        self.dw0.claim_field(dw0::BUFFER_DISABLE);
        self.arg(state.as_str())
    }

    /// Interrupt route argument for an enabled route.
    pub fn route(&mut self, route: InterruptRoute) -> &mut Self {
        self.dw0.claim_field(route.field());
        self.arg(route.as_str())
    }

    /// Host ownership argument.
    pub fn own(&mut self) -> &mut Self {
        self.ownership_emitted = true;
        self.arg(self.pad.ownership.as_str())
    }

    /// Native function argument (`PMODE`).
    ///
    /// `GPIO` is appended without a separator; it only appears inside
    /// `PAD_FUNC(...)`.
    pub fn padfn(&mut self) -> &mut Self {
        let mode = self.dw0.pad_mode();
        self.dw0.claim_field(dw0::PAD_MODE);
        if mode == 0 {
            return self.add("GPIO");
        }
        self.arg(&format!("NF{mode}"))
    }

    /// I/O standby state argument (`IOSSTATE`). Undefined codes print
    /// `IGNORE` and stay unclaimed.
    pub fn iosstate(&mut self) -> &mut Self {
        let code = self.dw1.io_standby_state();
        if let Some(state) = StandbyState::from_u4(code) {
            self.dw1.claim_field(dw1::IO_STANDBY_STATE);
            return self.arg(state.as_str());
        }
        self.dw1.unclaim_field(dw1::IO_STANDBY_STATE);
        self.report(Diagnostic::UndefinedStandbyState {
            pad: self.pad.id.clone(),
            code,
        });
        self.arg(StandbyState::Ignore.as_str())
    }

    /// I/O standby termination argument (`IOSTERM`).
    pub fn iosterm(&mut self) -> &mut Self {
        let term = StandbyTermination::from_u2(self.dw1.io_standby_termination());
        self.dw1.claim_field(dw1::IO_STANDBY_TERMINATION);
        self.arg(term.as_str())
    }

    /// Reset source argument (`PADRSTCFG`). A reserved code prints the
    /// chipset default and leaves the field unclaimed.
    pub fn rstsrc(&mut self) -> &mut Self {
        if let Some(source) = self.reset_source() {
            self.dw0.claim_field(dw0::PAD_RESET_CONFIG);
            return self.arg(source.as_str());
        }
        let substitute = self.chipset.default_reset_source().as_str();
        self.dw0.unclaim_field(dw0::PAD_RESET_CONFIG);
        self.report(Diagnostic::ReservedResetSource {
            pad: self.pad.id.clone(),
            code: self.dw0.reset_config(),
            substitute,
        });
        self.arg(substitute)
    }

    /// Pull resistor argument (`TERM`). An invalid code prints `INVALID` and
    /// stays unclaimed.
    pub fn pull(&mut self) -> &mut Self {
        if let Some(name) = self.pull_symbol() {
            self.dw1.claim_field(dw1::TERMINATION);
            return self.arg(name);
        }
        self.dw1.unclaim_field(dw1::TERMINATION);
        self.report(Diagnostic::InvalidPull {
            pad: self.pad.id.clone(),
            code: self.dw1.termination(),
        });
        self.arg("INVALID")
    }
}

#[cfg(test)]
mod tests {
    use super::{MacroBuilder, Word};
    use crate::chipset::Chipset;
    use crate::diag::Diagnostic;
    use crate::fields::{dw0, dw1, ResetSource, StandbyState, Trigger};
    use crate::pad::{Pad, PadOwnership};

    #[test]
    fn emitted_arguments_claim_their_fields() {
        let pad = Pad::new("GPP_A0", 0x4200_0001, 0x0000_3000);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.set("M(").id().val().pull().rstsrc().trig().add("),");

        assert_eq!(b.text().as_str(), "M(GPP_A0, 1, UP_20K, DEEP, EDGE_SINGLE),");
        assert!(b.dw0().coverage_complete());
        assert!(b.dw1().coverage_complete());
    }

    #[test]
    fn unemitted_fields_remain_ignored() {
        let pad = Pad::new("GPP_A0", 0x0080_0001, 0);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.set("M(").id().val().add("),");
        assert_eq!(b.dw0().ignored_fields(), dw0::RX_INVERT.mask());
    }

    #[test]
    fn invalid_pull_prints_invalid_and_stays_unclaimed() {
        let pad = Pad::new("GPP_C3", 0, dw1::TERMINATION.place(0x7));
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.set("M(").id().pull().add("),");

        assert_eq!(b.text().as_str(), "M(GPP_C3, INVALID),");
        assert_eq!(b.dw1().ignored_fields(), dw1::TERMINATION.mask() & 0x1c00);
        assert_eq!(
            b.diagnostics(),
            [Diagnostic::InvalidPull {
                pad: "GPP_C3".into(),
                code: 0x7
            }]
        );
    }

    #[test]
    fn reserved_reset_prints_default_and_unclaims() {
        let pad = Pad::new("GPP_A2", dw0::PAD_RESET_CONFIG.place(0x3), 0);
        let mut b = MacroBuilder::new(&pad, Chipset::Lewisburg);
        b.claim(Word::Dw0, dw0::PAD_RESET_CONFIG);
        b.set("M(").rstsrc().add("),");

        assert_eq!(b.text().as_str(), "M(RSMRST),");
        assert_eq!(b.dw0().ignored_fields(), 0xc000_0000);
        assert!(matches!(
            b.diagnostics(),
            [Diagnostic::ReservedResetSource { code: 0x3, .. }]
        ));
    }

    #[test]
    fn undefined_standby_state_prints_ignore() {
        let pad = Pad::new("GPIO_10", 0, dw1::IO_STANDBY_STATE.place(0xb));
        let mut b = MacroBuilder::new(&pad, Chipset::ApolloLake);
        b.set("M(").iosstate().iosterm().add("),");
        assert_eq!(b.text().as_str(), "M(IGNORE, SAME),");
        assert!(!b.dw1().coverage_complete());
    }

    #[test]
    fn implied_trigger_claims_only_matching_codes() {
        let off = Pad::new("GPP_C5", dw0::RX_LEVEL_EDGE.place(Trigger::Off.code()), 0);
        let mut b = MacroBuilder::new(&off, Chipset::SunrisePoint);
        b.imply_trigger(Trigger::Off);
        assert!(b.dw0().coverage_complete());
        assert!(b.implications_hold());

        let edge = Pad::new("GPP_C5", dw0::RX_LEVEL_EDGE.place(Trigger::EdgeSingle.code()), 0);
        let mut b = MacroBuilder::new(&edge, Chipset::SunrisePoint);
        b.imply_trigger(Trigger::Off);
        assert!(!b.dw0().coverage_complete());
        assert!(!b.implications_hold());
    }

    #[test]
    fn zero_code_that_contradicts_the_name_is_recorded() {
        let pad = Pad::new("GPP_D0", 0, 0);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.imply_trigger(Trigger::Off)
            .imply_reset(ResetSource::Deep)
            .imply_standby_state(StandbyState::TxDRxE);

        assert!(b.dw0().coverage_complete());
        assert!(b.dw1().coverage_complete());
        assert!(!b.implications_hold());
        assert_eq!(
            b.diagnostics(),
            [
                Diagnostic::ImpliedFieldMismatch {
                    pad: "GPP_D0".into(),
                    field: "RXEVCFG",
                    expected: "OFF",
                },
                Diagnostic::ImpliedFieldMismatch {
                    pad: "GPP_D0".into(),
                    field: "PADRSTCFG",
                    expected: "DEEP",
                },
                Diagnostic::ImpliedFieldMismatch {
                    pad: "GPP_D0".into(),
                    field: "IOSSTATE",
                    expected: "TxDRxE",
                },
            ]
        );

        b.begin();
        assert!(b.implications_hold());
    }

    #[test]
    fn padfn_prints_gpio_without_separator() {
        let pad = Pad::new("GPP_A0", 0, 0);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.add("PAD_FUNC(").padfn().add(")");
        assert_eq!(b.text().as_str(), "PAD_FUNC(GPIO)");

        let pad = Pad::new("GPP_A0", dw0::PAD_MODE.place(0x3), 0);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.add("PAD_FUNC(").padfn().add(")");
        assert_eq!(b.text().as_str(), "PAD_FUNC(NF3)");
    }

    #[test]
    fn ownership_counts_only_when_emitted() {
        let pad = Pad::new("GPP_A0", 0, 0).with_ownership(PadOwnership::Driver);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        assert!(!b.ownership_covered());
        b.set("M(").own().add("),");
        assert_eq!(b.text().as_str(), "M(DRIVER),");
        assert!(b.ownership_covered());
    }

    #[test]
    fn with_word_value_restores_view() {
        let pad = Pad::new("GPP_A0", 0x4400_0201, 0);
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.claim(Word::Dw0, dw0::TX_STATE);
        let inner = b.with_word_value(Word::Dw0, 0x0200_0000, |b| {
            b.trig();
            b.dw0().ignored_fields()
        });
        assert_eq!(inner, 0);
        assert_eq!(b.dw0().value(), 0x4400_0201);
        assert_eq!(b.dw0().claimed(), dw0::TX_STATE.mask());
    }

    #[test]
    fn begin_resets_previous_pass() {
        let pad = Pad::new("GPP_C3", 0, dw1::TERMINATION.place(0x7));
        let mut b = MacroBuilder::new(&pad, Chipset::SunrisePoint);
        b.set("M(").pull();
        b.begin();
        assert!(b.text().is_empty());
        assert!(b.diagnostics().is_empty());
        assert_eq!(b.dw1().claimed(), 0);
    }
}
