//! Coverage-tracking view over a single configuration word.

use crate::fields::{dw0, dw1, Field, InterruptRoute};

/// One configuration word plus the set of bits the emitted text accounts for.
///
/// A bit is *ignored* when it is set in the value, not claimed by any emitted
/// argument, and not forced by hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterView {
    value: u32,
    claimed: u32,
    read_only: u32,
}

impl RegisterView {
    /// Creates a view with an empty claimed set.
    #[must_use]
    pub const fn new(value: u32, read_only: u32) -> Self {
        Self {
            value,
            claimed: 0,
            read_only,
        }
    }

    /// View over a `PAD_CFG_DW0` value.
    #[must_use]
    pub const fn dw0(value: u32) -> Self {
        Self::new(value, dw0::READ_ONLY_FIELDS)
    }

    /// View over a `PAD_CFG_DW1` value.
    #[must_use]
    pub const fn dw1(value: u32) -> Self {
        Self::new(value, dw1::READ_ONLY_FIELDS)
    }

    /// Raw word value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Replaces the raw word value. Claims are left untouched.
    pub const fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    /// Bits claimed so far.
    #[must_use]
    pub const fn claimed(&self) -> u32 {
        self.claimed
    }

    /// Hardware-forced bits.
    #[must_use]
    pub const fn read_only(&self) -> u32 {
        self.read_only
    }

    /// Adds `mask` to the claimed set.
    pub const fn claim(&mut self, mask: u32) {
        self.claimed |= mask;
    }

    /// Removes `mask` from the claimed set.
    pub const fn unclaim(&mut self, mask: u32) {
        self.claimed &= !mask;
    }

    /// Claims every bit of `field`.
    pub const fn claim_field(&mut self, field: Field) {
        self.claim(field.mask());
    }

    /// Un-claims every bit of `field`.
    pub const fn unclaim_field(&mut self, field: Field) {
        self.unclaim(field.mask());
    }

    /// Drops every claim, abandoning the current decode attempt for this word.
    pub const fn clear_claims(&mut self) {
        self.claimed = 0;
    }

    /// Set bits that are neither claimed nor read-only.
    #[must_use]
    pub const fn ignored_fields(&self) -> u32 {
        self.value & !self.claimed & !self.read_only
    }

    /// Returns `true` when no bit is ignored.
    #[must_use]
    pub const fn coverage_complete(&self) -> bool {
        self.ignored_fields() == 0
    }

    /// Runs `f` against this view with its value temporarily replaced by
    /// `value` and an empty claimed set. Value and claims are restored
    /// before returning.
    pub fn with_value<R>(&mut self, value: u32, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = *self;
        self.value = value;
        self.claimed = 0;
        let result = f(self);
        self.value = saved.value;
        self.claimed = saved.claimed;
        result
    }

    /// Code stored in `field`.
    #[must_use]
    pub const fn field(&self, field: Field) -> u32 {
        field.extract(self.value)
    }

    /// `PADRSTCFG` code.
    #[must_use]
    pub const fn reset_config(&self) -> u32 {
        self.field(dw0::PAD_RESET_CONFIG)
    }

    /// `RXEVCFG` code.
    #[must_use]
    pub const fn rx_level_edge(&self) -> u32 {
        self.field(dw0::RX_LEVEL_EDGE)
    }

    /// `RXINV` bit.
    #[must_use]
    pub const fn rx_invert(&self) -> bool {
        self.field(dw0::RX_INVERT) != 0
    }

    /// Whether `route` is enabled.
    #[must_use]
    pub const fn route(&self, route: InterruptRoute) -> bool {
        self.field(route.field()) != 0
    }

    /// `PMODE` code; zero selects GPIO.
    #[must_use]
    pub const fn pad_mode(&self) -> u32 {
        self.field(dw0::PAD_MODE)
    }

    /// `GPIORXTXDIS` code.
    #[must_use]
    pub const fn buffer_disable(&self) -> u32 {
        self.field(dw0::BUFFER_DISABLE)
    }

    /// `GPIOTXSTATE` bit.
    #[must_use]
    pub const fn tx_state(&self) -> u32 {
        self.field(dw0::TX_STATE)
    }

    /// `IOSSTATE` code.
    #[must_use]
    pub const fn io_standby_state(&self) -> u32 {
        self.field(dw1::IO_STANDBY_STATE)
    }

    /// `TERM` code.
    #[must_use]
    pub const fn termination(&self) -> u32 {
        self.field(dw1::TERMINATION)
    }

    /// `IOSTERM` code.
    #[must_use]
    pub const fn io_standby_termination(&self) -> u32 {
        self.field(dw1::IO_STANDBY_TERMINATION)
    }
}

#[cfg(test)]
mod tests {
    use super::RegisterView;
    use crate::fields::{dw0, dw1, InterruptRoute};

    #[test]
    fn fresh_view_reports_every_writable_set_bit() {
        let view = RegisterView::dw0(0xffff_ffff);
        assert_eq!(view.ignored_fields(), !dw0::READ_ONLY_FIELDS);
        assert!(!view.coverage_complete());
    }

    #[test]
    fn read_only_bits_are_never_ignored() {
        let view = RegisterView::dw1(0x0000_00ff | (1 << 25));
        assert_eq!(view.ignored_fields(), 0);
        assert!(view.coverage_complete());
    }

    #[test]
    fn claim_then_unclaim_restores_gap() {
        let mut view = RegisterView::dw0(0xc000_0100);
        view.claim_field(dw0::BUFFER_DISABLE);
        view.claim_field(dw0::PAD_RESET_CONFIG);
        assert!(view.coverage_complete());

        view.unclaim_field(dw0::PAD_RESET_CONFIG);
        assert_eq!(view.ignored_fields(), 0xc000_0000);
    }

    #[test]
    fn clear_claims_forces_full_gap() {
        let mut view = RegisterView::dw0(0x0010_0100);
        view.claim(u32::MAX);
        assert!(view.coverage_complete());
        view.clear_claims();
        assert_eq!(view.ignored_fields(), 0x0010_0100);
    }

    #[test]
    fn with_value_restores_value_and_claims() {
        let mut view = RegisterView::dw0(0x4400_0201);
        view.claim_field(dw0::TX_STATE);

        let seen = view.with_value(0x0200_0000, |inner| {
            assert_eq!(inner.claimed(), 0);
            inner.claim_field(dw0::RX_LEVEL_EDGE);
            inner.rx_level_edge()
        });

        assert_eq!(seen, 0x1);
        assert_eq!(view.value(), 0x4400_0201);
        assert_eq!(view.claimed(), dw0::TX_STATE.mask());
    }

    #[test]
    fn named_extractors_read_expected_bits() {
        let word0 = RegisterView::dw0(0x8480_1d01 | (1 << 19));
        assert_eq!(word0.reset_config(), 0x2);
        assert_eq!(word0.rx_level_edge(), 0x2);
        assert!(word0.rx_invert());
        assert!(word0.route(InterruptRoute::Sci));
        assert!(!word0.route(InterruptRoute::Ioapic));
        assert_eq!(word0.pad_mode(), 0x7);
        assert_eq!(word0.buffer_disable(), 0x1);
        assert_eq!(word0.tx_state(), 0x1);

        let word1 = RegisterView::dw1(
            dw1::IO_STANDBY_STATE.place(0x9)
                | dw1::TERMINATION.place(0xc)
                | dw1::IO_STANDBY_TERMINATION.place(0x3),
        );
        assert_eq!(word1.io_standby_state(), 0x9);
        assert_eq!(word1.termination(), 0xc);
        assert_eq!(word1.io_standby_termination(), 0x3);
    }
}
