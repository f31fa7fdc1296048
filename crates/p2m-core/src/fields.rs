//! Bit layout of the `PAD_CFG_DW0`/`PAD_CFG_DW1` registers and the fixed
//! symbol tables their fields map onto.
//!
//! The read-only masks are shared by every family. They leave the DW0 route
//! bits and the DW1 standby fields (`IOSSTATE`, `IOSTERM`) writable, so on
//! Sunrise Point a set standby field outside the bidirectional macros is
//! reported as ignored rather than masked away.

/// Contiguous bit range inside a 32-bit configuration word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    shift: u32,
    width: u32,
}

impl Field {
    /// Creates a field covering `width` bits starting at bit `shift`.
    ///
    /// # Panics
    ///
    /// Panics when `width` is zero or the range does not fit inside a `u32`.
    #[must_use]
    pub const fn new(shift: u32, width: u32) -> Self {
        assert!(
            width != 0 && shift < 32 && width <= 32 - shift,
            "field must cover 1..=32 bits inside a u32"
        );
        Self { shift, width }
    }

    /// Position of the least significant bit.
    #[must_use]
    pub const fn shift(self) -> u32 {
        self.shift
    }

    /// Number of bits in the field.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// In-place mask of the field.
    #[must_use]
    pub const fn mask(self) -> u32 {
        (u32::MAX >> (32 - self.width)) << self.shift
    }

    /// Extracts the field's code from `word`.
    #[must_use]
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask()) >> self.shift
    }

    /// Places `code` into the field position, truncating excess bits.
    #[must_use]
    pub const fn place(self, code: u32) -> u32 {
        (code << self.shift) & self.mask()
    }
}

/// `PAD_CFG_DW0` field descriptors.
pub mod dw0 {
    use super::Field;

    /// Pad reset config (`PADRSTCFG`).
    pub const PAD_RESET_CONFIG: Field = Field::new(30, 2);
    /// RX pad state select (`RXPADSTSEL`).
    pub const RX_PAD_STATE_SELECT: Field = Field::new(29, 1);
    /// RX raw override to 1 (`RXRAW1`).
    pub const RX_RAW_OVERRIDE: Field = Field::new(28, 1);
    /// RX level/edge configuration (`RXEVCFG`).
    pub const RX_LEVEL_EDGE: Field = Field::new(25, 2);
    /// RX invert (`RXINV`).
    pub const RX_INVERT: Field = Field::new(23, 1);
    /// GPIO input route to IOxAPIC.
    pub const ROUTE_IOAPIC: Field = Field::new(20, 1);
    /// GPIO input route to SCI.
    pub const ROUTE_SCI: Field = Field::new(19, 1);
    /// GPIO input route to SMI.
    pub const ROUTE_SMI: Field = Field::new(18, 1);
    /// GPIO input route to NMI.
    pub const ROUTE_NMI: Field = Field::new(17, 1);
    /// Pad mode / native function select (`PMODE`).
    pub const PAD_MODE: Field = Field::new(10, 3);
    /// GPIO RX/TX buffer disable (`GPIORXTXDIS`).
    pub const BUFFER_DISABLE: Field = Field::new(8, 2);
    /// GPIO RX state, hardware driven.
    pub const RX_STATE: Field = Field::new(1, 1);
    /// GPIO TX state.
    pub const TX_STATE: Field = Field::new(0, 1);

    /// Bits the hardware forces regardless of the requested configuration.
    pub const READ_ONLY_FIELDS: u32 = (0x1 << 27) | (0x1 << 24) | (0x3 << 21) | (0x1 << 16) | 0xfe;
}

/// `PAD_CFG_DW1` field descriptors.
pub mod dw1 {
    use super::Field;

    /// I/O standby state (`IOSSTATE`).
    pub const IO_STANDBY_STATE: Field = Field::new(14, 4);
    /// Pad termination (`TERM`).
    pub const TERMINATION: Field = Field::new(10, 4);
    /// I/O standby termination (`IOSTERM`).
    pub const IO_STANDBY_TERMINATION: Field = Field::new(8, 2);
    /// Interrupt select, assigned by hardware.
    pub const INTERRUPT_SELECT: Field = Field::new(0, 8);

    /// Bits the hardware forces regardless of the requested configuration.
    pub const READ_ONLY_FIELDS: u32 = 0xfffc_00ff;
}

/// RX level/edge configuration (`RXEVCFG`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Trigger {
    Level = 0x0,
    EdgeSingle = 0x1,
    Off = 0x2,
    EdgeBoth = 0x3,
}

impl Trigger {
    /// Converts the low two bits of `code` into a trigger mode.
    #[must_use]
    pub const fn from_u2(code: u32) -> Self {
        match code & 0x3 {
            0x0 => Self::Level,
            0x1 => Self::EdgeSingle,
            0x2 => Self::Off,
            _ => Self::EdgeBoth,
        }
    }

    /// Register code for this trigger mode.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "LEVEL",
            Self::EdgeSingle => "EDGE_SINGLE",
            Self::Off => "OFF",
            Self::EdgeBoth => "EDGE_BOTH",
        }
    }
}

/// GPIO RX/TX buffer disable state (`GPIORXTXDIS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BufferDisable {
    /// Both buffers are enabled.
    NoDisable = 0x0,
    /// Output buffer is disabled.
    TxDisable = 0x1,
    /// Input buffer is disabled.
    RxDisable = 0x2,
    /// Both buffers are disabled.
    TxRxDisable = 0x3,
}

impl BufferDisable {
    /// Converts the low two bits of `code` into a buffer state.
    #[must_use]
    pub const fn from_u2(code: u32) -> Self {
        match code & 0x3 {
            0x0 => Self::NoDisable,
            0x1 => Self::TxDisable,
            0x2 => Self::RxDisable,
            _ => Self::TxRxDisable,
        }
    }

    /// Register code for this state.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDisable => "NO_DISABLE",
            Self::TxDisable => "TX_DISABLE",
            Self::RxDisable => "RX_DISABLE",
            Self::TxRxDisable => "TX_RX_DISABLE",
        }
    }
}

/// I/O standby state (`IOSSTATE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum StandbyState {
    TxLastRxE = 0x0,
    Tx0RxDcRx0 = 0x1,
    Tx0RxDcRx1 = 0x2,
    Tx1RxDcRx0 = 0x3,
    Tx1RxDcRx1 = 0x4,
    Tx0RxE = 0x5,
    Tx1RxE = 0x6,
    HizCRx0 = 0x7,
    HizCRx1 = 0x8,
    TxDRxE = 0x9,
    Ignore = 0xf,
}

impl StandbyState {
    /// Converts a 4-bit standby state code. Codes `0xa..=0xe` are undefined.
    #[must_use]
    pub const fn from_u4(code: u32) -> Option<Self> {
        match code {
            0x0 => Some(Self::TxLastRxE),
            0x1 => Some(Self::Tx0RxDcRx0),
            0x2 => Some(Self::Tx0RxDcRx1),
            0x3 => Some(Self::Tx1RxDcRx0),
            0x4 => Some(Self::Tx1RxDcRx1),
            0x5 => Some(Self::Tx0RxE),
            0x6 => Some(Self::Tx1RxE),
            0x7 => Some(Self::HizCRx0),
            0x8 => Some(Self::HizCRx1),
            0x9 => Some(Self::TxDRxE),
            0xf => Some(Self::Ignore),
            _ => None,
        }
    }

    /// Register code for this state.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TxLastRxE => "TxLASTRxE",
            Self::Tx0RxDcRx0 => "Tx0RxDCRx0",
            Self::Tx0RxDcRx1 => "Tx0RxDCRx1",
            Self::Tx1RxDcRx0 => "Tx1RxDCRx0",
            Self::Tx1RxDcRx1 => "Tx1RxDCRx1",
            Self::Tx0RxE => "Tx0RxE",
            Self::Tx1RxE => "Tx1RxE",
            Self::HizCRx0 => "HIZCRx0",
            Self::HizCRx1 => "HIZCRx1",
            Self::TxDRxE => "TxDRxE",
            Self::Ignore => "IGNORE",
        }
    }
}

/// I/O standby termination (`IOSTERM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StandbyTermination {
    /// Same as functional termination.
    Same = 0x0,
    /// Disable pull-up and pull-down.
    DisPuPd = 0x1,
    /// Enable pull-down.
    EnPd = 0x2,
    /// Enable pull-up.
    EnPu = 0x3,
}

impl StandbyTermination {
    /// Converts the low two bits of `code` into a termination mode.
    #[must_use]
    pub const fn from_u2(code: u32) -> Self {
        match code & 0x3 {
            0x0 => Self::Same,
            0x1 => Self::DisPuPd,
            0x2 => Self::EnPd,
            _ => Self::EnPu,
        }
    }

    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Same => "SAME",
            Self::DisPuPd => "DISPUPD",
            Self::EnPd => "ENPD",
            Self::EnPu => "ENPU",
        }
    }
}

/// Logical pad reset source names shared by all chipset families.
///
/// The mapping from the `PADRSTCFG` code to a name is chipset specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ResetSource {
    Pwrok,
    Deep,
    Pltrst,
    Rsmrst,
}

impl ResetSource {
    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pwrok => "PWROK",
            Self::Deep => "DEEP",
            Self::Pltrst => "PLTRST",
            Self::Rsmrst => "RSMRST",
        }
    }
}

/// Interrupt delivery mechanism a GPI pad may signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum InterruptRoute {
    Ioapic,
    Sci,
    Smi,
    Nmi,
}

impl InterruptRoute {
    /// All routes in macro-selection priority order.
    pub const ALL: [Self; 4] = [Self::Ioapic, Self::Sci, Self::Smi, Self::Nmi];

    /// `PAD_CFG_DW0` enable bit of this route.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::Ioapic => dw0::ROUTE_IOAPIC,
            Self::Sci => dw0::ROUTE_SCI,
            Self::Smi => dw0::ROUTE_SMI,
            Self::Nmi => dw0::ROUTE_NMI,
        }
    }

    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ioapic => "IOAPIC",
            Self::Sci => "SCI",
            Self::Smi => "SMI",
            Self::Nmi => "NMI",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        dw0, dw1, BufferDisable, Field, InterruptRoute, StandbyState, StandbyTermination, Trigger,
    };

    const DW0_FIELDS: [Field; 13] = [
        dw0::PAD_RESET_CONFIG,
        dw0::RX_PAD_STATE_SELECT,
        dw0::RX_RAW_OVERRIDE,
        dw0::RX_LEVEL_EDGE,
        dw0::RX_INVERT,
        dw0::ROUTE_IOAPIC,
        dw0::ROUTE_SCI,
        dw0::ROUTE_SMI,
        dw0::ROUTE_NMI,
        dw0::PAD_MODE,
        dw0::BUFFER_DISABLE,
        dw0::RX_STATE,
        dw0::TX_STATE,
    ];

    #[test]
    fn field_masks_match_register_layout() {
        assert_eq!(dw0::PAD_RESET_CONFIG.mask(), 0xc000_0000);
        assert_eq!(dw0::RX_LEVEL_EDGE.mask(), 0x0600_0000);
        assert_eq!(dw0::PAD_MODE.mask(), 0x0000_1c00);
        assert_eq!(dw0::BUFFER_DISABLE.mask(), 0x0000_0300);
        assert_eq!(dw1::IO_STANDBY_STATE.mask(), 0x0003_c000);
        assert_eq!(dw1::TERMINATION.mask(), 0x0000_3c00);
        assert_eq!(dw1::IO_STANDBY_TERMINATION.mask(), 0x0000_0300);
    }

    #[test]
    fn dw0_fields_do_not_overlap() {
        let mut seen = 0u32;
        for field in DW0_FIELDS {
            assert_eq!(seen & field.mask(), 0, "{field:?} overlaps another field");
            seen |= field.mask();
        }
    }

    #[test]
    fn extract_and_place_are_inverse_within_field() {
        let word = 0x8400_0502;
        assert_eq!(dw0::PAD_RESET_CONFIG.extract(word), 0x2);
        assert_eq!(dw0::RX_LEVEL_EDGE.extract(word), 0x2);
        assert_eq!(dw0::PAD_MODE.extract(word), 0x1);
        assert_eq!(dw0::BUFFER_DISABLE.extract(word), 0x1);
        assert_eq!(dw0::PAD_MODE.place(0x1), 0x400);
        assert_eq!(dw0::PAD_MODE.place(0xf), 0x1c00);
    }

    #[test]
    fn full_width_field_mask_is_all_ones() {
        assert_eq!(Field::new(0, 32).mask(), u32::MAX);
        assert_eq!(Field::new(31, 1).mask(), 0x8000_0000);
    }

    #[rstest]
    #[case::empty(0, 0)]
    #[case::past_top(31, 2)]
    #[case::shift_out_of_range(32, 1)]
    #[should_panic(expected = "field must cover")]
    fn field_outside_the_word_is_rejected(#[case] shift: u32, #[case] width: u32) {
        let _ = Field::new(shift, width);
    }

    #[test]
    fn read_only_masks_exclude_writable_fields() {
        for field in [
            dw0::PAD_RESET_CONFIG,
            dw0::RX_LEVEL_EDGE,
            dw0::RX_INVERT,
            dw0::PAD_MODE,
            dw0::BUFFER_DISABLE,
            dw0::TX_STATE,
        ] {
            assert_eq!(field.mask() & dw0::READ_ONLY_FIELDS, 0);
        }
        for route in InterruptRoute::ALL {
            assert_eq!(route.field().mask() & dw0::READ_ONLY_FIELDS, 0);
        }
        for field in [
            dw1::IO_STANDBY_STATE,
            dw1::TERMINATION,
            dw1::IO_STANDBY_TERMINATION,
        ] {
            assert_eq!(field.mask() & dw1::READ_ONLY_FIELDS, 0);
        }
        assert_eq!(dw0::RX_STATE.mask() & dw0::READ_ONLY_FIELDS, dw0::RX_STATE.mask());
        assert_eq!(
            dw1::INTERRUPT_SELECT.mask() & dw1::READ_ONLY_FIELDS,
            dw1::INTERRUPT_SELECT.mask()
        );
    }

    #[test]
    fn two_bit_tables_are_total() {
        let triggers: Vec<_> = (0..4).map(|c| Trigger::from_u2(c).as_str()).collect();
        assert_eq!(triggers, ["LEVEL", "EDGE_SINGLE", "OFF", "EDGE_BOTH"]);
        let buffers: Vec<_> = (0..4).map(|c| BufferDisable::from_u2(c).as_str()).collect();
        assert_eq!(
            buffers,
            ["NO_DISABLE", "TX_DISABLE", "RX_DISABLE", "TX_RX_DISABLE"]
        );
        assert_eq!(StandbyTermination::from_u2(0x3).as_str(), "ENPU");
    }

    #[test]
    fn standby_state_rejects_undefined_codes() {
        for code in 0xa..=0xe {
            assert_eq!(StandbyState::from_u4(code), None);
        }
        assert_eq!(StandbyState::from_u4(0x9), Some(StandbyState::TxDRxE));
        assert_eq!(StandbyState::from_u4(0xf).map(StandbyState::as_str), Some("IGNORE"));
        for code in (0x0..=0x9).chain([0xf]) {
            let state = StandbyState::from_u4(code).expect("defined code");
            assert_eq!(state.code(), code);
        }
    }

    #[test]
    fn routes_are_listed_in_priority_order() {
        let names: Vec<_> = InterruptRoute::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, ["IOAPIC", "SCI", "SMI", "NMI"]);
        assert!(InterruptRoute::Ioapic.field().shift() > InterruptRoute::Nmi.field().shift());
    }
}
