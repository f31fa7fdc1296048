//! Chipset families and their macro emitters.
//!
//! The families share the register layout and most macro shapes. They
//! differ in the reset-source table and in whether the standby fields can
//! be expressed in `PAD_CFG_GPI_APIC_IOS`, `PAD_CFG_GPO`, and `PAD_CFG_NF`.

use std::fmt;
use std::str::FromStr;

use crate::builder::{MacroBuilder, Word};
use crate::diag::{Diagnostic, ParseChipsetError};
use crate::fields::{dw0, InterruptRoute, ResetSource, StandbyState, Trigger};
use crate::pad::Pad;

mod apollo;
mod sunrise;

/// Supported PCH/SoC families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Chipset {
    /// Sunrise Point PCH.
    SunrisePoint,
    /// Lewisburg PCH. Shares the Sunrise Point emitters but has no `GPD`
    /// reset table.
    Lewisburg,
    /// Apollo Lake SoC.
    ApolloLake,
}

impl Chipset {
    /// Every supported family.
    pub const ALL: [Self; 3] = [Self::SunrisePoint, Self::Lewisburg, Self::ApolloLake];

    /// Short selector name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SunrisePoint => "snr",
            Self::Lewisburg => "lbg",
            Self::ApolloLake => "apl",
        }
    }

    /// Maps a `PADRSTCFG` code to a reset source for `pad`.
    #[must_use]
    pub fn reset_source(self, pad: &Pad, code: u32) -> Option<ResetSource> {
        match self {
            Self::SunrisePoint if pad.is_gpd() => Some(sunrise::gpd_reset_source(code)),
            Self::SunrisePoint | Self::Lewisburg => sunrise::reset_source(code),
            Self::ApolloLake => apollo::reset_source(code),
        }
    }

    /// Reset source printed in place of a reserved code.
    #[must_use]
    pub const fn default_reset_source(self) -> ResetSource {
        match self {
            Self::SunrisePoint | Self::Lewisburg => ResetSource::Rsmrst,
            Self::ApolloLake => ResetSource::Pwrok,
        }
    }

    /// Maps a `TERM` code to a pull-resistor name.
    #[must_use]
    pub const fn pull(self, code: u32) -> Option<&'static str> {
        match self {
            Self::SunrisePoint | Self::Lewisburg | Self::ApolloLake => pull_ladder(code),
        }
    }

    /// Emits a GPI macro.
    pub fn emit_gpi(self, b: &mut MacroBuilder<'_>) {
        match self {
            Self::SunrisePoint | Self::Lewisburg => sunrise::emit_gpi(b),
            Self::ApolloLake => apollo::emit_gpi(b),
        }
    }

    /// Emits a GPO macro.
    pub fn emit_gpo(self, b: &mut MacroBuilder<'_>) {
        match self {
            Self::SunrisePoint | Self::Lewisburg => sunrise::emit_gpo(b),
            Self::ApolloLake => apollo::emit_gpo(b),
        }
    }

    /// Emits a native-function macro.
    pub fn emit_native_function(self, b: &mut MacroBuilder<'_>) {
        match self {
            Self::SunrisePoint | Self::Lewisburg => sunrise::emit_native_function(b),
            Self::ApolloLake => apollo::emit_native_function(b),
        }
    }

    /// Emits a no-connect macro.
    pub fn emit_no_connect(self, b: &mut MacroBuilder<'_>) {
        match self {
            Self::SunrisePoint | Self::Lewisburg | Self::ApolloLake => emit_no_connect(b),
        }
    }
}

impl fmt::Display for Chipset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Chipset {
    type Err = ParseChipsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snr" | "spt" | "sunrise" => Ok(Self::SunrisePoint),
            "lbg" | "lewisburg" => Ok(Self::Lewisburg),
            "apl" | "apollo" => Ok(Self::ApolloLake),
            _ => Err(ParseChipsetError(s.to_owned())),
        }
    }
}

/// `TERM` codes shared by every supported family.
const fn pull_ladder(code: u32) -> Option<&'static str> {
    Some(match code {
        0x0 => "NONE",
        0x2 => "DN_5K",
        0x4 => "DN_20K",
        0x9 => "UP_1K",
        0xa => "UP_5K",
        0xb => "UP_2K",
        0xc => "UP_20K",
        0xd => "UP_667",
        0xf => "NATIVE",
        _ => return None,
    })
}

/// How `PAD_CFG_GPI_APIC_IOS` fills its standby arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApicStandby {
    /// Always `TxLASTRxE, SAME`; the fields must be zero to be covered.
    Fixed,
    /// Decoded from `IOSSTATE` and `IOSTERM`.
    FromRegister,
}

/// Every GPI macro name implies `TX_DISABLE`.
fn emit_gpi_routes(b: &mut MacroBuilder<'_>, standby: ApicStandby) {
    b.claim(Word::Dw0, dw0::BUFFER_DISABLE);
    let view = *b.dw0();
    let routes: Vec<InterruptRoute> = InterruptRoute::ALL
        .into_iter()
        .filter(|&route| view.route(route))
        .collect();

    match routes.as_slice() {
        [] => {
            b.set("PAD_CFG_GPI_TRIG_OWN(")
                .id()
                .pull()
                .rstsrc()
                .trig()
                .own()
                .add("),");
        }
        [route] => emit_single_route(b, *route, standby),
        [first, second] => {
            b.set("PAD_CFG_GPI_DUAL_ROUTE(")
                .id()
                .pull()
                .rstsrc()
                .trig()
                .invert()
                .route(*first)
                .route(*second)
                .add("),");
        }
        more => {
            let pad = b.pad().id.clone();
            b.set("PAD_CFG_GPI");
            b.clear_claims(Word::Dw0);
            b.report(Diagnostic::UnsupportedRouteCombination {
                pad,
                count: more.len(),
            });
        }
    }
}

fn emit_single_route(b: &mut MacroBuilder<'_>, route: InterruptRoute, standby: ApicStandby) {
    let trigger = Trigger::from_u2(b.dw0().rx_level_edge());
    b.claim(Word::Dw0, route.field());
    match route {
        InterruptRoute::Ioapic if trigger == Trigger::Level => {
            b.set("PAD_CFG_GPI_APIC");
            if b.dw0().rx_invert() {
                b.add("_INVERT");
            }
            b.claim(Word::Dw0, dw0::RX_INVERT)
                .claim(Word::Dw0, dw0::RX_LEVEL_EDGE)
                .add("(")
                .id()
                .pull()
                .rstsrc()
                .add("),");
        }
        InterruptRoute::Ioapic => {
            b.set("PAD_CFG_GPI_APIC_IOS(")
                .id()
                .pull()
                .rstsrc()
                .trig()
                .invert();
            match standby {
                ApicStandby::Fixed => {
                    b.arg(StandbyState::TxLastRxE.as_str()).arg("SAME");
                }
                ApicStandby::FromRegister => {
                    b.iosstate().iosterm();
                }
            }
            b.add("),");
        }
        InterruptRoute::Sci | InterruptRoute::Smi if trigger == Trigger::EdgeSingle => {
            b.set("PAD_CFG_GPI_ACPI_")
                .add(route.as_str())
                .add("(")
                .claim(Word::Dw0, dw0::RX_LEVEL_EDGE)
                .id()
                .pull()
                .rstsrc()
                .invert()
                .add("),");
        }
        InterruptRoute::Sci | InterruptRoute::Smi | InterruptRoute::Nmi => {
            b.set("PAD_CFG_GPI_")
                .add(route.as_str())
                .add("(")
                .id()
                .pull()
                .rstsrc()
                .trig()
                .invert()
                .add("),");
        }
    }
}

/// `PAD_CFG_GPO` and `PAD_CFG_TERM_GPO`. Both names imply `RX_DISABLE` and a
/// disabled trigger.
fn emit_plain_gpo(b: &mut MacroBuilder<'_>) {
    b.claim(Word::Dw0, dw0::BUFFER_DISABLE).imply_trigger(Trigger::Off);
    if b.dw1().termination() == 0 {
        b.set("PAD_CFG_GPO(").id().val().rstsrc().add("),");
    } else {
        b.set("PAD_CFG_TERM_GPO(")
            .id()
            .val()
            .pull()
            .rstsrc()
            .add("),");
    }
}

/// `PAD_CFG_NF`, or `PAD_CFG_NF_BUF_TRIG` when the buffer or trigger fields
/// are set.
fn emit_plain_native_function(b: &mut MacroBuilder<'_>) {
    let view = *b.dw0();
    let buf_trig = view.rx_level_edge() != 0 || view.buffer_disable() != 0;
    b.set("PAD_CFG_NF");
    if buf_trig {
        b.add("_BUF_TRIG");
    }
    b.add("(").id().pull().rstsrc().padfn();
    if buf_trig {
        b.bufdis().trig();
    }
    b.add("),");
}

/// `PAD_NC` fixes everything but the pull resistor: trigger `OFF`, reset
/// `DEEP` and standby state `TxDRxE`.
fn emit_no_connect(b: &mut MacroBuilder<'_>) {
    b.claim(Word::Dw0, dw0::BUFFER_DISABLE)
        .imply_trigger(Trigger::Off)
        .imply_reset(ResetSource::Deep)
        .imply_standby_state(StandbyState::TxDRxE);
    b.set("PAD_NC(").id().pull().add("),");
}

/// Returns `true` when either standby field of DW1 is set.
pub(crate) const fn has_standby_config(b: &MacroBuilder<'_>) -> bool {
    let view = b.dw1();
    view.io_standby_state() != 0 || view.io_standby_termination() != 0
}
