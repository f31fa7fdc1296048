//! Sunrise Point and Lewisburg.
//!
//! These families have no standby arguments outside the bidirectional
//! macro, so any set `IOSSTATE`/`IOSTERM` bits on other shapes stay
//! unclaimed.

use super::{emit_gpi_routes, emit_plain_gpo, emit_plain_native_function, ApicStandby};
use crate::builder::MacroBuilder;
use crate::fields::ResetSource;

/// `PADRSTCFG` for the `GPD` group of Sunrise Point. Every code is defined.
pub(super) const fn gpd_reset_source(code: u32) -> ResetSource {
    match code & 0x3 {
        0x0 => ResetSource::Pwrok,
        0x1 => ResetSource::Deep,
        0x2 => ResetSource::Pltrst,
        _ => ResetSource::Rsmrst,
    }
}

/// `PADRSTCFG` for every other group. Code 3 is reserved.
pub(super) const fn reset_source(code: u32) -> Option<ResetSource> {
    match code {
        0x0 => Some(ResetSource::Rsmrst),
        0x1 => Some(ResetSource::Deep),
        0x2 => Some(ResetSource::Pltrst),
        _ => None,
    }
}

pub(super) fn emit_gpi(b: &mut MacroBuilder<'_>) {
    emit_gpi_routes(b, ApicStandby::Fixed);
}

pub(super) fn emit_gpo(b: &mut MacroBuilder<'_>) {
    emit_plain_gpo(b);
}

pub(super) fn emit_native_function(b: &mut MacroBuilder<'_>) {
    emit_plain_native_function(b);
}
