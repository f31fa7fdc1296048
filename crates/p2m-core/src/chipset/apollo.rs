//! Apollo Lake.
//!
//! Apollo Lake macros carry the standby fields explicitly whenever they are
//! set, via the `_IOSSTATE_IOSTERM` variants.

use super::{
    emit_gpi_routes, emit_plain_gpo, emit_plain_native_function, has_standby_config,
    ApicStandby,
};
use crate::builder::{MacroBuilder, Word};
use crate::fields::{dw0, ResetSource, Trigger};

/// `PADRSTCFG` table. Code 3 is reserved.
pub(super) const fn reset_source(code: u32) -> Option<ResetSource> {
    match code {
        0x0 => Some(ResetSource::Pwrok),
        0x1 => Some(ResetSource::Deep),
        0x2 => Some(ResetSource::Pltrst),
        _ => None,
    }
}

pub(super) fn emit_gpi(b: &mut MacroBuilder<'_>) {
    emit_gpi_routes(b, ApicStandby::FromRegister);
}

pub(super) fn emit_gpo(b: &mut MacroBuilder<'_>) {
    if !has_standby_config(b) {
        emit_plain_gpo(b);
        return;
    }
    b.claim(Word::Dw0, dw0::BUFFER_DISABLE).imply_trigger(Trigger::Off);
    b.set("PAD_CFG_GPO_IOSSTATE_IOSTERM(")
        .id()
        .val()
        .rstsrc()
        .pull()
        .iosstate()
        .iosterm()
        .add("),");
}

pub(super) fn emit_native_function(b: &mut MacroBuilder<'_>) {
    if !has_standby_config(b) {
        emit_plain_native_function(b);
        return;
    }
    b.set("PAD_CFG_NF_IOSSTATE_IOSTERM(")
        .id()
        .pull()
        .rstsrc()
        .padfn()
        .iosstate()
        .iosterm()
        .add("),");
}

#[cfg(test)]
mod tests {
    use crate::builder::MacroBuilder;
    use crate::chipset::Chipset;
    use crate::fields::dw1;
    use crate::pad::Pad;

    fn emit(pad: &Pad, f: fn(&mut MacroBuilder<'_>)) -> (String, bool) {
        let mut b = MacroBuilder::new(pad, Chipset::ApolloLake);
        f(&mut b);
        let covered = b.dw0().coverage_complete()
            && b.dw1().coverage_complete()
            && b.implications_hold();
        (b.take_text(), covered)
    }

    const STANDBY: u32 =
        dw1::IO_STANDBY_STATE.place(0x9) | dw1::IO_STANDBY_TERMINATION.place(0x2);

    #[test]
    fn apic_ios_decodes_standby_fields() {
        let pad = Pad::new("GPIO_20", 0x4210_0100, STANDBY);
        let (text, covered) = emit(&pad, super::emit_gpi);
        assert_eq!(
            text,
            "PAD_CFG_GPI_APIC_IOS(GPIO_20, NONE, DEEP, EDGE_SINGLE, NONE, TxDRxE, ENPD),"
        );
        assert!(covered);
    }

    #[test]
    fn gpo_with_standby_uses_iosstate_form() {
        let pad = Pad::new("GPIO_21", 0x8400_0201, STANDBY | 0x3000);
        let (text, covered) = emit(&pad, super::emit_gpo);
        assert_eq!(
            text,
            "PAD_CFG_GPO_IOSSTATE_IOSTERM(GPIO_21, 1, PLTRST, UP_20K, TxDRxE, ENPD),"
        );
        assert!(covered);
    }

    #[test]
    fn gpo_without_standby_falls_back_to_plain_form() {
        let pad = Pad::new("GPIO_22", 0x0400_0200, 0);
        let (text, covered) = emit(&pad, super::emit_gpo);
        assert_eq!(text, "PAD_CFG_GPO(GPIO_22, 0, PWROK),");
        assert!(covered);
    }

    #[test]
    fn native_function_with_standby_uses_iosstate_form() {
        let pad = Pad::new("GPIO_23", 0x4000_0800, STANDBY);
        let (text, covered) = emit(&pad, super::emit_native_function);
        assert_eq!(
            text,
            "PAD_CFG_NF_IOSSTATE_IOSTERM(GPIO_23, NONE, DEEP, NF2, TxDRxE, ENPD),"
        );
        assert!(covered);
    }

    #[test]
    fn reserved_reset_substitutes_pwrok() {
        let pad = Pad::new("GPIO_24", 0xc400_0200, 0);
        let mut b = MacroBuilder::new(&pad, Chipset::ApolloLake);
        super::emit_gpo(&mut b);
        assert_eq!(b.text().as_str(), "PAD_CFG_GPO(GPIO_24, 0, PWROK),");
        assert_eq!(b.dw0().ignored_fields(), 0xc000_0000);
        assert_eq!(b.diagnostics().len(), 1);
    }
}
