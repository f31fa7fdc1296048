//! Decoder input: one pad's identifier, register pair, and ownership.

/// Host software ownership of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PadOwnership {
    /// Owned by ACPI (firmware).
    #[default]
    Acpi,
    /// Owned by the GPIO driver.
    Driver,
}

impl PadOwnership {
    /// Converts the `HOSTSW_OWN` bit for this pad.
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Driver
        } else {
            Self::Acpi
        }
    }

    /// Macro argument name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acpi => "ACPI",
            Self::Driver => "DRIVER",
        }
    }
}

/// Register snapshot of one pad as read from the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Pad {
    /// Pad name, printed verbatim (e.g. `GPP_A0`, `GPD7`).
    pub id: String,
    /// `PAD_CFG_DW0` value.
    pub dw0: u32,
    /// `PAD_CFG_DW1` value.
    pub dw1: u32,
    /// Host software ownership.
    pub ownership: PadOwnership,
}

impl Pad {
    /// Creates an ACPI-owned pad.
    #[must_use]
    pub fn new(id: impl Into<String>, dw0: u32, dw1: u32) -> Self {
        Self {
            id: id.into(),
            dw0,
            dw1,
            ownership: PadOwnership::Acpi,
        }
    }

    /// Sets the host software ownership.
    #[must_use]
    pub fn with_ownership(mut self, ownership: PadOwnership) -> Self {
        self.ownership = ownership;
        self
    }

    /// Returns `true` for pads of the deep-sleep-well `GPD` group.
    #[must_use]
    pub fn is_gpd(&self) -> bool {
        self.id.contains("GPD")
    }
}

#[cfg(test)]
mod tests {
    use super::{Pad, PadOwnership};

    #[test]
    fn new_pad_defaults_to_acpi_ownership() {
        let pad = Pad::new("GPP_A0", 0x4400_0201, 0);
        assert_eq!(pad.ownership, PadOwnership::Acpi);
        let pad = pad.with_ownership(PadOwnership::from_bit(true));
        assert_eq!(pad.ownership, PadOwnership::Driver);
        assert_eq!(pad.ownership.as_str(), "DRIVER");
    }

    #[test]
    fn gpd_group_detection_uses_identifier() {
        assert!(Pad::new("GPD2", 0, 0).is_gpd());
        assert!(!Pad::new("GPP_D2", 0, 0).is_gpd());
    }
}
