//! Non-fatal decode diagnostics.
//!
//! Every input produces output text; problems found along the way are
//! collected here and mirrored to the `log` facade.

use thiserror::Error;

/// Severity used when forwarding a diagnostic to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The input holds a value outside the known tables.
    Error,
    /// The symbolic form was abandoned for this field or word.
    Warning,
}

/// Problem found while decoding a pad.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Diagnostic {
    /// `TERM` holds a code outside the pull-resistor ladder.
    #[error("{pad}: invalid TERM value {code:#x}")]
    InvalidPull {
        /// Pad identifier.
        pad: String,
        /// Raw `TERM` code.
        code: u32,
    },
    /// `PADRSTCFG` holds a reserved code for this chipset.
    #[error("{pad}: reserved PADRSTCFG value {code:#x}, substituted {substitute}")]
    ReservedResetSource {
        /// Pad identifier.
        pad: String,
        /// Raw `PADRSTCFG` code.
        code: u32,
        /// Reset source printed in its place.
        substitute: &'static str,
    },
    /// `IOSSTATE` holds an undefined code.
    #[error("{pad}: undefined IOSSTATE value {code:#x}, substituted IGNORE")]
    UndefinedStandbyState {
        /// Pad identifier.
        pad: String,
        /// Raw `IOSSTATE` code.
        code: u32,
    },
    /// More interrupt routes are enabled than any GPI macro can express.
    #[error("{pad}: {count} simultaneous interrupt routes have no macro form")]
    UnsupportedRouteCombination {
        /// Pad identifier.
        pad: String,
        /// Number of enabled routes.
        count: usize,
    },
    /// The macro name fixes a field to a value the register does not hold.
    #[error("{pad}: macro name implies {field} {expected}, register differs")]
    ImpliedFieldMismatch {
        /// Pad identifier.
        pad: String,
        /// Register field the name fixes.
        field: &'static str,
        /// Symbol the name implies.
        expected: &'static str,
    },
}

impl Diagnostic {
    /// Log severity of this diagnostic.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::InvalidPull { .. } => Severity::Error,
            Self::ReservedResetSource { .. }
            | Self::UndefinedStandbyState { .. }
            | Self::UnsupportedRouteCombination { .. }
            | Self::ImpliedFieldMismatch { .. } => Severity::Warning,
        }
    }

    /// Pad the diagnostic refers to.
    #[must_use]
    pub fn pad(&self) -> &str {
        match self {
            Self::InvalidPull { pad, .. }
            | Self::ReservedResetSource { pad, .. }
            | Self::UndefinedStandbyState { pad, .. }
            | Self::UnsupportedRouteCombination { pad, .. }
            | Self::ImpliedFieldMismatch { pad, .. } => pad,
        }
    }

    /// Forwards the diagnostic to the `log` facade.
    pub fn log(&self) {
        match self.severity() {
            Severity::Error => log::error!("{self}"),
            Severity::Warning => log::warn!("{self}"),
        }
    }
}

/// Chipset name that matches no known family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chipset `{0}` (expected one of: snr, lbg, apl)")]
pub struct ParseChipsetError(pub String);
