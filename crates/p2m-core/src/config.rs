//! Caller-supplied decode policy.

/// How much of the discarded symbolic attempt is kept as comments when the
/// raw constructor is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Verbosity {
    /// Constructor only.
    #[default]
    Quiet,
    /// Adds the discarded symbolic text.
    Reference,
    /// Adds the hexadecimal ignored-bit masks of both words.
    IgnoredMask,
    /// Adds the ignored bits decoded into field names.
    DecodedIgnored,
}

impl Verbosity {
    /// Maps a numeric level, saturating above the top tier.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Quiet,
            1 => Self::Reference,
            2 => Self::IgnoredMask,
            _ => Self::DecodedIgnored,
        }
    }

    /// Numeric level of this tier.
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Decode policy passed into every decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeConfig {
    /// Comment tier for raw output.
    pub verbosity: Verbosity,
    /// Always print the raw constructor, even when the symbolic form covers
    /// every bit.
    pub force_raw: bool,
    /// Drop ignored bits from the values the raw constructor prints.
    ///
    /// The printed words then differ from the input. A warning is logged and
    /// [`crate::DecodedPad::stripped_fields`] is set whenever this changes
    /// the output.
    pub strip_ignored_fields: bool,
}

impl DecodeConfig {
    /// Sets the comment tier.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Forces the raw constructor.
    #[must_use]
    pub const fn with_force_raw(mut self, force_raw: bool) -> Self {
        self.force_raw = force_raw;
        self
    }

    /// Enables stripping of ignored bits from raw output.
    #[must_use]
    pub const fn with_strip_ignored_fields(mut self, strip: bool) -> Self {
        self.strip_ignored_fields = strip;
        self
    }
}
