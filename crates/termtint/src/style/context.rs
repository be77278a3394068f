#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::UnknownIdentifierError;
use crate::termco::Color;

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine whether this layer is the foreground.
    pub fn is_foreground(&self) -> bool {
        matches!(self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The capability tier of terminal output.
///
/// This enumeration captures how many colors a rendering target supports.
/// [`Fidelity::NoAnsi`] denotes plain text without any escape sequences,
/// whereas [`Fidelity::TrueColor`] supports arbitrary 24-bit colors. This
/// crate does not inspect the environment. Instead, the caller picks the
/// fidelity, possibly [`Fidelity::Auto`], which always resolves to
/// [`Fidelity::TrueColor`].
///
/// Fidelity levels are ordered from least to most capable and parse from as
/// well as display as snake case identifiers:
///
/// ```
/// # use termtint::style::Fidelity;
/// let fidelity: Fidelity = "xterm_256".parse()?;
/// assert_eq!(fidelity, Fidelity::Xterm256);
/// assert!(Fidelity::Xterm16 < fidelity);
/// assert_eq!(Fidelity::NoAnsi.to_string(), "no_ansi");
/// assert_eq!(Fidelity::Auto.resolve(), Fidelity::TrueColor);
/// # Ok::<(), termtint::error::UnknownIdentifierError>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// Plain text, no ANSI escape codes
    #[cfg_attr(feature = "serde", serde(rename = "no_ansi"))]
    NoAnsi,
    /// The 16 extended ANSI colors
    #[cfg_attr(feature = "serde", serde(rename = "xterm_16"))]
    Xterm16,
    /// The 256 indexed colors, including the 16 extended ANSI colors
    #[cfg_attr(feature = "serde", serde(rename = "xterm_256"))]
    Xterm256,
    /// 24-bit RGB colors
    #[cfg_attr(feature = "serde", serde(rename = "true_color"))]
    TrueColor,
    /// The most capable tier
    #[cfg_attr(feature = "serde", serde(rename = "auto"))]
    Auto,
}

impl Fidelity {
    /// All fidelity levels in order.
    pub const ALL: [Fidelity; 5] = [
        Self::NoAnsi,
        Self::Xterm16,
        Self::Xterm256,
        Self::TrueColor,
        Self::Auto,
    ];

    /// Resolve [`Fidelity::Auto`] to a concrete level. All other levels
    /// resolve to themselves.
    pub const fn resolve(&self) -> Self {
        match self {
            Self::Auto => Self::TrueColor,
            _ => *self,
        }
    }

    /// Determine whether this fidelity level suffices for rendering the color
    /// as is, without conversion.
    pub fn covers(&self, color: impl Into<Color>) -> bool {
        color.into().fidelity() <= self.resolve()
    }

    /// Get the snake case identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoAnsi => "no_ansi",
            Self::Xterm16 => "xterm_16",
            Self::Xterm256 => "xterm_256",
            Self::TrueColor => "true_color",
            Self::Auto => "auto",
        }
    }
}

impl std::str::FromStr for Fidelity {
    type Err = UnknownIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fidelity| fidelity.name() == s)
            .ok_or_else(|| UnknownIdentifierError {
                kind: "fidelity",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Fidelity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
