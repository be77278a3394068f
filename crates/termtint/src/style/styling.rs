use super::{Attribute, Fidelity, FormatUpdate};
use crate::error::EmptyPaletteError;
use crate::palette::Palettes;
use crate::termco::Color;

/// A terminal style.
///
/// A terminal style comprises text formatting, a foreground color, and a
/// background color. Each attribute may be enabled, disabled, or unset. Unset
/// colors are [`Color::NoOp`], which renders to nothing. If nothing is set,
/// the style denotes the default appearance. Since instances are immutable,
/// terminal styles can be arbitrarily reused.
///
/// Styles are created with a [`StyleBuilder`]:
///
/// ```
/// # use termtint::style::{Attribute, Style};
/// # use termtint::termco::{Color, ColorRgb};
/// let parent = Style::builder()
///     .bold()
///     .foreground(ColorRgb::named(0xd72827, "brick"))
///     .build();
/// let child = Style::builder()
///     .underlined()
///     .parent(&parent)
///     .build();
///
/// assert_eq!(child.attribute(Attribute::Bold), Some(true));
/// assert_eq!(child.attribute(Attribute::Underlined), Some(true));
/// assert_eq!(child.attribute(Attribute::Italic), None);
/// assert_eq!(child.foreground(), parent.foreground());
/// assert_eq!(child.background(), Color::NoOp);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    format: FormatUpdate,
    foreground: Color,
    background: Color,
}

impl Style {
    /// Create a new style builder.
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Get this style's formatting.
    pub fn format(&self) -> FormatUpdate {
        self.format
    }

    /// Get the attribute's setting: `Some(true)` if enabled, `Some(false)` if
    /// disabled, and `None` if unset.
    pub fn attribute(&self, attribute: Attribute) -> Option<bool> {
        self.format.get(attribute)
    }

    /// Determine whether the attribute is enabled.
    pub fn is_enabled(&self, attribute: Attribute) -> bool {
        self.format.enable().contains(attribute)
    }

    /// Get this style's foreground color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Get this style's background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Determine whether this style is the default style.
    pub fn is_default(&self) -> bool {
        self.format.is_empty() && self.foreground.is_noop() && self.background.is_noop()
    }

    /// Determine this style's fidelity.
    ///
    /// This method computes the maximum fidelity of this style's enabled
    /// attributes, foreground color, and background color. Attributes require
    /// ANSI escapes and hence at least [`Fidelity::Xterm16`].
    pub fn fidelity(&self) -> Fidelity {
        (!self.format.enable().is_empty())
            .then_some(Fidelity::Xterm16)
            .into_iter()
            .chain([self.foreground.fidelity(), self.background.fidelity()])
            .max()
            .unwrap_or(Fidelity::NoAnsi)
    }

    /// Cap this style to the given fidelity.
    ///
    /// Colors the fidelity does not cover are replaced by their closest
    /// approximation in the palettes. At [`Fidelity::NoAnsi`], the result is
    /// the default style.
    ///
    /// # Errors
    ///
    /// If a needed palette has no colors.
    pub fn cap(&self, fidelity: Fidelity, palettes: &Palettes) -> Result<Self, EmptyPaletteError> {
        Ok(Self {
            format: self.format.cap(fidelity),
            foreground: palettes.cap(&self.foreground, fidelity)?,
            background: palettes.cap(&self.background, fidelity)?,
        })
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A builder of terminal styles.
///
/// Every attribute and color may be set explicitly. When building the style,
/// explicit settings take precedence, then the parent's settings, if there
/// is a parent. Anything else remains unset. The parent is copied into the
/// builder, so later styles never observe changes to a former parent.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    attributes: [Option<bool>; Attribute::ALL.len()],
    foreground: Option<Color>,
    background: Option<Color>,
    parent: Option<Style>,
}

macro_rules! attribute_setters {
    ($($(#[$meta:meta])* $name:ident => $attr:ident,)*) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> Self {
                self.attribute(Attribute::$attr, true)
            }
        )*
    };
}

impl StyleBuilder {
    attribute_setters! {
        /// Enable bold formatting.
        bold => Bold,
        /// Enable dim formatting.
        dim => Dim,
        /// Enable italic formatting.
        italic => Italic,
        /// Enable underlined formatting.
        underlined => Underlined,
        /// Enable double underlined formatting.
        double_underlined => DoubleUnderlined,
        /// Enable blinking formatting.
        blinking => Blinking,
        /// Enable inverse formatting.
        inverse => Inverse,
        /// Enable hidden formatting.
        hidden => Hidden,
        /// Enable strikethrough formatting.
        strikethrough => Strikethrough,
        /// Enable overlined formatting.
        overlined => Overlined,
    }

    /// Explicitly enable or disable the attribute.
    pub fn attribute(mut self, attribute: Attribute, enabled: bool) -> Self {
        self.attributes[attribute.ordinal()] = Some(enabled);
        self
    }

    /// Apply the format update.
    ///
    /// The update's enabled attributes are enabled, its disabled attributes
    /// disabled, and all other attributes keep their current setting. Since
    /// attributes and formats convert into updates and negate into disabling
    /// updates, this method also accepts `Bold + Italic` or `-Attribute::Dim`.
    ///
    /// ```
    /// # use termtint::style::{Attribute, Style};
    /// let style = Style::builder()
    ///     .format(Attribute::Bold + Attribute::Italic)
    ///     .format(-Attribute::Italic)
    ///     .build();
    /// assert_eq!(style.attribute(Attribute::Bold), Some(true));
    /// assert_eq!(style.attribute(Attribute::Italic), Some(false));
    /// ```
    pub fn format(mut self, update: impl Into<FormatUpdate>) -> Self {
        let update = update.into();
        for attribute in Attribute::ALL {
            if let Some(enabled) = update.get(attribute) {
                self.attributes[attribute.ordinal()] = Some(enabled);
            }
        }
        self
    }

    /// Set the foreground color. The no-op color leaves it unset.
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into()).filter(|c| !c.is_noop());
        self
    }

    /// Set the background color. The no-op color leaves it unset.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into()).filter(|c| !c.is_noop());
        self
    }

    /// Inherit unset fields from the parent.
    pub fn parent(mut self, parent: &Style) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Build the style.
    pub fn build(self) -> Style {
        let parent = self.parent.unwrap_or_default();

        let format = Attribute::ALL
            .into_iter()
            .fold(FormatUpdate::empty(), |format, attribute| {
                let value = self.attributes[attribute.ordinal()].or(parent.attribute(attribute));
                format.with(attribute, value)
            });

        Style {
            format,
            foreground: self.foreground.unwrap_or(parent.foreground),
            background: self.background.unwrap_or(parent.background),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::termco::{Color16, Color256, ColorRgb};

    #[test]
    fn test_style() {
        use super::Attribute::*;

        let style = Style::builder().build();
        assert_eq!(style, Style::default());
        assert!(style.is_default());
        assert_eq!(style.fidelity(), Fidelity::NoAnsi);

        let style = Style::builder().underlined().bold().build();
        assert_eq!(style.format(), (Bold + Underlined).into());
        assert_eq!(style.foreground(), Color::NoOp);
        assert_eq!(style.fidelity(), Fidelity::Xterm16);

        let style = Style::builder()
            .attribute(Italic, false)
            .background(Color256::new(0xaf87ff, 141))
            .build();
        assert_eq!(style.attribute(Italic), Some(false));
        assert!(!style.is_enabled(Italic));
        assert!(!style.is_default());
        assert_eq!(style.fidelity(), Fidelity::Xterm256);
    }

    #[test]
    fn test_inheritance() {
        use super::Attribute::*;

        let red = Color16::new(0x800000, 31, 41);
        let teal = ColorRgb::named(0x3aeba1, "teal");

        let parent = Style::builder()
            .bold()
            .attribute(Italic, false)
            .foreground(red)
            .background(teal)
            .build();
        let child = Style::builder()
            .attribute(Bold, false)
            .blinking()
            .foreground(Color::NoOp)
            .parent(&parent)
            .build();

        assert_eq!(child.attribute(Bold), Some(false));
        assert_eq!(child.attribute(Italic), Some(false));
        assert_eq!(child.attribute(Blinking), Some(true));
        assert_eq!(child.attribute(Hidden), None);
        assert_eq!(child.foreground(), Color::from(red));
        assert_eq!(child.background(), Color::from(teal));
        assert_eq!(child.fidelity(), Fidelity::TrueColor);

        let grandchild = Style::builder().parent(&child).build();
        assert_eq!(grandchild, child);
    }

    #[test]
    fn test_format_updates() {
        use super::Attribute::*;

        let parent = Style::builder().format(Bold + Italic + Dim).build();
        assert_eq!(parent.format(), FormatUpdate::from(Bold + Italic + Dim));

        let child = Style::builder()
            .format(-(Italic + Dim))
            .format(Underlined)
            .parent(&parent)
            .build();
        assert_eq!(child.attribute(Bold), Some(true));
        assert_eq!(child.attribute(Italic), Some(false));
        assert_eq!(child.attribute(Dim), Some(false));
        assert_eq!(child.attribute(Underlined), Some(true));
        assert_eq!(child.format(), FormatUpdate::new(Italic + Dim, Bold + Underlined));

        // Later settings win, and an empty update changes nothing.
        let style = Style::builder()
            .bold()
            .format(-Bold)
            .format(FormatUpdate::empty())
            .build();
        assert_eq!(style.attribute(Bold), Some(false));
        assert_eq!(
            Style::builder().format(FormatUpdate::new(Bold.into(), Bold.into())).build(),
            Style::default()
        );
    }

    #[test]
    fn test_cap() -> Result<(), EmptyPaletteError> {
        let palettes = Palettes::xterm();
        let style = Style::builder()
            .bold()
            .foreground(ColorRgb::named(0xff0000, "red"))
            .build();

        let capped = style.cap(Fidelity::Xterm256, &palettes)?;
        assert!(capped.is_enabled(Attribute::Bold));
        assert_eq!(capped.foreground().fidelity(), Fidelity::Xterm256);
        assert_eq!(capped.foreground().hex_value(), Some(0xff0000));

        let capped = style.cap(Fidelity::Xterm16, &palettes)?;
        assert_eq!(capped.foreground().fidelity(), Fidelity::Xterm16);
        assert_eq!(capped.foreground().hex_value(), Some(0xff0000));

        assert_eq!(style.cap(Fidelity::TrueColor, &palettes)?, style);
        assert_eq!(style.cap(Fidelity::NoAnsi, &palettes)?, Style::default());
        Ok(())
    }
}
