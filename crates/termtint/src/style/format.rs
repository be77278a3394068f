use super::Fidelity;
use crate::sgr::codes;

/// A text attribute other than regular.
///
/// This enumeration models attributes that differ from the default appearance.
/// Discriminants are powers of two and hence can be combined into a bit vector.
/// The declaration order is also the order in which renderers emit the
/// attributes. Unlike color, bold and dim are independent of each other, even
/// though both are disabled by the same SGR parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold = 0x1,
    Dim = 0x2,
    Italic = 0x4,
    Underlined = 0x8,
    DoubleUnderlined = 0x10,
    Blinking = 0x20,
    Inverse = 0x40,
    Hidden = 0x80,
    Strikethrough = 0x100,
    Overlined = 0x200,
}

impl Attribute {
    /// All text attributes in emission order.
    pub const ALL: [Attribute; 10] = [
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underlined,
        Self::DoubleUnderlined,
        Self::Blinking,
        Self::Inverse,
        Self::Hidden,
        Self::Strikethrough,
        Self::Overlined,
    ];

    #[inline]
    const fn bits(&self) -> u16 {
        *self as u16
    }

    /// Get the SGR parameter for enabling this attribute.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold => codes::BOLD,
            Dim => codes::DIM,
            Italic => codes::ITALIC,
            Underlined => codes::UNDERLINED,
            DoubleUnderlined => codes::DOUBLE_UNDERLINED,
            Blinking => codes::BLINK_SLOW,
            Inverse => codes::INVERSED,
            Hidden => codes::HIDDEN,
            Strikethrough => codes::CROSSLINED,
            Overlined => codes::OVERLINED,
        }
    }

    /// Get the SGR parameter for disabling this attribute.
    pub const fn disable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold | Dim => codes::BOLD_DIM_OFF,
            Italic => codes::ITALIC_OFF,
            Underlined | DoubleUnderlined => codes::UNDERLINED_OFF,
            Blinking => codes::BLINK_OFF,
            Inverse => codes::INVERSED_OFF,
            Hidden => codes::HIDDEN_OFF,
            Strikethrough => codes::CROSSLINED_OFF,
            Overlined => codes::OVERLINED_OFF,
        }
    }

    /// Get the position of this attribute in [`Attribute::ALL`].
    pub const fn ordinal(&self) -> usize {
        self.bits().trailing_zeros() as usize
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A text format combining zero or more text attributes.
///
/// There are two fundamentally different representations of a terminal's text
/// formatting. The first representation captures the *formatting state*, i.e.,
/// models only attributes that differ from the terminal's default appearance.
/// The second representation captures *formatting changes*, i.e., models
/// instructions for changing a terminal's appearance. This struct implements
/// the former representation, i.e., a *formatting state*.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Format(u16);

impl Format {
    /// Create the empty format in a const context.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    const fn bits(&self) -> u16 {
        self.0
    }

    #[inline]
    const fn and_not(&self, other: Self) -> Self {
        Self(self.bits() & !other.bits())
    }

    /// Determine whether this format is the default format.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the number of format attributes that diverge from the default
    /// formatting.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Determine whether this format includes the attribute.
    #[inline]
    pub const fn contains(&self, attribute: Attribute) -> bool {
        self.0 & attribute.bits() != 0
    }

    /// Get an iterator over the non-default text attributes in emission order.
    #[inline]
    pub const fn attributes(&self) -> AttributeIter {
        AttributeIter {
            format: *self,
            cursor: 0,
            remaining: self.len(),
        }
    }
}

impl std::fmt::Debug for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.attributes()).finish()
    }
}

impl FromIterator<Attribute> for Format {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        iter.into_iter().fold(Format::empty(), |format, attr| format + attr)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An iterator over text attributes.
#[derive(Debug)]
pub struct AttributeIter {
    format: Format,
    cursor: usize,
    remaining: usize,
}

impl std::iter::Iterator for AttributeIter {
    type Item = Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(attribute) = Attribute::ALL.get(self.cursor).copied() {
            self.cursor += 1;
            if self.format.contains(attribute) {
                self.remaining -= 1;
                return Some(attribute);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AttributeIter {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl std::iter::FusedIterator for AttributeIter {}

// ----------------------------------------------------------------------------------------------------------

/// A format update comprising disabling and enabling formats.
///
/// This struct implements the *formatting change* representation. A style's
/// explicitly enabled attributes end up in the enabling format, its
/// explicitly disabled attributes in the disabling format. Attributes that
/// are neither remain unset, which is what allows styles to inherit them.
/// An attribute is never both enabled and disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatUpdate {
    disable: Format,
    enable: Format,
}

impl FormatUpdate {
    /// Create a new empty format update in a const context.
    pub const fn empty() -> Self {
        Self {
            disable: Format::empty(),
            enable: Format::empty(),
        }
    }

    /// Create a new format update. Attributes that are both disabled and
    /// enabled cancel each other out.
    pub const fn new(disable: Format, enable: Format) -> Self {
        Self {
            disable: disable.and_not(enable),
            enable: enable.and_not(disable),
        }
    }

    /// Determine whether this format update is empty, i.e., changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.disable.is_empty() && self.enable.is_empty()
    }

    /// Get the formatting to be disabled.
    pub const fn disable(&self) -> Format {
        self.disable
    }

    /// Get the formatting to be enabled.
    pub const fn enable(&self) -> Format {
        self.enable
    }

    /// Get the attribute's setting: `Some(true)` if enabled, `Some(false)` if
    /// disabled, and `None` if unset.
    pub const fn get(&self, attribute: Attribute) -> Option<bool> {
        if self.enable.contains(attribute) {
            Some(true)
        } else if self.disable.contains(attribute) {
            Some(false)
        } else {
            None
        }
    }

    /// Create a new format update with the attribute set as given.
    pub const fn with(&self, attribute: Attribute, value: Option<bool>) -> Self {
        let bits = attribute.bits();
        let disable = Format(self.disable.bits() & !bits);
        let enable = Format(self.enable.bits() & !bits);

        match value {
            None => Self { disable, enable },
            Some(true) => Self {
                disable,
                enable: Format(enable.bits() | bits),
            },
            Some(false) => Self {
                disable: Format(disable.bits() | bits),
                enable,
            },
        }
    }

    /// Cap this format by the given fidelity.
    ///
    /// This method returns this format, unless the fidelity is
    /// [`Fidelity::NoAnsi`], in which case it returns an empty format.
    pub const fn cap(&self, fidelity: Fidelity) -> Self {
        match fidelity {
            Fidelity::NoAnsi => Self::empty(),
            _ => *self,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------
// From

impl From<Attribute> for Format {
    fn from(value: Attribute) -> Self {
        Self(value.bits())
    }
}

impl From<Attribute> for FormatUpdate {
    fn from(value: Attribute) -> Self {
        Self {
            disable: Format::default(),
            enable: value.into(),
        }
    }
}

impl From<Format> for FormatUpdate {
    fn from(value: Format) -> Self {
        Self {
            disable: Format::default(),
            enable: value,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------
// Add and Neg

impl std::ops::Add for Attribute {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add<Attribute> for Format {
    type Output = Format;

    fn add(self, other: Attribute) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add for Format {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Neg for Attribute {
    type Output = FormatUpdate;

    fn neg(self) -> Self::Output {
        FormatUpdate::new(self.into(), Format::default())
    }
}

impl std::ops::Neg for Format {
    type Output = FormatUpdate;

    fn neg(self) -> Self::Output {
        FormatUpdate::new(self, Format::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_attribute() {
        for (index, attribute) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attribute.ordinal(), index);
        }

        assert_eq!(Attribute::Bold.disable_sgr(), Attribute::Dim.disable_sgr());
        assert_eq!(Attribute::DoubleUnderlined.enable_sgr(), 21);
        assert_eq!(Attribute::Overlined.disable_sgr(), 55);
    }

    #[test]
    fn test_format() {
        use super::Attribute::*;

        let format = Overlined + Bold + Dim;
        assert_eq!(format.len(), 3);
        assert!(format.contains(Dim));
        assert!(!format.contains(Italic));

        let mut iter = format.attributes();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(Bold));
        assert_eq!(iter.next(), Some(Dim));
        assert_eq!(iter.next(), Some(Overlined));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        assert_eq!(format!("{:?}", Italic + Hidden), "{Italic, Hidden}");
        assert_eq!([Hidden, Italic].into_iter().collect::<Format>(), Italic + Hidden);
    }

    #[test]
    fn test_format_update() {
        use super::Attribute::*;

        let update = FormatUpdate::from(Bold + Italic).with(Italic, Some(false));
        assert_eq!(update.get(Bold), Some(true));
        assert_eq!(update.get(Italic), Some(false));
        assert_eq!(update.get(Dim), None);
        assert_eq!(update.enable(), Format::from(Bold));
        assert_eq!(update.disable(), Format::from(Italic));

        let update = update.with(Italic, None).with(Bold, None);
        assert!(update.is_empty());

        assert_eq!(-(Bold + Dim), FormatUpdate::new(Bold + Dim, Format::empty()));
        assert_eq!(FormatUpdate::new(Bold + Dim, Dim.into()), -Bold);
        assert_eq!(FormatUpdate::from(Bold).cap(Fidelity::NoAnsi), FormatUpdate::empty());
        assert_eq!(FormatUpdate::from(Bold).cap(Fidelity::Xterm16), Bold.into());
    }
}
