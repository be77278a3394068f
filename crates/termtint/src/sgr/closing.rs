use std::collections::HashMap;

use super::{codes, SgrSequence};
use crate::style::Attribute;

/// A registry of closing pairs.
///
/// The registry maps SGR parameters that start some appearance, i.e.,
/// *starters*, to the SGR parameter that ends it again, i.e., the *breaker*.
/// Most starters are a single parameter. Extended colors are *complex*
/// starters: A fixed prefix such as `38;5` followed by a fixed number of
/// trailing parameters, here the color index. The registry uses these
/// bindings to compute the sequence that undoes an arbitrary opening
/// sequence.
///
/// ```
/// # use termtint::sgr::{ClosingRegistry, SgrSequence};
/// # use termtint::style::Layer;
/// let registry = ClosingRegistry::standard();
/// let opening = SgrSequence::new([1, 31]);
/// assert_eq!(registry.close(&opening).params(), &[22, 39]);
///
/// let violet = SgrSequence::make_color_256(141, Layer::Foreground)?;
/// assert_eq!(registry.close(&violet).params(), &[39]);
/// # Ok::<(), termtint::error::OutOfBoundsError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClosingRegistry {
    regular: HashMap<u8, u8>,
    complex: HashMap<Box<[u8]>, (usize, u8)>,
    max_prefix_len: usize,
}

impl ClosingRegistry {
    /// Create a new registry without bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new registry with bindings for all text attributes and all
    /// foreground and background colors.
    pub fn standard() -> Self {
        let mut registry = Self::new();

        for attribute in Attribute::ALL {
            registry.bind(attribute.enable_sgr(), attribute.disable_sgr());
        }
        registry.bind(codes::BLINK_FAST, codes::BLINK_OFF);

        for code in codes::FOREGROUND_COLORS {
            registry.bind(code, codes::COLOR_OFF);
        }
        for code in codes::BACKGROUND_COLORS {
            registry.bind(code, codes::BG_COLOR_OFF);
        }

        for (extended, breaker) in [
            (codes::COLOR_EXTENDED, codes::COLOR_OFF),
            (codes::BG_COLOR_EXTENDED, codes::BG_COLOR_OFF),
        ] {
            registry.bind_complex(&[extended, codes::EXTENDED_MODE_256], 1, breaker);
            registry.bind_complex(&[extended, codes::EXTENDED_MODE_RGB], 3, breaker);
        }

        registry
    }

    /// Bind the single-parameter starter to the breaker.
    ///
    /// A later binding for the same starter replaces the earlier one.
    pub fn bind(&mut self, starter: u8, breaker: u8) {
        self.regular.insert(starter, breaker);
    }

    /// Bind the complex starter, i.e., the prefix followed by the given
    /// number of trailing parameters, to the breaker.
    ///
    /// Empty prefixes are ignored.
    pub fn bind_complex(&mut self, prefix: &[u8], trailing: usize, breaker: u8) {
        if prefix.is_empty() {
            return;
        }

        self.max_prefix_len = self.max_prefix_len.max(prefix.len());
        self.complex.insert(prefix.into(), (trailing, breaker));
    }

    /// Get the breaker for the single-parameter starter.
    pub fn breaker(&self, starter: u8) -> Option<u8> {
        self.regular.get(&starter).copied()
    }

    /// Compute the closing sequence for the opening sequence.
    ///
    /// This method scans the opening parameters from front to back. At each
    /// position, it first tries complex starters by ascending prefix length
    /// and consumes the prefix with its trailing parameters for the first
    /// match. Otherwise, it consumes a single parameter. If the consumed
    /// starter has a breaker, the breaker is appended to the result. Starters
    /// without breakers, including the hard reset, contribute nothing.
    /// Duplicate breakers are retained.
    pub fn close(&self, opening: &SgrSequence) -> SgrSequence {
        let params = opening.params();
        let mut breakers = Vec::new();
        let mut cursor = 0;

        while cursor < params.len() {
            let remaining = &params[cursor..];

            let complex = (1..=remaining.len().min(self.max_prefix_len)).find_map(|length| {
                self.complex
                    .get(&remaining[..length])
                    .map(|&(trailing, breaker)| (length + trailing, breaker))
            });

            let (consumed, breaker) = match complex {
                Some((consumed, breaker)) => (consumed.min(remaining.len()), Some(breaker)),
                None => (1, self.breaker(remaining[0])),
            };

            if let Some(breaker) = breaker {
                breakers.push(breaker);
            }
            cursor += consumed;
        }

        SgrSequence::new(breakers)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Layer;

    #[test]
    fn test_regular() {
        let registry = ClosingRegistry::standard();
        assert_eq!(registry.close(&SgrSequence::new([1, 31])).params(), &[22, 39]);
        assert_eq!(registry.close(&SgrSequence::new([31, 1])).params(), &[39, 22]);
        assert_eq!(registry.close(&SgrSequence::new([1, 2])).params(), &[22, 22]);
        assert_eq!(registry.close(&SgrSequence::from(6)).params(), &[25]);
        assert_eq!(registry.close(&SgrSequence::from(53)).params(), &[55]);
        assert_eq!(registry.close(&SgrSequence::from(104)).params(), &[49]);

        for attribute in Attribute::ALL {
            assert_eq!(registry.breaker(attribute.enable_sgr()), Some(attribute.disable_sgr()));
        }
    }

    #[test]
    fn test_complex() -> Result<(), crate::error::OutOfBoundsError> {
        let registry = ClosingRegistry::standard();

        let violet = SgrSequence::make_color_256(141, Layer::Foreground)?;
        assert_eq!(registry.close(&violet).params(), &[39]);

        let teal = SgrSequence::make_color_rgb(5, 70, 90, Layer::Background)?;
        assert_eq!(registry.close(&teal).params(), &[49]);

        // The trailing 5 of the RGB color must not be mistaken for blinking.
        let opening = SgrSequence::new([1]) + teal + SgrSequence::new([4]) + violet;
        assert_eq!(registry.close(&opening).params(), &[22, 49, 24, 39]);

        // Truncated
        assert_eq!(registry.close(&SgrSequence::new([48, 2, 0])).params(), &[49]);
        Ok(())
    }

    #[test]
    fn test_no_breaker() {
        let registry = ClosingRegistry::standard();
        assert!(registry.close(&SgrSequence::empty()).is_empty());
        assert!(registry.close(&SgrSequence::reset()).is_empty());
        assert!(registry.close(&SgrSequence::new([22, 39])).is_empty());
        assert_eq!(registry.close(&SgrSequence::new([0, 3])).params(), &[23]);

        let empty = ClosingRegistry::new();
        assert!(empty.close(&SgrSequence::new([1, 38, 5, 1])).is_empty());
    }

    #[test]
    fn test_custom_bindings() {
        let mut registry = ClosingRegistry::new();
        registry.bind(1, 21);
        registry.bind(1, 22);
        registry.bind_complex(&[], 1, 0);
        registry.bind_complex(&[58, 5], 1, 59);

        assert_eq!(registry.breaker(1), Some(22));
        assert_eq!(registry.close(&SgrSequence::new([58, 5, 1, 1])).params(), &[59, 22]);
    }
}
