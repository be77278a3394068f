//! Palettes of terminal colors and nearest-color approximation.
//!
//! A [`PaletteRegistry`] holds the *exact* colors of one palette, keyed by
//! their hexadecimal values, plus a cache of previously computed
//! approximations. [`Palettes`] bundles one registry each for 16-colors,
//! 256-colors, and named RGB colors and uses them to downgrade colors to a
//! rendering target's [`Fidelity`](crate::style::Fidelity).
//!
//! Approximation is a linear scan that minimizes the squared Euclidian
//! distance in RGB. Ties go to the color that was registered first.
//!
//! ```
//! # use termtint::palette::Palettes;
//! # use termtint::termco::TerminalColor;
//! let palettes = Palettes::xterm();
//!
//! // An exact hit
//! let maroon = palettes.eight_bit().find_closest(0x800000)?;
//! assert_eq!(maroon.distance, 0);
//! assert_eq!(maroon.color.index(), 1);
//!
//! // An approximation, with 0x5fffaf at the same distance but registered later
//! let teal = palettes.eight_bit().find_closest(0x3aeba1)?;
//! assert_eq!(teal.color.hex_value(), 0x5fd7af);
//! assert_eq!(teal.color.index(), 79);
//! assert_eq!(teal.distance, 37 * 37 + 20 * 20 + 14 * 14);
//! # Ok::<(), termtint::error::EmptyPaletteError>(())
//! ```

mod data;
mod palettes;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::Rgb;
use crate::error::EmptyPaletteError;
use crate::termco::TerminalColor;

pub use data::{xterm_256, NAMED_RGB, XTERM_16};
pub use palettes::Palettes;

/// The kind of palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// The 16 extended ANSI colors.
    Sixteen,
    /// The 256 indexed colors.
    TwoFiveSix,
    /// Named 24-bit colors.
    Rgb,
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sixteen => "xterm_16",
            Self::TwoFiveSix => "xterm_256",
            Self::Rgb => "rgb",
        })
    }
}

/// The result of approximation: The closest color and its squared distance
/// to the queried color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Approximation<C> {
    pub color: C,
    pub distance: u32,
}

// ----------------------------------------------------------------------------------------------------------

#[derive(Debug)]
struct Registry<C> {
    // Exact colors in registration order
    exact: Vec<C>,
    // Hex value to position in exact
    index: HashMap<u32, usize>,
    // Hex value to position in exact, for approximated colors
    approx: HashMap<u32, usize>,
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self {
            exact: Vec::new(),
            index: HashMap::new(),
            approx: HashMap::new(),
        }
    }
}

/// A registry of the colors in one palette.
///
/// The registry retains *exact* colors in registration order. The first
/// registration of a hexadecimal value wins; later colors with the same value
/// are ignored. Approximations are cached, and the cache is cleared whenever
/// an exact color is added.
///
/// All methods take `&self`. A mutex guards the registry's state, since even
/// searches update the cache. Hence a registry can be shared between threads.
#[derive(Debug)]
pub struct PaletteRegistry<C> {
    kind: PaletteKind,
    inner: Mutex<Registry<C>>,
}

impl<C: TerminalColor + Copy> PaletteRegistry<C> {
    /// Create a new empty registry.
    pub fn new(kind: PaletteKind) -> Self {
        Self {
            kind,
            inner: Mutex::new(Registry::default()),
        }
    }

    /// Create a new registry with the given colors.
    pub fn with_colors(kind: PaletteKind, colors: impl IntoIterator<Item = C>) -> Self {
        let registry = Self::new(kind);
        registry.register_all(colors);
        registry
    }

    fn lock(&self) -> MutexGuard<'_, Registry<C>> {
        // Every critical section leaves the registry consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the palette kind.
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// Register the color as exact.
    ///
    /// This method returns `true` if the color was added and `false` if a
    /// color with the same hexadecimal value already is registered. Adding a
    /// color invalidates all cached approximations.
    pub fn register_exact(&self, color: C) -> bool {
        let hex = color.hex_value();
        let mut inner = self.lock();
        if inner.index.contains_key(&hex) {
            return false;
        }

        let position = inner.exact.len();
        inner.exact.push(color);
        inner.index.insert(hex, position);
        inner.approx.clear();

        tracing::debug!(
            palette = %self.kind,
            hex = format!("{:06x}", hex),
            "registered exact color, cleared approximations"
        );
        true
    }

    /// Register all colors as exact.
    pub fn register_all(&self, colors: impl IntoIterator<Item = C>) {
        for color in colors {
            self.register_exact(color);
        }
    }

    /// Find the color closest to the given hexadecimal value.
    ///
    /// Only the lower 24 bits of the value are used. An exact color is
    /// returned with distance 0 without searching. Otherwise, this method
    /// returns the cached approximation, if there is one, or scans the exact
    /// colors in registration order for the one with the smallest squared
    /// RGB distance and caches it.
    ///
    /// # Errors
    ///
    /// If the registry has no colors.
    pub fn find_closest(&self, hex: u32) -> Result<Approximation<C>, EmptyPaletteError> {
        let target = Rgb::from_hex_masked(hex);
        let hex = target.to_hex();
        let mut inner = self.lock();

        if let Some(&position) = inner.index.get(&hex) {
            return Ok(Approximation {
                color: inner.exact[position],
                distance: 0,
            });
        } else if inner.exact.is_empty() {
            return Err(EmptyPaletteError { kind: self.kind });
        }

        if inner.approx.is_empty() {
            inner.approx = inner.index.clone();
            tracing::trace!(
                palette = %self.kind,
                entries = inner.approx.len(),
                "seeded approximations"
            );
        }

        if let Some(&position) = inner.approx.get(&hex) {
            let color = inner.exact[position];
            return Ok(Approximation {
                color,
                distance: target.distance(&color.rgb()),
            });
        }

        let mut best = 0;
        let mut best_distance = u32::MAX;
        for (position, color) in inner.exact.iter().enumerate() {
            let distance = target.distance(&color.rgb());
            if distance < best_distance {
                best = position;
                best_distance = distance;
            }
        }

        inner.approx.insert(hex, best);
        let color = inner.exact[best];
        tracing::trace!(
            palette = %self.kind,
            query = format!("{:06x}", hex),
            result = format!("{:06x}", color.hex_value()),
            distance = best_distance,
            "approximated color"
        );

        Ok(Approximation {
            color,
            distance: best_distance,
        })
    }

    /// Get the exact color with the given hexadecimal value.
    pub fn get(&self, hex: u32) -> Option<C> {
        let inner = self.lock();
        inner.index.get(&hex).map(|&position| inner.exact[position])
    }

    /// Get the number of exact colors.
    pub fn len(&self) -> usize {
        self.lock().exact.len()
    }

    /// Determine whether this registry has no exact colors.
    pub fn is_empty(&self) -> bool {
        self.lock().exact.is_empty()
    }

    /// Get the exact colors in registration order.
    pub fn iter(&self) -> std::vec::IntoIter<C> {
        self.lock().exact.clone().into_iter()
    }

    /// Get the number of cached approximations, including the exact colors
    /// copied into the cache when seeding it.
    pub fn cache_len(&self) -> usize {
        self.lock().approx.len()
    }

    /// Find the exact color with the given name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<C> {
        self.lock()
            .exact
            .iter()
            .find(|color| {
                color
                    .name()
                    .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            })
            .copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::termco::{Color256, ColorRgb};

    fn gray(level: u8, name: &'static str) -> ColorRgb {
        ColorRgb::named(u32::from_be_bytes([0, level, level, level]), name)
    }

    #[test]
    fn test_exact() -> Result<(), EmptyPaletteError> {
        let registry = PaletteRegistry::new(PaletteKind::Rgb);
        assert!(registry.is_empty());
        assert!(registry.register_exact(gray(0, "black")));
        assert!(registry.register_exact(gray(255, "white")));
        assert!(!registry.register_exact(gray(255, "also white")));
        assert_eq!(registry.len(), 2);

        let white = registry.find_closest(0xffffff)?;
        assert_eq!(white.distance, 0);
        assert_eq!(white.color.name(), Some("white"));
        assert_eq!(registry.get(0xffffff).and_then(|c| c.name()), Some("white"));
        assert_eq!(registry.find_by_name("WHITE"), Some(gray(255, "white")));
        assert_eq!(registry.cache_len(), 0);
        Ok(())
    }

    #[test]
    fn test_approximation() -> Result<(), EmptyPaletteError> {
        let registry = PaletteRegistry::with_colors(
            PaletteKind::Rgb,
            [gray(0, "black"), gray(128, "gray"), gray(255, "white")],
        );

        let result = registry.find_closest(0x707070)?;
        assert_eq!(result.color.name(), Some("gray"));
        assert_eq!(result.distance, 3 * 16 * 16);
        assert_eq!(registry.cache_len(), 4);

        // Cached
        assert_eq!(registry.find_closest(0x707070)?, result);
        assert_eq!(registry.cache_len(), 4);

        // Registration invalidates the cache.
        registry.register_exact(gray(0x70, "dark gray"));
        assert_eq!(registry.cache_len(), 0);
        let result = registry.find_closest(0x707070)?;
        assert_eq!(result.color.name(), Some("dark gray"));
        assert_eq!(result.distance, 0);
        Ok(())
    }

    #[test]
    fn test_ties() -> Result<(), EmptyPaletteError> {
        let registry = PaletteRegistry::with_colors(
            PaletteKind::Rgb,
            [gray(100, "first"), gray(0, "black"), gray(120, "second")],
        );

        assert_eq!(registry.find_closest(0x6e6e6e)?.color.name(), Some("first"));
        let names: Vec<_> = registry.iter().filter_map(|c| c.name()).collect();
        assert_eq!(names, ["first", "black", "second"]);
        Ok(())
    }

    fn approximate_all(
        palettes: &Palettes,
        queries: &[u32],
    ) -> Result<Vec<Approximation<ColorRgb>>, EmptyPaletteError> {
        queries
            .iter()
            .map(|&hex| palettes.rgb().find_closest(hex))
            .collect()
    }

    #[test]
    fn test_threads() -> Result<(), EmptyPaletteError> {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Palettes>();
        assert_send_sync::<PaletteRegistry<Color256>>();

        const TEAL: u32 = 0x3aeba1;
        let queries = [TEAL, 0x3aeba2, 0xd72827, 0x05465a, 0xaf87ff, 0x7f7f7f];

        let before = approximate_all(&Palettes::xterm(), &queries)?;
        let after = {
            let palettes = Palettes::xterm();
            palettes.rgb().register_exact(ColorRgb::named(TEAL, "teal"));
            approximate_all(&palettes, &queries)?
        };
        assert_ne!(before, after);

        let palettes = Palettes::xterm();
        let shared = &palettes;
        let queries = &queries;

        std::thread::scope(|scope| -> Result<(), EmptyPaletteError> {
            let readers: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        (0..50)
                            .map(|_| approximate_all(shared, queries))
                            .collect::<Result<Vec<_>, _>>()
                    })
                })
                .collect();
            scope.spawn(move || shared.rgb().register_exact(ColorRgb::named(TEAL, "teal")));

            for reader in readers {
                for round in reader.join().expect("reader should not panic")? {
                    for (index, result) in round.iter().enumerate() {
                        assert!(
                            *result == before[index] || *result == after[index],
                            "{:06x} approximated as {:?}",
                            queries[index],
                            result
                        );
                    }
                }
            }
            Ok(())
        })?;

        let teal = palettes.rgb().find_closest(TEAL)?;
        assert_eq!(teal.distance, 0);
        assert_eq!(teal.color.name(), Some("teal"));
        assert_eq!(approximate_all(&palettes, queries)?, after);
        Ok(())
    }

    #[test]
    fn test_empty() {
        let registry = PaletteRegistry::<ColorRgb>::new(PaletteKind::Rgb);
        assert_eq!(
            registry.find_closest(0x123456),
            Err(EmptyPaletteError {
                kind: PaletteKind::Rgb
            })
        );
        assert_eq!(
            format!("{}", EmptyPaletteError { kind: PaletteKind::Sixteen }),
            "palette xterm_16 has no colors to approximate with"
        );
    }
}
