//! # Term 🎨 Tint
//!
//! Termtint renders styled text for terminals of every vintage, from 16-color
//! consoles to true-color emulators, and for a few targets that are no
//! terminals at all: HTML, tmux status lines, and plain text. When a style
//! uses colors the target cannot display, termtint downgrades them to the
//! closest color the target supports, deterministically and with a cache.
//!
//!
//! ## 1. Overview
//!
//! Termtint's main abstractions are:
//!
//!   * The [`core`] module implements **color spaces** [`Rgb`](core::Rgb),
//!     [`Hsv`](core::Hsv), [`Xyz`](core::Xyz), and [`Lab`](core::Lab)
//!     together with conversions between them.
//!   * The [`termco`] module offers a choice of **terminal-specific color
//!     formats** [`Color16`](termco::Color16),
//!     [`Color256`](termco::Color256), and [`ColorRgb`](termco::ColorRgb), as
//!     well as the wrapper [`Color`](termco::Color), whose
//!     [`Color::NoOp`](termco::Color::NoOp) stands in for unset colors.
//!   * The [`palette`] module implements **palette registries** and
//!     **nearest-color approximation**. [`Palettes`](palette::Palettes)
//!     bundles the registries for 16-colors, 256-colors, and named RGB colors
//!     and downgrades colors to a [`Fidelity`](style::Fidelity).
//!   * The [`sgr`] module implements **SGR escape sequences** with
//!     [`SgrSequence`](sgr::SgrSequence) and computes the sequence undoing an
//!     arbitrary opening sequence with [`ClosingRegistry`](sgr::ClosingRegistry).
//!   * The [`style`] module defines **terminal [`Style`](style::Style)s** as a
//!     text [`FormatUpdate`](style::FormatUpdate) combined with foreground and
//!     background [`Color`](termco::Color)s. Styles are assembled with a
//!     [`StyleBuilder`](style::StyleBuilder) and may inherit from a parent.
//!   * The [`render`] module turns text and a style into output for one of
//!     several **backends**, with [`RendererConfig`](render::RendererConfig)
//!     selecting backend and fidelity.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use std::sync::Arc;
//! # use termtint::palette::Palettes;
//! # use termtint::render::{render, SgrRenderer};
//! # use termtint::style::{Fidelity, Style};
//! # use termtint::termco::ColorRgb;
//! let palettes = Arc::new(Palettes::xterm());
//! let style = Style::builder()
//!     .bold()
//!     .foreground(ColorRgb::new(0x3aeba1)?)
//!     .build();
//!
//! let renderer = SgrRenderer::new(palettes.clone(), Fidelity::TrueColor);
//! assert_eq!(
//!     render("Wow!", &style, &renderer)?,
//!     "\x1b[1;38;2;58;235;161mWow!\x1b[22;39m"
//! );
//!
//! let renderer = SgrRenderer::new(palettes, Fidelity::Xterm256);
//! assert_eq!(
//!     render("Wow!", &style, &renderer)?,
//!     "\x1b[1;38;5;79mWow!\x1b[22;39m"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//!
//! ## 3. Features
//!
//! The optional `serde` feature derives `Serialize` and `Deserialize` for
//! [`Fidelity`](style::Fidelity), [`Backend`](render::Backend), and
//! [`RendererConfig`](render::RendererConfig).
//!
//!
//! ## 4. Logging
//!
//! Termtint emits [`tracing`](https://docs.rs/tracing) events when palettes
//! change and when colors are approximated, but never installs a subscriber.

pub mod core;
pub mod error;
pub mod palette;
pub mod render;
pub mod sgr;
pub mod style;
pub mod termco;
