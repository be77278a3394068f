//! End-to-end rendering scenarios across backends and fidelity levels.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use termtint::error::EmptyPaletteError;
use termtint::palette::{Palettes, XTERM_16};
use termtint::render::{
    render, Backend, DebugRenderer, HtmlRenderer, NoOpRenderer, Renderer, RendererConfig,
    SgrRenderer, TmuxRenderer,
};
use termtint::sgr::{ClosingRegistry, SgrSequence};
use termtint::style::{Attribute, Fidelity, Style};
use termtint::termco::{Color, Color256, ColorRgb, TerminalColor};

fn palettes() -> Arc<Palettes> {
    Arc::new(Palettes::xterm())
}

fn teal() -> ColorRgb {
    ColorRgb::named(0x3aeba1, "teal")
}

#[test]
fn sixteen_color_at_true_color() -> Result<(), EmptyPaletteError> {
    let style = Style::builder().foreground(XTERM_16[1]).build();
    let renderer = SgrRenderer::new(palettes(), Fidelity::TrueColor);
    assert_eq!(render("AB", &style, &renderer)?, "\x1b[31mAB\x1b[39m");
    Ok(())
}

#[test]
fn true_color_downgraded_to_256() -> Result<(), EmptyPaletteError> {
    let palettes = palettes();
    let style = Style::builder().foreground(teal()).build();
    let renderer = SgrRenderer::new(palettes.clone(), Fidelity::Xterm256);
    let output = render("AB", &style, &renderer)?;

    let nearest = palettes.eight_bit().find_closest(0x3aeba1)?;
    assert_eq!(
        output,
        format!("\x1b[38;5;{}mAB\x1b[39m", nearest.color.index())
    );
    assert!(!output.contains("38;2"));
    Ok(())
}

#[test]
fn multi_line_reopens() -> Result<(), EmptyPaletteError> {
    let style = Style::builder().bold().build();
    let renderer = SgrRenderer::new(palettes(), Fidelity::Auto);
    assert_eq!(render("A\nB", &style, &renderer)?, "\x1b[1mA\n\x1b[1mB\x1b[22m");
    assert_eq!(
        render("A\n\nB", &style, &renderer)?,
        "\x1b[1mA\n\x1b[1m\n\x1b[1mB\x1b[22m"
    );
    Ok(())
}

#[test]
fn inherited_style() -> Result<(), EmptyPaletteError> {
    let parent = Style::builder()
        .italic()
        .background(Color256::new(0xaf87ff, 141))
        .build();
    let child = Style::builder()
        .attribute(Attribute::Italic, false)
        .overlined()
        .foreground(XTERM_16[2])
        .parent(&parent)
        .build();

    let renderer = SgrRenderer::new(palettes(), Fidelity::Xterm256);
    assert_eq!(
        render("x", &child, &renderer)?,
        "\x1b[53;32;48;5;141mx\x1b[55;39;49m"
    );

    // At 16 colors, violet becomes white.
    let renderer = SgrRenderer::new(palettes(), Fidelity::Xterm16);
    assert_eq!(render("x", &child, &renderer)?, "\x1b[53;32;47mx\x1b[55;39;49m");
    Ok(())
}

#[test]
fn format_updates() -> Result<(), EmptyPaletteError> {
    let parent = Style::builder()
        .format(Attribute::Bold + Attribute::Italic)
        .build();
    let child = Style::builder()
        .format(-Attribute::Italic)
        .format(Attribute::Underlined)
        .parent(&parent)
        .build();

    let renderer = SgrRenderer::new(palettes(), Fidelity::Xterm16);
    assert_eq!(render("x", &parent, &renderer)?, "\x1b[1;3mx\x1b[22;23m");
    assert_eq!(render("x", &child, &renderer)?, "\x1b[1;4mx\x1b[22;24m");
    Ok(())
}

#[test]
fn closing_sequences() -> Result<(), Box<dyn std::error::Error>> {
    let registry = ClosingRegistry::standard();
    assert_eq!(registry.close(&SgrSequence::new([1, 31])).params(), &[22, 39]);

    let violet = SgrSequence::make_color_256(141, termtint::style::Layer::Foreground)?;
    assert_eq!(registry.close(&violet).params(), &[39]);

    let deep = SgrSequence::make_color_rgb(5, 70, 90, termtint::style::Layer::Background)?;
    assert_eq!(registry.close(&deep).params(), &[49]);
    Ok(())
}

#[test]
fn every_backend() -> Result<(), EmptyPaletteError> {
    let palettes = palettes();
    let style = Style::builder()
        .bold()
        .inverse()
        .foreground(teal())
        .background(XTERM_16[0])
        .build();

    let sgr = SgrRenderer::new(palettes.clone(), Fidelity::TrueColor);
    assert_eq!(
        sgr.render("<b>", &style)?,
        "\x1b[1;7;38;2;58;235;161;40m<b>\x1b[22;27;39;49m"
    );
    assert_eq!(
        HtmlRenderer.render("<b>", &style)?,
        "<span style=\"color: #000000; background-color: #3aeba1; font-weight: 700\">&lt;b&gt;</span>"
    );
    assert_eq!(
        TmuxRenderer::new(palettes.clone(), Fidelity::TrueColor).render("<b>", &style)?,
        "#[fg=#3aeba1,bg=black,bold,reverse]<b>#[fg=default,bg=default,nobold,noreverse]"
    );
    assert_eq!(NoOpRenderer.render("<b>", &style)?, "<b>");
    assert_eq!(
        DebugRenderer::new(sgr).render("<b>", &style)?,
        "ǝ[1;7;38;2;58;235;161;40m<b>ǝ[22;27;39;49m"
    );
    Ok(())
}

#[test]
fn markup_in_text_is_escaped() -> Result<(), EmptyPaletteError> {
    let palettes = palettes();
    let style = Style::builder().italic().build();
    let text = "#[bg=red] & <i>";

    let html = RendererConfig {
        backend: Backend::Html,
        fidelity: Fidelity::Auto,
    }
    .build(palettes.clone());
    assert_eq!(
        render(text, &style, &html)?,
        "<span style=\"font-style: italic\">#[bg=red] &amp; &lt;i&gt;</span>"
    );

    let tmux = RendererConfig {
        backend: Backend::Tmux,
        fidelity: Fidelity::Auto,
    }
    .build(palettes);
    assert_eq!(
        render(text, &style, &tmux)?,
        "#[italics]##[bg=red] & <i>#[noitalics]"
    );
    Ok(())
}

#[test]
fn empty_text_everywhere() -> Result<(), EmptyPaletteError> {
    let palettes = palettes();
    let style = Style::builder().bold().foreground(teal()).build();

    for backend in Backend::ALL {
        for fidelity in Fidelity::ALL {
            let renderer = RendererConfig { backend, fidelity }.build(palettes.clone());
            assert_eq!(render("", &style, &renderer)?, "", "{} at {}", backend, fidelity);
        }
    }
    Ok(())
}

#[test]
fn no_ansi_is_plain() -> Result<(), EmptyPaletteError> {
    let palettes = palettes();
    let style = Style::builder()
        .underlined()
        .foreground(Color::from(teal()))
        .build();

    for backend in [Backend::Sgr, Backend::Tmux, Backend::Debug, Backend::NoOp] {
        let renderer = RendererConfig {
            backend,
            fidelity: Fidelity::NoAnsi,
        }
        .build(palettes.clone());
        assert_eq!(render("A\nB", &style, &renderer)?, "A\nB", "{}", backend);
    }
    Ok(())
}

#[test]
fn empty_palettes_fail() {
    let style = Style::builder().foreground(teal()).build();
    let renderer = SgrRenderer::new(Arc::new(Palettes::new()), Fidelity::Xterm256);
    let error = render("AB", &style, &renderer).unwrap_err();
    assert_eq!(error.to_string(), "palette xterm_256 has no colors to approximate with");

    // Registering a color fixes that.
    let palettes = Arc::new(Palettes::new());
    palettes.eight_bit().register_exact(Color256::new(0x00ff87, 48));
    let renderer = SgrRenderer::new(palettes.clone(), Fidelity::Xterm256);
    assert_eq!(
        render("AB", &style, &renderer).as_deref(),
        Ok("\x1b[38;5;48mAB\x1b[39m")
    );
    assert_eq!(palettes.eight_bit().len(), 1);
    assert_eq!(
        palettes.eight_bit().iter().map(|c| c.hex_value()).collect::<Vec<_>>(),
        [0x00ff87]
    );
}
