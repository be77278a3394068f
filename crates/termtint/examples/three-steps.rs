use std::error::Error;
use std::sync::Arc;

use termtint::palette::Palettes;
use termtint::render::{render, Backend, RendererConfig};
use termtint::style::{Fidelity, Style};

fn main() -> Result<(), Box<dyn Error>> {
    let palettes = Arc::new(Palettes::xterm());

    // 1. Assemble your styles
    let chic = Style::builder()
        .bold()
        .underlined()
        .foreground(palettes.resolve("#d72827")?)
        .build();
    let quiet = Style::builder()
        .italic()
        .foreground(palettes.resolve("turquoise")?)
        .parent(&chic)
        .build();

    // 2. Pick your backend and fidelity
    let mut args = std::env::args().skip(1);
    let backend: Backend = args.next().as_deref().unwrap_or("sgr").parse()?;
    let fidelity: Fidelity = args.next().as_deref().unwrap_or("auto").parse()?;
    let renderer = RendererConfig { backend, fidelity }.build(palettes);

    // 3. Apply your styles
    println!("\n    {}", render("Wow!", &chic, &renderer)?);
    println!("    {}\n", render("So chic!\nAnd quiet.", &quiet, &renderer)?);

    Ok(())
}
