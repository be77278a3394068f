//! Renderer configuration, as read from and written to configuration files.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use termtint::render::{Backend, RendererConfig};
use termtint::style::Fidelity;

#[test]
fn config_from_json() -> Result<(), serde_json::Error> {
    let config: RendererConfig =
        serde_json::from_str(r#"{ "backend": "tmux", "fidelity": "xterm_256" }"#)?;
    assert_eq!(
        config,
        RendererConfig {
            backend: Backend::Tmux,
            fidelity: Fidelity::Xterm256,
        }
    );

    let config: RendererConfig = serde_json::from_str(r#"{ "backend": "noop" }"#)?;
    assert_eq!(config.fidelity, Fidelity::Auto);

    let config: RendererConfig = serde_json::from_str("{}")?;
    assert_eq!(config, RendererConfig::default());

    assert!(serde_json::from_str::<RendererConfig>(r#"{ "backend": "svg" }"#).is_err());
    assert!(serde_json::from_str::<Fidelity>(r#""xterm256""#).is_err());
    Ok(())
}

#[test]
fn identifiers_agree_with_display() -> Result<(), serde_json::Error> {
    for fidelity in Fidelity::ALL {
        assert_eq!(serde_json::to_string(&fidelity)?, format!("\"{}\"", fidelity));
    }
    for backend in Backend::ALL {
        assert_eq!(serde_json::to_string(&backend)?, format!("\"{}\"", backend));
    }

    let json = serde_json::to_string(&RendererConfig::default())?;
    assert_eq!(json, r#"{"backend":"sgr","fidelity":"auto"}"#);
    Ok(())
}
