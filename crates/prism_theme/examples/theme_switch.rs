//! Theme switching demo
//!
//! Run with:
//! `cargo run -p prism_theme --example theme_switch`
//!
//! Persists the active theme to a JSON file in the temp directory, so a second
//! run starts from the theme the first run ended on.

use anyhow::Result;
use prism_core::FileStorage;
use prism_theme::{
    ColorToken, DesignToken, RadiusToken, StyleRoot, ThemeConfig, ThemeProvider,
};

const CONFIG: &str = r#"
default_theme = "glass"
storage_key = "prism-theme"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = ThemeConfig::from_toml_str(CONFIG)?;
    let storage = FileStorage::new(std::env::temp_dir().join("prism-theme-demo.json"));
    tracing::info!("storage at {}", storage.path().display());

    let provider = ThemeProvider::new(config, storage, StyleRoot::new());
    provider.subscribe(|theme| {
        tracing::info!("theme changed to {} ({})", theme.display_name(), theme.id());
    });

    println!("starting theme: {}", provider.active_theme());

    // A component refers to tokens by variable, never by literal.
    let card_style = format!(
        "background: {}; border-radius: {};",
        ColorToken::BackgroundSurface.var(),
        RadiusToken::Md.var()
    );
    println!("card style: {card_style}");

    for _ in 0..2 {
        let theme = provider.cycle_theme();
        let root = provider.root();
        println!(
            "{:<8} radius-md={:<6} accent={}",
            theme.id(),
            root.property(&RadiusToken::Md.variable_name()).unwrap_or("-"),
            root.property(&ColorToken::AccentPrimary.variable_name()).unwrap_or("-"),
        );
    }

    if !provider.is_persistent() {
        tracing::warn!("theme changes were not saved");
    }

    println!("{}", provider.root().to_css());
    Ok(())
}
