use crate::config::PluginConfig;
use crate::layout::{ProjectLayout, DEV_REQUIREMENTS, REQUIREMENTS};
use crate::manifest::PluginManifest;
use crate::packager;
use crate::process::{run_tool, ExitPolicy};
use crate::Result;

/// Vendor runtime dependencies into the lib/ directory.
pub fn install_dependencies(layout: &ProjectLayout) -> Result<()> {
    let lib_dir = layout.lib_dir().to_string_lossy().into_owned();
    run_tool(
        "pip",
        &["install", "-r", REQUIREMENTS, "-t", &lib_dir, "--upgrade"],
        layout.base_path(),
        ExitPolicy::Ignore,
    )?;

    println!("Done.");
    Ok(())
}

/// Install development-only dependencies at pip's default location.
pub fn setup_dev_env(layout: &ProjectLayout) -> Result<()> {
    run_tool(
        "pip",
        &["install", "-r", DEV_REQUIREMENTS, "--upgrade"],
        layout.base_path(),
        ExitPolicy::Ignore,
    )?;

    println!("Dev environment ready to go.");
    Ok(())
}

/// Regenerate the plugin.json manifest from the plugin config.
pub fn gen_plugin_info(layout: &ProjectLayout) -> Result<()> {
    let config = PluginConfig::load_or_default(layout)?;
    let manifest = PluginManifest::from_config(&config);
    manifest.write(layout.plugin_json())?;

    println!("Done.");
    Ok(())
}

/// Pack the plugin into a zip archive under build/.
pub fn build(layout: &ProjectLayout) -> Result<()> {
    let config = PluginConfig::load_or_default(layout)?;
    let archive = packager::build(layout, &config)?;
    tracing::info!(archive = %archive.display(), "packed plugin");

    println!("Done.");
    Ok(())
}
