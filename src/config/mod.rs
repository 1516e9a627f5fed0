mod plugin;

pub use plugin::PluginConfig;
