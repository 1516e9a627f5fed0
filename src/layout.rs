use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// Encapsulates the plugin template's directory structure conventions.
///
/// Provides lazy-cached path accessors for the files and directories the
/// build chores touch:
/// - `lib/` - vendored runtime dependencies
/// - `build/` - packaging output
/// - `plugin/translations/` - per-locale message catalogs
/// - `plugin.json` - generated plugin manifest
/// - `main.py` - plugin entry point
#[derive(Debug)]
pub struct ProjectLayout {
    base_path: PathBuf,
    lib_dir: OnceCell<PathBuf>,
    build_dir: OnceCell<PathBuf>,
    translations_dir: OnceCell<PathBuf>,
    template_file: OnceCell<PathBuf>,
    plugin_json: OnceCell<PathBuf>,
    entry_point: OnceCell<PathBuf>,
}

impl Clone for ProjectLayout {
    fn clone(&self) -> Self {
        // Clone the base_path, create fresh cells (paths will be recomputed lazily)
        Self::new(self.base_path.clone())
    }
}

/// pybabel extraction config at the template root.
pub const BABEL_CONFIG: &str = "babel.cfg";

/// Runtime and development requirement files at the template root.
pub const REQUIREMENTS: &str = "requirements.txt";
pub const DEV_REQUIREMENTS: &str = "requirements-dev.txt";

impl ProjectLayout {
    /// Create a new ProjectLayout for the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            lib_dir: OnceCell::new(),
            build_dir: OnceCell::new(),
            translations_dir: OnceCell::new(),
            template_file: OnceCell::new(),
            plugin_json: OnceCell::new(),
            entry_point: OnceCell::new(),
        }
    }

    /// Returns reference to the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns reference to the lib/ directory path (vendored dependencies).
    pub fn lib_dir(&self) -> &Path {
        self.lib_dir.get_or_init(|| self.base_path.join("lib"))
    }

    /// Returns reference to the build/ directory path.
    pub fn build_dir(&self) -> &Path {
        self.build_dir.get_or_init(|| self.base_path.join("build"))
    }

    /// Returns reference to the plugin/translations directory path.
    pub fn translations_dir(&self) -> &Path {
        self.translations_dir
            .get_or_init(|| self.base_path.join("plugin").join("translations"))
    }

    /// Returns reference to the messages.pot extraction template path.
    pub fn template_file(&self) -> &Path {
        self.template_file
            .get_or_init(|| self.base_path.join("messages.pot"))
    }

    /// Returns reference to the plugin.json manifest path.
    pub fn plugin_json(&self) -> &Path {
        self.plugin_json
            .get_or_init(|| self.base_path.join("plugin.json"))
    }

    /// Returns reference to the main.py entry-point path.
    pub fn entry_point(&self) -> &Path {
        self.entry_point
            .get_or_init(|| self.base_path.join("main.py"))
    }

    /// Returns the plugin.toml config path (not cached, read once at startup).
    pub fn plugin_toml(&self) -> PathBuf {
        self.base_path.join("plugin.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path() {
        let layout = ProjectLayout::new("/path/to/plugin");
        assert_eq!(layout.base_path(), Path::new("/path/to/plugin"));
    }

    #[test]
    fn test_lib_dir() {
        let layout = ProjectLayout::new("/path/to/plugin");
        assert_eq!(layout.lib_dir(), Path::new("/path/to/plugin/lib"));
    }

    #[test]
    fn test_build_dir() {
        let layout = ProjectLayout::new("/path/to/plugin");
        assert_eq!(layout.build_dir(), Path::new("/path/to/plugin/build"));
    }

    #[test]
    fn test_translations_dir() {
        let layout = ProjectLayout::new("/path/to/plugin");
        assert_eq!(
            layout.translations_dir(),
            Path::new("/path/to/plugin/plugin/translations")
        );
    }

    #[test]
    fn test_template_file() {
        let layout = ProjectLayout::new("/path/to/plugin");
        assert_eq!(
            layout.template_file(),
            Path::new("/path/to/plugin/messages.pot")
        );
    }

    #[test]
    fn test_plugin_json() {
        let layout = ProjectLayout::new("/path/to/plugin");
        assert_eq!(
            layout.plugin_json(),
            Path::new("/path/to/plugin/plugin.json")
        );
    }

    #[test]
    fn test_paths_are_cached() {
        let layout = ProjectLayout::new("/path/to/plugin");

        // Call twice to verify caching works (same reference returned)
        let build1 = layout.build_dir();
        let build2 = layout.build_dir();
        assert!(std::ptr::eq(build1, build2));

        let lib1 = layout.lib_dir();
        let lib2 = layout.lib_dir();
        assert!(std::ptr::eq(lib1, lib2));
    }
}
