use crate::layout::{ProjectLayout, BABEL_CONFIG};
use crate::process::{run_tool, ExitPolicy};
use crate::{Error, Result};

const PYBABEL: &str = "pybabel";
const TEMPLATE: &str = "messages.pot";
const CATALOG_DIR: &str = "plugin/translations";

/// Initialize a new language catalog.
pub fn init(layout: &ProjectLayout, locale: &str) -> Result<()> {
    init_with(layout, locale, PYBABEL)
}

/// Merge new and changed strings into all existing locale catalogs.
pub fn update(layout: &ProjectLayout) -> Result<()> {
    update_with(layout, PYBABEL)
}

/// Compile all locale catalogs.
pub fn compile(layout: &ProjectLayout) -> Result<()> {
    run_tool(
        PYBABEL,
        &["compile", "-d", CATALOG_DIR],
        layout.base_path(),
        ExitPolicy::Fatal,
    )?;

    println!("Done.");
    Ok(())
}

fn init_with(layout: &ProjectLayout, locale: &str, babel: &str) -> Result<()> {
    extract(layout, babel)?;
    run_tool(
        babel,
        &["init", "-i", TEMPLATE, "-d", CATALOG_DIR, "-l", locale],
        layout.base_path(),
        ExitPolicy::Fatal,
    )?;
    remove_template(layout)?;

    println!("Done.");
    Ok(())
}

fn update_with(layout: &ProjectLayout, babel: &str) -> Result<()> {
    extract(layout, babel)?;
    run_tool(
        babel,
        &["update", "-i", TEMPLATE, "-d", CATALOG_DIR],
        layout.base_path(),
        ExitPolicy::Fatal,
    )?;
    remove_template(layout)?;

    println!("Done.");
    Ok(())
}

/// Extract translatable strings into the messages.pot template.
///
/// On a nonzero exit the template is left wherever pybabel got to; only the
/// success path deletes it (see `remove_template` callers).
fn extract(layout: &ProjectLayout, babel: &str) -> Result<()> {
    run_tool(
        babel,
        &["extract", "-F", BABEL_CONFIG, "-k", "_l", "-o", TEMPLATE, "."],
        layout.base_path(),
        ExitPolicy::Fatal,
    )?;
    Ok(())
}

fn remove_template(layout: &ProjectLayout) -> Result<()> {
    let path = layout.template_file();
    std::fs::remove_file(path).map_err(|e| Error::FileRemove {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_template_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        std::fs::write(layout.template_file(), "# template").unwrap();

        remove_template(&layout).unwrap();
        assert!(!layout.template_file().exists());
    }

    #[test]
    fn test_remove_template_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let result = remove_template(&layout);
        assert!(matches!(result, Err(Error::FileRemove { .. })));
    }

    /// Write a pybabel stand-in script: extraction writes the template and
    /// succeeds, every other subcommand fails.
    #[cfg(unix)]
    fn write_babel_stub(dir: &std::path::Path) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let stub = dir.join("pybabel-stub");
        std::fs::write(
            &stub,
            "#!/bin/sh\n\
             if [ \"$1\" = \"extract\" ]; then\n\
             \ttouch messages.pot\n\
             \texit 0\n\
             fi\n\
             exit 1\n",
        )
        .unwrap();
        let mut perms = std::fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&stub, perms).unwrap();
        stub
    }

    #[cfg(unix)]
    #[test]
    fn test_init_failure_leaves_template_in_place() {
        let bin_dir = tempfile::tempdir().unwrap();
        let stub = write_babel_stub(bin_dir.path());

        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());

        // Extraction succeeds, catalog init fails; the template must stay
        // behind for inspection.
        let result = init_with(&layout, "de_DE", &stub.to_string_lossy());
        assert!(matches!(result, Err(Error::ToolFailed { .. })));
        assert!(layout.template_file().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_update_failure_leaves_template_in_place() {
        let bin_dir = tempfile::tempdir().unwrap();
        let stub = write_babel_stub(bin_dir.path());

        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());

        let result = update_with(&layout, &stub.to_string_lossy());
        assert!(matches!(result, Err(Error::ToolFailed { .. })));
        assert!(layout.template_file().exists());
    }
}
