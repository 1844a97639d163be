//! Loading selection snapshots from documents on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::app::language::LanguageResolver;
use crate::domain::model::{LineRange, Locator, SelectionSnapshot};
use crate::infra::workspace;

/// Produces [`SelectionSnapshot`]s for locators, resolving paths relative to
/// a workspace root.
#[derive(Debug, Clone)]
pub struct SelectionLoader {
    root: PathBuf,
    resolver: LanguageResolver,
}

impl SelectionLoader {
    pub fn new(root: impl Into<PathBuf>, resolver: LanguageResolver) -> Self {
        Self {
            root: root.into(),
            resolver,
        }
    }

    /// Load the selection named by `locator`.
    ///
    /// Returns `Ok(None)` when the target document does not exist. Read and
    /// encoding failures on an existing file propagate as errors.
    pub fn load(&self, locator: &Locator) -> Result<Option<SelectionSnapshot>> {
        let path = &locator.path;
        if !path.is_file() {
            debug!(path = %path.display(), "selection target not found");
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read selection target {}", path.display()))?;
        let total_lines = contents.lines().count();

        let requested = locator
            .range
            .unwrap_or_else(|| LineRange::new(1, total_lines));
        let (range, text) = match requested.clamp_to(total_lines) {
            Some(clamped) => {
                let text = contents
                    .lines()
                    .skip(clamped.start() - 1)
                    .take(clamped.line_count())
                    .collect::<Vec<_>>()
                    .join("\n");
                (clamped, text)
            }
            // Range entirely past EOF (or empty file): nothing is selected.
            None => (requested, String::new()),
        };

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let language = self.resolver.resolve(file_name);
        let relative_path = workspace::relative_to_root(path, &self.root);

        Ok(Some(SelectionSnapshot {
            relative_path,
            range,
            text,
            language,
        }))
    }
}
