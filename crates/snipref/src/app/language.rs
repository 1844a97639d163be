//! File-extension to markdown fence tag resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::infra::config::Config;

/// Builtin extension-to-tag table. Unlisted extensions fall back to the
/// lowercased extension itself.
static BUILTIN_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("py", "python"),
        ("rb", "ruby"),
        ("java", "java"),
        ("kt", "kotlin"),
        ("go", "go"),
        ("rs", "rust"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("h", "c"),
        ("hpp", "cpp"),
        ("cs", "csharp"),
        ("swift", "swift"),
        ("php", "php"),
        ("html", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("sass", "sass"),
        ("less", "less"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("xml", "xml"),
        ("md", "markdown"),
        ("sql", "sql"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("zsh", "bash"),
        ("ps1", "powershell"),
        ("dockerfile", "dockerfile"),
        ("vue", "vue"),
        ("svelte", "svelte"),
    ])
});

/// Maps file names to markdown fence language tags.
///
/// Total over all inputs: a mapped extension yields its tag, an unmapped one
/// yields itself, and a name without an extension yields the empty string.
#[derive(Debug, Default, Clone)]
pub struct LanguageResolver {
    overrides: HashMap<String, String>,
}

impl LanguageResolver {
    /// Resolver using only the builtin table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver extended with `[languages]` overrides from configuration.
    pub fn from_config(config: &Config) -> Self {
        let overrides = config
            .languages
            .iter()
            .map(|(ext, tag)| (ext.to_ascii_lowercase(), tag.clone()))
            .collect();
        Self { overrides }
    }

    /// Resolve the fence tag for a file name.
    pub fn resolve(&self, file_name: &str) -> String {
        let ext = extension_of(file_name);
        if ext.is_empty() {
            return String::new();
        }
        if let Some(tag) = self.overrides.get(&ext) {
            return tag.clone();
        }
        match BUILTIN_TAGS.get(ext.as_str()) {
            Some(tag) => (*tag).to_string(),
            None => ext,
        }
    }
}

/// Lowercased substring after the last `.`, or empty when there is no dot.
fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}
