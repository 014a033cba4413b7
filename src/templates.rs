//! Ticket template settings: a read-only map from ticket-type name to a
//! (template, width) pair.
//!
//! Settings are loaded once at startup from a TOML file and are immutable
//! for the process lifetime (restart to pick up changes). A missing or
//! unparseable file falls back to a built-in `default` entry, and `resolve`
//! always returns something usable: template lookup must never be the
//! reason a print request fails.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::wrap::DEFAULT_WIDTH;

/// Ticket type used when a request does not name one.
pub const DEFAULT_TYPE: &str = "default";

/// Built-in template used when no settings file is available.
const BUILTIN_TEMPLATE: &str = concat!(
    "============================\n",
    "  TASK #{ticket_num}\n",
    "  {timestamp}\n",
    "============================\n",
    "\n",
    "{wrapped_task}\n",
    "\n",
    "----------------------------\n",
);

/// One ticket type's settings, as deserialized from the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_template")]
    pub template: String,
    /// Target column width. Non-positive or non-integer values are
    /// coerced to 32 at resolve time.
    #[serde(default = "default_width")]
    pub width: Width,
}

/// A width value as it may appear in an operator-edited settings file.
///
/// Accepting integers, floats and strings keeps one sloppy width
/// (`width = "40"`, `width = 40.5`) from failing the whole-file parse
/// and dropping every custom template; the value is sanitized per entry
/// instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Width {
    Int(i64),
    Float(f64),
    Text(String),
}

fn default_template() -> String {
    "{wrapped_task}".to_string()
}

fn default_width() -> Width {
    Width::Int(DEFAULT_WIDTH as i64)
}

fn builtin_default() -> TemplateConfig {
    TemplateConfig {
        template: BUILTIN_TEMPLATE.to_string(),
        width: default_width(),
    }
}

/// Immutable store of ticket templates, keyed by ticket-type name.
///
/// A `default` entry is guaranteed to exist.
#[derive(Debug)]
pub struct TemplateStore {
    entries: HashMap<String, TemplateConfig>,
}

impl TemplateStore {
    /// Load template settings from a TOML file.
    ///
    /// Missing file or parse failure falls back to the built-in default
    /// entry rather than failing startup.
    pub fn load(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<HashMap<String, TemplateConfig>>(&raw) {
                Ok(map) => {
                    info!(
                        path = %path.display(),
                        ticket_types = map.len(),
                        "Loaded ticket template settings"
                    );
                    map
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to parse template settings, using built-in default"
                    );
                    HashMap::new()
                }
            },
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Template settings not readable, using built-in default"
                );
                HashMap::new()
            }
        };

        Self::from_entries(entries)
    }

    /// Build a store from an in-memory map, inserting the built-in
    /// `default` entry if the map lacks one.
    pub fn from_entries(mut entries: HashMap<String, TemplateConfig>) -> Self {
        entries
            .entry(DEFAULT_TYPE.to_string())
            .or_insert_with(builtin_default);
        Self { entries }
    }

    /// Resolve a ticket type to its `(template, width)` pair.
    ///
    /// Empty names mean `default`; unknown names warn and fall back to the
    /// `default` entry. This never fails.
    pub fn resolve(&self, ticket_type: &str) -> (&str, usize) {
        let name = if ticket_type.trim().is_empty() {
            DEFAULT_TYPE
        } else {
            ticket_type
        };

        let entry = match self.entries.get(name) {
            Some(entry) => entry,
            None => {
                warn!(ticket_type = name, "Unknown ticket_type, falling back to 'default'");
                &self.entries[DEFAULT_TYPE]
            }
        };

        (entry.template.as_str(), sanitize_width(&entry.width))
    }
}

fn sanitize_width(width: &Width) -> usize {
    let value = match width {
        Width::Int(i) => *i,
        // Fractional widths truncate, matching integer conversion of a
        // float-typed settings value.
        Width::Float(f) => *f as i64,
        Width::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
    };

    if value <= 0 {
        DEFAULT_WIDTH
    } else {
        value as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_builtin_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::load(&temp_dir.path().join("nonexistent.toml"));

        let (template, width) = store.resolve(DEFAULT_TYPE);
        assert!(template.contains("{ticket_num}"));
        assert!(template.contains("{timestamp}"));
        assert!(template.contains("{wrapped_task}"));
        assert_eq!(width, 32);
    }

    #[test]
    fn unparseable_file_falls_back_to_builtin_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.toml");
        fs::write(&path, "not [ valid toml").unwrap();

        let store = TemplateStore::load(&path);
        let (template, width) = store.resolve(DEFAULT_TYPE);
        assert!(template.contains("{wrapped_task}"));
        assert_eq!(width, 32);
    }

    #[test]
    fn unknown_type_resolves_to_default_without_error() {
        let store = TemplateStore::from_entries(HashMap::new());

        let (default_template, default_width) = store.resolve(DEFAULT_TYPE);
        let (template, width) = store.resolve("nonexistent-type");
        assert_eq!(template, default_template);
        assert_eq!(width, default_width);
    }

    #[test]
    fn empty_type_means_default() {
        let store = TemplateStore::from_entries(HashMap::new());
        let (default_template, _) = store.resolve(DEFAULT_TYPE);
        let (template, _) = store.resolve("");
        assert_eq!(template, default_template);
    }

    #[test]
    fn loads_custom_types_and_keeps_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.toml");
        fs::write(
            &path,
            r#"
[chore]
template = "CHORE #{ticket_num}\n{wrapped_task}"
width = 24
"#,
        )
        .unwrap();

        let store = TemplateStore::load(&path);
        let (template, width) = store.resolve("chore");
        assert_eq!(template, "CHORE #{ticket_num}\n{wrapped_task}");
        assert_eq!(width, 24);

        // The built-in default is inserted even when the file lacks one.
        let (default_template, _) = store.resolve(DEFAULT_TYPE);
        assert!(default_template.contains("{ticket_num}"));
    }

    #[test]
    fn non_positive_width_is_coerced() {
        let mut entries = HashMap::new();
        entries.insert(
            "narrow".to_string(),
            TemplateConfig {
                template: "{wrapped_task}".to_string(),
                width: Width::Int(-5),
            },
        );
        let store = TemplateStore::from_entries(entries);

        let (_, width) = store.resolve("narrow");
        assert_eq!(width, 32);
    }

    #[test]
    fn string_width_keeps_the_entry_and_parses() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.toml");
        fs::write(
            &path,
            r#"
[chore]
template = "CHORE #{ticket_num}\n{wrapped_task}"
width = "20"
"#,
        )
        .unwrap();

        // A quoted width must not fail the whole-file parse and drop the
        // custom template.
        let store = TemplateStore::load(&path);
        let (template, width) = store.resolve("chore");
        assert_eq!(template, "CHORE #{ticket_num}\n{wrapped_task}");
        assert_eq!(width, 20);
    }

    #[test]
    fn unparseable_width_keeps_the_entry_with_default_width() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.toml");
        fs::write(
            &path,
            r#"
[chore]
template = "CHORE #{ticket_num}\n{wrapped_task}"
width = "abc"
"#,
        )
        .unwrap();

        let store = TemplateStore::load(&path);
        let (template, width) = store.resolve("chore");
        assert_eq!(template, "CHORE #{ticket_num}\n{wrapped_task}");
        assert_eq!(width, 32);
    }

    #[test]
    fn float_width_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.toml");
        fs::write(&path, "[chore]\nwidth = 40.5\n").unwrap();

        let store = TemplateStore::load(&path);
        let (_, width) = store.resolve("chore");
        assert_eq!(width, 40);
    }

    #[test]
    fn missing_template_key_defaults_to_wrapped_task() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.toml");
        fs::write(&path, "[bare]\nwidth = 20\n").unwrap();

        let store = TemplateStore::load(&path);
        let (template, width) = store.resolve("bare");
        assert_eq!(template, "{wrapped_task}");
        assert_eq!(width, 20);
    }
}
