use serde_json::{Map, Value};

/// Expected shape of a recognized `extra.create-project` option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A list of strings
    StringList,
    /// A single string
    Str,
}

/// Recognized options and their expected shapes
pub const CONFIG_SCHEMA: &[(&str, OptionKind)] = &[
    ("remove-require", OptionKind::StringList),
    ("remove-require-dev", OptionKind::StringList),
    ("installer", OptionKind::Str),
];

/// One non-fatal problem found while reading the configuration block
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConfigWarning {
    pub key: String,
    pub message: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration value extra.create-project.{} {}",
            self.key, self.message
        )
    }
}

/// The helper's own configuration, read once from `extra.create-project`
/// and immutable afterwards.
///
/// Every recognized option degrades to its empty default when missing, null,
/// or of the wrong type; each such case contributes one warning to the
/// returned list instead of being printed inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupConfig {
    /// Package patterns to strip from `require`
    pub remove_require: Vec<String>,
    /// Package patterns to strip from `require-dev`
    pub remove_require_dev: Vec<String>,
    /// Program to delegate the dependency update to; empty means the
    /// built-in default
    pub installer: String,
}

impl CleanupConfig {
    /// Parse the configuration block out of a manifest root, validating each
    /// recognized option against [`CONFIG_SCHEMA`].
    pub fn from_manifest(root: &Map<String, Value>) -> (Self, Vec<ConfigWarning>) {
        let block = root
            .get("extra")
            .and_then(|extra| extra.get("create-project"))
            .and_then(Value::as_object);

        let mut config = CleanupConfig::default();
        let mut warnings = Vec::new();

        for (key, kind) in CONFIG_SCHEMA {
            match kind {
                OptionKind::StringList => {
                    let values = ensure_string_list(block, key, &mut warnings);
                    match *key {
                        "remove-require" => config.remove_require = values,
                        "remove-require-dev" => config.remove_require_dev = values,
                        _ => {}
                    }
                }
                OptionKind::Str => {
                    let value = ensure_string(block, key, &mut warnings);
                    if *key == "installer" {
                        config.installer = value;
                    }
                }
            }
        }

        (config, warnings)
    }
}

fn ensure_string_list(
    block: Option<&Map<String, Value>>,
    key: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> Vec<String> {
    let Some(value) = block.and_then(|map| map.get(key)) else {
        warnings.push(ConfigWarning {
            key: key.to_string(),
            message: "is not set, assuming empty list.".to_string(),
        });
        return Vec::new();
    };
    match value {
        Value::Null => {
            warnings.push(ConfigWarning {
                key: key.to_string(),
                message: "expected to not be null but is, ignoring value.".to_string(),
            });
            Vec::new()
        }
        Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(name) => values.push(name.to_string()),
                    None => warnings.push(ConfigWarning {
                        key: key.to_string(),
                        message: format!(
                            "entry {idx} expected to be a string but is not, ignoring entry."
                        ),
                    }),
                }
            }
            values
        }
        _ => {
            warnings.push(ConfigWarning {
                key: key.to_string(),
                message: "expected to be an array but is not, assuming empty array.".to_string(),
            });
            Vec::new()
        }
    }
}

fn ensure_string(
    block: Option<&Map<String, Value>>,
    key: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> String {
    let Some(value) = block.and_then(|map| map.get(key)) else {
        warnings.push(ConfigWarning {
            key: key.to_string(),
            message: "is not set, assuming empty string.".to_string(),
        });
        return String::new();
    };
    match value {
        Value::Null => {
            warnings.push(ConfigWarning {
                key: key.to_string(),
                message: "expected to not be null but is, ignoring value.".to_string(),
            });
            String::new()
        }
        Value::String(text) => text.clone(),
        _ => {
            warnings.push(ConfigWarning {
                key: key.to_string(),
                message: "expected to be a string but is not, ignoring value.".to_string(),
            });
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test manifest root must be an object"),
        }
    }

    #[test]
    fn test_missing_block_defaults_with_warnings() {
        let (config, warnings) = CleanupConfig::from_manifest(&root(json!({"name": "acme/app"})));
        assert_eq!(config, CleanupConfig::default());
        assert_eq!(warnings.len(), CONFIG_SCHEMA.len());
        for (key, _) in CONFIG_SCHEMA {
            assert!(warnings.iter().any(|warning| warning.key == *key));
        }
    }

    #[test]
    fn test_valid_options() {
        let (config, warnings) = CleanupConfig::from_manifest(&root(json!({
            "extra": {"create-project": {
                "remove-require": ["acme/a", "acme/b"],
                "remove-require-dev": ["acme/dev"],
                "installer": "composer2"
            }}
        })));
        assert_eq!(config.remove_require, vec!["acme/a", "acme/b"]);
        assert_eq!(config.remove_require_dev, vec!["acme/dev"]);
        assert_eq!(config.installer, "composer2");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_null_value_warns() {
        let (config, warnings) = CleanupConfig::from_manifest(&root(json!({
            "extra": {"create-project": {
                "remove-require": null,
                "remove-require-dev": [],
                "installer": ""
            }}
        })));
        assert!(config.remove_require.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "remove-require");
        assert!(warnings[0].message.contains("null"));
    }

    #[test]
    fn test_type_mismatch_warns() {
        let (config, warnings) = CleanupConfig::from_manifest(&root(json!({
            "extra": {"create-project": {
                "remove-require": "acme/a",
                "remove-require-dev": [],
                "installer": 42
            }}
        })));
        assert!(config.remove_require.is_empty());
        assert!(config.installer.is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings
            .iter()
            .any(|warning| warning.message.contains("expected to be an array")));
        assert!(warnings
            .iter()
            .any(|warning| warning.message.contains("expected to be a string")));
    }

    #[test]
    fn test_non_string_entries_are_skipped() {
        let (config, warnings) = CleanupConfig::from_manifest(&root(json!({
            "extra": {"create-project": {
                "remove-require": ["acme/a", 42],
                "remove-require-dev": [],
                "installer": ""
            }}
        })));
        assert_eq!(config.remove_require, vec!["acme/a"]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("entry 1"));
    }

    #[test]
    fn test_warning_display_names_full_key() {
        let warning = ConfigWarning {
            key: "remove-require".to_string(),
            message: "is not set, assuming empty list.".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Configuration value extra.create-project.remove-require is not set, assuming empty list."
        );
    }
}
