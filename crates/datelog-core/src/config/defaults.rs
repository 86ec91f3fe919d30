//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "datelog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "datelog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".datelog.yaml";

/// Default changelog file, relative to the repository
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".datelog.toml",
        ALT_CONFIG_FILE,
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Datelog Configuration

changelog:
  file: CHANGELOG.md
"#;

/// Default configuration template (TOML)
pub const DEFAULT_CONFIG_TOML_TEMPLATE: &str = r#"# Datelog Configuration

[changelog]
file = "CHANGELOG.md"
"#;
