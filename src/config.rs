//! Configuration loading and merging.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::classify::FileKind;

/// Env var overriding the user config path.
pub const CONFIG_ENV: &str = "EMOJI_GUARD_CONFIG";

const USER_CONFIG: &str = ".claude/emoji-guard.toml";
const PROJECT_CONFIG: &str = ".emoji-guard.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Turn the check off entirely.
    pub enabled: bool,

    /// How many distinct emojis to quote in the block message.
    pub max_examples: usize,

    /// Regex patterns matching paths that are never checked.
    pub exclude_paths: Vec<String>,

    /// Extra extensions per file kind.
    pub extensions: ExtensionsConfig,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            max_examples: 3,
            exclude_paths: vec![],
            extensions: ExtensionsConfig::default(),
            audit: AuditConfig::default(),
        }
    }
}

/// Extensions checked in addition to `.py`, `.md` and `.mdx`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ExtensionsConfig {
    pub python: Vec<String>,
    pub markdown: Vec<String>,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// Project config as written on disk. Scalars stay `None` unless set so
/// merging can tell "unset" from "default".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ProjectConfig {
    enabled: Option<bool>,
    max_examples: Option<usize>,
    exclude_paths: Vec<String>,
    extensions: ExtensionsConfig,
    audit: ProjectAuditConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ProjectAuditConfig {
    enabled: Option<bool>,
    path: Option<String>,
}

/// Compiled configuration with pre-built regexes.
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Compiled exclusion patterns.
    pub exclude_patterns: Vec<Regex>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // User config (~/.claude/emoji-guard.toml)
        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        // Project config (.emoji-guard.toml in cwd)
        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    fn load_project_config(cwd: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
        let path = cwd.join(PROJECT_CONFIG);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects EMOJI_GUARD_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(USER_CONFIG))
    }

    /// Merge a project config into this one (project wins for scalars it sets).
    fn merge(&mut self, other: ProjectConfig) {
        self.exclude_paths.extend(other.exclude_paths);
        self.extensions.python.extend(other.extensions.python);
        self.extensions.markdown.extend(other.extensions.markdown);

        if let Some(enabled) = other.enabled {
            self.enabled = enabled;
        }
        if let Some(max) = other.max_examples {
            self.max_examples = max;
        }
        if let Some(enabled) = other.audit.enabled {
            self.audit.enabled = enabled;
        }
        if other.audit.path.is_some() {
            self.audit.path = other.audit.path;
        }
    }

    /// Compile all regex patterns for faster matching.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let exclude_patterns = self
            .exclude_paths
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::Regex {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledConfig {
            raw: self,
            exclude_patterns,
        })
    }
}

impl CompiledConfig {
    /// Return the exclusion pattern matching a path, if any.
    pub fn is_excluded(&self, path: &str) -> Option<&str> {
        self.exclude_patterns
            .iter()
            .position(|re| re.is_match(path))
            .map(|i| self.raw.exclude_paths[i].as_str())
    }

    /// Detect a path's kind, honouring configured extensions.
    pub fn file_kind(&self, path: &str) -> FileKind {
        FileKind::from_path_with(
            path,
            &self.raw.extensions.python,
            &self.raw.extensions.markdown,
        )
    }

    /// Audit log path, when auditing is on.
    pub fn audit_path(&self) -> Option<&Path> {
        if !self.raw.audit.enabled {
            return None;
        }
        self.raw.audit.path.as_deref().map(Path::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.enabled);
        assert_eq!(config.max_examples, 3);
        assert!(config.exclude_paths.is_empty());
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
max_examples = 5
exclude_paths = ['CHANGELOG\.md$']

[extensions]
python = ["pyi"]

[audit]
enabled = true
path = "/tmp/emoji-audit.jsonl"
"#,
        )
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_examples, 5);
        assert_eq!(config.extensions.python, vec!["pyi".to_string()]);
        let compiled = config.compile().unwrap();
        assert_eq!(
            compiled.audit_path(),
            Some(Path::new("/tmp/emoji-audit.jsonl"))
        );
    }

    #[test]
    fn test_compile_excludes() {
        let config = Config {
            exclude_paths: vec![r"CHANGELOG\.md$".to_string(), r"^vendor/".to_string()],
            ..Default::default()
        };
        let compiled = config.compile().unwrap();
        assert_eq!(compiled.is_excluded("docs/CHANGELOG.md"), Some(r"CHANGELOG\.md$"));
        assert_eq!(compiled.is_excluded("vendor/lib.py"), Some("^vendor/"));
        assert!(compiled.is_excluded("README.md").is_none());
    }

    #[test]
    fn test_invalid_regex() {
        let config = Config {
            exclude_paths: vec!["[invalid".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.compile(), Err(ConfigError::Regex { .. })));
    }

    #[test]
    fn test_file_kind_uses_extensions() {
        let mut config = Config::default();
        config.extensions.markdown.push(".rst".to_string());
        let compiled = config.compile().unwrap();
        assert_eq!(compiled.file_kind("index.rst"), FileKind::Markdown);
        assert_eq!(compiled.file_kind("main.py"), FileKind::Python);
        assert_eq!(compiled.file_kind("main.rs"), FileKind::Other);
    }

    #[test]
    fn test_audit_path_requires_enabled() {
        let mut config = Config::default();
        config.audit.path = Some("/tmp/audit.jsonl".to_string());
        assert!(config.clone().compile().unwrap().audit_path().is_none());
        config.audit.enabled = true;
        assert!(config.compile().unwrap().audit_path().is_some());
    }

    #[test]
    fn test_merge_project_config() {
        let mut config = Config {
            exclude_paths: vec!["^a/".to_string()],
            ..Default::default()
        };
        let project: ProjectConfig = toml::from_str(
            r#"
enabled = false
exclude_paths = ["^b/"]

[extensions]
markdown = ["rst"]
"#,
        )
        .unwrap();
        config.merge(project);
        assert!(!config.enabled);
        assert_eq!(config.max_examples, 3);
        assert_eq!(config.exclude_paths, vec!["^a/", "^b/"]);
        assert_eq!(config.extensions.markdown, vec!["rst"]);
    }

    #[test]
    fn test_load_project_config_from_cwd() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG), "max_examples = 1\n").unwrap();
        let project = Config::load_project_config(dir.path()).unwrap().unwrap();
        assert_eq!(project.max_examples, Some(1));

        let empty = TempDir::new().unwrap();
        assert!(Config::load_project_config(empty.path()).unwrap().is_none());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG), "max_examples = \"many\"\n").unwrap();
        assert!(matches!(
            Config::load_project_config(dir.path()),
            Err(ConfigError::Toml(_))
        ));
    }
}
