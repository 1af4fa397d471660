//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/sust/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use sustenance_query::AlignmentCosts;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Keys accepted by `sust config set`.
const VALID_KEYS: &str =
    "corpus, output.color, matcher.substitution, matcher.gap, matcher.threshold";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Corpus file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Alignment weights for fuzzy matching.
    #[serde(default)]
    pub matcher: AlignmentCosts,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            corpus: None,
            output: OutputConfig::default(),
            matcher: AlignmentCosts::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config file path.
///
/// `SUST_CONFIG` overrides the location; otherwise `$XDG_CONFIG_HOME/sust`
/// or `~/.config/sust` is used on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("SUST_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("sust").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("sust").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk, or defaults if no file exists.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "corpus_path": ctx.corpus_path.display().to_string(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}", path.exists());
        println!("Corpus: {}\n", ctx.corpus_path.display());

        if let Some(ref corpus) = config.corpus {
            println!("  corpus: {}", corpus.display());
        }

        println!("[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }

        println!("\n[matcher]");
        println!("  substitution: {}", config.matcher.substitution);
        println!("  gap: {}", config.matcher.gap);
        println!("  threshold: {}", config.matcher.threshold);
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Updates one dotted key of the config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key.split_once('.') {
        None if key == "corpus" => config.corpus = Some(PathBuf::from(value)),
        Some(("output", "color")) => config.output.color = Some(parse_bool(value)?),
        Some(("matcher", "substitution")) => config.matcher.substitution = parse_cost(value)?,
        Some(("matcher", "gap")) => config.matcher.gap = parse_cost(value)?,
        Some(("matcher", "threshold")) => config.matcher.threshold = parse_cost(value)?,
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key, VALID_KEYS
            )));
        }
    }
    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

/// Parses a non-negative, finite alignment weight.
fn parse_cost(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(CommandError::Config(format!(
            "Invalid cost '{}'. Use a non-negative number",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(parse_bool("on").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("1.5").unwrap(), 1.5);
        assert_eq!(parse_cost("4").unwrap(), 4.0);
        assert!(parse_cost("-1").is_err());
        assert!(parse_cost("NaN").is_err());
        assert!(parse_cost("inf").is_err());
        assert!(parse_cost("cheap").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.corpus.is_none());
        assert!(config.output.color.is_none());
        assert_eq!(config.matcher, AlignmentCosts::default());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1
corpus = "/srv/menus/corpus.json"

[output]
color = false

[matcher]
threshold = 3.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.corpus, Some(PathBuf::from("/srv/menus/corpus.json")));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.matcher.threshold, 3.0);
        assert_eq!(config.matcher.gap, 1.5);
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.matcher, AlignmentCosts::default());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.output.color = Some(true);

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("color = true"));
        assert!(toml_str.contains("[matcher]"));
        assert!(toml_str.contains("threshold = 4.0"));
        assert!(!toml_str.contains("corpus"));
    }

    #[test]
    fn test_apply_setting_known_keys() {
        let mut config = Config::default();
        apply_setting(&mut config, "corpus", "/tmp/corpus.json").unwrap();
        apply_setting(&mut config, "output.color", "off").unwrap();
        apply_setting(&mut config, "matcher.gap", "1").unwrap();
        apply_setting(&mut config, "matcher.substitution", "3").unwrap();
        apply_setting(&mut config, "matcher.threshold", "5.5").unwrap();

        assert_eq!(config.corpus, Some(PathBuf::from("/tmp/corpus.json")));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(
            config.matcher,
            AlignmentCosts {
                substitution: 3.0,
                gap: 1.0,
                threshold: 5.5,
            }
        );
    }

    #[test]
    fn test_apply_setting_unknown_key() {
        let mut config = Config::default();
        let err = apply_setting(&mut config, "matcher.weight", "1").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert!(apply_setting(&mut config, "token", "x").is_err());
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        let original = env::var("SUST_CONFIG").ok();
        env::set_var("SUST_CONFIG", "/tmp/sust-test/config.toml");

        let path = get_config_path();

        match original {
            Some(val) => env::set_var("SUST_CONFIG", val),
            None => env::remove_var("SUST_CONFIG"),
        }

        assert_eq!(path.unwrap(), PathBuf::from("/tmp/sust-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_save_and_load_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let original = env::var("SUST_CONFIG").ok();
        env::set_var("SUST_CONFIG", config_path.to_str().unwrap());

        let mut config = Config::default();
        apply_setting(&mut config, "matcher.threshold", "3").unwrap();
        let saved = save_config(&config);
        let loaded = load_config();

        match original {
            Some(val) => env::set_var("SUST_CONFIG", val),
            None => env::remove_var("SUST_CONFIG"),
        }

        saved.unwrap();
        assert_eq!(loaded.unwrap().matcher.threshold, 3.0);
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_gives_default() {
        let original = env::var("SUST_CONFIG").ok();
        env::set_var("SUST_CONFIG", "/tmp/sust-test-nonexistent/config.toml");

        let loaded = load_config();

        match original {
            Some(val) => env::set_var("SUST_CONFIG", val),
            None => env::remove_var("SUST_CONFIG"),
        }

        assert!(loaded.unwrap().corpus.is_none());
    }
}
