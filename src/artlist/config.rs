use crate::error::{ArtlistError, Result};
use crate::table::TableFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TITLE: &str = "藝術作品清單";
const DEFAULT_SHEET_NAME: &str = "作品清單";

/// Configuration for artlist, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtlistConfig {
    /// Format used by `export` when the target path does not name one
    #[serde(default)]
    pub export_format: TableFormat,

    /// File name stem for exports without an explicit path
    #[serde(default = "default_title")]
    pub export_basename: String,

    /// Worksheet name written into exported workbooks
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Heading of the printable summary
    #[serde(default = "default_title")]
    pub print_title: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

impl Default for ArtlistConfig {
    fn default() -> Self {
        Self {
            export_format: TableFormat::default(),
            export_basename: default_title(),
            sheet_name: default_sheet_name(),
            print_title: default_title(),
        }
    }
}

impl ArtlistConfig {
    pub const KEYS: [&'static str; 4] =
        ["export-format", "export-basename", "sheet-name", "print-title"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ArtlistConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "export-format" => Ok(self.export_format.to_string()),
            "export-basename" => Ok(self.export_basename.clone()),
            "sheet-name" => Ok(self.sheet_name.clone()),
            "print-title" => Ok(self.print_title.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "export-format" => self.export_format = value.parse()?,
            "export-basename" => self.export_basename = value.to_string(),
            "sheet-name" => self.sheet_name = validate_sheet_name(value)?,
            "print-title" => self.print_title = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ArtlistError {
    ArtlistError::InvalidValue(format!(
        "unknown config key '{}' (known: {})",
        key,
        ArtlistConfig::KEYS.join(", ")
    ))
}

/// Worksheet names are limited to 31 characters and may not contain `[]:*?/\`.
fn validate_sheet_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty()
        || name.chars().count() > 31
        || name.contains(['[', ']', ':', '*', '?', '/', '\\'])
    {
        return Err(ArtlistError::InvalidValue(format!(
            "'{}' is not a valid worksheet name",
            name
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArtlistConfig::default();
        assert_eq!(config.export_format, TableFormat::Xlsx);
        assert_eq!(config.sheet_name, "作品清單");
        assert_eq!(config.print_title, "藝術作品清單");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArtlistConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, ArtlistConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ArtlistConfig::default();
        config.set("export-format", "csv").unwrap();
        config.set("print-title", "Spring Show").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ArtlistConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.export_format, TableFormat::Csv);
        assert_eq!(loaded.print_title, "Spring Show");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"export_format":"csv"}"#).unwrap();
        let loaded = ArtlistConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.export_format, TableFormat::Csv);
        assert_eq!(loaded.sheet_name, "作品清單");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ArtlistConfig::default();
        assert!(config.set("export-format", "pdf").is_err());
        assert!(config.set("sheet-name", "a/b").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config.get("export-format").unwrap(), "xlsx");
    }
}
