use crate::commands::{CmdMessage, CmdResult};
use crate::config::ArtlistConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes configuration. Changes are saved to `config_dir` when one
/// is given; otherwise they only last for the session.
pub fn run(
    config: &mut ArtlistConfig,
    config_dir: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            let mut updated = config.clone();
            updated.set(&key, &value)?;
            if let Some(dir) = config_dir {
                updated.save(dir)?;
            }
            *config = updated;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }
    Ok(result.with_config(config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableFormat;

    #[test]
    fn set_persists_when_dir_given() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ArtlistConfig::default();
        run(
            &mut config,
            Some(dir.path()),
            ConfigAction::Set("export-format".into(), "csv".into()),
        )
        .unwrap();
        assert_eq!(config.export_format, TableFormat::Csv);
        let reloaded = ArtlistConfig::load(dir.path()).unwrap();
        assert_eq!(reloaded.export_format, TableFormat::Csv);
    }

    #[test]
    fn failed_save_keeps_previous_setting() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the config directory should be makes saving fail.
        let blocked = dir.path().join("not-a-dir");
        std::fs::write(&blocked, "x").unwrap();

        let mut config = ArtlistConfig::default();
        let outcome = run(
            &mut config,
            Some(&blocked),
            ConfigAction::Set("export-format".into(), "csv".into()),
        );
        assert!(outcome.is_err());
        assert_eq!(config.export_format, TableFormat::Xlsx);
    }

    #[test]
    fn invalid_value_changes_nothing() {
        let mut config = ArtlistConfig::default();
        assert!(run(
            &mut config,
            None,
            ConfigAction::Set("sheet-name".into(), "a/b".into())
        )
        .is_err());
        assert_eq!(config, ArtlistConfig::default());
    }

    #[test]
    fn show_key_reports_value() {
        let mut config = ArtlistConfig::default();
        let result = run(&mut config, None, ConfigAction::ShowKey("sheet-name".into())).unwrap();
        assert_eq!(result.messages[0].content, "sheet-name = 作品清單");
        assert!(result.config.is_none());
    }

    #[test]
    fn show_all_returns_config() {
        let mut config = ArtlistConfig::default();
        let result = run(&mut config, None, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ArtlistConfig::default()));
    }
}
