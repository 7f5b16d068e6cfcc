//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up erdb CLI defaults.

use std::path::PathBuf;

use crate::config::Config;
use anyhow::Result;

/// New values for the configure command; `None` leaves a setting untouched
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub data_dir: Option<PathBuf>,
    pub schema_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub cms_endpoint: Option<String>,
    pub cms_email: Option<String>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.data_dir.is_none()
            && self.schema_dir.is_none()
            && self.output_dir.is_none()
            && self.cms_endpoint.is_none()
            && self.cms_email.is_none()
    }

    fn apply(self, config: &mut Config) {
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir;
        }
        if self.schema_dir.is_some() {
            config.schema_dir = self.schema_dir;
        }
        if self.output_dir.is_some() {
            config.output_dir = self.output_dir;
        }
        if self.cms_endpoint.is_some() {
            config.cms_endpoint = self.cms_endpoint;
        }
        if self.cms_email.is_some() {
            config.cms_email = self.cms_email;
        }
    }
}

/// Handle the configure command
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    update.apply(&mut config);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn show_config(config: &Config) {
    let path = |p: &Option<PathBuf>| {
        p.as_ref()
            .map_or_else(|| "(default)".to_string(), |p| p.display().to_string())
    };
    let text = |s: &Option<String>| s.clone().unwrap_or_else(|| "(not set)".to_string());

    println!("Data directory:   {}", path(&config.data_dir));
    println!("Schema directory: {}", path(&config.schema_dir));
    println!("Output directory: {}", path(&config.output_dir));
    println!("CMS endpoint:     {}", text(&config.cms_endpoint));
    println!("CMS email:        {}", text(&config.cms_email));

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: erdb configure --data-dir DIR --schema-dir DIR --output-dir DIR");
    println!("   or: erdb configure --cms-endpoint URL --cms-email EMAIL");
    println!("   or: erdb configure --show");
    println!();
    println!("Note: the CMS password is never stored; pass --password or set ERDB_CMS_PASSWORD.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_keeps_unset_values() {
        let mut config = Config {
            data_dir: Some(PathBuf::from("old")),
            cms_email: Some("me@example.org".into()),
            ..Config::default()
        };
        ConfigUpdate {
            data_dir: Some(PathBuf::from("new")),
            ..ConfigUpdate::default()
        }
        .apply(&mut config);

        assert_eq!(config.data_dir, Some(PathBuf::from("new")));
        assert_eq!(config.cms_email.as_deref(), Some("me@example.org"));
    }

    #[test]
    fn test_empty_update() {
        assert!(ConfigUpdate::default().is_empty());
        assert!(!ConfigUpdate {
            cms_endpoint: Some("https://cms".into()),
            ..ConfigUpdate::default()
        }
        .is_empty());
    }
}
