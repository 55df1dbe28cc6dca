// Copyright (c) 2026 The Presentes Authors

//! Registry configuration.
//!
//! Stored as TOML, by default at `~/.presentes/config.toml`:
//!
//! ```toml
//! [payee]
//! key = "casanova@example.com"
//! name = "Casa Nova"
//! city = "Sao Paulo"
//!
//! [pix]
//! message = "Cha de Casa Nova"
//! strict = true
//! ```

use anyhow::{bail, Context, Result};
use presentes_pix::constants::{MAX_MERCHANT_CITY_LEN, MAX_MERCHANT_NAME_LEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration for the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Who receives PIX contributions
    pub payee: PayeeConfig,
    /// Defaults applied to generated codes
    #[serde(default)]
    pub pix: PixConfig,
}

/// The PIX account that contributions are sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeConfig {
    /// PIX key: e-mail, phone, CPF/CNPJ or random key
    pub key: String,
    /// Name shown to the payer
    pub name: String,
    /// City shown to the payer
    pub city: String,
}

impl PayeeConfig {
    /// Whether the name will be cut when encoded
    pub fn name_truncated(&self) -> bool {
        self.name.chars().count() > MAX_MERCHANT_NAME_LEN
    }

    /// Whether the city will be cut when encoded
    pub fn city_truncated(&self) -> bool {
        self.city.chars().count() > MAX_MERCHANT_CITY_LEN
    }
}

/// Defaults for generated codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixConfig {
    /// Message shown to the payer when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Refuse to emit codes whose fields overflow a two-digit length
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for PixConfig {
    fn default() -> Self {
        Self {
            message: None,
            strict: default_strict(),
        }
    }
}

impl Config {
    /// Create a new config for the given payee
    pub fn new(payee: PayeeConfig) -> Self {
        Self {
            payee,
            pix: PixConfig::default(),
        }
    }

    /// Check that the payee is usable
    pub fn validate(&self) -> Result<()> {
        if self.payee.key.trim().is_empty() {
            bail!("Payee PIX key is empty");
        }
        if self.payee.name.trim().is_empty() {
            bail!("Payee name is empty");
        }
        if self.payee.city.trim().is_empty() {
            bail!("Payee city is empty");
        }
        Ok(())
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        // The PIX key is often a CPF
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, perms)
                .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
        }

        Ok(())
    }

    /// Check if config file exists
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }
}

/// Get the default data directory
pub fn default_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".presentes"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(default_data_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn payee() -> PayeeConfig {
        PayeeConfig {
            key: "casanova@example.com".to_string(),
            name: "Casa Nova".to_string(),
            city: "Sao Paulo".to_string(),
        }
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::new(payee());
        config.pix.message = Some("Cha de Casa Nova".to_string());
        config.save(&path).unwrap();
        assert!(Config::exists(&path));

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.payee, payee());
        assert_eq!(loaded.pix.message.as_deref(), Some("Cha de Casa Nova"));
        assert!(loaded.pix.strict);
    }

    #[test]
    fn test_pix_section_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[payee]\nkey = \"k\"\nname = \"Casa Nova\"\ncity = \"Sao Paulo\"\n",
        )
        .unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.pix.strict);
        assert_eq!(loaded.pix.message, None);
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[payee]\nkey = \"  \"\nname = \"N\"\ncity = \"C\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("PIX key is empty"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(Config::load(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_truncation_flags() {
        let mut payee = payee();
        assert!(!payee.name_truncated());
        assert!(!payee.city_truncated());

        payee.name = "Maria Aparecida dos Santos Oliveira".to_string();
        payee.city = "São José dos Campos".to_string();
        assert!(payee.name_truncated());
        assert!(payee.city_truncated());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_with_private_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::new(payee()).save(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
