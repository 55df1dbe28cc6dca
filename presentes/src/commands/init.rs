use anyhow::{bail, Result};
use presentes_pix::constants::{MAX_MERCHANT_CITY_LEN, MAX_MERCHANT_NAME_LEN};
use presentes_pix::truncate_chars;
use std::path::Path;
use tracing::{info, warn};

use crate::config::{Config, PayeeConfig};

/// Run the init command
pub fn run(
    config_path: &Path,
    key: &str,
    name: &str,
    city: &str,
    message: Option<&str>,
    force: bool,
) -> Result<()> {
    if Config::exists(config_path) && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it or pass a different --config path.",
            config_path.display()
        );
    }

    let payee = PayeeConfig {
        key: key.trim().to_string(),
        name: name.trim().to_string(),
        city: city.trim().to_string(),
    };

    let mut config = Config::new(payee);
    config.pix.message = message.map(str::trim).filter(|m| !m.is_empty()).map(String::from);
    config.validate()?;

    if config.payee.name_truncated() {
        warn!(
            "Name is longer than {} characters; codes will show '{}'",
            MAX_MERCHANT_NAME_LEN,
            truncate_chars(&config.payee.name, MAX_MERCHANT_NAME_LEN)
        );
    }
    if config.payee.city_truncated() {
        warn!(
            "City is longer than {} characters; codes will show '{}'",
            MAX_MERCHANT_CITY_LEN,
            truncate_chars(&config.payee.city, MAX_MERCHANT_CITY_LEN)
        );
    }

    config.save(config_path)?;

    info!("Payee configured at {}", config_path.display());
    println!("Config saved to: {}", config_path.display());
    println!("\nPayee:");
    println!("  Key:  {}", config.payee.key);
    println!("  Name: {}", config.payee.name);
    println!("  City: {}", config.payee.city);
    println!("\nNext steps:");
    println!("  1. Run 'presentes pix 100,00' to get a code for a fixed amount");
    println!("  2. Run 'presentes pix' for a code where the guest picks the amount");

    Ok(())
}
