use anyhow::{Context, Result};
use presentes_pix::PixPayload;
use std::path::Path;
use tracing::{debug, info};

use crate::amount::parse_amount;
use crate::config::Config;

/// Print a PIX Copia e Cola code for the configured payee
///
/// Without an amount the code is open-value and the guest types the amount
/// in their banking app.
pub fn run(
    config_path: &Path,
    amount: Option<&str>,
    txid: Option<&str>,
    message: Option<&str>,
) -> Result<()> {
    let config = Config::load(config_path)
        .context("No payee configured. Run 'presentes init' first.")?;

    let amount = amount.map(parse_amount).transpose()?;
    let message = message.or(config.pix.message.as_deref());

    let code = encode(&config, amount, txid, message)?;

    match amount {
        Some(amount) => info!("Generated PIX code for R$ {:.2}", amount),
        None => info!("Generated open-value PIX code"),
    }
    debug!(len = code.len(), crc = &code[code.len() - 4..], "payload assembled");

    println!("{}", code);
    Ok(())
}

/// Build the code for `config`'s payee.
pub fn encode(
    config: &Config,
    amount: Option<f64>,
    txid: Option<&str>,
    message: Option<&str>,
) -> Result<String> {
    let payee = &config.payee;
    let mut payload = PixPayload::new(&payee.key, &payee.name, &payee.city);
    if let Some(amount) = amount {
        payload = payload.amount(amount);
    }
    if let Some(txid) = txid {
        payload = payload.txid(txid);
    }
    if let Some(message) = message {
        payload = payload.description(message);
    }

    if payee.name_truncated() {
        debug!(name = payload.merchant_name(), "merchant name truncated");
    }
    if payee.city_truncated() {
        debug!(city = payload.merchant_city(), "merchant city truncated");
    }

    if config.pix.strict {
        payload
            .try_encode()
            .context("Payee or message cannot be written to a PIX code")
    } else {
        Ok(payload.encode())
    }
}
