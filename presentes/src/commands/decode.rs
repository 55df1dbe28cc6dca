use anyhow::{Context, Result};
use presentes_pix::decode;
use tracing::debug;

/// Verify a PIX Copia e Cola code and show what it contains
pub fn run(payload: &str, json: bool) -> Result<()> {
    let payload = payload.trim();
    let decoded = decode(payload).context("Not a valid PIX code")?;
    debug!(crc = %decoded.crc, "checksum verified");

    if json {
        let out = serde_json::to_string_pretty(&decoded)
            .context("Failed to serialize decoded payload")?;
        println!("{}", out);
        return Ok(());
    }

    println!("=== PIX Code ===");
    println!();
    println!("Key:      {}", decoded.pix_key);
    println!("Name:     {}", decoded.merchant_name);
    println!("City:     {}", decoded.merchant_city);
    match &decoded.amount {
        Some(amount) => println!("Amount:   R$ {}", amount),
        None => println!("Amount:   (chosen by payer)"),
    }
    if let Some(message) = &decoded.description {
        println!("Message:  {}", message);
    }
    if let Some(txid) = &decoded.txid {
        println!("Txid:     {}", txid);
    }
    println!("Checksum: {} (ok)", decoded.crc);

    Ok(())
}
