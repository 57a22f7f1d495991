use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective buildstamp configuration")]
pub struct ConfigArgs {}

/// Display buildstamp configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs, dir: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(dir).await?;
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}
