use anyhow::Result;
use buildstamp_core::VersionStore;
use buildstamp_utils::write_version_store;
use clap::Args;
use std::path::Path;

use crate::{context::CommandContext, prompter::Prompter};

#[derive(Args, Debug)]
#[command(about = "Create a fresh version store for a module")]
pub struct InitArgs {
    /// Major version of the new store
    #[arg(long, default_value_t = 1)]
    pub major: u32,

    /// Minor version of the new store
    #[arg(long, default_value_t = 0)]
    pub minor: u32,

    /// Overwrite an existing store without asking
    #[arg(short, long, default_value = "false")]
    pub yes: bool,

    /// If true, do not make any filesystem changes.
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

/// Initialize the version store
///
/// # Errors
/// Returns error if the module directory is invalid, the prompt fails, or writing fails.
pub async fn handle_init(args: &InitArgs, dir: Option<&Path>, prompter: &dyn Prompter) -> Result<()> {
    let ctx = CommandContext::new(dir).await?;
    let store_path = ctx.version_store_path();

    if store_path.exists()
        && !args.yes
        && !prompter.confirm(&format!(
            "{} already exists. Overwrite it?",
            store_path.display()
        ))?
    {
        println!("Init cancelled");
        return Ok(());
    }

    let store = VersionStore::initial(&ctx.config.properties_file, args.major, args.minor);
    if !args.dry_run {
        write_version_store(&store_path, &store).await?;
    }
    println!("{}", init_message(&store_path, args));
    Ok(())
}

fn init_message(store_path: &Path, args: &InitArgs) -> String {
    let version = format!("{}.{}.0", args.major, args.minor);
    if args.dry_run {
        format!(
            "Dry run, would initialize version store at {} ({version})",
            store_path.display()
        )
    } else {
        format!(
            "Version store initialized at {} ({version})",
            store_path.display()
        )
    }
}
