use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::{
    commands::{
        ConfigArgs, InitArgs, SigningArgs, StabilityArgs, StampArgs, handle_config, handle_init,
        handle_signing, handle_stability, handle_stamp,
    },
    options::ModuleOptions,
    prompter::InquirePrompter,
};
pub mod commands;
mod context;
pub mod logging;
pub mod options;
pub mod prompter;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "buildstamp",
    author,
    version,
    about = "Build-counter versioning and release signing for Gradle modules",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    module: ModuleOptions,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Stamp(StampArgs),
    Signing(SigningArgs),
    Stability(StabilityArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    logging::init_logging(cli.verbose);
    let dir = cli.module.dir.as_deref();
    if let Some(command) = cli.command {
        match command {
            Commands::Init(args) => handle_init(&args, dir, &InquirePrompter).await?,
            Commands::Stamp(args) => handle_stamp(&args, dir).await?,
            Commands::Signing(args) => handle_signing(&args, dir).await?,
            Commands::Stability(args) => handle_stability(&args).await?,
            Commands::Config(args) => handle_config(&args, dir).await?,
        }
    } else {
        // no tasks: report the current version without touching the store
        handle_stamp(&StampArgs::default(), dir).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::parse_from(["buildstamp", "init", "--major", "3"]);
        assert!(matches!(cli.command, Some(Commands::Init(ref args)) if args.major == 3));
    }

    #[test]
    fn test_cli_parsing_stamp() {
        let cli = Cli::parse_from(["buildstamp", "stamp", "assembleRelease"]);
        assert!(matches!(cli.command, Some(Commands::Stamp(ref args)) if args.tasks == ["assembleRelease"]));
    }

    #[test]
    fn test_cli_parsing_signing() {
        let cli = Cli::parse_from(["buildstamp", "signing", "bundleRelease"]);
        assert!(matches!(cli.command, Some(Commands::Signing(_))));
    }

    #[test]
    fn test_cli_parsing_stability() {
        let cli = Cli::parse_from(["buildstamp", "stability", "1.0.0-rc1"]);
        assert!(matches!(cli.command, Some(Commands::Stability(_))));
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["buildstamp", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }

    #[test]
    fn test_cli_parsing_default_with_options() {
        let cli = Cli::parse_from(["buildstamp", "-C", "app", "--verbose"]);
        assert!(cli.command.is_none());
        assert!(cli.verbose);
        assert_eq!(cli.module.dir, Some(PathBuf::from("app")));
    }

    #[test]
    fn test_cli_parsing_global_options_after_subcommand() {
        let cli = Cli::parse_from(["buildstamp", "stamp", "testDebugUnitTest", "--dir", "app", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.module.dir, Some(PathBuf::from("app")));
    }
}
