use anyhow::Result;
use buildstamp_core::{SigningOutcome, TaskPatterns, TaskSelection};
use buildstamp_utils::resolve_signing_config;
use clap::Args;
use std::path::Path;

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Resolve the release signing config for the requested tasks")]
pub struct SigningArgs {
    /// Task names requested for this build
    pub tasks: Vec<String>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// A user-facing line and the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportLine {
    Stdout(String),
    Stderr(String),
}

impl ReportLine {
    pub(crate) fn emit(&self) {
        match self {
            Self::Stdout(line) => println!("{line}"),
            Self::Stderr(line) => eprintln!("{line}"),
        }
    }
}

/// Line describing the signing outcome; a missing keystore goes to stderr in every format.
pub(crate) fn signing_line(outcome: &SigningOutcome, format: &FormatOptions) -> Option<ReportLine> {
    match outcome {
        SigningOutcome::Skipped => None,
        SigningOutcome::Missing { file } => Some(ReportLine::Stderr(format!(
            ">>> No Signing Config found! Missing '{file}' file!"
        ))),
        SigningOutcome::Configured(config) => format
            .is_stdout()
            .then(|| ReportLine::Stdout(format!(">>> Signing Config {config}"))),
    }
}

pub(crate) fn report_signing(outcome: &SigningOutcome, format: &FormatOptions) {
    if *outcome == SigningOutcome::Skipped {
        tracing::debug!("no release task requested, signing skipped");
    }
    if let Some(line) = signing_line(outcome, format) {
        line.emit();
    }
}

/// Resolve the release signing config without touching the version store
///
/// # Errors
/// Returns error if the keystore properties file exists but is unreadable or incomplete.
pub async fn handle_signing(args: &SigningArgs, dir: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(dir).await?;
    let patterns = TaskPatterns::from_config(&ctx.config)?;
    let selection = TaskSelection::classify(&args.tasks, &patterns);

    let outcome = resolve_signing_config(&ctx.module_dir, &selection, &ctx.config).await?;
    report_signing(&outcome, &args.format);
    match args.format {
        FormatOptions::Stdout => {
            if outcome == SigningOutcome::Skipped {
                println!("No release task requested, signing skipped");
            }
        }
        FormatOptions::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildstamp_core::SigningConfig;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        signing: SigningArgs,
    }

    #[test]
    fn test_signing_args_parsing() {
        let cli = TestCli::parse_from(["test", "assembleRelease", "--format", "json"]);
        assert_eq!(cli.signing.tasks, vec!["assembleRelease"]);
        assert!(matches!(cli.signing.format, FormatOptions::Json));
    }

    #[tokio::test]
    async fn test_handle_signing_missing_keystore_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let args = SigningArgs {
            tasks: vec!["assembleRelease".to_string()],
            format: FormatOptions::Json,
        };
        assert!(handle_signing(&args, Some(temp_dir.path())).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_signing_incomplete_keystore_fails() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("androidkeystore.properties"),
            "key_alias=upload\n",
        )
        .unwrap();
        let args = SigningArgs {
            tasks: vec!["assembleRelease".to_string()],
            format: FormatOptions::Stdout,
        };
        assert!(handle_signing(&args, Some(temp_dir.path())).await.is_err());
    }

    #[tokio::test]
    async fn test_handle_signing_skipped_ignores_broken_keystore() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("androidkeystore.properties"),
            "key_alias=upload\n",
        )
        .unwrap();
        let args = SigningArgs {
            tasks: vec!["assembleDebug".to_string()],
            format: FormatOptions::Stdout,
        };
        assert!(handle_signing(&args, Some(temp_dir.path())).await.is_ok());
    }

    #[test]
    fn test_signing_line_missing_keystore_on_stderr() {
        let outcome = SigningOutcome::Missing {
            file: "androidkeystore.properties".to_string(),
        };
        let expected = ReportLine::Stderr(
            ">>> No Signing Config found! Missing 'androidkeystore.properties' file!".to_string(),
        );
        assert_eq!(signing_line(&outcome, &FormatOptions::Stdout), Some(expected.clone()));
        assert_eq!(signing_line(&outcome, &FormatOptions::Json), Some(expected));
    }

    #[test]
    fn test_signing_line_configured() {
        let outcome = SigningOutcome::Configured(SigningConfig::new(
            "releaseConfig".to_string(),
            "release".to_string(),
            "upload".to_string(),
            "key-secret".to_string(),
            PathBuf::from("release.jks"),
            "store-secret".to_string(),
        ));
        assert_eq!(
            signing_line(&outcome, &FormatOptions::Stdout),
            Some(ReportLine::Stdout(
                ">>> Signing Config {key_alias=upload, key_password=********, store_file=release.jks, store_password=********}"
                    .to_string()
            ))
        );
        assert_eq!(signing_line(&outcome, &FormatOptions::Json), None);
    }

    #[test]
    fn test_signing_line_skipped() {
        assert_eq!(signing_line(&SigningOutcome::Skipped, &FormatOptions::Stdout), None);
    }
}
