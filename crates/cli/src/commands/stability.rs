use std::collections::BTreeMap;

use anyhow::Result;
use buildstamp_utils::is_non_stable;
use clap::Args;
use colored::Colorize;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Classify dependency versions as stable or pre-release")]
pub struct StabilityArgs {
    /// Versions to classify (e.g. 1.9.0 2.0.0-beta01)
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Exit with an error when any version is a pre-release
    #[arg(long)]
    pub fail_on_non_stable: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Check dependency version stability
///
/// # Errors
/// Returns error if `--fail-on-non-stable` is set and a pre-release version was given.
pub async fn handle_stability(args: &StabilityArgs) -> Result<()> {
    let result_map: BTreeMap<&str, bool> = args
        .versions
        .iter()
        .map(|version| (version.as_str(), is_non_stable(version)))
        .collect();

    match args.format {
        FormatOptions::Stdout => {
            for version in &args.versions {
                let label = if result_map[version.as_str()] {
                    "non-stable".yellow().bold()
                } else {
                    "stable".green().bold()
                };
                println!("{version}: {label}");
            }
        }
        FormatOptions::Json => {
            println!("{}", serde_json::to_string_pretty(&result_map)?);
        }
    }

    let non_stable: Vec<&str> = result_map
        .iter()
        .filter_map(|(version, non_stable)| non_stable.then_some(*version))
        .collect();
    if args.fail_on_non_stable && !non_stable.is_empty() {
        anyhow::bail!("Non-stable versions: {}", non_stable.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        stability: StabilityArgs,
    }

    fn args(versions: &[&str], fail_on_non_stable: bool) -> StabilityArgs {
        StabilityArgs {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            fail_on_non_stable,
            format: FormatOptions::Stdout,
        }
    }

    #[test]
    fn test_stability_args_require_versions() {
        assert!(TestCli::try_parse_from(["test"]).is_err());
        let cli = TestCli::try_parse_from(["test", "1.0.0", "2.0.0-rc1"]).unwrap();
        assert_eq!(cli.stability.versions.len(), 2);
    }

    #[tokio::test]
    async fn test_handle_stability_report_only() {
        assert!(handle_stability(&args(&["1.0.0", "2.0.0-rc1"], false)).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_stability_fail_on_non_stable() {
        let err = handle_stability(&args(&["1.0.0", "2.0.0-rc1"], true))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("2.0.0-rc1"));
        assert!(!err.to_string().contains("1.0.0,"));
    }

    #[tokio::test]
    async fn test_handle_stability_all_stable() {
        assert!(handle_stability(&args(&["1.0.0", "1.0.0.RELEASE"], true)).await.is_ok());
    }
}
