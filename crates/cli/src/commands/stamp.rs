use anyhow::Result;
use buildstamp_core::{BuildVersion, SigningOutcome, TaskKind, TaskPatterns, TaskSelection};
use buildstamp_gradle::{load_build_script, resolve_app_identity};
use buildstamp_utils::{
    derive_version, get_project_name, read_version_store, resolve_signing_config,
    write_version_store,
};
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::{commands::signing::report_signing, context::CommandContext, options::FormatOptions};

#[derive(Args, Debug, Default)]
#[command(about = "Derive the build version for the requested tasks and update the version store")]
pub struct StampArgs {
    /// Task names requested for this build (e.g. :app:assembleRelease testDebugUnitTest)
    pub tasks: Vec<String>,

    /// Compute and report without writing the version store or build script
    #[arg(long)]
    pub dry_run: bool,

    /// Write versionCode and versionName into the module's build script
    #[arg(long)]
    pub apply: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StampReport<'a> {
    selection: &'a TaskSelection,
    signing: &'a SigningOutcome,
    version: &'a BuildVersion,
    dry_run: bool,
    store_written: bool,
    script_updated: bool,
}

/// Run the signing configurator and the version deriver for one build invocation
///
/// # Errors
/// Returns error if the keystore or version store cannot be read, a pattern is invalid, or
/// writing the results fails.
pub async fn handle_stamp(args: &StampArgs, dir: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(dir).await?;
    let patterns = TaskPatterns::from_config(&ctx.config)?;
    let selection = TaskSelection::classify(&args.tasks, &patterns);
    tracing::debug!(tasks = ?selection.tasks(), kinds = ?selection.kinds(), "classified tasks");

    let signing = resolve_signing_config(&ctx.module_dir, &selection, &ctx.config).await?;
    report_signing(&signing, &args.format);

    let store_path = ctx.version_store_path();
    let mut store = read_version_store(&store_path).await?;
    let mut script = load_build_script(&ctx.module_dir, &ctx.config).await?;
    if args.apply && script.is_none() {
        anyhow::bail!(
            "No build script found in {} to apply the version to",
            ctx.module_dir.display()
        );
    }
    let identity = resolve_app_identity(script.as_deref(), &ctx.config);

    if args.format.is_stdout() {
        for kind in selection.kinds() {
            println!("{}", progress_line(kind));
        }
    }

    let version = derive_version(
        &mut store,
        &selection,
        &identity,
        get_project_name(&ctx.module_dir),
    )?;

    let store_written = version.store_changed && !args.dry_run;
    if store_written {
        write_version_store(&store_path, &store).await?;
    }

    let mut script_updated = false;
    if let Some(script) = script.as_mut().filter(|_| args.apply && !args.dry_run) {
        script_updated = script
            .apply_version(version.version_code, &version.version_name)
            .await?;
    }

    match args.format {
        FormatOptions::Stdout => {
            println!("{}", summary_line(&version));
            if args.dry_run {
                println!("Dry run, no files were written");
            } else if script_updated {
                println!(
                    "Updated {}",
                    script
                        .as_ref()
                        .map(|s| s.path().display().to_string())
                        .unwrap_or_default()
                );
            }
        }
        FormatOptions::Json => {
            let report = StampReport {
                selection: &selection,
                signing: &signing,
                version: &version,
                dry_run: args.dry_run,
                store_written,
                script_updated,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn progress_line(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Release => ">>> Building Release...",
        TaskKind::Test => ">>> Running Tests...",
    }
}

fn summary_line(version: &BuildVersion) -> String {
    format!(">>> {version}")
}
