use std::fmt::Write;

use anyhow::{Context, Result};
use buildstamp_core::{AppIdentity, BuildVersion, TaskSelection, VersionCounters, VersionStore};

/// Apply the requested tasks to the store counters and compute the build's version attributes.
///
/// Release bumps patch and store and resets the build counter; test bumps the build counter
/// starting from the value the store held before any release reset. Non-release builds get the
/// build counter appended to the version name and the debug suffix appended to the
/// application id.
///
/// # Errors
/// Returns error if a counter would overflow.
pub fn derive_version(
    store: &mut VersionStore,
    selection: &TaskSelection,
    identity: &AppIdentity,
    project_name: Option<String>,
) -> Result<BuildVersion> {
    let VersionCounters {
        major,
        minor,
        mut patch,
        mut build,
        store: mut store_code,
    } = store.counters();
    let mut store_changed = false;

    if selection.is_release() {
        tracing::info!("building release");
        patch = bump(patch, "version_patch")?;
        store_code = bump(store_code, "version_store")?;
        store.set_patch(patch);
        store.set_store(store_code);
        store.set_build(0);
        store_changed = true;
    }

    if selection.is_test() {
        tracing::info!("running tests");
        build = bump(build, "version_build")?;
        store.set_build(build);
        store_changed = true;
    }

    let mut version_name = format!("{major}.{minor}.{patch}");
    let mut application_id = identity.application_id.clone();
    if !selection.is_release() {
        let _ = write!(version_name, ".{build}");
        application_id.push_str(&identity.debug_suffix);
    }

    Ok(BuildVersion {
        project_name,
        version_name,
        version_code: store_code,
        application_id,
        release: selection.is_release(),
        test: selection.is_test(),
        counters: store.counters(),
        store_changed,
    })
}

fn bump(value: u32, key: &str) -> Result<u32> {
    value
        .checked_add(1)
        .with_context(|| format!("Counter '{key}' overflowed"))
}
