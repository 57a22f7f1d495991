//! # buildstamp-gradle
//!
//! Gradle build script support for buildstamp.
//!
//! Locates a module's build script (build.gradle.kts or build.gradle), reads the declared
//! `applicationId` and build-type `applicationIdSuffix`, and rewrites `versionCode` /
//! `versionName` for both Kotlin DSL and Groovy syntax.

pub mod build_script;
pub mod declarations;
pub mod finder;
pub mod version_updater;

pub use build_script::{BuildScript, GradleBuildScript};
pub use declarations::ScriptSyntax;
pub use finder::{find_build_script, load_build_script, resolve_app_identity};
pub use version_updater::{update_version_in_groovy, update_version_in_kts};
