use clap::Args;
use std::path::PathBuf;

/// Selects the Gradle module directory a command operates on.
#[derive(Args, Debug, Clone, Default)]
pub struct ModuleOptions {
    /// Module directory holding the version store (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<PathBuf>,
}
