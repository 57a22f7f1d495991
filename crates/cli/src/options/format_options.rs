use clap::ValueEnum;

/// CLI output format selection.
///
/// Controls whether commands print human-readable output or JSON for CI integration.
#[derive(Debug, Clone, Default, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for CI/CD pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable colored terminal output
    #[default]
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    #[must_use]
    pub const fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_default() {
        assert!(FormatOptions::default().is_stdout());
        assert!(!FormatOptions::Json.is_stdout());
    }

    #[test]
    fn test_format_options_value_names() {
        assert!(matches!(
            FormatOptions::from_str("json", false),
            Ok(FormatOptions::Json)
        ));
        assert!(matches!(
            FormatOptions::from_str("stdout", false),
            Ok(FormatOptions::Stdout)
        ));
        assert!(FormatOptions::from_str("yaml", false).is_err());
    }
}
