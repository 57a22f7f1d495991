use regex::Regex;
use std::sync::LazyLock;

const STABLE_KEYWORDS: [&str; 3] = ["RELEASE", "FINAL", "GA"];

static NON_STABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.*[.\-_](?:alpha|beta|rc|cr|m|preview|b|ea)[.\d\-_]*$")
        .expect("hardcoded regex must compile")
});

/// Whether a dependency version is a pre-release that update checks should reject.
///
/// A stable keyword anywhere in the version wins over the pre-release suffix check.
#[must_use]
pub fn is_non_stable(version: &str) -> bool {
    let upper = version.to_uppercase();
    if STABLE_KEYWORDS.iter().any(|keyword| upper.contains(keyword)) {
        return false;
    }
    NON_STABLE_PATTERN.is_match(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", false)]
    #[case("2.13.1", false)]
    #[case("1.0.0-alpha", true)]
    #[case("1.0.0-alpha01", true)]
    #[case("1.0.0-alphabet", false)]
    #[case("1.0.0-alpha.1", true)]
    #[case("1.0.0-beta-2", true)]
    #[case("1.0.0-rc1", true)]
    #[case("1.0.0-RC1", true)]
    #[case("4.0.0.M3", true)]
    #[case("1.0_preview", true)]
    #[case("1.0.0-b12", true)]
    #[case("17-ea", true)]
    #[case("1.0.0.RELEASE", false)]
    #[case("1.0.0.Final", false)]
    #[case("1.0.0-GA", false)]
    #[case("1.0.0-rc1-final", false)]
    #[case("1.0.0-jre", false)]
    #[case("alpha", false)]
    fn test_is_non_stable(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_non_stable(version), expected, "version: {version}");
    }
}
