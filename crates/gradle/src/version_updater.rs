use regex::Regex;
use std::sync::LazyLock;

static KTS_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\s*versionCode\s*=\s*)\d+").expect("hardcoded regex must compile")
});

static KTS_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*versionName\s*=\s*)"[^"]*""#).expect("hardcoded regex must compile")
});

/// Update `versionCode` and `versionName` in build.gradle.kts content
#[must_use]
pub fn update_version_in_kts(content: &str, version_code: u32, version_name: &str) -> String {
    let content = KTS_CODE_PATTERN.replace(content, format!("${{1}}{version_code}"));
    KTS_NAME_PATTERN
        .replace(&content, format!(r#"${{1}}"{version_name}""#))
        .to_string()
}

static GROOVY_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\s*versionCode\s*(?:=\s*)?)\d+").expect("hardcoded regex must compile")
});

static GROOVY_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*versionName\s*(?:=\s*)?)['"][^'"]*['"]"#)
        .expect("hardcoded regex must compile")
});

/// Update `versionCode` and `versionName` in build.gradle (Groovy) content
#[must_use]
pub fn update_version_in_groovy(content: &str, version_code: u32, version_name: &str) -> String {
    let content = GROOVY_CODE_PATTERN.replace(content, format!("${{1}}{version_code}"));
    GROOVY_NAME_PATTERN
        .replace(&content, format!(r"${{1}}'{version_name}'"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_version_in_kts() {
        let content = r#"
android {
    defaultConfig {
        applicationId = "com.vrem.wifianalyzer"
        minSdk = 24
        versionCode = 1
        versionName = "1.0"
    }
}
"#;
        let updated = update_version_in_kts(content, 86, "3.2.7.12");
        assert!(updated.contains("        versionCode = 86\n"));
        assert!(updated.contains(r#"        versionName = "3.2.7.12""#));
        assert!(updated.contains("minSdk = 24"));
    }

    #[test]
    fn test_update_version_in_kts_without_declarations() {
        let content = "android {\n    namespace = \"com.example\"\n}\n";
        assert_eq!(update_version_in_kts(content, 5, "1.0.0"), content);
    }

    #[test]
    fn test_update_version_in_kts_ignores_other_keys() {
        let content = "        versionCodeOverride = 3\n        versionNameSuffix = \"-BETA\"\n";
        assert_eq!(update_version_in_kts(content, 5, "1.0.0"), content);
    }

    #[test]
    fn test_update_version_in_groovy_space() {
        let content = r#"
android {
    defaultConfig {
        applicationId "com.example.app"
        versionCode 3
        versionName "1.0.2"
    }
}
"#;
        let updated = update_version_in_groovy(content, 4, "1.0.3");
        assert!(updated.contains("versionCode 4\n"));
        assert!(updated.contains("versionName '1.0.3'"));
    }

    #[test]
    fn test_update_version_in_groovy_assign() {
        let content = "    versionCode = 7\n    versionName = '2.0.0'\n";
        let updated = update_version_in_groovy(content, 8, "2.0.1.4");
        assert_eq!(updated, "    versionCode = 8\n    versionName = '2.0.1.4'\n");
    }
}
