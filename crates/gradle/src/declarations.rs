use regex::Regex;
use std::sync::LazyLock;

static KTS_APPLICATION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*applicationId\s*=\s*"([^"]+)""#).expect("hardcoded regex must compile")
});

static GROOVY_APPLICATION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*applicationId\s*(?:=\s*)?['"]([^'"]+)['"]"#)
        .expect("hardcoded regex must compile")
});

static KTS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*applicationIdSuffix\s*=\s*"([^"]*)""#)
        .expect("hardcoded regex must compile")
});

static GROOVY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*applicationIdSuffix\s*(?:=\s*)?['"]([^'"]*)['"]"#)
        .expect("hardcoded regex must compile")
});

static BUILD_TYPES_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*buildTypes\s*\{").expect("hardcoded regex must compile")
});

/// Syntax flavour of a Gradle build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSyntax {
    Kotlin,
    Groovy,
}

impl ScriptSyntax {
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".kts") {
            Self::Kotlin
        } else {
            Self::Groovy
        }
    }
}

/// First `applicationId` assignment in the script.
#[must_use]
pub fn find_application_id(content: &str, syntax: ScriptSyntax) -> Option<String> {
    let pattern = match syntax {
        ScriptSyntax::Kotlin => &KTS_APPLICATION_ID,
        ScriptSyntax::Groovy => &GROOVY_APPLICATION_ID,
    };
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `applicationIdSuffix` declared inside the named build-type block.
///
/// The block is looked up inside `buildTypes { ... }` when present, so same-named blocks
/// elsewhere (for example under `signingConfigs`) are not picked up.
#[must_use]
pub fn find_application_id_suffix(
    content: &str,
    build_type: &str,
    syntax: ScriptSyntax,
) -> Option<String> {
    let scope = BUILD_TYPES_BLOCK
        .find(content)
        .and_then(|m| block_body(content, m.end() - 1))
        .unwrap_or(content);

    let name = regex::escape(build_type);
    let header = Regex::new(&format!(
        r#"(?m)^\s*(?:{name}|getByName\(\s*['"]{name}['"]\s*\))\s*\{{"#
    ))
    .ok()?;
    let open = header.find(scope)?.end() - 1;
    let body = block_body(scope, open)?;

    let pattern = match syntax {
        ScriptSyntax::Kotlin => &KTS_SUFFIX,
        ScriptSyntax::Groovy => &GROOVY_SUFFIX,
    };
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text between the `{` at `open` and its matching `}`.
fn block_body(content: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    for (i, c) in content[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[open + 1..open + i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const KTS: &str = r#"
android {
    namespace = "com.vrem.wifianalyzer"

    defaultConfig {
        applicationId = "com.vrem.wifianalyzer"
        versionCode = 1
        versionName = "1.0"
    }

    signingConfigs {
        debug {
            applicationIdSuffix = ".WRONG"
        }
    }

    buildTypes {
        release {
            isMinifyEnabled = true
        }
        debug {
            applicationIdSuffix = ".BETA"
            versionNameSuffix = "-BETA"
            isDebuggable = true
        }
    }
}
"#;

    const GROOVY: &str = r#"
android {
    defaultConfig {
        applicationId 'com.example.groovy'
    }
    buildTypes {
        getByName('debug') {
            applicationIdSuffix '.debug'
        }
    }
}
"#;

    #[test]
    fn test_syntax_from_file_name() {
        assert_eq!(
            ScriptSyntax::from_file_name("build.gradle.kts"),
            ScriptSyntax::Kotlin
        );
        assert_eq!(
            ScriptSyntax::from_file_name("build.gradle"),
            ScriptSyntax::Groovy
        );
    }

    #[test]
    fn test_find_application_id_kts() {
        assert_eq!(
            find_application_id(KTS, ScriptSyntax::Kotlin).as_deref(),
            Some("com.vrem.wifianalyzer")
        );
    }

    #[test]
    fn test_find_application_id_groovy() {
        assert_eq!(
            find_application_id(GROOVY, ScriptSyntax::Groovy).as_deref(),
            Some("com.example.groovy")
        );
    }

    #[test]
    fn test_find_application_id_absent() {
        assert_eq!(find_application_id("android {}", ScriptSyntax::Kotlin), None);
    }

    #[test]
    fn test_find_suffix_inside_build_types() {
        assert_eq!(
            find_application_id_suffix(KTS, "debug", ScriptSyntax::Kotlin).as_deref(),
            Some(".BETA")
        );
    }

    #[test]
    fn test_find_suffix_get_by_name_groovy() {
        assert_eq!(
            find_application_id_suffix(GROOVY, "debug", ScriptSyntax::Groovy).as_deref(),
            Some(".debug")
        );
    }

    #[test]
    fn test_find_suffix_build_type_without_suffix() {
        assert_eq!(
            find_application_id_suffix(KTS, "release", ScriptSyntax::Kotlin),
            None
        );
    }

    #[test]
    fn test_find_suffix_unknown_build_type() {
        assert_eq!(
            find_application_id_suffix(KTS, "staging", ScriptSyntax::Kotlin),
            None
        );
    }

    #[test]
    fn test_find_suffix_without_build_types_block() {
        let content = "debug {\n    applicationIdSuffix = \".dev\"\n}\n";
        assert_eq!(
            find_application_id_suffix(content, "debug", ScriptSyntax::Kotlin).as_deref(),
            Some(".dev")
        );
    }

    #[test]
    fn test_block_body_unbalanced() {
        assert_eq!(block_body("x { { }", 2), None);
    }
}
