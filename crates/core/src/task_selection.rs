use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::Config;

/// Kinds of requested work that change how a build is versioned.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskKind {
    /// Release packaging: bumps patch and store, resets build, enables signing
    Release,
    /// Test run: bumps the build counter
    Test,
}

/// Compiled task-name patterns. Both must match the whole task segment.
#[derive(Debug, Clone)]
pub struct TaskPatterns {
    release: Regex,
    test: Regex,
}

impl TaskPatterns {
    /// # Errors
    /// Returns error if either pattern is not a valid regular expression.
    pub fn new(release: &str, test: &str) -> Result<Self> {
        Ok(Self {
            release: anchored(release).context("Invalid release task pattern")?,
            test: anchored(test).context("Invalid test task pattern")?,
        })
    }

    /// # Errors
    /// Returns error if a configured pattern does not compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.release_pattern, &config.test_pattern)
    }

    #[must_use]
    pub fn kind_of(&self, task: &str) -> Vec<TaskKind> {
        let name = task_segment(task);
        let mut kinds = Vec::new();
        if self.release.is_match(name) {
            kinds.push(TaskKind::Release);
        }
        if self.test.is_match(name) {
            kinds.push(TaskKind::Test);
        }
        kinds
    }
}

fn anchored(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{pattern})$"))?)
}

/// Last `:`-separated segment of a Gradle task path.
#[must_use]
pub fn task_segment(task: &str) -> &str {
    task.rsplit(':').next().unwrap_or(task)
}

/// Classification of every task requested for one build invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSelection {
    tasks: Vec<String>,
    release: bool,
    test: bool,
}

impl TaskSelection {
    #[must_use]
    pub fn classify<S: AsRef<str>>(tasks: &[S], patterns: &TaskPatterns) -> Self {
        let mut selection = Self {
            tasks: tasks.iter().map(|t| t.as_ref().to_string()).collect(),
            ..Default::default()
        };
        for task in tasks {
            for kind in patterns.kind_of(task.as_ref()) {
                match kind {
                    TaskKind::Release => selection.release = true,
                    TaskKind::Test => selection.test = true,
                }
            }
        }
        selection
    }

    #[must_use]
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    #[must_use]
    pub const fn is_release(&self) -> bool {
        self.release
    }

    #[must_use]
    pub const fn is_test(&self) -> bool {
        self.test
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<TaskKind> {
        let mut kinds = Vec::new();
        if self.release {
            kinds.push(TaskKind::Release);
        }
        if self.test {
            kinds.push(TaskKind::Test);
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn patterns() -> TaskPatterns {
        TaskPatterns::from_config(&Config::default()).unwrap()
    }

    #[rstest]
    #[case(":app:assembleRelease", "assembleRelease")]
    #[case("assembleDebug", "assembleDebug")]
    #[case("app:bundleRelease", "bundleRelease")]
    #[case("", "")]
    fn test_task_segment(#[case] task: &str, #[case] expected: &str) {
        assert_eq!(task_segment(task), expected);
    }

    #[rstest]
    #[case(&["assembleRelease"], true, false)]
    #[case(&[":app:bundleRelease"], true, false)]
    #[case(&["test"], false, false)]
    #[case(&["testDebugUnitTest"], false, true)]
    #[case(&[":app:connectedAndroidTest"], false, true)]
    #[case(&["assembleDebug"], false, false)]
    #[case(&["assembleRelease", "testReleaseUnitTest"], true, true)]
    #[case(&["Release:assembleDebug"], false, false)]
    #[case(&["ReleaseNotes"], false, false)]
    fn test_classify(#[case] tasks: &[&str], #[case] release: bool, #[case] test: bool) {
        let selection = TaskSelection::classify(tasks, &patterns());
        assert_eq!(selection.is_release(), release);
        assert_eq!(selection.is_test(), test);
    }

    #[test]
    fn test_classify_empty() {
        let tasks: [&str; 0] = [];
        let selection = TaskSelection::classify(&tasks, &patterns());
        assert!(!selection.is_release());
        assert!(!selection.is_test());
        assert!(selection.kinds().is_empty());
        assert!(selection.tasks().is_empty());
    }

    #[test]
    fn test_kinds_order() {
        let selection =
            TaskSelection::classify(&["testDebugUnitTest", "assembleRelease"], &patterns());
        assert_eq!(selection.kinds(), vec![TaskKind::Release, TaskKind::Test]);
    }

    #[test]
    fn test_custom_pattern_is_anchored() {
        let patterns = TaskPatterns::new("publish", ".*Check").unwrap();
        assert_eq!(patterns.kind_of("publish"), vec![TaskKind::Release]);
        assert!(patterns.kind_of("publishAll").is_empty());
        assert_eq!(patterns.kind_of("lintCheck"), vec![TaskKind::Test]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TaskPatterns::new("(", ".*Test$").unwrap_err();
        assert!(err.to_string().contains("release task pattern"));
    }
}
