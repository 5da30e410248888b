use std::time::Duration;

/// Decides whether existing backup files should be pruned.
///
/// Consulted by the file sink on every write, independently of rotation;
/// the decision applies to files other than the currently open one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanPolicy {
    Never,
    MaxAge(Duration),
}

impl CleanPolicy {
    pub fn max_age(age: Duration) -> Self {
        CleanPolicy::MaxAge(age)
    }

    /// True when a file whose last modification is `age` ago should be
    /// deleted.
    pub fn should_clean(&self, age: Duration) -> bool {
        match self {
            CleanPolicy::Never => false,
            CleanPolicy::MaxAge(max) => age >= *max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_policy_retains_everything() {
        assert!(!CleanPolicy::Never.should_clean(Duration::from_secs(u64::MAX)));
    }

    #[test]
    fn max_age_cleans_files_at_least_that_old() {
        let policy = CleanPolicy::max_age(Duration::from_secs(60));
        assert!(!policy.should_clean(Duration::from_secs(59)));
        assert!(policy.should_clean(Duration::from_secs(60)));
        assert!(policy.should_clean(Duration::from_secs(3600)));
    }
}
