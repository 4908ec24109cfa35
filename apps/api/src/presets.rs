//! Preset Registry — the built-in job profiles a résumé can be scanned against.
//!
//! Loaded once at startup and held read-only in `AppState`. An unknown
//! key is a reported condition, never a silent empty-profile fallback.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;

/// A named job-description preset with its canonical keyword text.
#[derive(Debug, Clone, Serialize)]
pub struct JobProfile {
    pub name: String,
    pub keywords: String,
}

/// Immutable mapping of profile key → profile.
#[derive(Debug)]
pub struct PresetRegistry {
    profiles: BTreeMap<String, JobProfile>,
}

impl PresetRegistry {
    /// The profiles bundled with the service.
    pub fn builtin() -> Self {
        let entries = [
            (
                "Data Scientist",
                "Python, Pandas, NumPy, Machine Learning, Scikit-learn, SQL, Deep Learning, Data Visualization, Model Deployment",
            ),
            (
                "Web Developer",
                "HTML, CSS, JavaScript, React, Node.js, REST APIs, Git, Responsive Web Design",
            ),
            (
                "AI Engineer",
                "TensorFlow, PyTorch, NLP, Machine Learning, Python, Deep Learning frameworks",
            ),
            (
                "Software Developer",
                "Java, C++, OOP, Data Structures, Algorithms, Databases, Problem Solving",
            ),
        ];

        let profiles = entries
            .into_iter()
            .map(|(name, keywords)| {
                (
                    name.to_string(),
                    JobProfile {
                        name: name.to_string(),
                        keywords: keywords.to_string(),
                    },
                )
            })
            .collect();

        Self { profiles }
    }

    /// Looks up a profile by key.
    pub fn resolve(&self, key: &str) -> Result<&JobProfile, AppError> {
        self.profiles
            .get(key)
            .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))
    }

    /// Profile keys in ascending order, for the UI's selection list.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_four_profiles() {
        let registry = PresetRegistry::builtin();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.names(),
            vec![
                "AI Engineer",
                "Data Scientist",
                "Software Developer",
                "Web Developer"
            ]
        );
    }

    #[test]
    fn test_resolve_known_profile() {
        let registry = PresetRegistry::builtin();
        let profile = registry.resolve("Data Scientist").unwrap();
        assert_eq!(profile.name, "Data Scientist");
        assert!(profile.keywords.contains("Scikit-learn"));
        assert!(profile.keywords.contains("Model Deployment"));
    }

    #[test]
    fn test_unknown_profile_is_reported_not_substituted() {
        let registry = PresetRegistry::builtin();
        let err = registry.resolve("Data Engineer").unwrap_err();
        assert!(matches!(err, AppError::ProfileNotFound(key) if key == "Data Engineer"));
    }

    #[test]
    fn test_lookup_is_exact_not_case_insensitive() {
        let registry = PresetRegistry::builtin();
        assert!(registry.resolve("data scientist").is_err());
    }
}
