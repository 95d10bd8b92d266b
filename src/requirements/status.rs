//! Dependency status types produced by probing.
//!
//! Each check produces a [`DependencyStatus`] describing whether a
//! dependency was found and where.

use std::path::PathBuf;

use super::Dependency;

/// Where an installed dependency was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// An application bundle directory.
    AppBundle(PathBuf),
    /// An executable resolved from a path or PATH.
    Executable(PathBuf),
}

impl Location {
    /// The path that satisfied the probe.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::AppBundle(p) | Self::Executable(p) => p,
        }
    }
}

/// The result of probing a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Present on the host.
    Installed {
        /// What satisfied the probe.
        location: Location,
    },
    /// Not found anywhere; a download candidate.
    Missing,
}

impl DependencyStatus {
    /// Whether the dependency was found.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

/// The status of one dependency after a check pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The dependency that was checked.
    pub dependency: Dependency,
    /// What the probe found.
    pub status: DependencyStatus,
}

/// Results of a full check pass, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// One entry per checked dependency.
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Dependencies that were not found, in check order.
    pub fn missing(&self) -> Vec<Dependency> {
        self.results
            .iter()
            .filter(|r| !r.status.is_installed())
            .map(|r| r.dependency)
            .collect()
    }

    /// Whether every checked dependency is present.
    pub fn all_installed(&self) -> bool {
        self.results.iter().all(|r| r.status.is_installed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dependency: Dependency, installed: bool) -> CheckResult {
        let status = if installed {
            DependencyStatus::Installed {
                location: Location::Executable(PathBuf::from("/usr/bin/x")),
            }
        } else {
            DependencyStatus::Missing
        };
        CheckResult { dependency, status }
    }

    #[test]
    fn installed_is_installed() {
        let status = DependencyStatus::Installed {
            location: Location::AppBundle(PathBuf::from("/Applications/Atom.app")),
        };
        assert!(status.is_installed());
        assert!(!DependencyStatus::Missing.is_installed());
    }

    #[test]
    fn location_path_accessor() {
        let loc = Location::AppBundle(PathBuf::from("/Applications/Atom.app"));
        assert_eq!(loc.path(), &PathBuf::from("/Applications/Atom.app"));
    }

    #[test]
    fn report_missing_preserves_check_order() {
        let report = CheckReport {
            results: vec![
                result(Dependency::SuperCollider, false),
                result(Dependency::Atom, true),
                result(Dependency::Ghci, false),
            ],
        };
        assert_eq!(
            report.missing(),
            vec![Dependency::SuperCollider, Dependency::Ghci]
        );
        assert!(!report.all_installed());
    }

    #[test]
    fn empty_report_is_all_installed() {
        assert!(CheckReport::default().all_installed());
        assert!(CheckReport::default().missing().is_empty());
    }
}
