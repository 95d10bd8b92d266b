//! The fixed set of dependencies and where their installers live.

use std::fmt;

/// A dependency the bootstrap checks for and can fetch an installer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dependency {
    /// SuperCollider, the audio engine Tidal drives.
    SuperCollider,
    /// Atom, the editor with the Tidal plugin.
    Atom,
    /// The interactive Haskell interpreter.
    Ghci,
}

impl Dependency {
    /// Every known dependency, in check order.
    pub const ALL: [Dependency; 3] = [Self::SuperCollider, Self::Atom, Self::Ghci];

    /// Name used for display and for probing the filesystem.
    pub fn name(self) -> &'static str {
        match self {
            Self::SuperCollider => "SuperCollider.app",
            Self::Atom => "Atom.app",
            Self::Ghci => "ghci",
        }
    }

    /// Built-in installer URL.
    pub fn source_url(self) -> &'static str {
        match self {
            Self::SuperCollider => {
                "https://github.com/supercollider/supercollider/releases/download/Version-3.13.0/SuperCollider-3.13.0-macOS-universal.dmg"
            }
            Self::Atom => "https://github.com/atom/atom/releases/download/v1.63.1/atom-mac.zip",
            Self::Ghci => {
                "https://downloads.haskell.org/~platform/8.6.5/Haskell%20Platform%208.6.5%20Core-x86_64.pkg"
            }
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered mapping from dependency to installer URL.
///
/// [`SourceTable::builtin`] is the table the binary uses. Other tables can be
/// built over a subset of [`Dependency`] values, which keeps the key set closed
/// while letting callers point downloads somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    entries: Vec<(Dependency, String)>,
}

impl SourceTable {
    /// The built-in table covering every [`Dependency`].
    pub fn builtin() -> Self {
        Self::from_entries(
            Dependency::ALL
                .iter()
                .map(|dep| (*dep, dep.source_url().to_string())),
        )
    }

    /// Build a table from explicit entries.
    ///
    /// A dependency listed twice keeps its first position and its last URL.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Dependency, S)>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (dep, url) in entries {
            let url = url.into();
            match table.entries.iter_mut().find(|(d, _)| *d == dep) {
                Some(existing) => existing.1 = url,
                None => table.entries.push((dep, url)),
            }
        }
        table
    }

    /// URL registered for a dependency.
    pub fn url(&self, dep: Dependency) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == dep)
            .map(|(_, url)| url.as_str())
    }

    /// Dependencies in table order.
    pub fn dependencies(&self) -> impl Iterator<Item = Dependency> + '_ {
        self.entries.iter().map(|(dep, _)| *dep)
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[(Dependency, String)] {
        &self.entries
    }

    /// Number of dependencies in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SourceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_probe_targets() {
        assert_eq!(Dependency::SuperCollider.name(), "SuperCollider.app");
        assert_eq!(Dependency::Atom.name(), "Atom.app");
        assert_eq!(Dependency::Ghci.name(), "ghci");
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Dependency::Ghci.to_string(), "ghci");
    }

    #[test]
    fn builtin_table_covers_every_dependency_in_order() {
        let table = SourceTable::builtin();
        let deps: Vec<_> = table.dependencies().collect();
        assert_eq!(deps, Dependency::ALL.to_vec());
        for dep in Dependency::ALL {
            assert_eq!(table.url(dep), Some(dep.source_url()));
        }
    }

    #[test]
    fn builtin_urls_are_https() {
        for dep in Dependency::ALL {
            assert!(dep.source_url().starts_with("https://"), "{}", dep);
        }
    }

    #[test]
    fn subset_table_has_no_url_for_absent_dependency() {
        let table = SourceTable::from_entries([(Dependency::Atom, "http://localhost/atom.zip")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.url(Dependency::Atom), Some("http://localhost/atom.zip"));
        assert!(table.url(Dependency::Ghci).is_none());
    }

    #[test]
    fn duplicate_entry_keeps_position_and_last_url() {
        let table = SourceTable::from_entries([
            (Dependency::Ghci, "http://a/1.pkg"),
            (Dependency::Atom, "http://a/2.zip"),
            (Dependency::Ghci, "http://a/3.pkg"),
        ]);
        let deps: Vec<_> = table.dependencies().collect();
        assert_eq!(deps, vec![Dependency::Ghci, Dependency::Atom]);
        assert_eq!(table.url(Dependency::Ghci), Some("http://a/3.pkg"));
    }

    #[test]
    fn empty_table() {
        let table = SourceTable::from_entries(Vec::<(Dependency, String)>::new());
        assert!(table.is_empty());
    }
}
