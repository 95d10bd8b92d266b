//! End-to-end bootstrap runs against a local HTTP server.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use httpmock::prelude::*;
use tempfile::TempDir;
use tidal_bootstrap::download::Downloader;
use tidal_bootstrap::requirements::{Dependency, DependencyStatus, Location, Probe, SourceTable};
use tidal_bootstrap::runner::{Bootstrap, RunOutcome};
use tidal_bootstrap::ui::MockUI;

/// Probe that reports a fixed set of dependencies as installed.
struct FixedProbe {
    installed: Vec<Dependency>,
}

impl Probe for FixedProbe {
    fn status(&self, dependency: Dependency) -> DependencyStatus {
        if self.installed.contains(&dependency) {
            DependencyStatus::Installed {
                location: Location::AppBundle(PathBuf::from("/Applications").join(dependency.name())),
            }
        } else {
            DependencyStatus::Missing
        }
    }

    fn find_tool(&self, tool: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/usr/local/bin").join(tool))
    }
}

fn table(server: &MockServer) -> SourceTable {
    SourceTable::from_entries([
        (Dependency::SuperCollider, server.url("/sc/SuperCollider.dmg")),
        (Dependency::Atom, server.url("/atom/atom-mac.zip")),
        (Dependency::Ghci, server.url("/haskell/platform.pkg")),
    ])
}

fn bootstrap(server: &MockServer, dir: &Path, installed: &[Dependency]) -> Bootstrap<FixedProbe> {
    let downloader = Downloader::with_timeout(dir, table(server), Duration::from_secs(10)).unwrap();
    Bootstrap::new(
        FixedProbe {
            installed: installed.to_vec(),
        },
        downloader,
    )
    .with_required_tool(Some("brew".to_string()))
}

#[test]
fn missing_dependencies_are_each_downloaded_once() {
    let server = MockServer::start();
    let sc = server.mock(|when, then| {
        when.method(GET).path("/sc/SuperCollider.dmg");
        then.status(200).body("dmg-bytes");
    });
    let atom = server.mock(|when, then| {
        when.method(GET).path("/atom/atom-mac.zip");
        then.status(200).body("zip-bytes");
    });
    let haskell = server.mock(|when, then| {
        when.method(GET).path("/haskell/platform.pkg");
        then.status(200).body("pkg-bytes");
    });

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("tidal-deps");
    let mut ui = MockUI::new();

    let outcome = bootstrap(&server, &dir, &[Dependency::Ghci])
        .run(&mut ui, false)
        .unwrap();

    sc.assert_calls(1);
    atom.assert_calls(1);
    haskell.assert_calls(0);
    assert_eq!(fs::read_to_string(dir.join("SuperCollider.dmg")).unwrap(), "dmg-bytes");
    assert_eq!(fs::read_to_string(dir.join("atom-mac.zip")).unwrap(), "zip-bytes");
    assert!(!dir.join("platform.pkg").exists());

    match &outcome {
        RunOutcome::Downloaded(report) => {
            assert!(report.is_success());
            let names: Vec<Dependency> = report.downloaded.iter().map(|(d, _)| *d).collect();
            assert_eq!(names, [Dependency::SuperCollider, Dependency::Atom]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(outcome.exit_code(), 0);
    assert!(ui.has_message("\t* SuperCollider.app"));
    assert!(ui.has_message("\t* Atom.app"));
    assert!(!ui.has_message("\t* ghci"));
}

#[test]
fn nothing_is_fetched_when_everything_is_installed() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("unexpected");
    });

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("tidal-deps");
    let mut ui = MockUI::new();

    let outcome = bootstrap(&server, &dir, &Dependency::ALL)
        .run(&mut ui, false)
        .unwrap();

    assert_eq!(outcome, RunOutcome::AllInstalled);
    any.assert_calls(0);
    assert!(!dir.exists());
    assert!(ui.confirms_shown().is_empty());
    assert_eq!(ui.dependencies().len(), 3);
    assert!(ui.dependencies().iter().all(|(_, installed)| *installed));
}

#[test]
fn declining_fetches_nothing() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("unexpected");
    });

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("tidal-deps");
    let mut ui = MockUI::new();
    ui.queue_confirm_responses(vec![false]);

    let outcome = bootstrap(&server, &dir, &[]).run(&mut ui, false).unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Declined {
            missing: Dependency::ALL.to_vec()
        }
    );
    any.assert_calls(0);
    assert!(!dir.exists());
    assert!(ui.has_message("Okay, quitting"));
}

#[test]
fn one_failed_download_does_not_block_the_others() {
    let server = MockServer::start();
    let sc = server.mock(|when, then| {
        when.method(GET).path("/sc/SuperCollider.dmg");
        then.status(500);
    });
    let atom = server.mock(|when, then| {
        when.method(GET).path("/atom/atom-mac.zip");
        then.status(200).body("zip-bytes");
    });
    let haskell = server.mock(|when, then| {
        when.method(GET).path("/haskell/platform.pkg");
        then.status(200).body("pkg-bytes");
    });

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("tidal-deps");
    let mut ui = MockUI::new();

    let outcome = bootstrap(&server, &dir, &[]).run(&mut ui, true).unwrap();

    sc.assert_calls(1);
    atom.assert_calls(1);
    haskell.assert_calls(1);
    assert!(ui.confirms_shown().is_empty());

    let RunOutcome::Downloaded(report) = &outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };
    assert_eq!(report.failed_names(), ["SuperCollider.app".to_string()]);
    assert_eq!(report.downloaded.len(), 2);
    assert_eq!(outcome.exit_code(), 1);
    assert!(!dir.join("SuperCollider.dmg").exists());
    assert!(!dir.join("SuperCollider.dmg.part").exists());
    assert!(dir.join("atom-mac.zip").is_file());
    assert!(ui.has_error("SuperCollider.app"));
    assert!(ui.has_warning("SuperCollider.app"));
}

#[test]
fn single_worker_still_drains_the_queue() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("bytes");
    });

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("tidal-deps");
    let mut ui = MockUI::new();

    let bootstrap = bootstrap(&server, &dir, &[]).with_workers(Some(1));
    assert_eq!(bootstrap.pool_size(), 1);
    let outcome = bootstrap.run(&mut ui, true).unwrap();

    any.assert_calls(3);
    assert_eq!(outcome.exit_code(), 0);
}
