#![allow(dead_code)]

//! Shared fixtures for csv-reports integration tests

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PERF_CSV: &str = "name,position,performance\n\
    John,Backend Developer,4.8\n\
    Jane,Backend Developer,4.6\n\
    Bob,Frontend Developer,4.7\n\
    Alice,Frontend Developer,4.9\n\
    Mike,QA Engineer,4.5\n";

/// Test environment that owns a temporary directory for input files
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        TestEnvironment {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` inside the environment
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

pub fn csv_reports_cmd() -> Command {
    Command::cargo_bin("csv-reports").unwrap()
}
