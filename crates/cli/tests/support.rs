//! Shared fixtures for the console integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use bitacora_cli::{AppContext, Menu};
use bitacora_domain::{Config, DatabaseConfig, LoggingConfig, ReportConfig, SessionConfig};
use tempfile::TempDir;

/// Application wired against files inside a temporary directory
pub struct TestApp {
    pub ctx: AppContext,
    dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let config = Config {
            database: DatabaseConfig {
                path: dir.path().join("bitacora.db").display().to_string(),
                pool_size: 2,
            },
            session: SessionConfig { path: dir.path().join("session.json").display().to_string() },
            report: ReportConfig { output_dir: dir.path().join("reports").display().to_string() },
            logging: LoggingConfig::default(),
        };
        let ctx = AppContext::new(config).expect("open app context");
        Self { ctx, dir }
    }

    /// Feed `lines` to a menu resumed from the session file and return stdout
    pub fn run(&self, lines: &[&str]) -> String {
        let mut input = lines.join("\n");
        input.push('\n');

        let mut output = Vec::new();
        let mut menu =
            Menu::new(&self.ctx, self.ctx.restore_session(), Cursor::new(input), &mut output);
        menu.run().expect("menu run");
        drop(menu);

        String::from_utf8(output).expect("utf-8 output")
    }

    pub fn session_file(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    pub fn report_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("reports").join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Menu input that creates and logs in `ana@obra.co` with password `secreto1`
pub const SIGN_UP: [&str; 4] = ["4", "Ana", "ana@obra.co", "secreto1"];

/// Menu input recording one activity on `date`
pub fn record<'a>(date: &'a str, description: &'a str) -> [&'a str; 7] {
    ["1", date, "Juan Perez", description, "", "Carlos", "Sunny"]
}
