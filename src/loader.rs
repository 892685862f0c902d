//! Script batch loader
//!
//! Scans a directory for `.js` files and feeds every new one to the embedded
//! engine in path order. The first read, compile, or run failure aborts the
//! rest of the batch.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, trace};

use crate::engine::ScriptEngine;
use crate::errors::{Result, ScriptHostError};
use crate::utils;

/// Outcome of one directory scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Scripts compiled and run during this scan.
    pub executed: usize,
    /// Entries passed over: already processed, not a `.js` file, or a
    /// directory.
    pub skipped: usize,
}

/// Walks a directory and runs every new `.js` file on the engine.
pub struct ScriptLoader {
    engine: ScriptEngine,
    processed: HashSet<PathBuf>,
}

impl ScriptLoader {
    pub fn new(engine: ScriptEngine) -> Self {
        ScriptLoader {
            engine,
            processed: HashSet::new(),
        }
    }

    /// The engine all loaded scripts run on.
    pub fn engine_mut(&mut self) -> &mut ScriptEngine {
        &mut self.engine
    }

    /// Paths seen by this loader, including entries that were filtered out.
    pub fn processed(&self) -> &HashSet<PathBuf> {
        &self.processed
    }

    /// Scan `dir` and execute every `.js` file not seen before.
    ///
    /// Entries are visited in path order. A path is remembered once it has
    /// been looked at, so repeat scans of the same directory only pick up
    /// files added since.
    pub fn load_dir(&mut self, dir: &Path) -> Result<LoadReport> {
        let entries = read_sorted_entries(dir)?;

        let mut report = LoadReport::default();
        for path in entries {
            if !self.processed.insert(path.clone()) {
                report.skipped += 1;
                continue;
            }
            if path.is_dir() || !utils::is_script_file(&path) {
                report.skipped += 1;
                continue;
            }

            let name = utils::display_name(&path);
            trace!(script = %name, "loading script");

            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    error!("error reading script file {}: {}", path.display(), e);
                    return Err(ScriptHostError::file_operation(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )));
                }
            };

            let compiled = match self.engine.compile(&name, &source) {
                Ok(compiled) => compiled,
                Err(e) => {
                    error!("error compiling script file {}: {}", name, e.message());
                    return Err(e);
                }
            };

            let value = match self.engine.run(&compiled) {
                Ok(value) => value,
                Err(e) => {
                    error!("error running script {}: {}", name, e.message());
                    return Err(e);
                }
            };

            trace!(script = %name, result = %value, "script completed");
            report.executed += 1;
        }

        Ok(report)
    }
}

/// Directory entries sorted by path, so batches run in a stable order.
fn read_sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let iter = match fs::read_dir(dir) {
        Ok(iter) => iter,
        Err(e) => {
            error!("cannot scan script directory {}: {}", dir.display(), e);
            return Err(ScriptHostError::file_operation(format!(
                "{}: {}",
                dir.display(),
                e
            )));
        }
    };

    let mut entries = Vec::new();
    for entry in iter {
        let entry = entry
            .map_err(|e| ScriptHostError::file_operation(format!("{}: {}", dir.display(), e)))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
