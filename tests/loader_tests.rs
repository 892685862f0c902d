use scripthost::engine::ScriptEngine;
use scripthost::errors::ScriptHostError;
use scripthost::loader::ScriptLoader;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_script(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn new_loader() -> ScriptLoader {
    ScriptLoader::new(ScriptEngine::new())
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[test]
    fn test_runs_all_js_files() {
        let dir = tempdir().unwrap();
        write_script(
            dir.path(),
            "a.js",
            "globalThis.total = (globalThis.total || 0) + 1;",
        );
        write_script(
            dir.path(),
            "b.js",
            "globalThis.total = (globalThis.total || 0) + 1;",
        );

        let mut loader = new_loader();
        let report = loader.load_dir(dir.path()).unwrap();

        assert_eq!(report.executed, 2);
        assert_eq!(report.skipped, 0);
        let total = loader
            .engine_mut()
            .eval("check.js", "globalThis.total")
            .unwrap();
        assert_eq!(total, "2");
    }

    #[test]
    fn test_skips_non_js_files() {
        let dir = tempdir().unwrap();
        write_script(dir.path(), "notes.txt", "this is ( not javascript");
        write_script(dir.path(), "run.js", "globalThis.ran = true;");

        let mut loader = new_loader();
        let report = loader.load_dir(dir.path()).unwrap();

        assert_eq!(report.executed, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();

        let mut loader = new_loader();
        let report = loader.load_dir(dir.path()).unwrap();

        assert_eq!(report.executed, 0);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let mut loader = new_loader();
        let error = loader.load_dir(&missing).unwrap_err();

        assert!(matches!(error, ScriptHostError::FileOperation(_)));
    }

    #[test]
    fn test_skips_subdirectories() {
        let dir = tempdir().unwrap();
        // a directory named like a script must not be read or recursed into
        fs::create_dir(dir.path().join("inner.js")).unwrap();
        write_script(
            &dir.path().join("inner.js"),
            "nested.js",
            "globalThis.nested = true;",
        );

        let mut loader = new_loader();
        let report = loader.load_dir(dir.path()).unwrap();

        assert_eq!(report.executed, 0);
        assert_eq!(report.skipped, 1);
        let nested = loader
            .engine_mut()
            .eval("check.js", "globalThis.nested")
            .unwrap();
        assert_eq!(nested, "undefined");
    }
}

#[cfg(test)]
mod dedup_tests {
    use super::*;

    #[test]
    fn test_second_scan_skips_processed() {
        let dir = tempdir().unwrap();
        write_script(
            dir.path(),
            "count.js",
            "globalThis.count = (globalThis.count || 0) + 1;",
        );

        let mut loader = new_loader();
        let first = loader.load_dir(dir.path()).unwrap();
        let second = loader.load_dir(dir.path()).unwrap();

        assert_eq!(first.executed, 1);
        assert_eq!(second.executed, 0);
        assert_eq!(second.skipped, 1);
        let count = loader
            .engine_mut()
            .eval("check.js", "globalThis.count")
            .unwrap();
        assert_eq!(count, "1");
    }

    #[test]
    fn test_new_file_between_scans() {
        let dir = tempdir().unwrap();
        write_script(dir.path(), "first.js", "globalThis.first = true;");

        let mut loader = new_loader();
        loader.load_dir(dir.path()).unwrap();

        write_script(dir.path(), "second.js", "globalThis.second = true;");
        let report = loader.load_dir(dir.path()).unwrap();

        assert_eq!(report.executed, 1);
        assert_eq!(report.skipped, 1);
        let second = loader
            .engine_mut()
            .eval("check.js", "globalThis.second")
            .unwrap();
        assert_eq!(second, "true");
    }

    #[test]
    fn test_non_js_entries_are_remembered() {
        let dir = tempdir().unwrap();
        write_script(dir.path(), "notes.txt", "plain text");

        let mut loader = new_loader();
        loader.load_dir(dir.path()).unwrap();
        loader.load_dir(dir.path()).unwrap();

        assert!(loader.processed().contains(&dir.path().join("notes.txt")));
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_syntax_error_halts_batch() {
        let dir = tempdir().unwrap();
        write_script(dir.path(), "a_broken.js", "function (");
        write_script(dir.path(), "z_after.js", "globalThis.reached = true;");

        let mut loader = new_loader();
        let error = loader.load_dir(dir.path()).unwrap_err();

        assert!(matches!(error, ScriptHostError::ScriptCompile(_)));
        assert!(error.message().contains("a_broken.js"));
        // the script sorting after the broken one must not have run
        assert!(!loader.processed().contains(&dir.path().join("z_after.js")));
        let reached = loader
            .engine_mut()
            .eval("check.js", "globalThis.reached")
            .unwrap();
        assert_eq!(reached, "undefined");
    }

    #[test]
    fn test_runtime_error_halts_batch() {
        let dir = tempdir().unwrap();
        write_script(dir.path(), "a_throws.js", "throw new Error('stop');");
        write_script(dir.path(), "z_after.js", "globalThis.reached = true;");

        let mut loader = new_loader();
        let error = loader.load_dir(dir.path()).unwrap_err();

        assert!(matches!(error, ScriptHostError::ScriptExecute(_)));
        assert!(error.message().contains("stop"));
        let reached = loader
            .engine_mut()
            .eval("check.js", "globalThis.reached")
            .unwrap();
        assert_eq!(reached, "undefined");
    }

    #[test]
    fn test_failed_batch_can_continue_with_new_files() {
        let dir = tempdir().unwrap();
        write_script(dir.path(), "broken.js", "function (");

        let mut loader = new_loader();
        loader.load_dir(dir.path()).unwrap_err();

        // the broken file was consumed; a rescan picks up only new scripts
        write_script(dir.path(), "fine.js", "globalThis.fine = true;");
        let report = loader.load_dir(dir.path()).unwrap();

        assert_eq!(report.executed, 1);
        assert_eq!(report.skipped, 1);
    }
}
