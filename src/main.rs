use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::process;
use tracing::info;

use scripthost::cli::Cli;
use scripthost::config;
use scripthost::engine::{self, ScriptEngine};
use scripthost::loader::ScriptLoader;
use scripthost::system;

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if cli.sample_config {
        print!("{}", config::Config::generate_sample_config());
        return;
    }

    config::init_config();
    let cfg = config::get_config();

    let _log_guard = system::logging::init_logging(cfg);
    system::panic_handler::install_panic_hook();

    // 初始化引擎平台
    engine::platform::init(cfg.engine.flags.as_deref());

    // One-shot evaluation mode
    if let Some(code) = cli.eval.as_deref() {
        let mut engine = ScriptEngine::new();
        match engine.eval("<eval>", code) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("{}", e.format_colored());
                process::exit(1);
            }
        }
        return;
    }

    let dir: PathBuf = cli
        .dir
        .unwrap_or_else(|| PathBuf::from(&cfg.scripts.dir));

    info!(
        "scripthost v{} scanning {}",
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );

    let mut loader = ScriptLoader::new(ScriptEngine::new());
    match loader.load_dir(&dir) {
        Ok(report) => {
            info!(
                "executed {} scripts, skipped {} entries",
                report.executed, report.skipped
            );
        }
        Err(e) => {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
    }
}
