//! # Stockroom CLI Library
//!
//! The interactive menu on top of `stockroom-core`.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap flags
//! ├── config.rs       ◄─── AppConfig (file, env, defaults)
//! ├── logging.rs      ◄─── tracing subscriber + rolling log file
//! ├── console.rs      ◄─── prompts, lettered options, 'q' to go back
//! ├── menu.rs         ◄─── main menu loop
//! ├── screens/        ◄─── add, display, search, analysis
//! └── error.rs        ◄─── AppError
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod menu;
pub mod screens;

use std::io;

use tracing::info;

use stockroom_core::Inventory;

use cli::Args;
use config::AppConfig;
use console::Console;
use error::AppResult;
use menu::App;

/// Runs the application against the terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ─────────────────────────────────────────────►  │
/// │     • defaults ◄ stockroom.toml ◄ STOCKROOM_* env ◄ flags               │
/// │                                                                         │
/// │  2. Initialize Logging ─────────────────────────────────────────────►  │
/// │     • EnvFilter from the resolved level (flag, env, file, default)      │
/// │     • Daily-rolling file pruned to max_files, non-blocking writer       │
/// │                                                                         │
/// │  3. Create Inventory ───────────────────────────────────────────────►  │
/// │     • Empty, events to tracing, configured low-stock threshold          │
/// │                                                                         │
/// │  4. Run Menu on stdin/stdout ───────────────────────────────────────►  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: &Args) -> AppResult<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    // Held until the menu exits so buffered log lines get flushed
    let _guard = logging::init_logging(&config.logging)?;
    info!(
        level = %config.logging.level,
        low_stock_threshold = config.inventory.low_stock_threshold,
        "Starting Stockroom"
    );

    let inventory =
        Inventory::new().with_low_stock_threshold(config.inventory.low_stock_threshold);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(Console::new(stdin.lock(), stdout.lock()), inventory);
    app.run()
}
