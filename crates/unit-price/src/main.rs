//! Unit price comparator CLI
//!
//! ## Usage
//!
//! ```bash
//! unit-price tui                                  # Interactive comparator
//! unit-price tui --log-file tui.log -vv            # Keep TUI logs in a file
//! unit-price eval 1 00 0 NEXT 4 NEXT 9 00 NEXT 3  # Replay keypad symbols
//! unit-price eval 5 NEXT 2 --json                 # View model as JSON
//! unit-price assets --root site/ --offline        # Exercise the asset cache
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use unit_price::{
    commands::{AssetsArgs, Cli, Commands, EvalArgs},
    config::Config,
    core::{AppState, FieldKind, Key, ViewModel},
    error::{Result, UnitPriceError},
    logging::{self, LogFormat, LogSink},
    offline::{
        AssetWorker, Cache, CacheStorage, Disconnected, DirectoryNetwork, Network, Request,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.build_config()?;

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    let sink = LogSink::select(
        matches!(cli.command, Commands::Tui),
        config.log_file.as_deref(),
    );
    logging::init(config.verbosity, config.color, format, &sink)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Tui => run_tui(),
        Commands::Eval(args) => run_eval(&args),
        Commands::Assets(args) => run_assets(&config, &args),
    }
}

#[cfg(feature = "tui")]
fn run_tui() -> Result<()> {
    unit_price::tui::run()?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_tui() -> Result<()> {
    Err(UnitPriceError::invalid_argument(
        "terminal UI not enabled. Rebuild with --features tui",
    ))
}

fn run_eval(args: &EvalArgs) -> Result<()> {
    let mut state = AppState::new();
    for symbol in &args.keys {
        let key = Key::from_symbol(symbol)
            .ok_or_else(|| UnitPriceError::invalid_argument(format!("unknown key: {symbol}")))?;
        state.press_key(key);
    }

    let view = state.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_view(&view));
    }
    Ok(())
}

/// One line per product, then the verdict
fn format_view(view: &ViewModel) -> String {
    let mut out = String::new();
    for slot in &view.slots {
        let text = |field: FieldKind| {
            view.fields
                .iter()
                .find(|f| f.id.slot == slot.slot && f.id.field == field)
                .map_or("0", |f| f.text.as_str())
        };
        let mark = if slot.winner { " ✓" } else { "" };
        out.push_str(&format!(
            "{}: {} / {} = {}{mark}\n",
            slot.slot.label(),
            text(FieldKind::Price),
            text(FieldKind::Amount),
            slot.unit_price,
        ));
    }
    out.push_str(&view.message);
    out.push('\n');
    out
}

fn run_assets(config: &Config, args: &AssetsArgs) -> Result<()> {
    let root = args
        .root
        .clone()
        .or_else(|| config.asset_root.clone())
        .ok_or_else(|| {
            UnitPriceError::invalid_argument("no asset directory: pass --root or set asset_root")
        })?;
    if !root.is_dir() {
        return Err(UnitPriceError::invalid_argument(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let origin = DirectoryNetwork::new(&root, config.cache.scope.clone());
    let worker = AssetWorker::register(config.cache.clone(), CacheStorage::new(), &origin);
    let cached = worker
        .storage()
        .get(&worker.config().name)
        .map_or(0, Cache::len);
    println!(
        "cache {}: {:?}, {cached} assets",
        worker.config().name,
        worker.state()
    );

    let network: &dyn Network = if args.offline { &Disconnected } else { &origin };
    let urls = if args.urls.is_empty() {
        &config.cache.assets
    } else {
        &args.urls
    };

    let mut first_failure = None;
    for url in urls {
        let request = if args.navigate {
            Request::navigate(url.as_str())
        } else {
            Request::get(url.as_str())
        };
        match worker.fetch(&request, network) {
            Ok(response) => println!(
                "{} {} {} bytes {url}",
                response.status,
                response.content_type,
                response.body.len()
            ),
            Err(e) => {
                println!("ERR {url}: {e}");
                first_failure.get_or_insert(e);
            }
        }
    }

    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
