//! Regen CLI - incremental runner for documentation asset generators
//!
//! Usage: regen [OPTIONS] <COMMAND>
//!
//! Commands:
//!   run   Run every generator whose inputs changed
//!   plan  Show which generators would run

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use regen::config::{ColorMode, Config, ConfigWarning, Verbosity, CONFIG_FILE};
use regen::domain::ports::{NoopEventSink, RunEventSink};
use regen::infrastructure::{ChildStdout, ConsoleEventSink, JsonEventSink};
use regen::presentation::cli::{Cli, Commands};
use regen::presentation::output::{create_renderer, OutputFormat};
use regen::presentation::{create_run_use_case, run_options};
use regen::RegenError;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = cli.command.name();

    if let Err(err) = run(cli) {
        print_error(&err, command, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = match &cli.project {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let config = load_config(&cli, &project_root)?;
    let color = use_color(config.output.color);
    let verbosity = config.output.verbosity;

    // Generator output must not interleave with JSON on stdout
    let child_stdout = if cli.json {
        ChildStdout::Stderr
    } else {
        ChildStdout::Inherit
    };
    let use_case = create_run_use_case(&project_root, &config, child_stdout)?;
    let args = cli.command.args();
    let options = run_options(&project_root, &config)
        .with_force(args.force)
        .with_dry_run(cli.command.is_dry_run());

    let sink: Arc<dyn RunEventSink> = match (&cli.command, cli.json) {
        // `plan --json` prints one plan object instead of the event stream
        (Commands::Plan(_), true) => Arc::new(NoopEventSink),
        (_, true) => Arc::new(JsonEventSink::stdout(cli.command.name())),
        (_, false) => Arc::new(ConsoleEventSink::stderr(verbosity, color)),
    };

    let report = use_case.execute_with_events(&options, sink)?;

    if let Commands::Plan(_) = cli.command {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let renderer = create_renderer(format, color, verbosity >= Verbosity::Verbose);
        let mut stdout = io::stdout().lock();
        renderer.render(&report, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Config file → env → CLI flags, validated once all layers are applied
fn load_config(cli: &Cli, project_root: &Path) -> Result<Config> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => project_root.join(CONFIG_FILE),
    };

    let mut config = if path.is_file() || cli.config.is_some() {
        let (config, warnings) = Config::load_with_warnings(&path)?;
        if !cli.json {
            print_config_warnings(&path, &warnings);
        }
        config
    } else {
        Config::default()
    };
    config = config.with_env_overrides();

    let args = cli.command.args();
    if let Some(root) = &args.root {
        config.layout.tracked_root = root.clone();
    }
    if let Some(state) = &args.state {
        config.state.file = state.clone();
    }
    if let Some(verbosity) = cli.verbosity() {
        config.output.verbosity = verbosity;
    }
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }

    config.validate(&path)?;
    Ok(config)
}

fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    let regen_err = err.downcast_ref::<RegenError>();

    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": command,
            "kind": regen_err.map(RegenError::kind).unwrap_or("internal"),
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    eprintln!("✗ {}", err);
    if let Some(RegenError::NoGenerators { root }) = regen_err {
        eprintln!(
            "  Check layout.generators_dir and layout.generator_suffix in {}, or pass --root (scanned {})",
            CONFIG_FILE,
            root.display()
        );
    }
}
