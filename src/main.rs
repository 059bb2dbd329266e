//! Veridia Shell
//!
//! Interactive terminal front end: renders the active screen and reads one
//! command per line until `quit` or end of input.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use veridia::config::Config;
use veridia::screens::{render, render_notice};
use veridia::session::AppState;
use veridia::shell::{self, Command};

#[derive(Parser)]
#[command(name = "veridia")]
#[command(about = "Veridia Hiring - interactive terminal prototype")]
#[command(version)]
struct Args {
    /// Config file (defaults to the usual search path)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty application store
    #[arg(long)]
    no_seed: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, source) =
        Config::resolve(args.config.as_deref()).context("Failed to load config")?;
    if args.no_seed {
        config.catalog.seed_sample_data = false;
    }
    veridia::logging::init(&config.logging).context("Failed to initialise logging")?;

    tracing::info!("Veridia shell v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Config: {}", source);

    let mut state = AppState::new(&config.catalog);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "{}", render(&state))?;
    writeln!(out, "Type `help` for commands.")?;
    prompt(&mut out, &state)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;

        match shell::parse_command(&line, state.view()) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", shell::help())?,
            Ok(Command::Show) => write!(out, "{}", render(&state))?,
            Ok(Command::Dispatch(action)) => match state.dispatch(action) {
                Ok(outcome) => {
                    write!(out, "{}", render(&state))?;
                    if let Some(notice) = &outcome.notice {
                        writeln!(out, "{}", render_notice(notice))?;
                    } else if let Some(record) = &outcome.record {
                        writeln!(out, "{}", shell::describe(record))?;
                    }
                }
                Err(e) => writeln!(out, "✕ {}", e)?,
            },
            Err(e) => writeln!(out, "✕ {}", e)?,
        }

        prompt(&mut out, &state)?;
    }

    writeln!(out)?;
    tracing::info!("Veridia shell exiting");
    Ok(())
}

fn prompt(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    write!(out, "veridia:{}> ", state.view())?;
    out.flush()
}
