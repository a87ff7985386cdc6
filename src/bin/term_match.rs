//! Terminal front end for the matching game.
//!
//! Commands: `f` flips the card, `1`-`9` picks a definition, `q` quits.
//! The countdown runs on the wall clock and is applied whenever a command
//! is entered.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use term_match::{GameSession, Phase, RoundConfig, SessionView};

#[derive(Parser, Debug)]
#[command(name = "term-match", about = "Match AI terms to their definitions")]
struct Args {
    /// RNG seed for reproducible deals.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with round settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<RoundConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            RoundConfig::from_toml_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => RoundConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn render(view: &SessionView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "Score: {}", view.score)?;
    if let Some(feedback) = &view.feedback {
        write!(out, " ({feedback})")?;
    }
    writeln!(out, "   Time Left: {}s", view.remaining_seconds)?;
    if let Some(notice) = &view.notice {
        writeln!(out, "{notice}")?;
    }
    writeln!(out, "[ {} ]", view.card_face)?;
    for (i, candidate) in view.candidates.iter().enumerate() {
        writeln!(out, "  {}. {candidate}", i + 1)?;
    }
    match view.phase {
        Phase::Idle => write!(out, "f = flip, q = quit > ")?,
        Phase::Active => write!(out, "pick 1-{} > ", view.candidates.len())?,
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut session = GameSession::new(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(&session.view(), &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        session.poll();

        match line.trim() {
            "q" => break,
            "f" => {
                session.on_card_click()?;
            }
            pick => match pick.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    session.on_candidate_click(n - 1);
                }
                _ => tracing::debug!(input = pick, "unrecognized command"),
            },
        }

        render(&session.view(), &mut stdout)?;
    }

    let view = session.view();
    println!(
        "\nFinal score: {} over {} rounds",
        view.score,
        session.engine().history().len()
    );
    Ok(())
}
