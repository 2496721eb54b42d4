//! hilo - play Higher/Lower/Blank in the terminal.
//!
//! Commands, one per line: `h` (higher), `l` (lower), `b` (blank),
//! `n` (new game), `q` (quit).

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use hilo_engine::session::{remaining_label, OPENING_PROMPT};
use hilo_engine::{Card, RestartPolicy, RoundEngine, RoundSnapshot, RuleSetName, Session};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "hilo")]
#[command(about = "Higher/Lower/Blank card-guessing game")]
struct Args {
    /// Shuffle seed (for repeatable games); random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Rule set: strict (missing the Blank loses) or lenient
    #[arg(long, default_value = "strict")]
    rules: RuleSetName,

    /// What happens after a lost or exhausted round
    #[arg(long, default_value = "immediate")]
    restart: Restart,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Restart {
    Immediate,
    Manual,
}

impl From<Restart> for RestartPolicy {
    fn from(restart: Restart) -> Self {
        match restart {
            Restart::Immediate => RestartPolicy::Immediate,
            Restart::Manual => RestartPolicy::Manual,
        }
    }
}

fn show_round(out: &mut impl Write, snapshot: &RoundSnapshot) -> io::Result<()> {
    writeln!(out, "[ {} ]", snapshot.reference)?;
    writeln!(out, "{OPENING_PROMPT}")?;
    writeln!(out, "{}", remaining_label(snapshot.remaining))
}

fn show_card(out: &mut impl Write, card: Option<Card>) -> io::Result<()> {
    match card {
        Some(card) => writeln!(out, "[ {card} ]"),
        None => writeln!(out, "[    ]"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let rules = args.rules.rules();
    let engine = match args.seed {
        Some(seed) => RoundEngine::new(rules, seed),
        None => RoundEngine::from_entropy(rules),
    };
    info!(seed = engine.seed(), rules = %args.rules, "starting");

    let mut session = Session::new(engine, args.restart.into());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let snapshot = session.new_game()?;
    show_round(&mut out, &snapshot)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "q" | "quit" => break,
            "n" | "new" => {
                let snapshot = session.new_game()?;
                show_round(&mut out, &snapshot)?;
                continue;
            }
            _ => {}
        }

        let outcome = match session.reveal_input(command) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "command rejected");
                writeln!(out, "{e}")?;
                continue;
            }
        };

        show_card(&mut out, outcome.revealed)?;
        writeln!(out, "{}", session.status_line(&outcome))?;
        writeln!(out, "{}", remaining_label(outcome.remaining))?;

        if let Some(snapshot) = session.acknowledge()? {
            show_round(&mut out, &snapshot)?;
        }
        out.flush()?;
    }

    Ok(())
}
