use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use conquest::api::{
    synthetic_vocabulary, Game, GameError, SubmitResponse, SyntheticCfg, Vocabulary, CONCAVITY,
    SCORE_SCALE,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod vocab_io;

#[derive(Parser)]
#[command(name = "conquest")]
#[command(about = "Grow a hull in the unit disk, one word at a time")]
struct Cmd {
    /// Log at DEBUG instead of INFO (logs go to stderr)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct VocabSource {
    /// Vocabulary file: .json object of word -> [x, y], or .csv with header word,x,y
    #[arg(long, conflicts_with = "synthetic")]
    vocab: Option<PathBuf>,
    /// Use N synthetic words (w0000, w0001, ...) instead of a file
    #[arg(long)]
    synthetic: Option<usize>,
    /// Seed for --synthetic
    #[arg(long, default_value_t = 2025)]
    seed: u64,
}

impl VocabSource {
    fn load(&self) -> Result<Vocabulary> {
        match (&self.vocab, self.synthetic) {
            (Some(path), _) => vocab_io::load_vocabulary(path),
            (None, Some(words)) => {
                let cfg = SyntheticCfg {
                    words,
                    ..SyntheticCfg::default()
                };
                Ok(synthetic_vocabulary(cfg, self.seed)?)
            }
            (None, None) => bail!("pass --vocab FILE or --synthetic N"),
        }
    }

    fn describe(&self) -> String {
        match (&self.vocab, self.synthetic) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(n)) => format!("synthetic:{n}:seed={}", self.seed),
            (None, None) => "none".to_string(),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Read words from stdin (one per line, blank lines included) and report the score after each
    Play {
        #[command(flatten)]
        source: VocabSource,
        /// Print one JSON response per line instead of text
        #[arg(long)]
        json: bool,
    },
    /// Submit WORDS in order and print the final state as JSON
    Score {
        #[command(flatten)]
        source: VocabSource,
        words: Vec<String>,
        /// Write the JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the disk point of one word
    Project {
        #[command(flatten)]
        source: VocabSource,
        word: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
    match cmd.action {
        Action::Play { source, json } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            play(&source, json, stdin.lock(), &mut stdout.lock())
        }
        Action::Score { source, words, out } => score(&source, &words, out.as_deref()),
        Action::Project { source, word } => project(&source, &word),
        Action::Report => report(),
    }
}

fn play<R: BufRead, W: Write>(
    source: &VocabSource,
    json: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    let vocab = source.load()?;
    tracing::info!(source = %source.describe(), words = vocab.len(), "play");
    let mut game = Game::new(Arc::new(vocab));
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let r = game.submit(&line);
        if json {
            writeln!(out, "{}", serde_json::to_string(&r)?)?;
        } else {
            writeln!(out, "{}", render_turn(&r))?;
        }
    }
    let state = game.state();
    tracing::info!(words = state.history.len(), score = state.score, "game over");
    Ok(())
}

/// One status line: the score with its signed delta, or the error message.
fn render_turn(r: &SubmitResponse) -> String {
    match &r.error_message {
        Some(msg) => msg.clone(),
        None => format!("Score: {} ({:+})", r.score, r.score_delta),
    }
}

fn score(source: &VocabSource, words: &[String], out: Option<&Path>) -> Result<()> {
    let vocab = source.load()?;
    let mut game = Game::new(Arc::new(vocab));
    let mut last = game.snapshot();
    let mut submitted = Vec::with_capacity(words.len());
    for w in words {
        last = game.submit(w);
        submitted.push(provenance::SubmittedWord {
            word: w.clone(),
            accepted: last.accepted,
        });
    }
    tracing::info!(
        submitted = words.len(),
        accepted = game.state().history.len(),
        score = last.score,
        "score"
    );
    let body = serde_json::to_vec_pretty(&last)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::from_game(source.describe(), submitted, &game);
    let sidecar = provenance::write_sidecar(out, &payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn project(source: &VocabSource, word: &str) -> Result<()> {
    let vocab = source.load()?;
    let Some(p) = vocab.project(word) else {
        return Err(GameError::WordNotFound {
            word: word.to_string(),
        }
        .into());
    };
    let obj = serde_json::json!({ "word": word, "x": p.x, "y": p.y });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": conquest::VERSION,
        "params": {
            "concavity": CONCAVITY,
            "score_scale": SCORE_SCALE,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
