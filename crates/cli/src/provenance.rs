//! Score sidecar: `<out>.provenance.json` beside a `score --out` result.
//!
//! Records which vocabulary was used, every submitted word with whether it was
//! accepted, and the final score and hull size, so a saved game can be checked
//! against a rerun.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use conquest::api::Game;
use serde::Serialize;

/// One submitted word, as typed, and whether the vocabulary knew it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmittedWord {
    pub word: String,
    pub accepted: bool,
}

/// Sidecar body; built only from a finished game.
#[derive(Debug, Serialize)]
pub struct Payload {
    code_rev: String,
    version: &'static str,
    vocabulary: String,
    concavity: f64,
    score_scale: f64,
    words: Vec<SubmittedWord>,
    accepted: usize,
    rejected: usize,
    score: u64,
    hull_vertices: usize,
}

impl Payload {
    pub fn from_game(
        vocabulary: impl Into<String>,
        words: Vec<SubmittedWord>,
        game: &Game,
    ) -> Self {
        let state = game.state();
        let cfg = game.cfg();
        let accepted = words.iter().filter(|w| w.accepted).count();
        Self {
            code_rev: current_git_rev(),
            version: conquest::VERSION,
            vocabulary: vocabulary.into(),
            concavity: cfg.concavity,
            score_scale: cfg.score_scale,
            rejected: words.len() - accepted,
            accepted,
            words,
            score: state.score,
            hull_vertices: state.hull.as_ref().map_or(0, |h| h.len()),
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    output: String,
    #[serde(flatten)]
    payload: &'a Payload,
}

/// Write the sidecar next to `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        output: artifact.display().to_string(),
        payload,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conquest::api::Vocabulary;
    use serde_json::Value;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn played(words: &[&str]) -> (Game, Vec<SubmittedWord>) {
        let vocab =
            Vocabulary::from_entries([("a", [0.0, 0.0]), ("b", [1.0, 0.0]), ("c", [0.0, 1.0])])
                .unwrap();
        let mut game = Game::new(Arc::new(vocab));
        let submitted = words
            .iter()
            .map(|w| SubmittedWord {
                word: w.to_string(),
                accepted: game.submit(w).accepted,
            })
            .collect();
        (game, submitted)
    }

    #[test]
    fn sidecar_sits_beside_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/games/final.json")),
            Path::new("/tmp/games/final.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("runs/final")),
            Path::new("runs/final.provenance.json")
        );
    }

    #[test]
    fn payload_tallies_accepted_and_rejected_words() {
        let (game, words) = played(&["a", "zzz", "B", "c"]);
        let p = Payload::from_game("abc.json", words, &game);
        assert_eq!((p.accepted, p.rejected), (3, 1));
        assert_eq!(p.score, 1250);
        assert_eq!(p.hull_vertices, 3);
        assert!(!p.words[1].accepted);
        assert_eq!(p.words[2].word, "B");
    }

    #[test]
    fn write_sidecar_records_game_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("game.json");
        fs::write(&artifact, "{}").unwrap();
        let (game, words) = played(&["a", "nope"]);
        let payload = Payload::from_game("abc.json", words, &game);
        let path = write_sidecar(&artifact, &payload).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["output"], artifact.display().to_string());
        assert_eq!(doc["vocabulary"], "abc.json");
        assert_eq!(doc["words"][1]["word"], "nope");
        assert_eq!(doc["words"][1]["accepted"], false);
        assert_eq!(doc["score"], 0);
        assert_eq!(doc["hull_vertices"], 1);
        assert_eq!(doc["version"], conquest::VERSION);
    }
}
