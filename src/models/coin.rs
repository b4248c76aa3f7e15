//! Coin flip side mechanic: a two-phase result with a running flip counter.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of a coin flip. Displayed as "Cara" / "Coroa".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    /// Fair flip.
    pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoinFace::Heads => "Cara",
            CoinFace::Tails => "Coroa",
        }
    }

    /// Marker appended to the result line; heads counts as a bonus flip.
    pub fn marker(&self) -> &'static str {
        match self {
            CoinFace::Heads => "(+)",
            CoinFace::Tails => "(0)",
        }
    }

    /// Full result line, e.g. "Cara (+)".
    pub fn display_line(&self) -> String {
        format!("{} {}", self.label(), self.marker())
    }
}

/// State of the coin side mechanic.
///
/// A flip has two timed phases driven by the caller: after the spin interval
/// it settles on a face, and after a linger interval the face image is hidden
/// again. Each flip gets a generation token; settle/clear calls carrying a
/// stale token are dropped, so a new flip (or a restart) supersedes any
/// pending one.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoinFlip {
    /// True while a flip is in its spin phase.
    pub flipping: bool,
    /// Settled face currently shown by the UI; cleared after the linger.
    pub face: Option<CoinFace>,
    /// Last result line ("Jogando..." while spinning, "N/A" after restart,
    /// absent before the first flip).
    pub display: Option<String>,
    /// Number of settled flips this game.
    pub count: u32,
    /// Supersede token; bumped on every flip and on reset.
    pub generation: u64,
}

impl CoinFlip {
    /// Start a new flip, superseding any pending one. Returns the generation
    /// token the caller must present when settling.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.flipping = true;
        self.face = None;
        self.display = Some("Jogando...".to_string());
        self.generation
    }

    /// Settle the flip started with `generation` on `face`. Returns false
    /// (changing nothing) when a newer flip or a reset superseded it.
    pub fn settle(&mut self, generation: u64, face: CoinFace) -> bool {
        if generation != self.generation {
            return false;
        }
        self.flipping = false;
        self.face = Some(face);
        self.display = Some(face.display_line());
        self.count += 1;
        true
    }

    /// Hide the settled face once the linger interval elapsed. The result
    /// line stays. Dropped when superseded.
    pub fn clear_face(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.face = None;
        true
    }

    /// Restart semantics: zero the counter, show "N/A", supersede any
    /// pending flip.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.flipping = false;
        self.face = None;
        self.display = Some("N/A".to_string());
        self.count = 0;
    }
}
