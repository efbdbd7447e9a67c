//! AI move selection.
//!
//! A [`Policy`] looks at the state and the legal moves and picks one. It
//! never changes the state. Randomness comes from the `GameRng` the caller
//! passes in, kept separate from the bag RNG inside the state.
//!
//! - `Random`: uniform over the legal moves.
//! - `Greedy`: best immediate score change.
//! - `Strategic`: greedy plus weighted positional heuristics.
//!
//! ```
//! use azul_engine::ai::Policy;
//! use azul_engine::core::{GameConfig, GameRng};
//! use azul_engine::game::GameState;
//! use azul_engine::rules::legal_moves;
//!
//! let state = GameState::new(GameConfig::new(2)).unwrap();
//! let legal = legal_moves(&state);
//! let policy: Policy = "strategic".parse().unwrap();
//!
//! let mv = policy.choose_move(&state, &legal, &mut GameRng::new(1)).unwrap();
//! assert!(legal.contains(&mv));
//! ```

pub mod evaluate;
pub mod greedy;
pub mod random;
pub mod strategic;

pub use evaluate::MoveEffect;
pub use strategic::StrategicWeights;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameRng, Move};
use crate::game::GameState;
use crate::rules::validate_move;

/// Move selection strategy.
///
/// Serializes as `"random"`, `"greedy"` or `{"strategic": {...weights}}`.
/// Deserializing also accepts any name [`FromStr`] accepts, so a bare
/// `"strategic"` gives the default weights. The name form needs a
/// self-describing format such as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "PolicyConfig")]
pub enum Policy {
    Random,
    Greedy,
    Strategic(StrategicWeights),
}

impl Default for Policy {
    fn default() -> Self {
        Policy::strategic()
    }
}

impl Policy {
    /// Strategic policy with default weights.
    #[must_use]
    pub fn strategic() -> Self {
        Policy::Strategic(StrategicWeights::default())
    }

    /// Pick a move from `legal`, or `None` if there is nothing to pick.
    ///
    /// `legal` should be [`legal_moves`](crate::rules::legal_moves) for
    /// `state`; moves in it that do not validate are skipped.
    pub fn choose_move(&self, state: &GameState, legal: &[Move], rng: &mut GameRng) -> Option<Move> {
        match self {
            Policy::Random => random::choose(legal, rng),
            Policy::Greedy => greedy::choose(state, legal),
            Policy::Strategic(weights) => strategic::choose(state, legal, weights),
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Random => "random",
            Policy::Greedy => "greedy",
            Policy::Strategic(_) => "strategic",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown policy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown policy {0:?}, expected random, greedy or strategic")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Policy::Random),
            "greedy" => Ok(Policy::Greedy),
            "strategic" => Ok(Policy::strategic()),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Stored form of a [`Policy`]: a bare name or strategic weights.
#[derive(Deserialize)]
#[serde(untagged)]
enum PolicyConfig {
    Name(String),
    Weighted { strategic: StrategicWeights },
}

impl TryFrom<PolicyConfig> for Policy {
    type Error = ParsePolicyError;

    fn try_from(config: PolicyConfig) -> Result<Self, Self::Error> {
        match config {
            PolicyConfig::Name(name) => name.parse(),
            PolicyConfig::Weighted { strategic } => Ok(Policy::Strategic(strategic)),
        }
    }
}

/// Highest-scoring move under `score`, first one on ties.
fn best_move(
    state: &GameState,
    legal: &[Move],
    mut score: impl FnMut(&Move, &MoveEffect) -> f64,
) -> Option<Move> {
    let board = state.board(state.current_player());
    let mut best: Option<(Move, f64)> = None;

    for mv in legal {
        let Ok(preview) = validate_move(state, mv) else {
            continue;
        };
        let value = score(mv, &MoveEffect::measure(board, mv, &preview));
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((*mv, value));
        }
    }

    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::rules::legal_moves;

    #[test]
    fn test_parse() {
        assert_eq!("random".parse::<Policy>(), Ok(Policy::Random));
        assert_eq!(" Greedy ".parse::<Policy>(), Ok(Policy::Greedy));
        assert_eq!("STRATEGIC".parse::<Policy>(), Ok(Policy::strategic()));
        assert!("minimax".parse::<Policy>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for policy in [Policy::Random, Policy::Greedy, Policy::strategic()] {
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
    }

    #[test]
    fn test_every_policy_picks_legal_move() {
        let state = GameState::new(GameConfig::new(3).with_seed(4)).unwrap();
        let legal = legal_moves(&state);
        let mut rng = GameRng::new(0);

        for policy in [Policy::Random, Policy::Greedy, Policy::strategic()] {
            let mv = policy.choose_move(&state, &legal, &mut rng).unwrap();
            assert!(legal.contains(&mv), "{policy} picked {mv}");
        }
    }

    #[test]
    fn test_policies_do_not_mutate() {
        let state = GameState::new(GameConfig::new(2).with_seed(4)).unwrap();
        let before = state.clone();
        let legal = legal_moves(&state);
        Policy::strategic().choose_move(&state, &legal, &mut GameRng::new(0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_legal_set() {
        let state = GameState::new(GameConfig::new(2)).unwrap();
        for policy in [Policy::Random, Policy::Greedy, Policy::strategic()] {
            assert_eq!(policy.choose_move(&state, &[], &mut GameRng::new(0)), None);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Policy::Greedy).unwrap();
        assert_eq!(json, r#""greedy""#);
        let back: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Policy::Greedy);
    }

    #[test]
    fn test_serde_strategic_forms() {
        let bare: Policy = serde_json::from_str(r#""strategic""#).unwrap();
        assert_eq!(bare, Policy::strategic());

        let tuned = Policy::Strategic(StrategicWeights { denial: 0.5, ..Default::default() });
        let json = serde_json::to_string(&tuned).unwrap();
        assert!(json.starts_with(r#"{"strategic":"#));
        assert_eq!(serde_json::from_str::<Policy>(&json).unwrap(), tuned);

        let partial: Policy = serde_json::from_str(r#"{"strategic": {"waste": 1.0}}"#).unwrap();
        assert_eq!(
            partial,
            Policy::Strategic(StrategicWeights { waste: 1.0, ..Default::default() })
        );
    }

    #[test]
    fn test_serde_rejects_unknown_name() {
        assert!(serde_json::from_str::<Policy>(r#""minimax""#).is_err());
    }
}
