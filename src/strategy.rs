/// Targeting strategies — pluggable planners that decide the order enemies
/// are cleared in.  A planner never mutates the game state; it only emits
/// actions the animator applies one at a time.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::entities::Enemy;
use crate::error::{Error, Result};
use crate::game::GameState;

/// One planner instruction: move the ship to a column, optionally fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub x: i32,
    pub shoot: bool,
}

/// A targeting planner.
///
/// `plan` inspects the state it is handed and returns a finite pull-based
/// action sequence.  A bullet removes exactly one health point, so every
/// variant emits one action per required hit: an enemy of health `h`
/// contributes `h` consecutive actions targeting its column.  The sequence
/// length therefore equals the total remaining health, and a completed plan
/// leaves no stray bullets.
pub trait Strategy: std::fmt::Debug {
    fn plan(&self, state: &GameState, rng: &mut StdRng) -> Box<dyn Iterator<Item = Action>>;
}

/// Expand an enemy ordering into its per-hit firing actions.
fn volley(enemies: &[Enemy]) -> Vec<Action> {
    enemies
        .iter()
        .flat_map(|e| {
            std::iter::repeat(Action {
                x: e.x,
                shoot: true,
            })
            .take(e.health as usize)
        })
        .collect()
}

/// Sweeps columns left to right, clearing each column top to bottom.
#[derive(Debug)]
pub struct ColumnStrategy;

impl Strategy for ColumnStrategy {
    fn plan(&self, state: &GameState, _rng: &mut StdRng) -> Box<dyn Iterator<Item = Action>> {
        let mut enemies = state.enemies.clone();
        enemies.sort_by_key(|e| (e.x, e.y));
        Box::new(volley(&enemies).into_iter())
    }
}

/// Sweeps rows top to bottom, clearing each row left to right.
#[derive(Debug)]
pub struct RowStrategy;

impl Strategy for RowStrategy {
    fn plan(&self, state: &GameState, _rng: &mut StdRng) -> Box<dyn Iterator<Item = Action>> {
        let mut enemies = state.enemies.clone();
        enemies.sort_by_key(|e| (e.y, e.x));
        Box::new(volley(&enemies).into_iter())
    }
}

/// Targets the remaining enemies in a randomized order drawn from the
/// injected RNG.
#[derive(Debug)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn plan(&self, state: &GameState, rng: &mut StdRng) -> Box<dyn Iterator<Item = Action>> {
        let mut enemies = state.enemies.clone();
        enemies.shuffle(rng);
        Box::new(volley(&enemies).into_iter())
    }
}

/// Resolve a strategy selector.  Unrecognized names are an error here; any
/// fall-back-to-default policy belongs to the caller.
pub fn strategy_from_name(name: &str) -> Result<Box<dyn Strategy>> {
    match name {
        "column" => Ok(Box::new(ColumnStrategy)),
        "row" => Ok(Box::new(RowStrategy)),
        "random" => Ok(Box::new(RandomStrategy)),
        other => Err(Error::UnknownStrategy(other.to_string())),
    }
}
