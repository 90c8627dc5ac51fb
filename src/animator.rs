/// Frame sequencing — drives strategy actions against the game state and
/// turns simulation ticks into a lazy stream of rendered frames.
///
/// The stream is pull-based: nothing is simulated or rendered ahead of
/// demand, and dropping it mid-sequence abandons the run cleanly (the engine
/// holds no external resources).

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::game::GameState;
use crate::graph::ContributionGraph;
use crate::render::{RenderContext, Renderer};
use crate::strategy::{Action, Strategy};

pub struct Animator {
    graph: ContributionGraph,
    strategy: Box<dyn Strategy>,
    config: SimConfig,
    context: RenderContext,
    fps: u32,
}

impl Animator {
    /// `fps` must be positive; it sets both the per-tick delta and the
    /// declared frame duration.
    pub fn new(graph: ContributionGraph, strategy: Box<dyn Strategy>, fps: u32, watermark: bool) -> Self {
        debug_assert!(fps > 0);
        Animator {
            graph,
            strategy,
            config: SimConfig::default(),
            context: RenderContext::dark(watermark),
            fps,
        }
    }

    /// Override the simulation tuning (tests, alternate presets).
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Declared duration of every frame, in milliseconds.
    pub fn frame_duration_ms(&self) -> u32 {
        1000 / self.fps
    }

    /// Simulated seconds per tick.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Lazy frame stream with fresh entropy.  `max_frames` caps the stream
    /// length regardless of the run's own state.
    pub fn frames(&self, max_frames: Option<usize>) -> FrameStream {
        self.frames_with_rng(max_frames, StdRng::from_entropy())
    }

    /// Same, but with a caller-supplied RNG so every random element
    /// (starfield, random strategy) is reproducible.
    pub fn frames_with_rng(&self, max_frames: Option<usize>, mut rng: StdRng) -> FrameStream {
        let state = GameState::new(&self.graph, self.config, &mut rng);
        let renderer = Renderer::new(&state, self.context);
        let actions = self.strategy.plan(&state, &mut rng);
        FrameStream {
            state,
            renderer,
            actions,
            rng,
            dt: self.delta_time(),
            phase: Phase::Init,
            active: None,
            remaining: max_frames,
        }
    }
}

// ── Frame stream ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Emit the as-constructed state before consuming any action.
    Init,
    /// Apply strategy actions one at a time, draining movement and cooldown
    /// between them.
    Streaming,
    /// Actions exhausted; let residual bullets/explosions resolve, bounded
    /// by the tick budget.
    Draining { budget: u32 },
    /// Fixed run of identical padding frames.
    Trailing { left: u32 },
    Done,
}

/// Lazy iterator over rendered frames.  One `animate` per emitted frame,
/// except the initial and trailing frames which render without advancing.
pub struct FrameStream {
    state: GameState,
    renderer: Renderer,
    actions: Box<dyn Iterator<Item = Action>>,
    rng: StdRng,
    dt: f32,
    phase: Phase,
    active: Option<Action>,
    remaining: Option<usize>,
}

impl FrameStream {
    /// The live simulation state (inspection only).
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Iterator for FrameStream {
    type Item = RgbaImage;

    fn next(&mut self) -> Option<RgbaImage> {
        if self.phase == Phase::Done {
            return None;
        }
        if self.remaining == Some(0) {
            self.phase = Phase::Done;
            return None;
        }

        let frame = loop {
            match self.phase {
                Phase::Init => {
                    self.phase = Phase::Streaming;
                    break self.renderer.frame(&self.state);
                }

                Phase::Streaming => {
                    let action = match self.active {
                        Some(action) => action,
                        None => match self.actions.next() {
                            Some(action) => {
                                self.state.ship.move_to(action.x);
                                self.active = Some(action);
                                action
                            }
                            None => {
                                self.phase = Phase::Draining {
                                    budget: self.state.config.drain_tick_budget,
                                };
                                continue;
                            }
                        },
                    };

                    // Drain in-flight movement and cooldown before the
                    // action itself is applied; this is what guarantees at
                    // most one pending action at a time.
                    if !self.state.can_take_action() {
                        self.state.animate(self.dt, &mut self.rng);
                        break self.renderer.frame(&self.state);
                    }

                    self.active = None;
                    if action.shoot {
                        // Exactly one tick elapses so the shot is visible
                        // before the next action starts moving the ship.
                        self.state.shoot();
                        self.state.animate(self.dt, &mut self.rng);
                        break self.renderer.frame(&self.state);
                    }
                    // A pure move already resolved; go straight to the next
                    // action without emitting a frame.
                }

                Phase::Draining { budget } => {
                    if self.state.is_complete() {
                        self.phase = Phase::Trailing {
                            left: self.state.config.trailing_frames,
                        };
                        continue;
                    }
                    if budget == 0 {
                        log::warn!(
                            "draining budget exhausted with {} enemies, {} bullets, {} explosions left",
                            self.state.enemies.len(),
                            self.state.bullets.len(),
                            self.state.explosions.len(),
                        );
                        self.phase = Phase::Trailing {
                            left: self.state.config.trailing_frames,
                        };
                        continue;
                    }
                    self.phase = Phase::Draining { budget: budget - 1 };
                    self.state.animate(self.dt, &mut self.rng);
                    break self.renderer.frame(&self.state);
                }

                Phase::Trailing { left } => {
                    if left == 0 {
                        self.phase = Phase::Done;
                        return None;
                    }
                    self.phase = Phase::Trailing { left: left - 1 };
                    break self.renderer.frame(&self.state);
                }

                Phase::Done => return None,
            }
        };

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(frame)
    }
}
