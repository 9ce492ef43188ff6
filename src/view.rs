//! Frame snapshots for the rendering frontend
//!
//! Once per tick the renderer gets either the live draw list plus HUD
//! values, or the game-over signal with the final score (presenting that
//! implies prompting for restart). Serializable so an out-of-process
//! frontend can consume JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{EntityKind, GamePhase, GameState};

/// One drawable entity: kind discriminator (color/sprite selection is the
/// renderer's business) plus screen-space bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// HUD values, recomputed every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub health: i32,
    pub lives: u32,
    pub score: u64,
}

/// What the frontend presents this tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FrameView {
    Playing { sprites: Vec<Sprite>, hud: Hud },
    GameOver { score: u64 },
}

/// Capture a presentable snapshot of the current state. Sprites come out
/// player first, then projectiles, enemies and collectibles in id order.
pub fn capture(state: &GameState) -> FrameView {
    match state.phase {
        GamePhase::GameOver => FrameView::GameOver {
            score: state.player.score,
        },
        GamePhase::Playing => {
            let mut sprites = Vec::with_capacity(
                1 + state.projectiles.len() + state.enemies.len() + state.collectibles.len(),
            );

            sprites.push(Sprite {
                kind: EntityKind::Player,
                pos: state.player.rect.pos,
                size: state.player.rect.size,
            });
            for projectile in &state.projectiles {
                sprites.push(Sprite {
                    kind: EntityKind::Projectile,
                    pos: projectile.rect.pos,
                    size: projectile.rect.size,
                });
            }
            for enemy in &state.enemies {
                sprites.push(Sprite {
                    kind: EntityKind::Enemy,
                    pos: enemy.rect.pos,
                    size: enemy.rect.size,
                });
            }
            for collectible in &state.collectibles {
                sprites.push(Sprite {
                    kind: EntityKind::Collectible(collectible.kind),
                    pos: collectible.rect.pos,
                    size: collectible.rect.size,
                });
            }

            FrameView::Playing {
                sprites,
                hud: Hud {
                    health: state.player.health,
                    lives: state.player.lives,
                    score: state.player.score,
                },
            }
        }
    }
}
