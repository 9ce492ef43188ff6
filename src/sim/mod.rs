//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by insertion, ids monotonically allocated)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use spawn::create_level;
pub use state::{
    Collectible, CollectibleKind, Enemy, EntityKind, GamePhase, GameState, Player, Projectile,
};
pub use tick::{TickInput, tick};
