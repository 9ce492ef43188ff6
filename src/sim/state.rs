//! Game state and core simulation types
//!
//! All state that must be persisted for snapshots/determinism lives here.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::spawn;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only the restart signal is honored
    GameOver,
}

/// Pickup effect of a collectible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Heals the player, clamped to max health
    Health,
    /// Adds one life
    Life,
}

/// Discriminator a renderer uses to choose color/sprite per entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Enemy,
    Collectible(CollectibleKind),
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Aabb,
    /// Vertical velocity (negative = upward)
    pub vel_y: f32,
    /// Set for the duration of a jump arc; cleared by the ground clamp
    pub airborne: bool,
    /// Clamped to [0, MAX_HEALTH]
    pub health: i32,
    pub lives: u32,
    pub score: u64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Aabb::new(PLAYER_START_X, GROUND_Y, PLAYER_SIZE, PLAYER_SIZE),
            vel_y: 0.0,
            airborne: false,
            health: MAX_HEALTH,
            lives: START_LIVES,
            score: 0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A player projectile, moving rightward at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub rect: Aabb,
    pub vel_x: f32,
}

/// An enemy marching leftward at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub rect: Aabb,
    /// Present for parity with spawn data; any projectile hit kills outright
    pub health: i32,
}

/// A stationary pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub rect: Aabb,
    pub kind: CollectibleKind,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Current level number. Seeds entity placement but does not scale
    /// spawn counts or ranges, and nothing advances it yet.
    pub level: u32,
    /// Restart generation, mixed into the placement seed so each restart
    /// gets a fresh layout
    pub run: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The player (singleton, lives for the whole session)
    pub player: Player,
    /// Live projectiles
    pub projectiles: Vec<Projectile>,
    /// Live enemies
    pub enemies: Vec<Enemy>,
    /// Live collectibles
    pub collectibles: Vec<Collectible>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and populate the first level
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            level: 1,
            run: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            collectibles: Vec::new(),
            next_id: 1,
        };

        spawn::create_level(&mut state);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a projectile at the player's horizontal center, top edge,
    /// moving rightward
    pub fn spawn_projectile(&mut self) {
        let id = self.next_entity_id();
        let rect = Aabb::new(
            self.player.rect.center_x(),
            self.player.rect.top(),
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        );
        self.projectiles.push(Projectile {
            id,
            rect,
            vel_x: PROJECTILE_SPEED,
        });
    }

    /// Reset the session after a game over: fresh player vitals, all
    /// non-player entities cleared, level 1 respawned under a new restart
    /// generation. Score resets with the rest of the vitals.
    pub fn restart(&mut self) {
        self.player = Player::new();
        self.projectiles.clear();
        self.enemies.clear();
        self.collectibles.clear();
        self.level = 1;
        self.run += 1;
        self.phase = GamePhase::Playing;

        spawn::create_level(self);

        log::info!("restarted session (seed {}, run {})", self.seed, self.run);
    }
}
