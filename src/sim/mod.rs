//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied, clamped timestep only
//! - Stable iteration order (insertion order of the level layout)
//! - No rendering, clock or platform dependencies

pub mod collision;
pub mod flow;
pub mod level;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{VerticalContact, clamp_to_width, resolve_x, resolve_y};
pub use flow::{FlowCommand, apply_command, load_level, new_world, reset_session};
pub use level::{Level, LevelCatalog};
pub use rect::{Rect, overlaps};
pub use snapshot::Snapshot;
pub use state::{Coin, Enemy, GameEvent, GamePhase, Goal, Platform, Player, Session, World};
pub use tick::{TickInput, advance, lose_life};
