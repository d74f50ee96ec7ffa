//! Behavior module - per-kind entity update rules
//!
//! Each rule advances one entity by one turn and reports what the turn engine
//! must do next. Rules never touch the pool directly: removal is reported as
//! [`StepOutcome::Expired`] so the engine can swap-remove and revisit the slot.
//!
//! - Patrol: one step per turn between `origin` and `origin + amplitude`.
//! - Bomb: counts down, detonates on the turn the counter goes 1 -> 0.
//! - Snake: greedy pursuit of the player over legal cells.

use crate::entity::{Payload, SnakeBody};
use crate::occupancy::OccupancyMap;
use crate::types::{Direction, Vec2};

/// Read-only world data an entity rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub map: &'a OccupancyMap,
    pub player: Vec2,
}

/// Result of advancing one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Entity is still live and did not touch the player
    Alive,
    /// Entity must be removed from the pool
    Expired,
    /// Entity collided with the player
    HitPlayer,
}

/// Advance one entity by a single turn.
pub fn step(position: &mut Vec2, payload: &mut Payload, ctx: &StepContext<'_>) -> StepOutcome {
    match payload {
        Payload::Patrol {
            origin,
            amplitude,
            direction,
        } => step_patrol(position, *origin, *amplitude, direction, ctx.player),
        Payload::Bomb { ticks_remaining } => step_bomb(*position, ticks_remaining, ctx.player),
        Payload::Snake { body } => step_snake(position, body, ctx),
    }
}

/// Move one step along the patrol axis, then turn around at either end.
pub fn step_patrol(
    position: &mut Vec2,
    origin: Vec2,
    amplitude: Vec2,
    direction: &mut i32,
    player: Vec2,
) -> StepOutcome {
    *position += amplitude.signum() * *direction;

    let offset = *position - origin;
    if offset == amplitude {
        *direction = -1;
    } else if offset == Vec2::ZERO {
        *direction = 1;
    }

    if *position == player {
        StepOutcome::HitPlayer
    } else {
        StepOutcome::Alive
    }
}

/// Tick the countdown. Detonation only happens on the 1 -> 0 transition.
pub fn step_bomb(position: Vec2, ticks_remaining: &mut u8, player: Vec2) -> StepOutcome {
    let was = *ticks_remaining;
    *ticks_remaining = was.saturating_sub(1);

    if was != 1 {
        return StepOutcome::Alive;
    }
    if position == player {
        StepOutcome::HitPlayer
    } else {
        StepOutcome::Expired
    }
}

/// Pick the snake's move for this turn.
///
/// Every direction is tried in [`Direction::ALL`] order against the head's
/// current distance to the player. The last candidate that is legal and
/// strictly closer wins, even when an earlier candidate was closer still.
/// Returns `Vec2::ZERO` when no candidate qualifies.
pub fn choose_snake_offset(body: &SnakeBody, ctx: &StepContext<'_>) -> Vec2 {
    let Some(&head) = body.last() else {
        return Vec2::ZERO;
    };
    let baseline = ctx.player.dist_sq(head);

    let mut chosen = Vec2::ZERO;
    for dir in Direction::ALL {
        let candidate = dir.delta();
        let dest = head + candidate;
        let closer = ctx.player.dist_sq(dest) < baseline;
        if closer && ctx.map.is_walkable(dest) && !body.contains(&dest) {
            chosen = candidate;
        }
    }
    chosen
}

/// Slide the snake one cell toward the player, then check for contact.
pub fn step_snake(position: &mut Vec2, body: &mut SnakeBody, ctx: &StepContext<'_>) -> StepOutcome {
    let offset = choose_snake_offset(body, ctx);

    if offset != Vec2::ZERO {
        let len = body.len();
        let head = body[len - 1];
        body.copy_within(1..len, 0);
        body[len - 1] = head + offset;
        *position = body[len - 1];
    }

    if body.contains(&ctx.player) {
        StepOutcome::HitPlayer
    } else {
        StepOutcome::Alive
    }
}
