//! Entity module - kind tags and per-kind payloads
//!
//! Every non-player occupant of the grid is one [`Payload`] variant. The enum
//! discriminant is the kind tag, and each variant carries only the data its
//! behavior needs.

use arrayvec::ArrayVec;

use crate::types::{Glyph, Vec2, SNAKE_MAX_SEGMENTS, SNAKE_MIN_SEGMENTS};

/// Snake body storage: ordered tail first, head last.
pub type SnakeBody = ArrayVec<Vec2, SNAKE_MAX_SEGMENTS>;

/// Entity kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Patrol,
    Bomb,
    Snake,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Patrol => "patrol",
            EntityKind::Bomb => "bomb",
            EntityKind::Snake => "snake",
        }
    }
}

/// Kind-specific entity data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Soldier oscillating between `origin` and `origin + amplitude`
    Patrol {
        origin: Vec2,
        amplitude: Vec2,
        /// +1 while heading to the far end, -1 while heading back
        direction: i32,
    },
    /// Static bomb that detonates when its countdown runs out
    Bomb { ticks_remaining: u8 },
    /// Pursuing snake; the last body point is the head
    Snake { body: SnakeBody },
}

impl Payload {
    /// # Panics
    ///
    /// Panics unless `direction` is +1 or -1.
    pub fn patrol(origin: Vec2, amplitude: Vec2, direction: i32) -> Self {
        assert!(
            direction == 1 || direction == -1,
            "patrol direction must be +1 or -1, got {}",
            direction
        );
        Payload::Patrol {
            origin,
            amplitude,
            direction,
        }
    }

    pub fn bomb(ticks_remaining: u8) -> Self {
        Payload::Bomb { ticks_remaining }
    }

    /// Build a snake from body points ordered tail to head.
    ///
    /// # Panics
    ///
    /// Panics if the body has fewer than 2 or more than 6 segments.
    pub fn snake(body: &[Vec2]) -> Self {
        assert!(
            (SNAKE_MIN_SEGMENTS..=SNAKE_MAX_SEGMENTS).contains(&body.len()),
            "snake body must have {}..={} segments, got {}",
            SNAKE_MIN_SEGMENTS,
            SNAKE_MAX_SEGMENTS,
            body.len()
        );
        Payload::Snake {
            body: body.iter().copied().collect(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Payload::Patrol { .. } => EntityKind::Patrol,
            Payload::Bomb { .. } => EntityKind::Bomb,
            Payload::Snake { .. } => EntityKind::Snake,
        }
    }

    /// Call `f` for every cell this entity draws, in draw order.
    ///
    /// Snakes draw their body tail first and the head last, so the head glyph
    /// wins if a segment ever overlaps it.
    pub fn for_each_glyph(&self, position: Vec2, mut f: impl FnMut(Vec2, Glyph)) {
        match self {
            Payload::Patrol { .. } => f(position, Glyph::Soldier),
            Payload::Bomb { ticks_remaining } => f(position, Glyph::Bomb(*ticks_remaining)),
            Payload::Snake { body } => {
                if let Some((head, segments)) = body.split_last() {
                    for &segment in segments {
                        f(segment, Glyph::SnakeBody);
                    }
                    f(*head, Glyph::SnakeHead);
                }
            }
        }
    }
}
