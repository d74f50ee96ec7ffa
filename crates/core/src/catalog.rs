//! Built-in levels.

use crate::level::{LevelDef, Spawn};
use crate::types::Vec2;

/// Level loaded when none is requested.
pub const DEFAULT_LEVEL: &str = "corridor";

const CORRIDOR: LevelDef = LevelDef {
    name: "corridor",
    rows: &[
        "    #     ",
        "    #   ##",
        "    #   ##",
        "    ##  ##",
        "          ",
    ],
    player_start: Vec2::new(4, 4),
    spawns: &[
        Spawn::Patrol {
            origin: Vec2::new(6, 0),
            amplitude: Vec2::new(0, 3),
            direction: 1,
        },
        Spawn::Patrol {
            origin: Vec2::new(0, 1),
            amplitude: Vec2::new(3, 0),
            direction: 1,
        },
        Spawn::Bomb {
            at: Vec2::new(2, 3),
            ticks: 6,
        },
        Spawn::Bomb {
            at: Vec2::new(9, 4),
            ticks: 9,
        },
    ],
};

const BOMBS: LevelDef = LevelDef {
    name: "bombs",
    rows: &[
        "          ",
        "##########",
        "          ",
        "##########",
        "          ",
    ],
    player_start: Vec2::new(4, 2),
    spawns: &[
        Spawn::Bomb {
            at: Vec2::new(1, 2),
            ticks: 3,
        },
        Spawn::Bomb {
            at: Vec2::new(7, 2),
            ticks: 5,
        },
        Spawn::Bomb {
            at: Vec2::new(9, 2),
            ticks: 9,
        },
        Spawn::Patrol {
            origin: Vec2::new(0, 0),
            amplitude: Vec2::new(9, 0),
            direction: 1,
        },
        Spawn::Patrol {
            origin: Vec2::new(9, 4),
            amplitude: Vec2::new(-9, 0),
            direction: 1,
        },
    ],
};

const SNAKE: LevelDef = LevelDef {
    name: "snake",
    rows: &[
        "                    ",
        "  ##          ##    ",
        "  #            #    ",
        "       ####         ",
        "                    ",
        "                    ",
        "       ####         ",
        "  #            #    ",
        "  ##          ##    ",
        "                    ",
    ],
    player_start: Vec2::new(2, 9),
    spawns: &[
        Spawn::Snake {
            body: &[
                Vec2::new(16, 0),
                Vec2::new(17, 0),
                Vec2::new(18, 0),
                Vec2::new(19, 0),
            ],
        },
        Spawn::Patrol {
            origin: Vec2::new(5, 5),
            amplitude: Vec2::new(10, 0),
            direction: 1,
        },
        Spawn::Bomb {
            at: Vec2::new(10, 4),
            ticks: 8,
        },
    ],
};

pub const BUILTIN_LEVELS: &[LevelDef] = &[CORRIDOR, BOMBS, SNAKE];

/// Look up a built-in level by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static LevelDef> {
    BUILTIN_LEVELS
        .iter()
        .find(|level| level.name.eq_ignore_ascii_case(name))
}
