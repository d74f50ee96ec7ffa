//! Occupancy and player movement validation

use tui_hazards::core::{catalog, parse_occupancy, GameState, OccupancyMap};
use tui_hazards::types::{Direction, Vec2, MAP_CAPACITY};

#[test]
fn test_new_map_is_all_free() {
    let map = OccupancyMap::new(20, 10);
    for y in 0..10 {
        for x in 0..20 {
            let pos = Vec2::new(x, y);
            assert!(!map.is_blocked(pos), "({}, {}) should be free", x, y);
            assert!(map.is_walkable(pos));
        }
    }
    assert_eq!(map.blocked_count(), 0);
}

#[test]
fn test_mark_blocked_out_of_bounds() {
    let mut map = OccupancyMap::new(4, 4);
    assert!(!map.mark_blocked(Vec2::new(-1, 0)));
    assert!(!map.mark_blocked(Vec2::new(0, -1)));
    assert!(!map.mark_blocked(Vec2::new(4, 0)));
    assert!(!map.mark_blocked(Vec2::new(0, 4)));
    assert_eq!(map.blocked_count(), 0);
}

#[test]
fn test_outside_cells_are_not_blocked_but_not_walkable() {
    let map = OccupancyMap::new(4, 4);
    for pos in [Vec2::new(-1, 0), Vec2::new(0, -1), Vec2::new(4, 3), Vec2::new(3, 4)] {
        assert!(!map.is_blocked(pos), "map only tracks interior cells");
        assert!(!map.is_walkable(pos), "{:?} is outside the grid", pos);
    }
}

#[test]
fn test_full_capacity_grid_is_accepted() {
    let map = OccupancyMap::new(16, (MAP_CAPACITY / 16) as u16);
    assert_eq!(map.width() as usize * map.height() as usize, MAP_CAPACITY);
}

/// Every move from every free cell succeeds exactly when the target is an
/// in-bounds floor cell; otherwise the player stays put.
#[test]
fn test_player_moves_match_layout_exhaustively() {
    let level = catalog::find("corridor").unwrap();
    let rows = level.rows;
    let map = parse_occupancy(rows).unwrap();

    let is_floor = |p: Vec2| {
        p.y >= 0
            && (p.y as usize) < rows.len()
            && p.x >= 0
            && (p.x as usize) < rows[p.y as usize].len()
            && rows[p.y as usize].as_bytes()[p.x as usize] == b' '
    };

    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            let start = Vec2::new(x, y);
            if !is_floor(start) {
                continue;
            }
            for dir in Direction::ALL {
                let mut game = GameState::new(map.clone(), start);
                let target = start + dir.delta();
                let moved = game.try_move_player(dir);

                assert_eq!(moved, is_floor(target), "{:?} -> {}", start, dir.as_str());
                let expected = if moved { target } else { start };
                assert_eq!(game.player().position, expected);
                if moved {
                    assert_eq!(game.player().facing, dir);
                }
            }
        }
    }
}
