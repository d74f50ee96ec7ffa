use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_hazards::core::catalog;
use tui_hazards::term::GameView;
use tui_hazards::types::{Command, Direction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

const WALK: [Direction; 6] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

#[test]
fn turns_and_rendering_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut games = Vec::new();
    for level in catalog::BUILTIN_LEVELS {
        games.push(level.load().unwrap());
    }
    let pristine = games.clone();
    let view = GameView::default();
    let mut fbs: Vec<_> = games.iter().map(|g| view.render(g)).collect();

    // Warm-up.
    for game in &mut games {
        let _ = game.apply(Command::Move(Direction::Left));
    }

    let allocs = with_alloc_counting(|| {
        for round in 0..100 {
            for (i, game) in games.iter_mut().enumerate() {
                let _ = game.apply(Command::Move(WALK[round % WALK.len()]));
                let _ = game.apply(Command::Noop);
                view.render_into(game, &mut fbs[i]);
                if game.game_over() {
                    *game = pristine[i].clone();
                }
            }
        }
    });

    assert!(allocs == 0);
}
