//! Meme Trail entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use meme_trail::input::{self, Command};
    use meme_trail::render::DomRenderer;
    use meme_trail::sim::{GameState, HeldDirs, RunPhase, Scheduler, advance, apply_command};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        sched: Scheduler,
        held: HeldDirs,
        /// Commands queued by event handlers, drained each frame
        pending: Vec<Command>,
        renderer: Option<DomRenderer>,
    }

    impl Game {
        fn new(seed: u64, renderer: Option<DomRenderer>) -> Self {
            Self {
                state: GameState::new(seed),
                sched: Scheduler::new(),
                held: HeldDirs::default(),
                pending: Vec::new(),
                renderer,
            }
        }

        /// Drain queued commands, then fire due timer tasks
        fn update(&mut self, now_ms: u64) {
            for cmd in std::mem::take(&mut self.pending) {
                apply_command(&mut self.state, &mut self.sched, cmd, now_ms);
            }
            advance(&mut self.state, &mut self.sched, self.held, now_ms);
        }

        fn render(&mut self) {
            if let Some(renderer) = self.renderer.as_mut() {
                let snap = self.state.snapshot();
                renderer.render(&snap);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Meme Trail starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let renderer = DomRenderer::new(document);
        if renderer.is_none() {
            log::warn!("no #arena element found; simulation runs unrendered");
        }
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Meme Trail running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: movement keys go into the held set, command keys into the queue
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                if let Some(dir) = input::movement_binding(&key) {
                    event.prevent_default();
                    g.held.set(dir, true);
                } else if let Some(cmd) = input::command_binding(&key) {
                    event.prevent_default();
                    g.pending.push(cmd);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held movement keys
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(dir) = input::movement_binding(&event.key()) {
                    game.borrow_mut().held.set(dir, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.phase == RunPhase::Running {
                        g.pending.push(Command::TogglePause);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == RunPhase::Running {
                    g.pending.push(Command::TogglePause);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time as u64);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Meme Trail (native) starting...");

    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless scripted run on a synthetic clock: start, wander right, let the
/// meter drain out, restart once. Exercises the full dispatch path natively.
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use meme_trail::consts::*;
    use meme_trail::input::Command;
    use meme_trail::sim::{GameState, HeldDirs, RunPhase, Scheduler, advance, apply_command};

    let mut state = GameState::new(0xC0FFEE);
    let mut sched = Scheduler::new();

    apply_command(&mut state, &mut sched, Command::Start, 0);

    let held = HeldDirs {
        right: true,
        ..Default::default()
    };
    let mut now_ms: u64 = 0;
    while state.phase != RunPhase::GameOver && now_ms < 120_000 {
        now_ms += 16;
        advance(&mut state, &mut sched, held, now_ms);

        let pos = state.player.pos;
        assert!(pos.x >= 0.0 && pos.x <= ARENA_WIDTH - PLAYER_SIZE);
        assert!(state.health <= HEALTH_MAX);
    }

    log::info!("run ended at {}ms", now_ms);
    println!("final snapshot: {}", state.snapshot().to_json());

    apply_command(&mut state, &mut sched, Command::Restart, now_ms);
    let snap = state.snapshot();
    assert!(!snap.over && !snap.paused && !snap.speed_boost);
    println!("restarted: {}", snap.to_json());
}
