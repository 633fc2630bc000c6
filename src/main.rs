//! CV Platformer entry point
//!
//! Web: mounts the scene into the page and keeps it running until `unmount`.
//! Native: replays a scripted run headlessly and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;

    use cv_platformer::Settings;
    use cv_platformer::platform::web::{self, SceneHandle};

    thread_local! {
        /// The mounted scene; dropping it tears the scene down
        static SCENE: RefCell<Option<SceneHandle>> = const { RefCell::new(None) };
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        if let Err(e) = console_log::init_with_level(settings.log_level.to_level()) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("CV Platformer starting...");

        match web::run(&settings).await {
            Ok(handle) => {
                SCENE.with(|scene| *scene.borrow_mut() = Some(handle));
                log::info!("CV Platformer running!");
            }
            Err(e) => log::error!("Failed to start scene: {}", e),
        }
    }

    pub fn unmount() {
        let handle = SCENE.with(|scene| scene.borrow_mut().take());
        match handle {
            Some(mut handle) => handle.stop(),
            None => log::warn!("unmount called with no scene mounted"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Stop the scene: clears the timer and removes the key listeners
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_game::unmount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cv_platformer::renderer::score_text;
    use cv_platformer::sim::{GameEvent, InputEvent, Key, SceneState, entries_or_default};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("CV Platformer (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let mut state = SceneState::new(2024, &entries_or_default());

    // Walk right, hopping every second; read each entry as it opens
    state.apply(InputEvent::KeyDown(Key::Right));
    for t in 0..20 * cv_platformer::consts::TICK_RATE_HZ {
        if t % 60 == 0 {
            state.apply(InputEvent::KeyDown(Key::Up));
        }
        for event in state.apply(InputEvent::Tick) {
            if let GameEvent::Collected { index } = event {
                let item = &state.collectibles[index];
                println!("{}: {}", item.title, item.description);
                state.apply(InputEvent::DismissDialog);
            }
        }
    }
    state.apply(InputEvent::KeyUp(Key::Right));

    log::info!(
        "Finished after {} ticks at x={:.0}: {}",
        state.time_ticks,
        state.player.pos.x,
        score_text(&state)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
