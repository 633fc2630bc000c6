//! Browser host: timer, key listeners and DOM overlay

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::renderer::{Frame, RenderState, build_frame, debug_text};
use crate::settings::Settings;
use crate::sim::{GameEvent, InputEvent, Key, SceneState, entries_or_default};

/// DOM ids the page must provide
pub mod ids {
    pub const CANVAS: &str = "canvas";
    pub const SCORE: &str = "score";
    pub const DIALOG: &str = "dialog";
    pub const DIALOG_TITLE: &str = "dialog-title";
    pub const DIALOG_DESCRIPTION: &str = "dialog-description";
    pub const DIALOG_OK: &str = "dialog-ok";
    /// Optional
    pub const DEBUG: &str = "debug";
}

fn js_err(e: JsValue) -> Error {
    Error::Js(format!("{:?}", e))
}

fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_owned()))
}

/// DOM elements for the text parts of the frame
struct Hud {
    score: Element,
    dialog: Element,
    dialog_title: Element,
    dialog_description: Element,
    debug: Option<Element>,
}

impl Hud {
    fn bind(document: &Document, show_debug: bool) -> Result<Self> {
        let debug = if show_debug {
            document.get_element_by_id(ids::DEBUG)
        } else {
            None
        };
        Ok(Self {
            score: element(document, ids::SCORE)?,
            dialog: element(document, ids::DIALOG)?,
            dialog_title: element(document, ids::DIALOG_TITLE)?,
            dialog_description: element(document, ids::DIALOG_DESCRIPTION)?,
            debug,
        })
    }

    fn update(&self, frame: &Frame, state: &SceneState) {
        self.score.set_text_content(Some(&frame.score_text));

        match &frame.dialog {
            Some(view) => {
                self.dialog_title.set_text_content(Some(&view.title));
                self.dialog_description
                    .set_text_content(Some(&view.description));
                let _ = self.dialog.set_attribute("class", "");
            }
            None => {
                let _ = self.dialog.set_attribute("class", "hidden");
            }
        }

        if let Some(el) = &self.debug {
            let _ = el.set_attribute("class", "");
            el.set_text_content(Some(&debug_text(state)));
        }
    }
}

/// Scene instance holding all host-side state
pub struct Game {
    pub state: SceneState,
    render_state: Option<RenderState>,
    hud: Hud,
}

impl Game {
    /// Apply one event, then repaint
    fn handle(&mut self, event: InputEvent) {
        let events = self.state.apply(event);
        for event in &events {
            if let GameEvent::Collected { .. } = event {
                if self.state.is_complete() {
                    log::info!("All {} entries collected", self.state.total());
                }
            }
        }
        if event == InputEvent::Tick || event == InputEvent::DismissDialog {
            self.present();
        }
    }

    fn present(&mut self) {
        let frame = build_frame(&self.state);
        if let Some(render_state) = self.render_state.as_mut() {
            match render_state.render(&frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
        self.hud.update(&frame, &self.state);
    }
}

/// Registration of the timer and listeners.
///
/// `stop` (or dropping the handle) clears the interval and removes every
/// listener. It runs at most once. A handle whose registration failed
/// halfway is torn down the same way.
pub struct SceneHandle {
    window: Window,
    interval_id: Option<i32>,
    on_tick: Closure<dyn FnMut()>,
    on_key_down: Closure<dyn FnMut(KeyboardEvent)>,
    on_key_up: Closure<dyn FnMut(KeyboardEvent)>,
    dismiss_button: Element,
    on_dismiss: Closure<dyn FnMut(MouseEvent)>,
    stopped: bool,
}

impl SceneHandle {
    fn register(&mut self) -> Result<()> {
        self.window
            .add_event_listener_with_callback("keydown", self.on_key_down.as_ref().unchecked_ref())
            .map_err(js_err)?;
        self.window
            .add_event_listener_with_callback("keyup", self.on_key_up.as_ref().unchecked_ref())
            .map_err(js_err)?;
        self.dismiss_button
            .add_event_listener_with_callback("click", self.on_dismiss.as_ref().unchecked_ref())
            .map_err(js_err)?;

        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.on_tick.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            )
            .map_err(js_err)?;
        self.interval_id = Some(id);
        Ok(())
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
        // Removing a listener that was never added is a no-op
        let _ = self.window.remove_event_listener_with_callback(
            "keydown",
            self.on_key_down.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.on_key_up.as_ref().unchecked_ref());
        let _ = self
            .dismiss_button
            .remove_event_listener_with_callback("click", self.on_dismiss.as_ref().unchecked_ref());
        log::info!("Scene stopped: timer and listeners removed");
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Register the 60 Hz timer and the key/click listeners
pub fn start(window: &Window, document: &Document, game: Rc<RefCell<Game>>) -> Result<SceneHandle> {
    let dismiss_button = element(document, ids::DIALOG_OK)?;

    let on_tick = {
        let game = game.clone();
        Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().handle(InputEvent::Tick);
        })
    };

    let on_key_down = {
        let game = game.clone();
        Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_dom_key(&event.key()) {
                // Arrow keys would otherwise scroll the page
                event.prevent_default();
                game.borrow_mut().handle(InputEvent::KeyDown(key));
            }
        })
    };

    let on_key_up = {
        let game = game.clone();
        Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_dom_key(&event.key()) {
                game.borrow_mut().handle(InputEvent::KeyUp(key));
            }
        })
    };

    let on_dismiss = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        game.borrow_mut().handle(InputEvent::DismissDialog);
    });

    let mut handle = SceneHandle {
        window: window.clone(),
        interval_id: None,
        on_tick,
        on_key_down,
        on_key_up,
        dismiss_button,
        on_dismiss,
        stopped: false,
    };
    handle.register()?;

    log::info!("Scene started: tick every {} ms", TICK_INTERVAL_MS);
    Ok(handle)
}

/// Create the WebGPU painter for the canvas
async fn init_renderer(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<RenderState> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
        .map_err(|e| Error::Surface(e.to_string()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| Error::Adapter(e.to_string()))?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(surface, &adapter, width, height).await
}

/// Mount the scene into the page and start it
pub async fn run(settings: &Settings) -> Result<SceneHandle> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    if let Some(loading) = document.get_element_by_id("loading") {
        let _ = loading.set_attribute("class", "hidden");
    }

    let canvas: HtmlCanvasElement = element(&document, ids::CANVAS)?
        .dyn_into()
        .map_err(|_| Error::NotACanvas(ids::CANVAS.to_owned()))?;

    // Backing store at device resolution; the scene maps onto it whole
    let dpr = window.device_pixel_ratio();
    let width = (SCENE_WIDTH as f64 * dpr) as u32;
    let height = (SCENE_HEIGHT as f64 * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let seed = settings.seed_or(js_sys::Date::now() as u64);
    let state = SceneState::new(seed, &entries_or_default());

    let render_state = match init_renderer(canvas, width, height).await {
        Ok(render_state) => Some(render_state),
        Err(e) => {
            log::error!("WebGPU unavailable, scene will not be drawn: {}", e);
            None
        }
    };

    let hud = Hud::bind(&document, settings.show_debug)?;
    let game = Rc::new(RefCell::new(Game {
        state,
        render_state,
        hud,
    }));
    game.borrow_mut().present();

    start(&window, &document, game)
}
