//! WebAssembly entry point and platform-specific code.

use vitrine_core::{EscapeSignal, KeyHook, KeyHookGuard, ESCAPE_KEY};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::assets::resolve_against;
use crate::error::AppError;

/// Id of the canvas element the app renders into.
const CANVAS_ID: &str = "vitrine-canvas";

/// Key hook backed by a `keydown` listener on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowKeyHook;

impl KeyHook for WindowKeyHook {
    fn install(&self, signal: EscapeSignal) -> KeyHookGuard {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, Escape will not close the viewer");
            return KeyHookGuard::detached();
        };

        let on_keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == ESCAPE_KEY {
                signal.raise();
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        if let Err(e) = window
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach keydown listener: {:?}", e);
            return KeyHookGuard::detached();
        }
        log::debug!("keydown listener attached");

        KeyHookGuard::new(move || {
            if let Err(e) = window.remove_event_listener_with_callback(
                "keydown",
                on_keydown.as_ref().unchecked_ref(),
            ) {
                log::warn!("Failed to detach keydown listener: {:?}", e);
            } else {
                log::debug!("keydown listener detached");
            }
        })
    }
}

/// Viewport size in physical pixels.
pub fn viewport_physical_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    let dpr = window.device_pixel_ratio();
    Some(((width * dpr) as u32, (height * dpr) as u32))
}

/// Find or create the canvas the app draws into, sized to the viewport.
pub fn attach_canvas() -> Result<web_sys::HtmlCanvasElement, AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Canvas("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Canvas("no document".to_string()))?;

    // Remove loading indicator
    if let Some(loading) = document.get_element_by_id("loading") {
        loading.remove();
    }

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .or_else(|| {
            let app_div = document.get_element_by_id("app")?;
            let canvas = document.create_element("canvas").ok()?;
            canvas.set_id(CANVAS_ID);
            app_div.append_child(&canvas).ok()?;
            canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
        })
        .ok_or_else(|| AppError::Canvas(format!("no #{} canvas and no #app container", CANVAS_ID)))?;

    if let Some((width, height)) = viewport_physical_size() {
        canvas.set_width(width);
        canvas.set_height(height);
        log::info!("Canvas created: {}x{} physical", width, height);
    }
    let style = canvas.style();
    for (property, value) in [
        ("width", "100%"),
        ("height", "100%"),
        ("display", "block"),
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
    ] {
        let _ = style.set_property(property, value);
    }

    Ok(canvas)
}

/// Resolve a relative asset path against the page origin.
pub fn resolve_asset_url(src: &str) -> String {
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => resolve_against(&origin, src),
        None => src.to_string(),
    }
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {}", e).into());
    }

    log::info!("Starting Vitrine (WASM)");

    if let Err(e) = crate::App::run(crate::AppConfig::default()).await {
        log::error!("{}", e);
    }
}
