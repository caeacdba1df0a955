pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod instance;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

// Browser-facing API. The physics and drawing logic in `core` builds and is
// tested on any target.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::core::{TrailConfig, DEFAULT_CANVAS_ID};
    use crate::{dom, instance};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    /// Handle to a running trail background. `stop` is the cleanup the host
    /// calls on unmount.
    #[wasm_bindgen]
    pub struct TrailHandle {
        inner: Rc<instance::Instance>,
    }

    #[wasm_bindgen]
    impl TrailHandle {
        /// Remove all listeners and halt the frame loop. Safe to call twice.
        pub fn stop(&self) {
            self.inner.stop();
        }

        #[wasm_bindgen(js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.inner.is_running()
        }

        /// Frames rendered since start, counting from 1.
        pub fn frame(&self) -> f64 {
            self.inner.frame() as f64
        }
    }

    #[wasm_bindgen(start)]
    pub fn boot() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("trail-canvas loaded");
        Ok(())
    }

    /// Start trails on `canvas`. Returns `undefined` when the canvas has no
    /// usable 2D context; starting an already animated canvas returns a
    /// handle to the running instance.
    #[wasm_bindgen]
    pub fn start(canvas: web::HtmlCanvasElement) -> Option<TrailHandle> {
        match instance::start(&canvas, TrailConfig::default()) {
            Ok(inner) => Some(TrailHandle { inner }),
            Err(e) => {
                log::warn!("[trails] not started: {:#}", e);
                None
            }
        }
    }

    /// Start trails on the canvas with element id `canvas_id`, or `#canvas`
    /// when empty.
    #[wasm_bindgen]
    pub fn mount(canvas_id: &str) -> Option<TrailHandle> {
        let id = if canvas_id.is_empty() {
            DEFAULT_CANVAS_ID
        } else {
            canvas_id
        };
        match dom::canvas_by_id(id) {
            Ok(canvas) => start(canvas),
            Err(e) => {
                log::warn!("[trails] not mounted: {:#}", e);
                None
            }
        }
    }
}
