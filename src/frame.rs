use crate::canvas::CanvasSurface;
use crate::core::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &TickSlot) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    match slot.borrow().as_ref() {
        Some(cb) => w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
        None => false,
    }
}

/// Drive `animator` from requestAnimationFrame until a tick reports it has
/// stopped. The closure releases itself on that last frame.
pub fn start_loop(animator: Rc<RefCell<Animator>>, surface: Rc<RefCell<CanvasSurface>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (keep_going, frame) = {
            let mut a = animator.borrow_mut();
            (a.tick(&mut *surface.borrow_mut()), a.frame())
        };
        if !keep_going || !request_frame(&tick_clone) {
            log::debug!("[frame] loop ended at frame {}", frame);
            _ = tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    if !request_frame(&tick) {
        log::error!("requestAnimationFrame unavailable; trails will not animate");
        _ = tick.borrow_mut().take();
    }
}
