use super::{push_listener, Listener};
use crate::core::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page coordinates of the first active touch.
#[inline]
fn first_touch_page(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    let t = ev.touches().get(0)?;
    Some((t.page_x() as f64, t.page_y() as f64))
}

/// Route mouse and touch movement on `document` into the animator's pointer.
pub fn wire_pointer_handlers(
    document: &web::Document,
    animator: &Rc<RefCell<Animator>>,
) -> Vec<Listener> {
    let target: &web::EventTarget = document.as_ref();
    let mut listeners = Vec::with_capacity(3);

    let a = animator.clone();
    push_listener(&mut listeners, target, "mousemove", move |ev: web::Event| {
        if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
            a.borrow_mut()
                .set_pointer(m.client_x() as f64, m.client_y() as f64);
        }
        ev.prevent_default();
    });

    let a = animator.clone();
    push_listener(&mut listeners, target, "touchmove", move |ev: web::Event| {
        if let Some((x, y)) = ev.dyn_ref::<web::TouchEvent>().and_then(first_touch_page) {
            a.borrow_mut().set_pointer(x, y);
        }
        ev.prevent_default();
    });

    // Multi-touch gestures on start are left alone.
    let a = animator.clone();
    push_listener(&mut listeners, target, "touchstart", move |ev: web::Event| {
        if let Some(t) = ev.dyn_ref::<web::TouchEvent>() {
            if t.touches().length() == 1 {
                if let Some((x, y)) = first_touch_page(t) {
                    a.borrow_mut().set_pointer(x, y);
                }
            }
        }
    });

    listeners
}
