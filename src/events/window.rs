use super::{push_listener, Listener};
use crate::canvas::CanvasSurface;
use crate::core::{Animator, Surface};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn fit_to_viewport(animator: &Animator, surface: &mut CanvasSurface) {
    if let Some((w, h)) = dom::viewport_inner_size() {
        animator.fit_viewport(surface, w, h);
        log::debug!("[canvas] backing size {}x{}", surface.width(), surface.height());
    }
}

/// Keep the canvas covering the viewport across window resizes and refocus.
pub fn wire_viewport_handlers(
    window: &web::Window,
    animator: &Rc<RefCell<Animator>>,
    surface: &Rc<RefCell<CanvasSurface>>,
) -> Vec<Listener> {
    let target: &web::EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(2);
    for kind in ["resize", "focus"] {
        let a = animator.clone();
        let s = surface.clone();
        push_listener(&mut listeners, target, kind, move |_ev: web::Event| {
            fit_to_viewport(&a.borrow(), &mut s.borrow_mut());
        });
    }
    listeners
}
