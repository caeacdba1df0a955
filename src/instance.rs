use crate::canvas::CanvasSurface;
use crate::core::{Animator, StartOutcome, TrailConfig};
use crate::events::{self, Listener};
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One running trail background bound to a canvas.
pub struct Instance {
    canvas: web::HtmlCanvasElement,
    animator: Rc<RefCell<Animator>>,
    listeners: RefCell<Vec<Listener>>,
}

thread_local! {
    // At most one instance per canvas element.
    static RUNNING: RefCell<Vec<Rc<Instance>>> = const { RefCell::new(Vec::new()) };
}

fn running_on(canvas: &web::HtmlCanvasElement) -> Option<Rc<Instance>> {
    RUNNING.with(|r| {
        r.borrow()
            .iter()
            .find(|i| js_sys::Object::is(i.canvas.as_ref(), canvas.as_ref()))
            .cloned()
    })
}

/// Start a trail background on `canvas`, or return the one already running there.
pub fn start(canvas: &web::HtmlCanvasElement, config: TrailConfig) -> anyhow::Result<Rc<Instance>> {
    if let Some(existing) = running_on(canvas) {
        log::info!("[trails] already running on this canvas; reusing");
        return Ok(existing);
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut surface = CanvasSurface::new(canvas)?;
    let mut animator = Animator::from_entropy(config)?;

    events::window::fit_to_viewport(&animator, &mut surface);
    if animator.start() == StartOutcome::AlreadyRunning {
        anyhow::bail!("fresh animator reported already running");
    }
    log::info!(
        "[trails] start: {} trails x {} nodes",
        animator.config().trails,
        animator.config().size
    );

    let animator = Rc::new(RefCell::new(animator));
    let surface = Rc::new(RefCell::new(surface));

    let mut listeners = events::wire_pointer_handlers(&document, &animator);
    listeners.extend(events::wire_viewport_handlers(&window, &animator, &surface));

    frame::start_loop(animator.clone(), surface);

    let instance = Rc::new(Instance {
        canvas: canvas.clone(),
        animator,
        listeners: RefCell::new(listeners),
    });
    RUNNING.with(|r| r.borrow_mut().push(instance.clone()));
    Ok(instance)
}

impl Instance {
    /// Remove every listener and let the frame loop wind down. Idempotent.
    pub fn stop(self: &Rc<Self>) {
        let detached = {
            let mut l = self.listeners.borrow_mut();
            let n = l.len();
            l.clear();
            n
        };
        let was_running = self.animator.borrow_mut().stop();
        RUNNING.with(|r| r.borrow_mut().retain(|i| !Rc::ptr_eq(i, self)));
        if was_running {
            log::info!("[trails] stop: removed {} listeners", detached);
        }
    }

    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    pub fn frame(&self) -> u64 {
        self.animator.borrow().frame()
    }
}
