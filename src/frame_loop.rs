//! Repeating `requestAnimationFrame` task.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs `tick` once per display refresh until the handle is dropped or `tick`
/// returns `false`.
pub struct FrameLoop {
    window: Window,
    raf_id: Rc<Cell<Option<i32>>>,
    closure_cell: FrameClosure,
}

impl FrameLoop {
    pub fn start(window: Window, mut tick: impl FnMut() -> bool + 'static) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure_cell: FrameClosure = Rc::new(RefCell::new(None));
        {
            let raf_id = raf_id.clone();
            let closure_cell_loop = closure_cell.clone();
            let window_loop = window.clone();
            *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                raf_id.set(None);
                if !tick() {
                    log::warn!("frame loop stopped");
                    return;
                }
                schedule(&window_loop, &closure_cell_loop, &raf_id);
            }) as Box<dyn FnMut()>));
        }
        schedule(&window, &closure_cell, &raf_id);
        Self {
            window,
            raf_id,
            closure_cell,
        }
    }
}

fn schedule(window: &Window, closure_cell: &FrameClosure, raf_id: &Rc<Cell<Option<i32>>>) {
    if let Some(cb) = closure_cell.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds a handle to its own cell; clearing it breaks the cycle.
        self.closure_cell.borrow_mut().take();
    }
}
