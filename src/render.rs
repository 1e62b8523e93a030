//! Where things end up on screen.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::StageError;
use crate::model::Thing;
use crate::util::{self, Viewport};

/// Receives every thing once per frame after motion has been applied.
pub trait RenderSink {
    fn place(&mut self, thing: &Thing) -> Result<(), StageError>;
}

/// Positions thing elements (`#thing-{id}`) with a CSS transform centered on
/// the thing, and mirrors the selection flag into a `selected` class.
pub struct DomSink {
    window: Window,
    document: Document,
    viewport: Viewport,
}

impl DomSink {
    pub fn new(window: Window) -> Result<Self, StageError> {
        let document = window
            .document()
            .ok_or_else(|| StageError::Dom("window has no document".into()))?;
        let viewport = util::viewport(&window);
        Ok(Self {
            window,
            document,
            viewport,
        })
    }

    /// Pick up the current window size; call once per frame before placing.
    pub fn refresh_viewport(&mut self) {
        self.viewport = util::viewport(&self.window);
    }
}

impl RenderSink for DomSink {
    fn place(&mut self, thing: &Thing) -> Result<(), StageError> {
        let el: HtmlElement = self
            .document
            .get_element_by_id(&util::thing_element_id(thing.id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(StageError::MissingElement { id: thing.id })?;
        let bounds = el.get_bounding_client_rect();
        let transform =
            util::centered_translate(thing.position(), self.viewport, bounds.width(), bounds.height());
        el.style().set_property("transform", &transform)?;
        el.class_list().toggle_with_force("selected", thing.selected)?;
        Ok(())
    }
}
