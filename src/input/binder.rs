//! Event handler registry
//!
//! One active handler per event kind. Registering a second handler for the
//! same kind replaces the first.

use tracing::debug;

use crate::renderer::RenderResult;

use super::{EventKind, InputEvent};

/// A boxed event handler receiving the dispatch context `C`
pub type Handler<C> = Box<dyn FnMut(&mut C, &InputEvent) -> RenderResult<()>>;

/// Holds the key-press, key-release and click handlers
pub struct InputBinder<C> {
    key_press: Option<Handler<C>>,
    key_release: Option<Handler<C>>,
    click: Option<Handler<C>>,
}

impl<C> Default for InputBinder<C> {
    fn default() -> Self {
        Self {
            key_press: None,
            key_release: None,
            click: None,
        }
    }
}

impl<C> InputBinder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the key-press handler. Returns true if one was replaced.
    pub fn on_key_press<F>(&mut self, handler: F) -> bool
    where
        F: FnMut(&mut C, &InputEvent) -> RenderResult<()> + 'static,
    {
        self.bind(EventKind::KeyPress, Box::new(handler))
    }

    /// Register the key-release handler. Returns true if one was replaced.
    pub fn on_key_release<F>(&mut self, handler: F) -> bool
    where
        F: FnMut(&mut C, &InputEvent) -> RenderResult<()> + 'static,
    {
        self.bind(EventKind::KeyRelease, Box::new(handler))
    }

    /// Register the click handler. Returns true if one was replaced.
    pub fn on_click<F>(&mut self, handler: F) -> bool
    where
        F: FnMut(&mut C, &InputEvent) -> RenderResult<()> + 'static,
    {
        self.bind(EventKind::Click, Box::new(handler))
    }

    /// Install `handler` for `kind`, replacing any previous one
    pub fn bind(&mut self, kind: EventKind, handler: Handler<C>) -> bool {
        let replaced = self.slot(kind).replace(handler).is_some();
        if replaced {
            debug!(?kind, "replaced input handler");
        }
        replaced
    }

    /// Remove the handler for `kind`. Returns true if there was one.
    pub fn unbind(&mut self, kind: EventKind) -> bool {
        self.slot(kind).take().is_some()
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::KeyPress => self.key_press.is_some(),
            EventKind::KeyRelease => self.key_release.is_some(),
            EventKind::Click => self.click.is_some(),
        }
    }

    /// Run the handler for the event's kind. Returns false when none is bound.
    pub fn dispatch(&mut self, ctx: &mut C, event: &InputEvent) -> RenderResult<bool> {
        match self.slot(event.kind) {
            Some(handler) => {
                handler(ctx, event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn slot(&mut self, kind: EventKind) -> &mut Option<Handler<C>> {
        match kind {
            EventKind::KeyPress => &mut self.key_press,
            EventKind::KeyRelease => &mut self.key_release,
            EventKind::Click => &mut self.click,
        }
    }
}
