//! Owned event subscriptions.
//!
//! Each handle keeps its closure alive and undoes the registration on drop,
//! so dropping a behavior detaches everything it bound.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::ObserverSpec;
use crate::error::BindError;

/// A DOM event listener removed on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `kind` events on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Js`] if the browser rejects the registration.
    pub fn attach<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, BindError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.kind);
        }
    }
}

/// An intersection observer disconnected on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Create an observer that calls `on_enter` for every entry that is
    /// intersecting, passing the observer so the handler can unobserve.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Js`] if the options are rejected (e.g. a bad root margin).
    pub fn new<F>(spec: &ObserverSpec, mut on_enter: F) -> Result<Self, BindError>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&spec.threshold.into());
        if !spec.root_margin.is_empty() {
            options.set_root_margin(&spec.root_margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
