//! Certificate viewer overlay.
//!
//! Opened from a card's `.clickable-cert` icon; dismissed by the close
//! button, a click on the backdrop, or Escape. Hiding is immediate, blanking
//! the frame is deferred so an in-flight load is abandoned after the fade-out.
//! A reopen cancels that pending blank.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, HtmlIFrameElement, KeyboardEvent};

use super::Page;
use crate::consts::CLASS_SHOW;
use crate::error::BindError;
use crate::state::modal::{CertificateRequest, ModalController};
use crate::util::dom;
use crate::util::listener::Listener;

/// Elements and state shared by every modal trigger.
struct ModalView {
    modal: HtmlElement,
    frame: HtmlIFrameElement,
    title: Option<Element>,
    body: HtmlElement,
    controller: RefCell<ModalController<Timeout>>,
    clear_delay_ms: u32,
}

impl ModalView {
    fn open(&self, request: &CertificateRequest) {
        let mut controller = self.controller.borrow_mut();
        controller.open(request);
        let state = controller.state();
        self.frame.set_src(state.source());
        if let (Some(title), Some(label)) = (&self.title, state.label()) {
            title.set_text_content(Some(label));
        }
        dom::set_class(&self.modal, CLASS_SHOW, true);
        dom::set_style(&self.body, "overflow", "hidden");
        log::debug!("certificate opened: {}", request.url);
    }

    fn close(self: &Rc<Self>) {
        let delay = self.clear_delay_ms;
        self.controller.borrow_mut().close(|ticket| {
            let view = Rc::clone(self);
            Timeout::new(delay, move || {
                let clear = view.controller.borrow_mut().fire_clear(ticket);
                if clear {
                    view.frame.set_src("");
                }
            })
        });
        dom::set_class(&self.modal, CLASS_SHOW, false);
        dom::set_style(&self.body, "overflow", "auto");
    }
}

pub struct CertificateModal {
    view: Rc<ModalView>,
    _listeners: Vec<Listener>,
}

impl CertificateModal {
    /// Bind the modal, its dismissal triggers, and every certificate icon.
    ///
    /// # Errors
    ///
    /// Fails if the modal or its frame is missing or the frame is not an iframe.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let selectors = &page.config.selectors;
        let view = Rc::new(ModalView {
            modal: dom::required_by_id(&page.document, &selectors.modal_id)?,
            frame: dom::required_by_id(&page.document, &selectors.frame_id)?,
            title: dom::optional_by_id(&page.document, &selectors.title_id),
            body: dom::body(&page.document)?,
            controller: RefCell::new(ModalController::new()),
            clear_delay_ms: page.config.modal_clear_delay_ms,
        });
        let mut listeners = Vec::new();

        let icons: Vec<Element> = dom::all(&page.document, &selectors.clickable_cert)?;
        for icon in &icons {
            let (view, icon_el, config) = (Rc::clone(&view), icon.clone(), Rc::clone(&page.config));
            listeners.push(Listener::attach(icon, "click", move |event| {
                event.stop_propagation();
                let selectors = &config.selectors;
                let Some(card) = dom::closest(&icon_el, &selectors.cert_card) else {
                    log::warn!("certificate icon outside {}", selectors.cert_card);
                    return;
                };
                let heading = dom::optional_in::<Element>(&card, &selectors.cert_heading).and_then(|h| h.text_content());
                match CertificateRequest::from_card(card.get_attribute(&selectors.cert_url_attr), heading) {
                    Some(request) => view.open(&request),
                    None => log::debug!("certificate card has no {}", selectors.cert_url_attr),
                }
            })?);
        }

        if let Some(close) = dom::optional::<Element>(&page.document, &selectors.close_modal) {
            let view = Rc::clone(&view);
            listeners.push(Listener::attach(&close, "click", move |_| view.close())?);
        }

        {
            let view_for_click = Rc::clone(&view);
            listeners.push(Listener::attach(&view.modal, "click", move |event| {
                let backdrop: &EventTarget = &view_for_click.modal;
                if event.target().is_some_and(|target| &target == backdrop) {
                    view_for_click.close();
                }
            })?);
        }

        {
            let view = Rc::clone(&view);
            listeners.push(Listener::attach(&page.document, "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                    return;
                };
                let closes = view.controller.borrow().closes_on_key(&key);
                if closes {
                    view.close();
                }
            })?);
        }

        log::debug!("certificate modal bound to {} icons", icons.len());
        Ok(Self { view, _listeners: listeners })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.view.controller.borrow().state().is_open()
    }
}

impl Drop for CertificateModal {
    fn drop(&mut self) {
        // Timers hold an `Rc` to the view; release them to break the cycle.
        self.view.controller.borrow_mut().cancel_all();
    }
}
