//! Certificate modal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::DEFAULT_CERTIFICATE_TITLE;
use crate::util::schedule::PendingTasks;

/// What a clicked certificate card asks the modal to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRequest {
    pub url: String,
    pub title: String,
}

impl CertificateRequest {
    /// Build a request from a card's attributes.
    ///
    /// Returns `None` when the card carries no usable URL. A missing or empty
    /// heading falls back to the default title.
    #[must_use]
    pub fn from_card(url: Option<String>, heading: Option<String>) -> Option<Self> {
        let url = url.filter(|u| !u.trim().is_empty())?;
        let title = heading
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_CERTIFICATE_TITLE.to_owned());
        Some(Self { url, title })
    }

    /// Text for the modal's title label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Certificate - {}", self.title)
    }
}

/// Visible state of the modal and its embedded frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    source: String,
    label: Option<String>,
}

impl ModalState {
    pub fn open(&mut self, request: &CertificateRequest) {
        self.open = true;
        self.source.clone_from(&request.url);
        self.label = Some(request.label());
    }

    /// Hide the modal. The frame source stays until [`Self::clear_source`].
    /// Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Deferred half of closing: blank the frame.
    pub fn clear_source(&mut self) {
        self.source.clear();
    }

    /// Whether a key press should dismiss the modal.
    #[must_use]
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.open && key == "Escape"
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Slot holding the deferred frame clear.
const CLEAR_SLOT: &str = "frame";

/// Identifies one scheduled clear. Only the most recent ticket may clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearTicket(u64);

/// Modal state plus the deferred clear it owns.
///
/// `H` is the scheduled task's handle, cancelled when dropped. Opening drops
/// the pending clear; each open or close moves to a new generation so a clear
/// that fires late cannot blank a newer certificate.
#[derive(Debug)]
pub struct ModalController<H> {
    state: ModalState,
    pending: PendingTasks<&'static str, H>,
    generation: u64,
}

impl<H> Default for ModalController<H> {
    fn default() -> Self {
        Self { state: ModalState::default(), pending: PendingTasks::new(), generation: 0 }
    }
}

impl<H> ModalController<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, request: &CertificateRequest) {
        self.pending.cancel(&CLEAR_SLOT);
        self.generation += 1;
        self.state.open(request);
    }

    /// Hide the modal and schedule the frame clear through `schedule`, which
    /// receives the ticket the task must hand back to [`Self::fire_clear`].
    pub fn close<F>(&mut self, schedule: F) -> ClearTicket
    where
        F: FnOnce(ClearTicket) -> H,
    {
        self.state.close();
        self.generation += 1;
        let ticket = ClearTicket(self.generation);
        self.pending.replace(CLEAR_SLOT, schedule(ticket));
        ticket
    }

    /// Run a scheduled clear. Returns `true` if the frame should be blanked.
    pub fn fire_clear(&mut self, ticket: ClearTicket) -> bool {
        if ticket.0 != self.generation || self.state.is_open() {
            log::debug!("stale certificate clear ignored");
            return false;
        }
        self.state.clear_source();
        true
    }

    #[must_use]
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.state.closes_on_key(key)
    }

    #[must_use]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    #[must_use]
    pub fn has_pending_clear(&self) -> bool {
        self.pending.contains(&CLEAR_SLOT)
    }

    /// Drop the pending clear without running it.
    pub fn cancel_all(&mut self) {
        self.pending.cancel_all();
    }
}
