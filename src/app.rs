//! Entry point: boots logging, reads configuration, attaches every behavior.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::behaviors::Page;
use crate::behaviors::active_link::ActiveLink;
use crate::behaviors::cards::Cards;
use crate::behaviors::certificate_modal::CertificateModal;
use crate::behaviors::hero::Hero;
use crate::behaviors::navbar::Navbar;
use crate::behaviors::navigation::Navigation;
use crate::behaviors::smooth_scroll::SmoothScroll;
use crate::behaviors::theme::ThemeManager;
use crate::behaviors::visibility::Visibility;
use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::BindError;

thread_local! {
    static MOUNTED: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

/// Every behavior bound to the page. Dropping it detaches them all.
pub struct Portfolio {
    pub navigation: Navigation,
    pub smooth_scroll: SmoothScroll,
    pub navbar: Navbar,
    pub visibility: Visibility,
    pub active_link: ActiveLink,
    pub theme: ThemeManager,
    pub certificate_modal: CertificateModal,
    pub hero: Hero,
    pub cards: Cards,
}

impl Portfolio {
    /// Attach all behaviors to `page`.
    ///
    /// A page missing a required element fails here with the offending
    /// selector; behaviors attached before the failure are dropped again, so
    /// nothing stays bound.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] raised by any behavior.
    pub fn mount(page: &Page) -> Result<Self, BindError> {
        Ok(Self {
            navigation: Navigation::attach(page)?,
            smooth_scroll: SmoothScroll::attach(page)?,
            navbar: Navbar::attach(page)?,
            visibility: Visibility::attach(page)?,
            active_link: ActiveLink::attach(page)?,
            theme: ThemeManager::attach(page)?,
            certificate_modal: CertificateModal::attach(page)?,
            hero: Hero::attach(page)?,
            cards: Cards::attach(page)?,
        })
    }
}

/// Read the inline JSON config block, if the page has one.
///
/// Returns the defaults plus any parse error, so the caller can report it once
/// logging is up.
fn load_config() -> (PageConfig, Option<serde_json::Error>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    match raw.map(|text| PageConfig::from_json(&text)) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (PageConfig::default(), Some(err)),
        None => (PageConfig::default(), None),
    }
}

/// WASM entry point, run once when the module is instantiated.
///
/// # Errors
///
/// Surfaces a [`BindError`] to the JS loader as a thrown string.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (config, config_err) = load_config();
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::debug!("keeping existing logger: {err}");
    }
    if let Some(err) = config_err {
        log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
    }

    let page = Page::current(config)?;
    let portfolio = Portfolio::mount(&page).inspect_err(|err| log::error!("portfolio setup failed: {err}"))?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(portfolio));

    log::info!("Welcome to Vaishnavi B R's Portfolio!");
    log::info!("Built with passion and modern web technologies");
    Ok(())
}

/// Detach every behavior. Safe to call more than once.
#[wasm_bindgen]
pub fn unmount() {
    if MOUNTED.with(|slot| slot.borrow_mut().take()).is_some() {
        log::info!("portfolio behaviors detached");
    }
}

/// Whether the behaviors are currently attached.
#[wasm_bindgen(js_name = isMounted)]
#[must_use]
pub fn is_mounted() -> bool {
    MOUNTED.with(|slot| slot.borrow().is_some())
}

/// Current theme name (`"light"` or `"dark"`), if mounted.
#[wasm_bindgen(js_name = currentTheme)]
#[must_use]
pub fn current_theme() -> Option<String> {
    MOUNTED.with(|slot| slot.borrow().as_ref().map(|p| p.theme.current().to_string()))
}

/// Re-read the document after `unmount`, e.g. when the page markup was swapped.
///
/// # Errors
///
/// Same as [`start`], minus logger setup.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    unmount();
    let (config, _) = load_config();
    let page = Page::current(config)?;
    let portfolio = Portfolio::mount(&page)?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(portfolio));
    Ok(())
}
