// SPDX-License-Identifier: MPL-2.0
//! The image load controller.
//!
//! [`ImageLoadController`] owns the settings, the [`LoadState`], the
//! [`RetryBudget`] and the tag of the outstanding request. It reacts to three
//! events (a settings update, a load success, a load failure) and drives a
//! [`RenderingSurface`] in response.
//!
//! A request is tried directly first. If the surface reports a failure the
//! same URL is requested once more through the CORS proxy; a second failure
//! is terminal until the URL changes.
//!
//! # Example
//!
//! ```
//! use image_display::config::Config;
//! use image_display::controller::ImageLoadController;
//! use image_display::domain::load::LoadState;
//! use image_display::host::RecordingSurface;
//!
//! let mut controller = ImageLoadController::new(RecordingSurface::default(), &Config::default());
//! controller.load_image();
//!
//! let direct = controller.active_source().unwrap().to_string();
//! controller.on_load_failed(&direct);
//! let proxied = controller.active_source().unwrap().to_string();
//! controller.on_load_succeeded(&proxied);
//!
//! assert_eq!(controller.state(), LoadState::LoadedViaProxy);
//! ```

mod message;

pub use message::Message;

use crate::application::port::{CrossOrigin, HostChannel, RenderingSurface, Visibility};
use crate::config::{Config, LoadConfig};
use crate::diagnostics::{DiagnosticEventKind, Outcome, Recorder};
use crate::domain::error::LoadError;
use crate::domain::load::{LoadPhase, LoadState, PendingRequest, RetryBudget};
use crate::presentation::Presentation;
use crate::proxy::ProxyRewriter;
use crate::settings::{Settings, SettingsPatch};
use std::cell::RefCell;
use std::rc::Rc;

/// Drives the direct → proxy → failed pipeline for one image element.
#[derive(Debug)]
pub struct ImageLoadController<S: RenderingSurface> {
    settings: Settings,
    state: LoadState,
    budget: RetryBudget,
    pending: Option<PendingRequest>,
    proxy: ProxyRewriter,
    load_config: LoadConfig,
    element_id: String,
    surface: S,
    diagnostics: Recorder,
}

impl<S: RenderingSurface> ImageLoadController<S> {
    /// Creates an idle controller with the configured initial settings.
    ///
    /// Nothing is requested until [`load_image`](Self::load_image) or a
    /// settings update changing the URL.
    pub fn new(surface: S, config: &Config) -> Self {
        Self {
            settings: config.initial_settings(),
            state: LoadState::Idle,
            budget: RetryBudget::new(),
            pending: None,
            proxy: config.proxy_rewriter(),
            load_config: config.load,
            element_id: config.element_id().to_string(),
            surface,
            diagnostics: Recorder::new(config.diagnostics_capacity()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Merges `patch` over the current settings.
    ///
    /// Presentation is always re-applied. A new load starts only when the
    /// URL changed; cosmetic updates never disturb an in-flight or displayed
    /// image. Returns whether a new load was started.
    pub fn apply_settings(&mut self, patch: &SettingsPatch) -> bool {
        let next = self.settings.merged(patch);
        let url_changed = next.image_url != self.settings.image_url;
        self.settings = next;

        self.diagnostics
            .record(DiagnosticEventKind::SettingsApplied { url_changed });
        self.surface.apply_presentation(&self.current_presentation());

        if url_changed {
            log::info!("Image URL changed to {:?}", self.settings.image_url);
            self.budget.reset();
            self.load_image();
        }
        url_changed
    }

    /// Starts the pipeline for the current URL, superseding any outstanding
    /// request.
    ///
    /// An empty URL fails immediately without any request.
    pub fn load_image(&mut self) {
        self.budget.reset();

        if !self.settings.has_url() {
            self.pending = None;
            self.fail(LoadError::EmptyUrl);
            return;
        }

        self.state = LoadState::Loading(LoadPhase::Direct);
        self.surface.set_visibility(&Visibility::loading());
        let url = self.settings.image_url.clone();
        self.request(url, LoadPhase::Direct);
    }

    /// Surface callback: `source` finished loading.
    ///
    /// Ignored unless `source` is the outstanding request.
    pub fn on_load_succeeded(&mut self, source: &str) {
        let Some(phase) = self.accept_callback(source, Outcome::Succeeded) else {
            return;
        };

        self.pending = None;
        self.state = LoadState::loaded_via(phase);
        log::info!("Image loaded ({}): {}", phase.as_str(), self.settings.image_url);

        self.surface.apply_presentation(&self.current_presentation());
        self.surface.set_visibility(&Visibility::revealed());
    }

    /// Surface callback: `source` failed to load.
    ///
    /// Ignored unless `source` is the outstanding request. The first failure
    /// for a URL moves to the proxy attempt; the second is terminal.
    pub fn on_load_failed(&mut self, source: &str) {
        if self.accept_callback(source, Outcome::Failed).is_none() {
            return;
        }

        if self.budget.try_spend() {
            log::warn!(
                "{}, trying CORS proxy for {}",
                LoadError::DirectLoadFailed,
                self.settings.image_url
            );
            let proxied = self.proxy.rewrite(&self.settings.image_url);
            self.state = LoadState::Loading(LoadPhase::Proxy);
            self.request(proxied, LoadPhase::Proxy);
        } else {
            self.pending = None;
            self.fail(LoadError::ProxyLoadFailed);
        }
    }

    /// Style directives for the current settings. Pure: no state change, no
    /// request.
    #[must_use]
    pub fn current_presentation(&self) -> Presentation {
        Presentation::from_settings(&self.settings, &self.element_id)
    }

    /// Single entry point for all external events.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::SettingsUpdate(patch) => {
                self.apply_settings(&patch);
            }
            Message::LoadSucceeded { source } => self.on_load_succeeded(&source),
            Message::LoadFailed { source } => self.on_load_failed(&source),
            Message::Reload => self.load_image(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the proxy attempt has been used for the current URL.
    #[must_use]
    pub fn retry_budget(&self) -> RetryBudget {
        self.budget
    }

    /// Source of the outstanding request, if one is in flight.
    #[must_use]
    pub fn active_source(&self) -> Option<&str> {
        self.pending.as_ref().map(PendingRequest::source)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Recorder {
        &self.diagnostics
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn request(&mut self, source: String, phase: LoadPhase) {
        let cross_origin = self.cross_origin_for(phase);
        log::debug!("Requesting {} ({})", source, phase.as_str());
        self.diagnostics.record(DiagnosticEventKind::LoadRequested {
            attempt: phase.into(),
            source: source.clone(),
        });
        self.surface.set_source(&source, cross_origin);
        self.pending = Some(PendingRequest::new(source, phase));
    }

    fn cross_origin_for(&self, phase: LoadPhase) -> CrossOrigin {
        match phase {
            LoadPhase::Direct => self.load_config.direct_cross_origin,
            LoadPhase::Proxy => self.load_config.proxy_cross_origin,
        }
    }

    /// Returns the phase of the outstanding request if `source` belongs to
    /// it; records and drops the callback otherwise.
    fn accept_callback(&mut self, source: &str, outcome: Outcome) -> Option<LoadPhase> {
        let phase = self
            .pending
            .as_ref()
            .filter(|pending| pending.matches(source) && self.state.is_loading())
            .map(PendingRequest::phase);

        match phase {
            Some(phase) => {
                self.diagnostics.record(DiagnosticEventKind::LoadSettled {
                    attempt: phase.into(),
                    outcome,
                });
            }
            None => {
                log::debug!("Ignoring stale {outcome:?} callback for {source}");
                self.diagnostics
                    .record(DiagnosticEventKind::StaleCallbackIgnored {
                        source: source.to_string(),
                        outcome,
                    });
            }
        }
        phase
    }

    fn fail(&mut self, error: LoadError) {
        log::warn!("{error}");
        self.state = LoadState::Failed(error);
        self.diagnostics.record(DiagnosticEventKind::LoadAbandoned {
            reason: error.to_string(),
        });
        self.surface
            .set_visibility(&Visibility::failed(error.user_message()));
    }
}

/// Subscribes `controller` to settings updates arriving on `channel`.
///
/// Updates delivered while the controller is already borrowed (a surface
/// calling back synchronously into a settings handler) are dropped and
/// logged rather than panicking.
pub fn connect<C, S>(channel: &mut C, controller: &Rc<RefCell<ImageLoadController<S>>>)
where
    C: HostChannel + ?Sized,
    S: RenderingSurface + 'static,
{
    let controller = Rc::downgrade(controller);
    channel.subscribe(Box::new(move |patch: &SettingsPatch| {
        let Some(controller) = controller.upgrade() else {
            log::debug!("Settings update after controller was dropped");
            return;
        };
        if let Ok(mut controller) = controller.try_borrow_mut() {
            controller.apply_settings(patch);
            return;
        }
        log::error!("Controller busy, dropping settings update");
    }));
}
