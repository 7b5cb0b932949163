use chrono::{Local, Utc};
use framegen_client::{ApiClient, UiConfig};
use framegen_types::FormInput;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::events::UiEvent;
use crate::export::{self, Download};
use crate::notify::Notifications;
use crate::page::{ClickTarget, PageState};
use crate::scheduler::{Deferred, Scheduler};
use crate::session::Session;

pub const TYPES_LOAD_FAILED: &str = "Failed to load framework types";
pub const NO_SELECTION: &str = "Please select a framework type first";
pub const GENERATE_FAILED: &str = "Failed to generate framework. Please try again.";
pub const NOTHING_TO_EXPORT: &str = "No framework to export";
pub const GENERATED: &str = "Framework generated successfully!";
pub const EXPORTED: &str = "Framework exported!";

/// Owns the page: session data, section visibility, toasts, pending timers
/// and the download outbox.
///
/// Events are handled one at a time through `&mut self`, so a submit that
/// arrives while a generation is in flight is processed after it completes.
pub struct Controller {
    api: ApiClient,
    ui: UiConfig,
    session: Session,
    page: PageState,
    notifications: Notifications,
    scheduler: Scheduler,
    outbox: Vec<Download>,
}

impl Controller {
    pub fn new(api: ApiClient, ui: UiConfig) -> Self {
        Self {
            api,
            ui,
            session: Session::default(),
            page: PageState::default(),
            notifications: Notifications::new(),
            scheduler: Scheduler::new(),
            outbox: Vec::new(),
        }
    }

    /// Fetch both catalogs concurrently.
    ///
    /// Only a type catalog failure is reported to the user (and returned);
    /// a missing example catalog just leaves the gallery empty.
    pub async fn start(&mut self) -> Result<()> {
        let (types, examples) = tokio::join!(self.api.framework_types(), self.api.examples());

        match examples {
            Ok(catalog) => {
                debug!(count = catalog.len(), "example catalog loaded");
                self.session.examples = catalog;
            }
            Err(e) => error!(error = %e, "Error loading examples"),
        }

        match types {
            Ok(catalog) => {
                info!(count = catalog.len(), "framework types loaded");
                self.session.types = catalog;
                Ok(())
            }
            Err(e) => Err(self.fail(TYPES_LOAD_FAILED, Error::Api(e))),
        }
    }

    /// Handle one UI event.
    ///
    /// Any error returned has already been shown as a notification.
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        debug!(?event, "dispatch");
        match event {
            UiEvent::SelectType(key) => self.select_type(key),
            UiEvent::Submit(form) => self.submit(form).await,
            UiEvent::Regenerate => {
                self.page.show_form();
                Ok(())
            }
            UiEvent::Export => self.export(),
            UiEvent::OpenExample(key) => self.open_example(key),
            UiEvent::CloseModal => {
                self.page.close_modal();
                Ok(())
            }
            UiEvent::ModalClick(ClickTarget::Backdrop) => {
                self.page.close_modal();
                Ok(())
            }
            UiEvent::ModalClick(ClickTarget::Body) => Ok(()),
            UiEvent::Tick(now) => {
                self.tick(now);
                Ok(())
            }
        }
    }

    /// Fire deferred work due at `now` and expire old toasts.
    pub fn tick(&mut self, now: Instant) {
        for work in self.scheduler.take_due(now) {
            match work {
                Deferred::RevealForm => self.page.show_form(),
                Deferred::Deliver(download) => self.outbox.push(download),
            }
        }
        self.notifications.prune(now);
    }

    /// Wait, in real time, until every deferred action has fired.
    ///
    /// Toast expiry is not awaited.
    pub async fn settle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await;
            self.tick(Instant::now());
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn pending_downloads(&self) -> &[Download] {
        &self.outbox
    }

    pub fn take_downloads(&mut self) -> Vec<Download> {
        std::mem::take(&mut self.outbox)
    }

    /// Earliest moment something on the page changes by itself.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scheduler.next_due(), self.notifications.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn select_type(&mut self, key: String) -> Result<()> {
        if !self.session.types.contains_key(&key) {
            let message = format!("Unknown framework type: {}", key);
            return Err(self.fail(&message, Error::UnknownType(key)));
        }

        self.session.selected_type = Some(key);
        self.scheduler.schedule(
            Instant::now() + self.ui.form_reveal_delay(),
            Deferred::RevealForm,
        );
        Ok(())
    }

    async fn submit(&mut self, form: FormInput) -> Result<()> {
        let Some(framework_type) = self.session.selected_type.clone() else {
            return Err(self.fail(NO_SELECTION, Error::NoSelection));
        };

        let request = form.into_request(framework_type);
        self.page.show_loading();

        let outcome = match self.api.generate(&request).await {
            Ok(framework) => match framework.type_info(&self.session.types) {
                Ok(_) => Ok(framework),
                Err(e) => Err(Error::from(e)),
            },
            Err(e) => Err(Error::Api(e)),
        };

        self.page.hide_loading();

        match outcome {
            Ok(framework) => {
                info!(name = %framework.name, elements = framework.elements.len(), "framework received");
                self.session.current = Some(framework);
                self.page.show_results();
                self.notifications
                    .success(GENERATED, Instant::now(), self.ui.success_toast());
                Ok(())
            }
            Err(e) => Err(self.fail(GENERATE_FAILED, e)),
        }
    }

    fn export(&mut self) -> Result<()> {
        let Some((framework, type_info)) = self.session.current_with_type() else {
            return Err(self.fail(NOTHING_TO_EXPORT, Error::NothingToExport));
        };

        let json = export::json_download(framework, type_info, Utc::now());
        let text = export::text_download(framework, type_info, Local::now().date_naive());

        let json = match json {
            Ok(json) => json,
            Err(e) => return Err(self.fail("Failed to export framework", e)),
        };

        debug!(json = %json.filename, text = %text.filename, "export queued");
        self.outbox.push(json);
        let now = Instant::now();
        self.scheduler
            .schedule(now + self.ui.text_download_delay(), Deferred::Deliver(text));
        self.notifications
            .success(EXPORTED, now, self.ui.success_toast());
        Ok(())
    }

    fn open_example(&mut self, key: String) -> Result<()> {
        if !self.session.examples.contains_key(&key) || !self.session.types.contains_key(&key) {
            let message = format!("No example available for '{}'", key);
            return Err(self.fail(&message, Error::UnknownExample(key)));
        }
        self.page.open_modal(key);
        Ok(())
    }

    /// Log the cause, show `message` to the user, hand the error back.
    fn fail(&mut self, message: &str, err: Error) -> Error {
        match &err {
            Error::NoSelection | Error::NothingToExport => warn!("{}", message),
            _ => error!(error = %err, "{}", message),
        }
        self.notifications
            .error(message, Instant::now(), self.ui.error_toast());
        err
    }
}
