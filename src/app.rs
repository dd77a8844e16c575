//! Application state
//!
//! Wires the validator, result notifier, session manager, and catalog
//! together and tracks what the user is looking at.

use log::info;
use std::sync::Arc;
use tokio::time::Instant;

use crate::auth::{CredentialStore, CredentialValidator, Credentials, ValidationResult, Validator};
use crate::catalog::MenuCatalog;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::navigation::{Screen, Tab, TransientBanner};
use crate::presenter::ResultNotifier;
use crate::session::{KeyValueStore, SessionManager};

pub struct App {
    config: AppConfig,
    notifier: Arc<ResultNotifier>,
    validator: CredentialValidator<ResultNotifier>,
    session: SessionManager,
    catalog: MenuCatalog,
    screen: Screen,
    tab: Tab,
    selected_category: Option<&'static str>,
    error_banner: TransientBanner,
    success_banner: TransientBanner,
}

impl App {
    /// Builds the app and restores the persisted session. Starts on the splash screen.
    pub fn new<K: KeyValueStore + 'static>(config: AppConfig, store: K) -> Self {
        let notifier = Arc::new(ResultNotifier::new());
        let validator = CredentialValidator::new(
            CredentialStore::new(&config.auth.username, &config.auth.password_hash),
            Arc::clone(&notifier),
            config.login_delay(),
        );
        let session = SessionManager::restore(store);
        let catalog = MenuCatalog::builtin();
        let selected_category = catalog.find_category(&config.default_category);

        Self {
            error_banner: TransientBanner::new(config.banner_timeout()),
            success_banner: TransientBanner::new(config.banner_timeout()),
            config,
            notifier,
            validator,
            session,
            catalog,
            screen: Screen::Splash,
            tab: Tab::default(),
            selected_category,
        }
    }

    /// Waits out the splash, then routes by the restored session.
    pub async fn finish_splash(&mut self) {
        if self.screen == Screen::Splash {
            tokio::time::sleep(self.config.splash_duration()).await;
            self.enter(Screen::for_session(self.session.state()));
        }
    }

    /// Submits a login attempt and waits for its result.
    ///
    /// On success the session is persisted as logged in and the main screen
    /// opens with the success message; on failure the error banner is shown.
    pub async fn login(&mut self, credentials: Credentials) -> Result<ValidationResult, AppError> {
        self.error_banner.dismiss();
        self.notifier.dismiss_alert();

        let pending = self.validator.validate(credentials)?;
        let result = pending.await;

        if result.success {
            self.session.apply_result(&result)?;
            self.enter(Screen::Main);
        } else {
            let state = self.notifier.snapshot();
            if state.alert_visible {
                self.error_banner.show(state.alert_message);
            }
        }

        Ok(result)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.session.logout()?;
        self.success_banner.dismiss();
        self.enter(Screen::Auth);
        Ok(())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Selects a category and returns the section index to scroll to.
    /// Unknown categories leave the selection unchanged.
    pub fn select_category(&mut self, name: &str) -> Option<usize> {
        let category = self.catalog.find_category(name)?;
        self.selected_category = Some(category);
        self.catalog.position_of(category)
    }

    /// Dismisses whichever banner the current screen shows.
    pub fn dismiss_banner(&mut self) {
        match self.screen {
            Screen::Auth => {
                self.error_banner.dismiss();
                self.notifier.dismiss_alert();
            }
            Screen::Main => {
                self.success_banner.dismiss();
                self.session.dismiss_message();
            }
            Screen::Splash => {}
        }
    }

    /// Hides banners whose timeout has passed. Returns true if any was hidden.
    pub fn expire_banners(&mut self) -> bool {
        let error_expired = self.error_banner.expire();
        if error_expired {
            self.notifier.dismiss_alert();
        }
        let success_expired = self.success_banner.expire();
        if success_expired {
            self.session.dismiss_message();
        }
        error_expired || success_expired
    }

    /// The earliest moment a visible banner will hide itself.
    pub fn next_banner_deadline(&self) -> Option<Instant> {
        [self.error_banner.deadline(), self.success_banner.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// The banner message visible on the current screen.
    pub fn banner(&self) -> Option<&str> {
        match self.screen {
            Screen::Auth => self.error_banner.message(),
            Screen::Main => self.success_banner.message(),
            Screen::Splash => None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.selected_category
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn notifier(&self) -> &ResultNotifier {
        &self.notifier
    }

    fn enter(&mut self, screen: Screen) {
        info!("Navigating {:?} -> {:?}", self.screen, screen);
        self.screen = screen;

        match screen {
            Screen::Main => {
                self.tab = Tab::default();
                // Cleared from the session once the banner goes away.
                if let Some(message) = self.session.snapshot().message {
                    self.success_banner.show(message);
                }
            }
            Screen::Auth => {
                self.tab = Tab::default();
                self.selected_category = self.catalog.find_category(&self.config.default_category);
            }
            Screen::Splash => {}
        }
    }
}
