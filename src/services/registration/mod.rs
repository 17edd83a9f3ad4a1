//! Outbound navigation: the registration portal and the page's other links.
//!
//! Opening a link is fire-and-forget. Whatever happens after the browser
//! starts is the browser's business.

use std::io;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("failed to open {url} in the browser")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
    #[error("refusing to open '{0}': only http, https and tel links are supported")]
    UnsupportedScheme(String),
}

/// Something that can hand a URL to the desktop.
#[cfg_attr(test, mockall::automock)]
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> Result<(), RegistrationError>;
}

/// Launches the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), RegistrationError> {
        webbrowser::open(url).map_err(|source| RegistrationError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

pub struct RegistrationService {
    url: String,
    launcher: Arc<dyn BrowserLauncher>,
}

impl RegistrationService {
    pub fn new(url: impl Into<String>, launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self {
            url: url.into(),
            launcher,
        }
    }

    pub fn with_system_browser(url: impl Into<String>) -> Self {
        Self::new(url, Arc::new(SystemBrowser))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open the registration portal in a new browser tab.
    pub fn register(&self) -> Result<(), RegistrationError> {
        log::info!("Opening registration portal {}", self.url);
        self.launcher.open(&self.url)
    }

    /// Open any outbound link shown on the page.
    pub fn open_link(&self, url: &str) -> Result<(), RegistrationError> {
        if !is_supported_link(url) {
            return Err(RegistrationError::UnsupportedScheme(url.to_string()));
        }
        log::info!("Opening link {url}");
        self.launcher.open(url)
    }
}

fn is_supported_link(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    ["https://", "http://", "tel:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    const PORTAL: &str = "https://eventhubcc.vit.ac.in/EventHub/";

    #[test]
    fn register_opens_the_configured_portal() {
        let mut launcher = MockBrowserLauncher::new();
        launcher
            .expect_open()
            .with(eq(PORTAL))
            .times(1)
            .returning(|_| Ok(()));

        let service = RegistrationService::new(PORTAL, Arc::new(launcher));
        assert_eq!(service.url(), PORTAL);
        service.register().unwrap();
    }

    #[test]
    fn launch_failures_are_returned() {
        let mut launcher = MockBrowserLauncher::new();
        launcher.expect_open().returning(|url| {
            Err(RegistrationError::Launch {
                url: url.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no browser"),
            })
        });

        let service = RegistrationService::new(PORTAL, Arc::new(launcher));
        let err = service.register().unwrap_err();
        assert_eq!(err.to_string(), format!("failed to open {PORTAL} in the browser"));
    }

    #[test]
    fn open_link_accepts_phone_numbers() {
        let mut launcher = MockBrowserLauncher::new();
        launcher
            .expect_open()
            .with(eq("tel:+91 85956 73484"))
            .times(1)
            .returning(|_| Ok(()));

        let service = RegistrationService::new(PORTAL, Arc::new(launcher));
        service.open_link("tel:+91 85956 73484").unwrap();
    }

    #[test]
    fn open_link_rejects_other_schemes() {
        let mut launcher = MockBrowserLauncher::new();
        launcher.expect_open().never();

        let service = RegistrationService::new(PORTAL, Arc::new(launcher));
        assert!(matches!(
            service.open_link("file:///etc/passwd"),
            Err(RegistrationError::UnsupportedScheme(_))
        ));
    }
}
