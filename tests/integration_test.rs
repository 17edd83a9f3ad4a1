// Integration tests for the countdown, ticker and registration services
mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use nexus_summit::models::settings::Settings;
use nexus_summit::models::summit::SummitPage;
use nexus_summit::services::countdown::{
    Clock, CountdownService, CountdownTicker, RemainingDuration,
};
use nexus_summit::services::registration::{
    BrowserLauncher, RegistrationError, RegistrationService,
};
use pretty_assertions::assert_eq;

/// Clock pinned to one instant
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Browser stand-in that remembers every URL it was asked to open
#[derive(Default)]
struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), RegistrationError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(RegistrationError::Launch {
                url: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
            });
        }
        Ok(())
    }
}

#[test]
fn default_settings_drive_the_summit_countdown() {
    let settings = Settings::default();
    let service = CountdownService::new(settings.milestones.clone());

    let snapshot = service.snapshot_at(fixtures::instants::week_before_opening());
    let labels: Vec<_> = snapshot.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Registration Opens", "Registration Closes", "Event Day"]
    );

    // Sep 1 09:30 IST to Sep 18 23:59:59 IST
    let closes = snapshot.get("Registration Closes").unwrap();
    assert!(closes.accent);
    assert_eq!(
        closes.remaining,
        RemainingDuration {
            days: 17,
            hours: 14,
            minutes: 29,
            seconds: 59,
        }
    );
}

#[test]
fn deadline_reached_while_event_still_ahead() {
    let service = CountdownService::new(fixtures::milestones::summit());
    let snapshot = service.snapshot_at(fixtures::instants::registration_deadline());

    assert!(snapshot.get("Registration Opens").unwrap().remaining.is_zero());
    assert!(snapshot.get("Registration Closes").unwrap().remaining.is_zero());
    assert_eq!(
        snapshot.get("Event Day").unwrap().remaining.to_string(),
        "0d 10h 00m 01s"
    );
    assert!(!snapshot.all_elapsed());
}

#[test]
fn everything_elapsed_after_the_event() {
    let service = CountdownService::new(fixtures::milestones::summit());
    let snapshot = service.snapshot_at(fixtures::instants::after_event());
    assert!(snapshot.all_elapsed());
}

#[test]
fn ticker_publishes_and_stops_on_a_runtime() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .unwrap();

    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);
    let handle = CountdownTicker::start(
        runtime.handle(),
        CountdownService::new(fixtures::milestones::summit()),
        Arc::new(FixedClock(fixtures::instants::week_before_opening())),
        Duration::from_millis(10),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert!(handle.is_running());
    let initial = handle.latest();
    assert_eq!(initial.taken_at, fixtures::instants::week_before_opening());

    std::thread::sleep(Duration::from_millis(100));
    let last = handle.stop();
    let after_stop = ticks.load(Ordering::SeqCst);
    assert!(after_stop >= 1);
    assert_eq!(last.entries, initial.entries);

    // A tick already running when stop was called may still finish
    std::thread::sleep(Duration::from_millis(50));
    assert!(ticks.load(Ordering::SeqCst) <= after_stop + 1);
}

#[test]
fn register_opens_the_configured_portal() {
    let browser = Arc::new(RecordingBrowser::default());
    let settings = Settings::default();
    let service = RegistrationService::new(settings.registration_url.clone(), browser.clone());

    service.register().unwrap();
    service.register().unwrap();

    assert_eq!(
        *browser.opened.lock().unwrap(),
        vec![
            "https://eventhubcc.vit.ac.in/EventHub/".to_string(),
            "https://eventhubcc.vit.ac.in/EventHub/".to_string(),
        ]
    );
}

#[test]
fn launch_failures_surface_to_the_caller() {
    let browser = Arc::new(RecordingBrowser {
        fail: true,
        ..Default::default()
    });
    let service = RegistrationService::new("https://example.org/register", browser);
    assert!(matches!(
        service.register(),
        Err(RegistrationError::Launch { .. })
    ));
}

#[test]
fn every_page_link_can_be_opened() {
    let browser = Arc::new(RecordingBrowser::default());
    let service = RegistrationService::new("https://example.org/register", browser.clone());
    let page = SummitPage::nexus_forum(service.url(), Some("https://example.org/guide.mp4"));

    for link in page.links() {
        service.open_link(&link.url).unwrap();
    }
    assert_eq!(browser.opened.lock().unwrap().len(), page.links().len());
    assert!(service.open_link("javascript:alert(1)").is_err());
}
