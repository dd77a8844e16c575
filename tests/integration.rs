use std::sync::Arc;
use std::time::Duration;

use food_delivery::auth::{CredentialStore, CredentialValidator, Credentials, Validator};
use food_delivery::navigation::{Screen, Tab};
use food_delivery::presenter::ResultNotifier;
use food_delivery::session::{JsonFileStore, KeyValueStore, MemoryStore, SESSION_KEY, SessionState};
use food_delivery::{App, AppConfig, shell};
use tempfile::TempDir;

// Helper to build an app past its splash screen
async fn started_app(store: MemoryStore) -> App {
    let mut app = App::new(AppConfig::default(), store);
    assert_eq!(app.screen(), Screen::Splash);
    app.finish_splash().await;
    app
}

// Helper to run a scripted shell session and collect its output
async fn run_script(app: &mut App, script: &str) -> String {
    let mut output = Vec::new();
    shell::run(app, script.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_wrong_password_shows_alert_and_stays_logged_out() {
    let store = MemoryStore::new();
    let mut app = started_app(store.clone()).await;
    assert_eq!(app.screen(), Screen::Auth);

    let result = app.login(Credentials::new("user", "wrong")).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.message, "invalid username or password");
    let view = app.notifier().snapshot();
    assert!(view.alert_visible);
    assert!(!view.loading);
    assert_eq!(app.banner(), Some("invalid username or password"));
    assert_eq!(app.session().state(), SessionState::LoggedOut);
    assert_eq!(store.get_bool(SESSION_KEY).unwrap(), None);
    assert_eq!(app.screen(), Screen::Auth);
}

#[tokio::test(start_paused = true)]
async fn test_correct_password_logs_in_and_persists() {
    let store = MemoryStore::new();
    let mut app = started_app(store.clone()).await;

    let result = app.login(Credentials::new("user", "password")).await.unwrap();

    assert!(result.success);
    assert_eq!(app.session().state(), SessionState::LoggedIn);
    assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(true));
    assert_eq!(app.screen(), Screen::Main);
    assert_eq!(app.tab(), Tab::Menu);
    assert!(!app.notifier().snapshot().alert_visible);

    // Success message is shown once, then hides itself after three seconds.
    assert_eq!(app.banner(), Some("login succeeded"));
    assert_eq!(app.session().snapshot().message.as_deref(), Some("login succeeded"));
    tokio::time::advance(Duration::from_secs(3)).await;
    assert!(app.expire_banners());
    assert_eq!(app.banner(), None);
    assert_eq!(app.session().snapshot().message, None);
}

#[tokio::test(start_paused = true)]
async fn test_dismissing_success_banner_clears_session_message() {
    let mut app = started_app(MemoryStore::new()).await;
    app.login(Credentials::new("user", "password")).await.unwrap();

    app.dismiss_banner();

    assert_eq!(app.banner(), None);
    assert_eq!(app.session().snapshot().message, None);
    assert!(!app.expire_banners());
}

#[tokio::test(start_paused = true)]
async fn test_corrupt_session_file_starts_logged_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    for contents in ["{not json", r#"{"isLoggedIn": 1}"#] {
        std::fs::write(&path, contents).unwrap();

        let mut app = App::new(AppConfig::default(), JsonFileStore::new(&path));
        app.finish_splash().await;
        assert_eq!(app.screen(), Screen::Auth, "{contents}");

        app.login(Credentials::new("user", "password")).await.unwrap();
        assert_eq!(app.screen(), Screen::Main);
        assert_eq!(JsonFileStore::new(&path).get_bool(SESSION_KEY).unwrap(), Some(true));
    }
}

#[tokio::test(start_paused = true)]
async fn test_login_takes_the_artificial_delay() {
    let mut app = started_app(MemoryStore::new()).await;
    let start = tokio::time::Instant::now();
    app.login(Credentials::new("", "")).await.unwrap();
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_logout_resets_session_and_flag() {
    let store = MemoryStore::new();
    let mut app = started_app(store.clone()).await;
    app.login(Credentials::new("user", "password")).await.unwrap();

    app.logout().unwrap();

    assert_eq!(app.session().state(), SessionState::LoggedOut);
    assert_eq!(app.session().snapshot().message, None);
    assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(false));
    assert_eq!(app.screen(), Screen::Auth);
    assert_eq!(app.banner(), None);
}

#[tokio::test(start_paused = true)]
async fn test_restart_restores_logged_in_session() {
    let store = MemoryStore::new();
    let mut app = started_app(store.clone()).await;
    app.login(Credentials::new("user", "password")).await.unwrap();
    drop(app);

    let app = started_app(store.clone()).await;
    assert_eq!(app.screen(), Screen::Main);
    // The success message belonged to the previous process.
    assert_eq!(app.banner(), None);
}

#[tokio::test(start_paused = true)]
async fn test_json_store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut app = App::new(AppConfig::default(), JsonFileStore::new(&path));
    app.finish_splash().await;
    app.login(Credentials::new("user", "password")).await.unwrap();
    drop(app);

    let mut app = App::new(AppConfig::default(), JsonFileStore::new(&path));
    app.finish_splash().await;
    assert_eq!(app.screen(), Screen::Main);

    app.logout().unwrap();
    drop(app);

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn test_loading_observed_before_result() {
    let notifier = Arc::new(ResultNotifier::new());
    let validator = CredentialValidator::new(
        CredentialStore::default(),
        Arc::clone(&notifier),
        Duration::from_secs(1),
    );
    let mut rx = notifier.subscribe();

    let pending = validator.validate(Credentials::new("user", "wrong")).unwrap();
    assert!(rx.has_changed().unwrap());
    {
        let state = rx.borrow_and_update();
        assert!(state.loading);
        assert!(!state.can_submit());
        assert!(!state.alert_visible);
    }

    pending.await;
    assert!(rx.has_changed().unwrap());
    {
        let state = rx.borrow_and_update();
        assert!(!state.loading);
        assert!(state.alert_visible);
    }

    // A later success hides the alert left over from the failure.
    let result = validator
        .validate(Credentials::new("user", "password"))
        .unwrap()
        .await;
    assert!(result.success);
    let state = notifier.snapshot();
    assert!(!state.alert_visible);
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn test_shell_session_end_to_end() {
    let store = MemoryStore::new();
    let mut app = App::new(AppConfig::default(), store.clone());

    let output = run_script(
        &mut app,
        "MENU\nlogin user wrong\nlogin user password\nmenu\ncategory drinks\ncategory salads\ntab cart\nstatus\nlogout\nquit\n",
    )
    .await;

    assert!(output.starts_with("TOP PIZZA\n-- Authorization"));
    assert!(output.contains("503 Not available on the Auth screen"));
    assert!(output.contains("530 invalid username or password"));
    assert!(output.contains("230 login succeeded"));
    assert!(output.contains("== Pizza =="));
    assert!(output.contains("Tender Salmon - Salmon, cherry tomatoes, mozzarella, pesto sauce (from 345 r)"));
    assert!(!output.contains("== Salads =="));
    assert!(output.contains("250 Scrolled to Drinks (section 4)"));
    assert!(output.contains("250 Selected Salads; nothing on the menu yet"));
    assert!(output.contains("200 Cart: Cart"));
    assert!(output.contains("211 screen=Main session=logged in tab=Cart"));
    assert!(output.contains("221 Logged out"));
    assert!(output.trim_end().ends_with("221 Goodbye"));

    assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn test_shell_ends_on_closed_input() {
    let mut app = App::new(AppConfig::default(), MemoryStore::new());
    let output = run_script(&mut app, "bogus\n").await;
    assert!(output.contains("500 Unknown command: bogus"));
}
