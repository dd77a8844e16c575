//! Command handlers for the app shell.
//!
//! Each handler checks that the command makes sense on the current screen,
//! drives the [`App`], and renders a numbered reply.

use log::info;
use std::fmt::Write;

use super::commands::{Command, CommandResult, CommandStatus};
use crate::app::App;
use crate::auth::Credentials;
use crate::error::AppError;
use crate::error::handlers::{error_to_reply_code, handle_error};
use crate::navigation::{Screen, Tab};

const HELP_TEXT: &str = "214 Commands: LOGIN <user> <password>, MENU, CATEGORY <name>, \
TAB <menu|contacts|profile|cart>, LOGOUT, STATUS, DISMISS, HELP, QUIT";

/// Dispatches a parsed command to its handler.
pub async fn handle_command(app: &mut App, command: Command) -> CommandResult {
    match command {
        Command::Login { username, password } => {
            handle_cmd_login(app, Credentials::new(username, password)).await
        }
        Command::Menu => handle_cmd_menu(app),
        Command::Category(name) => handle_cmd_category(app, &name),
        Command::Tab(name) => handle_cmd_tab(app, &name),
        Command::Logout => handle_cmd_logout(app),
        Command::Status => handle_cmd_status(app),
        Command::Dismiss => handle_cmd_dismiss(app),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Exit,
            message: Some("221 Goodbye".into()),
        },
        Command::Unknown(raw) => CommandResult::failure(500, format!("Unknown command: {}", raw)),
    }
}

fn require_screen(app: &App, screen: Screen) -> Option<CommandResult> {
    if app.screen() == screen {
        None
    } else {
        Some(CommandResult::failure(
            503,
            format!("Not available on the {:?} screen", app.screen()),
        ))
    }
}

fn error_result(err: AppError) -> CommandResult {
    handle_error(&err);
    CommandResult::failure(error_to_reply_code(&err), err.to_string())
}

/// Handles LOGIN: submits the credentials and waits out the validation delay.
async fn handle_cmd_login(app: &mut App, credentials: Credentials) -> CommandResult {
    if let Some(rejected) = require_screen(app, Screen::Auth) {
        return rejected;
    }

    match app.login(credentials).await {
        Ok(result) if result.success => {
            let mut reply = format!("230 {}", result.message);
            if let Some(banner) = app.banner() {
                let _ = write!(reply, "\n[banner] {}", banner);
            }
            CommandResult::success(reply)
        }
        Ok(result) => CommandResult::failure(530, result.message),
        Err(err) => error_result(err),
    }
}

/// Handles MENU: renders promo banners and every non-empty section.
fn handle_cmd_menu(app: &mut App) -> CommandResult {
    if let Some(rejected) = require_screen(app, Screen::Main) {
        return rejected;
    }
    app.select_tab(Tab::Menu);

    let catalog = app.catalog();
    let mut out = String::from("200 Menu");

    let promos: Vec<&str> = catalog.banners().iter().map(|b| b.image).collect();
    let _ = write!(out, "\nPromotions: {}", promos.join(", "));

    let categories: Vec<String> = catalog
        .categories()
        .iter()
        .map(|category| {
            if Some(*category) == app.selected_category() {
                format!("[{}]", category)
            } else {
                category.to_string()
            }
        })
        .collect();
    let _ = write!(out, "\nCategories: {}", categories.join(" "));

    for section in catalog.sections() {
        let _ = write!(out, "\n== {} ==", section.category);
        for item in section.items {
            let _ = write!(
                out,
                "\n  {} - {} ({})",
                item.name,
                item.description,
                item.price_label()
            );
        }
    }

    CommandResult::success(out)
}

/// Handles CATEGORY: selects a category and reports which section to scroll to.
fn handle_cmd_category(app: &mut App, name: &str) -> CommandResult {
    if let Some(rejected) = require_screen(app, Screen::Main) {
        return rejected;
    }

    if app.catalog().find_category(name).is_none() {
        return CommandResult::failure(550, format!("Unknown category: {}", name));
    }

    app.select_tab(Tab::Menu);
    match app.select_category(name) {
        Some(position) => CommandResult::success(format!(
            "250 Scrolled to {} (section {})",
            app.selected_category().unwrap_or(name),
            position + 1
        )),
        None => CommandResult::success(format!(
            "250 Selected {}; nothing on the menu yet",
            app.selected_category().unwrap_or(name)
        )),
    }
}

/// Handles TAB: switches the main-screen tab.
fn handle_cmd_tab(app: &mut App, name: &str) -> CommandResult {
    if let Some(rejected) = require_screen(app, Screen::Main) {
        return rejected;
    }

    let tab = match name.parse::<Tab>() {
        Ok(tab) => tab,
        Err(reason) => return CommandResult::failure(501, reason),
    };
    app.select_tab(tab);

    let body = match tab {
        Tab::Menu => "Use MENU to list the menu",
        Tab::Contacts => "Contacts",
        Tab::Profile => "Profile: use LOGOUT to sign out",
        Tab::Cart => "Cart",
    };
    CommandResult::success(format!("200 {}: {}", tab, body))
}

/// Handles LOGOUT: clears the session and returns to the auth screen.
fn handle_cmd_logout(app: &mut App) -> CommandResult {
    if let Some(rejected) = require_screen(app, Screen::Main) {
        return rejected;
    }

    match app.logout() {
        Ok(()) => {
            info!("User logged out");
            CommandResult::success("221 Logged out")
        }
        Err(err) => error_result(err),
    }
}

fn handle_cmd_status(app: &App) -> CommandResult {
    let view = app.notifier().snapshot();
    let mut out = format!(
        "211 screen={:?} session={} tab={} loading={}",
        app.screen(),
        app.session().state(),
        app.tab(),
        view.loading
    );
    if let Some(banner) = app.banner() {
        let _ = write!(out, " banner=\"{}\"", banner);
    }
    CommandResult::success(out)
}

fn handle_cmd_dismiss(app: &mut App) -> CommandResult {
    app.dismiss_banner();
    CommandResult::success("200 Dismissed")
}
