//! Interactive loop
//!
//! Reads commands line by line, writes replies, and hides banners when their
//! timeout passes even if no input arrives.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::Instant;

use super::commands::{CommandStatus, parse_command};
use super::handlers::handle_command;
use crate::app::App;
use crate::error::AppError;
use crate::navigation::Screen;

/// Runs the shell until QUIT or end of input.
pub async fn run<R, W>(app: &mut App, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(b"TOP PIZZA\n").await?;
    writer.flush().await?;
    app.finish_splash().await;
    write_screen(app, &mut writer).await?;

    let mut lines = reader.lines();

    loop {
        let deadline = app.next_banner_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = parse_command(&line);
                debug!("Received: {:?}", command);
                let screen_before = app.screen();
                let result = handle_command(app, command).await;

                if let Some(msg) = result.message {
                    writer.write_all(msg.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
                if result.status == CommandStatus::Exit {
                    writer.flush().await?;
                    break;
                }
                if app.screen() != screen_before {
                    write_screen(app, &mut writer).await?;
                }
                writer.flush().await?;
            }
            _ = sleep_until_deadline(deadline) => {
                if app.expire_banners() {
                    writer.write_all(b"[banner dismissed]\n").await?;
                    writer.flush().await?;
                }
            }
        }
    }

    Ok(())
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn write_screen<W: AsyncWrite + Unpin>(app: &App, writer: &mut W) -> Result<(), AppError> {
    let line = match app.screen() {
        Screen::Splash => "-- splash --".to_string(),
        Screen::Auth => "-- Authorization: LOGIN <user> <password> --".to_string(),
        Screen::Main => format!("-- Main ({}) --", app.tab()),
    };
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
