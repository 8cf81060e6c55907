use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    run_event_loop, ActivitiesController, ControllerSettings, HtmlView, HttpActivitiesApi,
    SignupForm, UnregisterControl, ViewEvent,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{info, warn};

mod terminal;

use terminal::TerminalView;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "activities", about = "Browse and manage extracurricular activity signups")]
struct Args {
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every activity with its participants.
    List,
    /// Sign a student up for an activity.
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a student from an activity.
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Write the activities page as HTML.
    Render {
        #[arg(long)]
        out: PathBuf,
    },
    /// Read commands from stdin until EOF or `quit`.
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();
    let args = Args::parse();
    let api = HttpActivitiesApi::new(&args.server_url)
        .with_context(|| format!("invalid --server-url '{}'", args.server_url))?;

    match args.command {
        Command::List => {
            let controller = terminal_controller(api);
            controller.load_roster().await;
            ensure_no_failure(&controller).await
        }
        Command::Signup { activity, email } => {
            let form = SignupForm::new(email, activity);
            if !form.is_complete() {
                bail!("--email must be a valid address and --activity must be non-empty");
            }
            let controller = terminal_controller(api);
            controller.submit_signup(form).await;
            ensure_no_failure(&controller).await
        }
        Command::Unregister { activity, email } => {
            let controller = terminal_controller(api);
            controller.unregister(&activity, &email).await;
            ensure_no_failure(&controller).await
        }
        Command::Render { out } => {
            let controller =
                ActivitiesController::new(api, HtmlView::new(), ControllerSettings::default());
            controller.load_roster().await;
            let page = controller.view().lock().await.render_page()?;
            fs::write(&out, page)
                .with_context(|| format!("failed to write page to '{}'", out.display()))?;
            info!(path = %out.display(), "page written");
            Ok(())
        }
        Command::Shell => run_shell(api).await,
    }
}

fn terminal_controller(
    api: HttpActivitiesApi,
) -> Arc<ActivitiesController<HttpActivitiesApi, TerminalView>> {
    ActivitiesController::new(api, TerminalView::new(), ControllerSettings::default())
}

async fn ensure_no_failure(
    controller: &ActivitiesController<HttpActivitiesApi, TerminalView>,
) -> Result<()> {
    if controller.view().lock().await.reported_failure() {
        bail!("request did not succeed");
    }
    Ok(())
}

async fn run_shell(api: HttpActivitiesApi) -> Result<()> {
    let controller = terminal_controller(api);
    let (tx, rx) = mpsc::channel(32);
    let event_loop = tokio::spawn(run_event_loop(controller, rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_shell_line(&line) {
            Ok(ShellLine::Event(event)) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Ok(ShellLine::Quit) => break,
            Ok(ShellLine::Blank) => {}
            Err(usage) => warn!(%usage, "unrecognized shell command"),
        }
    }

    drop(tx);
    event_loop.await?;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum ShellLine {
    Event(ViewEvent),
    Quit,
    Blank,
}

const SHELL_USAGE: &str =
    "expected `reload`, `signup <email> <activity>`, `unregister <email> <activity>` or `quit`";

/// Parses one shell line. The activity name is everything after the email,
/// so names may contain spaces.
fn parse_shell_line(line: &str) -> Result<ShellLine, &'static str> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellLine::Blank);
    }

    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "quit" | "exit" => Ok(ShellLine::Quit),
        "reload" => Ok(ShellLine::Event(ViewEvent::Reload)),
        "signup" | "unregister" => {
            let (email, activity) = rest.trim().split_once(' ').ok_or(SHELL_USAGE)?;
            let (email, activity) = (email.to_string(), activity.trim().to_string());
            if command == "signup" {
                let form = SignupForm::new(email, activity);
                if !form.is_complete() {
                    return Err(SHELL_USAGE);
                }
                Ok(ShellLine::Event(ViewEvent::SignupSubmitted(form)))
            } else {
                Ok(ShellLine::Event(ViewEvent::UnregisterClicked(
                    UnregisterControl { activity, email },
                )))
            }
        }
        _ => Err(SHELL_USAGE),
    }
}
