// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod command;
mod render;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use command::{Command, CommandError, HELP_TEXT};
use registro::{CoreError, EngineConfig, SimulatedSave};
use registro_app::{AppError, Screen, Session, SessionConfig};
use registro_notice::{Notice, NoticeBroadcaster};
use registro_registry::DeletionPrompt;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;

type CliSession = Session<NoticeBroadcaster, SimulatedSave>;

/// Registro - record beverage consumption from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How long a simulated save takes, in milliseconds
    #[arg(long, default_value_t = 1500)]
    save_delay_ms: u64,

    /// Start with an empty records list instead of the sample records
    #[arg(long)]
    no_samples: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            engine: EngineConfig {
                save_delay: Duration::from_millis(self.save_delay_ms),
            },
            seed_samples: !self.no_samples,
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let notices: NoticeBroadcaster = NoticeBroadcaster::new();
    let receiver: broadcast::Receiver<Notice> = notices.subscribe();
    let printer: JoinHandle<()> = tokio::spawn(forward_notices(receiver, |notice: &Notice| {
        println!("{}", render::render_notice(notice));
    }));
    let mut session: CliSession = Session::new(args.session_config(), notices);
    info!(
        save_delay_ms = args.save_delay_ms,
        samples = !args.no_samples,
        "Registro ready"
    );

    println!("{}", render::render_form(session.engine()));
    println!("Type 'help' for a list of commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let flow: Flow = match execute(&mut session, command).await {
            Ok(flow) => flow,
            Err(err) => {
                println!("{err}");
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            break;
        }
    }

    info!(records = session.registry().len(), "Registro closed");
    // Dropping the session closes the channel, so the printer finishes.
    drop(session);
    printer.await?;
    Ok(())
}

/// Runs one command against the session and prints its output.
///
/// # Errors
///
/// Returns an error if the session rejects the command or the records cannot
/// be exported.
async fn execute(session: &mut CliSession, command: Command) -> Result<Flow> {
    match command {
        Command::Set { field, value } => session.set_field(field, &value)?,
        Command::Tipo(tipo) => session.select_tipo(tipo)?,
        Command::Lugar(lugar) => session.select_lugar(lugar)?,
        Command::Show => show(session),
        Command::Submit => submit(session).await?,
        Command::Records => {
            session.navigate(Screen::Registros);
            show(session);
        }
        Command::Home => {
            session.navigate(Screen::Home);
            show(session);
        }
        Command::Back => {
            if !session.go_back() {
                println!("Already on the first screen");
            }
            show(session);
        }
        Command::Delete(id) => {
            let prompt: DeletionPrompt = session.request_deletion(id)?;
            println!("{}", render::render_prompt(&prompt));
        }
        Command::Yes => {
            session.confirm_deletion()?;
            show(session);
        }
        Command::No => session.cancel_deletion()?,
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&session.records_view())?);
        }
        Command::Help => println!("{HELP_TEXT}"),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

async fn submit(session: &mut CliSession) -> Result<()> {
    match session.submit().await {
        Ok(stored) => {
            println!("Saved record #{} for {}", stored.id, stored.nombres);
            Ok(())
        }
        Err(AppError::Form(CoreError::ValidationFailed { errors, .. })) => {
            println!("{}", render::render_errors(errors.iter()));
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "Submit failed");
            Err(err.into())
        }
    }
}

fn show(session: &CliSession) {
    let text: String = match session.screen() {
        Screen::Home => render::render_form(session.engine()),
        Screen::Registros => render::render_records(&session.records_view()),
    };
    println!("{text}");
}

/// Hands every notice to `sink` as soon as it is broadcast, until the
/// channel closes.
async fn forward_notices<F>(mut receiver: broadcast::Receiver<Notice>, mut sink: F)
where
    F: FnMut(&Notice),
{
    loop {
        match receiver.recv().await {
            Ok(notice) => sink(&notice),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Dropped notices");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
