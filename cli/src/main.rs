//! `tutor` binary: talk to the tutoring agents from the command line.
//!
//! ```text
//! tutor "teach me Newton's laws"
//! tutor -i                      # interactive session
//! tutor -m "quiz me" --json     # {"reply": ..., "current_agent": ...}
//! ```

mod logging;
mod repl;

use clap::Parser;
use cli::Chat;
use tutor::{TutorSession, TutorSettings};

use repl::run_repl_loop;

#[derive(Parser, Debug)]
#[command(name = "tutor")]
#[command(about = "Tutor: learn with a teacher, a Feynman coach and a quiz master")]
struct Args {
    /// Message for one turn (or pass it as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional args: message when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Interactive: keep one session and read messages from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Print which agent is in charge after each turn (stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Chat model; overrides OPENAI_MODEL
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Print each turn as JSON: {"reply": ..., "current_agent": ...}
    #[arg(long)]
    json: bool,
}

impl Args {
    fn initial_message(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| (!self.rest.is_empty()).then(|| self.rest.join(" ")))
            .filter(|m| !m.trim().is_empty())
    }
}

/// How turns are printed.
pub struct OutputOptions {
    pub json: bool,
    pub verbose: bool,
}

/// Runs one turn and prints the result.
pub(crate) async fn run_one_turn(
    chat: &mut Chat,
    message: &str,
    output: &OutputOptions,
) -> Result<(), tutor::AgentError> {
    let turn = chat.send(message).await?;
    if output.verbose {
        eprintln!("[{}]", turn.current_agent);
    }
    println!("{}", turn.render(output.json));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::load_and_apply("tutor", None);
    logging::init()?;
    match loaded {
        Ok(keys) => tracing::debug!(?keys, "config applied"),
        Err(e) => tracing::warn!(error = %e, "config not loaded"),
    }

    let args = Args::parse();
    let message = args.initial_message();
    if message.is_none() && !args.interactive {
        return Err("no message given; pass a message or use -i for an interactive session".into());
    }

    let mut settings = TutorSettings::from_env()?;
    if let Some(model) = &args.model {
        settings = settings.with_model(model.clone());
    }
    let session = TutorSession::from_settings(&settings).await?;
    let mut chat = Chat::new(session);
    let output = OutputOptions {
        json: args.json,
        verbose: args.verbose,
    };

    if let Some(message) = message {
        run_one_turn(&mut chat, &message, &output).await?;
    }
    if args.interactive {
        run_repl_loop(&mut chat, &output).await?;
    }
    Ok(())
}
