//! Interactive loop: read a line, run a turn, print the reply, repeat.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use cli::Chat;

use crate::OutputOptions;

/// Runs until EOF (Ctrl+D) or `quit` / `exit` / `/quit`. Blank lines are skipped; a failed
/// turn prints an apology to stderr and the loop continues with the same conversation.
pub async fn run_repl_loop(
    chat: &mut Chat,
    output: &OutputOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            None => break,
            Some(s) if s.trim().is_empty() => continue,
            Some(s) if is_quit_command(&s) => break,
            Some(s) => s,
        };

        if let Err(e) = crate::run_one_turn(chat, line.trim(), output).await {
            tracing::error!(error = %e, "turn failed");
            eprintln!("Sorry, I couldn't answer that ({}). Please try again.", e);
        }
    }
    println!("Bye.");
    Ok(())
}

fn is_quit_command(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "quit" | "exit" | "/quit")
}
