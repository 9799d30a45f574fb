//! Terminal output for conversion progress.

use std::io::IsTerminal;

use csvtoics_core::Progress;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

/// Prints progress to stdout and errors to stderr. Asks for confirmation
/// only when stdin is a terminal.
pub struct TerminalProgress {
    interactive: bool,
}

impl TerminalProgress {
    pub fn new() -> Self {
        TerminalProgress {
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl Progress for TerminalProgress {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }

    fn writing(&mut self, title: &str) {
        println!("  {}", format!("Writing {}...", title).dimmed());
    }

    fn finished(&mut self) {
        println!("{}", "Conversion complete!".green());
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn confirm(&mut self) -> bool {
        if !self.interactive {
            return true;
        }

        match Confirm::new()
            .with_prompt("Existing files in the destination will be deleted. Continue?")
            .default(true)
            .interact()
        {
            Ok(confirmed) => confirmed,
            Err(e) => {
                log::warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}
