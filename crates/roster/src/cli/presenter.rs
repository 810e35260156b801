use super::render::{self, Renderer};
use rosterapp::commands::{CmdMessage, Summary};
use rosterapp::presenter::{Presenter, RosterView};
use std::io::{self, BufRead, Write};

/// Line-oriented presenter over stdin/stdout.
///
/// Commands, confirmations and prompt answers all come from the same input, one
/// line each, so a piped script can answer its own questions.
pub struct TerminalPresenter {
    input: Box<dyn BufRead>,
    interactive: bool,
    renderer: Renderer,
}

impl TerminalPresenter {
    pub fn new(renderer: Renderer, input: Box<dyn BufRead>, interactive: bool) -> Self {
        Self {
            input,
            interactive,
            renderer,
        }
    }

    /// Next shell line, `None` at end of input.
    pub fn read_command(&mut self) -> Option<String> {
        if self.interactive {
            print!("roster> ");
            let _ = io::stdout().flush();
        }
        self.read_line()
    }

    pub fn print_messages(&self, messages: &[CmdMessage]) {
        if messages.is_empty() {
            return;
        }
        match self.renderer.messages(messages) {
            Ok(out) => print!("{}", out),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    pub fn print_errors(&self, messages: &[CmdMessage]) {
        match self.renderer.messages(messages) {
            Ok(out) => eprint!("{}", out),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    pub fn print_summary(&self, summary: &Summary) {
        match self.renderer.summary(summary) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    pub fn print_json(&self, view: &RosterView) {
        match render::json(view) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                None
            }
        }
    }

    /// Prints a question and reads the answer from the next line.
    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{}", question);
        let _ = io::stdout().flush();
        let answer = self.read_line();
        if !self.interactive {
            // keep transcripts of piped sessions readable
            println!();
        }
        answer
    }
}

impl Presenter for TerminalPresenter {
    fn confirm(&mut self, message: &str) -> bool {
        self.ask(&format!("{} [y/N] ", message))
            .map(|answer| {
                let answer = answer.trim().to_lowercase();
                answer == "y" || answer == "yes"
            })
            .unwrap_or(false)
    }

    fn prompt(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        let question = match default {
            Some(default) => format!("{} [{}]: ", message, default),
            None => format!("{}: ", message),
        };
        let answer = self.ask(&question)?;
        if answer.trim().is_empty() {
            Some(default.unwrap_or_default().to_string())
        } else {
            Some(answer)
        }
    }

    fn render(&mut self, view: &RosterView) {
        match self.renderer.view(view) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn presenter(script: &str) -> TerminalPresenter {
        TerminalPresenter::new(
            Renderer::new(false).unwrap(),
            Box::new(Cursor::new(script.to_string().into_bytes())),
            false,
        )
    }

    #[test]
    fn reads_lines_until_eof() {
        let mut p = presenter("add a\r\nlist\n");
        assert_eq!(p.read_command().as_deref(), Some("add a"));
        assert_eq!(p.read_command().as_deref(), Some("list"));
        assert_eq!(p.read_command(), None);
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut p = presenter("y\nYES\nno\n\n");
        assert!(p.confirm("Delete?"));
        assert!(p.confirm("Delete?"));
        assert!(!p.confirm("Delete?"));
        assert!(!p.confirm("Delete?"));
        // end of input cancels
        assert!(!p.confirm("Delete?"));
    }

    #[test]
    fn prompt_falls_back_to_default() {
        let mut p = presenter("\n42\n");
        assert_eq!(p.prompt("Salary", Some("100")).as_deref(), Some("100"));
        assert_eq!(p.prompt("Salary", Some("100")).as_deref(), Some("42"));
        assert_eq!(p.prompt("Salary", Some("100")), None);
    }
}
