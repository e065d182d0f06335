//! The interactive translation loop.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use blindfold_foundation::{Error, Result};
use blindfold_speech::{PhrasingConfig, Translator};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

const HELP: &str = "\
Type a spoken move (\"knight to f three\") or a move in notation (\"Nf3\").

Commands:
    :help       Show this message
    :vocab      List every word the translator understands
    :grammar    Show the grammar catalog
    :quit       Exit (Ctrl+D works too)";

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user.
    Text(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Both translation directions.
    translator: Translator<'static>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        let translator = Translator::default();
        editor.set_vocabulary(
            translator
                .grammars()
                .vocabulary()
                .into_iter()
                .map(String::from)
                .collect(),
        );

        Self {
            editor,
            translator,
            show_banner: true,
            prompt: "♞> ".to_string(),
        }
    }

    /// Sets how spoken output is phrased.
    #[must_use]
    pub fn with_phrasing(mut self, phrasing: PhrasingConfig) -> Self {
        self.translator = self.translator.with_phrasing(phrasing);
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the translator.
    #[must_use]
    pub const fn translator(&self) -> &Translator<'static> {
        &self.translator
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Text(text)) => println!("\x1b[1m{text}\x1b[0m"),
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => print_error(&e),
        }

        Ok(true)
    }

    /// Evaluates one line: a `:command` or a move in either direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the move cannot be translated.
    pub fn eval(&self, input: &str) -> Result<Reply> {
        let line = input.trim();
        match line {
            ":quit" | ":q" => return Ok(Reply::Quit),
            ":help" | ":h" => return Ok(Reply::Text(HELP.to_string())),
            ":vocab" => {
                let words = self.translator.grammars().vocabulary();
                return Ok(Reply::Text(words.join(" ")));
            }
            ":grammar" => return Ok(Reply::Text(self.translator.grammars().to_string())),
            _ => {}
        }

        if line.starts_with(':') {
            return Ok(Reply::Text(format!("unknown command {line}; try :help")));
        }

        let (direction, output) = self.translator.translate(line)?;
        debug!(?direction, input = line, output = %output, "translated");
        Ok(Reply::Text(output))
    }

    /// Translates every non-blank line of `source`.
    ///
    /// Lines starting with `#` are skipped. Each result reads
    /// `input => output`; failures are reported inline so one bad line does
    /// not stop the rest.
    #[must_use]
    pub fn translate_lines(&self, source: &str) -> Vec<String> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| match self.translator.translate(line) {
                Ok((_, output)) => format!("{line} => {output}"),
                Err(e) => format!("{line} => error: {e}"),
            })
            .collect()
    }

    /// Translates a file for batch mode. `-` reads standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn translate_file(&self, path: &Path) -> Result<Vec<String>> {
        let source = if path == Path::new("-") {
            io::read_to_string(io::stdin())
        } else {
            fs::read_to_string(path)
        }
        .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;

        debug!(path = %path.display(), "batch translating");
        Ok(self.translate_lines(&source))
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mBlindfold v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Speak a move or type one in notation. :help for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
