//! Interactive read-eval-print loop

use std::fmt::Write as _;

use miette::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::ReplConfig;
use crate::diagnostics::SyntaxError;
use crate::interp::{Interpreter, Value};
use crate::parser;

const HELP: &str = "\
Commands:
  :help, :h       Show this help
  :env            List definitions made with `def`
  :tree <expr>    Show the parse tree of an expression
  :quit, :q       Exit the REPL

Builtins: list head tail eval join def + - * / %";

/// What the REPL does in response to one line
#[derive(Debug)]
pub enum Reply {
    /// Result of evaluating an expression
    Value(Value),
    /// Output of a meta-command
    Text(String),
    /// The line did not parse
    Syntax(SyntaxError),
    /// Blank line
    Nothing,
    /// Leave the loop
    Quit,
}

/// REPL session state: one interpreter shared by every line
pub struct Repl {
    interpreter: Interpreter,
    config: ReplConfig,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            interpreter: Interpreter::new(),
            config,
        }
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        match trimmed {
            "" => Reply::Nothing,
            ":quit" | ":q" => Reply::Quit,
            ":help" | ":h" => Reply::Text(HELP.to_string()),
            ":env" => Reply::Text(self.describe_env()),
            ":tree" => describe_tree(""),
            _ => match trimmed.strip_prefix(":tree ") {
                Some(expr) => describe_tree(expr),
                None => match self.interpreter.eval_line(trimmed) {
                    Ok(value) => Reply::Value(value),
                    Err(e) => Reply::Syntax(e),
                },
            },
        }
    }

    fn describe_env(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.interpreter.env().user_bindings() {
            let _ = writeln!(out, "{} = {}", name, value);
        }
        if out.is_empty() {
            out.push_str("(no definitions)");
        }
        out.trim_end().to_string()
    }

    /// Run the loop on the terminal until `:quit`, Ctrl-C or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(self.config.max_history)
            .map_err(|e| miette::miette!("Invalid history size: {}", e))?
            .auto_add_history(false)
            .build();
        let mut rl = DefaultEditor::with_config(editor_config)
            .map_err(|e| miette::miette!("Could not initialize line editor: {}", e))?;

        if let Some(path) = &self.config.history_file {
            if let Err(e) = rl.load_history(path) {
                tracing::debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        if self.config.banner {
            println!("Lilsp Version {}", crate::VERSION);
            println!("Press Ctrl+C to exit");
            println!();
        }

        loop {
            let line = match rl.readline(&self.config.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(miette::miette!("Failed to read input: {}", e)),
            };

            if !line.trim().is_empty() {
                let _ = rl.add_history_entry(line.as_str());
            }

            match self.handle_line(&line) {
                Reply::Value(value) => println!("{}", value),
                Reply::Text(text) => println!("{}", text),
                Reply::Syntax(e) => eprintln!("{:?}", miette::Report::new(e)),
                Reply::Nothing => {}
                Reply::Quit => break,
            }
        }

        if let Some(path) = &self.config.history_file {
            if let Err(e) = rl.save_history(path) {
                tracing::warn!("failed to save history to {}: {}", path.display(), e);
            }
        }
        Ok(())
    }
}

fn describe_tree(expr: &str) -> Reply {
    match parser::parse(expr.trim_start()) {
        Ok(tree) => Reply::Text(tree.to_string().trim_end().to_string()),
        Err(e) => Reply::Syntax(e),
    }
}
