//! One interactive session: read a line, run it, report, repeat.

use std::io::{self, BufRead};

use plis_eval::{stdout_handler, EvalOutput, Interpreter, SharedPrintHandler};
use plis_parse::{Parser, SyntaxError};
use tracing::debug;

use crate::ReplConfig;

/// What happened to one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line; nothing was run.
    Skipped,
    /// A quit command; the session should stop.
    Quit,
    /// The line parsed and was evaluated.
    Evaluated(EvalOutput),
    /// The line did not parse; nothing was evaluated.
    Rejected(SyntaxError),
}

/// Parser, interpreter and output wiring for a REPL.
pub struct Session {
    parser: Parser,
    interpreter: Interpreter,
    handler: SharedPrintHandler,
    prompt: Option<String>,
    dump_ast: bool,
}

impl Session {
    /// A session printing to stdout and stderr.
    pub fn new(config: &ReplConfig) -> Self {
        Self::with_handler(config, stdout_handler())
    }

    /// A session printing through `handler`.
    pub fn with_handler(config: &ReplConfig, handler: SharedPrintHandler) -> Self {
        Session {
            parser: Parser::new().with_max_depth(config.max_depth),
            interpreter: Interpreter::builder()
                .print_handler(handler.clone())
                .max_depth(config.max_depth)
                .build(),
            handler,
            prompt: config.prompt.clone(),
            dump_ast: config.dump_ast,
        }
    }

    /// Run one line of input.
    ///
    /// Surrounding whitespace, including the line terminator, is trimmed
    /// first. A line starting with `q` quits.
    pub fn run_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Skipped;
        }
        if line.starts_with('q') {
            return LineOutcome::Quit;
        }

        let tree = match self.parser.parse(line) {
            Ok(tree) => tree,
            Err(err) => {
                debug!(%err, line, "syntax error");
                self.handler.eprintln("Syntax error");
                return LineOutcome::Rejected(err);
            }
        };

        if self.dump_ast {
            self.handler.println(&tree.dump().to_string());
        }
        let output = self.interpreter.evaluate(&tree);
        self.handler.println(&format!("Result: {}", output.value));
        LineOutcome::Evaluated(output)
    }

    /// Read and run lines until end of input or a quit command.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                self.handler.print(prompt);
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if self.run_line(&line) == LineOutcome::Quit {
                return Ok(());
            }
        }
    }
}
