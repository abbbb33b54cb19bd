mod highlighter;
mod validator;

use clap::Parser;
use miette::{Diagnostic, Result};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, KeyCode, KeyModifiers, Keybindings,
    Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use tally::{Session, SessionOptions, evaluate, render_error};
use tally_core::{parser::DEFAULT_MAX_DEPTH, region::DEFAULT_CAPACITY};
use thiserror::Error;

use crate::highlighter::Highlighter;
use crate::validator::GroupValidator;

/// Tally - evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Print the parsed tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Bytes reserved for each expression's tree
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Maximum nesting of parenthesized groups
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("could not set up the session")]
    #[diagnostic(code(tally::session), help("--capacity must be a positive number of bytes"))]
    Session(#[source] tally::Error),

    #[error("line editor failed")]
    #[diagnostic(code(tally::reedline))]
    Editor(#[source] std::io::Error),

    #[error("could not read from stdin")]
    #[diagnostic(code(tally::stdin))]
    Stdin(#[source] std::io::Error),
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(GroupValidator))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

/// Parse `input` once and evaluate it, also rendering the tree when asked.
fn evaluate_input(
    session: &mut Session,
    input: &str,
    debug_parse: bool,
) -> Result<(Option<String>, f64), tally::Error> {
    session.parse_and_then(input, |parsed| {
        let tree = debug_parse.then(|| parsed.expr.to_string());
        (tree, evaluate(parsed.expr))
    })
}

/// Evaluate one expression and print the outcome. Returns whether it succeeded.
fn interpret_input(session: &mut Session, input: &str, debug_parse: bool) -> bool {
    match evaluate_input(session, input, debug_parse) {
        Ok((tree, value)) => {
            if let Some(tree) = tree {
                println!("=== Parsed AST ===");
                println!("{}", tree);
                println!();
            }
            println!("{}", value);
            true
        }
        Err(e) => {
            render_error(&e);
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    // TALLY_LOG wins over RUST_LOG; default to WARN if neither is set
    let filter = EnvFilter::try_from_env("TALLY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut session = Session::new(SessionOptions {
        region_capacity: args.capacity,
        max_depth: args.max_depth,
    })
    .map_err(|e| {
        render_error(&e);
        CliError::Session(e)
    })?;

    if let Some(expr) = args.expression {
        if !interpret_input(&mut session, &expr, args.debug_parse) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let (mut line_editor, prompt) = setup_reedline();

        println!("Tally REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).map_err(CliError::Editor)?;

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(&mut session, &buffer, args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        let mut failed = false;
        for line in reader.lines() {
            let line = line.map_err(CliError::Stdin)?;
            if line.trim().is_empty() {
                continue;
            }
            failed |= !interpret_input(&mut session, &line, args.debug_parse);
        }
        if failed {
            std::process::exit(1);
        }
    }

    Ok(())
}
