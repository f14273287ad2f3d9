//! One-shot commands and the shared pipeline helpers.

use std::fmt;

use tracing::debug;
use wisp_eval::{evaluate, EvalError};
use wisp_ir::{ExecScope, Value};
use wisp_lexer::{lex, LexError};
use wisp_parse::{EmitMode, ParseError, ScopeBuilder};

/// An error from any pipeline stage, unified for driver reporting.
#[derive(Debug)]
pub enum PipelineError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Lex(e) => e.fmt(f),
            PipelineError::Parse(e) => e.fmt(f),
            PipelineError::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<LexError> for PipelineError {
    fn from(e: LexError) -> Self {
        PipelineError::Lex(e)
    }
}

impl From<ParseError> for PipelineError {
    fn from(e: ParseError) -> Self {
        PipelineError::Parse(e)
    }
}

impl From<EvalError> for PipelineError {
    fn from(e: EvalError) -> Self {
        PipelineError::Eval(e)
    }
}

/// Lex source text and build its execution scope.
///
/// # Errors
///
/// Returns the first lexing or building failure.
pub fn build_source(source: &str, mode: EmitMode) -> Result<ExecScope, PipelineError> {
    let tokens = lex(source)?;
    debug!(tokens = tokens.len(), "lexed");
    let scope = ScopeBuilder::new(&tokens).emit_mode(mode).build()?;
    debug!(
        values = scope.values().len(),
        nodes = scope.nodes().len(),
        "scope built"
    );
    Ok(scope)
}

/// Run the full pipeline: lex, build, evaluate.
///
/// # Errors
///
/// Returns the first failure from any stage.
pub fn evaluate_source(source: &str, mode: EmitMode) -> Result<Value, PipelineError> {
    let scope = build_source(source, mode)?;
    Ok(evaluate(&scope)?)
}

/// Evaluate an expression and print the result.
pub fn eval_expr(source: &str, mode: EmitMode) {
    match evaluate_source(source, mode) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Build an expression and dump the scope tables.
pub fn parse_expr(source: &str, mode: EmitMode) {
    match build_source(source, mode) {
        Ok(scope) => print_scope(&scope),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Tokenize an expression and dump the token stream.
pub fn lex_expr(source: &str) {
    match lex(source) {
        Ok(tokens) => {
            println!("Tokens ({}):", tokens.len());
            for token in &tokens {
                println!("  {token:?}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_scope(scope: &ExecScope) {
    println!("Values ({}):", scope.values().len());
    for (i, value) in scope.values().iter().enumerate() {
        println!("  v{i} = {value:?}");
    }
    println!("Nodes ({}):", scope.nodes().len());
    for (i, node) in scope.nodes().iter().enumerate() {
        println!(
            "  n{i} = {} {:?} {:?}",
            node.op.symbol(),
            node.left,
            node.right
        );
    }
}
