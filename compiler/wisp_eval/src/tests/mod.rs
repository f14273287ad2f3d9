//! Test modules for the evaluator.
//!
//! Operator dispatch and whole-scope walking are covered on hand-built
//! scopes; `pipeline_tests` drives source text end to end through the
//! lexer and the scope builder.

mod evaluate_tests;
