//! # plotatom
//!
//! plotatom is the value core of a small interpreted language. Every datum the
//! evaluator manipulates is an [`Atom`](atom::Atom): nothing, a real number, a
//! complex number, a symbol, or a string, plus a property list of annotations
//! that travels with the value without taking part in its identity.
//!
//! The crate also carries the reader that produces atoms from source text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    atom::Atom,
    error::LexError,
    reader::lexer::tokenize,
    util::num::usize_to_f64_checked,
};

/// Defines the atom and everything attached to it.
///
/// This module declares the `Atom` type, the tagged value shared by every
/// stage of the interpreter, together with its complex payload and its kind
/// discriminant.
///
/// # Responsibilities
/// - Classifies tokens, numbers and text into the right kind of atom.
/// - Provides predicates, defaulting accessors and checked accessors.
/// - Implements epsilon-tolerant equality and textual rendering.
/// - Stores per-atom annotations in a string-keyed property list.
pub mod atom;
/// Provides the error types raised by the crate.
///
/// Atom operations degrade silently almost everywhere; the property list key
/// check and the tokenizer are the only sources of errors.
///
/// # Responsibilities
/// - Defines one error enum per failure source.
/// - Attaches the details (offending kind, text, line) needed for reporting.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns source text into the tokens atoms are built from.
///
/// # Responsibilities
/// - Defines the `Token` consumed by atom construction.
/// - Tokenizes source text with line tracking.
pub mod reader;
/// General numeric helpers.
///
/// # Responsibilities
/// - Machine-epsilon float comparison.
/// - Strict, whole-text float parsing and compact float display.
/// - Lossless integer to float conversion.
pub mod util;

/// Name of the property recording the source line of an atom.
pub const LINE_PROPERTY: &str = "line";

/// Reads every atom in `source`.
///
/// The source is tokenized, parentheses are dropped, and each remaining token
/// becomes an atom annotated with a `"line"` property holding the line it was
/// read from.
///
/// # Errors
/// Returns an error if tokenization fails, or if a line number is too large
/// to be stored exactly in a `Number` atom.
///
/// # Examples
/// ```
/// use plotatom::{LINE_PROPERTY, atom::Atom, read_atoms};
///
/// let atoms = read_atoms("(+ 1 2)\n(print \"done\")").unwrap();
/// assert_eq!(atoms.len(), 5);
/// assert_eq!(atoms[1], Atom::from(1.0));
/// assert!(atoms[4].is_string());
///
/// let line = Atom::string_literal(LINE_PROPERTY);
/// assert_eq!(atoms[4].get_property(&line), Atom::from(2.0));
///
/// // An unterminated string literal cannot be tokenized.
/// assert!(read_atoms("(print \"oops)").is_err());
/// ```
pub fn read_atoms(source: &str) -> Result<Vec<Atom>, Box<dyn std::error::Error>> {
    let key = Atom::string_literal(LINE_PROPERTY);
    let mut atoms = Vec::new();

    for (token, line) in tokenize(source)? {
        if token.is_delimiter() {
            continue;
        }

        let line = usize_to_f64_checked(line, LexError::LineTooLarge { line })?;

        let mut atom = Atom::from(&token);
        atom.add_property(&key, Atom::from(line))?;
        atoms.push(atom);
    }

    Ok(atoms)
}
