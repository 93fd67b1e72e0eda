// SPDX-License-Identifier: MIT OR Apache-2.0

//! Syntactic forms a function call can take.
//!
//! The form decides how a parser lays out the argument vector and how a
//! call is written back out as text.

use serde::Serialize;
use std::fmt::{self, Write};

use super::expression::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Syntax {
    /// `name(arg, ...)`
    Function,
    /// `arg op arg`
    Infix,
    /// `op arg`
    Prefix,
    /// `CASE [value] WHEN .. THEN .. [ELSE ..] END`, arguments laid out flat.
    Case,
    /// `CAST(arg AS type)`, the type name arriving as a symbol literal.
    Cast,
}

impl Syntax {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Syntax::Function => "Function",
            Syntax::Infix => "Infix",
            Syntax::Prefix => "Prefix",
            Syntax::Case => "Case",
            Syntax::Cast => "Cast",
        }
    }

    /// Writes a call of this form as MDX text.
    pub fn unparse(&self, name: &str, args: &[Expression], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Function => {
                write!(f, "{name}(")?;
                write_list(args, f)?;
                f.write_char(')')
            }
            Syntax::Infix => {
                f.write_char('(')?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {name} ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_char(')')
            }
            Syntax::Prefix => match args {
                [arg] => write!(f, "{name} {arg}"),
                _ => {
                    write!(f, "{name} ")?;
                    write_list(args, f)
                }
            },
            Syntax::Case => {
                f.write_str("CASE")?;
                // A searched CASE has no leading value: its length parity
                // is the opposite of a matched CASE with the same clauses.
                let rest = if name.eq_ignore_ascii_case("_CaseTest") {
                    args
                } else {
                    match args.split_first() {
                        Some((value, rest)) => {
                            write!(f, " {value}")?;
                            rest
                        }
                        None => args,
                    }
                };
                let mut clauses = rest.chunks_exact(2);
                for pair in clauses.by_ref() {
                    write!(f, " WHEN {} THEN {}", pair[0], pair[1])?;
                }
                if let [default] = clauses.remainder() {
                    write!(f, " ELSE {default}")?;
                }
                f.write_str(" END")
            }
            Syntax::Cast => match args {
                [arg, type_name] => write!(f, "CAST({arg} AS {type_name})"),
                _ => {
                    f.write_str("CAST(")?;
                    write_list(args, f)?;
                    f.write_char(')')
                }
            },
        }
    }
}

fn write_list(args: &[Expression], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
