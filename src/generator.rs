//! The DataString generator.
//!
//! Renders an [`Item`] tree back into canonical DataString text with a
//! pre-order traversal: siblings join with `; `, functions wrap their
//! children in `name(...)`, strings are enclosed in single quotes, numbers
//! emit their canonical decimal text, and binary literals re-render in the
//! base they were written in.
//!
//! `generate(parse(s))` is value-equivalent to `s` for any valid `s` (same
//! literal values, names and nesting) though whitespace may differ, and a
//! second pass is character-identical to the first.
//!
//! ## Examples
//!
//! ```rust
//! use datastring::{generate, parse};
//!
//! let root = parse("rgb(255;0;0)").unwrap();
//! assert_eq!(generate(&root), "rgb(255; 0; 0)");
//! ```

use crate::parser::{PARAMS_CLOSING, PARAMS_OPENING, SEPARATOR, STRING_ENCLOSING};
use crate::value::{Item, Literal};

/// Renders an item tree as canonical DataString text.
#[must_use]
pub fn generate(item: &Item) -> String {
    let mut out = String::new();
    write_item(item, &mut out);
    out
}

fn write_item(item: &Item, out: &mut String) {
    match item {
        Item::MainContext(items) => write_list(items, out),
        Item::Function { name, args } => {
            out.push_str(name);
            out.push(PARAMS_OPENING);
            write_list(args, out);
            out.push(PARAMS_CLOSING);
        }
        Item::Symbol(name) => out.push_str(name),
        Item::Literal(literal) => write_literal(literal, out),
    }
}

fn write_list(items: &[Item], out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
            out.push(' ');
        }
        write_item(item, out);
    }
}

fn write_literal(literal: &Literal, out: &mut String) {
    match literal {
        Literal::String(text) => {
            out.push(STRING_ENCLOSING);
            out.push_str(text);
            out.push(STRING_ENCLOSING);
        }
        Literal::Binary { bits, base } => {
            out.push_str(base.prefix());
            out.push_str(&bits.to_digits(*base));
        }
        Literal::Integer(value) => out.push_str(&value.to_string()),
        Literal::Float(value) => out.push_str(&value.to_string()),
    }
}
