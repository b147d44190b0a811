// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Keybind and alias text format: parsing, classification and serialization.
//!
//! # Quick Start
//!
//! ```ignore
//! use stobind_format::{parse, serialize, SerializeOptions};
//! use stobind_core::Profile;
//!
//! let doc = parse("F1 \"FireAll $$ Target_Enemy_Near\" \"\"");
//! assert!(doc.is_clean());
//! let text = serialize(&Profile::from(doc), &SerializeOptions::default());
//! ```
//!
//! # Line syntax
//!
//! ```text
//! # comment                          ; comment
//! alias <Name> <& cmd1 $$ cmd2 &>    alias <Name> "cmd1 $$ cmd2"
//! <Key> "cmd1 $$ cmd2" ""            /bind <Key> "cmd1 $$ cmd2"
//! ```
//!
//! Parsing never fails as a whole: a bad line becomes a
//! [`LineError`](stobind_core::LineError) and the rest of the file still
//! parses.

mod chain;
mod classify;
mod line;
mod parser;
mod serialize;

pub use chain::{parse_alias, parse_chain, split_chain};
pub use classify::{Classifier, TrayCall, TrayRange};
pub use line::{classify_line, Line};
pub use parser::{parse, validate_document, Parser};
pub use serialize::{serialize, SerializeOptions};
