//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Tokenizer for text containing ANSI/VT-100 escape sequences.
//!
//! Text is split into plain text runs, complex glyphs, zero-width controls,
//! and CSI/OSC escape codes. Every token records the foreground and
//! background colors active for it, so callers can colorize or measure
//! styled text without interpreting SGR codes themselves.
//!
//! Malformed or unknown sequences are never rejected: they are consumed up to
//! the best available terminator, and unknown SGR fields are ignored.

mod classify;
mod config;
mod consts;
mod parser;
mod result;
mod scanner;
mod sgr;
mod token;
mod tokenizer;
pub mod utility;

pub use self::classify::{ByteClass, classify};
pub use self::config::{AnsiConfig, ZeroWidthMode};
pub use self::parser::AnsiParser;
pub use self::result::{AnsiError, AnsiResult};
pub use self::scanner::{scan_csi, scan_osc};
pub use self::sgr::{ColorState, resolve_sgr};
pub use self::token::{AnsiToken, TokenKind};
pub use self::tokenizer::AnsiTokenizer;
pub use self::utility::{printable_length, strip_escape_codes};

/// Parses `input` with the standard configuration.
pub fn parse(input: &str) -> Vec<AnsiToken<'_>> {
    AnsiParser::new().parse(input)
}

/// Parses `input` with the given configuration.
pub fn parse_with<'a>(input: &'a str, config: &AnsiConfig) -> Vec<AnsiToken<'a>> {
    AnsiParser::with_config(config.clone()).parse(input)
}
