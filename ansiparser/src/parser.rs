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

use crate::classify::{ByteClass, classify_at};
use crate::config::AnsiConfig;
use crate::scanner::{scan_csi, scan_osc, scan_zero_width};
use crate::sgr::ColorState;
use crate::token::{AnsiToken, TokenKind};
use crate::AnsiResult;
use tracing::{instrument, trace};
use unicode_segmentation::UnicodeSegmentation;

/// Parses whole strings into a materialized list of [`AnsiToken`]s.
///
/// Parsing runs in up to two passes over the input:
///
/// 1. An ASCII-only pass that handles the common case of text without any
///    non-ASCII bytes. It stops at the first non-ASCII byte.
/// 2. A grapheme-aware pass over the remainder that splits every non-ASCII
///    grapheme cluster (an emoji with modifiers, a ZWJ sequence, a letter
///    with combining marks) into its own [`TokenKind::ComplexGlyph`] token.
///
/// The second pass picks up the colors and any pending plain text run left by
/// the first, so the tokens are identical to those of a single grapheme-aware
/// pass. See [`AnsiConfig`] for switching either pass off.
#[derive(Clone, Debug, Default)]
pub struct AnsiParser {
    config: AnsiConfig,
}

impl AnsiParser {
    /// Creates a parser with the [standard](AnsiConfig::standard) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given configuration.
    pub fn with_config(config: AnsiConfig) -> Self {
        Self { config }
    }

    /// The parser's configuration.
    pub fn config(&self) -> &AnsiConfig {
        &self.config
    }

    /// Parses `input` into tokens whose contents concatenate back to `input`.
    #[instrument(level = "trace", skip_all, fields(length = input.len()))]
    pub fn parse<'a>(&self, input: &'a str) -> Vec<AnsiToken<'a>> {
        let mut pass = Pass::new(input, &self.config);

        if !self.config.split_glyphs {
            pass.scan_ascii(true);
        } else {
            if self.config.ascii_fast_path {
                pass.scan_ascii(false);
            }
            if pass.position < input.len() {
                trace!(position = pass.position, "Switching to grapheme-aware pass");
                pass.scan_graphemes();
            }
        }

        pass.finish()
    }

    /// Parses raw bytes, which must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidUtf8`](crate::AnsiError::InvalidUtf8) if
    /// `input` is not valid UTF-8.
    pub fn parse_bytes<'a>(&self, input: &'a [u8]) -> AnsiResult<Vec<AnsiToken<'a>>> {
        Ok(self.parse(std::str::from_utf8(input)?))
    }
}

/// Produces the token that interrupts a plain text run.
type Scanner<'a> = fn(&'a str, ColorState<'a>) -> AnsiToken<'a>;

/// State shared by the ASCII and grapheme-aware passes.
struct Pass<'a, 'c> {
    input: &'a str,
    config: &'c AnsiConfig,
    tokens: Vec<AnsiToken<'a>>,
    /// Start of the plain text run being accumulated, if any.
    run_start: Option<usize>,
    colors: ColorState<'a>,
    position: usize,
}

impl<'a, 'c> Pass<'a, 'c> {
    fn new(input: &'a str, config: &'c AnsiConfig) -> Self {
        Self {
            input,
            config,
            tokens: Vec::with_capacity(1),
            run_start: None,
            colors: ColorState::default(),
            position: 0,
        }
    }

    /// Byte-at-a-time scan. Unless `fold_complex` is set, stops at the first
    /// non-ASCII byte, leaving any pending run open for the next pass.
    fn scan_ascii(&mut self, fold_complex: bool) {
        let input = self.input;
        let bytes = input.as_bytes();
        while self.position < bytes.len() {
            match classify_at(bytes, self.position, self.config.zero_width) {
                ByteClass::Printable => self.extend_run(1),
                ByteClass::Complex if fold_complex => self.extend_run(1),
                ByteClass::Complex => {
                    // The last ASCII byte may be the base of the grapheme that
                    // starts here, so hand it to the next pass as well.
                    if self.run_start.is_some_and(|start| start < self.position) {
                        self.position -= 1;
                    }
                    return;
                }
                ByteClass::ControlSequence => self.escape(scan_csi),
                ByteClass::OperatingSystemCommand => self.escape(scan_osc),
                ByteClass::ZeroWidth => self.escape(scan_zero_width),
            }
        }
    }

    /// Grapheme-aware scan to the end of input.
    fn scan_graphemes(&mut self) {
        let input = self.input;
        let bytes = input.as_bytes();
        while self.position < bytes.len() {
            match classify_at(bytes, self.position, self.config.zero_width) {
                ByteClass::Printable | ByteClass::Complex => {
                    let Some(glyph) = input[self.position..].graphemes(true).next() else {
                        break;
                    };
                    if glyph.is_ascii() {
                        self.extend_run(glyph.len());
                    } else {
                        self.finish_run();
                        self.push(AnsiToken::new(TokenKind::ComplexGlyph, glyph, self.colors));
                    }
                }
                ByteClass::ControlSequence => self.escape(scan_csi),
                ByteClass::OperatingSystemCommand => self.escape(scan_osc),
                ByteClass::ZeroWidth => self.escape(scan_zero_width),
            }
        }
    }

    /// Emits the pending run, then the token `scan` finds at the cursor.
    fn escape(&mut self, scan: Scanner<'a>) {
        self.finish_run();
        let input = self.input;
        let token = scan(&input[self.position..], self.colors);
        self.push(token);
    }

    fn extend_run(&mut self, length: usize) {
        self.run_start.get_or_insert(self.position);
        self.position += length;
    }

    /// Emits the pending plain text run, ending at the cursor.
    fn finish_run(&mut self) {
        if let Some(start) = self.run_start.take()
            && start < self.position
        {
            let content = &self.input[start..self.position];
            self.tokens
                .push(AnsiToken::new(TokenKind::PlainText, content, self.colors));
        }
    }

    /// Appends a token starting at the cursor and advances past it.
    fn push(&mut self, token: AnsiToken<'a>) {
        self.position += token.len();
        self.colors = token.colors();
        self.tokens.push(token);
    }

    fn finish(mut self) -> Vec<AnsiToken<'a>> {
        self.finish_run();
        self.tokens
    }
}
