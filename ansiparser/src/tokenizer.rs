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

/// Tokenizer states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// More input may remain.
    Scanning,
    /// The input is exhausted. Every further call reports no token.
    Done,
}

/// A resumable cursor producing one [`AnsiToken`] per call.
///
/// The tokenizer walks the input once, emitting plain text lazily: a run is
/// only emitted when an escape sequence, a zero-width control, or the end of
/// input interrupts it. Non-ASCII bytes are folded into plain text runs; use
/// [`AnsiParser`](crate::AnsiParser) to split them into complex glyphs.
///
/// The active colors are owned by the cursor and carried from token to token,
/// so independent cursors over the same input never interfere.
///
/// ```
/// # use ansiparser::AnsiTokenizer;
/// let mut tokenizer = AnsiTokenizer::new("\x1b[31mred");
/// while tokenizer.advance() {
///     let token = tokenizer.token().unwrap();
///     println!("{} {:?} fg={}", token.kind, token.content, token.foreground);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AnsiTokenizer<'a> {
    input: &'a str,
    config: AnsiConfig,
    position: usize,
    colors: ColorState<'a>,
    token: Option<AnsiToken<'a>>,
    state: State,
}

impl<'a> AnsiTokenizer<'a> {
    /// Creates a cursor at the start of `input` with no colors set.
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, AnsiConfig::default())
    }

    /// Creates a cursor using `config` to decide which controls are zero-width.
    pub fn with_config(input: &'a str, config: AnsiConfig) -> Self {
        Self {
            input,
            config,
            position: 0,
            colors: ColorState::default(),
            token: None,
            state: State::Scanning,
        }
    }

    /// Creates a cursor over raw bytes, which must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidUtf8`](crate::AnsiError::InvalidUtf8) if
    /// `input` is not valid UTF-8.
    pub fn from_bytes(input: &'a [u8]) -> AnsiResult<Self> {
        Ok(Self::new(std::str::from_utf8(input)?))
    }

    /// Rewinds the cursor to the start of the input and clears the colors.
    pub fn reset(&mut self) {
        self.position = 0;
        self.colors = ColorState::default();
        self.token = None;
        self.state = State::Scanning;
    }

    /// The token produced by the last successful [`advance`](Self::advance).
    pub fn token(&self) -> Option<&AnsiToken<'a>> {
        self.token.as_ref()
    }

    /// Byte offset of the next unconsumed byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Colors in effect at the cursor.
    pub fn colors(&self) -> ColorState<'a> {
        self.colors
    }

    /// Returns `true` once the input is exhausted.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Advances by exactly one token.
    ///
    /// Returns `true` if a token was produced and is available from
    /// [`token`](Self::token), or `false` once the input is exhausted. Every
    /// call that returns `true` consumes at least one byte.
    pub fn advance(&mut self) -> bool {
        if self.state == State::Done {
            self.token = None;
            return false;
        }

        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.position;

        while self.position < bytes.len() {
            match classify_at(bytes, self.position, self.config.zero_width) {
                ByteClass::Complex | ByteClass::Printable => self.position += 1,
                ByteClass::ControlSequence => {
                    if self.position > start {
                        return self.emit_run(start);
                    }
                    let token = scan_csi(&input[self.position..], self.colors);
                    return self.emit(token);
                }
                ByteClass::OperatingSystemCommand => {
                    if self.position > start {
                        return self.emit_run(start);
                    }
                    let token = scan_osc(&input[self.position..], self.colors);
                    return self.emit(token);
                }
                ByteClass::ZeroWidth => {
                    if self.position > start {
                        return self.emit_run(start);
                    }
                    let token = scan_zero_width(&input[self.position..], self.colors);
                    return self.emit(token);
                }
            }
        }

        self.state = State::Done;
        if self.position > start {
            self.emit_run(start)
        } else {
            self.token = None;
            false
        }
    }

    /// Emits the pending plain text run `start..position`.
    fn emit_run(&mut self, start: usize) -> bool {
        let content = &self.input[start..self.position];
        self.token = Some(AnsiToken::new(TokenKind::PlainText, content, self.colors));
        true
    }

    /// Emits a token that begins at the cursor and advances past it.
    fn emit(&mut self, token: AnsiToken<'a>) -> bool {
        self.position += token.len();
        self.colors = token.colors();
        self.token = Some(token);
        true
    }
}

impl<'a> Iterator for AnsiTokenizer<'a> {
    type Item = AnsiToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.token } else { None }
    }
}

impl std::iter::FusedIterator for AnsiTokenizer<'_> {}
