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

use crate::sgr::ColorState;

/// The kind of substring an [`AnsiToken`] covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of plain text where every character is a single printable cell.
    PlainText,
    /// A complete CSI or OSC escape sequence.
    EscapeCode,
    /// A single user-perceived character that spans more than one byte in the
    /// input, such as an emoji with a skin tone modifier or a ZWJ sequence.
    ComplexGlyph,
    /// A control character that occupies no cells on screen (BEL by default).
    ZeroWidth,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::PlainText => write!(f, "PlainText"),
            TokenKind::EscapeCode => write!(f, "EscapeCode"),
            TokenKind::ComplexGlyph => write!(f, "ComplexGlyph"),
            TokenKind::ZeroWidth => write!(f, "ZeroWidth"),
        }
    }
}

/// A substring of the tokenized input together with the colors active for it.
///
/// Tokens borrow from the input. Concatenating the `content` of every token
/// produced by one pass reproduces the input byte-for-byte.
///
/// `foreground` and `background` hold the active colors as raw SGR parameter
/// text, after applying the effect of this token: `"31"` for a 4-bit color,
/// `"38;5;208"` for a palette color, `"38;2;0;63;255"` for an RGB color, or an
/// empty string when no color is set. Both are slices of the SGR sequence that
/// set them, so they are byte-identical to the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnsiToken<'a> {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact slice of the input covered by this token.
    pub content: &'a str,
    /// Active foreground color, or `""` if uncolored.
    pub foreground: &'a str,
    /// Active background color, or `""` if uncolored.
    pub background: &'a str,
}

impl<'a> AnsiToken<'a> {
    /// Creates a token carrying the given color state.
    pub fn new(kind: TokenKind, content: &'a str, colors: ColorState<'a>) -> Self {
        Self {
            kind,
            content,
            foreground: colors.foreground,
            background: colors.background,
        }
    }

    /// The color state in effect after this token.
    pub fn colors(&self) -> ColorState<'a> {
        ColorState {
            foreground: self.foreground,
            background: self.background,
        }
    }

    /// Length of the token's content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the token covers no input. Never the case for tokens
    /// produced by the tokenizer or parser.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns `true` if the content lies entirely within 7-bit ASCII.
    pub fn is_ascii(&self) -> bool {
        self.content.is_ascii()
    }

    /// Number of terminal cells this token occupies.
    ///
    /// Plain text counts one cell per character, a complex glyph counts as a
    /// single cell, and escape codes and zero-width controls count as none.
    pub fn print_length(&self) -> usize {
        match self.kind {
            TokenKind::PlainText => self.content.chars().count(),
            TokenKind::ComplexGlyph => 1,
            TokenKind::EscapeCode | TokenKind::ZeroWidth => 0,
        }
    }
}
