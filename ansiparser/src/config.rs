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

use crate::consts::{BEL, DEL, ESC};

/// Tokenizer and parser settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnsiConfig {
    /// Control bytes emitted as zero-width tokens
    pub zero_width: ZeroWidthMode,
    /// Scan with the ASCII-only pass until the first non-ASCII byte
    pub ascii_fast_path: bool,
    /// Split non-ASCII grapheme clusters into complex glyph tokens
    pub split_glyphs: bool,
}

impl AnsiConfig {
    /// BEL is zero-width, ASCII fast path enabled, glyphs split.
    pub fn standard() -> AnsiConfig {
        AnsiConfig {
            zero_width: ZeroWidthMode::Bell,
            ascii_fast_path: true,
            split_glyphs: true,
        }
    }
    /// Same tokens as `standard`, produced by the grapheme-aware pass alone
    pub fn unicode_only() -> AnsiConfig {
        AnsiConfig {
            zero_width: ZeroWidthMode::Bell,
            ascii_fast_path: false,
            split_glyphs: true,
        }
    }
    /// Every C0 control and DEL is zero-width
    pub fn all_controls() -> AnsiConfig {
        AnsiConfig {
            zero_width: ZeroWidthMode::C0Controls,
            ascii_fast_path: true,
            split_glyphs: true,
        }
    }
    /// Non-ASCII text stays inside plain text runs, as with
    /// [`AnsiTokenizer`](crate::AnsiTokenizer)
    pub fn raw_runs() -> AnsiConfig {
        AnsiConfig {
            zero_width: ZeroWidthMode::Bell,
            ascii_fast_path: true,
            split_glyphs: false,
        }
    }
}

impl Default for AnsiConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which control bytes occupy no cells and get their own
/// [`TokenKind::ZeroWidth`](crate::TokenKind::ZeroWidth) token.
///
/// Control bytes outside the selected set remain part of the surrounding plain
/// text run. ESC is never zero-width on its own: it either starts an escape
/// sequence or, when it cannot, is treated as plain text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZeroWidthMode {
    /// Only BEL (0x07).
    Bell,
    /// Every C0 control (0x00-0x1F) except ESC, and DEL (0x7F).
    C0Controls,
}

impl ZeroWidthMode {
    /// Returns `true` if `byte` is emitted as a zero-width token in this mode.
    pub fn contains(&self, byte: u8) -> bool {
        match self {
            ZeroWidthMode::Bell => byte == BEL,
            ZeroWidthMode::C0Controls => (byte < 0x20 && byte != ESC) || byte == DEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(AnsiConfig::default(), AnsiConfig::standard());
    }

    #[test]
    fn test_bell_mode() {
        assert!(ZeroWidthMode::Bell.contains(BEL));
        assert!(!ZeroWidthMode::Bell.contains(b'\n'));
        assert!(!ZeroWidthMode::Bell.contains(ESC));
    }

    #[test]
    fn test_c0_mode() {
        assert!(ZeroWidthMode::C0Controls.contains(BEL));
        assert!(ZeroWidthMode::C0Controls.contains(b'\n'));
        assert!(ZeroWidthMode::C0Controls.contains(b'\r'));
        assert!(ZeroWidthMode::C0Controls.contains(DEL));
        assert!(!ZeroWidthMode::C0Controls.contains(ESC));
        assert!(!ZeroWidthMode::C0Controls.contains(b' '));
        assert!(!ZeroWidthMode::C0Controls.contains(0xC3));
    }
}
