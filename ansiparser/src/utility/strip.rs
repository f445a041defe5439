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

use crate::{AnsiTokenizer, TokenKind};
use std::borrow::Cow;

/// Removes CSI and OSC escape sequences from a string.
///
/// Plain text, complex glyphs, and zero-width controls are kept as-is. A
/// truncated sequence at the end of the input is removed as well, since it
/// would still be interpreted by a terminal.
///
/// # Performance
///
/// If the input contains no ESC byte it is returned borrowed without being
/// scanned. Otherwise a new `String` is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use ansiparser::strip_escape_codes;
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_escape_codes(colored), "Red Text");
///
/// let link = "\x1b]8;;http://example.com\x1b\\link\x1b]8;;\x1b\\";
/// assert_eq!(strip_escape_codes(link), "link");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_escape_codes(plain), Cow::Borrowed(_)));
/// ```
pub fn strip_escape_codes(str: &str) -> Cow<'_, str> {
    if !str.contains('\x1b') {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    for token in AnsiTokenizer::new(str) {
        if token.kind != TokenKind::EscapeCode {
            result.push_str(token.content);
        }
    }
    Cow::Owned(result)
}
