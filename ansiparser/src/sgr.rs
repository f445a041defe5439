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

//! Select Graphic Rendition (SGR) color tracking.
//!
//! Only the color-related subset of SGR is interpreted. Colors are kept as
//! slices of the SGR parameter text rather than decoded values, so a tag
//! such as `38;2;0;63;255` is reported exactly as it appeared in the input.

use crate::consts::SGR_SEPARATOR;

/// The active foreground and background colors.
///
/// Each color is the raw SGR text that set it (`"31"`, `"38;5;208"`,
/// `"48;2;255;90;0"`), or `""` when unset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorState<'a> {
    /// Active foreground color.
    pub foreground: &'a str,
    /// Active background color.
    pub background: &'a str,
}

impl ColorState<'_> {
    /// Returns `true` if neither a foreground nor a background color is set.
    pub fn is_cleared(&self) -> bool {
        self.foreground.is_empty() && self.background.is_empty()
    }
}

/// Cursor over the semicolon-delimited fields of an SGR parameter string.
struct Fields<'a> {
    sgr: &'a str,
    position: usize,
}

impl<'a> Fields<'a> {
    fn new(sgr: &'a str) -> Self {
        Self { sgr, position: 0 }
    }

    /// Returns the byte offset and text of the next field.
    fn next_field(&mut self) -> Option<(usize, &'a str)> {
        if self.position >= self.sgr.len() {
            return None;
        }
        let start = self.position;
        let end = self.sgr.as_bytes()[start..]
            .iter()
            .position(|&byte| byte == SGR_SEPARATOR)
            .map_or(self.sgr.len(), |offset| start + offset);
        // Skip the separator, if any.
        self.position = (end + 1).min(self.sgr.len());
        Some((start, &self.sgr[start..end]))
    }

    /// Reads the remainder of a `38`/`48` extended color whose selector field
    /// started at `start`.
    ///
    /// `5;N` selects a palette entry and `2;R;G;B` an RGB color. Returns the
    /// full tag from the selector through the last consumed field, or `None`
    /// for an unknown mode or a truncated color.
    fn extended_color(&mut self, start: usize) -> Option<&'a str> {
        let (_, mode) = self.next_field()?;
        let count = match mode {
            "5" => 1,
            "2" => 3,
            _ => return None,
        };
        let mut end = start;
        for _ in 0..count {
            let (offset, field) = self.next_field()?;
            end = offset + field.len();
        }
        Some(&self.sgr[start..end])
    }
}

/// `3x` sets a dim foreground, `4x` a dim background.
fn is_basic(field: &str, lead: u8) -> bool {
    let bytes = field.as_bytes();
    bytes.len() == 2 && bytes[0] == lead
}

/// `90`-`97` set a bright foreground.
fn is_bright_foreground(field: &str) -> bool {
    matches!(field.as_bytes(), [b'9', b'0'..=b'7'])
}

/// `100`-`107` set a bright background.
fn is_bright_background(field: &str) -> bool {
    matches!(field.as_bytes(), [b'1', b'0', b'0'..=b'7'])
}

/// Applies the SGR parameter string `sgr` (the text between `ESC [` and the
/// final `m`) to the `previous` colors.
///
/// Fields are applied left to right, so a later field overrides an earlier
/// one. An empty string, `0`, or `1` clears both colors; `39` and `49` clear
/// one of them; `3x`/`90`-`97` and `4x`/`100`-`107` set a 4-bit color; and
/// `38`/`48` followed by `5;N` or `2;R;G;B` set an extended color. Anything
/// else is ignored.
pub fn resolve_sgr<'a>(sgr: &'a str, previous: ColorState<'a>) -> ColorState<'a> {
    if sgr.is_empty() {
        // Empty SGR is the same as reset
        return ColorState::default();
    }

    let mut colors = previous;
    let mut fields = Fields::new(sgr);
    while let Some((start, field)) = fields.next_field() {
        match field {
            // `1` resets both colors, same as `0`.
            "0" | "1" => colors = ColorState::default(),
            "39" => colors.foreground = "",
            "49" => colors.background = "",
            "38" => {
                if let Some(tag) = fields.extended_color(start) {
                    colors.foreground = tag;
                }
            }
            "48" => {
                if let Some(tag) = fields.extended_color(start) {
                    colors.background = tag;
                }
            }
            _ if is_basic(field, b'3') || is_bright_foreground(field) => {
                colors.foreground = field;
            }
            _ if is_basic(field, b'4') || is_bright_background(field) => {
                colors.background = field;
            }
            _ => {}
        }
    }
    colors
}
