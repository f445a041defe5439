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

use crate::AnsiParser;

/// Number of terminal cells `str` occupies once its escape codes are applied.
///
/// Every plain character and every complex glyph counts as one cell; escape
/// codes and zero-width controls count as none.
///
/// # Examples
///
/// ```
/// # use ansiparser::printable_length;
/// assert_eq!(printable_length("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(printable_length("ok 👍🏼"), 4);
/// ```
pub fn printable_length(str: &str) -> usize {
    if str.is_ascii() && !str.contains('\x1b') && !str.contains('\x07') {
        return str.len();
    }
    AnsiParser::new()
        .parse(str)
        .iter()
        .map(|token| token.print_length())
        .sum()
}
