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

use crate::config::ZeroWidthMode;
use crate::consts::{CSI_INTRODUCER, ESC, OSC_INTRODUCER};

/// What the byte at the cursor starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteClass {
    /// `ESC [`
    ControlSequence,
    /// `ESC ]`
    OperatingSystemCommand,
    /// A control byte that occupies no cells.
    ZeroWidth,
    /// A byte outside 7-bit ASCII: part of a multi-byte UTF-8 character.
    Complex,
    /// Anything else, including an ESC that does not start a sequence.
    Printable,
}

/// Classifies `byte` given the byte after it, if any.
///
/// A trailing ESC, or an ESC followed by anything other than `[` or `]`, is
/// printable so that it folds into the current plain text run.
pub fn classify(byte: u8, next: Option<u8>, zero_width: ZeroWidthMode) -> ByteClass {
    match (byte, next) {
        (ESC, Some(CSI_INTRODUCER)) => ByteClass::ControlSequence,
        (ESC, Some(OSC_INTRODUCER)) => ByteClass::OperatingSystemCommand,
        _ if !byte.is_ascii() => ByteClass::Complex,
        _ if zero_width.contains(byte) => ByteClass::ZeroWidth,
        _ => ByteClass::Printable,
    }
}

/// Classifies the byte at `position` in `bytes`. `position` must be in range.
pub(crate) fn classify_at(bytes: &[u8], position: usize, zero_width: ZeroWidthMode) -> ByteClass {
    classify(bytes[position], bytes.get(position + 1).copied(), zero_width)
}
