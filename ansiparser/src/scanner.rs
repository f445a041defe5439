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

//! Escape sequence scanners.
//!
//! Each scanner is handed the input starting at an ESC byte and returns a
//! single [`TokenKind::EscapeCode`] token covering the sequence. Neither
//! scanner ever fails: a sequence cut short by the end of input simply ends
//! there.

use crate::consts::{
    BEL, CSI_FINAL_BYTES, CSI_INTERMEDIATE_BYTES, CSI_PARAMETER_BYTES, ESC, INTRODUCER_LENGTH,
    SGR_FINAL, ST_FINAL,
};
use crate::sgr::{ColorState, resolve_sgr};
use crate::token::{AnsiToken, TokenKind};
use tracing::trace;

/// The parts of a CSI sequence, as offsets into the scanned input.
///
/// Format: `ESC [ <parameters> <intermediates> <final_byte>`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ControlSequence {
    /// End of the parameter bytes (0x30-0x3F), which start after the introducer.
    parameters_end: usize,
    /// End of the intermediate bytes (0x20-0x2F).
    intermediates_end: usize,
    /// The final byte (0x40-0x7E), or `None` if the sequence is unterminated.
    final_byte: Option<u8>,
    /// Total length of the sequence including the introducer.
    length: usize,
}

impl ControlSequence {
    fn scan(bytes: &[u8]) -> Self {
        let skip = |mut position: usize, range: &std::ops::RangeInclusive<u8>| {
            while position < bytes.len() && range.contains(&bytes[position]) {
                position += 1;
            }
            position
        };

        let parameters_end = skip(INTRODUCER_LENGTH.min(bytes.len()), &CSI_PARAMETER_BYTES);
        let intermediates_end = skip(parameters_end, &CSI_INTERMEDIATE_BYTES);
        let final_byte = bytes
            .get(intermediates_end)
            .copied()
            .filter(|byte| CSI_FINAL_BYTES.contains(byte));
        let length = intermediates_end + usize::from(final_byte.is_some());

        Self {
            parameters_end,
            intermediates_end,
            final_byte,
            length,
        }
    }
}

/// Scans a CSI sequence at the start of `input`, which must begin with `ESC [`.
///
/// When the final byte is `m` the parameter bytes are applied to `colors` as an
/// SGR command; every other command (cursor movement, erase, ...) leaves the
/// colors untouched.
pub fn scan_csi<'a>(input: &'a str, colors: ColorState<'a>) -> AnsiToken<'a> {
    let sequence = ControlSequence::scan(input.as_bytes());
    let content = &input[..sequence.length];

    let colors = match sequence.final_byte {
        Some(SGR_FINAL) => resolve_sgr(&input[INTRODUCER_LENGTH..sequence.parameters_end], colors),
        Some(_) => colors,
        None => {
            trace!(
                length = sequence.length,
                intermediates = sequence.intermediates_end - sequence.parameters_end,
                "Unterminated control sequence"
            );
            colors
        }
    };

    AnsiToken::new(TokenKind::EscapeCode, content, colors)
}

/// Scans an OSC sequence at the start of `input`, which must begin with `ESC ]`.
///
/// The sequence runs through the first BEL or `ESC \` string terminator, or to
/// the end of input if neither appears. Colors pass through unchanged.
pub fn scan_osc<'a>(input: &'a str, colors: ColorState<'a>) -> AnsiToken<'a> {
    let bytes = input.as_bytes();
    let mut position = INTRODUCER_LENGTH.min(bytes.len());
    let length = loop {
        match bytes.get(position) {
            None => {
                trace!(length = position, "Unterminated operating system command");
                break position;
            }
            Some(&BEL) => break position + 1,
            Some(&ESC) if bytes.get(position + 1) == Some(&ST_FINAL) => break position + 2,
            Some(_) => position += 1,
        }
    };

    AnsiToken::new(TokenKind::EscapeCode, &input[..length], colors)
}

/// Takes the single zero-width control byte at the start of `input`.
pub fn scan_zero_width<'a>(input: &'a str, colors: ColorState<'a>) -> AnsiToken<'a> {
    AnsiToken::new(TokenKind::ZeroWidth, &input[..1], colors)
}
