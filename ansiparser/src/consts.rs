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

use std::ops::RangeInclusive;

/// Escape (0x1B), the first byte of every CSI and OSC introducer.
pub const ESC: u8 = 0x1B;

/// Bell (0x07). Emitted as a zero-width token and also terminates OSC sequences.
pub const BEL: u8 = 0x07;

/// Delete (0x7F).
pub const DEL: u8 = 0x7F;

/// Second byte of the Control Sequence Introducer (`ESC [`).
pub const CSI_INTRODUCER: u8 = b'[';

/// Second byte of the Operating System Command introducer (`ESC ]`).
pub const OSC_INTRODUCER: u8 = b']';

/// Second byte of the String Terminator (`ESC \`).
pub const ST_FINAL: u8 = b'\\';

/// Final byte of a Select Graphic Rendition command.
pub const SGR_FINAL: u8 = b'm';

/// SGR field separator.
pub const SGR_SEPARATOR: u8 = b';';

/// CSI parameter bytes: digits, `:`, `;`, `<`, `=`, `>` and `?`.
pub const CSI_PARAMETER_BYTES: RangeInclusive<u8> = 0x30..=0x3F;

/// CSI intermediate bytes: space and `!"#$%&'()*+,-./`.
pub const CSI_INTERMEDIATE_BYTES: RangeInclusive<u8> = 0x20..=0x2F;

/// CSI final bytes: `@`, `A`-`Z`, `[\]^_`, `` ` ``, `a`-`z` and `{|}~`.
pub const CSI_FINAL_BYTES: RangeInclusive<u8> = 0x40..=0x7E;

/// Length of a two byte escape introducer (`ESC [` or `ESC ]`).
pub const INTRODUCER_LENGTH: usize = 2;
