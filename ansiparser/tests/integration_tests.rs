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

//! Integration tests for the parser and tokenizer public API

use ansiparser::{
    AnsiConfig, AnsiParser, AnsiToken, AnsiTokenizer, ColorState, TokenKind, parse, parse_with,
    resolve_sgr,
};

fn token<'a>(kind: TokenKind, content: &'a str, fg: &'a str, bg: &'a str) -> AnsiToken<'a> {
    AnsiToken {
        kind,
        content,
        foreground: fg,
        background: bg,
    }
}

#[test]
fn test_ascii_string() {
    assert_eq!(
        parse("hello world"),
        vec![token(TokenKind::PlainText, "hello world", "", "")]
    );
}

#[test]
fn test_ascii_string_with_ansi() {
    assert_eq!(
        parse("\x1b[31mred\x1b[39m"),
        vec![
            token(TokenKind::EscapeCode, "\x1b[31m", "31", ""),
            token(TokenKind::PlainText, "red", "31", ""),
            token(TokenKind::EscapeCode, "\x1b[39m", "", ""),
        ]
    );
}

#[test]
fn test_ascii_rgb() {
    let fg = "38;2;0;30;255";
    let bg = "48;2;255;90;0";
    assert_eq!(
        parse("\x1b[38;2;0;30;255;48;2;255;90;0mhello"),
        vec![
            token(
                TokenKind::EscapeCode,
                "\x1b[38;2;0;30;255;48;2;255;90;0m",
                fg,
                bg
            ),
            token(TokenKind::PlainText, "hello", fg, bg),
        ]
    );
}

#[test]
fn test_ascii_string_with_osc() {
    assert_eq!(
        parse("hello \x1b]8;;http://thedreaming.org\x1b\\link\x1b]8;;\x1b\\"),
        vec![
            token(TokenKind::PlainText, "hello ", "", ""),
            token(
                TokenKind::EscapeCode,
                "\x1b]8;;http://thedreaming.org\x1b\\",
                "",
                ""
            ),
            token(TokenKind::PlainText, "link", "", ""),
            token(TokenKind::EscapeCode, "\x1b]8;;\x1b\\", "", ""),
        ]
    );
}

#[test]
fn test_osc_does_not_alter_colors() {
    let tokens = parse("\x1b[32m\x1b]8;;http://x\x1b\\link\x1b]8;;\x1b\\");
    assert!(tokens.iter().skip(1).all(|t| t.foreground == "32"));
}

#[test]
fn test_ascii_string_with_cursor_movement() {
    assert_eq!(
        parse("hello \x1b[31m\x1b[1Cworld\x1b[39m"),
        vec![
            token(TokenKind::PlainText, "hello ", "", ""),
            token(TokenKind::EscapeCode, "\x1b[31m", "31", ""),
            token(TokenKind::EscapeCode, "\x1b[1C", "31", ""),
            token(TokenKind::PlainText, "world", "31", ""),
            token(TokenKind::EscapeCode, "\x1b[39m", "", ""),
        ]
    );
}

#[test]
fn test_ascii_reset() {
    assert_eq!(
        parse("\x1b[31;42mhello\x1b[1m world"),
        vec![
            token(TokenKind::EscapeCode, "\x1b[31;42m", "31", "42"),
            token(TokenKind::PlainText, "hello", "31", "42"),
            token(TokenKind::EscapeCode, "\x1b[1m", "", ""),
            token(TokenKind::PlainText, " world", "", ""),
        ]
    );
}

#[test]
fn test_bell_splits_plain_text() {
    let tokens = parse("ding\x07dong");
    assert_eq!(
        tokens,
        vec![
            token(TokenKind::PlainText, "ding", "", ""),
            token(TokenKind::ZeroWidth, "\x07", "", ""),
            token(TokenKind::PlainText, "dong", "", ""),
        ]
    );
    assert_eq!(tokens[1].len(), 1);
}

#[test]
fn test_unicode_string_with_ansi() {
    assert_eq!(
        parse("hello \x1b[31m👍🏼 \x1b[39mworld"),
        vec![
            token(TokenKind::PlainText, "hello ", "", ""),
            token(TokenKind::EscapeCode, "\x1b[31m", "31", ""),
            token(TokenKind::ComplexGlyph, "👍🏼", "31", ""),
            token(TokenKind::PlainText, " ", "31", ""),
            token(TokenKind::EscapeCode, "\x1b[39m", "", ""),
            token(TokenKind::PlainText, "world", "", ""),
        ]
    );
}

#[test]
fn test_sgr_reset_from_any_state() {
    let prior = ColorState {
        foreground: "38;5;208",
        background: "104",
    };
    assert_eq!(resolve_sgr("", prior), ColorState::default());
    assert_eq!(resolve_sgr("0", prior), ColorState::default());
}

#[test]
fn test_rgb_round_trip() {
    let colors = resolve_sgr("38;2;0;63;255", ColorState::default());
    assert_eq!(colors.foreground, "38;2;0;63;255");
    assert_eq!(colors.background, "");
}

#[test]
fn test_tokenizer_pulls_one_token_at_a_time() {
    let mut tokenizer = AnsiTokenizer::new("ab\x1b[33mcd");
    assert!(tokenizer.advance());
    assert_eq!(tokenizer.token().map(|t| t.content), Some("ab"));
    assert_eq!(tokenizer.position(), 2);
    assert!(tokenizer.advance());
    assert_eq!(tokenizer.token().map(|t| t.foreground), Some("33"));
    assert!(tokenizer.advance());
    assert_eq!(tokenizer.token().map(|t| (t.content, t.foreground)), Some(("cd", "33")));
    assert!(!tokenizer.advance());
    assert!(!tokenizer.advance());
}

#[test]
fn test_independent_cursors_share_input() {
    let input = "\x1b[31mone\x1b[32mtwo";
    let mut first = AnsiTokenizer::new(input);
    let mut second = AnsiTokenizer::new(input);

    first.advance();
    first.advance();
    second.advance();

    assert_eq!(first.colors().foreground, "31");
    assert_eq!(second.colors().foreground, "31");
    first.advance();
    first.advance();
    assert_eq!(first.colors().foreground, "32");
    assert_eq!(second.colors().foreground, "31");
}

#[test]
fn test_print_length_of_styled_text() {
    let total: usize = parse("\x1b[1;93mhi\x1b[0m 👍🏼\x07")
        .iter()
        .map(AnsiToken::print_length)
        .sum();
    assert_eq!(total, 4);
}

#[test]
fn test_parse_with_all_controls() {
    let kinds: Vec<_> = parse_with("a\r\nb", &AnsiConfig::all_controls())
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::PlainText,
            TokenKind::ZeroWidth,
            TokenKind::ZeroWidth,
            TokenKind::PlainText,
        ]
    );
}

#[test]
fn test_parser_and_tokenizer_agree_on_ascii() {
    let input = "\x1b[1mbold\x1b[0m \x1b]0;t\x07plain\x07\x1b[5A";
    let batch = AnsiParser::new().parse(input);
    let pulled: Vec<_> = AnsiTokenizer::new(input).collect();
    assert_eq!(batch, pulled);
}
