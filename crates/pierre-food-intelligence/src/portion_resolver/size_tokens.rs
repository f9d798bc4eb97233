// ABOUTME: Lexical size-token table for menu sizes and sizing multiplier words
// ABOUTME: Resolves tokens like "venti", "footlong" or "family size" to grams, millilitres or multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;

/// What a size token resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeTokenValue {
    /// Absolute weight (g)
    Grams(f64),
    /// Absolute volume (ml)
    Millilitres(f64),
    /// Factor applied to a known base weight
    Multiplier(f64),
}

/// One size token and its meaning
#[derive(Debug, Clone, Copy)]
pub struct SizeToken {
    /// Token as written in the table
    pub token: &'static str,
    /// Resolved meaning
    pub value: SizeTokenValue,
}

impl SizeToken {
    const fn new(token: &'static str, value: SizeTokenValue) -> Self {
        Self { token, value }
    }
}

/// Token table in priority order
const SIZE_TOKENS: &[(&str, SizeToken)] = &[
    // Coffee-shop cup sizes
    (r"\btrenta\b", SizeToken::new("trenta", SizeTokenValue::Millilitres(916.0))),
    (r"\bventi\b", SizeToken::new("venti", SizeTokenValue::Millilitres(591.0))),
    (r"\bgrande\b", SizeToken::new("grande", SizeTokenValue::Millilitres(473.0))),
    (r"\btall\b", SizeToken::new("tall", SizeTokenValue::Millilitres(354.0))),
    // Sandwich lengths
    (r"\bfoot\s?long\b", SizeToken::new("footlong", SizeTokenValue::Grams(460.0))),
    (r#"\b(?:6|six)[\s-]?(?:inch|in\b|")"#, SizeToken::new("6 inch", SizeTokenValue::Grams(230.0))),
    // Multipliers
    (r"\bparty\s?size\b", SizeToken::new("party size", SizeTokenValue::Multiplier(4.0))),
    (r"\bfamily\s?(?:size|pack)?\b", SizeToken::new("family size", SizeTokenValue::Multiplier(3.0))),
    (r"\bking\s?size\b", SizeToken::new("king size", SizeTokenValue::Multiplier(1.5))),
    (r"\bjumbo\b", SizeToken::new("jumbo", SizeTokenValue::Multiplier(2.0))),
    (r"\bdouble\b", SizeToken::new("double", SizeTokenValue::Multiplier(2.0))),
    (r"\bcombo\b", SizeToken::new("combo", SizeTokenValue::Multiplier(1.5))),
    (r"\blarge\b", SizeToken::new("large", SizeTokenValue::Multiplier(1.5))),
    (r"\bsmall\b", SizeToken::new("small", SizeTokenValue::Multiplier(0.75))),
    (r"\bfun\s?size\b", SizeToken::new("fun size", SizeTokenValue::Multiplier(0.5))),
    (r"\bmini\b", SizeToken::new("mini", SizeTokenValue::Multiplier(0.5))),
];

static SIZE_MATCHERS: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    SIZE_TOKENS
        .iter()
        .map(|(pattern, _)| Regex::new(pattern).ok())
        .collect()
});

/// First size token (in table order) that occurs in the text
#[must_use]
pub fn find_size_token(text: &str) -> Option<SizeToken> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    SIZE_TOKENS
        .iter()
        .zip(SIZE_MATCHERS.iter())
        .find(|(_, matcher)| matcher.as_ref().is_some_and(|re| re.is_match(&text)))
        .map(|((_, token), _)| *token)
}
