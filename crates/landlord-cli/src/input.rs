use core::fmt;
use landlord_core::model::rank::Rank;

/// A line of player input: a pass request or a candidate card group. Shape
/// and playability are judged later by the round; this layer only rejects
/// tokens outside the rank domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Pass,
    Cards(Vec<Rank>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidCards(Vec<String>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no cards entered"),
            ParseError::InvalidCards(symbols) => {
                write!(f, "invalid cards found: {}", symbols.join(" "))
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse one prompt line. Tokens are case-insensitive and whitespace
/// separated; `pass` (alone) requests a pass.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("pass") {
        return Ok(ParsedLine::Pass);
    }

    let tokens: Vec<String> = trimmed
        .split_whitespace()
        .map(|token| token.to_ascii_uppercase())
        .collect();
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut cards = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();
    for token in tokens {
        match token.parse::<Rank>() {
            Ok(rank) => cards.push(rank),
            Err(err) => invalid.push(err.symbol),
        }
    }

    if invalid.is_empty() {
        Ok(ParsedLine::Cards(cards))
    } else {
        Err(ParseError::InvalidCards(invalid))
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseError, ParsedLine, parse_line};
    use landlord_core::model::rank::Rank::*;

    #[test]
    fn pass_is_case_insensitive() {
        assert_eq!(parse_line("pass"), Ok(ParsedLine::Pass));
        assert_eq!(parse_line("  PASS  "), Ok(ParsedLine::Pass));
    }

    #[test]
    fn cards_parse_in_input_order() {
        assert_eq!(
            parse_line("10 j q k a"),
            Ok(ParsedLine::Cards(vec![Ten, Jack, Queen, King, Ace]))
        );
        assert_eq!(
            parse_line("b r"),
            Ok(ParsedLine::Cards(vec![BlackJoker, RedJoker]))
        );
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(parse_line(""), Err(ParseError::Empty));
        assert_eq!(parse_line("   "), Err(ParseError::Empty));
    }

    #[test]
    fn unknown_tokens_are_reported_together() {
        assert_eq!(
            parse_line("3 X 4 joker"),
            Err(ParseError::InvalidCards(vec![
                "X".to_string(),
                "JOKER".to_string()
            ]))
        );
    }
}
