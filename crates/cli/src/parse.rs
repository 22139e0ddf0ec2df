//! Parsing helpers for click strings.

use animal_chess_core::Square;

/// Parses a concatenated click string like "b2b3b4b3" into a list of squares.
///
/// Reads two characters at a time, interpreting each pair as a square in
/// algebraic notation. Whitespace between pairs is ignored.
pub fn parse_click_string(input: &str) -> Result<Vec<Square>, String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err("Empty input".to_string());
    }
    if !compact.is_ascii() {
        return Err("Input must be ASCII".to_string());
    }
    if !compact.len().is_multiple_of(2) {
        return Err("Input length must be even (each click is 2 characters)".to_string());
    }

    let mut clicks = Vec::with_capacity(compact.len() / 2);
    for i in (0..compact.len()).step_by(2) {
        let click_str = &compact[i..i + 2];
        match click_str.parse::<Square>() {
            Ok(sq) => clicks.push(sq),
            Err(e) => {
                return Err(format!(
                    "Invalid square at position {}: '{click_str}' ({e})",
                    (i / 2) + 1
                ));
            }
        }
    }
    Ok(clicks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click_string_valid() {
        let clicks = parse_click_string("b2b3c4").unwrap();
        assert_eq!(clicks, vec![Square::B2, Square::B3, Square::C4]);
    }

    #[test]
    fn test_parse_click_string_with_spaces() {
        let clicks = parse_click_string(" b2 b3\tB4 ").unwrap();
        assert_eq!(clicks, vec![Square::B2, Square::B3, Square::B4]);
    }

    #[test]
    fn test_parse_click_string_empty() {
        assert!(parse_click_string("").is_err());
        assert!(parse_click_string("   ").is_err());
    }

    #[test]
    fn test_parse_click_string_odd_length() {
        assert!(parse_click_string("b2b").is_err());
    }

    #[test]
    fn test_parse_click_string_invalid_square() {
        let err = parse_click_string("b2d1").unwrap_err();
        assert!(err.starts_with("Invalid square at position 2: 'd1'"));
        assert!(parse_click_string("a5").is_err());
    }

    #[test]
    fn test_parse_click_string_non_ascii() {
        assert!(parse_click_string("b2é3").is_err());
    }
}
