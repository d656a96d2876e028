// src/roulette/parse.rs

/// Splits a raw comma-delimited string into participant names.
///
/// Each piece is trimmed of surrounding whitespace and empty pieces are
/// dropped, so `" a, b ,,c , "` parses to `["a", "b", "c"]`. Order is
/// preserved and duplicates are kept. Never fails; malformed input just
/// yields a short or empty list, validated downstream.
pub fn parse_participants(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_segments() {
        assert_eq!(parse_participants(" a, b ,,c , "), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert_eq!(parse_participants(""), Vec::<String>::new());
        assert_eq!(parse_participants("  ,  , "), Vec::<String>::new());
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(
            parse_participants("Carol,Alice,Bob,Alice"),
            vec!["Carol", "Alice", "Bob", "Alice"]
        );
    }

    #[test]
    fn keeps_internal_whitespace() {
        assert_eq!(
            parse_participants("Ann Marie, Bob"),
            vec!["Ann Marie", "Bob"]
        );
    }

    #[test]
    fn single_name_parses_to_single_entry() {
        assert_eq!(parse_participants("OnlyOne"), vec!["OnlyOne"]);
    }
}
