//! Text normalization used by key and value search

use unicode_normalization::UnicodeNormalization;

/// Toggles for the normalization pipeline; every step is enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub lower_case: bool,
    pub normalize_letters: bool,
    pub trim_spaces: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lower_case: true,
            normalize_letters: true,
            trim_spaces: true,
        }
    }
}

/// Apply, in order: lower-casing, accent stripping, trimming.
pub fn normalize_text(text: &str, options: &NormalizeOptions) -> String {
    let mut result = if options.lower_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if options.normalize_letters {
        result = strip_diacritics(&result);
    }

    if options.trim_spaces {
        result = result.trim().to_string();
    }

    result
}

/// Canonical decomposition followed by removal of the combining diacritical
/// marks block (U+0300..=U+036F).
fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_diacritic(*c)).collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize_text("  Dragón ÉPICO ", &options), "dragon epico");
        assert_eq!(normalize_text("Ñandú", &options), "nandu");
    }

    #[test]
    fn test_steps_are_independent() {
        let keep_case = NormalizeOptions { lower_case: false, ..Default::default() };
        assert_eq!(normalize_text(" Árbol ", &keep_case), "Arbol");

        let keep_accents = NormalizeOptions { normalize_letters: false, ..Default::default() };
        assert_eq!(normalize_text(" Árbol ", &keep_accents), "árbol");

        let keep_spaces = NormalizeOptions { trim_spaces: false, ..Default::default() };
        assert_eq!(normalize_text(" Árbol ", &keep_spaces), " arbol ");
    }

    #[test]
    fn test_decomposed_input_matches_composed() {
        let options = NormalizeOptions::default();
        assert_eq!(
            normalize_text("Cafe\u{0301}", &options),
            normalize_text("Café", &options)
        );
    }

    #[test]
    fn test_non_latin_text_is_preserved() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize_text("ドラゴン", &options), "ドラゴン".nfd().collect::<String>());
    }
}
