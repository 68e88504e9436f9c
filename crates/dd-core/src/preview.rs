//! Plain-text excerpts of rich doubt bodies

const MARKUP: &[char] = &['#', '*', '_', '`', '$', '>', '~'];

/// Strip markdown/LaTeX markers, collapse whitespace and cut to
/// `max_chars` characters, appending an ellipsis when shortened.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let plain = body
        .split_whitespace()
        .map(|word| word.replace(MARKUP, ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if plain.chars().count() <= max_chars {
        return plain;
    }

    let mut cut: String = plain.chars().take(max_chars).collect();
    let trimmed_len = cut.trim_end().len();
    cut.truncate(trimmed_len);
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        assert_eq!(
            excerpt("## Why is **$x^2$** always\n\n positive?", 100),
            "Why is x^2 always positive?"
        );
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        assert_eq!(excerpt("résumé résumé", 7), "résumé…");
        assert_eq!(excerpt("short", 5), "short");
    }

    #[test]
    fn test_strips_markup_before_punctuation() {
        assert_eq!(
            excerpt("How do I evaluate **∫ eˣ sin x dx**? Using `parts`.", 100),
            "How do I evaluate ∫ eˣ sin x dx? Using parts."
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(excerpt("  ** ", 10), "");
    }
}
