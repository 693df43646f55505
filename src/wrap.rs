//! Greedy word-level text wrapping.
//!
//! The wrapper has no font knowledge: callers supply a `measure` closure
//! (typically backed by [`crate::fonts::TextPainter::measure`]) so wrapping
//! and drawing share the same metrics.

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// Text is normalized to uppercase first (meme convention, applied
/// uniformly). Words are accumulated greedily; a line is closed when
/// adding the next word would exceed `max_width`. A single word wider
/// than `max_width` is never split mid-word; it overflows the box
/// horizontally, which is accepted behavior.
///
/// An empty or whitespace-only input produces exactly one empty line so
/// that downstream vertical positioning still reserves the line slot.
pub fn wrap<F>(text: &str, max_width: f32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    let upper = text.to_uppercase();
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in upper.split_whitespace() {
        let test = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure(&test) > max_width && !current.is_empty() {
            lines.push(current);
            current = word.to_string();
        } else {
            current = test;
        }
    }

    // Flush the last line. For empty input this yields the single
    // reserved empty line.
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Fixed-advance measurement: 10px per character.
    fn char_measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("hello", 100.0, char_measure), vec!["HELLO"]);
    }

    #[test]
    fn uppercases_all_input() {
        let lines = wrap("Mixed Case words", 1000.0, char_measure);
        assert_eq!(lines, vec!["MIXED CASE WORDS"]);
        assert!(lines.iter().all(|l| !l.chars().any(|c| c.is_lowercase())));
    }

    #[test]
    fn splits_at_word_boundaries() {
        // "ONE DOES" = 80px fits in 90; adding " NOT" would be 120
        let lines = wrap("one does not simply", 90.0, char_measure);
        assert_eq!(lines, vec!["ONE DOES", "NOT", "SIMPLY"]);
    }

    #[test]
    fn overwide_word_is_never_split() {
        let lines = wrap("hi incomprehensibilities", 50.0, char_measure);
        assert_eq!(lines, vec!["HI", "INCOMPREHENSIBILITIES"]);
    }

    #[test]
    fn single_overwide_word_is_one_line() {
        let lines = wrap("incomprehensibilities", 50.0, char_measure);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn empty_text_reserves_one_line() {
        assert_eq!(wrap("", 100.0, char_measure), vec![String::new()]);
        assert_eq!(wrap("   ", 100.0, char_measure), vec![String::new()]);
    }

    #[test]
    fn wider_box_never_increases_line_count() {
        let text = "the quick brown fox jumps over the lazy dog";
        let mut prev = usize::MAX;
        for w in [60.0, 90.0, 120.0, 200.0, 500.0] {
            let count = wrap(text, w, char_measure).len();
            assert!(count <= prev, "line count grew when width increased");
            prev = count;
        }
    }
}
