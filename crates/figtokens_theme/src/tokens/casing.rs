//! Identifier casing for color token names

/// Quote-like punctuation dropped from color names
const PUNCTUATION: &[char] = &['`', '\'', '”', '“', '’', '‘', ',', '.', '"'];

/// Uppercase the first character, keep the rest as is
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a color name such as `"Tim’s_Color"` into `"timsColor"`
///
/// Only the first run of punctuation and the first underscore are touched;
/// later ones stay in the output.
pub fn camelize(name: &str) -> String {
    let stripped = strip_first_punctuation_run(name);
    let spaced = stripped.replacen('_', " ", 1);

    spaced
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn strip_first_punctuation_run(s: &str) -> String {
    let Some(start) = s.find(PUNCTUATION) else {
        return s.to_string();
    };
    let end = s[start..]
        .find(|c: char| !PUNCTUATION.contains(&c))
        .map_or(s.len(), |offset| start + offset);

    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..start]);
    out.push_str(&s[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_words_with_space() {
        assert_eq!(camelize("Good Day"), "goodDay");
        assert_eq!(camelize("Persian Green"), "persianGreen");
    }

    #[test]
    fn test_camelize_words_with_underscore() {
        assert_eq!(camelize("Tim’s_Color"), "timsColor");
        assert_eq!(camelize("Tim's_Color"), "timsColor");
    }

    #[test]
    fn test_camelize_only_touches_first_occurrence() {
        assert_eq!(camelize("a_b_c"), "aB_c");
        assert_eq!(camelize("It's Tim's"), "itsTim's");
    }

    #[test]
    fn test_camelize_strips_whole_first_run() {
        assert_eq!(camelize("\"Quoted\" Name"), "quoted\"Name");
        assert_eq!(camelize("Dr., Who"), "drWho");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("green"), "Green");
        assert_eq!(capitalize("gREEN"), "GREEN");
        assert_eq!(capitalize(""), "");
    }
}
