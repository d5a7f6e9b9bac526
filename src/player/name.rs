/// Display form of a player name: trimmed, single-spaced, first letter of
/// each word upper-cased. The rest of each word is left as typed so names
/// like "DeShawn" survive.
pub fn capitalize_words(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
