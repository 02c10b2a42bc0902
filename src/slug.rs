/// Converts arbitrary text into a URL-safe identifier usable as a file stem:
/// lowercased, punctuation stripped, separator runs collapsed to single hyphens.
/// May return an empty string; uniqueness is the index's problem, not ours.
pub(crate) fn slugify(text: &str) -> String {
    let text = text.to_lowercase();
    let text = regex::Regex::new(r"[^\w\s-]")
        .unwrap()
        .replace_all(&text, "");
    let text = regex::Regex::new(r"[\s_-]+").unwrap().replace_all(&text, "-");
    text.trim_matches('-').to_string()
}
