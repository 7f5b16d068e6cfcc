//! Name normalization helpers

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Marker the message dumps carry on names that were never finished
const ERROR_MARKER: &str = "[ERROR]";

/// Strip accents and other combining marks (compatibility decomposition,
/// combining characters dropped). `Miriel's Bell Bearing` is unchanged,
/// `Érdtree` becomes `Erdtree`.
pub fn remove_accents(s: &str) -> String {
    s.nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Clean a display name taken from a message table
pub fn strip_invalid_name(name: &str) -> String {
    name.replace(ERROR_MARKER, "").trim().to_string()
}

/// Key under which hand-maintained user data is stored for a display name
pub fn user_data_key(name: &str) -> String {
    name.replace(':', "")
}

/// Split message text into lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_accents() {
        assert_eq!(remove_accents("Ash of War: Glintblade Phalanx"), "Ash of War: Glintblade Phalanx");
        assert_eq!(remove_accents("Miquella's Lily"), "Miquella's Lily");
        assert_eq!(remove_accents("Lhutel the Headless Ëclat"), "Lhutel the Headless Eclat");
        assert_eq!(remove_accents("Dragoncrest Grëatshield"), "Dragoncrest Greatshield");
        assert_eq!(remove_accents("Sekiro\u{301}"), "Sekiro");
    }

    #[test]
    fn test_strip_invalid_name() {
        assert_eq!(strip_invalid_name("[ERROR]Smithing Stone [1] "), "Smithing Stone [1]");
        assert_eq!(strip_invalid_name("Glovewort"), "Glovewort");
    }

    #[test]
    fn test_user_data_key() {
        assert_eq!(user_data_key("Ash of War: Lion's Claw"), "Ash of War Lion's Claw");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("single"), vec!["single"]);
    }
}
