// src/slug.rs
//! URL-safe slugs: lowercase, accents folded, non-alphanumeric runs collapsed
//! to single hyphens. Idempotent; uniqueness is the caller's concern.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Fold the accented characters the catalogue actually produces (Spanish
/// display names plus the occasional Portuguese/French club name).
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}

pub fn slugify(text: &str) -> String {
    static RE_NON_ALNUM: OnceCell<Regex> = OnceCell::new();
    let re = RE_NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered: String = text.to_lowercase().chars().map(fold_char).collect();
    re.replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
