//! Slug derivation and validation for note identifiers.
//!
//! Supplied slugs are ASCII identifiers of letters, digits, hyphens, and
//! underscores. Derived slugs come from free-form titles: Cyrillic is
//! transliterated to ASCII, everything is lowercased, and runs of other
//! characters collapse into single hyphens.

/// Return `true` when `value` is acceptable as a supplied slug.
pub fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// Derive a slug from free-form text.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut boundary = false;
    for ch in text.chars() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        if lower.is_ascii_alphanumeric() {
            flush_boundary(&mut slug, &mut boundary);
            slug.push(lower);
        } else if let Some(mapped) = transliterate(lower) {
            // Hard and soft signs map to the empty string and vanish.
            if !mapped.is_empty() {
                flush_boundary(&mut slug, &mut boundary);
                slug.push_str(mapped);
            }
        } else {
            boundary = !slug.is_empty();
        }
    }
    slug
}

fn flush_boundary(slug: &mut String, boundary: &mut bool) {
    if *boundary {
        slug.push('-');
        *boundary = false;
    }
}

fn transliterate(ch: char) -> Option<&'static str> {
    Some(match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    })
}
