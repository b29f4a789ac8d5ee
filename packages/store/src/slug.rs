//! URL slugs derived from titles and names.

/// Latin spelling of a lowercase Cyrillic letter.
fn transliterate(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' | 'ы' => "y",
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
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// `"Concrete  M300, prices!"` → `"concrete-m300-prices"`.
///
/// Lowercases, keeps `[a-z0-9]`, turns whitespace, `-` and `_` into single
/// hyphens and trims hyphens at both ends. Everything else, Cyrillic
/// included, is dropped.
pub fn slugify(input: &str) -> String {
    slug_with(input, |_| None)
}

/// Like [`slugify`], but spells Cyrillic letters in Latin instead of
/// dropping them: `"Бетон М300"` → `"beton-m300"`.
///
/// Never applied automatically; the editor offers it as an explicit action.
pub fn transliterated_slug(input: &str) -> String {
    slug_with(input, transliterate)
}

fn slug_with(input: &str, spell: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if let Some(latin) = spell(c) {
            out.push_str(latin);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Whether `slug` is already in the shape [`slugify`] produces.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Slug value after the source field changed to `new_source`.
///
/// Derived only while the slug is empty. A cleared slug starts following
/// the source again.
pub fn follow_source(current_slug: &str, new_source: &str) -> String {
    if current_slug.is_empty() {
        slugify(new_source)
    } else {
        current_slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_non_ascii() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Кровля и фасад"), "");
        assert_eq!(slugify("Бетон  М300 — цены!"), "300");
        assert_eq!(slugify("  Gravel_and sand "), "gravel-and-sand");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_transliterated_slug_spells_cyrillic() {
        assert_eq!(transliterated_slug("Бетон  М300 — цены!"), "beton-m300-tseny");
        assert_eq!(transliterated_slug("  Щебень_и песок "), "shcheben-i-pesok");
        assert_eq!(transliterated_slug("Объём работ"), "obem-rabot");
    }

    #[test]
    fn test_slugs_are_valid() {
        for title in ["How to choose a contractor?", "2024: year in review", "a -- b"] {
            assert!(is_valid_slug(&slugify(title)), "{title}");
        }
        assert!(is_valid_slug(&transliterated_slug("Как выбрать подрядчика?")));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_slug_is_derived_only_while_empty() {
        let slug = follow_source("", "R");
        assert_eq!(slug, "r");
        // Once filled, later title edits leave it alone.
        assert_eq!(follow_source(&slug, "Roofing"), "r");
        assert_eq!(follow_source("my-roof", "Roofing 2"), "my-roof");
    }

    #[test]
    fn test_cleared_slug_resumes_following() {
        assert_eq!(follow_source("", "Roofing and facade"), "roofing-and-facade");
    }
}
