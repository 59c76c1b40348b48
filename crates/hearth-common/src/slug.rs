//! URL-safe slugs for listing names.
//!
//! Slugs appear as the middle segment of every stored image path, so they
//! must only contain lowercase ASCII letters, digits and single dashes.

/// Convert a human-readable name into a slug.
///
/// Common Latin-1 letters are transliterated, every other run of
/// non-alphanumeric characters collapses into a single `-`, and leading or
/// trailing dashes are removed. The result may be empty when the input has
/// no usable characters.
///
/// # Examples
///
/// ```
/// use hearth_common::slug::slugify;
///
/// assert_eq!(slugify("3 BHK Flat -- Sector 17"), "3-bhk-flat-sector-17");
/// assert_eq!(slugify("Château Müller"), "chateau-mueller");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        let mapped = match ch {
            'ä' | 'Ä' => "ae",
            'ö' | 'Ö' => "oe",
            'ü' | 'Ü' => "ue",
            'ß' => "ss",
            'à' | 'á' | 'â' | 'ã' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Å' => "a",
            'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
            'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
            'ò' | 'ó' | 'ô' | 'õ' | 'Ò' | 'Ó' | 'Ô' | 'Õ' => "o",
            'ù' | 'ú' | 'û' | 'Ù' | 'Ú' | 'Û' => "u",
            'ç' | 'Ç' => "c",
            'ñ' | 'Ñ' => "n",
            c if c.is_ascii_alphanumeric() => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c.to_ascii_lowercase());
                continue;
            }
            _ => {
                pending_dash = true;
                continue;
            }
        };

        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;
        slug.push_str(mapped);
    }

    slug
}
