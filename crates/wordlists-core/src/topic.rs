//! Topic key normalization and display names.

/// Normalize heading text into a topic key: trimmed, lowercased, spaces as `_`
pub fn topic_key(heading: &str) -> String {
    heading.trim().to_lowercase().replace(' ', "_")
}

/// `viajes,_alojamiento_y_transporte` -> `viajes, alojamiento y transporte`
pub fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Fallback display name derived from the key alone
pub fn default_display_name(key: &str) -> String {
    title_case(&humanize(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercased_with_underscores() {
        assert_eq!(topic_key("  Salud e Higiene "), "salud_e_higiene");
        assert_eq!(topic_key("Alimentación"), "alimentación");
    }

    #[test]
    fn title_case_restarts_after_punctuation() {
        assert_eq!(
            default_display_name("viajes,_alojamiento_y_transporte"),
            "Viajes, Alojamiento Y Transporte"
        );
        assert_eq!(default_display_name("ÉXITO_personal"), "Éxito Personal");
    }

    #[test]
    fn title_case_keeps_non_letters() {
        assert_eq!(title_case("nivel b1-b2"), "Nivel B1-B2");
    }
}
