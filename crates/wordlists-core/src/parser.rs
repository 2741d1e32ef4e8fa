use indexmap::IndexMap;
use indexmap::map::Entry;
use regex::Regex;

use crate::error::{Error, Result};
use crate::topic::topic_key;
use crate::writer::INDEX_FILE;

/// Topic key -> raw words, in the order topics appear in the source
pub type TopicMap = IndexMap<String, Vec<String>>;

const HEADING_MARKER: &str = "##";
const COMMENT_MARKER: char = '#';
const NAME_SEPARATOR: char = ':';

/// Splits a word list into topic sections.
///
/// ```text
/// ## 5. Alimentación          <- heading, key "alimentación"
/// ## 6. Tema: Trabajo         <- heading, key "trabajo"
/// # comment                   <- ignored
/// pareja de hecho             <- entry of the active topic
/// ```
pub struct VocabularyParser {
    heading_prefix: Regex,
}

impl VocabularyParser {
    pub fn new() -> Self {
        Self {
            // Marker plus an optional "N." section number
            heading_prefix: Regex::new(r"^#+\s*\d*\.?\s*").expect("heading pattern is valid"),
        }
    }

    pub fn parse(&self, text: &str) -> Result<TopicMap> {
        let mut topics = TopicMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in text.split('\n').enumerate() {
            let line = raw.trim();

            if line.starts_with(HEADING_MARKER) {
                let key = self.heading_key(line);
                if key.is_empty() {
                    return Err(Error::EmptyTopicKey { line: idx + 1 });
                }
                if !is_file_safe(&key) {
                    return Err(Error::UnusableTopicKey { line: idx + 1, key });
                }

                match topics.entry(key.clone()) {
                    Entry::Occupied(_) => {
                        tracing::warn!("Topic {key} declared again on line {}", idx + 1);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(Vec::new());
                    }
                }
                current = Some(key);
                continue;
            }

            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            if let Some(words) = current.as_ref().and_then(|key| topics.get_mut(key)) {
                words.push(line.to_string());
            }
        }

        Ok(topics)
    }

    fn heading_key(&self, line: &str) -> String {
        let heading = self.heading_prefix.replace(line, "");
        let name = match heading.split_once(NAME_SEPARATOR) {
            Some((_, after)) => after,
            None => heading.as_ref(),
        };
        topic_key(name)
    }
}

/// Keys become `<key>.json` inside the level directory
fn is_file_safe(key: &str) -> bool {
    !key.contains(['/', '\\'])
        && key != ".."
        && format!("{key}.json") != INDEX_FILE
}

impl Default for VocabularyParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> TopicMap {
        VocabularyParser::new().parse(text).unwrap()
    }

    #[test]
    fn numbered_headings_become_keys() {
        let topics = parse("## 1. Alimentación\nmúsculo\nhueso\n## 2. Trabajo\ntrabajo\n");

        assert_eq!(topics.len(), 2);
        assert_eq!(topics["alimentación"], vec!["músculo", "hueso"]);
        assert_eq!(topics["trabajo"], vec!["trabajo"]);
    }

    #[test]
    fn keys_keep_discovery_order() {
        let topics = parse("## Zeta\na\n## Alfa\nb\n## Media\nc\n");
        let keys: Vec<&str> = topics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alfa", "media"]);
    }

    #[test]
    fn text_after_colon_names_the_topic() {
        let topics = parse("## 12. Nociones específicas: Viajes, alojamiento y transporte\nbillete\n");
        assert_eq!(topics["viajes,_alojamiento_y_transporte"], vec!["billete"]);
    }

    #[test]
    fn comments_blanks_and_preamble_are_skipped() {
        let text = "preámbulo\n# nota\n\n## Ocio\n  cine  \n# otra nota\n\n teatro\n";
        let topics = parse(text);

        assert_eq!(topics.len(), 1);
        assert_eq!(topics["ocio"], vec!["cine", "teatro"]);
    }

    #[test]
    fn entries_are_not_deduplicated() {
        let topics = parse("## Ocio\ncine\ncine\nComida de Navidad\n");
        assert_eq!(topics["ocio"], vec!["cine", "cine", "Comida de Navidad"]);
    }

    #[test]
    fn repeated_heading_appends_to_existing_topic() {
        let topics = parse("## Ocio\ncine\n## Trabajo\njefe\n## Ocio\nteatro\n");

        let keys: Vec<&str> = topics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ocio", "trabajo"]);
        assert_eq!(topics["ocio"], vec!["cine", "teatro"]);
    }

    #[test]
    fn empty_heading_is_rejected() {
        let err = VocabularyParser::new()
            .parse("## Ocio\ncine\n## 3.\nhueso\n")
            .unwrap_err();
        assert!(matches!(err, Error::EmptyTopicKey { line: 3 }));

        let err = VocabularyParser::new().parse("## Tema:   \n").unwrap_err();
        assert!(matches!(err, Error::EmptyTopicKey { line: 1 }));
    }

    #[test]
    fn path_like_headings_are_rejected() {
        let parser = VocabularyParser::new();

        let err = parser.parse("## Ocio\ncine\n## Compras/Tiendas\npan\n").unwrap_err();
        assert!(matches!(
            err,
            Error::UnusableTopicKey { line: 3, ref key } if key == "compras/tiendas"
        ));

        let err = parser.parse("## ./../../fuera\nx\n").unwrap_err();
        assert!(matches!(err, Error::UnusableTopicKey { line: 1, .. }));

        let err = parser.parse("## 4. Casa\\Jardín\n").unwrap_err();
        assert!(matches!(err, Error::UnusableTopicKey { line: 1, .. }));

        let err = parser.parse("## 9. ..\n").unwrap_err();
        assert!(matches!(err, Error::UnusableTopicKey { line: 1, .. }));
    }

    #[test]
    fn heading_named_like_the_index_is_rejected() {
        let err = VocabularyParser::new().parse("## 1. Index\nlista\n").unwrap_err();
        assert!(matches!(
            err,
            Error::UnusableTopicKey { line: 1, ref key } if key == "index"
        ));
    }

    #[test]
    fn dots_inside_a_name_are_allowed() {
        let topics = parse("## 3. Ciencia y tecnología: Internet v2.0\nred\n");
        assert_eq!(topics["internet_v2.0"], vec!["red"]);
    }

    #[test]
    fn crlf_input_is_handled() {
        let topics = parse("## Vivienda\r\npiso\r\n");
        assert_eq!(topics["vivienda"], vec!["piso"]);
    }
}
