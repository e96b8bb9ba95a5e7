use std::borrow::Cow;
use std::collections::hash_map::{self, HashMap};

/// **DECODED FORM FIELDS**
///
/// Maps each field name to its values in encounter order. Every key that
/// appears in the encoded input has at least one value (possibly empty);
/// absent keys are answered with the caller's default and never inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: HashMap<String, Vec<String>>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value for `name`, or `default` if the field is absent.
    pub fn get<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map_or(default, String::as_str)
    }

    /// First non-empty value for `name`, skipping blank entries.
    pub fn first_non_blank(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .iter()
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }

    /// Like [`get`](Self::get), but blank values are skipped and a field with
    /// no non-empty value yields `default`.
    pub fn get_non_blank<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.first_non_blank(name).unwrap_or(default)
    }

    /// All values for `name`, empty if absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of distinct field names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Vec<String>> {
        self.fields.iter()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    /// Moves every value of `other` behind the values already held per key.
    pub fn append(&mut self, other: FormFields) {
        for (name, values) in other.fields {
            self.fields.entry(name).or_default().extend(values);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

impl<'a> IntoIterator for &'a FormFields {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = hash_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Decodes an `application/x-www-form-urlencoded` body.
///
/// Bytes that are not valid UTF-8 after percent-decoding are replaced with
/// U+FFFD. Decoding never fails; an empty body gives empty fields.
pub fn parse_form_body(data: &[u8]) -> FormFields {
    data.split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.iter().position(|&b| b == b'=') {
            Some(pos) => (decode_component(&pair[..pos]), decode_component(&pair[pos + 1..])),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Decodes a query string with the same rules as [`parse_form_body`].
pub fn parse_query_string(query: &str) -> FormFields {
    parse_form_body(query.as_bytes())
}

/// `+` becomes a space, then `%XX` escapes are decoded. Malformed escapes
/// are kept literally.
fn decode_component(raw: &[u8]) -> String {
    let spaced: Cow<'_, [u8]> = if raw.contains(&b'+') {
        Cow::Owned(raw.iter().map(|&b| if b == b'+' { b' ' } else { b }).collect())
    } else {
        Cow::Borrowed(raw)
    };

    let decoded = urlencoding::decode_binary(&spaced);
    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contact_submission() {
        let fields = parse_form_body(b"name=Alice&email=a%40b.com&message=Hi+there");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get_all("name"), ["Alice"]);
        assert_eq!(fields.get_all("email"), ["a@b.com"]);
        assert_eq!(fields.get_all("message"), ["Hi there"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_form_body(b"").is_empty());
        assert!(parse_query_string("").is_empty());
        assert!(parse_form_body(b"&&").is_empty());
    }

    #[test]
    fn test_key_without_equals_maps_to_empty_value() {
        let fields = parse_form_body(b"flag&name=Bob");
        assert!(fields.contains("flag"));
        assert_eq!(fields.get_all("flag"), [""]);
        assert_eq!(fields.get("flag", "default"), "");
    }

    #[test]
    fn test_blank_values_are_kept() {
        let fields = parse_form_body(b"name=&email=");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("name", "Guest"), "");
        assert_eq!(fields.get_non_blank("name", "Guest"), "Guest");
    }

    #[test]
    fn test_first_non_blank_skips_blank_entries() {
        let fields = parse_form_body(b"name=&name=Bob&name=Carol&email=");
        assert_eq!(fields.get_all("name"), ["", "Bob", "Carol"]);
        assert_eq!(fields.get("name", "Guest"), "");
        assert_eq!(fields.first_non_blank("name"), Some("Bob"));
        assert_eq!(fields.get_non_blank("name", "Guest"), "Bob");
        assert_eq!(fields.first_non_blank("email"), None);
        assert_eq!(fields.first_non_blank("message"), None);
    }

    #[test]
    fn test_repeated_keys_keep_encounter_order() {
        let fields = parse_query_string("tag=b&tag=a&other=1&tag=c");
        assert_eq!(fields.get_all("tag"), ["b", "a", "c"]);
        assert_eq!(fields.get("tag", ""), "b");
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let fields = parse_query_string("expr=a=b&k==");
        assert_eq!(fields.get("expr", ""), "a=b");
        assert_eq!(fields.get("k", ""), "=");
    }

    #[test]
    fn test_plus_and_percent_in_keys_and_values() {
        let fields = parse_query_string("first+name=J%C3%BCrgen&a%2Bb=1%2B1");
        assert_eq!(fields.get("first name", ""), "Jürgen");
        assert_eq!(fields.get("a+b", ""), "1+1");
    }

    #[test]
    fn test_malformed_escapes_pass_through() {
        let fields = parse_query_string("a=100%&b=%zz&c=%4");
        assert_eq!(fields.get("a", ""), "100%");
        assert_eq!(fields.get("b", ""), "%zz");
        assert_eq!(fields.get("c", ""), "%4");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let fields = parse_query_string("name=%FF%FEok");
        assert_eq!(fields.get("name", ""), "\u{FFFD}\u{FFFD}ok");
    }

    #[test]
    fn test_absent_field_uses_default() {
        let fields = parse_query_string("name=Bob");
        assert_eq!(fields.get("email", "Not provided"), "Not provided");
        assert!(fields.get_all("email").is_empty());
        assert!(!fields.contains("email"));
    }

    #[test]
    fn test_round_trip_through_urlencoding() {
        let original = [
            ("name", "Zoë O'Brien"),
            ("email", "zoe+tag@example.com"),
            ("message", "1 + 1 = 2 & 50% off\r\nsecond line"),
            ("ключ", "значение"),
        ];
        let encoded = original
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let fields = parse_query_string(&encoded);
        assert_eq!(fields.len(), original.len());
        for (key, value) in original {
            assert_eq!(fields.get_all(key), [value]);
        }
    }

    #[test]
    fn test_append_keeps_existing_values_first() {
        let mut body = parse_query_string("name=FromBody");
        body.append(parse_query_string("name=FromQuery&page=2"));

        assert_eq!(body.get_all("name"), ["FromBody", "FromQuery"]);
        assert_eq!(body.get("page", ""), "2");
    }

    #[test]
    fn test_from_iterator() {
        let fields: FormFields = vec![("a", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        assert_eq!(fields.get_all("a"), ["1", "2"]);
        assert_eq!((&fields).into_iter().count(), 2);
    }
}
