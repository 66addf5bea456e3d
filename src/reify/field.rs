//! Mapping struct fields to config keys.

/// Declaration metadata of a struct destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared field name.
    pub name: &'static str,
    /// Tag values by tag key, e.g. `("config", "alias")`.
    pub tags: &'static [(&'static str, &'static str)],
    /// Whether the field is visible outside its module. Hidden fields are never
    /// written.
    pub exported: bool,
}

impl FieldSpec {
    /// Returns the raw tag value stored under `tag`.
    pub fn tag(&self, tag: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(key, _)| *key == tag)
            .map(|(_, value)| *value)
    }

    /// The config key this field is read from under the tag key `tag`.
    pub fn key(&self, tag: &str) -> String {
        let explicit = self.tag(tag).map(parse_tags).unwrap_or_default();
        field_name(explicit, self.name)
    }
}

/// Splits a tag value of the form `name,opt,...` and returns the name.
///
/// Options after the first comma are reserved and ignored.
pub fn parse_tags(tag: &str) -> &str {
    tag.split(',').next().unwrap_or_default().trim()
}

/// Resolves the config key of a field.
///
/// An explicit (tag) name wins when non-empty. Otherwise the declared name is
/// used with any raw identifier prefix `r#` removed and its first character
/// lower-cased, so `Name` and `name` both read the key `name`.
pub fn field_name(explicit: &str, declared: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    let declared = declared.strip_prefix("r#").unwrap_or(declared);
    let mut chars = declared.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
