use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Localized strings for one language, keyed by translation key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle(BTreeMap<String, String>);

impl TranslationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up a key, falling back to the key itself when it is missing.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationBundle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_flat_object() {
        let json = r#"{"welcome": "Bienvenue", "about": "À propos"}"#;
        let bundle: TranslationBundle = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("welcome"), Some("Bienvenue"));
        assert_eq!(bundle.get("about"), Some("À propos"));
    }

    #[test]
    fn test_rejects_nested_values() {
        let json = r#"{"nav": {"home": "Home"}}"#;
        assert!(serde_json::from_str::<TranslationBundle>(json).is_err());
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let bundle: TranslationBundle = [("home", "Accueil")].into_iter().collect();

        assert_eq!(bundle.translate("home"), "Accueil");
        assert_eq!(bundle.translate("missing.key"), "missing.key");
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let bundle: TranslationBundle = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&bundle).expect("Should serialize");
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = TranslationBundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.iter().count(), 0);
    }
}
