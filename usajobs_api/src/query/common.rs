//! Shared query infrastructure: the [`Query`] trait, the [`QueryParams`]
//! encoder, and the [`QueryValue`] conversions it accepts.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::Error;

/// Separator used for multi-value parameters unless a field says otherwise.
pub const DEFAULT_DELIMITER: char = ';';

/// Trait implemented by every options value. Each implementation is the
/// field table for its shape: it names the wire key of every field and
/// whether the field is optional, required, or delimiter-joined.
pub trait Query {
    /// Writes this value's fields into `params`, in wire order.
    fn encode(&self, params: &mut QueryParams) -> Result<(), Error>;

    /// Encodes this value into an ordered list of query pairs.
    fn to_query_params(&self) -> Result<QueryParams, Error> {
        let mut params = QueryParams::default();
        self.encode(&mut params)?;
        Ok(params)
    }
}

/// A scalar that can be written as a single query parameter value.
///
/// `is_empty_value` reports the zero value for the type (empty string, `0`,
/// `false`, `None`), which optional fields drop from the query string.
pub trait QueryValue {
    fn is_empty_value(&self) -> bool;
    fn to_query_value(&self) -> Result<String, String>;
}

impl QueryValue for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl QueryValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.clone())
    }
}

impl QueryValue for i64 {
    fn is_empty_value(&self) -> bool {
        *self == 0
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl QueryValue for bool {
    fn is_empty_value(&self) -> bool {
        !*self
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl QueryValue for NaiveDate {
    fn is_empty_value(&self) -> bool {
        false
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
    fn to_query_value(&self) -> Result<String, String> {
        match self {
            Some(value) => value.to_query_value(),
            None => Ok(String::new()),
        }
    }
}

/// Ordered set of encoded query pairs.
///
/// Pairs keep the order in which fields were written, so the same options
/// value always produces the same query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Appends `key=value` unless the value is its type's zero value.
    pub fn optional<V>(&mut self, key: &'static str, value: &V) -> Result<&mut Self, Error>
    where
        V: QueryValue + ?Sized,
    {
        if value.is_empty_value() {
            return Ok(self);
        }
        self.required(key, value)
    }

    /// Appends `key=value` even when the value is empty.
    pub fn required<V>(&mut self, key: &'static str, value: &V) -> Result<&mut Self, Error>
    where
        V: QueryValue + ?Sized,
    {
        let value = value
            .to_query_value()
            .map_err(|reason| Error::Encoding { field: key, reason })?;
        self.pairs.push((key.to_string(), value));
        Ok(self)
    }

    /// Appends the elements of `values` joined by `delimiter` as a single
    /// parameter. Empty elements are skipped and an empty sequence writes
    /// nothing. An element that itself contains the delimiter is rejected,
    /// since the server could not split it back apart.
    pub fn joined<V>(
        &mut self,
        key: &'static str,
        values: &[V],
        delimiter: char,
    ) -> Result<&mut Self, Error>
    where
        V: QueryValue,
    {
        let mut parts = Vec::with_capacity(values.len());
        for value in values.iter().filter(|v| !v.is_empty_value()) {
            let part = value
                .to_query_value()
                .map_err(|reason| Error::Encoding { field: key, reason })?;
            if part.contains(delimiter) {
                return Err(Error::Encoding {
                    field: key,
                    reason: format!("value {:?} contains the delimiter {:?}", part, delimiter),
                });
            }
            parts.push(part);
        }
        if parts.is_empty() {
            return Ok(self);
        }
        self.pairs
            .push((key.to_string(), parts.join(&delimiter.to_string())));
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the first value written under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencodes the pairs (`a=1&b=x%3By`). Empty when no pairs were
    /// written.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_skips_zero_values() {
        let mut params = QueryParams::default();
        params
            .optional("Keyword", "")
            .unwrap()
            .optional("Radius", &0i64)
            .unwrap()
            .optional("RemoteIndicator", &false)
            .unwrap()
            .optional("Fields", &None::<String>)
            .unwrap();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn required_keeps_empty_values() {
        let mut params = QueryParams::default();
        params.required("lastmodified", "").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.to_query_string(), "lastmodified=");
    }

    #[test]
    fn joined_uses_delimiter_in_order() {
        let mut params = QueryParams::default();
        params
            .joined(
                "JobCategoryCode",
                &["2210".to_string(), "0854".to_string()],
                DEFAULT_DELIMITER,
            )
            .unwrap();
        assert_eq!(params.get("JobCategoryCode"), Some("2210;0854"));
        assert_eq!(params.to_query_string(), "JobCategoryCode=2210%3B0854");
    }

    #[test]
    fn joined_honors_custom_delimiter() {
        let mut params = QueryParams::default();
        params.joined("JobGradeCode", &[12i64, 13, 14], ',').unwrap();
        assert_eq!(params.get("JobGradeCode"), Some("12,13,14"));
    }

    #[test]
    fn joined_skips_empty_sequences_and_elements() {
        let mut params = QueryParams::default();
        let none: [String; 0] = [];
        params
            .joined("Organization", &none, DEFAULT_DELIMITER)
            .unwrap()
            .joined("HiringPath", &[String::new()], DEFAULT_DELIMITER)
            .unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn joined_rejects_element_containing_delimiter() {
        let mut params = QueryParams::default();
        let err = params
            .joined(
                "LocationName",
                &["Austin;Texas".to_string()],
                DEFAULT_DELIMITER,
            )
            .unwrap_err();
        match err {
            Error::Encoding { field, .. } => assert_eq!(field, "LocationName"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pairs_keep_write_order() {
        let mut params = QueryParams::default();
        params
            .optional("b", "2")
            .unwrap()
            .optional("a", "1")
            .unwrap();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn dates_use_iso_format() {
        let mut params = QueryParams::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        params.optional("lastmodified", &Some(date)).unwrap();
        assert_eq!(params.get("lastmodified"), Some("2024-03-01"));
    }
}
