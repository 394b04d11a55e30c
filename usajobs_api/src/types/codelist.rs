//! Response shape shared by every `/codelist/*` endpoint.

use serde::{Deserialize, Serialize};

/// Body returned by a code list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeListResponse {
    #[serde(rename = "CodeList", deserialize_with = "super::null_as_default")]
    pub code_list: Vec<CodeList>,

    /// Timestamp the list was generated by the API, as sent.
    #[serde(rename = "DateGenerated", deserialize_with = "super::null_as_default")]
    pub date_generated: String,
}

impl CodeListResponse {
    /// Iterates over every valid value across all lists, paired with the id
    /// of the list it came from.
    pub fn values(&self) -> impl Iterator<Item = (&str, &ValidValue)> {
        self.code_list
            .iter()
            .flat_map(|list| list.valid_value.iter().map(move |v| (list.id.as_str(), v)))
    }
}

/// One list of codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeList {
    #[serde(rename = "ValidValue", deserialize_with = "super::null_as_default")]
    pub valid_value: Vec<ValidValue>,

    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
}

/// A single code and its display value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidValue {
    #[serde(deserialize_with = "super::null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub last_modified: String,
    /// `"Yes"` or `"No"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_disabled: String,
}

impl ValidValue {
    pub fn disabled(&self) -> bool {
        self.is_disabled.eq_ignore_ascii_case("yes")
    }
}
