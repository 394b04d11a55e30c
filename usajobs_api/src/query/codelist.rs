use chrono::NaiveDate;

use crate::Error;

use super::common::{Query, QueryParams};

/// Options shared by every `/codelist/*` endpoint.
#[derive(Debug, Clone, Default)]
pub struct CodeListQuery {
    /// Only return codes modified on or after this date.
    pub last_modified: Option<NaiveDate>,
}

impl Query for CodeListQuery {
    fn encode(&self, params: &mut QueryParams) -> Result<(), Error> {
        params.optional("lastmodified", &self.last_modified)?;
        Ok(())
    }
}

impl CodeListQuery {
    pub fn with_last_modified(mut self, last_modified: NaiveDate) -> Self {
        self.last_modified = Some(last_modified);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{CodeListQuery, Query};

    #[test]
    fn test_codelist_query() {
        assert!(CodeListQuery::default().to_query_params().unwrap().is_empty());

        let params = CodeListQuery::default()
            .with_last_modified(NaiveDate::from_ymd_opt(2023, 11, 5).unwrap())
            .to_query_params()
            .unwrap();
        insta::assert_snapshot!(params.to_query_string(), @"lastmodified=2023-11-05");
    }
}
