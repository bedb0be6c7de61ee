//! Query parameter types for the bib endpoints.
//!
//! The Platform API expects multi-value identifier filters as a single
//! comma-separated query value, e.g. `standardNumber=9780316230032,0674976002`.

use crate::constants::{DEFAULT_LIMIT, DEFAULT_NYPL_SOURCE, DEFAULT_OFFSET};

/// Joins identifier keywords into the comma-separated form the API expects
pub fn join_keywords<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(|k| k.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Options shared by the identifier search methods
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Whether to include records marked as deleted
    pub deleted: bool,
    /// Maximum number of records to return
    pub limit: u32,
    /// Number of records to skip
    pub offset: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            deleted: false,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl SearchOptions {
    /// Appends the options to a query parameter list
    pub(crate) fn extend_query(&self, query: &mut Vec<(String, String)>) {
        query.push(("deleted".into(), self.deleted.to_string()));
        query.push(("limit".into(), self.limit.to_string()));
        query.push(("offset".into(), self.offset.to_string()));
    }
}

/// Filters for the bib list endpoint (`GET /bibs`)
///
/// Mirrors the parameters accepted by the Platform API: any combination of
/// Sierra bib numbers, standard numbers (ISBN/issn) and control numbers,
/// plus date-range and paging filters.
#[derive(Debug, Clone)]
pub struct BibListParams {
    /// Sierra bib numbers to match
    pub ids: Vec<String>,
    /// Standard numbers (ISBNs, ISSNs) to match
    pub standard_numbers: Vec<String>,
    /// Control numbers (OCLC etc.) to match
    pub control_numbers: Vec<String>,
    /// Source system of the records; defaults to `sierra-nypl`
    pub nypl_source: Option<String>,
    /// Whether to include records marked as deleted
    pub deleted: bool,
    /// Filter on record creation date (range syntax as accepted by the API)
    pub created_date: Option<String>,
    /// Filter on record update date
    pub updated_date: Option<String>,
    /// Maximum number of records to return
    pub limit: u32,
    /// Number of records to skip
    pub offset: u32,
}

impl Default for BibListParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            standard_numbers: Vec::new(),
            control_numbers: Vec::new(),
            nypl_source: None,
            deleted: false,
            created_date: None,
            updated_date: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl BibListParams {
    /// Builds the query parameter list for `GET /bibs`
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if !self.ids.is_empty() {
            query.push(("id".into(), join_keywords(&self.ids)));
        }
        if !self.standard_numbers.is_empty() {
            query.push(("standardNumber".into(), join_keywords(&self.standard_numbers)));
        }
        if !self.control_numbers.is_empty() {
            query.push(("controlNumber".into(), join_keywords(&self.control_numbers)));
        }

        let source = self
            .nypl_source
            .clone()
            .unwrap_or_else(|| DEFAULT_NYPL_SOURCE.to_string());
        query.push(("nyplSource".into(), source));

        query.push(("deleted".into(), self.deleted.to_string()));

        if let Some(created) = &self.created_date {
            query.push(("createdDate".into(), created.clone()));
        }
        if let Some(updated) = &self.updated_date {
            query.push(("updatedDate".into(), updated.clone()));
        }

        query.push(("limit".into(), self.limit.to_string()));
        query.push(("offset".into(), self.offset.to_string()));

        query
    }
}
