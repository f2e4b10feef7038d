//! Client for the Federal Register API (`/api/v1`).
//!
//! # Design
//! Every endpoint URL carries the `v1` version segment and a `.json` suffix.
//! Array parameters follow the API's `name[]` convention and are emitted as
//! one pair per element. Unset conditions never reach the query string.

pub mod fields;
pub mod search;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::endpoint::UrlBuilder;
use crate::error::ApiError;
use crate::filter::{Filter, QueryParams};
use crate::http::{HttpRequest, HttpResponse};
use crate::response::parse_json;
use crate::save::save_to_json;
use crate::transport::{Transport, UreqTransport};

pub use fields::{DOCUMENT_FIELDS, PUBLIC_INSPECTION_FIELDS};
pub use search::{DateCondition, DocumentConditions, DocumentSearch, PublicInspectionSearch};

pub const FEDERAL_REGISTER_BASE_URL: &str = "https://www.federalregister.gov/api";
pub const FEDERAL_REGISTER_API_VERSION: &str = "v1";

/// Facet used when the caller does not pick one.
pub const DEFAULT_FACET: &str = "daily";

const NO_SEGMENTS: &[&str] = &[];

/// Client for federalregister.gov documents, agencies and public inspection.
#[derive(Debug, Clone)]
pub struct FederalRegisterClient<T = UreqTransport> {
    urls: UrlBuilder,
    transport: T,
}

impl FederalRegisterClient {
    pub fn new() -> Self {
        Self::with_base_url(FEDERAL_REGISTER_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl Default for FederalRegisterClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand `All` into the given default list; anything else is kept.
fn expand_fields(fields: &Filter, defaults: &[&str]) -> Filter {
    match fields {
        Filter::All => Filter::values(defaults.iter().copied()),
        other => other.clone(),
    }
}

impl<T> FederalRegisterClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            urls: UrlBuilder::new(base_url)
                .with_version(FEDERAL_REGISTER_API_VERSION)
                .with_suffix(".json"),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_documents(&self, search: &DocumentSearch) -> HttpRequest {
        let mut params = QueryParams::new();
        params
            .push_each("fields[]", &expand_fields(&search.fields, DOCUMENT_FIELDS))
            .push("per_page", search.per_page.to_string())
            .push_opt("page", search.page)
            .push_each("order[]", &search.order);
        search.conditions.push(&mut params);

        HttpRequest::get(self.urls.build("documents", NO_SEGMENTS)).with_query(params.into_pairs())
    }

    pub fn build_documents_facets(&self, facet: &str, conditions: &DocumentConditions) -> HttpRequest {
        let mut params = QueryParams::new();
        conditions.push(&mut params);
        HttpRequest::get(self.urls.build("documents/facets", &[facet])).with_query(params.into_pairs())
    }

    pub fn build_document_by_id(&self, document_id: &str, fields: &Filter) -> HttpRequest {
        let mut params = QueryParams::new();
        params.push_each("fields[]", &expand_fields(fields, DOCUMENT_FIELDS));
        HttpRequest::get(self.urls.build("documents", &[document_id])).with_query(params.into_pairs())
    }

    pub fn build_documents_by_id<S: AsRef<str>>(&self, document_ids: &[S], fields: &Filter) -> HttpRequest {
        self.build_document_by_id(&join_ids(document_ids), fields)
    }

    pub fn build_agencies(&self) -> HttpRequest {
        HttpRequest::get(self.urls.build("agencies", NO_SEGMENTS))
    }

    pub fn build_agency_by_id(&self, agency_slug: &str) -> HttpRequest {
        HttpRequest::get(self.urls.build("agencies", &[agency_slug]))
    }

    pub fn build_public_inspection_document_by_id(&self, document_id: &str) -> HttpRequest {
        HttpRequest::get(self.urls.build("public-inspection-documents", &[document_id]))
    }

    pub fn build_public_inspection_documents_by_id<S: AsRef<str>>(&self, document_ids: &[S]) -> HttpRequest {
        self.build_public_inspection_document_by_id(&join_ids(document_ids))
    }

    pub fn build_public_inspection_documents_current(&self) -> HttpRequest {
        HttpRequest::get(self.urls.build("public-inspection-documents/current", NO_SEGMENTS))
    }

    pub fn build_public_inspection_documents(&self, search: &PublicInspectionSearch) -> HttpRequest {
        let mut params = QueryParams::new();
        params
            .push_each("fields[]", &expand_fields(&search.fields, PUBLIC_INSPECTION_FIELDS))
            .push("per_page", search.per_page.to_string())
            .push_opt("page", search.page);
        search.push_conditions(&mut params);

        HttpRequest::get(self.urls.build("public-inspection-documents", NO_SEGMENTS))
            .with_query(params.into_pairs())
    }

    pub fn build_suggested_searches<S: AsRef<str>>(&self, section_ids: &[S]) -> HttpRequest {
        let sections = Filter::values(section_ids.iter().map(|s| s.as_ref().to_string()));
        let mut params = QueryParams::new();
        params.push_each("conditions[sections][]", &sections);
        HttpRequest::get(self.urls.build("suggested_searches", NO_SEGMENTS)).with_query(params.into_pairs())
    }

    pub fn build_suggested_searches_by_slug(&self, slug: &str) -> HttpRequest {
        HttpRequest::get(self.urls.build("suggested_searches", &[slug]))
    }

    pub fn parse(&self, response: HttpResponse) -> Result<Value, ApiError> {
        parse_json(response)
    }

    pub fn save_to_json<C, P>(&self, content: &C, path: P) -> Result<PathBuf, ApiError>
    where
        C: Serialize + ?Sized,
        P: AsRef<Path>,
    {
        save_to_json(content, path)
    }
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

impl<T: Transport> FederalRegisterClient<T> {
    fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let response = self.transport.execute(&request)?;
        self.parse(response)
    }

    /// Search documents.
    pub fn documents(&self, search: &DocumentSearch) -> Result<Value, ApiError> {
        self.send(self.build_documents(search))
    }

    /// Document counts grouped by `facet` (`daily`, `weekly`, `monthly`,
    /// `quarterly`, `yearly`, `agency`, `topic`, `section`, `type`, `subtype`).
    pub fn documents_facets(&self, facet: &str, conditions: &DocumentConditions) -> Result<Value, ApiError> {
        self.send(self.build_documents_facets(facet, conditions))
    }

    pub fn document_by_id(&self, document_id: &str, fields: &Filter) -> Result<Value, ApiError> {
        self.send(self.build_document_by_id(document_id, fields))
    }

    pub fn documents_by_id<S: AsRef<str>>(&self, document_ids: &[S], fields: &Filter) -> Result<Value, ApiError> {
        self.send(self.build_documents_by_id(document_ids, fields))
    }

    pub fn agencies(&self) -> Result<Value, ApiError> {
        self.send(self.build_agencies())
    }

    pub fn agency_by_id(&self, agency_slug: &str) -> Result<Value, ApiError> {
        self.send(self.build_agency_by_id(agency_slug))
    }

    pub fn public_inspection_document_by_id(&self, document_id: &str) -> Result<Value, ApiError> {
        self.send(self.build_public_inspection_document_by_id(document_id))
    }

    pub fn public_inspection_documents_by_id<S: AsRef<str>>(&self, document_ids: &[S]) -> Result<Value, ApiError> {
        self.send(self.build_public_inspection_documents_by_id(document_ids))
    }

    /// Documents currently on public inspection.
    pub fn public_inspection_documents_current(&self) -> Result<Value, ApiError> {
        self.send(self.build_public_inspection_documents_current())
    }

    pub fn public_inspection_documents(&self, search: &PublicInspectionSearch) -> Result<Value, ApiError> {
        self.send(self.build_public_inspection_documents(search))
    }

    pub fn suggested_searches<S: AsRef<str>>(&self, section_ids: &[S]) -> Result<Value, ApiError> {
        self.send(self.build_suggested_searches(section_ids))
    }

    pub fn suggested_searches_by_slug(&self, slug: &str) -> Result<Value, ApiError> {
        self.send(self.build_suggested_searches_by_slug(slug))
    }
}

impl<T> fmt::Display for FederalRegisterClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<FederalRegisterClient {}>", self.urls.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;

    fn client() -> FederalRegisterClient<RecordingTransport> {
        FederalRegisterClient::with_transport(FEDERAL_REGISTER_BASE_URL, RecordingTransport::ok_json())
    }

    #[test]
    fn default_document_search_sends_defaults_only() {
        let req = client().build_documents(&DocumentSearch::default());
        assert_eq!(req.url, "https://www.federalregister.gov/api/v1/documents.json");
        assert_eq!(req.query_values("fields[]"), DOCUMENT_FIELDS.to_vec());
        assert_eq!(req.query_value("per_page"), Some("100"));
        assert_eq!(req.query_values("order[]"), vec!["newest"]);
        assert!(req.query_value("page").is_none());
        assert!(req.query.iter().all(|(k, _)| !k.starts_with("conditions[")));
        assert_eq!(req.query.len(), DOCUMENT_FIELDS.len() + 2);
    }

    #[test]
    fn document_search_sends_set_conditions() {
        let search = DocumentSearch {
            fields: Filter::values(["title", "document_number"]),
            per_page: 20,
            page: Some(3),
            conditions: DocumentConditions {
                term: Some("emissions".to_string()),
                publication_date: DateCondition {
                    gte: Some("2020-01-01".to_string()),
                    ..DateCondition::default()
                },
                agencies: Filter::values(["environmental-protection-agency", "energy-department"]),
                cfr_title: Some(40),
                location_within: Some(50),
                ..DocumentConditions::default()
            },
            ..DocumentSearch::default()
        };
        let req = client().build_documents(&search);
        assert_eq!(req.query_values("fields[]"), vec!["title", "document_number"]);
        assert_eq!(req.query_value("per_page"), Some("20"));
        assert_eq!(req.query_value("page"), Some("3"));
        assert_eq!(req.query_value("conditions[term]"), Some("emissions"));
        assert_eq!(req.query_value("conditions[publication_date][gte]"), Some("2020-01-01"));
        assert!(req.query_value("conditions[publication_date][lte]").is_none());
        assert_eq!(
            req.query_values("conditions[agencies][]"),
            vec!["environmental-protection-agency", "energy-department"]
        );
        assert_eq!(req.query_value("conditions[cfr][title]"), Some("40"));
        assert_eq!(req.query_value("conditions[near][within]"), Some("50"));
        assert!(req.query_value("conditions[near][location]").is_none());
    }

    #[test]
    fn facets_use_facet_segment() {
        let conditions = DocumentConditions {
            document_type: Filter::values(["RULE"]),
            ..DocumentConditions::default()
        };
        let req = client().build_documents_facets(DEFAULT_FACET, &conditions);
        assert_eq!(req.url, "https://www.federalregister.gov/api/v1/documents/facets/daily.json");
        assert_eq!(req.query, vec![("conditions[type][]".to_string(), "RULE".to_string())]);
    }

    #[test]
    fn documents_by_id_joins_ids_into_one_segment() {
        let req = client().build_documents_by_id(&["2020-01234", "2020-05678"], &Filter::value("title"));
        assert_eq!(
            req.url,
            "https://www.federalregister.gov/api/v1/documents/2020-01234,2020-05678.json"
        );
        assert_eq!(req.query_values("fields[]"), vec!["title"]);
    }

    #[test]
    fn document_by_id_with_unset_fields_sends_no_query() {
        let req = client().build_document_by_id("2020-01234", &Filter::Unset);
        assert!(req.query.is_empty());
    }

    #[test]
    fn agency_and_inspection_paths() {
        let c = client();
        assert_eq!(c.build_agencies().url, "https://www.federalregister.gov/api/v1/agencies.json");
        assert_eq!(
            c.build_agency_by_id("federal-highway-administration").url,
            "https://www.federalregister.gov/api/v1/agencies/federal-highway-administration.json"
        );
        assert_eq!(
            c.build_public_inspection_documents_current().url,
            "https://www.federalregister.gov/api/v1/public-inspection-documents/current.json"
        );
        assert_eq!(
            c.build_public_inspection_documents_by_id(&["2020-1", "2020-2"]).url,
            "https://www.federalregister.gov/api/v1/public-inspection-documents/2020-1,2020-2.json"
        );
        assert_eq!(
            c.build_suggested_searches_by_slug("immigration").url,
            "https://www.federalregister.gov/api/v1/suggested_searches/immigration.json"
        );
    }

    #[test]
    fn public_inspection_search_expands_its_own_fields() {
        let search = PublicInspectionSearch {
            special_filing: Some(true),
            ..PublicInspectionSearch::new("2020-11-02")
        };
        let req = client().build_public_inspection_documents(&search);
        assert_eq!(req.query_values("fields[]"), PUBLIC_INSPECTION_FIELDS.to_vec());
        assert_eq!(req.query_value("conditions[available_on]"), Some("2020-11-02"));
        assert_eq!(req.query_value("conditions[special_filing]"), Some("1"));
        assert!(req.query_value("conditions[docket_id]").is_none());
    }

    #[test]
    fn suggested_searches_send_sections() {
        let req = client().build_suggested_searches(&["money", "environment"]);
        assert_eq!(req.query_values("conditions[sections][]"), vec!["money", "environment"]);
    }

    #[test]
    fn non_success_is_remote_error() {
        let c = FederalRegisterClient::with_transport(
            FEDERAL_REGISTER_BASE_URL,
            RecordingTransport::new(422, r#"{"errors":{"per_page":"too large"}}"#),
        );
        let err = c.documents(&DocumentSearch::default()).unwrap_err();
        match err {
            ApiError::Remote { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("per_page"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn success_returns_decoded_json() {
        let c = FederalRegisterClient::with_transport(
            FEDERAL_REGISTER_BASE_URL,
            RecordingTransport::new(200, r#"[{"slug":"agriculture-department"}]"#),
        );
        let agencies = c.agencies().unwrap();
        assert_eq!(agencies[0]["slug"], "agriculture-department");
        assert_eq!(c.transport().requests.borrow().len(), 1);
    }
}
