//! Search parameters for document and public inspection queries.

use crate::filter::{Filter, FlagEncoding, QueryParams};

/// Bounds on a date attribute (`publication_date`, `effective_date`).
///
/// Dates are `YYYY-MM-DD` strings; `year` is a four-digit year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCondition {
    pub is: Option<String>,
    pub year: Option<String>,
    pub gte: Option<String>,
    pub lte: Option<String>,
}

impl DateCondition {
    fn push(&self, params: &mut QueryParams, attribute: &str) {
        params
            .push_opt(&format!("conditions[{attribute}][is]"), self.is.as_deref())
            .push_opt(&format!("conditions[{attribute}][year]"), self.year.as_deref())
            .push_opt(&format!("conditions[{attribute}][gte]"), self.gte.as_deref())
            .push_opt(&format!("conditions[{attribute}][lte]"), self.lte.as_deref());
    }
}

/// The `conditions[...]` filters shared by document search and facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentConditions {
    /// Full text search.
    pub term: Option<String>,
    pub publication_date: DateCondition,
    pub effective_date: DateCondition,
    /// Publishing agency slugs.
    pub agencies: Filter,
    /// `RULE`, `PRORULE`, `NOTICE`, `PRESDOCU`.
    pub document_type: Filter,
    pub presidential_document_type: Filter,
    pub presidents: Filter,
    pub docket_id: Option<String>,
    /// Regulation ID Number (RIN).
    pub regulation_id: Option<String>,
    pub section_ids: Filter,
    pub topic_ids: Filter,
    /// Deemed significant under EO 12866 (`0` or `1`).
    pub is_significant: Option<String>,
    pub cfr_title: Option<u32>,
    /// Part or part range, e.g. `17` or `1-50`. Requires `cfr_title`.
    pub cfr_part: Option<String>,
    /// Zip code or "City, State".
    pub location: Option<String>,
    /// Miles from `location`, at most 200.
    pub location_within: Option<u32>,
}

impl DocumentConditions {
    pub(crate) fn push(&self, params: &mut QueryParams) {
        params.push_opt("conditions[term]", self.term.as_deref());
        self.publication_date.push(params, "publication_date");
        self.effective_date.push(params, "effective_date");
        params
            .push_each("conditions[agencies][]", &self.agencies)
            .push_each("conditions[type][]", &self.document_type)
            .push_each(
                "conditions[presidential_document_type][]",
                &self.presidential_document_type,
            )
            .push_each("conditions[president][]", &self.presidents)
            .push_opt("conditions[docket_id]", self.docket_id.as_deref())
            .push_opt("conditions[regulation_id_number]", self.regulation_id.as_deref())
            .push_each("conditions[sections][]", &self.section_ids)
            .push_each("conditions[topics][]", &self.topic_ids)
            .push_opt("conditions[significant]", self.is_significant.as_deref())
            .push_opt("conditions[cfr][title]", self.cfr_title)
            .push_opt("conditions[cfr][part]", self.cfr_part.as_deref())
            .push_opt("conditions[near][location]", self.location.as_deref())
            .push_opt("conditions[near][within]", self.location_within);
    }
}

/// Parameters for `documents`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSearch {
    /// `All` expands to every document field.
    pub fields: Filter,
    pub per_page: u32,
    pub page: Option<u32>,
    /// `relevance`, `newest`, `oldest`, `executive_order_number`.
    pub order: Filter,
    pub conditions: DocumentConditions,
}

impl Default for DocumentSearch {
    fn default() -> Self {
        Self {
            fields: Filter::All,
            per_page: 100,
            page: None,
            order: Filter::values(["newest"]),
            conditions: DocumentConditions::default(),
        }
    }
}

/// Parameters for `public_inspection_documents`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicInspectionSearch {
    /// Issue date, `YYYY-MM-DD`.
    pub available_on: String,
    /// `All` expands to every public inspection field.
    pub fields: Filter,
    pub per_page: u32,
    pub page: Option<u32>,
    pub term: Option<String>,
    pub agencies: Filter,
    pub document_type: Filter,
    /// `Some(true)` for special filings, `Some(false)` for regular ones.
    pub special_filing: Option<bool>,
    pub docket_id: Option<String>,
}

impl PublicInspectionSearch {
    pub fn new(available_on: impl Into<String>) -> Self {
        Self {
            available_on: available_on.into(),
            fields: Filter::All,
            per_page: 100,
            page: None,
            term: None,
            agencies: Filter::Unset,
            document_type: Filter::Unset,
            special_filing: None,
            docket_id: None,
        }
    }

    pub(crate) fn push_conditions(&self, params: &mut QueryParams) {
        params
            .push_opt("conditions[term]", self.term.as_deref())
            .push("conditions[available_on]", self.available_on.as_str())
            .push_each("conditions[agencies][]", &self.agencies)
            .push_each("conditions[type][]", &self.document_type)
            .push_opt(
                "conditions[special_filing]",
                self.special_filing.map(|f| FlagEncoding::Numeric.encode(f)),
            )
            .push_opt("conditions[docket_id]", self.docket_id.as_deref());
    }
}
