//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use govdata_core::federal_register::DateCondition;
use govdata_core::{
    ApiError, BeaClient, BulkCollection, CongressClient, Dataset, DatasetQuery, DocumentSearch,
    FederalRegisterClient, Filter, HttpMethod, HttpResponse, PublicInspectionSearch,
    ResponseFormat,
};
use serde_json::Value;

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

/// A JSON string goes through `Filter::parse`; an array becomes a list.
fn filter(value: Option<&Value>) -> Filter {
    match value {
        None | Some(Value::Null) => Filter::Unset,
        Some(Value::String(raw)) => Filter::parse(raw),
        Some(Value::Array(items)) => Filter::values(items.iter().map(|v| v.as_str().unwrap())),
        Some(other) => panic!("unsupported filter value: {other}"),
    }
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_remote(result: Result<impl std::fmt::Debug, ApiError>, status: u64, name: &str) {
    match result {
        Err(ApiError::Remote { status: got, .. }) => assert_eq!(u64::from(got), status, "{name}: status"),
        other => panic!("{name}: expected Remote error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// GovInfo
// ---------------------------------------------------------------------------

#[test]
fn congress_test_vectors() {
    let raw = include_str!("../../test-vectors/congress.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let base = vectors["base_url"].as_str().unwrap();
    let headers = pairs(&vectors["headers"]);
    let c = CongressClient::new();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = match case["collection"].as_str() {
            None => c.build_data_sources(),
            Some(code) => {
                let collection: BulkCollection = code.parse().unwrap();
                c.build_collection(collection, case["folder"].as_str().unwrap())
            }
        };
        assert_eq!(req.method, HttpMethod::Get, "{name}: method");
        assert_eq!(req.method.as_str(), expected_req["method"].as_str().unwrap(), "{name}: method");
        assert_eq!(req.url, format!("{base}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert!(req.query.is_empty(), "{name}: query");
        assert_eq!(req.headers, headers, "{name}: headers");

        // Verify parse
        let result = c.parse(simulated(case));
        match case["expected_error_status"].as_u64() {
            Some(status) => assert_remote(result, status, name),
            None => assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result"),
        }
    }
}

// ---------------------------------------------------------------------------
// Federal Register
// ---------------------------------------------------------------------------

fn document_search(input: &Value) -> DocumentSearch {
    let mut search = DocumentSearch {
        fields: filter(input.get("fields")),
        ..DocumentSearch::default()
    };
    if let Some(per_page) = input["per_page"].as_u64() {
        search.per_page = per_page as u32;
    }
    search.page = input["page"].as_u64().map(|p| p as u32);
    if input.get("order").is_some() {
        search.order = filter(input.get("order"));
    }
    search.conditions.term = input["term"].as_str().map(str::to_string);
    search.conditions.agencies = filter(input.get("agencies"));
    search.conditions.document_type = filter(input.get("document_type"));
    search.conditions.publication_date = DateCondition {
        gte: input["publication_date_gte"].as_str().map(str::to_string),
        ..DateCondition::default()
    };
    search
}

#[test]
fn federal_register_test_vectors() {
    let raw = include_str!("../../test-vectors/federal_register.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let base = vectors["base_url"].as_str().unwrap();
    let c = FederalRegisterClient::new();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let expected_req = &case["expected_request"];

        let req = match case["operation"].as_str().unwrap() {
            "documents" => c.build_documents(&document_search(input)),
            "document_by_id" => {
                let ids = strings(&input["ids"]);
                c.build_document_by_id(&ids[0], &filter(input.get("fields")))
            }
            "documents_by_id" => c.build_documents_by_id(&strings(&input["ids"]), &filter(input.get("fields"))),
            "agencies" => c.build_agencies(),
            "public_inspection_documents" => {
                let mut search = PublicInspectionSearch::new(input["available_on"].as_str().unwrap());
                search.fields = filter(input.get("fields"));
                search.special_filing = input["special_filing"].as_bool();
                c.build_public_inspection_documents(&search)
            }
            "suggested_searches" => c.build_suggested_searches(&strings(&input["ids"])),
            other => panic!("{name}: unknown operation {other}"),
        };

        assert_eq!(req.url, format!("{base}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(req.query, pairs(&expected_req["query"]), "{name}: query");
        assert!(req.headers.is_empty(), "{name}: headers");
    }

    for case in vectors["responses"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = c.parse(simulated(case));
        match case["expected_error_status"].as_u64() {
            Some(status) => assert_remote(result, status, name),
            None => assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result"),
        }
    }
}

// ---------------------------------------------------------------------------
// BEA
// ---------------------------------------------------------------------------

#[test]
fn bea_test_vectors() {
    let raw = include_str!("../../test-vectors/bea.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let base = vectors["base_url"].as_str().unwrap();
    let c = BeaClient::new(vectors["api_key"].as_str().unwrap());

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let dataset: Dataset = case["dataset"].as_str().unwrap().parse().unwrap();

        let mut query = DatasetQuery::new();
        for (key, value) in case["filters"].as_object().unwrap() {
            query = query.filter(key, filter(Some(value)));
        }
        for (key, value) in case["flags"].as_object().unwrap() {
            query = query.flag(key, value.as_bool().unwrap());
        }

        let result = c.build_get_data(dataset, &query);
        match case["expected_error"].as_str() {
            Some("InvalidQuery") => {
                assert!(matches!(result, Err(ApiError::InvalidQuery(_))), "{name}: got {result:?}");
            }
            Some(other) => panic!("{name}: unknown expected error {other}"),
            None => {
                let req = result.unwrap();
                assert_eq!(req.url, base, "{name}: url");
                assert_eq!(req.query, pairs(&case["expected_query"]), "{name}: query");
            }
        }
    }

    for case in vectors["responses"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let format: ResponseFormat = case["format"].as_str().unwrap().parse().unwrap();
        let c = BeaClient::new("ABC123").with_format(format);

        let result = c.parse(simulated(case));
        if let Some(status) = case["expected_error_status"].as_u64() {
            assert_remote(result, status, name);
        } else if let Some(text) = case["expected_text"].as_str() {
            assert_eq!(result.unwrap().as_text(), Some(text), "{name}: text");
        } else {
            assert_eq!(result.unwrap().as_json(), Some(&case["expected_json"]), "{name}: json");
        }
    }
}
