//! Client for the Bureau of Economic Analysis data API.
//!
//! # Design
//! Every BEA call is a GET on a single URL, distinguished only by query
//! parameters. Metadata calls (`GETDATASETLIST`, `GETPARAMETERLIST`,
//! `GetParameterValues`) are built directly; all `GetData` calls go through
//! `build_get_data`, which validates a `DatasetQuery` against the dataset
//! table in `dataset` before building the request. The typed per-dataset
//! methods only translate their parameter structs into that query.
//!
//! The response format is the only mutable state. It is read when a request
//! is built and again when the response is parsed.

pub mod dataset;
pub mod queries;

use std::fmt;

use crate::error::ApiError;
use crate::filter::QueryParams;
use crate::format::{Payload, ResponseFormat};
use crate::http::{HttpRequest, HttpResponse};
use crate::response::parse_payload;
use crate::transport::{Transport, UreqTransport};

pub use dataset::{Arg, Dataset, DatasetQuery, DatasetSpec, ParamKind, ParamSpec};
pub use queries::{
    DirectInvestmentQuery, FixedAssetsQuery, GdpByIndustryQuery, InputOutputQuery,
    InvestmentPositionQuery, MultinationalActivitiesQuery, NipaQuery, TradeServicesQuery,
    TransactionsQuery,
};

pub const BEA_BASE_URL: &str = "https://apps.bea.gov/api/data/";

/// Client for apps.bea.gov, authenticated with a static `UserID` key.
#[derive(Clone)]
pub struct BeaClient<T = UreqTransport> {
    url: String,
    api_key: String,
    format: ResponseFormat,
    transport: T,
}

impl BeaClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(BEA_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self::with_transport(base_url, api_key, UreqTransport::new())
    }
}

impl<T> BeaClient<T> {
    pub fn with_transport(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            url: format!("{}/", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            format: ResponseFormat::Json,
            transport,
        }
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Change the response format from a user-supplied string (`json`/`xml`,
    /// any case). On error the current format is kept.
    pub fn set_format(&mut self, value: &str) -> Result<(), ApiError> {
        self.format = value.parse()?;
        Ok(())
    }

    /// Whether an API key was supplied.
    pub fn is_authorized(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_get_dataset_list(&self) -> HttpRequest {
        let mut params = QueryParams::new();
        params
            .push("UserID", self.api_key.as_str())
            .push("method", "GETDATASETLIST")
            .push("ResultFormat", self.format.as_str());
        self.request(params)
    }

    pub fn build_get_parameters_list(&self, dataset_name: &str) -> HttpRequest {
        let mut params = QueryParams::new();
        params
            .push("userid", self.api_key.as_str())
            .push("method", "GETPARAMETERLIST")
            .push("datasetname", dataset_name)
            .push("resultformat", self.format.as_str());
        self.request(params)
    }

    pub fn build_get_parameter_values(&self, dataset_name: &str, parameter_name: &str) -> HttpRequest {
        let mut params = QueryParams::new();
        params
            .push("userid", self.api_key.as_str())
            .push("method", "GetParameterValues")
            .push("datasetname", dataset_name)
            .push("parametername", parameter_name)
            .push("resultformat", self.format.as_str());
        self.request(params)
    }

    /// Build a `GetData` request, rejecting queries the dataset table does
    /// not allow.
    pub fn build_get_data(&self, dataset: Dataset, query: &DatasetQuery) -> Result<HttpRequest, ApiError> {
        let mut params = QueryParams::new();
        params
            .push("userid", self.api_key.as_str())
            .push("method", "GetData")
            .push("datasetname", dataset.name());
        query.encode(dataset, &mut params)?;
        params.push("resultformat", self.format.as_str());
        Ok(self.request(params))
    }

    pub fn parse(&self, response: HttpResponse) -> Result<Payload, ApiError> {
        parse_payload(response, self.format)
    }

    fn request(&self, params: QueryParams) -> HttpRequest {
        HttpRequest::get(self.url.clone()).with_query(params.into_pairs())
    }
}

impl<T: Transport> BeaClient<T> {
    fn send(&self, request: HttpRequest) -> Result<Payload, ApiError> {
        let response = self.transport.execute(&request)?;
        self.parse(response)
    }

    /// Every dataset the API offers, with descriptions.
    pub fn get_dataset_list(&self) -> Result<Payload, ApiError> {
        self.send(self.build_get_dataset_list())
    }

    /// Required and optional parameters of `dataset_name`.
    pub fn get_parameters_list(&self, dataset_name: &str) -> Result<Payload, ApiError> {
        self.send(self.build_get_parameters_list(dataset_name))
    }

    /// Valid values of one parameter of `dataset_name`.
    pub fn get_parameter_values(&self, dataset_name: &str, parameter_name: &str) -> Result<Payload, ApiError> {
        self.send(self.build_get_parameter_values(dataset_name, parameter_name))
    }

    pub fn get_data(&self, dataset: Dataset, query: &DatasetQuery) -> Result<Payload, ApiError> {
        self.send(self.build_get_data(dataset, query)?)
    }

    /// Value added, gross output, intermediate inputs, KLEMS and employment
    /// statistics by industry.
    pub fn gdp_by_industry(&self, query: &GdpByIndustryQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::GdpByIndustry, &query.to_query())
    }

    /// GDP by industry with additional industry detail.
    pub fn underlying_gdp_by_industry(&self, query: &GdpByIndustryQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::UnderlyingGdpByIndustry, &query.to_query())
    }

    pub fn international_trade_services(&self, query: &TradeServicesQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::IntlServTrade, &query.to_query())
    }

    pub fn national_income_and_product_accounts(&self, query: &NipaQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::Nipa, &query.to_query())
    }

    pub fn national_income_and_product_accounts_detail(&self, query: &NipaQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::NiUnderlyingDetail, &query.to_query())
    }

    pub fn fixed_assets(&self, query: &FixedAssetsQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::FixedAssets, &query.to_query())
    }

    pub fn direct_investments_and_multinational_enterprises(
        &self,
        query: &DirectInvestmentQuery,
    ) -> Result<Payload, ApiError> {
        self.get_data(Dataset::Mne, &query.to_query())
    }

    pub fn activities_investments_and_multinational_enterprises(
        &self,
        query: &MultinationalActivitiesQuery,
    ) -> Result<Payload, ApiError> {
        self.get_data(Dataset::Mne, &query.to_query())
    }

    pub fn international_transactions(&self, query: &TransactionsQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::Ita, &query.to_query())
    }

    pub fn international_investments_positions(
        &self,
        query: &InvestmentPositionQuery,
    ) -> Result<Payload, ApiError> {
        self.get_data(Dataset::Iip, &query.to_query())
    }

    pub fn input_output_statistics(&self, query: &InputOutputQuery) -> Result<Payload, ApiError> {
        self.get_data(Dataset::InputOutput, &query.to_query())
    }
}

// The key is a credential; neither Debug nor Display prints it.
impl<T> fmt::Debug for BeaClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeaClient")
            .field("url", &self.url)
            .field("authorized", &self.is_authorized())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for BeaClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BureauEconomicAnalysis Client (authorized={})>", self.is_authorized())
    }
}
