//! Client for the GovInfo bulk-data listings.
//!
//! # Design
//! Every collection lives under `bulkdata/json/{CODE}/{folder}`, so the
//! collections are a closed enum and a single `build_collection` serves all
//! of them. The named per-collection methods are thin wrappers kept for a
//! discoverable call surface.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::endpoint::UrlBuilder;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::response::parse_json;
use crate::save::save_to_json;
use crate::transport::{Transport, UreqTransport};

pub const GOVINFO_BASE_URL: &str = "https://www.govinfo.gov";

const BULKDATA_ENDPOINT: &str = "bulkdata/json";

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// A GovInfo bulk-data collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkCollection {
    PrivacyActIssuances,
    CodeOfFederalRegulations,
    FederalRegister,
    BillStatus,
    CommerceBusinessDaily,
    PublicPapersPresident,
    SupremeCourtDecisions,
    CongressionalBills,
    UsGovernmentManual,
    BillSummaries,
    ElectronicCodeOfFederalRegulations,
    HouseRulesAndManual,
    PublicAndPrivateLaws,
    StatutesAtLarge,
}

const FR_YEARS: &[&str] = &[
    "2000", "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009", "2010",
    "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018", "2019", "2020", "resources",
];
const CFR_YEARS: &[&str] = &[
    "1996", "1997", "1998", "1999", "2000", "2001", "2002", "2003", "2004", "2005", "2006",
    "2007", "2008", "2009", "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017",
    "2018", "2019", "2020", "resources",
];
const PAI_YEARS: &[&str] = &["resources", "2013", "2015", "2011", "2009", "2017", "2007", "2019"];
const CONGRESSES: &[&str] = &["113", "114", "115", "116", "resources"];
const BILLS_FOLDERS: &[&str] = &["113", "114", "115", "116", "resources", "uslm"];
const HMAN_CONGRESSES: &[&str] = &["112", "113", "114", "115", "116", "resources"];
const CBD_YEARS: &[&str] = &["1996", "1997", "1998", "1999", "2000", "2001", "resources"];
const PPP_YEARS: &[&str] = &["2009", "2010", "2011", "2012", "2013", "2014", "resources"];
const SCD_YEARS: &[&str] = &["1937", "resources"];
const GOVMAN_YEARS: &[&str] = &[
    "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018", "2019", "resources",
];
const STATUTE_VOLUMES: &[&str] = &[
    "117", "118", "119", "120", "121", "122", "123", "124", "125", "126", "127", "resources",
];
const ECFR_TITLES: &[&str] = &[
    "resources", "title-1", "title-2", "title-3", "title-4", "title-5", "title-6", "title-7",
    "title-8", "title-9", "title-10", "title-11", "title-12", "title-13", "title-14", "title-15",
    "title-16", "title-17", "title-18", "title-19", "title-20", "title-21", "title-22",
    "title-23", "title-24", "title-25", "title-26", "title-27", "title-28", "title-29",
    "title-30", "title-31", "title-32", "title-33", "title-34", "title-36", "title-37",
    "title-38", "title-39", "title-40", "title-41", "title-42", "title-43", "title-44",
    "title-45", "title-46", "title-47", "title-48", "title-49", "title-50",
];

impl BulkCollection {
    pub const ALL: [BulkCollection; 14] = [
        BulkCollection::PrivacyActIssuances,
        BulkCollection::CodeOfFederalRegulations,
        BulkCollection::FederalRegister,
        BulkCollection::BillStatus,
        BulkCollection::CommerceBusinessDaily,
        BulkCollection::PublicPapersPresident,
        BulkCollection::SupremeCourtDecisions,
        BulkCollection::CongressionalBills,
        BulkCollection::UsGovernmentManual,
        BulkCollection::BillSummaries,
        BulkCollection::ElectronicCodeOfFederalRegulations,
        BulkCollection::HouseRulesAndManual,
        BulkCollection::PublicAndPrivateLaws,
        BulkCollection::StatutesAtLarge,
    ];

    /// Path segment GovInfo uses for the collection.
    pub fn code(self) -> &'static str {
        match self {
            BulkCollection::PrivacyActIssuances => "PAI",
            BulkCollection::CodeOfFederalRegulations => "CFR",
            BulkCollection::FederalRegister => "FR",
            BulkCollection::BillStatus => "BILLSTATUS",
            BulkCollection::CommerceBusinessDaily => "CBD",
            BulkCollection::PublicPapersPresident => "PPP",
            BulkCollection::SupremeCourtDecisions => "SCD",
            BulkCollection::CongressionalBills => "BILLS",
            BulkCollection::UsGovernmentManual => "GOVMAN",
            BulkCollection::BillSummaries => "BILLSUM",
            BulkCollection::ElectronicCodeOfFederalRegulations => "ECFR",
            BulkCollection::HouseRulesAndManual => "HMAN",
            BulkCollection::PublicAndPrivateLaws => "PLAW",
            BulkCollection::StatutesAtLarge => "STATUTE",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BulkCollection::PrivacyActIssuances => "Privacy Act Issuances",
            BulkCollection::CodeOfFederalRegulations => "Code of Federal Regulations",
            BulkCollection::FederalRegister => "Federal Register",
            BulkCollection::BillStatus => "Bill Status",
            BulkCollection::CommerceBusinessDaily => "Commerce Business Daily",
            BulkCollection::PublicPapersPresident => "Public Papers of the Presidents of the United States",
            BulkCollection::SupremeCourtDecisions => "Supreme Court Decisions 1937-1975 (FLITE)",
            BulkCollection::CongressionalBills => "Congressional Bills",
            BulkCollection::UsGovernmentManual => "United States Government Manual",
            BulkCollection::BillSummaries => "Bill Summaries",
            BulkCollection::ElectronicCodeOfFederalRegulations => "Electronic Code of Federal Regulations",
            BulkCollection::HouseRulesAndManual => "House Rules and Manual",
            BulkCollection::PublicAndPrivateLaws => "Public and Private Laws (xml uslm beta)",
            BulkCollection::StatutesAtLarge => "Statutes at Large (xml uslm beta)",
        }
    }

    /// Folder names known to exist under the collection. Informational only:
    /// requests for other folders are sent as-is.
    pub fn known_folders(self) -> &'static [&'static str] {
        match self {
            BulkCollection::PrivacyActIssuances => PAI_YEARS,
            BulkCollection::CodeOfFederalRegulations => CFR_YEARS,
            BulkCollection::FederalRegister => FR_YEARS,
            BulkCollection::BillStatus
            | BulkCollection::BillSummaries
            | BulkCollection::PublicAndPrivateLaws => CONGRESSES,
            BulkCollection::CommerceBusinessDaily => CBD_YEARS,
            BulkCollection::PublicPapersPresident => PPP_YEARS,
            BulkCollection::SupremeCourtDecisions => SCD_YEARS,
            BulkCollection::CongressionalBills => BILLS_FOLDERS,
            BulkCollection::UsGovernmentManual => GOVMAN_YEARS,
            BulkCollection::ElectronicCodeOfFederalRegulations => ECFR_TITLES,
            BulkCollection::HouseRulesAndManual => HMAN_CONGRESSES,
            BulkCollection::StatutesAtLarge => STATUTE_VOLUMES,
        }
    }

    pub fn is_known_folder(self, folder: &str) -> bool {
        self.known_folders().contains(&folder)
    }
}

impl fmt::Display for BulkCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BulkCollection {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BulkCollection::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(value))
            .ok_or_else(|| ApiError::InvalidQuery(format!("unknown bulk-data collection `{value}`")))
    }
}

/// Client for GovInfo bulk-data directory listings.
#[derive(Debug, Clone)]
pub struct CongressClient<T = UreqTransport> {
    urls: UrlBuilder,
    transport: T,
}

impl CongressClient {
    /// Client for the public GovInfo host.
    pub fn new() -> Self {
        Self::with_base_url(GOVINFO_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl Default for CongressClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CongressClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            urls: UrlBuilder::new(base_url),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_data_sources(&self) -> HttpRequest {
        self.request(self.urls.build::<&str>(BULKDATA_ENDPOINT, &[]))
    }

    pub fn build_collection(&self, collection: BulkCollection, folder: &str) -> HttpRequest {
        self.request(self.urls.build(BULKDATA_ENDPOINT, &[collection.code(), folder]))
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

    fn request(&self, url: String) -> HttpRequest {
        HttpRequest::get(url).with_headers(vec![
            ("accept".to_string(), ACCEPT.to_string()),
            ("accept-language".to_string(), ACCEPT_LANGUAGE.to_string()),
        ])
    }
}

impl<T: Transport> CongressClient<T> {
    fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let response = self.transport.execute(&request)?;
        self.parse(response)
    }

    /// Every bulk-data source offered by GovInfo.
    pub fn data_sources(&self) -> Result<Value, ApiError> {
        self.send(self.build_data_sources())
    }

    /// The file listing for `folder` under `collection`.
    pub fn collection(&self, collection: BulkCollection, folder: &str) -> Result<Value, ApiError> {
        self.send(self.build_collection(collection, folder))
    }

    pub fn privacy_act_issuances(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::PrivacyActIssuances, folder)
    }

    pub fn code_of_federal_regulations(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::CodeOfFederalRegulations, folder)
    }

    pub fn federal_register(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::FederalRegister, folder)
    }

    pub fn bill_status(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::BillStatus, folder)
    }

    pub fn commerce_business_daily(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::CommerceBusinessDaily, folder)
    }

    pub fn public_papers_president(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::PublicPapersPresident, folder)
    }

    pub fn supreme_court_decisions(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::SupremeCourtDecisions, folder)
    }

    pub fn congressional_bills(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::CongressionalBills, folder)
    }

    pub fn us_government_manuals(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::UsGovernmentManual, folder)
    }

    pub fn bill_summaries(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::BillSummaries, folder)
    }

    pub fn electronic_code_of_federal_regulation(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::ElectronicCodeOfFederalRegulations, folder)
    }

    pub fn house_rules_and_manual(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::HouseRulesAndManual, folder)
    }

    pub fn private_and_public_laws(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::PublicAndPrivateLaws, folder)
    }

    pub fn statutes_at_large(&self, folder: &str) -> Result<Value, ApiError> {
        self.collection(BulkCollection::StatutesAtLarge, folder)
    }
}

impl<T> fmt::Display for CongressClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<CongressClient {}>", self.urls.base_url())
    }
}
