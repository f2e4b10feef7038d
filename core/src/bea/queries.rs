//! Typed parameters for each BEA dataset method.
//!
//! Each struct carries the same defaults the BEA documentation suggests and
//! lowers itself into a `DatasetQuery` for the generic `get_data` path.

use crate::filter::Filter;

use super::dataset::DatasetQuery;

fn annual_quarterly_monthly() -> Filter {
    Filter::values(["A", "Q", "M"])
}

/// GDPbyIndustry and underlyingGDPbyIndustry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdpByIndustryQuery {
    pub year: Filter,
    pub industry: Filter,
    /// `A` annual, `Q` quarterly, `M` monthly.
    pub frequency: Filter,
    pub table_id: Filter,
}

impl Default for GdpByIndustryQuery {
    fn default() -> Self {
        Self {
            year: Filter::All,
            industry: Filter::All,
            frequency: annual_quarterly_monthly(),
            table_id: Filter::All,
        }
    }
}

impl GdpByIndustryQuery {
    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("industry", self.industry.clone())
            .filter("frequency", self.frequency.clone())
            .filter("tableid", self.table_id.clone())
    }
}

/// IntlServTrade: annual U.S. international trade in services.
///
/// Exactly one `type_of_service` other than `All` is needed unless exactly
/// one `area_or_country` other than `All` is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeServicesQuery {
    pub type_of_service: Filter,
    /// `Exports`, `Imports`, `Balance`, `SupplementalIns`.
    pub trade_direction: Filter,
    /// `AllAffiliations`, `Unaffiliated`, `Affiliated`, `UsParents`, `UsAffiliates`.
    pub affiliation: Filter,
    pub year: Filter,
    /// `AllCountries` returns the all-country total; `All` returns every country.
    pub area_or_country: Filter,
}

impl Default for TradeServicesQuery {
    fn default() -> Self {
        Self {
            type_of_service: Filter::All,
            trade_direction: Filter::All,
            affiliation: Filter::All,
            year: Filter::All,
            area_or_country: Filter::value("AllCountries"),
        }
    }
}

impl TradeServicesQuery {
    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("typeofservice", self.type_of_service.clone())
            .filter("tradedirection", self.trade_direction.clone())
            .filter("affiliation", self.affiliation.clone())
            .filter("areaorcountry", self.area_or_country.clone())
    }
}

/// NIPA and NIUnderlyingDetail tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NipaQuery {
    /// e.g. `T10101` or `U20305`.
    pub table_name: String,
    pub year: Filter,
    pub frequency: Filter,
}

impl NipaQuery {
    pub fn new(table_name: impl Into<String>, year: Filter) -> Self {
        Self {
            table_name: table_name.into(),
            year,
            frequency: annual_quarterly_monthly(),
        }
    }

    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("frequency", self.frequency.clone())
            .filter("tablename", Filter::value(self.table_name.as_str()))
    }
}

/// Standard Fixed Assets tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAssetsQuery {
    pub table_name: String,
    pub year: Filter,
}

impl FixedAssetsQuery {
    pub fn new(table_name: impl Into<String>, year: Filter) -> Self {
        Self { table_name: table_name.into(), year }
    }

    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("tablename", Filter::value(self.table_name.as_str()))
    }
}

/// Direct Investment (DI) statistics from the MNE dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectInvestmentQuery {
    /// `outward` or `inward`.
    pub direction_of_investment: String,
    pub classification: String,
    pub series_id: Filter,
    pub year: Filter,
    pub country: Filter,
    pub industry: Filter,
    pub footnotes: bool,
}

impl DirectInvestmentQuery {
    pub fn new(direction_of_investment: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            direction_of_investment: direction_of_investment.into(),
            classification: classification.into(),
            series_id: Filter::All,
            year: Filter::All,
            country: Filter::All,
            industry: Filter::All,
            footnotes: true,
        }
    }

    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("country", self.country.clone())
            .filter("industry", self.industry.clone())
            .filter("seriesid", self.series_id.clone())
            .filter("classification", Filter::value(self.classification.as_str()))
            .filter("directionofinvestment", Filter::value(self.direction_of_investment.as_str()))
            .flag("getfootnotes", self.footnotes)
    }
}

/// Activities of Multinational Enterprises (AMNE) from the MNE dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultinationalActivitiesQuery {
    /// `outward`, `inward`, `state` or `parent`.
    pub direction_of_investment: String,
    pub classification: String,
    pub ownership_level: bool,
    pub non_bank_affiliates_only: bool,
    pub series_id: Filter,
    pub states: Filter,
    pub year: Filter,
    pub country: Filter,
    pub industry: Filter,
    pub footnotes: bool,
}

impl MultinationalActivitiesQuery {
    pub fn new(direction_of_investment: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            direction_of_investment: direction_of_investment.into(),
            classification: classification.into(),
            ownership_level: false,
            non_bank_affiliates_only: false,
            series_id: Filter::All,
            states: Filter::All,
            year: Filter::All,
            country: Filter::All,
            industry: Filter::All,
            footnotes: true,
        }
    }

    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .flag("nonbankaffiliatesonly", self.non_bank_affiliates_only)
            .flag("ownershiplevel", self.ownership_level)
            .filter("state", self.states.clone())
            .filter("country", self.country.clone())
            .filter("industry", self.industry.clone())
            .filter("seriesid", self.series_id.clone())
            .filter("classification", Filter::value(self.classification.as_str()))
            .filter("directionofinvestment", Filter::value(self.direction_of_investment.as_str()))
            .flag("getfootnotes", self.footnotes)
    }
}

/// ITA: U.S. international transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsQuery {
    pub indicator: Filter,
    pub area_or_country: Filter,
    pub year: Filter,
    /// `A`, `QSA`, `QNSA`.
    pub frequency: Filter,
}

impl Default for TransactionsQuery {
    fn default() -> Self {
        Self {
            indicator: Filter::All,
            area_or_country: Filter::value("AllCountries"),
            year: Filter::All,
            frequency: Filter::All,
        }
    }
}

impl TransactionsQuery {
    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("indicator", self.indicator.clone())
            .filter("year", self.year.clone())
            .filter("frequency", self.frequency.clone())
            .filter("areaorcountry", self.area_or_country.clone())
    }
}

/// IIP: U.S. international investment position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentPositionQuery {
    pub type_of_investment: Filter,
    pub component: Filter,
    pub year: Filter,
    pub frequency: Filter,
}

impl Default for InvestmentPositionQuery {
    fn default() -> Self {
        Self {
            type_of_investment: Filter::All,
            component: Filter::All,
            year: Filter::All,
            frequency: Filter::All,
        }
    }
}

impl InvestmentPositionQuery {
    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("frequency", self.frequency.clone())
            .filter("component", self.component.clone())
            .filter("typeofinvestment", self.type_of_investment.clone())
    }
}

/// InputOutput: make, use and requirements tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutputQuery {
    pub table_id: Vec<String>,
    pub year: Filter,
}

impl InputOutputQuery {
    pub fn new<I, S>(table_id: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_id: table_id.into_iter().map(Into::into).collect(),
            year: Filter::All,
        }
    }

    pub fn to_query(&self) -> DatasetQuery {
        DatasetQuery::new()
            .filter("year", self.year.clone())
            .filter("tableid", Filter::Values(self.table_id.clone()))
    }
}
