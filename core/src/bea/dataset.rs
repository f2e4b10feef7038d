//! Declarative table of BEA `GetData` datasets.
//!
//! # Design
//! Each dataset declares which filters it accepts, how each is encoded and
//! which are required. `DatasetQuery` is validated against this table before
//! anything is sent, and the table order fixes the parameter order on the
//! wire. Adding a dataset means adding a row here, not a new request path.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::filter::{Filter, FlagEncoding, QueryParams};

/// How one dataset parameter is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A `Filter`: `ALL`, a single value or a comma-joined list.
    List,
    /// A boolean with a per-field encoding.
    Flag(FlagEncoding),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Lower-case wire name.
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

const fn list(key: &'static str) -> ParamSpec {
    ParamSpec { key, kind: ParamKind::List, required: false }
}

const fn required(key: &'static str) -> ParamSpec {
    ParamSpec { key, kind: ParamKind::List, required: true }
}

const fn flag(key: &'static str, encoding: FlagEncoding) -> ParamSpec {
    ParamSpec { key, kind: ParamKind::Flag(encoding), required: false }
}

type Rule = fn(&DatasetQuery) -> Result<(), ApiError>;

/// One row of the dataset table.
#[derive(Clone, Copy)]
pub struct DatasetSpec {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    rule: Option<Rule>,
}

impl fmt::Debug for DatasetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("has_rule", &self.rule.is_some())
            .finish()
    }
}

impl DatasetSpec {
    pub fn param(&self, key: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.key.eq_ignore_ascii_case(key))
    }
}

const GDP_BY_INDUSTRY_PARAMS: &[ParamSpec] =
    &[list("year"), list("industry"), list("frequency"), list("tableid")];

const NIPA_PARAMS: &[ParamSpec] = &[required("year"), list("frequency"), required("tablename")];

const MNE_PARAMS: &[ParamSpec] = &[
    list("year"),
    flag("nonbankaffiliatesonly", FlagEncoding::Numeric),
    flag("ownershiplevel", FlagEncoding::Numeric),
    list("state"),
    list("country"),
    list("industry"),
    list("seriesid"),
    required("classification"),
    required("directionofinvestment"),
    flag("getfootnotes", FlagEncoding::YesNo),
];

static GDP_BY_INDUSTRY: DatasetSpec =
    DatasetSpec { name: "GDPbyIndustry", params: GDP_BY_INDUSTRY_PARAMS, rule: None };
static UNDERLYING_GDP_BY_INDUSTRY: DatasetSpec =
    DatasetSpec { name: "underlyingGDPbyIndustry", params: GDP_BY_INDUSTRY_PARAMS, rule: None };
static INTL_SERV_TRADE: DatasetSpec = DatasetSpec {
    name: "IntlServTrade",
    params: &[
        list("year"),
        list("typeofservice"),
        list("tradedirection"),
        list("affiliation"),
        list("areaorcountry"),
    ],
    rule: Some(service_or_country_rule),
};
static NIPA: DatasetSpec = DatasetSpec { name: "NIPA", params: NIPA_PARAMS, rule: None };
static NI_UNDERLYING_DETAIL: DatasetSpec =
    DatasetSpec { name: "NIUnderlyingDetail", params: NIPA_PARAMS, rule: None };
static FIXED_ASSETS: DatasetSpec = DatasetSpec {
    name: "FixedAssets",
    params: &[required("year"), required("tablename")],
    rule: None,
};
static MNE: DatasetSpec = DatasetSpec { name: "MNE", params: MNE_PARAMS, rule: None };
static ITA: DatasetSpec = DatasetSpec {
    name: "ITA",
    params: &[list("indicator"), list("year"), list("frequency"), list("areaorcountry")],
    rule: None,
};
static IIP: DatasetSpec = DatasetSpec {
    name: "IIP",
    params: &[list("year"), list("frequency"), list("component"), list("typeofinvestment")],
    rule: None,
};
static INPUT_OUTPUT: DatasetSpec = DatasetSpec {
    name: "InputOutput",
    params: &[list("year"), required("tableid")],
    rule: None,
};

/// BEA datasets reachable through `GetData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    GdpByIndustry,
    UnderlyingGdpByIndustry,
    IntlServTrade,
    Nipa,
    NiUnderlyingDetail,
    FixedAssets,
    Mne,
    Ita,
    Iip,
    InputOutput,
}

impl Dataset {
    pub const ALL: [Dataset; 10] = [
        Dataset::GdpByIndustry,
        Dataset::UnderlyingGdpByIndustry,
        Dataset::IntlServTrade,
        Dataset::Nipa,
        Dataset::NiUnderlyingDetail,
        Dataset::FixedAssets,
        Dataset::Mne,
        Dataset::Ita,
        Dataset::Iip,
        Dataset::InputOutput,
    ];

    pub fn spec(self) -> &'static DatasetSpec {
        match self {
            Dataset::GdpByIndustry => &GDP_BY_INDUSTRY,
            Dataset::UnderlyingGdpByIndustry => &UNDERLYING_GDP_BY_INDUSTRY,
            Dataset::IntlServTrade => &INTL_SERV_TRADE,
            Dataset::Nipa => &NIPA,
            Dataset::NiUnderlyingDetail => &NI_UNDERLYING_DETAIL,
            Dataset::FixedAssets => &FIXED_ASSETS,
            Dataset::Mne => &MNE,
            Dataset::Ita => &ITA,
            Dataset::Iip => &IIP,
            Dataset::InputOutput => &INPUT_OUTPUT,
        }
    }

    /// Value of the `datasetname` parameter.
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| ApiError::InvalidQuery(format!("unknown dataset `{value}`")))
    }
}

/// A single argument in a dataset query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Filter(Filter),
    Flag(bool),
}

/// Named arguments for `GetData`, checked against the dataset table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetQuery {
    args: Vec<(String, Arg)>,
}

impl DatasetQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a list filter. Keys are case-insensitive; a repeated key replaces
    /// the earlier value.
    pub fn filter(mut self, key: &str, filter: Filter) -> Self {
        self.set(key, Arg::Filter(filter));
        self
    }

    pub fn flag(mut self, key: &str, flag: bool) -> Self {
        self.set(key, Arg::Flag(flag));
        self
    }

    fn set(&mut self, key: &str, arg: Arg) {
        let key = key.to_ascii_lowercase();
        match self.args.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = arg,
            None => self.args.push((key, arg)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Arg> {
        self.args
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, arg)| arg)
    }

    fn get_filter(&self, key: &str) -> Option<&Filter> {
        match self.get(key) {
            Some(Arg::Filter(filter)) => Some(filter),
            _ => None,
        }
    }

    /// Validate against `dataset` and append the dataset parameters, in
    /// table order, to `params`.
    pub(crate) fn encode(&self, dataset: Dataset, params: &mut QueryParams) -> Result<(), ApiError> {
        let spec = dataset.spec();

        if let Some((key, _)) = self.args.iter().find(|(k, _)| spec.param(k).is_none()) {
            return Err(ApiError::InvalidQuery(format!(
                "`{key}` is not a filter of dataset {}",
                spec.name
            )));
        }

        for param in spec.params {
            match (param.kind, self.get(param.key)) {
                (ParamKind::List, Some(Arg::Filter(filter))) if !filter.is_unset() => {
                    params.push_filter(param.key, filter);
                }
                (ParamKind::Flag(encoding), Some(Arg::Flag(flag))) => {
                    params.push_flag(param.key, *flag, encoding);
                }
                (ParamKind::List, Some(Arg::Flag(_))) | (ParamKind::Flag(_), Some(Arg::Filter(_))) => {
                    return Err(ApiError::InvalidQuery(format!(
                        "`{}` of dataset {} has the wrong kind of value",
                        param.key, spec.name
                    )));
                }
                _ if param.required => {
                    return Err(ApiError::InvalidQuery(format!(
                        "dataset {} requires `{}`",
                        spec.name, param.key
                    )));
                }
                _ => {}
            }
        }

        match spec.rule {
            Some(rule) => rule(self),
            None => Ok(()),
        }
    }
}

/// True when `filter` names exactly one value other than the `All` sentinel.
fn names_one(filter: Option<&Filter>) -> bool {
    let Some(filter) = filter else {
        return false;
    };
    if !filter.is_single() {
        return false;
    }
    filter
        .normalize()
        .is_some_and(|value| !value.eq_ignore_ascii_case("all"))
}

/// IntlServTrade needs exactly one TypeOfService unless exactly one
/// AreaOrCountry is requested.
fn service_or_country_rule(query: &DatasetQuery) -> Result<(), ApiError> {
    if names_one(query.get_filter("typeofservice")) || names_one(query.get_filter("areaorcountry")) {
        return Ok(());
    }
    Err(ApiError::InvalidQuery(
        "IntlServTrade needs exactly one TypeOfService or exactly one AreaOrCountry other than All"
            .to_string(),
    ))
}
