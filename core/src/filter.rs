//! Optional query filters and their wire encoding.
//!
//! # Design
//! Every optional filter is a `Filter<T>` instead of a string that may or may
//! not be a sentinel. `Unset` never reaches the wire, `All` is sent as the
//! literal `ALL`, and lists are comma-joined in caller order. Boolean filters
//! are plain `bool`s encoded per field with a `FlagEncoding`.

use std::fmt::Display;

/// The literal the remote APIs read as "do not restrict this filter".
pub const ALL: &str = "ALL";

/// One optional filter value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T = String> {
    #[default]
    Unset,
    All,
    Value(T),
    Values(Vec<T>),
}

impl<T> Filter<T> {
    /// True for `Unset` and for an empty list; neither reaches the wire.
    pub fn is_unset(&self) -> bool {
        match self {
            Filter::Unset => true,
            Filter::Values(values) => values.is_empty(),
            Filter::All | Filter::Value(_) => false,
        }
    }

    /// True for a single concrete value: `Value`, or `Values` of length one.
    pub fn is_single(&self) -> bool {
        match self {
            Filter::Value(_) => true,
            Filter::Values(values) => values.len() == 1,
            Filter::Unset | Filter::All => false,
        }
    }
}

impl<T: Display> Filter<T> {
    /// Wire form of this filter, or `None` when it must be omitted.
    pub fn normalize(&self) -> Option<String> {
        match self {
            Filter::Unset => None,
            Filter::Values(values) if values.is_empty() => None,
            Filter::All => Some(ALL.to_string()),
            Filter::Value(value) => Some(value.to_string()),
            Filter::Values(values) => Some(
                values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }

    /// Each element rendered separately, for `key[]` style parameters.
    pub fn elements(&self) -> Vec<String> {
        match self {
            Filter::Unset => Vec::new(),
            Filter::All => vec![ALL.to_string()],
            Filter::Value(value) => vec![value.to_string()],
            Filter::Values(values) => values.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Filter<String> {
    /// Build a list filter from anything string-like.
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn value(value: impl Into<String>) -> Self {
        Filter::Value(value.into())
    }

    /// Parse a caller-facing string: empty is unset, `ALL` (any case) is the
    /// sentinel, anything with commas becomes a list.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Filter::Unset
        } else if raw.eq_ignore_ascii_case(ALL) {
            Filter::All
        } else if raw.contains(',') {
            let values: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if values.is_empty() {
                Filter::Unset
            } else {
                Filter::Values(values)
            }
        } else {
            Filter::value(raw)
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::Unset, Filter::Value)
    }
}

impl<T> From<Vec<T>> for Filter<T> {
    fn from(values: Vec<T>) -> Self {
        Filter::Values(values)
    }
}

impl From<&str> for Filter<String> {
    fn from(value: &str) -> Self {
        Filter::Value(value.to_string())
    }
}

/// How a boolean filter is written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEncoding {
    /// `Yes` / `No`
    YesNo,
    /// `1` / `0`
    Numeric,
}

impl FlagEncoding {
    pub fn encode(self, flag: bool) -> &'static str {
        match (self, flag) {
            (FlagEncoding::YesNo, true) => "Yes",
            (FlagEncoding::YesNo, false) => "No",
            (FlagEncoding::Numeric, true) => "1",
            (FlagEncoding::Numeric, false) => "0",
        }
    }
}

/// Ordered query parameters with unset values dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always present.
    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Add a parameter only when it carries a value.
    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a filter as a single comma-joined value.
    pub fn push_filter<T: Display>(&mut self, key: &str, filter: &Filter<T>) -> &mut Self {
        self.push_opt(key, filter.normalize())
    }

    /// Add a filter as one `key` pair per element; used for `name[]` keys.
    pub fn push_each<T: Display>(&mut self, key: &str, filter: &Filter<T>) -> &mut Self {
        for element in filter.elements() {
            self.pairs.push((key.to_string(), element));
        }
        self
    }

    pub fn push_flag(&mut self, key: &str, flag: bool, encoding: FlagEncoding) -> &mut Self {
        self.push(key, encoding.encode(flag))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}
