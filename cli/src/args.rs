use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use govdata_core::bea::BEA_BASE_URL;
use govdata_core::congress::GOVINFO_BASE_URL;
use govdata_core::federal_register::{DEFAULT_FACET, FEDERAL_REGISTER_BASE_URL};
use govdata_core::{BulkCollection, Dataset, ResponseFormat};

/// Query GovInfo, the Federal Register and the BEA from the command line
#[derive(Debug, Parser)]
#[command(name = "govdata", about = "Thin client for U.S. government data APIs")]
pub struct Args {
    /// Save the response as pretty-printed JSON instead of printing it
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// GovInfo bulk-data listings
    Congress(CongressArgs),
    /// Federal Register documents, agencies and public inspection
    Fr(FederalRegisterArgs),
    /// Bureau of Economic Analysis datasets
    Bea(BeaArgs),
}

#[derive(Debug, ClapArgs)]
pub struct CongressArgs {
    #[arg(long, default_value = GOVINFO_BASE_URL, env = "GOVINFO_BASE_URL")]
    pub base_url: String,

    #[command(subcommand)]
    pub command: CongressCommand,
}

#[derive(Debug, Subcommand)]
pub enum CongressCommand {
    /// Every bulk-data collection
    Sources,
    /// File listing of one folder in a collection
    Collection {
        /// Collection code, e.g. BILLSTATUS
        collection: BulkCollection,
        /// Folder name, e.g. 116 or title-7
        folder: String,
    },
    /// Folders known to exist for a collection (no request is made)
    Folders { collection: BulkCollection },
}

#[derive(Debug, ClapArgs)]
pub struct FederalRegisterArgs {
    #[arg(long, default_value = FEDERAL_REGISTER_BASE_URL, env = "FEDERAL_REGISTER_BASE_URL")]
    pub base_url: String,

    #[command(subcommand)]
    pub command: FederalRegisterCommand,
}

#[derive(Debug, Subcommand)]
pub enum FederalRegisterCommand {
    /// Search documents
    Documents {
        #[arg(long)]
        term: Option<String>,
        #[arg(long, default_value_t = 100)]
        per_page: u32,
        #[arg(long)]
        page: Option<u32>,
        /// Agency slug; repeatable
        #[arg(long = "agency")]
        agencies: Vec<String>,
        /// RULE, PRORULE, NOTICE or PRESDOCU; repeatable
        #[arg(long = "type")]
        types: Vec<String>,
        /// Field to return; repeatable, every field when omitted
        #[arg(long = "field")]
        fields: Vec<String>,
        #[arg(long, default_value = "newest")]
        order: String,
    },
    /// Document counts grouped by a facet
    Facets {
        /// daily, weekly, monthly, quarterly, yearly, agency, topic, section, type
        #[arg(default_value = DEFAULT_FACET)]
        facet: String,
        #[arg(long)]
        term: Option<String>,
        /// Agency slug; repeatable
        #[arg(long = "agency")]
        agencies: Vec<String>,
        #[arg(long = "type")]
        types: Vec<String>,
    },
    /// One or more documents by number
    Document {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Every agency
    Agencies,
    /// One agency by slug
    Agency { slug: String },
    /// Documents currently on public inspection
    PublicInspectionCurrent,
}

#[derive(Debug, ClapArgs)]
pub struct BeaArgs {
    #[arg(long, default_value = BEA_BASE_URL, env = "BEA_BASE_URL")]
    pub base_url: String,

    #[arg(long, env = "BEA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value_t = ResponseFormat::Json)]
    pub format: ResponseFormat,

    #[command(subcommand)]
    pub command: BeaCommand,
}

#[derive(Debug, Subcommand)]
pub enum BeaCommand {
    /// Every dataset the API offers
    Datasets,
    /// Parameters of a dataset
    Parameters { dataset: String },
    /// Valid values of one dataset parameter
    Values { dataset: String, parameter: String },
    /// Fetch data from a dataset
    Data {
        dataset: Dataset,
        /// KEY=V1,V2 filter; `KEY=all` for every value
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
        /// KEY=true|false flag
        #[arg(long = "flag", value_parser = parse_flag)]
        flags: Vec<(String, bool)>,
    },
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    Ok((key, value.trim()))
}

pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = split_pair(raw)?;
    Ok((key.to_string(), value.to_string()))
}

pub fn parse_flag(raw: &str) -> Result<(String, bool), String> {
    let (key, value) = split_pair(raw)?;
    let flag = match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => true,
        "false" | "no" | "0" => false,
        _ => return Err(format!("`{value}` is not a boolean")),
    };
    Ok((key.to_string(), flag))
}
