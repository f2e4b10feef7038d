mod args;

use std::path::Path;

use anyhow::Context;
use args::{Args, BeaCommand, Command, CongressCommand, FederalRegisterCommand};
use clap::Parser;
use govdata_core::{
    save_to_json, BeaClient, CongressClient, DatasetQuery, DocumentConditions, DocumentSearch,
    FederalRegisterClient, Filter, Payload,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("GOVDATA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let payload = run(args.command)?;
    emit(&payload, args.output.as_deref())
}

fn run(command: Command) -> anyhow::Result<Payload> {
    match command {
        Command::Congress(congress) => {
            let client = CongressClient::with_base_url(&congress.base_url);
            let value = match congress.command {
                CongressCommand::Sources => client.data_sources().context("listing bulk-data sources")?,
                CongressCommand::Collection { collection, folder } => client
                    .collection(collection, &folder)
                    .with_context(|| format!("listing {collection}/{folder}"))?,
                CongressCommand::Folders { collection } => Value::from(collection.known_folders().to_vec()),
            };
            Ok(Payload::Json(value))
        }
        Command::Fr(fr) => {
            let client = FederalRegisterClient::with_base_url(&fr.base_url);
            let value = match fr.command {
                FederalRegisterCommand::Documents {
                    term,
                    per_page,
                    page,
                    agencies,
                    types,
                    fields,
                    order,
                } => {
                    let mut search = DocumentSearch {
                        per_page,
                        page,
                        order: Filter::values([order]),
                        ..DocumentSearch::default()
                    };
                    if !fields.is_empty() {
                        search.fields = Filter::Values(fields);
                    }
                    search.conditions.term = term;
                    search.conditions.agencies = list(agencies);
                    search.conditions.document_type = list(types);
                    client.documents(&search).context("searching documents")?
                }
                FederalRegisterCommand::Facets {
                    facet,
                    term,
                    agencies,
                    types,
                } => {
                    let conditions = DocumentConditions {
                        term,
                        agencies: list(agencies),
                        document_type: list(types),
                        ..DocumentConditions::default()
                    };
                    client
                        .documents_facets(&facet, &conditions)
                        .with_context(|| format!("counting documents by {facet}"))?
                }
                FederalRegisterCommand::Document { ids } => client
                    .documents_by_id(&ids, &Filter::All)
                    .with_context(|| format!("fetching {}", ids.join(",")))?,
                FederalRegisterCommand::Agencies => client.agencies().context("listing agencies")?,
                FederalRegisterCommand::Agency { slug } => client
                    .agency_by_id(&slug)
                    .with_context(|| format!("fetching agency {slug}"))?,
                FederalRegisterCommand::PublicInspectionCurrent => client
                    .public_inspection_documents_current()
                    .context("listing current public inspection documents")?,
            };
            Ok(Payload::Json(value))
        }
        Command::Bea(bea) => {
            let client = BeaClient::with_base_url(&bea.base_url, &bea.api_key).with_format(bea.format);
            if !client.is_authorized() {
                tracing::warn!("no BEA API key supplied");
            }
            let payload = match bea.command {
                BeaCommand::Datasets => client.get_dataset_list().context("listing datasets")?,
                BeaCommand::Parameters { dataset } => client
                    .get_parameters_list(&dataset)
                    .with_context(|| format!("listing parameters of {dataset}"))?,
                BeaCommand::Values { dataset, parameter } => client
                    .get_parameter_values(&dataset, &parameter)
                    .with_context(|| format!("listing values of {dataset}.{parameter}"))?,
                BeaCommand::Data { dataset, filters, flags } => {
                    let query = dataset_query(&filters, &flags);
                    client
                        .get_data(dataset, &query)
                        .with_context(|| format!("fetching {dataset} data"))?
                }
            };
            Ok(payload)
        }
    }
}

fn list(values: Vec<String>) -> Filter {
    if values.is_empty() {
        Filter::Unset
    } else {
        Filter::Values(values)
    }
}

fn dataset_query(filters: &[(String, String)], flags: &[(String, bool)]) -> DatasetQuery {
    let query = filters
        .iter()
        .fold(DatasetQuery::new(), |query, (key, raw)| query.filter(key, Filter::parse(raw)));
    flags
        .iter()
        .fold(query, |query, (key, flag)| query.flag(key, *flag))
}

fn emit(payload: &Payload, output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output {
        let path = save_to_json(payload, path).with_context(|| format!("saving to {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved response");
        return Ok(());
    }
    match payload {
        Payload::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
        Payload::Text(text) => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use govdata_core::bea::Arg;

    use super::*;

    #[test]
    fn dataset_query_parses_filter_values() {
        let query = dataset_query(
            &[
                ("Year".to_string(), "2019, 2020".to_string()),
                ("TableName".to_string(), "all".to_string()),
            ],
            &[("GetFootnotes".to_string(), false)],
        );

        assert_eq!(query.get("year"), Some(&Arg::Filter(Filter::values(["2019", "2020"]))));
        assert_eq!(query.get("tablename"), Some(&Arg::Filter(Filter::All)));
        assert_eq!(query.get("getfootnotes"), Some(&Arg::Flag(false)));
    }

    #[test]
    fn filter_of_only_commas_is_unset() {
        let query = dataset_query(&[("tablename".to_string(), ",".to_string())], &[]);
        assert_eq!(query.get("tablename"), Some(&Arg::Filter(Filter::Unset)));
    }

    #[test]
    fn empty_list_is_unset() {
        assert_eq!(list(Vec::new()), Filter::Unset);
        assert_eq!(list(vec!["RULE".to_string()]), Filter::values(["RULE"]));
    }

    #[test]
    fn emit_saves_text_payload_as_json_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        emit(&Payload::Text("<BEAAPI/>".to_string()), Some(&path)).unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, Value::String("<BEAAPI/>".to_string()));
    }
}
