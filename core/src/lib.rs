//! Synchronous clients for U.S. government data APIs.
//!
//! # Overview
//! Three independent clients share one request pipeline:
//! - [`CongressClient`]: GovInfo bulk-data listings (`www.govinfo.gov`).
//! - [`FederalRegisterClient`]: documents, agencies and public inspection
//!   (`www.federalregister.gov/api/v1`).
//! - [`BeaClient`]: Bureau of Economic Analysis datasets (`apps.bea.gov`).
//!
//! # Design
//! - Every operation has a pure `build_*` form that returns an
//!   [`HttpRequest`] and a network form that executes it through the
//!   client's [`Transport`] and decodes the response.
//! - Optional filters are [`Filter`] values; unset filters never reach the
//!   query string.
//! - Any non-2xx response is [`ApiError::Remote`], for every client.
//! - No retries, pagination, caching or rate limiting.

pub mod bea;
pub mod congress;
pub mod endpoint;
pub mod error;
pub mod federal_register;
pub mod filter;
pub mod format;
pub mod http;
pub mod response;
pub mod save;
pub mod transport;

#[cfg(test)]
mod testing;

pub use bea::{BeaClient, Dataset, DatasetQuery};
pub use congress::{BulkCollection, CongressClient};
pub use error::ApiError;
pub use federal_register::{DocumentConditions, DocumentSearch, FederalRegisterClient, PublicInspectionSearch};
pub use filter::{Filter, FlagEncoding};
pub use format::{Payload, ResponseFormat};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use save::save_to_json;
pub use transport::{Transport, UreqTransport};
