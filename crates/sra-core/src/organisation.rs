//! Organisation records as delivered by the SRA Data Share API
//!
//! The API returns one denormalized record per organisation with five
//! embedded nested collections. A nested collection arrives either as a
//! native JSON array or as a JSON array serialized into a string value, so
//! each one is modeled as a tagged union on the wire and decoded into a
//! canonical `Vec` immediately after deserialization. The rest of the crate
//! only ever sees the canonical form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Authorisation status a record must carry to survive the initial filter
pub const APPROVED_STATUS: &str = "YES";

/// A nested collection as it appears on the wire: either a native JSON
/// array or a JSON array serialized into a string value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NestedList<T> {
    /// Native JSON array
    Items(Vec<T>),
    /// JSON array serialized into a string
    Encoded(String),
}

impl<T: DeserializeOwned> NestedList<T> {
    /// Canonicalize into a native list.
    ///
    /// An encoded string is parsed exactly once, here; a blank string counts
    /// as an empty collection, anything else that fails to parse as a list
    /// of the right element type is a fatal shape error.
    fn decode(self, id: i64, field: &'static str) -> CoreResult<Vec<T>> {
        match self {
            NestedList::Items(items) => Ok(items),
            NestedList::Encoded(text) => {
                if text.trim().is_empty() {
                    return Ok(Vec::new());
                }
                serde_json::from_str(&text).map_err(|e| CoreError::BadNestedField {
                    id,
                    field,
                    message: e.to_string(),
                })
            }
        }
    }
}

/// The flat scalar attributes of an organisation, in the destination
/// `Firm` table's terms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FirmFields {
    /// Unique, stable identifier; foreign key target for all child tables
    pub id: i64,
    pub sra_number: Option<i64>,
    pub practice_name: Option<String>,
    pub authorisation_type: Option<String>,
    pub authorisation_status: Option<String>,
    pub organisation_type: Option<String>,
    pub authorisation_date: Option<String>,
    pub authorisation_status_date: Option<String>,
    pub freelance_basis: Option<String>,
    pub regulator: Option<String>,
    /// Spelling is the API's own and matches the destination column
    pub reserved_activites: Option<String>,
    pub company_reg_no: Option<String>,
    pub constitution: Option<String>,
    pub no_of_offices: Option<i64>,
    #[serde(rename = "Type")]
    pub firm_type: Option<String>,
}

/// One office sub-record within an organisation's `Offices` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Office {
    pub office_id: Option<i64>,
    pub name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address4: Option<String>,
    pub postcode: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub office_type: Option<String>,
}

/// One organisation record as deserialized from the payload, nested
/// collections still in wire form
#[derive(Debug, Clone, Deserialize)]
struct OrganisationRecord {
    #[serde(flatten)]
    firm: FirmFields,
    #[serde(rename = "Offices")]
    offices: Option<NestedList<Office>>,
    #[serde(rename = "WorkArea")]
    work_area: Option<NestedList<String>>,
    #[serde(rename = "TradingNames")]
    trading_names: Option<NestedList<String>>,
    #[serde(rename = "Websites")]
    websites: Option<NestedList<String>>,
    #[serde(rename = "PreviousNames")]
    previous_names: Option<NestedList<String>>,
}

/// An organisation with every nested collection in canonical form.
///
/// Absent, null and empty collections are all an empty `Vec`; a parent with
/// an empty collection contributes no rows to that collection's table.
#[derive(Debug, Clone)]
pub struct Organisation {
    pub firm: FirmFields,
    pub offices: Vec<Office>,
    pub work_area: Vec<String>,
    pub trading_names: Vec<String>,
    pub websites: Vec<String>,
    pub previous_names: Vec<String>,
}

impl OrganisationRecord {
    fn canonicalize(self) -> CoreResult<Organisation> {
        let id = self.firm.id;
        Ok(Organisation {
            offices: decode_nested(self.offices, id, "Offices")?,
            work_area: decode_nested(self.work_area, id, "WorkArea")?,
            trading_names: decode_nested(self.trading_names, id, "TradingNames")?,
            websites: decode_nested(self.websites, id, "Websites")?,
            previous_names: decode_nested(self.previous_names, id, "PreviousNames")?,
            firm: self.firm,
        })
    }
}

fn decode_nested<T: DeserializeOwned>(
    value: Option<NestedList<T>>,
    id: i64,
    field: &'static str,
) -> CoreResult<Vec<T>> {
    match value {
        None => Ok(Vec::new()),
        Some(list) => list.decode(id, field),
    }
}

/// Wire payload: the API wraps the record array in an `Organisations` key
#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(rename = "Organisations")]
    organisations: Vec<Value>,
}

/// Parse a fetched payload into canonical organisation records.
///
/// The payload must be a JSON object whose `Organisations` key holds an
/// array; each record must deserialize and every nested collection must
/// decode. Any violation aborts the run.
pub fn parse_organisations(payload: Value) -> CoreResult<Vec<Organisation>> {
    let payload: Payload =
        serde_json::from_value(payload).map_err(|e| CoreError::BadPayload {
            message: e.to_string(),
        })?;

    let organisations = payload
        .organisations
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let record: OrganisationRecord =
                serde_json::from_value(record).map_err(|e| CoreError::BadRecord {
                    index,
                    message: e.to_string(),
                })?;
            record.canonicalize()
        })
        .collect::<CoreResult<Vec<_>>>()?;

    log::debug!("Parsed {} organisation records", organisations.len());
    Ok(organisations)
}

/// Keep only organisations whose authorisation status is approved
pub fn approved(organisations: Vec<Organisation>) -> Vec<Organisation> {
    let total = organisations.len();
    let approved: Vec<Organisation> = organisations
        .into_iter()
        .filter(|o| o.firm.authorisation_status.as_deref() == Some(APPROVED_STATUS))
        .collect();
    log::debug!("{} of {} organisations approved", approved.len(), total);
    approved
}

#[cfg(test)]
#[path = "organisation_test.rs"]
mod tests;
