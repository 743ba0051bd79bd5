//! Destination table builders
//!
//! Each builder derives one fixed-schema table from the filtered
//! organisation set. Builders are independent of one another; the load
//! order is decided by the pipeline driver.

use serde_json::Value;

use crate::expand::{expand_offices, expand_scalar};
use crate::normalize::{blank_if_cjk, clean_website, proper_name};
use crate::organisation::Organisation;
use crate::table::Table;

pub const FIRM: &str = "Firm";
pub const ADDRESS_DETAIL: &str = "Address_Detail";
pub const WORK_AREAS: &str = "WorkAreas";
pub const TRADING_NAMES: &str = "TradingNames";
pub const WEBSITES: &str = "Websites";
pub const PREVIOUS_NAMES: &str = "PreviousNames";

const FIRM_COLUMNS: &[&str] = &[
    "Id",
    "SraNumber",
    "PracticeName",
    "AuthorisationType",
    "AuthorisationStatus",
    "OrganisationType",
    "AuthorisationDate",
    "AuthorisationStatusDate",
    "FreelanceBasis",
    "Regulator",
    "ReservedActivites",
    "CompanyRegNo",
    "Constitution",
    "NoOfOffices",
    "Type",
];

const ADDRESS_DETAIL_COLUMNS: &[&str] = &[
    "Id",
    "OfficeId",
    "Name",
    "Address1",
    "Address2",
    "Address3",
    "Address4",
    "Postcode",
    "Town",
    "County",
    "Country",
    "PhoneNumber",
    "Website",
    "Email",
    "OfficeType",
];

// The destination schema's own casing; `work` really is lowercase.
const WORK_AREAS_COLUMNS: &[&str] = &["Id", "work"];
const TRADING_NAMES_COLUMNS: &[&str] = &["Id", "TradingNames"];
const WEBSITES_COLUMNS: &[&str] = &["Id", "Website"];
const PREVIOUS_NAMES_COLUMNS: &[&str] = &["Id", "PreviousName"];

/// Fixed projection of each organisation's flat scalar fields
pub fn firm(parents: &[Organisation]) -> Table {
    let mut table = Table::new(FIRM, FIRM_COLUMNS);
    for org in parents {
        let f = &org.firm;
        table.push_row(vec![
            Value::from(f.id),
            int(f.sra_number),
            text_with(&f.practice_name, proper_name),
            text(&f.authorisation_type),
            text(&f.authorisation_status),
            text(&f.organisation_type),
            text(&f.authorisation_date),
            text(&f.authorisation_status_date),
            text(&f.freelance_basis),
            text(&f.regulator),
            text(&f.reserved_activites),
            text(&f.company_reg_no),
            text(&f.constitution),
            int(f.no_of_offices),
            text(&f.firm_type),
        ]);
    }
    table
}

/// One row per office, tagged with the parent organisation id
pub fn address_detail(parents: &[Organisation]) -> Table {
    let mut table = Table::new(ADDRESS_DETAIL, ADDRESS_DETAIL_COLUMNS);
    for (id, office) in expand_offices(parents) {
        table.push_row(vec![
            Value::from(id),
            int(office.office_id),
            text_with(&office.name, proper_name),
            text(&office.address1),
            text(&office.address2),
            text(&office.address3),
            text(&office.address4),
            text(&office.postcode),
            text(&office.town),
            text(&office.county),
            text(&office.country),
            text(&office.phone_number),
            text(&office.website),
            text(&office.email),
            text(&office.office_type),
        ]);
    }
    table
}

/// One row per work-area entry, value passed through untouched
pub fn work_areas(parents: &[Organisation]) -> Table {
    let mut table = Table::new(WORK_AREAS, WORK_AREAS_COLUMNS);
    for (id, value) in expand_scalar(parents, |o| o.work_area.as_slice()) {
        table.push_row(vec![Value::from(id), Value::from(value)]);
    }
    table
}

/// One row per trading name, title-cased then blanked if non-Latin
pub fn trading_names(parents: &[Organisation]) -> Table {
    let mut table = Table::new(TRADING_NAMES, TRADING_NAMES_COLUMNS);
    for (id, value) in expand_scalar(parents, |o| o.trading_names.as_slice()) {
        table.push_row(vec![
            Value::from(id),
            Value::from(blank_if_cjk(&proper_name(value))),
        ]);
    }
    table
}

/// One row per website, normalized to `www.`-prefixed form
pub fn websites(parents: &[Organisation]) -> Table {
    let mut table = Table::new(WEBSITES, WEBSITES_COLUMNS);
    for (id, value) in expand_scalar(parents, |o| o.websites.as_slice()) {
        table.push_row(vec![Value::from(id), Value::from(clean_website(value))]);
    }
    table
}

/// One row per previous name, title-cased
pub fn previous_names(parents: &[Organisation]) -> Table {
    let mut table = Table::new(PREVIOUS_NAMES, PREVIOUS_NAMES_COLUMNS);
    for (id, value) in expand_scalar(parents, |o| o.previous_names.as_slice()) {
        table.push_row(vec![Value::from(id), Value::from(proper_name(value))]);
    }
    table
}

/// Build the six destination tables in load order
pub fn build_all(parents: &[Organisation]) -> Vec<Table> {
    vec![
        firm(parents),
        address_detail(parents),
        work_areas(parents),
        trading_names(parents),
        websites(parents),
        previous_names(parents),
    ]
}

/// Destination tables in load order with their fixed column schemas
pub fn schemas() -> [(&'static str, &'static [&'static str]); 6] {
    [
        (FIRM, FIRM_COLUMNS),
        (ADDRESS_DETAIL, ADDRESS_DETAIL_COLUMNS),
        (WORK_AREAS, WORK_AREAS_COLUMNS),
        (TRADING_NAMES, TRADING_NAMES_COLUMNS),
        (WEBSITES, WEBSITES_COLUMNS),
        (PREVIOUS_NAMES, PREVIOUS_NAMES_COLUMNS),
    ]
}

fn text(value: &Option<String>) -> Value {
    value.as_deref().map(Value::from).unwrap_or(Value::Null)
}

fn text_with(value: &Option<String>, normalize: impl Fn(&str) -> String) -> Value {
    value
        .as_deref()
        .map(|v| Value::from(normalize(v)))
        .unwrap_or(Value::Null)
}

fn int(value: Option<i64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tests;
