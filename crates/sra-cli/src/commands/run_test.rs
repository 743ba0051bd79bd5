use super::*;
use serde_json::json;
use sra_core::parse_organisations;
use sra_store::MemoryStore;

fn snapshot() -> Vec<Organisation> {
    approved(
        parse_organisations(json!({
            "Organisations": [
                {
                    "Id": 1,
                    "PracticeName": "smith & co",
                    "AuthorisationStatus": "YES",
                    "Offices": [
                        { "OfficeId": 11, "Name": "head office" },
                        { "OfficeId": 12 }
                    ],
                    "WorkArea": ["Conveyancing"],
                    "Websites": ["https://smith.co.uk"]
                },
                {
                    "Id": 2,
                    "AuthorisationStatus": "NO",
                    "Offices": [{ "OfficeId": 21 }]
                }
            ]
        }))
        .unwrap(),
    )
}

#[tokio::test]
async fn test_pipeline_replaces_all_six_tables_in_order() {
    let store = MemoryStore::new();
    let organisations = snapshot();

    let summary = run_pipeline(&store, &organisations).await.unwrap();

    let names: Vec<&str> = summary.tables.iter().map(|t| t.table.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Firm",
            "Address_Detail",
            "WorkAreas",
            "TradingNames",
            "Websites",
            "PreviousNames"
        ]
    );

    // Truncate strictly precedes insert for every table.
    assert_eq!(
        store.journal(),
        vec![
            "truncate Firm",
            "insert Firm 1",
            "truncate Address_Detail",
            "insert Address_Detail 2",
            "truncate WorkAreas",
            "insert WorkAreas 1",
            "truncate TradingNames",
            "insert TradingNames 0",
            "truncate Websites",
            "insert Websites 1",
            "truncate PreviousNames",
            "insert PreviousNames 0"
        ]
    );
}

#[tokio::test]
async fn test_filtered_snapshot_end_to_end() {
    let store = MemoryStore::new();
    let organisations = snapshot();

    run_pipeline(&store, &organisations).await.unwrap();

    // Only the approved organisation survives; both its offices land in
    // Address_Detail with its Id as the foreign key.
    let addresses = store.rows("Address_Detail");
    assert_eq!(addresses.len(), 2);
    for row in &addresses {
        assert_eq!(row["Id"], json!(1));
    }
    assert_eq!(addresses[0]["Name"], json!("Head Office"));

    let firms = store.rows("Firm");
    assert_eq!(firms.len(), 1);
    assert_eq!(firms[0]["PracticeName"], json!("Smith & Co"));
}

#[tokio::test]
async fn test_nulls_become_empty_strings() {
    let store = MemoryStore::new();
    let organisations = snapshot();

    run_pipeline(&store, &organisations).await.unwrap();

    // The second office has no Name; the destination row carries "".
    let addresses = store.rows("Address_Detail");
    assert_eq!(addresses[1]["Name"], json!(""));
    assert_eq!(addresses[1]["Postcode"], json!(""));
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let store = MemoryStore::new();
    let organisations = snapshot();

    run_pipeline(&store, &organisations).await.unwrap();
    let first: Vec<Vec<sra_store::Row>> = tables::schemas()
        .iter()
        .map(|(name, _)| store.rows(name))
        .collect();

    run_pipeline(&store, &organisations).await.unwrap();
    let second: Vec<Vec<sra_store::Row>> = tables::schemas()
        .iter()
        .map(|(name, _)| store.rows(name))
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_failure_aborts_remaining_tables() {
    let store = MemoryStore::new();
    store.reject_insert_into("WorkAreas");
    let organisations = snapshot();

    let err = run_pipeline(&store, &organisations).await.unwrap_err();
    assert!(err.to_string().contains("WorkAreas"));

    // Earlier tables are loaded, the failing table is left truncated, and
    // later tables were never touched.
    assert_eq!(store.rows("Firm").len(), 1);
    assert_eq!(store.rows("Address_Detail").len(), 2);
    assert!(store.rows("WorkAreas").is_empty());
    let journal = store.journal();
    assert_eq!(journal.last().map(String::as_str), Some("truncate WorkAreas"));
    assert!(!journal.iter().any(|op| op.contains("TradingNames")));
}
