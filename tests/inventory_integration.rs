//! Integration tests for inventory loading.

use oraconn::store::{
    DescriptorStore, EnvExpander, Inventory, InventoryFormat, MapEnvSource,
};
use oraconn::{DescriptorKind, ErrorCode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.toml");
    fs::write(
        &path,
        r#"
        [[descriptor]]
        id = "app-db"
        type = "db"
        host = "db1"
        port = 1521
        "#,
    )
    .unwrap();

    let inventory = Inventory::load(&path).expect("Failed to load inventory");
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.descriptors()[0].kind(), DescriptorKind::Database);
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(
        &path,
        r#"{"descriptor": [
            {"id": "srvA", "type": "server", "user": "deploy", "url": "srv-a"},
            {"id": "app-db", "pqdb": "srvA@db", "timeout": 2.5}
        ]}"#,
    )
    .unwrap();

    let store = Inventory::load(&path).unwrap().into_store();
    assert_eq!(store.ids(), vec!["srvA", "app-db"]);

    let app = store.find("app-db").unwrap().unwrap();
    assert_eq!(app.attr("timeout"), Some("2.5"));
}

#[test]
fn test_secrets_from_environment() {
    let expander = EnvExpander::with_source(
        MapEnvSource::new()
            .set("APP_DB_USER", "scott")
            .set("APP_DB_PASSWORD", "tiger"),
    );
    let content = r#"
        [[descriptor]]
        id = "app-db"
        user = "$APP_DB_USER"
        password = "${APP_DB_PASSWORD}"
        sid = "${APP_DB_SID:-ORCL}"
    "#;

    let inventory = Inventory::parse_with(content, InventoryFormat::Toml, &expander).unwrap();
    let app = &inventory.descriptors()[0];
    assert_eq!(app.attr("user"), Some("scott"));
    assert_eq!(app.attr("password"), Some("tiger"));
    assert_eq!(app.attr("sid"), Some("ORCL"));
}

#[test]
fn test_malformed_inventory() {
    let err = Inventory::parse("[[descriptor]]\nhost = \"db1\"\n", InventoryFormat::Toml)
        .expect_err("descriptor without id must be rejected");
    assert_eq!(err.code, ErrorCode::InvalidInventory);

    let err = Inventory::parse("{not json", InventoryFormat::Json).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInventory);
}
