//! End-to-end sync run over a realistic theme working copy
//!
//! Exercises the whole stack at once: preamble-tolerant reading, disabled
//! content pruning, remote-wins merging, new-template detection, publish
//! hand-off, and working-area cleanup.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;
use theme_core::{
    PullRequest, PushFile, PushTarget, Result, SourceTheme, SyncEngine, SyncOptions,
    ThemeTransport,
};
use theme_fs::NormalizedPath;

/// Pull writes pre-rendered remote file bodies; publish records its input.
#[derive(Default)]
struct RecordingTransport {
    remote_files: Vec<(String, String)>,
    published: RefCell<Vec<PushFile>>,
}

impl ThemeTransport for RecordingTransport {
    fn pull(&self, request: &PullRequest) -> Result<()> {
        for (relative, body) in &self.remote_files {
            let path = request.destination.join(relative).to_native();
            fs::create_dir_all(path.parent().unwrap())?;
            fs::write(path, body)?;
        }
        Ok(())
    }

    fn publish(&self, files: &[PushFile], _target: &PushTarget) -> Result<()> {
        self.published.borrow_mut().extend_from_slice(files);
        Ok(())
    }
}

fn write_file(root: &std::path::Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn read_json(root: &std::path::Path, relative: &str) -> Value {
    serde_json::from_str(&fs::read_to_string(root.join(relative)).unwrap()).unwrap()
}

#[test]
fn full_sync_run_over_a_storefront_checkout() {
    let temp = TempDir::new().unwrap();

    // Working copy: one locale, a settings file, one existing template
    // carrying a disabled block, and one brand-new template.
    write_file(
        temp.path(),
        "locales/en.default.json",
        r#"{
  "general": {
    "title": "Test Store",
    "meta_description": "Test description",
    "currency_code": "USD"
  },
  "customer": {
    "login": "Login",
    "register": "Register",
    "logout": "Logout"
  }
}"#,
    );
    write_file(
        temp.path(),
        "config/settings_data.json",
        r#"{"current": {"logo_width": 120}}"#,
    );
    write_file(
        temp.path(),
        "templates/product.json",
        r#"{
  "sections": {
    "main": {
      "type": "main-product",
      "blocks": {
        "title": {"type": "title"},
        "promo": {"type": "text", "disabled": true}
      },
      "block_order": ["title", "promo"]
    }
  },
  "order": ["main"]
}"#,
    );
    write_file(
        temp.path(),
        "templates/collection.json",
        r#"{"sections": {"grid": {"type": "collection-grid"}}, "order": ["grid"]}"#,
    );

    // Remote mirror: the locale arrives with the storefront's generated
    // preamble, the settings file is identical, and only product.json
    // exists on the remote side.
    let transport = RecordingTransport {
        remote_files: vec![
            (
                "locales/en.default.json".to_string(),
                r#"/*
 * IMPORTANT: The contents of this file are auto-generated.
 */
{
  "general": {
    "title": "Remote Store Title",
    "meta_description": "Test description",
    "currency_code": "CAD",
    "new_key": "New remote value"
  },
  "customer": {
    "login": "Remote Login",
    "register": "Register",
    "logout": "Logout",
    "forgot_password": "Forgot Password"
  }
}"#
                .to_string(),
            ),
            (
                "config/settings_data.json".to_string(),
                r#"{"current": {"logo_width": 120}}"#.to_string(),
            ),
            (
                "templates/product.json".to_string(),
                r#"{"sections": {"main": {"type": "main-product"}}}"#.to_string(),
            ),
        ],
        ..RecordingTransport::default()
    };

    let engine = SyncEngine::new(NormalizedPath::new(temp.path()), SyncOptions::default());
    let pull = PullRequest {
        store: "test-store.myshopify.com".to_string(),
        source: SourceTheme::Id("654321".to_string()),
        destination: engine.remote_root(),
        only: SyncEngine::pull_patterns(),
    };
    let target = PushTarget {
        store: "test-store.myshopify.com".to_string(),
        theme_id: "123456".to_string(),
    };

    let report = engine.run(&transport, &pull, &target).unwrap();

    // Push set: merged locale, identical-but-present settings file, the
    // pruned existing template, and the new template.
    assert_eq!(
        report.pushed,
        vec![
            "locales/en.default.json",
            "config/settings_data.json",
            "templates/collection.json",
            "templates/product.json",
        ]
    );

    let published = transport.published.borrow();
    assert_eq!(published.len(), 4);

    // Remote wins on collisions, union everywhere else; the preamble is
    // gone from the published document.
    let locale = &published[0].document;
    assert_eq!(locale["general"]["title"], json!("Remote Store Title"));
    assert_eq!(locale["general"]["currency_code"], json!("CAD"));
    assert_eq!(locale["general"]["new_key"], json!("New remote value"));
    assert_eq!(locale["customer"]["login"], json!("Remote Login"));
    assert_eq!(locale["customer"]["forgot_password"], json!("Forgot Password"));

    // The merged locale also landed in the working copy, as bare JSON.
    let on_disk = fs::read_to_string(temp.path().join("locales/en.default.json")).unwrap();
    assert!(on_disk.trim_start().starts_with('{'));
    assert_eq!(
        read_json(temp.path(), "locales/en.default.json")["general"]["title"],
        json!("Remote Store Title")
    );

    // The pruned template dropped its disabled block but kept the order list.
    let product = published
        .iter()
        .find(|f| f.path.as_str() == "templates/product.json")
        .unwrap();
    let blocks = product.document["sections"]["main"]["blocks"]
        .as_object()
        .unwrap();
    assert!(blocks.contains_key("title"));
    assert!(!blocks.contains_key("promo"));
    assert_eq!(
        product.document["sections"]["main"]["block_order"],
        json!(["title", "promo"])
    );

    // The new template went out untouched.
    let collection = published
        .iter()
        .find(|f| f.path.as_str() == "templates/collection.json")
        .unwrap();
    assert_eq!(
        collection.document,
        json!({"sections": {"grid": {"type": "collection-grid"}}, "order": ["grid"]})
    );

    // The remote working area is gone.
    assert!(!temp.path().join("remote").exists());
}

#[test]
fn failed_run_reports_the_parse_error_and_cleans_up() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "locales/en.default.json", "{\"general\": {}}");

    let transport = RecordingTransport {
        remote_files: vec![(
            "locales/en.default.json".to_string(),
            // Unrecoverable: a key missing its closing quote.
            "{\"general\": {\"missing_quote: \"value\"}}".to_string(),
        )],
        ..RecordingTransport::default()
    };

    let engine = SyncEngine::new(NormalizedPath::new(temp.path()), SyncOptions::default());
    let pull = PullRequest {
        store: "test-store.myshopify.com".to_string(),
        source: SourceTheme::Live,
        destination: engine.remote_root(),
        only: SyncEngine::pull_patterns(),
    };
    let target = PushTarget {
        store: "test-store.myshopify.com".to_string(),
        theme_id: "123456".to_string(),
    };

    let err = engine.run(&transport, &pull, &target).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("en.default.json"), "got: {message}");

    assert!(transport.published.borrow().is_empty());
    assert!(!temp.path().join("remote").exists());
}
