// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading settings and products from disk and bootstrapping a context.

use rest_localization::products::{load_products, localize_all};
use rest_localization::{
    CultureContextKind, CultureName, CultureProvider, CultureSource, LocalizationMapper,
    LocalizationSettings,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_yaml_settings_bootstrap_a_context() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("localization.yaml");
    fs::write(
        &path,
        "default_culture: de-CH\nsupported_cultures: [en, de, de-CH]\ncontext: process_wide\n",
    )
    .expect("write settings");

    let settings = LocalizationSettings::load(&path).expect("settings load");
    let database = settings.locale_database();
    let context = settings.build_context(&database).expect("context builds");

    assert_eq!(context.kind(), CultureContextKind::ProcessWide);
    assert_eq!(context.default_culture_name().as_str(), "de-CH");
    assert_eq!(context.supported_cultures().len(), 3);
}

#[test]
fn test_json_settings_load() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("localization.json");
    fs::write(
        &path,
        r#"{"scope": {"neutral": true, "specific": false, "installed": false}, "default_culture": "fr"}"#,
    )
    .expect("write settings");

    let settings = LocalizationSettings::load(&path).expect("settings load");
    assert!(!settings.scope.specific);
    assert_eq!(settings.default_culture.as_deref(), Some("fr"));
    assert_eq!(settings.supported_cultures, None);

    let catalog = settings
        .build_catalog(&settings.locale_database())
        .expect("catalog builds");
    assert!(catalog.contains("ja"));
    assert!(!catalog.contains("fr-CA"));
}

#[test]
fn test_unoffered_process_locale_still_bootstraps() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("localization.yaml");
    fs::write(&path, "supported_cultures: [en, de, de-AT]\n").expect("write settings");

    let mut settings = LocalizationSettings::load(&path).expect("settings load");
    let database = settings.locale_database();
    let chosen = settings.default_from_process(&database, &CultureName::from("en-DK"), "de");
    assert_eq!(chosen.as_ref().map(CultureName::as_str), Some("en"));

    let context = settings.build_context(&database).expect("context builds");
    assert_eq!(context.default_culture_name().as_str(), "en");
    context.set_current_culture("de").expect("de is supported");
    assert_eq!(context.current_culture().as_str(), "de");
}

#[test]
fn test_unreadable_settings_name_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.yaml");
    let err = LocalizationSettings::load(&path).expect_err("file is missing");
    assert!(format!("{:#}", err).contains("missing.yaml"));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").expect("write settings");
    let err = LocalizationSettings::load(&broken).expect_err("file is broken");
    assert!(format!("{:#}", err).contains("parsing json settings"));
}

#[test]
fn test_bootstrap_rejects_unknown_default() {
    let settings = LocalizationSettings {
        default_culture: Some("fr".to_string()),
        supported_cultures: Some(vec!["en".to_string()]),
        ..LocalizationSettings::default()
    };
    let err = settings
        .build_context(&settings.locale_database())
        .expect_err("fr is not supported");
    assert_eq!(err.to_string(), "unknown default culture fr");
}

#[test]
fn test_products_file_round_trip_through_mapper() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("products.yaml");
    fs::write(
        &path,
        r#"
- name: Desk
  nameLocalizations:
    de: Schreibtisch
    de-AT: ~
  price: 300
  priceLocalizations:
    de-AT: 280.5
- name: Shelf
  price: 80.0
"#,
    )
    .expect("write products");

    let products = load_products(&path).expect("products load");
    assert_eq!(products.len(), 2);

    let settings = LocalizationSettings {
        default_culture: Some("en".to_string()),
        supported_cultures: Some(vec!["en".to_string(), "de".to_string(), "de-AT".to_string()]),
        ..LocalizationSettings::default()
    };
    let context = settings
        .build_context(&settings.locale_database())
        .expect("context builds");
    let request = context.request_culture(Some("de-at")).expect("supported");
    assert_eq!(request.current_ui_culture().as_str(), "de-AT");

    let mapper = LocalizationMapper::new(&request);
    let dtos = localize_all(&mapper, &products, None).expect("mapping succeeds");
    assert_eq!(dtos[0].name, "Desk");
    assert_eq!(dtos[0].price, 280.5);
    assert_eq!(dtos[1].name, "Shelf");
}
