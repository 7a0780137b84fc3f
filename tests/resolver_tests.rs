// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fallback chain and mapping scenarios on the product records.

use rest_localization::products::{localize_all, sample_products, Product, ProductDto};
use rest_localization::{
    CultureName, CultureSource, LocalizationError, LocalizationMapper, LocalizationResolver,
    Localizations, Value,
};

struct Fixed(&'static str);

impl CultureSource for Fixed {
    fn current_culture(&self) -> CultureName {
        CultureName::from(self.0)
    }
}

fn product(names: Localizations<String>) -> Product {
    Product {
        name: "Price".to_string(),
        name_localizations: Some(names),
        price: 10.0,
        price_localizations: None,
    }
}

fn resolve_name(product: &Product, culture: &str) -> String {
    let source = Fixed("en");
    LocalizationResolver::new(&source)
        .resolve(product, "Name", Some(culture))
        .expect("Name is localizable")
}

#[test]
fn test_exact_match_takes_precedence() {
    let product = product(
        Localizations::new()
            .with("de-AT", "Preis-AT".to_string())
            .with("de", "Preis-DE".to_string()),
    );
    assert_eq!(resolve_name(&product, "de-AT"), "Preis-AT");
}

#[test]
fn test_neutral_fallback_for_unlisted_region() {
    let product = product(
        Localizations::new()
            .with("de-AT", "Preis-AT".to_string())
            .with("de", "Preis-DE".to_string()),
    );
    assert_eq!(resolve_name(&product, "de-CH"), "Preis-DE");
}

#[test]
fn test_bare_neutral_request_takes_regional_variant() {
    let product = product(Localizations::new().with("en-GB", "X".to_string()));
    assert_eq!(resolve_name(&product, "en"), "X");
}

#[test]
fn test_bare_neutral_tie_is_implementation_defined() {
    // Several regional variants: any of them is acceptable.
    let product = product(
        Localizations::new()
            .with("en-GB", "GB".to_string())
            .with("en-AU", "AU".to_string()),
    );
    let resolved = resolve_name(&product, "en");
    assert!(resolved == "GB" || resolved == "AU", "got {}", resolved);
}

#[test]
fn test_no_match_returns_base_value() {
    let empty = product(Localizations::new());
    let absent = Product {
        name_localizations: None,
        ..empty.clone()
    };
    for culture in ["de", "de-AT", "zh-TW", "", "xyz"] {
        assert_eq!(resolve_name(&empty, culture), "Price");
        assert_eq!(resolve_name(&absent, culture), "Price");
    }
}

#[test]
fn test_tombstone_keeps_base_value() {
    let product = product(
        Localizations::new()
            .with_absent("de-AT")
            .with("de", "Preis-DE".to_string()),
    );
    assert_eq!(resolve_name(&product, "de-AT"), "Price");
    assert_eq!(resolve_name(&product, "de-DE"), "Preis-DE");
}

#[test]
fn test_requested_culture_is_trimmed_and_case_insensitive() {
    let product = product(Localizations::new().with("zh-TW", "價格".to_string()));
    assert_eq!(resolve_name(&product, "  ZH-tw "), "價格");
}

#[test]
fn test_omitted_culture_uses_current_ui_culture() {
    let product = product(Localizations::new().with("de", "Preis".to_string()));
    let source = Fixed("de-LI");
    let resolver = LocalizationResolver::new(&source);
    let name: String = resolver.resolve(&product, "Name", None).expect("localizable");
    assert_eq!(name, "Preis");
}

#[test]
fn test_resolution_is_repeatable() {
    let products = sample_products();
    let source = Fixed("de-CH");
    let resolver = LocalizationResolver::new(&source);
    for product in &products {
        let first = resolver.resolve_value(product, "Price", None).expect("localizable");
        let second = resolver.resolve_value(product, "Price", None).expect("localizable");
        assert_eq!(first, second);
    }
}

#[test]
fn test_numeric_properties_resolve() {
    let products = sample_products();
    let source = Fixed("de-CH");
    let resolver = LocalizationResolver::new(&source);
    let price: f64 = resolver.resolve(&products[0], "Price", None).expect("localizable");
    assert_eq!(price, 54.0);
    assert_eq!(
        resolver.resolve_value(&products[2], "Price", Some("de-CH")),
        Ok(Some(Value::Number(24.5)))
    );
}

#[test]
fn test_structural_errors() {
    let products = sample_products();
    let source = Fixed("en");
    let resolver = LocalizationResolver::new(&source);

    assert_eq!(
        resolver.resolve::<Product, String>(&products[0], "", None),
        Err(LocalizationError::InvalidArgument("property_name"))
    );
    assert!(matches!(
        resolver.resolve::<Product, String>(&products[0], "Price", None),
        Err(LocalizationError::MissingLocalizableProperty { .. })
    ));
    assert!(matches!(
        resolver.resolve::<Product, String>(&products[0], "name", None),
        Err(LocalizationError::MissingLocalizableProperty { .. })
    ));
    assert!(matches!(
        resolver.resolve_value(&products[0], "Colour", None),
        Err(LocalizationError::MissingLocalizableProperty { .. })
    ));
}

#[test]
fn test_localizable_queries() {
    let products = sample_products();
    let source = Fixed("en");
    let resolver = LocalizationResolver::new(&source);
    assert_eq!(resolver.is_localizable::<Product>("Name"), Ok(true));
    assert_eq!(resolver.is_localizable::<ProductDto>("Name"), Ok(false));
    assert!(resolver.is_localizable::<Product>(" ").is_err());

    let names = resolver.localizations(&products[1], "Name").expect("valid name");
    assert_eq!(names[2], ("en-GB".to_string(), None));
    assert!(resolver
        .localizations(&products[2], "Name")
        .expect("valid name")
        .is_empty());
}

#[test]
fn test_map_all_leaves_source_untouched() {
    let products = sample_products();
    let before = products.clone();
    let source = Fixed("fr-CA");
    let mapper = LocalizationMapper::new(&source);

    let mut dto = ProductDto::from(&products[0]);
    mapper
        .map_all(&mut dto, &products[0], None)
        .expect("mapping succeeds");
    assert_eq!(dto.name, "Chaise");
    assert_eq!(dto.price, 49.9);
    assert_eq!(products, before);
}

#[test]
fn test_localize_all_for_each_culture() {
    let products = sample_products();
    let source = Fixed("en");
    let mapper = LocalizationMapper::new(&source);

    let zh = localize_all(&mapper, &products, Some("zh-CN")).expect("mapping succeeds");
    assert_eq!(zh[0].name, "椅子");
    assert_eq!(zh[1].name, "Table");

    let base = localize_all(&mapper, &products, None).expect("mapping succeeds");
    let names: Vec<&str> = base.iter().map(|dto| dto.name.as_str()).collect();
    assert_eq!(names, vec!["Chair", "Table", "Lamp"]);
}
