// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for the fallback chain.

use proptest::prelude::*;
use rest_localization::products::Product;
use rest_localization::{CultureName, CultureSource, LocalizationResolver, Localizations};

struct Fixed(&'static str);

impl CultureSource for Fixed {
    fn current_culture(&self) -> CultureName {
        CultureName::from(self.0)
    }
}

fn language() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["en", "de", "fr", "zh", "pt"]).prop_map(str::to_string)
}

fn culture() -> impl Strategy<Value = String> {
    prop_oneof![
        language(),
        (language(), prop::sample::select(vec!["US", "GB", "AT", "CH", "BR", "TW"]))
            .prop_map(|(language, region)| format!("{}-{}", language, region)),
    ]
}

fn localizations() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    prop::collection::vec((culture(), prop::option::of("[a-z]{1,8}")), 0..6)
}

fn product(entries: &[(String, Option<String>)]) -> Product {
    let mut names = Localizations::new();
    for (culture, value) in entries {
        match value {
            Some(value) => names.insert(culture.clone(), value.clone()),
            None => names.insert_absent(culture.clone()),
        };
    }
    Product {
        name: "BASE".to_string(),
        name_localizations: Some(names),
        price: 1.0,
        price_localizations: None,
    }
}

fn resolve(product: &Product, culture: &str) -> String {
    let source = Fixed("en");
    LocalizationResolver::new(&source)
        .resolve(product, "Name", Some(culture))
        .unwrap_or_else(|err| panic!("resolution failed: {}", err))
}

proptest! {
    #[test]
    fn resolution_is_idempotent(entries in localizations(), requested in culture()) {
        let product = product(&entries);
        prop_assert_eq!(resolve(&product, &requested), resolve(&product, &requested));
    }

    #[test]
    fn exact_key_wins(entries in localizations(), requested in culture(), value in "[A-Z]{3}") {
        let mut entries: Vec<_> = entries
            .into_iter()
            .filter(|(culture, _)| !culture.eq_ignore_ascii_case(&requested))
            .collect();
        entries.push((requested.to_ascii_uppercase(), Some(value.clone())));
        prop_assert_eq!(resolve(&product(&entries), &requested), value);
    }

    #[test]
    fn empty_map_returns_base(requested in culture()) {
        prop_assert_eq!(resolve(&product(&[]), &requested), "BASE");
    }

    #[test]
    fn result_is_base_or_a_mapped_value(entries in localizations(), requested in culture()) {
        let resolved = resolve(&product(&entries), &requested);
        let known = resolved == "BASE"
            || entries.iter().any(|(_, value)| value.as_deref() == Some(resolved.as_str()));
        prop_assert!(known, "unexpected value {}", resolved);
    }
}
