// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sample product records and their localized DTOs.
//!
//! `Product` carries base values plus per-culture overrides; `ProductDto` is
//! the flat shape handed to clients, filled from a product and then
//! localized through [`LocalizationMapper::map_all`].

use crate::descriptor::{Introspect, PropertyDescriptor};
use crate::error::Result as LocalizationResult;
use crate::localizations::Localizations;
use crate::mapper::LocalizationMapper;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<Localizations<String>>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_localizations: Option<Localizations<f64>>,
}

impl Introspect for Product {
    fn describe() -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor::read_only("Name", |product: &Product| Some(&product.name)),
            PropertyDescriptor::localizations("Name", |product: &Product| {
                product.name_localizations.as_ref()
            }),
            PropertyDescriptor::read_only("Price", |product: &Product| Some(&product.price)),
            PropertyDescriptor::localizations("Price", |product: &Product| {
                product.price_localizations.as_ref()
            }),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub price: f64,
}

impl Introspect for ProductDto {
    fn describe() -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor::read_write(
                "Name",
                |dto: &ProductDto| Some(&dto.name),
                |dto, name| dto.name = name,
            ),
            PropertyDescriptor::read_write(
                "Price",
                |dto: &ProductDto| Some(&dto.price),
                |dto, price| dto.price = price,
            ),
        ]
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// Builtin demo records.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            name: "Chair".to_string(),
            name_localizations: Some(
                Localizations::new()
                    .with("de", "Stuhl".to_string())
                    .with("de-CH", "Stuhl (CH)".to_string())
                    .with("fr", "Chaise".to_string())
                    .with("zh", "椅子".to_string()),
            ),
            price: 49.9,
            price_localizations: Some(Localizations::new().with("de-CH", 54.0).with("en-GB", 42.5)),
        },
        Product {
            name: "Table".to_string(),
            name_localizations: Some(
                Localizations::new()
                    .with("de", "Tisch".to_string())
                    .with("fr", "Table".to_string())
                    .with_absent("en-GB"),
            ),
            price: 199.0,
            price_localizations: Some(Localizations::new().with("de-AT", 189.0)),
        },
        Product {
            name: "Lamp".to_string(),
            name_localizations: None,
            price: 24.5,
            price_localizations: None,
        },
    ]
}

/// Reads product records; `.json` files are JSON, anything else YAML.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading products {}", path.display()))?;
    let products: Vec<Product> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing json products {}", path.display()))?,
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing yaml products {}", path.display()))?,
    };
    debug!(path = %path.display(), products = products.len(), "loaded products");
    Ok(products)
}

pub fn localize(
    mapper: &LocalizationMapper<'_>,
    product: &Product,
    culture: Option<&str>,
) -> LocalizationResult<ProductDto> {
    let mut dto = ProductDto::from(product);
    mapper.map_all(&mut dto, product, culture)?;
    Ok(dto)
}

/// Localizes every product in parallel, keeping input order.
///
/// The culture is fixed on the calling thread before fanning out, so worker
/// threads never consult their own current culture.
pub fn localize_all(
    mapper: &LocalizationMapper<'_>,
    products: &[Product],
    culture: Option<&str>,
) -> LocalizationResult<Vec<ProductDto>> {
    let culture = mapper.resolver().effective_culture(culture);
    products
        .par_iter()
        .map(|product| localize(mapper, product, Some(&culture)))
        .collect()
}
