//! Furniture definitions and drag-and-drop payloads.
//!
//! The catalog is read-only input supplied by the host. Definitions are shared
//! behind `Arc` so many [`crate::scene::FurnitureInstance`]s can point at the
//! same record while owning their own placement state.
//!
//! Drop payloads arrive in two wire shapes (the current catalog drop and a
//! legacy product drop). Both are decoded once here into a
//! [`FurnitureDefinition`]; nothing past this module sees the raw shapes.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, SceneError};
use crate::units::inches_to_px;

const LEGACY_CATEGORY: &str = "uncategorized";
const LEGACY_COLOR: &str = "#9CA3AF";

/// Outline drawn for a furniture block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Rectangle,
    Round,
    Oval,
    LShape,
}

/// A catalog entry. Width and depth are nominal dimensions in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub width: f64,
    pub depth: f64,
    #[serde(default)]
    pub shape: Shape,
    pub color: String,
}

impl FurnitureDefinition {
    /// Footprint width in canvas pixels.
    #[must_use]
    pub fn width_px(&self) -> f64 {
        inches_to_px(self.width)
    }

    /// Footprint depth in canvas pixels.
    #[must_use]
    pub fn depth_px(&self) -> f64 {
        inches_to_px(self.depth)
    }
}

/// Fixed set of furniture definitions keyed by id, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: IndexMap<String, Arc<FurnitureDefinition>>,
}

impl Catalog {
    /// Build a catalog from definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two definitions share an id.
    pub fn new(definitions: Vec<FurnitureDefinition>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::with_capacity(definitions.len());
        for def in definitions {
            if map.contains_key(&def.id) {
                return Err(CatalogError::DuplicateId(def.id));
            }
            map.insert(def.id.clone(), Arc::new(def));
        }
        Ok(Self { definitions: map })
    }

    /// Parse a JSON array of definitions.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<FurnitureDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// Resolve a definition id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<FurnitureDefinition>> {
        self.definitions.get(id)
    }

    /// Definitions grouped by category. Categories are sorted, entries keep catalog order.
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&FurnitureDefinition>> {
        let mut groups: BTreeMap<&str, Vec<&FurnitureDefinition>> = BTreeMap::new();
        for def in self.definitions.values() {
            groups.entry(def.category.as_str()).or_default().push(def);
        }
        groups
    }

    /// Iterate definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<FurnitureDefinition>> {
        self.definitions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Product reference carried by a catalog drag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
}

/// Dimensions block of a legacy product, in inches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyDimensions {
    pub width: f64,
    pub depth: f64,
}

/// Self-describing product carried by older drag sources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub dimensions: LegacyDimensions,
    #[serde(default)]
    pub color: Option<String>,
}

/// A drag-and-drop payload as received from the host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum DropPayload {
    #[serde(rename = "catalogDrop")]
    CatalogDrop { product: CatalogProduct },
    #[serde(rename = "legacyDrop")]
    LegacyDrop { product: LegacyProduct },
}

impl DropPayload {
    /// Decode a payload from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns the decode error for unknown kinds or missing fields.
    pub fn decode(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Normalize the payload into a definition.
    ///
    /// Catalog drops must resolve against `catalog`. Legacy drops prefer the
    /// catalog record with the same id and otherwise become an ad-hoc definition.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownDefinition`] for a catalog drop whose id is not in the catalog.
    pub fn resolve(&self, catalog: &Catalog) -> Result<Arc<FurnitureDefinition>, SceneError> {
        match self {
            Self::CatalogDrop { product } => catalog
                .get(&product.id)
                .cloned()
                .ok_or_else(|| SceneError::UnknownDefinition(product.id.clone())),
            Self::LegacyDrop { product } => {
                if let Some(def) = catalog.get(&product.id) {
                    return Ok(Arc::clone(def));
                }
                Ok(Arc::new(FurnitureDefinition {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    category: product
                        .category
                        .clone()
                        .unwrap_or_else(|| LEGACY_CATEGORY.to_string()),
                    width: product.dimensions.width,
                    depth: product.dimensions.depth,
                    shape: Shape::Rectangle,
                    color: product
                        .color
                        .clone()
                        .unwrap_or_else(|| LEGACY_COLOR.to_string()),
                }))
            }
        }
    }
}
