// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary tables: what the interpreter knows about the marketplace.
//!
//! Two tables, kept apart because lookups prefer one over the other:
//!
//! - the **variant table**: condition entries ("Used" ← "second hand", "pre owned")
//!   and product entries ("laptop" ← "labtop", "lappy")
//! - the **category table**: category slug → keyword set ("furniture" ← "sofa")
//!
//! Both are validated once, at construction, and never change afterwards. A
//! `Vocabulary` can be shared freely across threads.
//!
//! # Invariants (checked by [`Vocabulary::new`])
//!
//! - no empty canonical terms or variants
//! - within one table, a canonical term is never a variant of a different
//!   canonical term
//! - within one table, no variant belongs to two canonical terms
//! - product → category links name an existing product and category

mod tables;

use crate::error::VocabularyError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Which part of the vocabulary a canonical term comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Condition,
    Product,
    Category,
}

/// A canonical term and the spellings that map to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub canonical: String,
    #[serde(default)]
    pub variants: BTreeSet<String>,
}

impl VocabularyEntry {
    pub fn new(canonical: &str, variants: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Lookup key for the canonical term.
    fn key(&self) -> String {
        lookup_key(&self.canonical)
    }
}

/// Raw tables, as written in code or loaded from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VocabularyTables {
    pub conditions: Vec<VocabularyEntry>,
    pub products: Vec<VocabularyEntry>,
    pub categories: Vec<VocabularyEntry>,
    /// Product canonical term → category slug.
    pub product_categories: BTreeMap<String, String>,
}

impl VocabularyTables {
    /// The curated tables that ship with the crate.
    pub fn builtin() -> Self {
        let entries = |rows: &[(&str, &[&str])]| -> Vec<VocabularyEntry> {
            rows.iter()
                .map(|(canonical, variants)| VocabularyEntry::new(canonical, variants))
                .collect()
        };

        Self {
            conditions: entries(tables::CONDITIONS),
            products: entries(tables::PRODUCTS),
            categories: entries(tables::CATEGORIES),
            product_categories: tables::PRODUCT_CATEGORIES
                .iter()
                .map(|(product, category)| (product.to_string(), category.to_string()))
                .collect(),
        }
    }
}

/// Where a lookup key points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TermRef {
    kind: TermKind,
    entry: usize,
}

/// Validated, indexed vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tables: VocabularyTables,
    /// Condition and product terms → entry.
    variant_index: HashMap<String, TermRef>,
    /// Category slugs and keywords → entry.
    category_index: HashMap<String, TermRef>,
    /// Product canonical key → category entry.
    product_links: HashMap<String, usize>,
    /// Every term of both tables, variant table first, for fuzzy scans.
    fuzzy_terms: Vec<String>,
}

impl Vocabulary {
    /// Validate and index a set of tables.
    pub fn new(tables: VocabularyTables) -> Result<Self, VocabularyError> {
        let variant_index = build_index(
            "variant",
            &[
                (TermKind::Condition, &tables.conditions),
                (TermKind::Product, &tables.products),
            ],
        )?;
        let category_index = build_index("category", &[(TermKind::Category, &tables.categories)])?;

        let mut product_links = HashMap::with_capacity(tables.product_categories.len());
        for (product, category) in &tables.product_categories {
            let product_key = lookup_key(product);
            let is_product = matches!(
                variant_index.get(&product_key),
                Some(r) if r.kind == TermKind::Product && tables.products[r.entry].key() == product_key
            );
            if !is_product {
                return Err(VocabularyError::UnknownProduct {
                    product: product.clone(),
                });
            }
            let category_entry = tables
                .categories
                .iter()
                .position(|entry| entry.key() == lookup_key(category))
                .ok_or_else(|| VocabularyError::UnknownCategory {
                    product: product.clone(),
                    category: category.clone(),
                })?;
            product_links.insert(product_key, category_entry);
        }

        let mut seen = HashSet::new();
        let fuzzy_terms: Vec<String> = tables
            .conditions
            .iter()
            .chain(&tables.products)
            .chain(&tables.categories)
            .flat_map(|entry| {
                std::iter::once(entry.key()).chain(entry.variants.iter().map(|v| lookup_key(v)))
            })
            .filter(|term| seen.insert(term.clone()))
            .collect();

        Ok(Self {
            tables,
            variant_index,
            category_index,
            product_links,
            fuzzy_terms,
        })
    }

    /// The built-in vocabulary.
    pub fn builtin() -> Result<Self, VocabularyError> {
        Self::new(VocabularyTables::builtin())
    }

    pub fn tables(&self) -> &VocabularyTables {
        &self.tables
    }

    pub fn products(&self) -> &[VocabularyEntry] {
        &self.tables.products
    }

    /// Every canonical term and variant of both tables, variant table first.
    pub fn fuzzy_terms(&self) -> &[String] {
        &self.fuzzy_terms
    }

    /// Exact lookup in the variant table (conditions and products).
    pub fn lookup_variant(&self, term: &str) -> Option<(TermKind, &str)> {
        self.variant_index
            .get(&lookup_key(term))
            .map(|r| (r.kind, self.canonical(*r)))
    }

    /// Exact lookup in the category table.
    pub fn lookup_category(&self, term: &str) -> Option<&str> {
        self.category_index
            .get(&lookup_key(term))
            .map(|r| self.canonical(*r))
    }

    /// Exact lookup, variant table first.
    pub fn lookup_exact(&self, term: &str) -> Option<(TermKind, &str)> {
        self.lookup_variant(term).or_else(|| {
            self.lookup_category(term)
                .map(|slug| (TermKind::Category, slug))
        })
    }

    pub fn contains_exact(&self, term: &str) -> bool {
        self.lookup_exact(term).is_some()
    }

    /// Category slug a product belongs to, if linked.
    pub fn category_for_product(&self, product: &str) -> Option<&str> {
        self.product_links
            .get(&lookup_key(product))
            .map(|&entry| self.tables.categories[entry].canonical.as_str())
    }

    fn canonical(&self, r: TermRef) -> &str {
        let entries = match r.kind {
            TermKind::Condition => &self.tables.conditions,
            TermKind::Product => &self.tables.products,
            TermKind::Category => &self.tables.categories,
        };
        &entries[r.entry].canonical
    }
}

fn lookup_key(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Index one table, enforcing the one-string-one-owner rule.
fn build_index(
    table: &'static str,
    sections: &[(TermKind, &Vec<VocabularyEntry>)],
) -> Result<HashMap<String, TermRef>, VocabularyError> {
    let mut index: HashMap<String, TermRef> = HashMap::new();
    let mut canonical_keys: HashSet<String> = HashSet::new();

    let owner = |r: &TermRef| -> String {
        sections
            .iter()
            .find(|(kind, _)| *kind == r.kind)
            .map(|(_, entries)| entries[r.entry].canonical.clone())
            .unwrap_or_default()
    };

    // Canonical terms first, so a later variant collision can be told apart
    // from a plain duplicate variant.
    for (kind, entries) in sections {
        for (entry, item) in entries.iter().enumerate() {
            let key = item.key();
            if key.is_empty() {
                return Err(VocabularyError::EmptyTerm {
                    table,
                    canonical: item.canonical.clone(),
                });
            }
            let here = TermRef { kind: *kind, entry };
            if let Some(existing) = index.insert(key.clone(), here) {
                return Err(VocabularyError::AmbiguousVariant {
                    table,
                    variant: key,
                    first: owner(&existing),
                    second: item.canonical.clone(),
                });
            }
            canonical_keys.insert(key);
        }
    }

    for (kind, entries) in sections {
        for (entry, item) in entries.iter().enumerate() {
            let here = TermRef { kind: *kind, entry };
            for variant in &item.variants {
                let key = lookup_key(variant);
                if key.is_empty() {
                    return Err(VocabularyError::EmptyTerm {
                        table,
                        canonical: item.canonical.clone(),
                    });
                }
                match index.get(&key).copied() {
                    None => {
                        index.insert(key, here);
                    }
                    Some(existing) if existing == here => {}
                    Some(existing) if canonical_keys.contains(&key) => {
                        return Err(VocabularyError::CanonicalIsVariant {
                            table,
                            canonical: owner(&existing),
                            owner: item.canonical.clone(),
                        });
                    }
                    Some(existing) => {
                        return Err(VocabularyError::AmbiguousVariant {
                            table,
                            variant: key,
                            first: owner(&existing),
                            second: item.canonical.clone(),
                        });
                    }
                }
            }
        }
    }

    Ok(index)
}
