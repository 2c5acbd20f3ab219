// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The curated vocabulary shipped with the crate.
//!
//! Variants are written post-normalization: lower-case, no hyphens ("pre owned",
//! not "pre-owned"), "second" rather than "2nd".

// ============================================================================
// Conditions
// ============================================================================

/// Condition canonical terms are the display labels stored on listings.
pub(super) const CONDITIONS: &[(&str, &[&str])] = &[
    (
        "New",
        &["new", "brand new", "brandnew", "unused", "sealed", "unopened", "fresh"],
    ),
    (
        "Like New",
        &["like new", "likenew", "mint", "mint condition", "almost new", "barely used"],
    ),
    (
        "Used",
        &["used", "second hand", "secondhand", "second", "pre owned", "preowned", "old"],
    ),
    (
        "Refurbished",
        &["refurbished", "refurb", "renewed", "reconditioned"],
    ),
];

// ============================================================================
// Products
// ============================================================================

/// Well-known product nouns. Table order is match precedence, so "mobile"
/// sits before "phone" to claim "mobile phone" as a whole.
pub(super) const PRODUCTS: &[(&str, &[&str])] = &[
    ("laptop", &["laptops", "labtop", "lappy", "lap top"]),
    ("tablet", &["tablets", "tab", "ipad"]),
    (
        "mobile",
        &["mobiles", "mobile phone", "mobl", "mobil", "cellphone", "cell phone", "smartphone"],
    ),
    ("phone", &["phones", "iphone"]),
    ("computer", &["computers", "desktop", "pc", "cpu"]),
];

/// Category each product belongs to, used when a product word shows up
/// without being claimed as the specific product.
pub(super) const PRODUCT_CATEGORIES: &[(&str, &str)] = &[
    ("laptop", "electronics"),
    ("tablet", "electronics"),
    ("mobile", "electronics"),
    ("phone", "electronics"),
    ("computer", "electronics"),
];

// ============================================================================
// Categories
// ============================================================================

/// Category slug → keywords.
pub(super) const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "electronics",
        &[
            "electronic", "gadget", "gadgets", "camera", "headphones", "earphones", "speaker",
            "television", "tv", "charger", "console",
        ],
    ),
    (
        "furniture",
        &[
            "sofa", "couch", "table", "chair", "bed", "wardrobe", "desk", "shelf", "cupboard",
        ],
    ),
    (
        "books",
        &["book", "novel", "novels", "textbook", "textbooks", "comics"],
    ),
    (
        "clothing",
        &[
            "clothes", "shirt", "tshirt", "jeans", "jacket", "dress", "shoes", "sneakers", "kurta",
        ],
    ),
    (
        "vehicles",
        &[
            "vehicle", "car", "bike", "bicycle", "cycle", "scooter", "scooty", "motorcycle",
        ],
    ),
    (
        "sports",
        &["cricket", "bat", "football", "racket", "gym", "dumbbells", "fitness"],
    ),
    (
        "home-appliances",
        &[
            "home appliances", "appliances", "appliance", "fridge", "refrigerator",
            "washing machine", "microwave", "cooler", "mixer", "oven",
        ],
    ),
];
