//! Static product and factory catalog.
//!
//! The catalog is constructed once at startup and shared read-only through
//! context; nothing mutates it for the lifetime of the page.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Production facility a product originates from.
///
/// `key` is the machine-readable form used in URLs, `category` the
/// human-readable name shown on filter buttons and badges. The mapping
/// between them is total and 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Navoiyazot,
    MaxamChirchiq,
    Dehkanabad,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Navoiyazot, Source::MaxamChirchiq, Source::Dehkanabad];

    /// Machine key as it appears in the `source` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Source::Navoiyazot => "navoiyazot",
            Source::MaxamChirchiq => "maxam-chirchiq",
            Source::Dehkanabad => "dehkanabad",
        }
    }

    /// Display name used for filter buttons and card badges.
    pub fn category(&self) -> &'static str {
        match self {
            Source::Navoiyazot => "Navoiyazot",
            Source::MaxamChirchiq => "Maxam-Chirchiq",
            Source::Dehkanabad => "Dehkanabad",
        }
    }

    /// Resolve a query-parameter key. Unknown keys yield `None`; callers
    /// decide the fallback policy explicitly.
    pub fn from_key(key: &str) -> Option<Source> {
        Source::ALL.iter().copied().find(|s| s.key() == key)
    }
}

/// A single catalog record. Immutable and statically defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub source: Source,
    pub description: String,
    pub full_description: String,
    pub specifications: Vec<String>,
    pub applications: Vec<String>,
    pub image: String,
}

impl Product {
    /// Display category, derived from the source so the two always agree.
    pub fn category(&self) -> &'static str {
        self.source.category()
    }
}

/// A production facility shown in the home-page factories grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub capacity: String,
    pub employees: String,
    pub certifications: String,
    pub image: String,
    pub features: Vec<String>,
    /// Occupies the full-height cell in the 2x2 grid layout.
    pub large: bool,
}

/// Shared, read-only product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: products.into() }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The five production records the site ships with.
    pub fn builtin() -> Self {
        let s = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self::new(vec![
            Product {
                id: 1,
                name: "Urea (Granulated), Grade A & B".into(),
                source: Source::Navoiyazot,
                description: "Granulated urea used as a nitrogen fertilizer and as a raw \
                              material for industrial chemical production."
                    .into(),
                full_description: "Granulated urea (carbamide) is produced in Grade A for \
                                   industrial applications and Grade B for agriculture and \
                                   livestock farming. The product provides a high nitrogen \
                                   content and stable physical properties suitable for \
                                   storage, transportation, and application."
                    .into(),
                specifications: s(&[
                    "Nitrogen content: \u{2265} 46%",
                    "Grades available: A (industrial), B (agricultural)",
                    "Form: Granules",
                    "Biuret content: up to 1.4%",
                    "Non-combustible and explosion-proof",
                    "Fully water-soluble",
                ]),
                applications: s(&[
                    "Mineral fertilizers",
                    "Chemical industry",
                    "Resins and adhesives production",
                    "Crop growing",
                    "Livestock feed additive",
                ]),
                image: "/img/12.png".into(),
            },
            Product {
                id: 2,
                name: "Ammonium Nitrate".into(),
                source: Source::Navoiyazot,
                description: "Universal nitrogen fertilizer providing fast and long-lasting \
                              nutrition for crops."
                    .into(),
                full_description: "Ammonium nitrate is a high-concentration nitrogen \
                                   fertilizer suitable for a wide range of crops and soil \
                                   types. It is produced in granular form and can be applied \
                                   as a base fertilizer or during the growing season."
                    .into(),
                specifications: s(&[
                    "Nitrogen content: approx. 34%",
                    "Form: Granular",
                    "Fully water-soluble",
                    "Rapid nitrogen availability",
                    "Suitable for all soil types",
                ]),
                applications: s(&[
                    "Agriculture",
                    "Crop fertilization",
                    "Industrial chemical production",
                    "Complex fertilizer manufacturing",
                ]),
                image: "/img/13.png".into(),
            },
            Product {
                id: 3,
                name: "Urea (Prilled), Grade A & B".into(),
                source: Source::MaxamChirchiq,
                description: "Prilled urea designed for agricultural and industrial \
                              applications."
                    .into(),
                full_description: "Prilled urea is produced in Grade A for industrial use \
                                   and Grade B for agricultural applications. The prilled \
                                   form ensures uniform application and rapid dissolution."
                    .into(),
                specifications: s(&[
                    "Nitrogen content: \u{2265} 46%",
                    "Grades: A (industry), B (agriculture)",
                    "Form: Prills",
                    "High solubility",
                    "Stable during storage",
                ]),
                applications: s(&["Agriculture", "Industrial chemistry", "Fertilizer blending"]),
                image: "/img/14.png".into(),
            },
            Product {
                id: 4,
                name: "Ammonium Nitrate with Calcium & Magnesium".into(),
                source: Source::MaxamChirchiq,
                description: "Nitrogen fertilizer enriched with calcium and magnesium for \
                              improved crop nutrition."
                    .into(),
                full_description: "Ammonium nitrate produced with calcium and magnesium \
                                   additives to enhance granule strength, improve storage \
                                   stability, and provide additional macronutrients."
                    .into(),
                specifications: s(&[
                    "Nitrogen content: approx. 34%",
                    "Calcium and magnesium enriched",
                    "Granular form",
                    "Improved mechanical strength",
                    "Reduced caking",
                ]),
                applications: s(&["Agriculture", "Cereal crops", "Vegetables and legumes"]),
                image: "/img/15.png".into(),
            },
            Product {
                id: 5,
                name: "Potassium Chloride".into(),
                source: Source::Dehkanabad,
                description: "Potassium fertilizer used in agriculture and industrial \
                              applications."
                    .into(),
                full_description: "Potassium chloride is a widely used potash fertilizer \
                                   suitable for crop production and industrial processing. \
                                   It provides a high potassium content and stable physical \
                                   properties."
                    .into(),
                specifications: s(&[
                    "Potassium content (K2O): \u{2265} 60%",
                    "Form: Crystals or granules",
                    "Moisture content: \u{2264} 1%",
                    "Free-flowing material",
                    "Non-combustible",
                ]),
                applications: s(&[
                    "Agriculture",
                    "Crop fertilization",
                    "Chemical industry",
                    "Feed and food additives",
                ]),
                image: "/img/16.png".into(),
            },
        ])
    }
}

/// Factory records for the home-page grid and detail modal.
pub fn factories() -> Vec<Factory> {
    let s = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Factory {
            id: 1,
            name: "JSC \"NavoiAzot\"".into(),
            location: "Navoi Region, Uzbekistan".into(),
            description: "One of the largest chemical enterprises in Central Asia, \
                          specializing in the production of nitrogen-based chemicals and \
                          industrial materials for domestic and international markets."
                .into(),
            capacity: "2.2 million tons/year".into(),
            employees: "9,540".into(),
            certifications: "International quality and safety standards".into(),
            image: "/img/6.jpg".into(),
            features: s(&[
                "Annual production capacity: 2.2 million tons",
                "Workforce: 9,540 employees",
                "Key products: ammonia, ammonium nitrate, PVC, caustic soda, methanol",
                "Sales markets across Central Asia, Europe, and Asia",
            ]),
            large: false,
        },
        Factory {
            id: 2,
            name: "JSC \"Dehkanabad Potash Plant\"".into(),
            location: "Kashkadarya Region, Uzbekistan".into(),
            description: "A key producer of potash products, supplying potassium-based \
                          fertilizers and industrial raw materials to agricultural and \
                          industrial markets."
                .into(),
            capacity: "330 thousand tons/year".into(),
            employees: "1,952".into(),
            certifications: "Quality and safety compliance".into(),
            image: "/img/9.jpg".into(),
            features: s(&[
                "Annual production capacity: 330 thousand tons",
                "Products: potassium chloride, technical salt",
                "Export markets in Central Asia and beyond",
            ]),
            large: false,
        },
        Factory {
            id: 3,
            name: "JSC \"Maxam-Chirchiq\"".into(),
            location: "Tashkent Region, Uzbekistan".into(),
            description: "A major producer of nitrogen-based fertilizers and industrial \
                          chemicals, serving agricultural and industrial sectors with \
                          export-oriented production."
                .into(),
            capacity: "1.5 million tons/year".into(),
            employees: "2,700".into(),
            certifications: "Industry compliance standards".into(),
            image: "/img/7.jpg".into(),
            features: s(&[
                "Nitrogen-based fertilizers",
                "Industrial chemicals",
                "Export-oriented production",
            ]),
            large: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_key_roundtrip() {
        for source in Source::ALL {
            assert_eq!(Source::from_key(source.key()), Some(source));
        }
    }

    #[test]
    fn source_unknown_key() {
        assert_eq!(Source::from_key("chirchiq"), None);
        assert_eq!(Source::from_key(""), None);
        assert_eq!(Source::from_key("Navoiyazot"), None); // keys are lowercase
    }

    #[test]
    fn builtin_catalog_has_five_records() {
        assert_eq!(Catalog::builtin().len(), 5);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn category_always_agrees_with_source() {
        for product in Catalog::builtin().products() {
            assert_eq!(product.category(), product.source.category());
        }
    }

    #[test]
    fn get_looks_up_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get(3).map(|p| p.name.as_str()),
            Some("Urea (Prilled), Grade A & B")
        );
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn one_factory_per_source() {
        assert_eq!(factories().len(), Source::ALL.len());
    }
}
