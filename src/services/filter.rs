//! Catalog filtering and URL-synchronized selection.
//!
//! The products page derives its visible subset from two selectors: a
//! category (facility display name, or "All") and an optional source key
//! taken from the `source` query parameter. An `id` query parameter
//! pre-opens the detail modal. All of the logic here is plain data; the
//! page component owns the signals.

use crate::catalog::{Catalog, Product, Source};

/// Category selector as shown in the filter button row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Facility(Source),
}

impl CategoryFilter {
    /// Button row order: "All" followed by the facilities.
    pub fn all() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Source::ALL.iter().map(|s| CategoryFilter::Facility(*s)));
        filters
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Facility(source) => source.category(),
        }
    }
}

/// Combined filter selection.
///
/// Invariant: when `source` is set, `category` is the facility mapped from
/// it. `from_source_param` and `select_category` are the only constructors,
/// and both maintain it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub source: Option<Source>,
}

impl FilterState {
    /// Derive the selection from the `source` query parameter.
    ///
    /// A recognized key scopes both selectors to that facility. An
    /// unrecognized key is dropped entirely and the full catalog is shown;
    /// keeping a filter no product can match would render an empty grid for
    /// a merely stale link.
    pub fn from_source_param(param: Option<&str>) -> Self {
        match param {
            None => FilterState::default(),
            Some(key) => match Source::from_key(key) {
                Some(source) => FilterState {
                    category: CategoryFilter::Facility(source),
                    source: Some(source),
                },
                None => {
                    log::warn!("ignoring unknown source key in URL: {key:?}");
                    FilterState::default()
                }
            },
        }
    }

    /// Manual category click: sets the category and always clears the
    /// source, so the two selectors cannot conflict afterwards.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.source = None;
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_match = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Facility(source) => product.source == source,
        };
        let source_match = match self.source {
            None => true,
            Some(source) => product.source == source,
        };
        category_match && source_match
    }
}

/// Visible subset of the catalog, in original order.
pub fn visible_products(catalog: &Catalog, state: &FilterState) -> Vec<Product> {
    catalog
        .products()
        .iter()
        .filter(|p| state.matches(p))
        .cloned()
        .collect()
}

/// Resolve the `id` query parameter to a product. Unparseable or unknown
/// ids are a no-op (no modal, no error).
pub fn product_from_id_param(catalog: &Catalog, param: Option<&str>) -> Option<Product> {
    let id: u32 = param?.parse().ok()?;
    catalog.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_full_catalog_in_order() {
        let catalog = Catalog::builtin();
        let visible = visible_products(&catalog, &FilterState::default());
        assert_eq!(visible.len(), catalog.len());
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_filter_selects_exact_subset() {
        let catalog = Catalog::builtin();
        let mut state = FilterState::default();
        state.select_category(CategoryFilter::Facility(Source::Navoiyazot));

        let visible = visible_products(&catalog, &state);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category() == "Navoiyazot"));
    }

    #[test]
    fn category_filter_is_idempotent() {
        let catalog = Catalog::builtin();
        let mut state = FilterState::default();
        state.select_category(CategoryFilter::Facility(Source::MaxamChirchiq));

        let once = visible_products(&catalog, &state);
        let again: Vec<Product> =
            once.iter().filter(|p| state.matches(p)).cloned().collect();
        assert_eq!(once, again);
    }

    #[test]
    fn source_param_scopes_both_selectors() {
        let state = FilterState::from_source_param(Some("dehkanabad"));
        assert_eq!(state.category, CategoryFilter::Facility(Source::Dehkanabad));
        assert_eq!(state.source, Some(Source::Dehkanabad));

        let visible = visible_products(&Catalog::builtin(), &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].source, Source::Dehkanabad);
    }

    #[test]
    fn missing_source_param_resets_to_all() {
        assert_eq!(FilterState::from_source_param(None), FilterState::default());
    }

    #[test]
    fn unknown_source_key_is_dropped() {
        let state = FilterState::from_source_param(Some("atyrau"));
        assert_eq!(state, FilterState::default());
        // and therefore the full catalog stays visible
        let catalog = Catalog::builtin();
        assert_eq!(visible_products(&catalog, &state).len(), catalog.len());
    }

    #[test]
    fn category_click_clears_source() {
        let mut state = FilterState::from_source_param(Some("navoiyazot"));
        assert!(state.source.is_some());
        state.select_category(CategoryFilter::All);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn id_param_resolves_product() {
        let catalog = Catalog::builtin();
        let product = product_from_id_param(&catalog, Some("3")).expect("id 3 exists");
        assert_eq!(product.name, "Urea (Prilled), Grade A & B");
    }

    #[test]
    fn bad_id_params_are_a_no_op() {
        let catalog = Catalog::builtin();
        assert!(product_from_id_param(&catalog, Some("999")).is_none());
        assert!(product_from_id_param(&catalog, Some("three")).is_none());
        assert!(product_from_id_param(&catalog, Some("-1")).is_none());
        assert!(product_from_id_param(&catalog, None).is_none());
    }
}
