//! Materials query engine: filter, supplier join, sort, paginate.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::instrument;

use crate::errors::ServiceError;
use crate::models::{Category, MaterialWithSupplier, Supplier};
use crate::store::{CatalogStore, MaterialFilter};

const DEFAULT_LIMIT: usize = 50;
const CATEGORY_ALL: &str = "all";

/// Sort key for the materials listing. A closed set: unrecognized values are
/// rejected at deserialization rather than silently defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Price,
    /// Sorts by the joined supplier's name, not its id.
    Supplier,
}

/// Listing filter. `Verified` is the only variant that inspects joined
/// supplier data; the rest apply to material fields alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBy {
    #[default]
    All,
    Verified,
    Instock,
    Group,
}

/// Query parameters for the materials listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub filter_by: FilterBy,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for MaterialsQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: default_category(),
            sort_by: SortBy::default(),
            filter_by: FilterBy::default(),
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_category() -> String {
    CATEGORY_ALL.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Read-only catalog service over suppliers, categories, and materials.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, ServiceError> {
        Ok(self.store.list_suppliers().await?)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.store.list_categories().await?)
    }

    /// Runs the full listing pipeline: material-field filters at the store,
    /// inner join with suppliers, post-join verified filter, stable
    /// ascending sort, then offset/limit.
    ///
    /// Materials referencing a supplier that does not exist are dropped
    /// (inner join semantics). An empty page is valid output.
    #[instrument(skip(self))]
    pub async fn query_materials(
        &self,
        query: &MaterialsQuery,
    ) -> Result<Vec<MaterialWithSupplier>, ServiceError> {
        let filter = MaterialFilter {
            category: Some(query.category.clone()).filter(|c| c != CATEGORY_ALL),
            in_stock: query.filter_by == FilterBy::Instock,
            group_deal: query.filter_by == FilterBy::Group,
            search: query.search.clone().filter(|s| !s.is_empty()),
        };

        let materials = self.store.list_materials(&filter).await?;

        let suppliers: HashMap<i64, Supplier> = self
            .store
            .list_suppliers()
            .await?
            .into_iter()
            .map(|supplier| (supplier.id, supplier))
            .collect();

        let mut joined: Vec<MaterialWithSupplier> = materials
            .into_iter()
            .filter_map(|material| {
                suppliers
                    .get(&material.supplier_id)
                    .cloned()
                    .map(|supplier| MaterialWithSupplier::join(material, supplier))
            })
            .collect();

        // Verified inspects joined supplier data, so it runs after the join.
        if query.filter_by == FilterBy::Verified {
            joined.retain(|material| material.supplier.verified);
        }

        // Stable sort: ties keep store input order.
        match query.sort_by {
            SortBy::Name => joined.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::Price => joined.sort_by(|a, b| a.price.cmp(&b.price)),
            SortBy::Supplier => joined.sort_by(|a, b| a.supplier.name.cmp(&b.supplier.name)),
        }

        Ok(joined
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_and_filter_params_parse_from_query_strings() {
        let query: MaterialsQuery =
            serde_urlencoded::from_str("sort_by=price&filter_by=verified&limit=5&offset=2")
                .expect("valid query");
        assert_eq!(query.sort_by, SortBy::Price);
        assert_eq!(query.filter_by, FilterBy::Verified);
        assert_eq!(query.limit, 5);
        assert_eq!(query.offset, 2);
        assert_eq!(query.category, "all");
    }

    #[test]
    fn unknown_sort_value_is_rejected() {
        let result: Result<MaterialsQuery, _> = serde_urlencoded::from_str("sort_by=rating");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_filter_value_is_rejected() {
        let result: Result<MaterialsQuery, _> = serde_urlencoded::from_str("filter_by=cheap");
        assert!(result.is_err());
    }

    #[test]
    fn defaults_match_contract() {
        let query = MaterialsQuery::default();
        assert_eq!(query.sort_by, SortBy::Name);
        assert_eq!(query.filter_by, FilterBy::All);
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
    }
}
