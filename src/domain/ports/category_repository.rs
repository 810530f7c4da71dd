//! CategoryRepository port

use crate::domain::entities::Category;
use crate::domain::value_objects::{CategoryId, NormalizedName};

use super::store::{NameClaim, Removal, Rename, StoreResult};

pub trait CategoryRepository: Send + Sync {
    fn categories(&self) -> StoreResult<Vec<Category>>;
    fn category(&self, id: &CategoryId) -> StoreResult<Option<Category>>;
    fn category_by_name(&self, name: &NormalizedName) -> StoreResult<Option<Category>>;
    fn claim_category(&self, category: Category) -> StoreResult<NameClaim<Category>>;
    fn rename_category(&self, id: &CategoryId, name: String) -> StoreResult<Rename<Category>>;
    fn remove_unreferenced_category(&self, id: &CategoryId) -> StoreResult<Removal<Category>>;
}
