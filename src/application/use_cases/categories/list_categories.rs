use uuid::Uuid;

use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::categories::category::Category;

pub struct ListCategories<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> ListCategories<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Vec<Category>> {
        self.repo.list_for_user(user_id).await
    }
}
