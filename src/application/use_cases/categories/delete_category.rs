use uuid::Uuid;

use crate::application::ports::category_repository::CategoryRepository;

pub struct DeleteCategory<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> DeleteCategory<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.repo.delete_owned(id, user_id).await
    }
}
