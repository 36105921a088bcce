use uuid::Uuid;

use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::validation::ValidationError;
use crate::domain::categories::category::{Category, CategoryError, same_name};

#[derive(thiserror::Error, Debug)]
pub enum CreateCategoryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Category(#[from] CategoryError),
}

pub struct CreateCategory<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> CreateCategory<'a, R> {
    pub async fn execute(&self, user_id: Uuid, name: &str) -> Result<Category, CreateCategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("name").into());
        }
        // The store enforces this too; checking first gives a clean error on both backends.
        let existing = self
            .repo
            .list_for_user(user_id)
            .await
            .map_err(CategoryError::Storage)?;
        if existing.iter().any(|c| same_name(&c.name, name)) {
            return Err(CategoryError::Duplicate.into());
        }
        Ok(self.repo.create_for_user(user_id, name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::local::testing::memory_backend;

    #[tokio::test]
    async fn rejects_case_insensitive_duplicates() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let uc = CreateCategory {
            repo: b.categories.as_ref(),
        };
        let c = uc.execute(user, " Bridge ").await.unwrap();
        assert_eq!(c.name, "Bridge");
        assert!(matches!(
            uc.execute(user, "bridge").await,
            Err(CreateCategoryError::Category(CategoryError::Duplicate))
        ));
        // seeded default
        assert!(matches!(
            uc.execute(user, "TESTNET").await,
            Err(CreateCategoryError::Category(CategoryError::Duplicate))
        ));
        assert!(matches!(
            uc.execute(user, "  ").await,
            Err(CreateCategoryError::Invalid(_))
        ));
    }
}
