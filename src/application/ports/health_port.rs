use async_trait::async_trait;

#[async_trait]
pub trait StorageHealthPort: Send + Sync {
    async fn ping(&self) -> anyhow::Result<()>;
}
