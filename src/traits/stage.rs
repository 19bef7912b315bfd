use async_trait::async_trait;

use crate::model::{StageRequest, StageResponse};

#[async_trait]
pub trait Stage: Send + Sync {
    async fn process(&self, req: StageRequest) -> StageResponse;

    fn name(&self) -> &'static str;
}
