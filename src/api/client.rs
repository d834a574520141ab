use super::models::*;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Raw `rec_load_all` response for the configured zone. Its shape is
    /// provider-defined and interpreted by [`crate::filter::managed_records`].
    async fn load_all_records(&self) -> Result<Value>;

    /// Issue one `rec_edit`. A rejected change is still `Ok`; callers must
    /// check [`EditResponse::is_success`].
    async fn edit_record(&self, edit: &RecordEdit) -> Result<EditResponse>;
}
