//! Blocking wrapper around [`ApiClient`].
//!
//! Runs each call to completion on a private current-thread tokio runtime.
//! Must not be used from inside another async runtime.

use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::descriptor::RequestDescriptor;
use crate::error::ApiError;
use crate::invoker::{ApiClient, ApiResponse, Operation};
use crate::pagination::{CollectedPages, PagedOperation, Paginated};

#[derive(Debug)]
pub struct BlockingApiClient {
    inner: ApiClient,
    runtime: Runtime,
}

impl BlockingApiClient {
    pub fn new(inner: ApiClient) -> Result<Self, ApiError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &ApiClient {
        &self.inner
    }

    pub fn execute<O: Operation>(&self, operation: &O) -> Result<ApiResponse<O::Response>, ApiError> {
        self.runtime.block_on(self.inner.execute(operation))
    }

    pub fn fetch<O: Operation>(&self, operation: &O) -> Result<O::Response, ApiError> {
        self.runtime.block_on(self.inner.fetch(operation))
    }

    pub fn invoke<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.runtime.block_on(self.inner.invoke(descriptor))
    }

    pub fn collect_pages<O>(
        &self,
        operation: &O,
        max_pages: usize,
    ) -> Result<CollectedPages<<O::Response as Paginated>::Item>, ApiError>
    where
        O: PagedOperation,
        O::Response: Paginated,
    {
        self.runtime
            .block_on(self.inner.collect_pages(operation, max_pages))
    }
}
