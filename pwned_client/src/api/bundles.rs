use crate::client::{PwnedClient, json_body};
use crate::error::Result;
use crate::models::{Bundle, BundleInput};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;

impl<T: Transport> PwnedClient<T> {
    pub async fn create_bundle(&mut self, bundle: &BundleInput) -> Result<Bundle> {
        let descriptor = json_body(RequestDescriptor::post("bundles"), bundle)?;
        self.call(descriptor).await
    }

    /// Fetch a bundle with the competitions attached to it
    pub async fn get_bundle(&mut self, bundle_id: u64) -> Result<Bundle> {
        self.call(RequestDescriptor::get(format!("bundles/{bundle_id}")))
            .await
    }

    pub async fn update_bundle(&mut self, bundle_id: u64, bundle: &BundleInput) -> Result<Bundle> {
        let descriptor = json_body(RequestDescriptor::post(format!("bundles/{bundle_id}")), bundle)?;
        self.call(descriptor).await
    }
}
