use std::future::Future;
use std::sync::Arc;

use ordinal_frame_core::inscription::Inscription;
use ordinal_frame_inscriptions::api::{InscriptionApi, InscriptionApiError};

/// Anything that can list the inscriptions owned by an address.
///
/// Implemented by [`InscriptionApi`]; tests substitute in-memory sources.
pub trait InscriptionSource: Send + Sync {
    /// Every inscription for `address`, unfiltered.
    fn fetch_address_inscriptions(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Vec<Inscription>, InscriptionApiError>> + Send;
}

impl InscriptionSource for InscriptionApi {
    async fn fetch_address_inscriptions(
        &self,
        address: &str,
    ) -> Result<Vec<Inscription>, InscriptionApiError> {
        InscriptionApi::fetch_address_inscriptions(self, address).await
    }
}

impl<S: InscriptionSource> InscriptionSource for Arc<S> {
    fn fetch_address_inscriptions(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Vec<Inscription>, InscriptionApiError>> + Send {
        S::fetch_address_inscriptions(self, address)
    }
}
