use super::LookupAddressesUseCase;
use ferrous_resolv_domain::ResolveError;
use std::sync::Arc;

/// Host addresses as text, in the dual-stack lookup's order.
pub struct LookupHostUseCase {
    addresses: Arc<LookupAddressesUseCase>,
}

impl LookupHostUseCase {
    pub fn new(addresses: Arc<LookupAddressesUseCase>) -> Self {
        Self { addresses }
    }

    pub async fn execute(&self, host: &str) -> Result<Vec<String>, ResolveError> {
        let addresses = self.addresses.execute(host).await?;
        Ok(addresses.iter().map(|ip| ip.to_string()).collect())
    }
}
