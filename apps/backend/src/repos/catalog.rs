use async_trait::async_trait;

use crate::domain::catalog::{AbilityIndex, RoleDefinition};
use crate::errors::domain::DomainError;

/// Read-only view over the admin-configured roles and abilities.
#[async_trait]
pub trait RoleCatalog: Send + Sync {
    async fn list_roles(&self) -> Result<Vec<RoleDefinition>, DomainError>;

    async fn list_abilities(&self) -> Result<AbilityIndex, DomainError>;
}
