//! Catalog over fixed in-memory tables.

use async_trait::async_trait;

use crate::domain::builtin_catalog::{builtin_abilities, builtin_roles};
use crate::domain::catalog::{index_abilities, AbilityDefinition, AbilityIndex, RoleDefinition};
use crate::errors::domain::DomainError;
use crate::repos::catalog::RoleCatalog;

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    roles: Vec<RoleDefinition>,
    abilities: AbilityIndex,
}

impl StaticCatalog {
    pub fn new(
        roles: Vec<RoleDefinition>,
        abilities: impl IntoIterator<Item = AbilityDefinition>,
    ) -> Self {
        Self {
            roles,
            abilities: index_abilities(abilities),
        }
    }

    /// The default role and ability tables shipped with the server.
    pub fn builtin() -> Self {
        Self::new(builtin_roles(), builtin_abilities())
    }
}

#[async_trait]
impl RoleCatalog for StaticCatalog {
    async fn list_roles(&self) -> Result<Vec<RoleDefinition>, DomainError> {
        Ok(self.roles.clone())
    }

    async fn list_abilities(&self) -> Result<AbilityIndex, DomainError> {
        Ok(self.abilities.clone())
    }
}
