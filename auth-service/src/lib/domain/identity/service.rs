use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use credentials::PasswordHasher;

use crate::domain::identity::models::CreateIdentityCommand;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::UpdateIdentityCommand;
use crate::identity::errors::IdentityError;
use crate::identity::ports::IdentityRepository;
use crate::identity::ports::IdentityServicePort;

/// Domain service for the administrative identity operations.
///
/// Owns no state of its own; the store owns the identity records and this
/// service only mutates them through the store's contract.
pub struct IdentityService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
}

impl<R> IdentityService<R>
where
    R: IdentityRepository,
{
    /// Create a new identity service with injected dependencies.
    pub fn new(repository: Arc<R>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IdentityServicePort for IdentityService<R>
where
    R: IdentityRepository,
{
    async fn create_identity(
        &self,
        command: CreateIdentityCommand,
    ) -> Result<Identity, IdentityError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let identity = Identity {
            id: IdentityId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            active: true,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(identity).await
    }

    async fn get_identity(&self, id: &IdentityId) -> Result<Identity, IdentityError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound(id.to_string()))
    }

    async fn list_identities(&self) -> Result<Vec<Identity>, IdentityError> {
        self.repository.list_all().await
    }

    async fn update_identity(
        &self,
        id: &IdentityId,
        command: UpdateIdentityCommand,
    ) -> Result<Identity, IdentityError> {
        let mut identity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound(id.to_string()))?;

        if let Some(new_username) = command.username {
            identity.username = new_username;
        }

        if let Some(new_email) = command.email {
            identity.email = new_email;
        }

        if let Some(new_password) = command.password {
            identity.password_hash = self.password_hasher.hash(&new_password)?;
        }

        if let Some(active) = command.active {
            identity.active = active;
        }

        identity.updated_at = Utc::now();

        self.repository.update(identity).await
    }

    async fn delete_identity(&self, id: &IdentityId) -> Result<(), IdentityError> {
        let removed = self.repository.delete(id).await?;
        if !removed {
            return Err(IdentityError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
