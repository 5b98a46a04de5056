use async_trait::async_trait;

use crate::domain::identity::models::CreateIdentityCommand;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::UpdateIdentityCommand;
use crate::identity::errors::IdentityError;

/// Port for the administrative identity operations.
///
/// These are pass-throughs to the store, not authentication logic.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Create a new identity with validated fields and a hashed secret.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StoreError` - Store operation failed
    async fn create_identity(&self, command: CreateIdentityCommand)
        -> Result<Identity, IdentityError>;

    /// Retrieve an identity by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `StoreError` - Store operation failed
    async fn get_identity(&self, id: &IdentityId) -> Result<Identity, IdentityError>;

    /// Retrieve all identities.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn list_identities(&self) -> Result<Vec<Identity>, IdentityError>;

    /// Update an existing identity with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `StoreError` - Store operation failed
    async fn update_identity(
        &self,
        id: &IdentityId,
        command: UpdateIdentityCommand,
    ) -> Result<Identity, IdentityError>;

    /// Delete an existing identity.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `StoreError` - Store operation failed
    async fn delete_identity(&self, id: &IdentityId) -> Result<(), IdentityError>;
}

/// Persistence operations for the identity aggregate.
///
/// The capability set the auth core needs from a user store, independent
/// of backing storage. Username and email lookups take raw strings: the
/// auth core probes with untrusted identifier strings and token subjects
/// that may not survive value-type validation.
///
/// Implementations must support concurrent reads and serialize their own
/// writes; each operation is individually atomic. The core never
/// coordinates multi-step transactions across calls.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// No two stored identities may share a username or an email;
    /// enforcing this is the store's responsibility.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StoreError` - Store operation failed
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Retrieve an identity by identifier (None if not found).
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve an identity by username (None if not found).
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve an identity by email address (None if not found).
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve all identities, newest first.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError>;

    /// Update an existing identity.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `StoreError` - Store operation failed
    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Remove an identity. Returns whether anything was removed.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn delete(&self, id: &IdentityId) -> Result<bool, IdentityError>;
}
