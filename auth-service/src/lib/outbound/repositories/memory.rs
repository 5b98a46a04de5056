use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::ports::IdentityRepository;
use crate::identity::errors::IdentityError;

/// In-memory implementation of the identity store.
///
/// Reads run concurrently behind the read lock; writes serialize behind
/// the write lock, which makes each operation individually atomic. The
/// lock is never held across an await point. A durable implementation
/// can replace this one without touching the auth core.
pub struct InMemoryIdentityRepository {
    identities: RwLock<HashMap<IdentityId, Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.write().await;

        for existing in identities.values() {
            if existing.username == identity.username {
                return Err(IdentityError::UsernameAlreadyExists(
                    identity.username.as_str().to_string(),
                ));
            }
            if existing.email == identity.email {
                return Err(IdentityError::EmailAlreadyExists(
                    identity.email.as_str().to_string(),
                ));
            }
        }

        identities.insert(identity.id, identity.clone());
        Ok(identity)
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError> {
        let identities = self.identities.read().await;
        Ok(identities.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, IdentityError> {
        let identities = self.identities.read().await;
        Ok(identities
            .values()
            .find(|identity| identity.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        let identities = self.identities.read().await;
        Ok(identities
            .values()
            .find(|identity| identity.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError> {
        let identities = self.identities.read().await;
        let mut all: Vec<Identity> = identities.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.write().await;

        if !identities.contains_key(&identity.id) {
            return Err(IdentityError::NotFound(identity.id.to_string()));
        }

        for existing in identities.values() {
            if existing.id == identity.id {
                continue;
            }
            if existing.username == identity.username {
                return Err(IdentityError::UsernameAlreadyExists(
                    identity.username.as_str().to_string(),
                ));
            }
            if existing.email == identity.email {
                return Err(IdentityError::EmailAlreadyExists(
                    identity.email.as_str().to_string(),
                ));
            }
        }

        identities.insert(identity.id, identity.clone());
        Ok(identity)
    }

    async fn delete(&self, id: &IdentityId) -> Result<bool, IdentityError> {
        let mut identities = self.identities.write().await;
        Ok(identities.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::identity::models::EmailAddress;
    use crate::domain::identity::models::Username;

    fn identity(username: &str, email: &str) -> Identity {
        let now = Utc::now();
        Identity {
            id: IdentityId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryIdentityRepository::new();
        let created = repository
            .create(identity("testuser", "test@example.com"))
            .await
            .unwrap();

        let by_id = repository.find_by_id(&created.id).await.unwrap();
        assert!(by_id.is_some());

        let by_username = repository.find_by_username("testuser").await.unwrap();
        assert_eq!(by_username.unwrap().id, created.id);

        let by_email = repository.find_by_email("test@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);

        assert!(repository.find_by_username("other").await.unwrap().is_none());
        assert!(repository
            .find_by_email("other@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let repository = InMemoryIdentityRepository::new();
        repository
            .create(identity("testuser", "first@example.com"))
            .await
            .unwrap();

        let result = repository
            .create(identity("testuser", "second@example.com"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            IdentityError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repository = InMemoryIdentityRepository::new();
        repository
            .create(identity("first", "test@example.com"))
            .await
            .unwrap();

        let result = repository.create(identity("second", "test@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            IdentityError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repository = InMemoryIdentityRepository::new();

        let result = repository.update(identity("ghost", "ghost@example.com")).await;
        assert!(matches!(result.unwrap_err(), IdentityError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_taken_username() {
        let repository = InMemoryIdentityRepository::new();
        repository
            .create(identity("alice", "alice@example.com"))
            .await
            .unwrap();
        let mut bob = repository
            .create(identity("bob", "bob@example.com"))
            .await
            .unwrap();

        bob.username = Username::new("alice".to_string()).unwrap();
        let result = repository.update(bob).await;
        assert!(matches!(
            result.unwrap_err(),
            IdentityError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_keeping_own_fields_is_not_a_conflict() {
        let repository = InMemoryIdentityRepository::new();
        let mut alice = repository
            .create(identity("alice", "alice@example.com"))
            .await
            .unwrap();

        alice.active = false;
        let updated = repository.update(alice).await.unwrap();
        assert!(!updated.active);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let repository = InMemoryIdentityRepository::new();
        let created = repository
            .create(identity("testuser", "test@example.com"))
            .await
            .unwrap();

        assert!(repository.delete(&created.id).await.unwrap());
        assert!(!repository.delete(&created.id).await.unwrap());
        assert!(repository.find_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repository = InMemoryIdentityRepository::new();

        let mut first = identity("first", "first@example.com");
        first.created_at = Utc::now() - chrono::Duration::minutes(1);
        repository.create(first).await.unwrap();
        repository
            .create(identity("second", "second@example.com"))
            .await
            .unwrap();

        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username.as_str(), "second");
        assert_eq!(all[1].username.as_str(), "first");
    }
}
