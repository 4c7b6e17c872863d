use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use slink_core::repository::{LinkRepository, Result};
use slink_core::{LinkId, ShortCode, ShortLink, StorageError};

/// In-memory implementation of [`LinkRepository`] using DashMap.
///
/// Links are keyed by id, with two secondary indexes (code and long URL)
/// that act as unique constraints. Index slots are claimed through the
/// entry API, so concurrent inserts of the same code or URL cannot both
/// succeed. Locks are always taken in the order codes, urls, links.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<LinkId, ShortLink>,
    codes: DashMap<String, LinkId>,
    urls: DashMap<String, LinkId>,
}

impl InMemoryLinkRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn link(&self, id: Option<LinkId>) -> Option<ShortLink> {
        id.and_then(|id| self.links.get(&id).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: ShortLink) -> Result<()> {
        let Entry::Vacant(code_slot) = self.codes.entry(link.code.as_str().to_owned()) else {
            return Err(StorageError::DuplicateCode(link.code.to_string()));
        };
        let Entry::Vacant(url_slot) = self.urls.entry(link.long_url.clone()) else {
            return Err(StorageError::DuplicateUrl(link.long_url));
        };

        url_slot.insert(link.id.clone());
        code_slot.insert(link.id.clone());
        self.links.insert(link.id.clone(), link);
        Ok(())
    }

    async fn find_by_code(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        let id = self
            .codes
            .get(code.as_str())
            .map(|entry| entry.value().clone());
        Ok(self.link(id))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>> {
        let id = self.urls.get(long_url).map(|entry| entry.value().clone());
        Ok(self.link(id))
    }

    async fn update_long_url(&self, id: &LinkId, long_url: &str) -> Result<bool> {
        let Some(current) = self.links.get(id).map(|entry| entry.long_url.clone()) else {
            return Ok(false);
        };
        if current == long_url {
            return Ok(true);
        }

        let previous = match self.urls.entry(long_url.to_owned()) {
            Entry::Occupied(_) => return Err(StorageError::DuplicateUrl(long_url.to_owned())),
            Entry::Vacant(slot) => {
                // Deleted concurrently; the unclaimed slot is dropped with it.
                let Some(mut link) = self.links.get_mut(id) else {
                    return Ok(false);
                };
                slot.insert(id.clone());
                std::mem::replace(&mut link.long_url, long_url.to_owned())
            }
        };

        self.urls.remove_if(&previous, |_, owner| owner == id);
        Ok(true)
    }

    async fn delete(&self, id: &LinkId) -> Result<bool> {
        let Some((_, link)) = self.links.remove(id) else {
            return Ok(false);
        };

        self.codes
            .remove_if(link.code.as_str(), |_, owner| owner == id);
        self.urls.remove_if(&link.long_url, |_, owner| owner == id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn link(code: &str, url: &str) -> ShortLink {
        ShortLink::new(ShortCode::new_unchecked(code), url)
    }

    #[tokio::test]
    async fn insert_and_find() {
        let repo = InMemoryLinkRepository::new();
        let created = link("abcd", "https://example.com");

        repo.insert(created.clone()).await.unwrap();

        let by_code = repo
            .find_by_code(&ShortCode::new_unchecked("abcd"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_code, created);

        let by_url = repo
            .find_by_long_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_url.id, created.id);
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let repo = InMemoryLinkRepository::new();

        assert!(repo
            .find_by_code(&ShortCode::new_unchecked("nope"))
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_long_url("https://nope.example")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_code_is_rejected() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(link("abcd", "https://one.example"))
            .await
            .unwrap();

        let err = repo
            .insert(link("abcd", "https://two.example"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::DuplicateCode(_)));

        // The losing insert must not leave its url claimed.
        assert!(repo
            .find_by_long_url("https://two.example")
            .await
            .unwrap()
            .is_none());
        repo.insert(link("efgh", "https://two.example"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn duplicate_url_is_rejected() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(link("abcd", "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(link("efgh", "https://example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::DuplicateUrl(_)));

        // The losing insert must not leave its code claimed.
        repo.insert(link("efgh", "https://other.example"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_moves_url_index() {
        let repo = InMemoryLinkRepository::new();
        let created = link("abcd", "https://old.example");
        repo.insert(created.clone()).await.unwrap();

        assert!(repo
            .update_long_url(&created.id, "https://new.example")
            .await
            .unwrap());

        let found = repo
            .find_by_code(&created.code)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.long_url, "https://new.example");
        assert!(repo
            .find_by_long_url("https://old.example")
            .await
            .unwrap()
            .is_none());

        // The old url is free again.
        repo.insert(link("efgh", "https://old.example"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_to_same_url_is_ok() {
        let repo = InMemoryLinkRepository::new();
        let created = link("abcd", "https://example.com");
        repo.insert(created.clone()).await.unwrap();

        assert!(repo
            .update_long_url(&created.id, "https://example.com")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn update_to_taken_url_conflicts() {
        let repo = InMemoryLinkRepository::new();
        let first = link("abcd", "https://one.example");
        repo.insert(first.clone()).await.unwrap();
        repo.insert(link("efgh", "https://two.example"))
            .await
            .unwrap();

        let err = repo
            .update_long_url(&first.id, "https://two.example")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::DuplicateUrl(_)));
    }

    #[tokio::test]
    async fn update_unknown_id() {
        let repo = InMemoryLinkRepository::new();

        assert!(!repo
            .update_long_url(&LinkId::from("missing"), "https://example.com")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn delete_releases_indexes() {
        let repo = InMemoryLinkRepository::new();
        let created = link("abcd", "https://example.com");
        repo.insert(created.clone()).await.unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(repo.find_by_code(&created.code).await.unwrap().is_none());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert!(repo.is_empty());

        repo.insert(link("abcd", "https://example.com"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn concurrent_inserts_of_same_url_have_one_winner() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        let mut handles = vec![];

        for i in 0..16u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(link(&format!("code-{i:03}"), "https://same.example"))
                    .await
            }));
        }

        let mut wins = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => wins += 1,
                Err(err) => assert!(matches!(err, StorageError::DuplicateUrl(_))),
            }
        }

        assert_eq!(wins, 1);
        assert_eq!(repo.len(), 1);
    }
}
