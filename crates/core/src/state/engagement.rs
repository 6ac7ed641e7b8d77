use tracing::debug;

use crate::errors::CoreError;
use crate::models::comment::{Comment, CommentThreads, Counters};
use crate::storage::keys::StorageKeys;
use crate::storage::manager::StorageManager;
use crate::storage::traits::KeyValueStore;

/// Comments, likes and dislikes for one domain, mirrored to three storage keys.
///
/// Shared by the portfolio and board containers. Every mutation re-serializes
/// the whole affected map, and is undone in memory if that write fails.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementBook {
    keys: StorageKeys,
    comments: CommentThreads,
    likes: Counters,
    dislikes: Counters,
}

impl EngagementBook {
    /// Load the three maps, seeding and persisting any that are absent.
    pub fn open<S: KeyValueStore>(
        storage: &StorageManager<S>,
        keys: StorageKeys,
        seed_comments: impl FnOnce() -> CommentThreads,
        seed_likes: impl FnOnce() -> Counters,
        seed_dislikes: impl FnOnce() -> Counters,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            keys,
            comments: storage.load_or_seed(keys.comments, seed_comments)?,
            likes: storage.load_or_seed(keys.likes, seed_likes)?,
            dislikes: storage.load_or_seed(keys.dislikes, seed_dislikes)?,
        })
    }

    /// Comments on `parent_id`, oldest first. Empty for unknown ids.
    #[must_use]
    pub fn comments_for(&self, parent_id: &str) -> &[Comment] {
        self.comments.get(parent_id).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn likes_for(&self, id: &str) -> u64 {
        self.likes.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn dislikes_for(&self, id: &str) -> u64 {
        self.dislikes.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn comments(&self) -> &CommentThreads {
        &self.comments
    }

    #[must_use]
    pub fn likes(&self) -> &Counters {
        &self.likes
    }

    #[must_use]
    pub fn dislikes(&self) -> &Counters {
        &self.dislikes
    }

    /// Ids of every stored comment, across all threads.
    pub fn comment_ids(&self) -> impl Iterator<Item = &str> {
        self.comments
            .values()
            .flatten()
            .map(|comment| comment.id.as_str())
    }

    /// Append `comment` to the end of `parent_id`'s thread and persist.
    pub fn push_comment<S: KeyValueStore>(
        &mut self,
        storage: &StorageManager<S>,
        parent_id: &str,
        comment: Comment,
    ) -> Result<(), CoreError> {
        let had_thread = self.comments.contains_key(parent_id);
        let thread = self.comments.entry(parent_id.to_string()).or_default();
        thread.push(comment);
        let thread_len = thread.len();

        if let Err(err) = storage.save(self.keys.comments, &self.comments) {
            if let Some(thread) = self.comments.get_mut(parent_id) {
                thread.pop();
                if !had_thread {
                    self.comments.remove(parent_id);
                }
            }
            return Err(err);
        }
        debug!(parent_id, thread_len, "comment added");
        Ok(())
    }

    /// Read the current like count, store count + 1, persist. Returns the new count.
    ///
    /// Read-then-write on this container's copy: two containers sharing one
    /// store can overwrite each other's increments (last write wins).
    pub fn increment_like<S: KeyValueStore>(
        &mut self,
        storage: &StorageManager<S>,
        id: &str,
    ) -> Result<u64, CoreError> {
        let count = bump(storage, self.keys.likes, &mut self.likes, id)?;
        debug!(id, likes = count, "like recorded");
        Ok(count)
    }

    /// Dislike counterpart of [`EngagementBook::increment_like`].
    pub fn increment_dislike<S: KeyValueStore>(
        &mut self,
        storage: &StorageManager<S>,
        id: &str,
    ) -> Result<u64, CoreError> {
        let count = bump(storage, self.keys.dislikes, &mut self.dislikes, id)?;
        debug!(id, dislikes = count, "dislike recorded");
        Ok(count)
    }
}

/// Increment one counter and persist the map, restoring the previous entry
/// when the write fails.
fn bump<S: KeyValueStore>(
    storage: &StorageManager<S>,
    key: &str,
    counters: &mut Counters,
    id: &str,
) -> Result<u64, CoreError> {
    let previous = counters.get(id).copied();
    let count = previous.unwrap_or(0).saturating_add(1);
    counters.insert(id.to_string(), count);

    if let Err(err) = storage.save(key, &*counters) {
        match previous {
            Some(old) => counters.insert(id.to_string(), old),
            None => counters.remove(id),
        };
        return Err(err);
    }
    Ok(count)
}
