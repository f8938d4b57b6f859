use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::post::{Comment, NewComment, NewPost, Post, PostPatch, DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::error::DomainError;

/// The full ordered set of posts, persisted as one unit.
///
/// Stored order is append-only insertion order; sorting only ever affects
/// returned views, never this vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    pub posts: Vec<Post>,
}

impl Collection {
    /// Next post id: `1 + max(existing ids, default 0)`.
    ///
    /// Survives deletions without reusing ids and needs no separately
    /// persisted counter.
    pub fn next_id(&self) -> u64 {
        1 + self.posts.iter().map(|p| p.id).max().unwrap_or(0)
    }

    /// Validates and appends a new post, returning the stored record.
    pub fn insert(&mut self, new: NewPost) -> Result<Post, DomainError> {
        let mut fields = Vec::new();
        let title = required(new.title.as_deref(), "title", &mut fields);
        let content = required(new.content.as_deref(), "content", &mut fields);
        let author = required(new.author.as_deref(), "author", &mut fields);
        let date = match new.date.as_deref() {
            Some(raw) => match parse_date(raw) {
                Ok(date) => Some(date),
                Err(_) => {
                    fields.push("date".to_string());
                    None
                }
            },
            None => Some(Utc::now().date_naive()),
        };

        let (Some(title), Some(content), Some(author), Some(date)) =
            (title, content, author, date)
        else {
            return Err(DomainError::Validation { fields });
        };

        let post = Post {
            id: self.next_id(),
            title,
            content,
            author,
            date,
            likes: 0,
            comments: Vec::new(),
        };
        self.posts.push(post.clone());
        Ok(post)
    }

    /// Linear lookup by id.
    pub fn find(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Partial update. The date is validated before any field is applied so
    /// a malformed date leaves the post entirely unchanged.
    pub fn update(&mut self, id: u64, patch: PostPatch) -> Result<Post, DomainError> {
        let idx = self.position(id)?;
        let date = patch.date.as_deref().map(parse_date).transpose()?;

        let post = &mut self.posts[idx];
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }
        if let Some(date) = date {
            post.date = date;
        }
        Ok(post.clone())
    }

    /// Removes a post, preserving the relative order of the survivors.
    pub fn remove(&mut self, id: u64) -> Result<(), DomainError> {
        let idx = self.position(id)?;
        self.posts.remove(idx);
        Ok(())
    }

    /// Increments and returns the post's like counter.
    pub fn like(&mut self, id: u64) -> Result<u64, DomainError> {
        let idx = self.position(id)?;
        let post = &mut self.posts[idx];
        post.likes += 1;
        Ok(post.likes)
    }

    /// Appends a comment with a sequence-local id and a server timestamp.
    pub fn add_comment(&mut self, id: u64, new: NewComment) -> Result<Comment, DomainError> {
        let idx = self.position(id)?;

        let mut fields = Vec::new();
        let text = required(new.text.as_deref(), "text", &mut fields);
        let author = required(new.author.as_deref(), "author", &mut fields);
        let (Some(text), Some(author)) = (text, author) else {
            return Err(DomainError::Validation { fields });
        };

        let post = &mut self.posts[idx];
        let comment = Comment {
            id: post.comments.len() as u64 + 1,
            text,
            author,
            date: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        };
        post.comments.push(comment.clone());
        Ok(comment)
    }

    /// The post's comments in insertion order.
    pub fn comments(&self, id: u64) -> Result<&[Comment], DomainError> {
        self.find(id)
            .map(|p| p.comments.as_slice())
            .ok_or(DomainError::NotFound { id })
    }

    fn position(&self, id: u64) -> Result<usize, DomainError> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound { id })
    }
}

/// Trims and returns the value, or records the field as missing.
fn required(value: Option<&str>, name: &str, missing: &mut Vec<String>) -> Option<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            missing.push(name.to_string());
            None
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::validation("date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str, author: &str) -> NewPost {
        NewPost {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            author: Some(author.to_string()),
            date: None,
        }
    }

    fn seeded() -> Collection {
        let mut collection = Collection::default();
        collection.insert(draft("First post", "Hello", "Alice")).unwrap();
        collection.insert(draft("Second post", "World", "Bob")).unwrap();
        collection
    }

    #[test]
    fn insert_assigns_max_plus_one() {
        let mut collection = seeded();
        let post = collection.insert(draft("Third", "c", "Carol")).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let mut collection = seeded();
        collection.insert(draft("Third", "c", "Carol")).unwrap();
        collection.remove(2).unwrap();

        let post = collection.insert(draft("Fourth", "d", "Dave")).unwrap();
        assert_eq!(post.id, 4);

        let mut ids: Vec<u64> = collection.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn insert_reports_every_missing_field() {
        let mut collection = Collection::default();
        let err = collection
            .insert(NewPost {
                title: Some("  ".to_string()),
                content: None,
                author: Some("Alice".to_string()),
                date: None,
            })
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["title".to_string(), "content".to_string()]
            }
        );
        assert!(collection.posts.is_empty());
    }

    #[test]
    fn insert_trims_string_fields() {
        let mut collection = Collection::default();
        let post = collection
            .insert(draft("  Spaced out  ", " body ", "  Alice "))
            .unwrap();
        assert_eq!(post.title, "Spaced out");
        assert_eq!(post.content, "body");
        assert_eq!(post.author, "Alice");
    }

    #[test]
    fn insert_defaults_date_to_today() {
        let mut collection = Collection::default();
        let post = collection.insert(draft("Today", "b", "A")).unwrap();
        assert_eq!(post.date, Utc::now().date_naive());
    }

    #[test]
    fn insert_accepts_explicit_date() {
        let mut collection = Collection::default();
        let post = collection
            .insert(NewPost {
                date: Some("2023-06-15".to_string()),
                ..draft("Dated", "b", "A")
            })
            .unwrap();
        assert_eq!(post.date.to_string(), "2023-06-15");
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut collection = seeded();
        let updated = collection
            .update(
                1,
                PostPatch {
                    title: Some("Renamed".to_string()),
                    ..PostPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.content, "Hello");
        assert_eq!(updated.author, "Alice");
    }

    #[test]
    fn update_with_invalid_date_changes_nothing() {
        let mut collection = seeded();
        let before = collection.find(1).unwrap().clone();

        let err = collection
            .update(
                1,
                PostPatch {
                    title: Some("Should not apply".to_string()),
                    date: Some("2023-13-40".to_string()),
                    ..PostPatch::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, DomainError::validation("date"));

        let after = collection.find(1).unwrap();
        assert_eq!(after.title, before.title);
        assert_eq!(after.date, before.date);
    }

    #[test]
    fn update_missing_post_is_not_found() {
        let mut collection = seeded();
        let err = collection.update(99, PostPatch::default()).unwrap_err();
        assert_eq!(err, DomainError::NotFound { id: 99 });
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut collection = seeded();
        collection.insert(draft("Third", "c", "Carol")).unwrap();
        collection.remove(2).unwrap();
        let ids: Vec<u64> = collection.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn like_twice_increments_by_two() {
        let mut collection = seeded();
        let initial = collection.find(1).unwrap().likes;
        collection.like(1).unwrap();
        let likes = collection.like(1).unwrap();
        assert_eq!(likes, initial + 2);
    }

    #[test]
    fn like_missing_post_is_not_found() {
        let mut collection = seeded();
        assert_eq!(
            collection.like(42).unwrap_err(),
            DomainError::NotFound { id: 42 }
        );
    }

    #[test]
    fn comments_on_legacy_post_get_sequential_ids() {
        // A document written before the likes/comments attributes existed.
        let json = r#"{"posts":[{"id":1,"title":"Old","content":"c","author":"A","date":"2020-01-01"}]}"#;
        let mut collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.find(1).unwrap().likes, 0);

        let first = collection
            .add_comment(
                1,
                NewComment {
                    text: Some("Nice".to_string()),
                    author: Some("Bob".to_string()),
                },
            )
            .unwrap();
        let second = collection
            .add_comment(
                1,
                NewComment {
                    text: Some("Agreed".to_string()),
                    author: Some("Carol".to_string()),
                },
            )
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(collection.comments(1).unwrap().len(), 2);
    }

    #[test]
    fn add_comment_reports_missing_text_and_author() {
        let mut collection = seeded();
        let err = collection.add_comment(1, NewComment::default()).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["text".to_string(), "author".to_string()]
            }
        );
    }

    #[test]
    fn comments_on_missing_post_is_not_found() {
        let collection = seeded();
        assert_eq!(
            collection.comments(7).unwrap_err(),
            DomainError::NotFound { id: 7 }
        );
    }
}
