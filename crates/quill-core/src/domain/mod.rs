mod collection;
mod post;

pub use collection::Collection;
pub use post::{Comment, NewComment, NewPost, Post, PostPatch};
