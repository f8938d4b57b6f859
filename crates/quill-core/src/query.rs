//! Read-side queries over a post collection: sorting, filtering, pagination.
//!
//! Everything here operates on views; the stored collection order is never
//! touched.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Post;
use crate::error::DomainError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 5;

/// Fields a post listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "author" => Ok(Self::Author),
            "date" => Ok(Self::Date),
            _ => Err(DomainError::validation("sort")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::validation("direction")),
        }
    }
}

type Comparator = fn(&Post, &Post) -> Ordering;

impl SortField {
    /// Field-to-comparator table; adding a sortable field is a new row here,
    /// not new control flow in `sort`.
    fn comparator(self) -> Comparator {
        match self {
            Self::Title => |a, b| cmp_case_insensitive(&a.title, &b.title),
            Self::Content => |a, b| cmp_case_insensitive(&a.content, &b.content),
            Self::Author => |a, b| cmp_case_insensitive(&a.author, &b.author),
            // Dates compare as calendar dates, not strings.
            Self::Date => |a, b| a.date.cmp(&b.date),
        }
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable sort over a copy of the posts. `None` keeps the original order.
///
/// Descending order reverses the comparator rather than the slice, so ties
/// keep their original relative order in both directions.
pub fn sort(posts: &[Post], field: Option<SortField>, direction: Direction) -> Vec<Post> {
    let mut view = posts.to_vec();
    let Some(field) = field else {
        return view;
    };
    let cmp = field.comparator();
    view.sort_by(|a, b| match direction {
        Direction::Asc => cmp(a, b),
        Direction::Desc => cmp(a, b).reverse(),
    });
    view
}

/// Case-insensitive substring filter across title, content, and author.
///
/// A post matches if ANY of the three fields contains the term. A blank term
/// matches everything. Original relative order is preserved.
pub fn filter(posts: &[Post], term: &str) -> Vec<Post> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return posts.to_vec();
    }
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.content.to_lowercase().contains(&needle)
                || p.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Pagination metadata returned alongside a page slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_posts: usize,
    pub total_pages: usize,
    pub page: usize,
    pub per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slices one page out of the posts.
///
/// Out-of-range pages clamp instead of erroring: below 1 clamps to 1, past
/// the end clamps to the last page when any pages exist.
pub fn paginate(posts: Vec<Post>, page: i64, per_page: i64) -> (Vec<Post>, PageInfo) {
    let per_page = per_page.max(1) as usize;
    let total_posts = posts.len();
    let total_pages = total_posts.div_ceil(per_page);
    let page = (page.max(1) as usize).min(total_pages.max(1));

    let start = (page - 1) * per_page;
    let slice: Vec<Post> = posts.into_iter().skip(start).take(per_page).collect();

    let info = PageInfo {
        total_posts,
        total_pages,
        page,
        per_page,
        has_next: page < total_pages,
        has_prev: page > 1,
    };
    (slice, info)
}
