use std::{borrow::Borrow, cmp::Ordering, path::Path};

use chrono::NaiveDate;

use super::data::Post;

/// Orders posts by date (descending), compared as plain strings.
/// Posts without a date end up last.
pub(super) fn sort_post<T: Borrow<Post>>(a: &T, b: &T) -> Ordering {
    b.borrow().date.cmp(&a.borrow().date)
}

pub(super) fn is_markdown(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "md")
}

/// Whether `date` is empty or a real calendar date in `YYYY-MM-DD` form.
pub(super) fn is_valid_date(date: &str) -> bool {
    date.is_empty() || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, date: &str) -> Post {
        Post {
            title: title.to_string(),
            slug: title.to_string(),
            date: date.to_string(),
            summary: String::new(),
            tags: vec![],
            featured: false,
            content: String::new(),
        }
    }

    #[test]
    fn test_sort_post_descending_undated_last() {
        let mut posts = vec![
            post("jan", "2024-01-01"),
            post("none", ""),
            post("jun", "2024-06-01"),
        ];
        posts.sort_by(sort_post);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["jun", "jan", "none"]);
    }

    #[test]
    fn test_sort_post_is_stable() {
        let mut posts = vec![post("a", "2024-01-01"), post("b", "2024-01-01")];
        posts.sort_by(sort_post);
        assert_eq!(posts[0].title, "a");
        assert_eq!(posts[1].title, "b");
    }

    #[test]
    fn test_sort_post_borrowed() {
        let a = post("a", "2023-01-01");
        let b = post("b", "2024-01-01");
        let mut refs = vec![&a, &b];
        refs.sort_by(sort_post);
        assert_eq!(refs[0].title, "b");
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("posts/a.md")));
        assert!(!is_markdown(Path::new("posts/a.markdown.txt")));
        assert!(!is_markdown(Path::new("posts/README")));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(""));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-13-01"));
    }
}
