//! Collections: named, lazily computed artifact sets exposed to templates.

use orrery_kernel::registry::Units;
use orrery_kernel::unit::{self, Artifact, CollectionApi, CollectionBuilder};
use serde_json::Value;

pub const POST_TAG: &str = "post";
pub const PAGE_TAG: &str = "page";

#[must_use]
pub fn units() -> Units<CollectionBuilder> {
    Units::new()
        .with("posts", unit::collection(posts))
        .with("pages", unit::collection(pages))
        .with("sitemap", unit::collection(sitemap))
}

/// Tagged `post`, newest first. Undated posts go last.
#[must_use]
pub fn posts(api: &CollectionApi<'_>) -> Vec<Artifact> {
    let mut posts = api.filtered_by_tag(POST_TAG);
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

#[must_use]
pub fn pages(api: &CollectionApi<'_>) -> Vec<Artifact> {
    api.filtered_by_tag(PAGE_TAG)
}

/// Every artifact except those opting out with `sitemap: false` in their data.
#[must_use]
pub fn sitemap(api: &CollectionApi<'_>) -> Vec<Artifact> {
    api.iter().filter(|a| a.data.get("sitemap") != Some(&Value::Bool(false))).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn posts_are_newest_first() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).expect("valid date");
        let all = vec![
            Artifact::new("a.md", "/a/").with_tags([POST_TAG]).with_date(day(1)),
            Artifact::new("draft.md", "/draft/").with_tags([POST_TAG]),
            Artifact::new("c.md", "/c/").with_tags([POST_TAG]).with_date(day(20)),
            Artifact::new("about.md", "/about/").with_tags([PAGE_TAG]),
        ];

        let urls: Vec<_> = posts(&CollectionApi::new(&all)).into_iter().map(|a| a.url).collect();
        assert_eq!(urls, ["/c/", "/a/", "/draft/"]);
    }

    #[test]
    fn sitemap_honours_opt_out() {
        let all = vec![
            Artifact::new("index.md", "/"),
            Artifact::new("404.md", "/404.html").with_data(json!({ "sitemap": false })),
            Artifact::new("feed.njk", "/feed.xml").with_data(json!({ "sitemap": true })),
        ];

        let urls: Vec<_> = sitemap(&CollectionApi::new(&all)).into_iter().map(|a| a.url).collect();
        assert_eq!(urls, ["/", "/feed.xml"]);
    }
}
