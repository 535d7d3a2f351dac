//! Article counts by label and by author.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::article::{Article, Label};

/// Number of articles in each class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    /// Articles labelled real.
    pub real: usize,
    /// Articles labelled fake.
    pub fake: usize,
}

/// Articles written by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    /// Author name.
    pub author: String,
    /// Articles by this author with a present text.
    pub article_count: usize,
}

/// Count real and fake articles. Other labels are counted in neither.
pub fn count_labels(articles: &[Article]) -> LabelCounts {
    articles
        .iter()
        .fold(LabelCounts::default(), |mut counts, article| {
            match article.label {
                Label::Real => counts.real += 1,
                Label::Fake => counts.fake += 1,
                Label::Other => {}
            }
            counts
        })
}

/// Number of distinct present authors.
pub fn unique_authors(articles: &[Article]) -> usize {
    articles
        .iter()
        .filter_map(|a| a.author.as_deref())
        .collect::<HashSet<_>>()
        .len()
}

/// Partition articles into `(fake, real)`.
pub fn split_by_label(articles: &[Article]) -> (Vec<&Article>, Vec<&Article>) {
    let fake = articles.iter().filter(|a| a.label == Label::Fake).collect();
    let real = articles.iter().filter(|a| a.label == Label::Real).collect();
    (fake, real)
}

/// Rank authors by their number of articles with a present text.
///
/// Articles without an author are ignored. An author whose articles all
/// lack text is still listed, with a count of zero. Ties are broken by
/// author name.
pub fn author_counts<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Vec<AuthorCount> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for article in articles {
        if let Some(author) = article.author.as_deref() {
            *groups.entry(author).or_default() += usize::from(article.text.is_some());
        }
    }

    let mut ranked: Vec<AuthorCount> = groups
        .into_iter()
        .map(|(author, article_count)| AuthorCount {
            author: author.to_string(),
            article_count,
        })
        .collect();
    // BTreeMap order is by name, so a stable sort keeps ties alphabetical.
    ranked.sort_by(|a, b| b.article_count.cmp(&a.article_count));
    ranked
}
