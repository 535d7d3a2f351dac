//! Integration tests for the default analysis over a CSV file.

use news_eda::config::{DatasetConfig, EdaConfig};
use news_eda::counts::LabelCounts;
use news_eda::dataset::Dataset;
use news_eda::words::WordCount;
use news_eda::{Error, Report};

use crate::common::Fixture;

fn report_for(fixture: &Fixture) -> Report {
    let config = EdaConfig::default();
    let dataset = Dataset::from_path(&fixture.path, &config.dataset).expect("load dataset");
    Report::build(&dataset, &config).expect("build report")
}

#[test]
fn test_label_and_author_totals() {
    let report = report_for(&Fixture::news());

    // Row 7 has no label and is counted in neither class.
    assert_eq!(report.label_counts, LabelCounts { real: 3, fake: 4 });
    assert_eq!(report.unique_authors, 4);
    assert_eq!(report.info.rows, 8);
}

#[test]
fn test_author_rankings() {
    let report = report_for(&Fixture::news());

    let fake: Vec<(&str, usize)> = report
        .fake_authors
        .iter()
        .map(|a| (a.author.as_str(), a.article_count))
        .collect();
    assert_eq!(fake, vec![("Anon Patriot", 2), ("Truth Seeker", 1)]);

    let real: Vec<(&str, usize)> = report
        .real_authors
        .iter()
        .map(|a| (a.author.as_str(), a.article_count))
        .collect();
    assert_eq!(real, vec![("Jane Roe", 2), ("John Doe", 1)]);
}

#[test]
fn test_word_rankings_split_on_spaces_only() {
    let report = report_for(&Fixture::news());

    assert_eq!(report.fake_words[0], WordCount::new("the", 4));
    assert_eq!(report.fake_words[1], WordCount::new("emails", 3));

    // Case and punctuation are preserved: "The" and "the" are distinct.
    let real: Vec<(&str, usize)> = report
        .real_words
        .iter()
        .take(4)
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    assert_eq!(real, vec![("on", 3), ("the", 3), ("The", 2), ("bill", 2)]);

    // The multi-line text keeps its newline inside a token.
    assert!(report.fake_words.iter().any(|w| w.word == "state\nand"));
}

#[test]
fn test_exclusive_vocabulary() {
    let report = report_for(&Fixture::news());

    assert_eq!(report.exclusive_words[0], WordCount::new("emails", 3));
    assert!(report.exclusive_words.iter().all(|w| w.word != "the"));
}

#[test]
fn test_text_report_renders() {
    let report = report_for(&Fixture::news());
    let mut buf = Vec::new();
    report.write_text(&mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(output.contains("Real articles: 3"));
    assert!(output.contains("Fake articles: 4"));
    assert!(output.contains("Number of authors: 4"));
    assert!(output.contains("Anon Patriot"));
}

#[test]
fn test_header_only_dataset() {
    let fixture = Fixture::with_csv("id,title,author,text,label\n");
    let report = report_for(&fixture);

    assert_eq!(report.label_counts, LabelCounts::default());
    assert!(report.fake_words.is_empty());
    assert!(report.exclusive_words.is_empty());

    let mut buf = Vec::new();
    report.write_text(&mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("Index: []"));
}

#[test]
fn test_missing_file() {
    let err = Dataset::from_path("/nonexistent/news.csv", &DatasetConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/news.csv"));
}

#[test]
fn test_missing_text_column() {
    let fixture = Fixture::with_csv("id,author,label\n0,Ann,1\n");
    let config = EdaConfig::default();
    let dataset = Dataset::from_path(&fixture.path, &config.dataset).unwrap();

    let err = Report::build(&dataset, &config).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref name } if name == "text"));
}
