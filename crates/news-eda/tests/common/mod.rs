//! Common fixtures for news-eda integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// A small corpus in the layout of the public fake-news dataset.
pub const NEWS_CSV: &str = "\
id,title,author,text,label
0,House Passes Bill,Jane Roe,The House passed the spending bill on Tuesday.,1
1,You Won't Believe This,Anon Patriot,SHOCKING truth about the emails they hid,0
2,Senate Vote,Jane Roe,The Senate voted on the bill late Friday.,1
3,Emails Exposed,Anon Patriot,the emails prove everything!!,0
4,Untitled,,,0
5,Market Update,John Doe,Stocks rose on Friday after the report.,1
6,Deep State,Truth Seeker,\"the deep state
and the emails\",0
7,Ambiguous,John Doe,Unlabelled article text,
";

/// Temporary directory holding one dataset file.
pub struct Fixture {
    /// Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
    /// Path of the dataset file.
    pub path: PathBuf,
}

impl Fixture {
    /// Write `content` to `news.csv` in a fresh temporary directory.
    pub fn with_csv(content: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("news.csv");
        std::fs::write(&path, content).expect("write fixture");
        Self { dir, path }
    }

    /// Fixture with [`NEWS_CSV`].
    pub fn news() -> Self {
        Self::with_csv(NEWS_CSV)
    }

    /// Write a config file next to the dataset and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        std::fs::write(&path, content).expect("write config");
        path
    }
}
