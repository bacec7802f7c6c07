// src/types/commit_author.rs

/// Author of one commit as reported upstream. The same person may appear
/// on any number of commits; no deduplication happens anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}
