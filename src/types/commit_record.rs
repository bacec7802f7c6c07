// src/types/commit_record.rs

use crate::types::commit_author::CommitAuthor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
    pub author: CommitAuthor,
}
