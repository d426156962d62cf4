//! Domain logic - commit vocabulary and message normalization

pub mod commit;
pub mod message;

pub use commit::{CommitType, SpecialCommit, SUBJECT_MAX_LENGTH};
pub use message::{strip_comments, CommitMessage};
