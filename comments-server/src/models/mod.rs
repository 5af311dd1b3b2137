//! Domain models with validation
//!
//! All user input is validated before it reaches storage.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod comment;
pub mod pagination;

pub use validation::ValidationError;
pub use comment::{CommentDraft, MAX_NAME_LEN};
pub use pagination::{PageSize, Pagination, DEFAULT_PAGE, DEFAULT_SIZE};
