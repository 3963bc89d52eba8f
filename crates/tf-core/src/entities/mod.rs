//! Entity structs for all TaskFlow domain objects.
//!
//! Each entity maps to a table in the libSQL database managed by `tf-db`.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod attachment;
mod comment;
mod profile;
mod task;

pub use attachment::TaskAttachment;
pub use comment::TaskComment;
pub use profile::{Profile, UserRole};
pub use task::{Task, TaskRecord, completion_for, normalize_description, normalize_title};
