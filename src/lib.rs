//! Client-side state for composite "rich" form fields.
//!
//! Each field keeps three string slots: the text visible in the editable
//! control, an immutable snapshot of the value originally loaded from the
//! server, and a scrubbed canonical form of the user's input. Per-kind scrub
//! rules normalize free-form text (`$1,500.00` → `1500.00`), month/year
//! fields merge two independently edited sub-controls into one canonical
//! date string, and a field is dirty exactly when its scrubbed value differs
//! from the original. Group-level aggregation drives dependent controls such
//! as a save button.
//!
//! Everything runs synchronously inside a single UI event turn; there is no
//! DOM, markup or network surface here. Rendering and form binding live with
//! the caller.

pub mod errors;
pub mod field;
pub mod format;
pub mod group;
pub mod monthyear;
pub mod scrub;
pub mod value;

pub use errors::ValueError;
pub use field::{submission_payload, FieldId, FieldState};
pub use group::{any_dirty, refresh_dependent_control, DependentControl, FieldGroup};
pub use scrub::{scrub, scrub_number, scrub_with_sibling, ScrubKind};
pub use value::{CanonicalValue, FieldKind};
