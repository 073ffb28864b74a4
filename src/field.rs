use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::format;
use crate::scrub::{self, ScrubKind};
use crate::value::{CanonicalValue, FieldKind};

/// Opaque identifier for one rendered field instance, stable for the field's
/// lifetime on the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FieldId(String);

impl FieldId {
    /// A freshly generated `ID-<UUID>` identifier for fields the caller does
    /// not name explicitly.
    pub fn random() -> Self {
        FieldId(format!("ID-{}", Uuid::new_v4().to_string().to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        FieldId(id.to_owned())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        FieldId(id)
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-side state of one rich field: the text the user sees, the immutable
/// snapshot of the server-loaded value, and the scrubbed canonical form of
/// the user's edits.
///
/// `scrubbed` starts equal to `original`, so a freshly created field is never
/// dirty. Every edit recomputes `scrubbed` from the new display text (or, for
/// month/year fields, from the changed sub-control merged with the previous
/// scrub value), and dirtiness is exact string inequality between `scrubbed`
/// and `original` — never semantic number or date comparison.
#[derive(Clone, Debug, Serialize)]
pub struct FieldState {
    id: FieldId,
    name: String,
    kind: FieldKind,
    display_value: String,
    original_value: String,
    scrubbed_value: String,
}

impl FieldState {
    /// Create a field from the server's canonical string, with a generated
    /// id. The display slot gets the value formatted per kind; a canonical
    /// string that does not parse as the kind is displayed verbatim.
    pub fn new(kind: FieldKind, name: impl Into<String>, original: impl Into<String>) -> Self {
        Self::with_id(FieldId::random(), kind, name, original)
    }

    pub fn with_id(
        id: FieldId,
        kind: FieldKind,
        name: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        let original = original.into();

        let display_value = match CanonicalValue::parse(kind, &original) {
            Ok(Some(value)) => format::initial_display(&value),
            Ok(None) => String::new(),
            // Unknown server text stays visible and editable as-is
            Err(_) => original.clone(),
        };

        debug!(id = %id, kind = ?kind, "field created");

        FieldState {
            id,
            name: name.into(),
            kind,
            display_value,
            scrubbed_value: original.clone(),
            original_value: original,
        }
    }

    /// Typed construction for server-loaded values; `None` renders as an
    /// empty field.
    pub fn from_value(
        kind: FieldKind,
        name: impl Into<String>,
        value: Option<CanonicalValue>,
    ) -> Self {
        let original = value
            .map(|value| value.to_canonical_string())
            .unwrap_or_default();

        Self::new(kind, name, original)
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// The form field name this field submits under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The text currently visible in the editable control. May be partially
    /// typed; never submitted.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// The immutable snapshot of the server-loaded canonical value.
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// The canonical form of the user's current input; this is what a save
    /// submits.
    pub fn scrubbed_value(&self) -> &str {
        &self.scrubbed_value
    }

    /// The user edited the field's main input. Stores the new display text
    /// and recomputes the scrubbed slot through the kind's scrub rule.
    /// Idempotent: repeating the same edit (a re-fired change event) leaves
    /// the state unchanged.
    pub fn on_edit(&mut self, display: impl Into<String>) {
        let display = display.into();
        let scrubbed = scrub::scrub(self.kind.scrub_kind(), &display);
        self.store(display, scrubbed);
    }

    /// The month sub-control of a month/year field changed. The year half is
    /// recovered from the previously stored scrub value.
    pub fn on_month_edit(&mut self, month: &str) {
        let scrubbed =
            scrub::scrub_with_sibling(ScrubKind::MonthYearMonth, month, &self.scrubbed_value);
        self.store(scrubbed.clone(), scrubbed);
    }

    /// The year sub-control of a month/year field changed. The month half is
    /// recovered from the previously stored scrub value.
    pub fn on_year_edit(&mut self, year: &str) {
        let scrubbed =
            scrub::scrub_with_sibling(ScrubKind::MonthYearYear, year, &self.scrubbed_value);
        self.store(scrubbed.clone(), scrubbed);
    }

    /// Whether the canonical value differs from the server-loaded original.
    pub fn is_dirty(&self) -> bool {
        self.scrubbed_value != self.original_value
    }

    fn store(&mut self, display: String, scrubbed: String) {
        let was_dirty = self.is_dirty();

        self.display_value = display;
        self.scrubbed_value = scrubbed;

        trace!(
            id = %self.id,
            display = %self.display_value,
            scrubbed = %self.scrubbed_value,
            "field edited"
        );

        let dirty = self.is_dirty();
        if dirty != was_dirty {
            debug!(id = %self.id, dirty, "dirty state changed");
        }
    }
}

/// The save payload: one `name -> scrubbed value` entry per field. Display
/// values never reach the server.
pub fn submission_payload<'a>(fields: impl IntoIterator<Item = &'a FieldState>) -> Value {
    let mut payload = serde_json::Map::new();

    for field in fields {
        payload.insert(
            field.name.clone(),
            Value::String(field.scrubbed_value.clone()),
        );
    }

    Value::Object(payload)
}
