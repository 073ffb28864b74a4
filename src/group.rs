use tracing::debug;

use crate::field::{FieldId, FieldState};

/// An ordered set of field ids scoped under one container (typically a form).
/// The group only enumerates membership; the renderer keeps ownership of the
/// [`FieldState`] instances themselves.
#[derive(Clone, Debug, Default)]
pub struct FieldGroup {
    members: Vec<FieldId>,
}

impl FieldGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: FieldId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.members.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldId> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True iff any member field in `fields` is dirty. Fields outside the
    /// group and member ids without a backing field are ignored.
    pub fn any_dirty(&self, fields: &[FieldState]) -> bool {
        fields
            .iter()
            .any(|field| self.contains(field.id()) && field.is_dirty())
    }
}

impl FromIterator<FieldId> for FieldGroup {
    fn from_iter<I: IntoIterator<Item = FieldId>>(iter: I) -> Self {
        let mut group = FieldGroup::new();
        for id in iter {
            group.push(id);
        }
        group
    }
}

/// Group-less form of the aggregate: true iff any of the given fields is
/// dirty.
pub fn any_dirty<'a>(fields: impl IntoIterator<Item = &'a FieldState>) -> bool {
    fields.into_iter().any(FieldState::is_dirty)
}

/// A control whose enabled state follows the group's dirty state, typically
/// the form's save button. Implemented by the renderer and registered
/// explicitly; the core never looks controls up by identifier.
pub trait DependentControl {
    fn set_enabled(&mut self, enabled: bool);
}

/// Re-evaluate the group and push the result into the dependent control.
/// Cheap enough to run after every qualifying edit event (key-up, change,
/// click) on any member field.
pub fn refresh_dependent_control<C: DependentControl>(
    group: &FieldGroup,
    fields: &[FieldState],
    control: &mut C,
) {
    let dirty = group.any_dirty(fields);
    debug!(dirty, "refreshing dependent control");
    control.set_enabled(dirty);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldKind;

    fn sample_fields() -> Vec<FieldState> {
        vec![
            FieldState::new(FieldKind::Percent, "ExamplePercent", "5"),
            FieldState::new(FieldKind::Money, "ExampleMoney", "1500.00"),
            FieldState::new(FieldKind::Text, "ExampleText", "hello"),
        ]
    }

    fn group_of(fields: &[FieldState]) -> FieldGroup {
        fields.iter().map(|field| field.id().clone()).collect()
    }

    #[test]
    fn it_reports_clean_groups() {
        let fields = sample_fields();
        let group = group_of(&fields);
        assert!(!group.any_dirty(&fields));
        assert!(!any_dirty(&fields));
    }

    #[test]
    fn it_reports_dirty_when_exactly_one_member_is_edited() {
        let mut fields = sample_fields();
        let group = group_of(&fields);

        fields[1].on_edit("$2,000.00");
        assert!(group.any_dirty(&fields));

        // Reverting to text that scrubs back to the original cleans the group
        fields[1].on_edit("1,500.00");
        assert!(!group.any_dirty(&fields));
    }

    #[test]
    fn it_ignores_fields_outside_the_group() {
        let mut fields = sample_fields();
        let group: FieldGroup = fields[..2].iter().map(|f| f.id().clone()).collect();

        fields[2].on_edit("changed");
        assert!(fields[2].is_dirty());
        assert!(!group.any_dirty(&fields));
    }

    #[test]
    fn it_ignores_member_ids_without_a_backing_field() {
        let fields = sample_fields();
        let mut group = group_of(&fields);
        group.push(FieldId::from("ID-DETACHED"));
        assert_eq!(group.len(), 4);
        assert!(!group.any_dirty(&fields));
    }

    #[test]
    fn it_deduplicates_member_ids() {
        let fields = sample_fields();
        let mut group = group_of(&fields);
        group.push(fields[0].id().clone());
        assert_eq!(group.len(), fields.len());
    }

    #[test]
    fn it_drives_the_dependent_control() {
        struct SaveButton {
            enabled: bool,
        }

        impl DependentControl for SaveButton {
            fn set_enabled(&mut self, enabled: bool) {
                self.enabled = enabled;
            }
        }

        let mut fields = sample_fields();
        let group = group_of(&fields);
        let mut button = SaveButton { enabled: false };

        refresh_dependent_control(&group, &fields, &mut button);
        assert!(!button.enabled);

        fields[0].on_edit("6");
        refresh_dependent_control(&group, &fields, &mut button);
        assert!(button.enabled);

        fields[0].on_edit("5");
        refresh_dependent_control(&group, &fields, &mut button);
        assert!(!button.enabled);
    }
}
