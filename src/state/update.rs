//! Partial updates merged into the registration record
//!
//! Every edit in the wizard is expressed as a [`FormUpdate`]: a record where
//! each field is optional. Merging replaces only the fields that are present.
//! Gate transitions (has-children, same-as-whatsapp, additional generations)
//! have dedicated constructors so the dependent subtree is initialised or
//! cleared in the same merge.

use super::registration::{
    Ancestor, Attachment, Child, FormState, Generation, Lineage, Profession, Wife, MAX_CHILDREN,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormUpdate {
    pub name: Option<String>,
    pub age: Option<String>,
    pub blood_group: Option<String>,
    pub cast: Option<String>,
    pub profession: Option<Profession>,

    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub mothers: Option<Vec<Ancestor>>,
    pub wives: Option<Vec<Wife>>,
    pub has_children: Option<bool>,
    pub children_count: Option<usize>,
    pub children: Option<Vec<Child>>,

    pub grand_father_name: Option<String>,
    pub grand_mothers: Option<Vec<Ancestor>>,
    pub great_grand_father_name: Option<String>,
    pub great_grand_mothers: Option<Vec<Ancestor>>,
    pub has_additional_generation: Option<bool>,
    pub additional_generation: Option<Vec<Generation>>,

    pub mobile_no: Option<String>,
    pub additional_mobile_no: Option<String>,
    pub same_as_whatsapp: Option<bool>,
    pub whatsapp_no: Option<String>,
    pub mail_id: Option<String>,
    pub address: Option<String>,

    pub profile_photo: Option<Option<Attachment>>,
    pub family_photo: Option<Option<Attachment>>,
    pub documents: Option<Vec<Attachment>>,
}

fn merge_field<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl FormUpdate {
    /// True when merging would leave the form unchanged
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge this update into `form`
    pub fn merge_into(self, form: &mut FormState) {
        merge_field(&mut form.name, self.name);
        merge_field(&mut form.age, self.age);
        merge_field(&mut form.blood_group, self.blood_group);
        merge_field(&mut form.cast, self.cast);
        merge_field(&mut form.profession, self.profession);

        merge_field(&mut form.father_name, self.father_name);
        merge_field(&mut form.mother_name, self.mother_name);
        merge_field(&mut form.mothers, self.mothers);
        merge_field(&mut form.wives, self.wives);
        merge_field(&mut form.has_children, self.has_children);
        merge_field(&mut form.children_count, self.children_count);
        merge_field(&mut form.children, self.children);

        merge_field(&mut form.grand_father_name, self.grand_father_name);
        merge_field(&mut form.grand_mothers, self.grand_mothers);
        merge_field(&mut form.great_grand_father_name, self.great_grand_father_name);
        merge_field(&mut form.great_grand_mothers, self.great_grand_mothers);
        merge_field(
            &mut form.has_additional_generation,
            self.has_additional_generation,
        );
        merge_field(&mut form.additional_generation, self.additional_generation);

        merge_field(&mut form.mobile_no, self.mobile_no);
        merge_field(&mut form.additional_mobile_no, self.additional_mobile_no);
        merge_field(&mut form.same_as_whatsapp, self.same_as_whatsapp);
        merge_field(&mut form.whatsapp_no, self.whatsapp_no);
        merge_field(&mut form.mail_id, self.mail_id);
        merge_field(&mut form.address, self.address);

        merge_field(&mut form.profile_photo, self.profile_photo);
        merge_field(&mut form.family_photo, self.family_photo);
        merge_field(&mut form.documents, self.documents);
    }

    /// Turn the children subtree on (one empty child) or off (cleared)
    pub fn has_children(enabled: bool) -> Self {
        Self {
            has_children: Some(enabled),
            children_count: Some(usize::from(enabled)),
            children: Some(if enabled {
                vec![Child::default()]
            } else {
                Vec::new()
            }),
            ..Default::default()
        }
    }

    /// Resize the children list, keeping entries that survive the resize.
    /// Ignored while the children subtree is off.
    pub fn children_count(form: &FormState, count: usize) -> Self {
        if !form.has_children {
            return Self::default();
        }
        let count = count.clamp(1, MAX_CHILDREN);
        let children = (0..count)
            .map(|i| form.children.get(i).cloned().unwrap_or_default())
            .collect();
        Self {
            children_count: Some(count),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Replace the children list while keeping the count in step
    pub fn children(children: Vec<Child>) -> Self {
        Self {
            children_count: Some(children.len()),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Sync (copy mobile) or unsync (clear) the whatsapp number
    pub fn same_as_whatsapp(form: &FormState, enabled: bool) -> Self {
        Self {
            same_as_whatsapp: Some(enabled),
            whatsapp_no: Some(if enabled {
                form.mobile_no.clone()
            } else {
                String::new()
            }),
            ..Default::default()
        }
    }

    /// Edit the mobile number, carrying it to whatsapp while synced
    pub fn mobile_no(form: &FormState, value: String) -> Self {
        Self {
            whatsapp_no: form.same_as_whatsapp.then(|| value.clone()),
            mobile_no: Some(value),
            ..Default::default()
        }
    }

    /// Edit the whatsapp number; ignored while it mirrors the mobile number
    pub fn whatsapp_no(form: &FormState, value: String) -> Self {
        if form.same_as_whatsapp {
            return Self::default();
        }
        Self {
            whatsapp_no: Some(value),
            ..Default::default()
        }
    }

    /// Turn additional generations on (one empty entry) or off (cleared)
    pub fn has_additional_generation(enabled: bool) -> Self {
        Self {
            has_additional_generation: Some(enabled),
            additional_generation: Some(if enabled {
                vec![Generation::default()]
            } else {
                Vec::new()
            }),
            ..Default::default()
        }
    }

    pub fn lineage(lineage: Lineage, entries: Vec<Ancestor>) -> Self {
        let mut update = Self::default();
        match lineage {
            Lineage::Mothers => update.mothers = Some(entries),
            Lineage::GrandMothers => update.grand_mothers = Some(entries),
            Lineage::GreatGrandMothers => update.great_grand_mothers = Some(entries),
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn apply(form: &mut FormState, update: FormUpdate) {
        update.merge_into(form);
    }

    #[test]
    fn test_merge_leaves_untouched_fields() {
        let mut form = FormState {
            name: "Kannan".to_string(),
            age: "40".to_string(),
            ..Default::default()
        };
        apply(
            &mut form,
            FormUpdate {
                age: Some("41".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(form.name, "Kannan");
        assert_eq!(form.age, "41");
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut form = FormState {
            mail_id: "a@b.c".to_string(),
            ..Default::default()
        };
        let before = form.clone();
        let update = FormUpdate::default();
        assert!(update.is_empty());
        apply(&mut form, update);
        assert_eq!(form, before);
    }

    mod children_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enable_seeds_one_child() {
            let mut form = FormState::default();
            apply(&mut form, FormUpdate::has_children(true));
            assert!(form.has_children);
            assert_eq!(form.children_count, 1);
            assert_eq!(form.children.len(), 1);
            assert!(form.invariant_violations().is_empty());
        }

        #[test]
        fn test_disable_clears_children_and_count() {
            let mut form = FormState::default();
            apply(&mut form, FormUpdate::has_children(true));
            let count = FormUpdate::children_count(&form, 3);
            apply(&mut form, count);
            form.children[2].name = "Meena".to_string();

            apply(&mut form, FormUpdate::has_children(false));
            assert!(form.children.is_empty());
            assert_eq!(form.children_count, 0);

            // Re-enabling starts fresh instead of resurrecting stale children
            apply(&mut form, FormUpdate::has_children(true));
            assert_eq!(form.children, vec![Child::default()]);
        }

        #[test]
        fn test_count_preserves_existing_entries() {
            let mut form = FormState::default();
            apply(&mut form, FormUpdate::has_children(true));
            form.children[0].name = "Arun".to_string();
            let grow = FormUpdate::children_count(&form, 4);
            apply(&mut form, grow);
            assert_eq!(form.children.len(), 4);
            assert_eq!(form.children[0].name, "Arun");

            let shrink = FormUpdate::children_count(&form, 2);
            apply(&mut form, shrink);
            assert_eq!(form.children_count, 2);
            assert_eq!(form.children[0].name, "Arun");
        }

        #[test]
        fn test_count_is_clamped() {
            let mut form = FormState::default();
            apply(&mut form, FormUpdate::has_children(true));
            let update = FormUpdate::children_count(&form, 50);
            apply(&mut form, update);
            assert_eq!(form.children_count, MAX_CHILDREN);
            let update = FormUpdate::children_count(&form, 0);
            apply(&mut form, update);
            assert_eq!(form.children_count, 1);
        }

        #[test]
        fn test_count_ignored_when_disabled() {
            let form = FormState::default();
            assert!(FormUpdate::children_count(&form, 3).is_empty());
        }
    }

    mod whatsapp_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enable_copies_mobile() {
            let mut form = FormState {
                mobile_no: "9876543210".to_string(),
                ..Default::default()
            };
            let update = FormUpdate::same_as_whatsapp(&form, true);
            apply(&mut form, update);
            assert_eq!(form.whatsapp_no, "9876543210");
        }

        #[test]
        fn test_disable_clears_whatsapp() {
            let mut form = FormState {
                mobile_no: "9876543210".to_string(),
                ..Default::default()
            };
            let on = FormUpdate::same_as_whatsapp(&form, true);
            apply(&mut form, on);
            let off = FormUpdate::same_as_whatsapp(&form, false);
            apply(&mut form, off);
            assert!(!form.same_as_whatsapp);
            assert_eq!(form.whatsapp_no, "");
        }

        #[test]
        fn test_mobile_edit_carries_to_whatsapp_when_synced() {
            let mut form = FormState::default();
            let on = FormUpdate::same_as_whatsapp(&form, true);
            apply(&mut form, on);
            let edit = FormUpdate::mobile_no(&form, "99".to_string());
            apply(&mut form, edit);
            assert_eq!(form.whatsapp_no, "99");
            assert!(form.invariant_violations().is_empty());
        }

        #[test]
        fn test_mobile_edit_leaves_whatsapp_when_not_synced() {
            let mut form = FormState {
                whatsapp_no: "111".to_string(),
                ..Default::default()
            };
            let edit = FormUpdate::mobile_no(&form, "222".to_string());
            apply(&mut form, edit);
            assert_eq!(form.whatsapp_no, "111");
        }

        #[test]
        fn test_direct_whatsapp_edit_ignored_when_synced() {
            let mut form = FormState::default();
            let on = FormUpdate::same_as_whatsapp(&form, true);
            apply(&mut form, on);
            assert!(FormUpdate::whatsapp_no(&form, "5".to_string()).is_empty());
        }
    }

    mod generation_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_seeds_and_clears() {
            let mut form = FormState::default();
            apply(&mut form, FormUpdate::has_additional_generation(true));
            assert_eq!(form.additional_generation.len(), 1);
            apply(&mut form, FormUpdate::has_additional_generation(false));
            assert!(form.additional_generation.is_empty());
            assert!(form.invariant_violations().is_empty());
        }
    }

    #[test]
    fn test_lineage_targets_matching_list() {
        let mut form = FormState::default();
        let entries = vec![Ancestor {
            name: "Valli".to_string(),
            whatsapp_no: String::new(),
        }];
        apply(
            &mut form,
            FormUpdate::lineage(Lineage::GrandMothers, entries.clone()),
        );
        assert_eq!(form.grand_mothers, entries);
        assert!(form.mothers.is_empty());
        assert!(form.great_grand_mothers.is_empty());
    }
}
