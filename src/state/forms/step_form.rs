//! Which fields a step shows, and how edits on them become form updates

use super::field::{AncestorField, ChildField, FieldId, FieldKind, GenerationField, WifeField};
use crate::state::registration::{
    Ancestor, Attachment, ChildStatus, FormState, Generation, Lineage, Occupation, Profession,
    Wife, MAX_CHILDREN,
};
use crate::state::steps::Step;
use crate::state::update::FormUpdate;

/// A user edit aimed at one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Clear,
    Cycle { forward: bool },
    Activate,
}

/// What an edit asks the wizard to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Unchanged,
    Update(FormUpdate),
    SaveDocument,
    Submit,
}

/// Fields that apply to `step` given the gates set in `form`
pub fn step_fields(step: Step, form: &FormState) -> Vec<FieldId> {
    let mut fields = Vec::new();
    match step {
        Step::Personal => {
            fields.extend([
                FieldId::Name,
                FieldId::Age,
                FieldId::BloodGroup,
                FieldId::Cast,
                FieldId::Profession,
            ]);
            match form.profession {
                Profession::Business { .. } => {
                    fields.extend([FieldId::BusinessDescription, FieldId::BusinessAddress])
                }
                Profession::Salaried { .. } => {
                    fields.extend([FieldId::CompanyName, FieldId::Designation])
                }
                Profession::Unset => {}
            }
        }
        Step::Family => {
            fields.extend([FieldId::FatherName, FieldId::MotherName]);
            lineage_fields(&mut fields, form, Lineage::Mothers);
            for (i, wife) in form.wives.iter().enumerate() {
                fields.push(FieldId::Wife(i, WifeField::Name));
                fields.push(FieldId::Wife(i, WifeField::Occupation));
                match wife.occupation {
                    Occupation::Business { .. } => fields.extend([
                        FieldId::Wife(i, WifeField::BusinessDescription),
                        FieldId::Wife(i, WifeField::BusinessAddress),
                    ]),
                    Occupation::Salaried { .. } => fields.extend([
                        FieldId::Wife(i, WifeField::CompanyName),
                        FieldId::Wife(i, WifeField::Designation),
                    ]),
                    Occupation::Unset | Occupation::Housewife => {}
                }
                fields.push(FieldId::RemoveWife(i));
            }
            fields.push(FieldId::AddWife);
            fields.push(FieldId::HasChildren);
            if form.has_children {
                fields.push(FieldId::ChildrenCount);
                for (i, child) in form.children.iter().enumerate() {
                    fields.extend([
                        FieldId::Child(i, ChildField::Name),
                        FieldId::Child(i, ChildField::Age),
                        FieldId::Child(i, ChildField::Gender),
                        FieldId::Child(i, ChildField::BloodGroup),
                        FieldId::Child(i, ChildField::WhatsappNo),
                        FieldId::Child(i, ChildField::Status),
                    ]);
                    match child.status {
                        ChildStatus::Studying { .. } => {
                            fields.push(FieldId::Child(i, ChildField::CourseDetails))
                        }
                        ChildStatus::Working { .. } => {
                            fields.push(FieldId::Child(i, ChildField::WorkDetails))
                        }
                        ChildStatus::Unset => {}
                    }
                }
            }
        }
        Step::Generations => {
            fields.push(FieldId::GrandFatherName);
            lineage_fields(&mut fields, form, Lineage::GrandMothers);
            fields.push(FieldId::GreatGrandFatherName);
            lineage_fields(&mut fields, form, Lineage::GreatGrandMothers);
            fields.push(FieldId::HasAdditionalGeneration);
            if form.has_additional_generation {
                for i in 0..form.additional_generation.len() {
                    fields.extend([
                        FieldId::Generation(i, GenerationField::Name),
                        FieldId::Generation(i, GenerationField::Relation),
                        FieldId::RemoveGeneration(i),
                    ]);
                }
                fields.push(FieldId::AddGeneration);
            }
        }
        Step::Contact => fields.extend([
            FieldId::MobileNo,
            FieldId::AdditionalMobileNo,
            FieldId::SameAsWhatsapp,
            FieldId::WhatsappNo,
            FieldId::MailId,
            FieldId::Address,
        ]),
        Step::Documents => {
            fields.extend([FieldId::ProfilePhoto, FieldId::FamilyPhoto]);
            for i in 0..form.documents.len() {
                fields.extend([FieldId::Document(i), FieldId::RemoveDocument(i)]);
            }
            fields.push(FieldId::AddDocument);
        }
        Step::Review => fields.extend([FieldId::SaveDocument, FieldId::Submit]),
    }
    fields
}

fn lineage_fields(fields: &mut Vec<FieldId>, form: &FormState, lineage: Lineage) {
    for i in 0..form.lineage(lineage).len() {
        fields.extend([
            FieldId::Ancestor(lineage, i, AncestorField::Name),
            FieldId::Ancestor(lineage, i, AncestorField::WhatsappNo),
            FieldId::RemoveAncestor(lineage, i),
        ]);
    }
    fields.push(FieldId::AddAncestor(lineage));
}

/// Translate `edit` on `field` into an outcome against the current `form`
pub fn apply_edit(field: FieldId, form: &FormState, edit: FieldEdit) -> FieldOutcome {
    if field.is_read_only(form) {
        return FieldOutcome::Unchanged;
    }

    let kind = field.kind();
    let outcome = match (kind, edit) {
        (FieldKind::Action, FieldEdit::Activate) => activate(field, form),
        (FieldKind::Toggle, FieldEdit::Activate | FieldEdit::Cycle { .. }) => toggle(field, form),
        (FieldKind::Choice, FieldEdit::Cycle { forward }) => cycle(field, form, forward),
        (FieldKind::Choice, FieldEdit::Activate) => cycle(field, form, true),
        (FieldKind::Choice, FieldEdit::Insert(c)) if field == FieldId::ChildrenCount => c
            .to_digit(10)
            .map(|n| FieldOutcome::Update(FormUpdate::children_count(form, n as usize)))
            .unwrap_or(FieldOutcome::Unchanged),
        (FieldKind::Multiline, FieldEdit::Activate) => {
            let mut text = field.value(form);
            text.push('\n');
            set_text(field, form, text)
        }
        (k, FieldEdit::Insert(c)) if k.accepts_char(c) => {
            let mut text = field.value(form);
            text.push(c);
            set_text(field, form, text)
        }
        (k, FieldEdit::Backspace) if k.accepts_text() => {
            let mut text = field.value(form);
            if text.pop().is_none() {
                return FieldOutcome::Unchanged;
            }
            set_text(field, form, text)
        }
        (k, FieldEdit::Clear) if k.accepts_text() => set_text(field, form, String::new()),
        _ => FieldOutcome::Unchanged,
    };

    match outcome {
        FieldOutcome::Update(update) if update.is_empty() => FieldOutcome::Unchanged,
        other => other,
    }
}

fn update(update: FormUpdate) -> FieldOutcome {
    FieldOutcome::Update(update)
}

fn set_text(field: FieldId, form: &FormState, value: String) -> FieldOutcome {
    let mut u = FormUpdate::default();
    match field {
        FieldId::Name => u.name = Some(value),
        FieldId::Age => u.age = Some(value),
        FieldId::Cast => u.cast = Some(value),
        FieldId::BusinessDescription | FieldId::BusinessAddress => match &form.profession {
            Profession::Business {
                description,
                address,
            } => {
                let (mut description, mut address) = (description.clone(), address.clone());
                if field == FieldId::BusinessDescription {
                    description = value;
                } else {
                    address = value;
                }
                u.profession = Some(Profession::Business {
                    description,
                    address,
                });
            }
            _ => return FieldOutcome::Unchanged,
        },
        FieldId::CompanyName | FieldId::Designation => match &form.profession {
            Profession::Salaried {
                company_name,
                designation,
            } => {
                let (mut company_name, mut designation) =
                    (company_name.clone(), designation.clone());
                if field == FieldId::CompanyName {
                    company_name = value;
                } else {
                    designation = value;
                }
                u.profession = Some(Profession::Salaried {
                    company_name,
                    designation,
                });
            }
            _ => return FieldOutcome::Unchanged,
        },
        FieldId::FatherName => u.father_name = Some(value),
        FieldId::MotherName => u.mother_name = Some(value),
        FieldId::Ancestor(lineage, i, which) => {
            let mut entries = form.lineage(lineage).to_vec();
            let Some(entry) = entries.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            match which {
                AncestorField::Name => entry.name = value,
                AncestorField::WhatsappNo => entry.whatsapp_no = value,
            }
            u = FormUpdate::lineage(lineage, entries);
        }
        FieldId::Wife(i, which) => {
            let mut wives = form.wives.clone();
            let Some(wife) = wives.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            if !set_wife_text(wife, which, value) {
                return FieldOutcome::Unchanged;
            }
            u.wives = Some(wives);
        }
        FieldId::Child(i, which) => {
            let mut children = form.children.clone();
            let Some(child) = children.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            match (which, &mut child.status) {
                (ChildField::Name, _) => child.name = value,
                (ChildField::Age, _) => child.age = value,
                (ChildField::WhatsappNo, _) => child.whatsapp_no = value,
                (ChildField::CourseDetails, ChildStatus::Studying { course_details }) => {
                    *course_details = value
                }
                (ChildField::WorkDetails, ChildStatus::Working { work_details }) => {
                    *work_details = value
                }
                _ => return FieldOutcome::Unchanged,
            }
            u = FormUpdate::children(children);
        }
        FieldId::GrandFatherName => u.grand_father_name = Some(value),
        FieldId::GreatGrandFatherName => u.great_grand_father_name = Some(value),
        FieldId::Generation(i, which) => {
            let mut entries = form.additional_generation.clone();
            let Some(entry) = entries.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            match which {
                GenerationField::Name => entry.name = value,
                GenerationField::Relation => entry.relation = value,
            }
            u.additional_generation = Some(entries);
        }
        FieldId::MobileNo => u = FormUpdate::mobile_no(form, value),
        FieldId::AdditionalMobileNo => u.additional_mobile_no = Some(value),
        FieldId::WhatsappNo => u = FormUpdate::whatsapp_no(form, value),
        FieldId::MailId => u.mail_id = Some(value),
        FieldId::Address => u.address = Some(value),
        FieldId::ProfilePhoto => u.profile_photo = Some(Attachment::from_input(&value)),
        FieldId::FamilyPhoto => u.family_photo = Some(Attachment::from_input(&value)),
        FieldId::Document(i) => {
            let mut documents = form.documents.clone();
            let Some(slot) = documents.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            *slot = Attachment::from_input(&value).unwrap_or_default();
            u.documents = Some(documents);
        }
        _ => return FieldOutcome::Unchanged,
    }
    update(u)
}

fn set_wife_text(wife: &mut Wife, which: WifeField, value: String) -> bool {
    match (which, &mut wife.occupation) {
        (WifeField::Name, _) => wife.name = value,
        (WifeField::BusinessDescription, Occupation::Business { description, .. }) => {
            *description = value
        }
        (WifeField::BusinessAddress, Occupation::Business { address, .. }) => *address = value,
        (WifeField::CompanyName, Occupation::Salaried { company_name, .. }) => {
            *company_name = value
        }
        (WifeField::Designation, Occupation::Salaried { designation, .. }) => *designation = value,
        _ => return false,
    }
    true
}

fn cycle_option(options: &[&str], current: &str, forward: bool) -> String {
    // Position 0 is "nothing selected"
    let len = options.len() + 1;
    let position = options
        .iter()
        .position(|o| *o == current)
        .map(|p| p + 1)
        .unwrap_or(0);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    if next == 0 {
        String::new()
    } else {
        options[next - 1].to_string()
    }
}

fn cycle(field: FieldId, form: &FormState, forward: bool) -> FieldOutcome {
    let mut u = FormUpdate::default();
    match field {
        FieldId::BloodGroup => {
            u.blood_group = Some(cycle_option(field.options(), &form.blood_group, forward))
        }
        FieldId::Profession => u.profession = Some(form.profession.cycle(forward)),
        FieldId::ChildrenCount => {
            let count = if forward {
                form.children_count % MAX_CHILDREN + 1
            } else if form.children_count <= 1 {
                MAX_CHILDREN
            } else {
                form.children_count - 1
            };
            u = FormUpdate::children_count(form, count);
        }
        FieldId::Wife(i, WifeField::Occupation) => {
            let mut wives = form.wives.clone();
            let Some(wife) = wives.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            wife.occupation = wife.occupation.cycle(forward);
            u.wives = Some(wives);
        }
        FieldId::Child(i, which) => {
            let mut children = form.children.clone();
            let Some(child) = children.get_mut(i) else {
                return FieldOutcome::Unchanged;
            };
            match which {
                ChildField::Gender => {
                    child.gender = cycle_option(field.options(), &child.gender, forward)
                }
                ChildField::BloodGroup => {
                    child.blood_group = cycle_option(field.options(), &child.blood_group, forward)
                }
                ChildField::Status => child.status = child.status.cycle(forward),
                _ => return FieldOutcome::Unchanged,
            }
            u = FormUpdate::children(children);
        }
        _ => return FieldOutcome::Unchanged,
    }
    update(u)
}

fn toggle(field: FieldId, form: &FormState) -> FieldOutcome {
    match field {
        FieldId::HasChildren => update(FormUpdate::has_children(!form.has_children)),
        FieldId::SameAsWhatsapp => update(FormUpdate::same_as_whatsapp(
            form,
            !form.same_as_whatsapp,
        )),
        FieldId::HasAdditionalGeneration => update(FormUpdate::has_additional_generation(
            !form.has_additional_generation,
        )),
        _ => FieldOutcome::Unchanged,
    }
}

fn activate(field: FieldId, form: &FormState) -> FieldOutcome {
    let mut u = FormUpdate::default();
    match field {
        FieldId::AddAncestor(lineage) => {
            let mut entries = form.lineage(lineage).to_vec();
            entries.push(Ancestor::default());
            u = FormUpdate::lineage(lineage, entries);
        }
        FieldId::RemoveAncestor(lineage, i) => {
            let mut entries = form.lineage(lineage).to_vec();
            if i >= entries.len() {
                return FieldOutcome::Unchanged;
            }
            entries.remove(i);
            u = FormUpdate::lineage(lineage, entries);
        }
        FieldId::AddWife => {
            let mut wives = form.wives.clone();
            wives.push(Wife::default());
            u.wives = Some(wives);
        }
        FieldId::RemoveWife(i) => {
            let mut wives = form.wives.clone();
            if i >= wives.len() {
                return FieldOutcome::Unchanged;
            }
            wives.remove(i);
            u.wives = Some(wives);
        }
        FieldId::AddGeneration => {
            let mut entries = form.additional_generation.clone();
            entries.push(Generation::default());
            u.additional_generation = Some(entries);
        }
        FieldId::RemoveGeneration(i) => {
            let mut entries = form.additional_generation.clone();
            if i >= entries.len() {
                return FieldOutcome::Unchanged;
            }
            entries.remove(i);
            u.additional_generation = Some(entries);
        }
        FieldId::AddDocument => {
            let mut documents = form.documents.clone();
            documents.push(Attachment::default());
            u.documents = Some(documents);
        }
        FieldId::RemoveDocument(i) => {
            let mut documents = form.documents.clone();
            if i >= documents.len() {
                return FieldOutcome::Unchanged;
            }
            documents.remove(i);
            u.documents = Some(documents);
        }
        FieldId::SaveDocument => return FieldOutcome::SaveDocument,
        FieldId::Submit => return FieldOutcome::Submit,
        _ => return FieldOutcome::Unchanged,
    }
    update(u)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(form: &mut FormState, field: FieldId, edit: FieldEdit) -> FieldOutcome {
        let outcome = apply_edit(field, form, edit);
        if let FieldOutcome::Update(update) = &outcome {
            update.clone().merge_into(form);
        }
        outcome
    }

    fn type_text(form: &mut FormState, field: FieldId, text: &str) {
        for c in text.chars() {
            run(form, field, FieldEdit::Insert(c));
        }
    }

    mod applicability {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_personal_shows_profession_details_by_variant() {
            let mut form = FormState::default();
            let fields = step_fields(Step::Personal, &form);
            assert!(!fields.contains(&FieldId::BusinessDescription));
            assert!(!fields.contains(&FieldId::CompanyName));

            run(&mut form, FieldId::Profession, FieldEdit::Cycle { forward: true });
            let fields = step_fields(Step::Personal, &form);
            assert!(fields.contains(&FieldId::BusinessDescription));
            assert!(!fields.contains(&FieldId::CompanyName));

            run(&mut form, FieldId::Profession, FieldEdit::Cycle { forward: true });
            let fields = step_fields(Step::Personal, &form);
            assert!(!fields.contains(&FieldId::BusinessDescription));
            assert!(fields.contains(&FieldId::Designation));
        }

        #[test]
        fn test_family_children_fields_follow_gate() {
            let mut form = FormState::default();
            let fields = step_fields(Step::Family, &form);
            assert!(fields.contains(&FieldId::HasChildren));
            assert!(!fields.contains(&FieldId::ChildrenCount));

            run(&mut form, FieldId::HasChildren, FieldEdit::Activate);
            let fields = step_fields(Step::Family, &form);
            assert!(fields.contains(&FieldId::ChildrenCount));
            assert!(fields.contains(&FieldId::Child(0, ChildField::Status)));
            assert!(!fields.contains(&FieldId::Child(0, ChildField::CourseDetails)));
            assert!(!fields.contains(&FieldId::Child(0, ChildField::WorkDetails)));
        }

        #[test]
        fn test_child_status_selects_detail_field() {
            let mut form = FormState::default();
            run(&mut form, FieldId::HasChildren, FieldEdit::Activate);
            let status = FieldId::Child(0, ChildField::Status);

            run(&mut form, status, FieldEdit::Cycle { forward: true });
            let fields = step_fields(Step::Family, &form);
            assert!(fields.contains(&FieldId::Child(0, ChildField::CourseDetails)));
            assert!(!fields.contains(&FieldId::Child(0, ChildField::WorkDetails)));

            run(&mut form, status, FieldEdit::Cycle { forward: true });
            let fields = step_fields(Step::Family, &form);
            assert!(!fields.contains(&FieldId::Child(0, ChildField::CourseDetails)));
            assert!(fields.contains(&FieldId::Child(0, ChildField::WorkDetails)));
        }

        #[test]
        fn test_generation_entries_hidden_until_enabled() {
            let mut form = FormState::default();
            assert!(!step_fields(Step::Generations, &form).contains(&FieldId::AddGeneration));
            run(&mut form, FieldId::HasAdditionalGeneration, FieldEdit::Activate);
            let fields = step_fields(Step::Generations, &form);
            assert!(fields.contains(&FieldId::Generation(0, GenerationField::Name)));
            assert!(fields.contains(&FieldId::AddGeneration));
        }

        #[test]
        fn test_review_offers_actions() {
            let fields = step_fields(Step::Review, &FormState::default());
            assert_eq!(fields, vec![FieldId::SaveDocument, FieldId::Submit]);
        }

        #[test]
        fn test_every_step_has_fields() {
            let form = FormState::default();
            for step in Step::ALL {
                assert!(!step_fields(step, &form).is_empty(), "{step:?} has no fields");
            }
        }
    }

    mod text_edits {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_and_backspace() {
            let mut form = FormState::default();
            type_text(&mut form, FieldId::Name, "Ravi");
            assert_eq!(form.name, "Ravi");
            run(&mut form, FieldId::Name, FieldEdit::Backspace);
            assert_eq!(form.name, "Rav");
            run(&mut form, FieldId::Name, FieldEdit::Clear);
            assert_eq!(form.name, "");
        }

        #[test]
        fn test_backspace_on_empty_is_unchanged() {
            let form = FormState::default();
            assert_eq!(
                apply_edit(FieldId::Name, &form, FieldEdit::Backspace),
                FieldOutcome::Unchanged
            );
        }

        #[test]
        fn test_number_field_rejects_letters() {
            let mut form = FormState::default();
            type_text(&mut form, FieldId::Age, "4a2");
            assert_eq!(form.age, "42");
        }

        #[test]
        fn test_tamil_text_is_accepted() {
            let mut form = FormState::default();
            type_text(&mut form, FieldId::Cast, "கூட்டம்");
            assert_eq!(form.cast, "கூட்டம்");
        }

        #[test]
        fn test_multiline_enter_adds_newline() {
            let mut form = FormState::default();
            type_text(&mut form, FieldId::Address, "12 Car Street");
            run(&mut form, FieldId::Address, FieldEdit::Activate);
            type_text(&mut form, FieldId::Address, "Salem");
            assert_eq!(form.address, "12 Car Street\nSalem");
        }

        #[test]
        fn test_profession_detail_ignored_for_other_variant() {
            let form = FormState::default();
            assert_eq!(
                apply_edit(FieldId::CompanyName, &form, FieldEdit::Insert('x')),
                FieldOutcome::Unchanged
            );
        }

        #[test]
        fn test_mobile_typing_keeps_whatsapp_synced() {
            let mut form = FormState::default();
            run(&mut form, FieldId::SameAsWhatsapp, FieldEdit::Activate);
            type_text(&mut form, FieldId::MobileNo, "9999999999");
            assert_eq!(form.whatsapp_no, "9999999999");
            assert_eq!(
                apply_edit(FieldId::WhatsappNo, &form, FieldEdit::Insert('1')),
                FieldOutcome::Unchanged
            );
        }

        #[test]
        fn test_photo_path_typed_and_cleared() {
            let mut form = FormState::default();
            type_text(&mut form, FieldId::ProfilePhoto, "/tmp/a.png");
            assert_eq!(
                form.profile_photo.as_ref().map(|a| a.file_name()),
                Some("a.png".to_string())
            );
            run(&mut form, FieldId::ProfilePhoto, FieldEdit::Clear);
            assert!(form.profile_photo.is_none());
        }
    }

    mod list_edits {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_and_edit_wife_occupation_details() {
            let mut form = FormState::default();
            run(&mut form, FieldId::AddWife, FieldEdit::Activate);
            type_text(&mut form, FieldId::Wife(0, WifeField::Name), "Uma");
            // Unset -> Housewife -> Business
            let occupation = FieldId::Wife(0, WifeField::Occupation);
            run(&mut form, occupation, FieldEdit::Cycle { forward: true });
            run(&mut form, occupation, FieldEdit::Cycle { forward: true });
            type_text(
                &mut form,
                FieldId::Wife(0, WifeField::BusinessDescription),
                "Dairy",
            );
            assert_eq!(
                form.wives[0],
                Wife {
                    name: "Uma".to_string(),
                    occupation: Occupation::Business {
                        description: "Dairy".to_string(),
                        address: String::new(),
                    },
                }
            );
            assert_eq!(
                apply_edit(
                    FieldId::Wife(0, WifeField::CompanyName),
                    &form,
                    FieldEdit::Insert('x')
                ),
                FieldOutcome::Unchanged
            );
        }

        #[test]
        fn test_remove_entry_by_index() {
            let mut form = FormState::default();
            for _ in 0..3 {
                run(
                    &mut form,
                    FieldId::AddAncestor(Lineage::GreatGrandMothers),
                    FieldEdit::Activate,
                );
            }
            type_text(
                &mut form,
                FieldId::Ancestor(Lineage::GreatGrandMothers, 2, AncestorField::Name),
                "C",
            );
            run(
                &mut form,
                FieldId::RemoveAncestor(Lineage::GreatGrandMothers, 0),
                FieldEdit::Activate,
            );
            assert_eq!(form.great_grand_mothers.len(), 2);
            assert_eq!(form.great_grand_mothers[1].name, "C");
        }

        #[test]
        fn test_remove_out_of_range_is_unchanged() {
            let form = FormState::default();
            assert_eq!(
                apply_edit(FieldId::RemoveWife(3), &form, FieldEdit::Activate),
                FieldOutcome::Unchanged
            );
        }

        #[test]
        fn test_children_count_by_digit_and_cycle() {
            let mut form = FormState::default();
            run(&mut form, FieldId::HasChildren, FieldEdit::Activate);
            run(&mut form, FieldId::ChildrenCount, FieldEdit::Insert('3'));
            assert_eq!(form.children_count, 3);
            assert_eq!(form.children.len(), 3);
            run(&mut form, FieldId::ChildrenCount, FieldEdit::Cycle { forward: false });
            assert_eq!(form.children_count, 2);
            run(&mut form, FieldId::ChildrenCount, FieldEdit::Cycle { forward: false });
            run(&mut form, FieldId::ChildrenCount, FieldEdit::Cycle { forward: false });
            assert_eq!(form.children_count, MAX_CHILDREN);
            assert!(form.invariant_violations().is_empty());
        }

        #[test]
        fn test_document_slots() {
            let mut form = FormState::default();
            run(&mut form, FieldId::AddDocument, FieldEdit::Activate);
            assert_eq!(form.documents.len(), 1);
            assert!(!form.documents[0].is_selected());
            type_text(&mut form, FieldId::Document(0), "/tmp/id.pdf");
            assert!(form.documents[0].is_selected());
            run(&mut form, FieldId::RemoveDocument(0), FieldEdit::Activate);
            assert!(form.documents.is_empty());
        }
    }

    mod choices {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blood_group_cycles_through_blank() {
            let mut form = FormState::default();
            run(&mut form, FieldId::BloodGroup, FieldEdit::Cycle { forward: true });
            assert_eq!(form.blood_group, "A+");
            run(&mut form, FieldId::BloodGroup, FieldEdit::Cycle { forward: false });
            assert_eq!(form.blood_group, "");
            run(&mut form, FieldId::BloodGroup, FieldEdit::Cycle { forward: false });
            assert_eq!(form.blood_group, "O-");
        }

        #[test]
        fn test_review_actions_map_to_outcomes() {
            let form = FormState::default();
            assert_eq!(
                apply_edit(FieldId::Submit, &form, FieldEdit::Activate),
                FieldOutcome::Submit
            );
            assert_eq!(
                apply_edit(FieldId::SaveDocument, &form, FieldEdit::Activate),
                FieldOutcome::SaveDocument
            );
            assert_eq!(
                apply_edit(FieldId::Submit, &form, FieldEdit::Insert('s')),
                FieldOutcome::Unchanged
            );
        }
    }
}
