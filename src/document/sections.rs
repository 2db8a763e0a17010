//! Bilingual sections printed in the summary document

use crate::state::{
    generation_ordinal, Ancestor, Attachment, ChildStatus, FormState, Lineage, Occupation,
    Profession,
};

/// Printed in place of any empty value
pub const EMPTY_VALUE: &str = "N/A";

/// One line item of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Field { label: String, value: String },
    /// Small vertical gap between repeated records
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Section {
    fn new(title: &str, title_tamil: &str) -> Self {
        Self {
            title: format!("{title} / {title_tamil}"),
            entries: Vec::new(),
        }
    }

    fn field(&mut self, label: impl Into<String>, value: &str) {
        let value = value.trim();
        self.entries.push(Entry::Field {
            label: label.into(),
            value: if value.is_empty() {
                EMPTY_VALUE.to_string()
            } else {
                value.to_string()
            },
        });
    }

    fn spacer(&mut self) {
        self.entries.push(Entry::Spacer);
    }
}

/// Build the document sections for `form`. The children section only
/// appears when the registrant has children.
pub fn build_sections(form: &FormState) -> Vec<Section> {
    let mut sections = vec![personal(form), family(form)];
    if form.has_children && !form.children.is_empty() {
        sections.push(children(form));
    }
    sections.push(generations(form));
    sections.push(contact(form));
    sections.push(documents(form));
    sections
}

fn personal(form: &FormState) -> Section {
    let mut s = Section::new("Personal Information", "தனிப்பட்ட தகவல்");
    s.field("Name / பெயர்", &form.name);
    s.field("Age / வயது", &form.age);
    s.field("Blood Group / இரத்த வகை", &form.blood_group);
    s.field("பட்டப்பெயர் / கூட்டம்", &form.cast);
    s.field("Profession / தொழில்", profession_label(&form.profession));
    match &form.profession {
        Profession::Business {
            description,
            address,
        } => {
            s.field("Business Description / தொழில் விவரம்", description);
            s.field("Business Address / தொழில் முகவரி", address);
        }
        Profession::Salaried {
            company_name,
            designation,
        } => {
            s.field("Company Name / நிறுவனத்தின் பெயர்", company_name);
            s.field("Designation / பதவி", designation);
        }
        Profession::Unset => {}
    }
    s
}

fn profession_label(profession: &Profession) -> &'static str {
    if profession.is_set() {
        profession.label()
    } else {
        ""
    }
}

fn family(form: &FormState) -> Section {
    let mut s = Section::new("Family Information", "குடும்ப தகவல்");
    s.field("Father Name / தந்தை பெயர்", &form.father_name);
    s.field("Mother Name / தாய் பெயர்", &form.mother_name);
    ancestors(&mut s, Lineage::Mothers, form.lineage(Lineage::Mothers));

    for (i, wife) in form.wives.iter().enumerate() {
        let n = i + 1;
        s.field(format!("Wife {n} Name / மனைவி {n} பெயர்"), &wife.name);
        let occupation = if wife.occupation.is_set() {
            wife.occupation.label()
        } else {
            ""
        };
        s.field("Occupation / தொழில்", occupation);
        match &wife.occupation {
            Occupation::Business {
                description,
                address,
            } => {
                s.field("Business Description / தொழில் விவரம்", description);
                s.field("Business Address / தொழில் முகவரி", address);
            }
            Occupation::Salaried {
                company_name,
                designation,
            } => {
                s.field("Company Name / நிறுவனத்தின் பெயர்", company_name);
                s.field("Designation / பதவி", designation);
            }
            Occupation::Unset | Occupation::Housewife => {}
        }
    }
    s
}

fn ancestors(s: &mut Section, lineage: Lineage, entries: &[Ancestor]) {
    for (i, ancestor) in entries.iter().enumerate() {
        s.field(format!("{} {}", lineage.label(), i + 1), &ancestor.name);
        s.field("WhatsApp Number / வாட்ஸ்அப் எண்", &ancestor.whatsapp_no);
    }
}

fn children(form: &FormState) -> Section {
    let mut s = Section::new("Children Information", "குழந்தைகள் தகவல்");
    for (i, child) in form.children.iter().enumerate() {
        let n = i + 1;
        s.field(format!("Child {n} Name / குழந்தை {n} பெயர்"), &child.name);
        s.field("Age / வயது", &child.age);
        s.field("Gender / பாலினம்", &child.gender);
        s.field("Blood Group / இரத்த வகை", &child.blood_group);
        s.field("WhatsApp Number / வாட்ஸ்அப் எண்", &child.whatsapp_no);
        let status = if child.status.is_set() {
            child.status.label()
        } else {
            ""
        };
        s.field("Status / நிலை", status);
        match &child.status {
            ChildStatus::Studying { course_details } => {
                s.field("Course Details / படிப்பு விவரங்கள்", course_details)
            }
            ChildStatus::Working { work_details } => {
                s.field("Work Details / வேலை விவரங்கள்", work_details)
            }
            ChildStatus::Unset => {}
        }
        s.spacer();
    }
    s
}

fn generations(form: &FormState) -> Section {
    let mut s = Section::new("Generation Information", "தலைமுறை தகவல்");
    s.field("Grandfather Name / தாத்தா பெயர்", &form.grand_father_name);
    ancestors(&mut s, Lineage::GrandMothers, form.lineage(Lineage::GrandMothers));
    s.field(
        "Great Grandfather Name / கொள்ளுத் தாத்தா பெயர்",
        &form.great_grand_father_name,
    );
    ancestors(
        &mut s,
        Lineage::GreatGrandMothers,
        form.lineage(Lineage::GreatGrandMothers),
    );
    if form.has_additional_generation {
        for (i, generation) in form.additional_generation.iter().enumerate() {
            s.field(generation_ordinal(i), &generation.name);
            s.field("Relation / உறவு", &generation.relation);
        }
    }
    s
}

fn contact(form: &FormState) -> Section {
    let mut s = Section::new("Contact Information", "தொடர்பு தகவல்");
    s.field("Mobile Number / மொபைல் எண்", &form.mobile_no);
    s.field(
        "Additional Mobile / கூடுதல் மொபைல் எண்",
        &form.additional_mobile_no,
    );
    s.field("WhatsApp Number / வாட்ஸ்அப் எண்", &form.whatsapp_no);
    s.field("Email / மின்னஞ்சல்", &form.mail_id);
    s.field("Address / முகவரி", &form.address);
    s
}

fn documents(form: &FormState) -> Section {
    let mut s = Section::new("Documents", "ஆவணங்கள்");
    s.field(
        "Profile Photo / சுயவிவரப் புகைப்படம்",
        &attachment_name(form.profile_photo.as_ref()),
    );
    s.field(
        "Family Photo / குடும்பப் புகைப்படம்",
        &attachment_name(form.family_photo.as_ref()),
    );
    for (i, document) in form.documents.iter().enumerate() {
        let n = i + 1;
        s.field(
            format!("Document {n} / ஆவணம் {n}"),
            &attachment_name(Some(document)),
        );
    }
    s
}

fn attachment_name(attachment: Option<&Attachment>) -> String {
    attachment
        .filter(|a| a.is_selected())
        .map(Attachment::file_name)
        .unwrap_or_default()
}
