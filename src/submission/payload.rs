//! Flattening of the form into multipart field names
//!
//! Scalars keep their camelCase names. Repeated records become
//! `{prefix}_{n}_{field}` with a 1-based `n`, and detail keys are only
//! emitted for the variant that is actually selected.

use crate::state::{
    Attachment, ChildStatus, FormState, Generation, Lineage, Occupation, Profession,
};
use std::path::PathBuf;

/// A file to upload under a form field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: String,
    pub path: PathBuf,
}

/// Text fields and file references sent to the webhook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl SubmissionPayload {
    pub fn from_form(form: &FormState) -> Self {
        let mut p = Self::default();

        p.text("name", &form.name);
        p.text("age", &form.age);
        p.text("bloodGroup", &form.blood_group);
        p.text("cast", &form.cast);
        p.text("profession", form.profession.key());
        match &form.profession {
            Profession::Business {
                description,
                address,
            } => {
                p.text("businessDescription", description);
                p.text("businessAddress", address);
            }
            Profession::Salaried {
                company_name,
                designation,
            } => {
                p.text("companyName", company_name);
                p.text("designation", designation);
            }
            Profession::Unset => {}
        }

        p.text("fatherName", &form.father_name);
        p.text("motherName", &form.mother_name);
        p.lineage(form, Lineage::Mothers, "motherCount");

        for (i, wife) in form.wives.iter().enumerate() {
            let key = |field: &str| format!("wife_{}_{field}", i + 1);
            p.text(key("name"), &wife.name);
            p.text(key("occupation"), wife.occupation.key());
            match &wife.occupation {
                Occupation::Business {
                    description,
                    address,
                } => {
                    p.text(key("businessDescription"), description);
                    p.text(key("businessAddress"), address);
                }
                Occupation::Salaried {
                    company_name,
                    designation,
                } => {
                    p.text(key("companyName"), company_name);
                    p.text(key("designation"), designation);
                }
                Occupation::Unset | Occupation::Housewife => {}
            }
        }
        p.text("wifeCount", form.wives.len().to_string());

        p.text("hasChildren", form.has_children.to_string());
        p.text("childrenCount", form.children_count.to_string());
        if form.has_children {
            for (i, child) in form.children.iter().enumerate() {
                let key = |field: &str| format!("child_{}_{field}", i + 1);
                p.text(key("name"), &child.name);
                p.text(key("age"), &child.age);
                p.text(key("gender"), &child.gender);
                p.text(key("bloodGroup"), &child.blood_group);
                p.text(key("whatsappNo"), &child.whatsapp_no);
                p.text(key("status"), child.status.key());
                match &child.status {
                    ChildStatus::Studying { course_details } => {
                        p.text(key("courseDetails"), course_details)
                    }
                    ChildStatus::Working { work_details } => {
                        p.text(key("workDetails"), work_details)
                    }
                    ChildStatus::Unset => {}
                }
            }
        }

        p.text("grandFatherName", &form.grand_father_name);
        p.lineage(form, Lineage::GrandMothers, "grandMotherCount");
        p.text("greatGrandFatherName", &form.great_grand_father_name);
        p.lineage(form, Lineage::GreatGrandMothers, "greatGrandMotherCount");

        p.text(
            "hasAdditionalGeneration",
            form.has_additional_generation.to_string(),
        );
        let generations: &[Generation] = if form.has_additional_generation {
            form.additional_generation.as_slice()
        } else {
            &[]
        };
        for (i, generation) in generations.iter().enumerate() {
            p.text(format!("generation_{}_name", i + 1), &generation.name);
            p.text(format!("generation_{}_relation", i + 1), &generation.relation);
        }
        p.text("generationCount", generations.len().to_string());

        p.text("mobileNo", &form.mobile_no);
        p.text("additionalMobileNo", &form.additional_mobile_no);
        p.text("sameAsWhatsapp", form.same_as_whatsapp.to_string());
        p.text("whatsappNo", &form.whatsapp_no);
        p.text("mailId", &form.mail_id);
        p.text("address", &form.address);

        p.file("profilePhoto", form.profile_photo.as_ref());
        p.file("familyPhoto", form.family_photo.as_ref());
        let documents: Vec<_> = form.documents.iter().filter(|d| d.is_selected()).collect();
        for (i, document) in documents.iter().enumerate() {
            p.file(format!("document_{}", i + 1), Some(*document));
        }
        p.text("documentCount", documents.len().to_string());

        p
    }

    fn text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    fn file(&mut self, name: impl Into<String>, attachment: Option<&Attachment>) {
        if let Some(attachment) = attachment.filter(|a| a.is_selected()) {
            self.files.push(FilePart {
                name: name.into(),
                path: attachment.path().to_path_buf(),
            });
        }
    }

    fn lineage(&mut self, form: &FormState, lineage: Lineage, count_key: &str) {
        let entries = form.lineage(lineage);
        for (i, ancestor) in entries.iter().enumerate() {
            let prefix = lineage.prefix();
            self.text(format!("{prefix}_{}_name", i + 1), ancestor.name.as_str());
            self.text(
                format!("{prefix}_{}_whatsappNo", i + 1),
                ancestor.whatsapp_no.as_str(),
            );
        }
        self.text(count_key, entries.len().to_string());
    }

    /// Value of a text field, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Multipart names of the attached files
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }
}
