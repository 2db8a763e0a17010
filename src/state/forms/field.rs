//! Field identifiers for every editable cell of the registration record

use crate::state::registration::{
    generation_ordinal, Attachment, ChildStatus, FormState, Lineage, Occupation, Profession,
    BLOOD_GROUPS, GENDERS,
};

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Digits only
    Number,
    /// Digits, `+`, `-` and spaces
    Phone,
    /// Left/Right cycles through fixed options
    Choice,
    /// Space/Enter flips a yes/no gate
    Toggle,
    /// File path typed by the user
    Path,
    /// Enter triggers an action (add/remove entry, submit)
    Action,
}

impl FieldKind {
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Multiline | Self::Number | Self::Phone | Self::Path
        )
    }

    /// Whether `c` may be typed into a field of this kind
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            Self::Text | Self::Multiline | Self::Path => !c.is_control(),
            Self::Number => c.is_ascii_digit(),
            Self::Phone => c.is_ascii_digit() || matches!(c, '+' | '-' | ' '),
            Self::Choice | Self::Toggle | Self::Action => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AncestorField {
    Name,
    WhatsappNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WifeField {
    Name,
    Occupation,
    BusinessDescription,
    BusinessAddress,
    CompanyName,
    Designation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildField {
    Name,
    Age,
    Gender,
    BloodGroup,
    WhatsappNo,
    Status,
    CourseDetails,
    WorkDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationField {
    Name,
    Relation,
}

/// File types offered for the photo fields
const PHOTO_TYPES: &str = "image file";
/// File types offered for supporting documents
const DOCUMENT_TYPES: &str = "pdf, doc, docx, jpg, jpeg, png";

/// One editable cell (or list action) of [`FormState`]. Indexes are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Personal
    Name,
    Age,
    BloodGroup,
    Cast,
    Profession,
    BusinessDescription,
    BusinessAddress,
    CompanyName,
    Designation,

    // Family
    FatherName,
    MotherName,
    Ancestor(Lineage, usize, AncestorField),
    AddAncestor(Lineage),
    RemoveAncestor(Lineage, usize),
    Wife(usize, WifeField),
    AddWife,
    RemoveWife(usize),
    HasChildren,
    ChildrenCount,
    Child(usize, ChildField),

    // Generations
    GrandFatherName,
    GreatGrandFatherName,
    HasAdditionalGeneration,
    Generation(usize, GenerationField),
    AddGeneration,
    RemoveGeneration(usize),

    // Contact
    MobileNo,
    AdditionalMobileNo,
    SameAsWhatsapp,
    WhatsappNo,
    MailId,
    Address,

    // Documents
    ProfilePhoto,
    FamilyPhoto,
    Document(usize),
    AddDocument,
    RemoveDocument(usize),

    // Review
    SaveDocument,
    Submit,
}

impl FieldId {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Age => FieldKind::Number,
            Self::BloodGroup | Self::Profession | Self::ChildrenCount => FieldKind::Choice,
            Self::Wife(_, WifeField::Occupation) => FieldKind::Choice,
            Self::Child(_, ChildField::Age) => FieldKind::Number,
            Self::Child(_, ChildField::Gender | ChildField::BloodGroup | ChildField::Status) => {
                FieldKind::Choice
            }
            Self::Child(_, ChildField::WhatsappNo)
            | Self::Ancestor(_, _, AncestorField::WhatsappNo)
            | Self::MobileNo
            | Self::AdditionalMobileNo
            | Self::WhatsappNo => FieldKind::Phone,
            Self::HasChildren | Self::HasAdditionalGeneration | Self::SameAsWhatsapp => {
                FieldKind::Toggle
            }
            Self::Address | Self::BusinessAddress | Self::Wife(_, WifeField::BusinessAddress) => {
                FieldKind::Multiline
            }
            Self::ProfilePhoto | Self::FamilyPhoto | Self::Document(_) => FieldKind::Path,
            Self::AddAncestor(_)
            | Self::RemoveAncestor(..)
            | Self::AddWife
            | Self::RemoveWife(_)
            | Self::AddGeneration
            | Self::RemoveGeneration(_)
            | Self::AddDocument
            | Self::RemoveDocument(_)
            | Self::SaveDocument
            | Self::Submit => FieldKind::Action,
            _ => FieldKind::Text,
        }
    }

    /// Bilingual label; entries of repeated records carry their 1-based number
    pub fn label(&self) -> String {
        match self {
            Self::Name => "Full Name / முழு பெயர் *".to_string(),
            Self::Age => "Age / வயது *".to_string(),
            Self::BloodGroup => "Blood Group / இரத்த வகை *".to_string(),
            Self::Cast => "பட்டப்பெயர் / கூட்டம் (Cast) *".to_string(),
            Self::Profession => "Profession / தொழில் *".to_string(),
            Self::BusinessDescription => "Business Description / தொழில் விவரம்".to_string(),
            Self::BusinessAddress => "Business Address / தொழில் முகவரி".to_string(),
            Self::CompanyName => "Company Name / நிறுவனத்தின் பெயர்".to_string(),
            Self::Designation => "Designation / பதவி".to_string(),
            Self::FatherName => "Father's Name / தந்தை பெயர் *".to_string(),
            Self::MotherName => "Mother's Name / தாய் பெயர் *".to_string(),
            Self::Ancestor(lineage, i, field) => {
                let what = match field {
                    AncestorField::Name => "Name / பெயர்",
                    AncestorField::WhatsappNo => "WhatsApp / வாட்ஸ்அப்",
                };
                format!("{} {} · {}", lineage.label(), i + 1, what)
            }
            Self::AddAncestor(lineage) => format!("+ Add {}", lineage.label()),
            Self::RemoveAncestor(lineage, i) => format!("- Remove {} {}", lineage.label(), i + 1),
            Self::Wife(i, field) => {
                let what = match field {
                    WifeField::Name => "Name / பெயர்",
                    WifeField::Occupation => "Occupation / தொழில்",
                    WifeField::BusinessDescription => "Business Description / தொழில் விவரம்",
                    WifeField::BusinessAddress => "Business Address / தொழில் முகவரி",
                    WifeField::CompanyName => "Company Name / நிறுவனத்தின் பெயர்",
                    WifeField::Designation => "Designation / பதவி",
                };
                format!("Wife {} / மனைவி {} · {}", i + 1, i + 1, what)
            }
            Self::AddWife => "+ Add Wife / மனைவியைச் சேர்".to_string(),
            Self::RemoveWife(i) => format!("- Remove Wife {}", i + 1),
            Self::HasChildren => "Do you have children? / குழந்தைகள் உள்ளனரா?".to_string(),
            Self::ChildrenCount => "Number of children / குழந்தைகளின் எண்ணிக்கை".to_string(),
            Self::Child(i, field) => {
                let what = match field {
                    ChildField::Name => "Name / பெயர் *",
                    ChildField::Age => "Age / வயது *",
                    ChildField::Gender => "Gender / பாலினம் *",
                    ChildField::BloodGroup => "Blood Group / இரத்த வகை *",
                    ChildField::WhatsappNo => "WhatsApp / வாட்ஸ்அப்",
                    ChildField::Status => "Status / நிலை",
                    ChildField::CourseDetails => "Course Details / படிப்பு விவரங்கள்",
                    ChildField::WorkDetails => "Work Details / வேலை விவரங்கள்",
                };
                format!("Child {} / குழந்தை {} · {}", i + 1, i + 1, what)
            }
            Self::GrandFatherName => "Grandfather's Name / தாத்தா பெயர்".to_string(),
            Self::GreatGrandFatherName => {
                "Great Grandfather's Name / கொள்ளுத் தாத்தா பெயர்".to_string()
            }
            Self::HasAdditionalGeneration => {
                "I know about previous generations / முந்தைய தலைமுறைகள்".to_string()
            }
            Self::Generation(i, field) => {
                let what = match field {
                    GenerationField::Name => "Name / பெயர்",
                    GenerationField::Relation => "Relation / உறவு",
                };
                format!("{} · {}", generation_ordinal(*i), what)
            }
            Self::AddGeneration => "+ Add Generation / தலைமுறையைச் சேர்".to_string(),
            Self::RemoveGeneration(i) => format!("- Remove {}", generation_ordinal(*i)),
            Self::MobileNo => "Mobile Number / மொபைல் எண் *".to_string(),
            Self::AdditionalMobileNo => {
                "Additional Mobile Number / கூடுதல் மொபைல் எண்".to_string()
            }
            Self::SameAsWhatsapp => {
                "WhatsApp same as mobile / வாட்ஸ்அப் எண் மொபைல் எண்ணுக்கு சமம்".to_string()
            }
            Self::WhatsappNo => "WhatsApp Number / வாட்ஸ்அப் எண் *".to_string(),
            Self::MailId => "Email ID / மின்னஞ்சல் முகவரி *".to_string(),
            Self::Address => "Address / முகவரி *".to_string(),
            Self::ProfilePhoto => {
                format!("Profile Photo ({PHOTO_TYPES}) / சுயவிவரப் புகைப்படம் *")
            }
            Self::FamilyPhoto => format!("Family Photo ({PHOTO_TYPES}) / குடும்பப் புகைப்படம்"),
            Self::Document(i) => {
                format!("Document {} ({DOCUMENT_TYPES}) / ஆவணம் {}", i + 1, i + 1)
            }
            Self::AddDocument => "+ Add Document / ஆவணத்தைச் சேர்".to_string(),
            Self::RemoveDocument(i) => format!("- Remove Document {}", i + 1),
            Self::SaveDocument => "Save PDF / PDF சேமி".to_string(),
            Self::Submit => "Submit / சமர்ப்பி".to_string(),
        }
    }

    /// Display value of the field in `form`. Choice fields show their label.
    pub fn value(&self, form: &FormState) -> String {
        match self {
            Self::Name => form.name.clone(),
            Self::Age => form.age.clone(),
            Self::BloodGroup => form.blood_group.clone(),
            Self::Cast => form.cast.clone(),
            Self::Profession => form.profession.label().to_string(),
            Self::BusinessDescription => match &form.profession {
                Profession::Business { description, .. } => description.clone(),
                _ => String::new(),
            },
            Self::BusinessAddress => match &form.profession {
                Profession::Business { address, .. } => address.clone(),
                _ => String::new(),
            },
            Self::CompanyName => match &form.profession {
                Profession::Salaried { company_name, .. } => company_name.clone(),
                _ => String::new(),
            },
            Self::Designation => match &form.profession {
                Profession::Salaried { designation, .. } => designation.clone(),
                _ => String::new(),
            },
            Self::FatherName => form.father_name.clone(),
            Self::MotherName => form.mother_name.clone(),
            Self::Ancestor(lineage, i, field) => form
                .lineage(*lineage)
                .get(*i)
                .map(|a| match field {
                    AncestorField::Name => a.name.clone(),
                    AncestorField::WhatsappNo => a.whatsapp_no.clone(),
                })
                .unwrap_or_default(),
            Self::Wife(i, field) => form
                .wives
                .get(*i)
                .map(|w| wife_value(&w.name, &w.occupation, *field))
                .unwrap_or_default(),
            Self::HasChildren => yes_no(form.has_children),
            Self::ChildrenCount => form.children_count.to_string(),
            Self::Child(i, field) => form
                .children
                .get(*i)
                .map(|c| match field {
                    ChildField::Name => c.name.clone(),
                    ChildField::Age => c.age.clone(),
                    ChildField::Gender => c.gender.clone(),
                    ChildField::BloodGroup => c.blood_group.clone(),
                    ChildField::WhatsappNo => c.whatsapp_no.clone(),
                    ChildField::Status => c.status.label().to_string(),
                    ChildField::CourseDetails => match &c.status {
                        ChildStatus::Studying { course_details } => course_details.clone(),
                        _ => String::new(),
                    },
                    ChildField::WorkDetails => match &c.status {
                        ChildStatus::Working { work_details } => work_details.clone(),
                        _ => String::new(),
                    },
                })
                .unwrap_or_default(),
            Self::GrandFatherName => form.grand_father_name.clone(),
            Self::GreatGrandFatherName => form.great_grand_father_name.clone(),
            Self::HasAdditionalGeneration => yes_no(form.has_additional_generation),
            Self::Generation(i, field) => form
                .additional_generation
                .get(*i)
                .map(|g| match field {
                    GenerationField::Name => g.name.clone(),
                    GenerationField::Relation => g.relation.clone(),
                })
                .unwrap_or_default(),
            Self::MobileNo => form.mobile_no.clone(),
            Self::AdditionalMobileNo => form.additional_mobile_no.clone(),
            Self::SameAsWhatsapp => yes_no(form.same_as_whatsapp),
            Self::WhatsappNo => form.whatsapp_no.clone(),
            Self::MailId => form.mail_id.clone(),
            Self::Address => form.address.clone(),
            Self::ProfilePhoto => attachment_value(form.profile_photo.as_ref()),
            Self::FamilyPhoto => attachment_value(form.family_photo.as_ref()),
            Self::Document(i) => attachment_value(form.documents.get(*i)),
            Self::AddAncestor(_)
            | Self::RemoveAncestor(..)
            | Self::AddWife
            | Self::RemoveWife(_)
            | Self::AddGeneration
            | Self::RemoveGeneration(_)
            | Self::AddDocument
            | Self::RemoveDocument(_)
            | Self::SaveDocument
            | Self::Submit => String::new(),
        }
    }

    /// Whether the field is shown but cannot be edited in the current state
    pub fn is_read_only(&self, form: &FormState) -> bool {
        matches!(self, Self::WhatsappNo) && form.same_as_whatsapp
    }

    /// Options offered by choice fields backed by plain strings
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::BloodGroup | Self::Child(_, ChildField::BloodGroup) => BLOOD_GROUPS,
            Self::Child(_, ChildField::Gender) => GENDERS,
            _ => &[],
        }
    }
}

fn wife_value(name: &str, occupation: &Occupation, field: WifeField) -> String {
    match (field, occupation) {
        (WifeField::Name, _) => name.to_string(),
        (WifeField::Occupation, o) => o.label().to_string(),
        (WifeField::BusinessDescription, Occupation::Business { description, .. }) => {
            description.clone()
        }
        (WifeField::BusinessAddress, Occupation::Business { address, .. }) => address.clone(),
        (WifeField::CompanyName, Occupation::Salaried { company_name, .. }) => {
            company_name.clone()
        }
        (WifeField::Designation, Occupation::Salaried { designation, .. }) => designation.clone(),
        _ => String::new(),
    }
}

fn yes_no(value: bool) -> String {
    let label = if value { "Yes / ஆம்" } else { "No / இல்லை" };
    label.to_string()
}

fn attachment_value(attachment: Option<&Attachment>) -> String {
    attachment
        .map(|a| a.path.display().to_string())
        .unwrap_or_default()
}
