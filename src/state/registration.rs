//! Registration record and its repeated sub-records

use std::path::{Path, PathBuf};

/// Most children the family step offers
pub const MAX_CHILDREN: usize = 8;

/// Blood groups offered by every blood-group selector
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Genders offered for children
pub const GENDERS: &[&str] = &["male", "female"];

/// Profession of the registrant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Profession {
    #[default]
    Unset,
    Business {
        description: String,
        address: String,
    },
    Salaried {
        company_name: String,
        designation: String,
    },
}

impl Profession {
    /// Wire value used in the submission payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Business { .. } => "business",
            Self::Salaried { .. } => "salaried",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Not selected",
            Self::Business { .. } => "Business / தொழில்",
            Self::Salaried { .. } => "Salaried / சம்பளம்",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Cycle to the next variant, dropping the detail fields of the old one
    pub fn cycle(&self, forward: bool) -> Self {
        let business = Self::Business {
            description: String::new(),
            address: String::new(),
        };
        let salaried = Self::Salaried {
            company_name: String::new(),
            designation: String::new(),
        };
        match (self, forward) {
            (Self::Unset, true) | (Self::Salaried { .. }, false) => business,
            (Self::Business { .. }, true) | (Self::Unset, false) => salaried,
            (Self::Salaried { .. }, true) | (Self::Business { .. }, false) => Self::Unset,
        }
    }
}

/// Occupation of a wife
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Occupation {
    #[default]
    Unset,
    Housewife,
    Business {
        description: String,
        address: String,
    },
    Salaried {
        company_name: String,
        designation: String,
    },
}

impl Occupation {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Housewife => "housewife",
            Self::Business { .. } => "business",
            Self::Salaried { .. } => "salaried",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Not selected",
            Self::Housewife => "Housewife / இல்லத்தரசி",
            Self::Business { .. } => "Business / தொழில்",
            Self::Salaried { .. } => "Salaried / சம்பளம்",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn cycle(&self, forward: bool) -> Self {
        let order = [
            Self::Unset,
            Self::Housewife,
            Self::Business {
                description: String::new(),
                address: String::new(),
            },
            Self::Salaried {
                company_name: String::new(),
                designation: String::new(),
            },
        ];
        let current = order
            .iter()
            .position(|o| o.key() == self.key())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        order[next].clone()
    }
}

/// What a child is currently doing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChildStatus {
    #[default]
    Unset,
    Studying {
        course_details: String,
    },
    Working {
        work_details: String,
    },
}

impl ChildStatus {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Studying { .. } => "studying",
            Self::Working { .. } => "working",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Not selected",
            Self::Studying { .. } => "Studying / படிக்கிறார்",
            Self::Working { .. } => "Working / வேலை செய்கிறார்",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn cycle(&self, forward: bool) -> Self {
        let studying = Self::Studying {
            course_details: String::new(),
        };
        let working = Self::Working {
            work_details: String::new(),
        };
        match (self, forward) {
            (Self::Unset, true) | (Self::Working { .. }, false) => studying,
            (Self::Studying { .. }, true) | (Self::Unset, false) => working,
            (Self::Working { .. }, true) | (Self::Studying { .. }, false) => Self::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wife {
    pub name: String,
    pub occupation: Occupation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Child {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_group: String,
    pub whatsapp_no: String,
    pub status: ChildStatus,
}

/// A mother, grandmother or great-grandmother entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ancestor {
    pub name: String,
    pub whatsapp_no: String,
}

/// An ancestor beyond the great-grandparents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Generation {
    pub name: String,
    pub relation: String,
}

/// A file selected for upload, referenced by path until submission.
/// An empty path is a document slot the user has not filled yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attachment {
    pub path: PathBuf,
}

impl Attachment {
    /// Build an attachment from user input; blank input means no file
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            None
        } else {
            Some(Self {
                path: PathBuf::from(input),
            })
        }
    }

    pub fn is_selected(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Which lineage list an [`Ancestor`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lineage {
    Mothers,
    GrandMothers,
    GreatGrandMothers,
}

impl Lineage {
    /// Prefix used for flattened payload keys
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Mothers => "mother",
            Self::GrandMothers => "grandMother",
            Self::GreatGrandMothers => "greatGrandMother",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mothers => "Mother / தாய்",
            Self::GrandMothers => "Grandmother / பாட்டி",
            Self::GreatGrandMothers => "Great Grandmother / கொள்ளுப் பாட்டி",
        }
    }
}

/// Everything the registrant has entered in this session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    // Personal
    pub name: String,
    pub age: String,
    pub blood_group: String,
    pub cast: String,
    pub profession: Profession,

    // Family
    pub father_name: String,
    pub mother_name: String,
    pub mothers: Vec<Ancestor>,
    pub wives: Vec<Wife>,
    pub has_children: bool,
    pub children_count: usize,
    pub children: Vec<Child>,

    // Generations
    pub grand_father_name: String,
    pub grand_mothers: Vec<Ancestor>,
    pub great_grand_father_name: String,
    pub great_grand_mothers: Vec<Ancestor>,
    pub has_additional_generation: bool,
    pub additional_generation: Vec<Generation>,

    // Contact
    pub mobile_no: String,
    pub additional_mobile_no: String,
    pub same_as_whatsapp: bool,
    pub whatsapp_no: String,
    pub mail_id: String,
    pub address: String,

    // Files
    pub profile_photo: Option<Attachment>,
    pub family_photo: Option<Attachment>,
    pub documents: Vec<Attachment>,
}

impl FormState {
    pub fn lineage(&self, lineage: Lineage) -> &[Ancestor] {
        match lineage {
            Lineage::Mothers => &self.mothers,
            Lineage::GrandMothers => &self.grand_mothers,
            Lineage::GreatGrandMothers => &self.great_grand_mothers,
        }
    }

    /// Name used for generated file names and status messages
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "form"
        } else {
            name
        }
    }

    /// Check the cross-field invariants the gate transitions maintain
    pub fn invariant_violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();
        if !self.has_children && (!self.children.is_empty() || self.children_count != 0) {
            violations.push("children present while has_children is off");
        }
        if self.has_children && self.children_count != self.children.len() {
            violations.push("children_count does not match children");
        }
        if self.same_as_whatsapp && self.whatsapp_no != self.mobile_no {
            violations.push("whatsapp number out of sync with mobile number");
        }
        if !self.has_additional_generation && !self.additional_generation.is_empty() {
            violations.push("additional generations present while disabled");
        }
        violations
    }
}

/// Ordinal label for an additional generation entry; index 0 is the 4th generation
pub fn generation_ordinal(index: usize) -> String {
    let n = index + 4;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix} Generation")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod profession {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycle_forward_visits_all_variants() {
            let start = Profession::Unset;
            let business = start.cycle(true);
            assert_eq!(business.key(), "business");
            let salaried = business.cycle(true);
            assert_eq!(salaried.key(), "salaried");
            assert_eq!(salaried.cycle(true), Profession::Unset);
        }

        #[test]
        fn test_cycle_backward_is_inverse() {
            let p = Profession::Unset.cycle(true);
            assert_eq!(p.cycle(false), Profession::Unset);
        }

        #[test]
        fn test_cycle_drops_previous_details() {
            let p = Profession::Business {
                description: "Textiles".to_string(),
                address: "Madurai".to_string(),
            };
            let back = p.cycle(true).cycle(false);
            assert_eq!(
                back,
                Profession::Business {
                    description: String::new(),
                    address: String::new(),
                }
            );
        }
    }

    mod occupation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycle_wraps_both_ways() {
            assert_eq!(Occupation::Unset.cycle(true), Occupation::Housewife);
            assert_eq!(Occupation::Unset.cycle(false).key(), "salaried");
            let salaried = Occupation::Salaried {
                company_name: "TVS".to_string(),
                designation: "Clerk".to_string(),
            };
            assert_eq!(salaried.cycle(true), Occupation::Unset);
        }
    }

    mod child_status {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycle_order() {
            let s = ChildStatus::Unset.cycle(true);
            assert_eq!(s.key(), "studying");
            assert_eq!(s.cycle(true).key(), "working");
            assert!(!s.cycle(true).cycle(true).is_set());
        }
    }

    mod attachment {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_input_is_none() {
            assert!(Attachment::from_input("   ").is_none());
        }

        #[test]
        fn test_file_name_from_path() {
            let a = Attachment::from_input("/tmp/photos/me.jpg").unwrap();
            assert_eq!(a.file_name(), "me.jpg");
            assert_eq!(a.path(), Path::new("/tmp/photos/me.jpg"));
            assert!(a.is_selected());
            assert!(!Attachment::default().is_selected());
        }
    }

    #[test]
    fn test_default_form_has_no_violations() {
        assert!(FormState::default().invariant_violations().is_empty());
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut form = FormState::default();
        assert_eq!(form.display_name(), "form");
        form.name = " Murugan ".to_string();
        assert_eq!(form.display_name(), "Murugan");
    }

    #[test]
    fn test_generation_ordinal() {
        assert_eq!(generation_ordinal(0), "4th Generation");
        assert_eq!(generation_ordinal(17), "21st Generation");
        assert_eq!(generation_ordinal(18), "22nd Generation");
        assert_eq!(generation_ordinal(7), "11th Generation");
    }
}
