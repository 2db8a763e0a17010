//! Completion estimate shown in the progress gauge
//!
//! The denominator depends on the state: enabling children or adding a child
//! adds fields before any of them are filled, so the percentage can drop.
//! The value is an approximation of progress, not a monotonic metric.

use super::registration::{ChildStatus, FormState, Occupation, Profession};

/// Running filled/total tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub filled: u32,
    pub total: u32,
}

impl Tally {
    fn field(&mut self, value: &str) {
        self.total += 1;
        if !value.trim().is_empty() {
            self.filled += 1;
        }
    }

    fn flag(&mut self, present: bool) {
        self.total += 1;
        if present {
            self.filled += 1;
        }
    }

    /// Rounded percentage in `0..=100`
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let ratio = f64::from(self.filled.min(self.total)) / f64::from(self.total);
        (ratio * 100.0).round() as u8
    }
}

/// Count filled and applicable fields of `form`
pub fn tally(form: &FormState) -> Tally {
    let mut t = Tally::default();

    t.field(&form.name);
    t.field(&form.age);
    t.field(&form.blood_group);
    t.flag(form.profession.is_set());
    t.field(&form.cast);
    t.field(&form.father_name);
    t.field(&form.mother_name);
    t.field(&form.address);
    t.field(&form.mobile_no);
    t.field(&form.whatsapp_no);
    t.field(&form.mail_id);

    match &form.profession {
        Profession::Business {
            description,
            address,
        } => {
            t.field(description);
            t.field(address);
        }
        Profession::Salaried {
            company_name,
            designation,
        } => {
            t.field(company_name);
            t.field(designation);
        }
        Profession::Unset => {}
    }

    // Wives only count once they have a name
    for wife in form.wives.iter().filter(|w| !w.name.trim().is_empty()) {
        t.flag(true);
        t.flag(wife.occupation.is_set());
        match &wife.occupation {
            Occupation::Business {
                description,
                address,
            } => {
                t.field(description);
                t.field(address);
            }
            Occupation::Salaried {
                company_name,
                designation,
            } => {
                t.field(company_name);
                t.field(designation);
            }
            Occupation::Unset | Occupation::Housewife => {}
        }
    }

    if form.has_children {
        for child in &form.children {
            t.field(&child.name);
            t.field(&child.age);
            t.field(&child.gender);
            t.field(&child.blood_group);
            if child.status.is_set() {
                t.flag(true);
            }
            match &child.status {
                ChildStatus::Studying { course_details } => t.field(course_details),
                ChildStatus::Working { work_details } => t.field(work_details),
                ChildStatus::Unset => {}
            }
        }
    }

    if form.has_additional_generation {
        for generation in &form.additional_generation {
            t.field(&generation.name);
            t.field(&generation.relation);
        }
    }

    t.flag(form.profile_photo.is_some());

    t
}

/// Completion percentage of `form`, `0..=100`
pub fn estimate(form: &FormState) -> u8 {
    tally(form).percent()
}
