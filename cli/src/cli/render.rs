// cli/src/cli/render.rs

// Text rendering of the form and of reference lists. Everything returns a
// String so the interactive loop and the one-shot commands share it.

use std::fmt::Write;

use colored::Colorize;
use intake_lib::input::format_date;
use intake_lib::{
    AcceptedIntake, Doctor, Field, FormErrors, IntakeForm, ReferenceData, SelectOption,
    ToSelectOption,
};

use crate::cli::commands::RefsTarget;

pub fn render_form(form: &IntakeForm) -> String {
    let mut out = String::new();
    let refs = form.refs();
    let values = form.values();

    let _ = writeln!(out, "{}", "Patient intake".bold());
    field_line(&mut out, form, Field::Name, text_value(&values.name));
    field_line(
        &mut out,
        form,
        Field::Birthday,
        values.birthday.map(format_date).unwrap_or_else(|| "-".to_string()),
    );
    field_line(
        &mut out,
        form,
        Field::Sex,
        values.sex.map(|sex| sex.to_string()).unwrap_or_else(|| "Select".to_string()),
    );
    let _ = writeln!(out, "      options: Male | Female");

    let city = values.city.and_then(|id| refs.city(id)).map(ToSelectOption::to_select_option);
    field_line(&mut out, form, Field::City, selected_label(city.as_ref(), form.city_placeholder()));
    options_line(&mut out, refs.cities.iter().map(ToSelectOption::to_select_option).collect());

    let speciality = values
        .speciality
        .and_then(|id| refs.speciality(id))
        .map(ToSelectOption::to_select_option);
    field_line(
        &mut out,
        form,
        Field::Speciality,
        selected_label(speciality.as_ref(), form.speciality_placeholder()),
    );
    options_line(
        &mut out,
        form.visible_specialities().into_iter().map(ToSelectOption::to_select_option).collect(),
    );

    let doctor = values.doctor.and_then(|id| refs.doctor(id)).map(ToSelectOption::to_select_option);
    field_line(&mut out, form, Field::Doctor, selected_label(doctor.as_ref(), "Select"));
    options_line(
        &mut out,
        form.visible_doctors().into_iter().map(ToSelectOption::to_select_option).collect(),
    );

    field_line(&mut out, form, Field::Contact, text_value(&values.contact));

    let submit = if form.can_submit() {
        "[ Submit ] enabled".green().to_string()
    } else {
        "[ Submit ] disabled".dimmed().to_string()
    };
    let _ = writeln!(out, "{}", submit);
    out
}

fn text_value(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn selected_label(selected: Option<&SelectOption>, placeholder: &str) -> String {
    match selected {
        Some(option) => format!("{} ({})", option.label, option.value),
        None => format!("<{}>", placeholder),
    }
}

fn field_line(out: &mut String, form: &IntakeForm, field: Field, shown: String) {
    let _ = writeln!(out, "  {}: {}", field.label(), shown);
    if let Some(error) = form.visible_error(field) {
        let _ = writeln!(out, "      {}", format!("! {}", error).red());
    }
}

fn options_line(out: &mut String, options: Vec<SelectOption>) {
    if options.is_empty() {
        let _ = writeln!(out, "      options: (none)");
        return;
    }
    let listed = options
        .iter()
        .map(|option| format!("{} {}", option.value, option.label))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "      options: {}", listed);
}

pub fn render_reference_data(refs: &ReferenceData, target: RefsTarget) -> String {
    let mut out = String::new();
    if matches!(target, RefsTarget::Cities | RefsTarget::All) {
        let _ = writeln!(out, "{} ({})", "Cities".bold(), refs.cities.len());
        for city in &refs.cities {
            let _ = writeln!(out, "  {:>4}  {}", city.id, city.name);
        }
    }
    if matches!(target, RefsTarget::Specialities | RefsTarget::All) {
        let _ = writeln!(out, "{} ({})", "Specialities".bold(), refs.specialities.len());
        for speciality in &refs.specialities {
            match speciality.gender_restriction {
                Some(sex) => {
                    let _ = writeln!(out, "  {:>4}  {} [{} only]", speciality.id, speciality.name, sex);
                }
                None => {
                    let _ = writeln!(out, "  {:>4}  {}", speciality.id, speciality.name);
                }
            }
        }
    }
    if matches!(target, RefsTarget::Doctors | RefsTarget::All) {
        let doctors: Vec<&Doctor> = refs.doctors.iter().collect();
        out.push_str(&render_doctors(refs, &doctors));
    }
    out
}

pub fn render_doctors(refs: &ReferenceData, doctors: &[&Doctor]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", "Doctors".bold(), doctors.len());
    for doctor in doctors {
        let city = refs.city(doctor.city_id).map(|c| c.name.as_str()).unwrap_or("?");
        let speciality = refs
            .speciality(doctor.speciality_id)
            .map(|s| s.name.as_str())
            .unwrap_or("?");
        let pediatric = if doctor.is_pediatrician { " [pediatrician]" } else { "" };
        let _ = writeln!(
            out,
            "  {:>4}  {} - {}, {}{}",
            doctor.id,
            doctor.full_name(),
            speciality,
            city,
            pediatric
        );
    }
    out
}

pub fn render_errors(errors: &FormErrors) -> String {
    let mut out = String::new();
    for (field, error) in errors.iter() {
        let _ = writeln!(out, "  {}: {}", field.label(), format!("{}", error).red());
    }
    out
}

pub fn render_accepted(accepted: &AcceptedIntake) -> String {
    let body = serde_json::to_string_pretty(&accepted.values)
        .unwrap_or_else(|_| format!("{:?}", accepted.values));
    format!("{}\n{}\n", accepted.confirmation.green().bold(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use intake_lib::{City, FieldChange, ReferenceId, Sex, Speciality};
    use std::sync::Arc;

    fn refs() -> Arc<ReferenceData> {
        Arc::new(ReferenceData {
            cities: vec![City { id: ReferenceId(1), name: "Lodz".to_string() }],
            specialities: vec![
                Speciality {
                    id: ReferenceId(1),
                    name: "Gynecologist".to_string(),
                    gender_restriction: Some(Sex::Female),
                },
                Speciality {
                    id: ReferenceId(2),
                    name: "Dermatologist".to_string(),
                    gender_restriction: None,
                },
            ],
            doctors: vec![Doctor {
                id: ReferenceId(5),
                name: "Lena".to_string(),
                surname: "Mazur".to_string(),
                city_id: ReferenceId(1),
                speciality_id: ReferenceId(2),
                is_pediatrician: false,
            }],
        })
    }

    fn form() -> IntakeForm {
        IntakeForm::new(refs()).pin_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn shows_placeholders_and_options() {
        let text = render_form(&form());
        assert!(text.contains("City: <Select>"));
        assert!(text.contains("options: 1 Lodz"));
        assert!(text.contains("5 Lena Mazur"));
        assert!(text.contains("[ Submit ] disabled"));
    }

    #[test]
    fn doctor_choice_relabels_city_and_speciality_placeholders() {
        let mut form = form();
        form.change(FieldChange::Doctor(Some(ReferenceId(5)))).unwrap();
        let text = render_form(&form);
        assert!(text.contains("City: <Lodz>"));
        assert!(text.contains("Doctor Speciality: <Dermatologist>"));
        assert!(text.contains("Doctor: Lena Mazur (5)"));
    }

    #[test]
    fn male_patient_does_not_see_restricted_speciality() {
        let mut form = form();
        form.change(FieldChange::Sex(Some(Sex::Male))).unwrap();
        let text = render_form(&form);
        assert!(!text.contains("1 Gynecologist"));
        assert!(text.contains("2 Dermatologist"));
    }

    #[test]
    fn touched_errors_are_rendered() {
        let mut form = form();
        form.change(FieldChange::Contact("abc".to_string())).unwrap();
        form.blur(Field::Contact);
        let text = render_form(&form);
        assert!(text.contains("Invalid email address or mobile number"));
        assert!(!text.contains("Name is required"));
    }

    #[test]
    fn reference_listing_marks_restrictions() {
        let text = render_reference_data(&refs(), RefsTarget::Specialities);
        assert!(text.contains("Gynecologist [Female only]"));
        assert!(!text.contains("Lodz"));
    }
}
