// cli/src/cli/handlers.rs

use anyhow::{Context, Result};
use intake_lib::input::parse_change;
use intake_lib::{Field, IntakeConfig, IntakeError, IntakeForm, ReferenceLoader};
use log::{info, warn};

use crate::cli::commands::{DoctorsArgs, RefsTarget, SubmitArgs};
use crate::cli::interactive::run_cli_interactive;
use crate::cli::render::{render_accepted, render_doctors, render_errors, render_reference_data};

fn build_loader(config: &IntakeConfig) -> Result<ReferenceLoader> {
    ReferenceLoader::from_config(config).context("Failed to set up reference data loading")
}

async fn load_form(config: &IntakeConfig) -> Result<IntakeForm> {
    let loader = build_loader(config)?;
    let refs = loader.load().await;
    if refs.is_empty() {
        warn!("No reference data available; selects will offer no options");
    }
    info!(
        "Reference data ready: {} cities, {} specialities, {} doctors",
        refs.cities.len(),
        refs.specialities.len(),
        refs.doctors.len()
    );
    Ok(IntakeForm::with_config(refs, &config.form))
}

/// Applies `(field, raw)` pairs in the order given. Callers pass upstream
/// fields first so the cascade does not wipe later selections.
fn apply_fields(form: &mut IntakeForm, fields: &[(Field, Option<&String>)]) -> Result<()> {
    for (field, raw) in fields {
        if let Some(raw) = raw {
            let change = parse_change(*field, raw).with_context(|| format!("Invalid --{}", field))?;
            form.change(change).with_context(|| format!("Cannot set {}", field))?;
            form.blur(*field);
        }
    }
    Ok(())
}

pub async fn handle_refs(config: &IntakeConfig, target: RefsTarget) -> Result<()> {
    let refs = build_loader(config)?.load().await;
    print!("{}", render_reference_data(&refs, target));
    Ok(())
}

pub async fn handle_doctors(config: &IntakeConfig, args: DoctorsArgs) -> Result<()> {
    let mut form = load_form(config).await?;
    apply_fields(
        &mut form,
        &[
            (Field::Birthday, args.birthday.as_ref()),
            (Field::Sex, args.sex.as_ref()),
            (Field::City, args.city.as_ref()),
            (Field::Speciality, args.speciality.as_ref()),
        ],
    )?;

    if !form.filters().is_empty() {
        println!("Filters: {}", serde_json::to_string(form.filters())?);
    }
    print!("{}", render_doctors(form.refs(), &form.visible_doctors()));
    Ok(())
}

pub async fn handle_submit(config: &IntakeConfig, args: SubmitArgs) -> Result<()> {
    let mut form = load_form(config).await?;
    apply_fields(
        &mut form,
        &[
            (Field::Name, args.name.as_ref()),
            (Field::Birthday, args.birthday.as_ref()),
            (Field::Sex, args.sex.as_ref()),
            (Field::City, args.city.as_ref()),
            (Field::Speciality, args.speciality.as_ref()),
            (Field::Doctor, args.doctor.as_ref()),
            (Field::Contact, args.contact.as_ref()),
        ],
    )?;

    match form.submit() {
        Ok(accepted) => {
            print!("{}", render_accepted(&accepted));
            Ok(())
        }
        Err(IntakeError::Invalid(errors)) => {
            eprint!("{}", render_errors(&errors));
            Err(IntakeError::Invalid(errors).into())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn handle_fill(config: &IntakeConfig) -> Result<()> {
    let form = load_form(config).await?;
    run_cli_interactive(form)
}

pub fn handle_cache_clear(config: &IntakeConfig) -> Result<()> {
    build_loader(config)?
        .invalidate()
        .context("Failed to clear the reference cache")?;
    println!("Reference cache cleared.");
    Ok(())
}
