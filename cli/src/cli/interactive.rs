// cli/src/cli/interactive.rs

// Interactive form session. Each line is one command; after every edit the
// form is rendered again with its current options and errors.

use anyhow::Result;
use intake_lib::input::parse_change;
use intake_lib::{Field, FieldChange, IntakeError, IntakeForm};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::render::{render_accepted, render_errors, render_form};

#[derive(Debug, PartialEq)]
pub enum InteractiveCommand {
    Set { field: Field, value: String },
    Clear(Field),
    Show,
    Submit,
    Reset,
    Help,
    Exit,
    Empty,
    Unknown(String),
}

/// Parses one line of interactive input.
pub fn parse_command(input: &str) -> InteractiveCommand {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return InteractiveCommand::Empty;
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), rest.trim()),
        None => (trimmed.to_lowercase(), ""),
    };

    match command.as_str() {
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            match field.parse::<Field>() {
                Ok(field) => InteractiveCommand::Set {
                    field,
                    value: value.trim().to_string(),
                },
                Err(e) => InteractiveCommand::Unknown(e.to_string()),
            }
        }
        "clear" => match rest.parse::<Field>() {
            Ok(field) => InteractiveCommand::Clear(field),
            Err(e) => InteractiveCommand::Unknown(e.to_string()),
        },
        "show" | "ls" => InteractiveCommand::Show,
        "submit" => InteractiveCommand::Submit,
        "reset" => InteractiveCommand::Reset,
        "help" | "?" => InteractiveCommand::Help,
        "exit" | "quit" | "q" => InteractiveCommand::Exit,
        other => InteractiveCommand::Unknown(format!("Unknown command: {}", other)),
    }
}

pub fn print_interactive_help() {
    println!("Commands:");
    println!("  set <field> <value>   fields: name, birthday, sex, city, speciality, doctor, contact");
    println!("  clear <field>         empty a field");
    println!("  show                  render the form");
    println!("  submit                submit when the form is valid and modified");
    println!("  reset                 start over");
    println!("  exit                  leave");
}

/// Applies one command to the form. Returns `false` when the session ends.
pub fn handle_interactive_command(form: &mut IntakeForm, command: InteractiveCommand) -> bool {
    match command {
        InteractiveCommand::Set { field, value } => {
            match parse_change(field, &value).and_then(|change| form.change(change)) {
                Ok(()) => {
                    form.blur(field);
                    print!("{}", render_form(form));
                }
                Err(e) => eprintln!("{}", e),
            }
        }
        InteractiveCommand::Clear(field) => match form.change(FieldChange::clear(field)) {
            Ok(()) => {
                form.blur(field);
                print!("{}", render_form(form));
            }
            Err(e) => eprintln!("{}", e),
        },
        InteractiveCommand::Show => print!("{}", render_form(form)),
        InteractiveCommand::Submit => match form.submit() {
            Ok(accepted) => print!("{}", render_accepted(&accepted)),
            Err(IntakeError::Invalid(errors)) => {
                println!("Form has errors:");
                print!("{}", render_errors(&errors));
            }
            Err(e) => eprintln!("{}", e),
        },
        InteractiveCommand::Reset => {
            form.reset();
            print!("{}", render_form(form));
        }
        InteractiveCommand::Help => print_interactive_help(),
        InteractiveCommand::Exit => return false,
        InteractiveCommand::Empty => {}
        InteractiveCommand::Unknown(message) => {
            eprintln!("{}", message);
            println!("Type 'help' for commands.");
        }
    }
    true
}

pub fn run_cli_interactive(mut form: IntakeForm) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    print!("{}", render_form(&form));
    println!("Type 'help' for commands.");

    loop {
        match rl.readline("intake> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if !handle_interactive_command(&mut form, parse_command(&line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_lib::{City, ReferenceData, ReferenceId};
    use std::sync::Arc;

    #[test]
    fn should_parse_set_with_spaces_in_value() {
        assert_eq!(
            parse_command("set name Anna Maria"),
            InteractiveCommand::Set {
                field: Field::Name,
                value: "Anna Maria".to_string()
            }
        );
        assert_eq!(
            parse_command("SET specialty 3"),
            InteractiveCommand::Set {
                field: Field::Speciality,
                value: "3".to_string()
            }
        );
    }

    #[test]
    fn should_parse_simple_commands() {
        assert_eq!(parse_command("clear doctor"), InteractiveCommand::Clear(Field::Doctor));
        assert_eq!(parse_command("  "), InteractiveCommand::Empty);
        assert_eq!(parse_command("quit"), InteractiveCommand::Exit);
        assert!(matches!(parse_command("set height 180"), InteractiveCommand::Unknown(_)));
        assert!(matches!(parse_command("dance"), InteractiveCommand::Unknown(_)));
    }

    #[test]
    fn commands_drive_the_form() {
        let refs = Arc::new(ReferenceData {
            cities: vec![City { id: ReferenceId(1), name: "Poznan".to_string() }],
            ..ReferenceData::default()
        });
        let mut form = IntakeForm::new(refs);

        assert!(handle_interactive_command(&mut form, parse_command("set city 1")));
        assert_eq!(form.values().city, Some(ReferenceId(1)));
        assert!(form.is_touched(Field::City));

        // Rejected input leaves the form unchanged.
        assert!(handle_interactive_command(&mut form, parse_command("set city 7")));
        assert_eq!(form.values().city, Some(ReferenceId(1)));

        assert!(handle_interactive_command(&mut form, parse_command("clear city")));
        assert_eq!(form.values().city, None);

        assert!(!handle_interactive_command(&mut form, parse_command("exit")));
    }
}
