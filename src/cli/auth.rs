use inquire::{Password, PasswordDisplayMode, Text};

use super::{init_shelf, print_notice};

pub fn run_auth_login(
    data_dir: &str,
    identifier: Option<String>,
    secret: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    let identifier = if let Some(i) = identifier {
        if i.trim().is_empty() {
            anyhow::bail!("Identifier cannot be empty");
        }
        i
    } else if non_interactive {
        anyhow::bail!("--identifier is required in non-interactive mode");
    } else {
        Text::new("Email:")
            .with_validator(|input: &str| {
                if input.trim().is_empty() {
                    Ok(inquire::validator::Validation::Invalid(
                        "Email is required".into(),
                    ))
                } else {
                    Ok(inquire::validator::Validation::Valid)
                }
            })
            .prompt()?
    };

    let secret = if let Some(s) = secret {
        s
    } else if non_interactive {
        String::new()
    } else {
        Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?
    };

    let notice = shelf.login(&identifier, &secret)?;

    println!();
    print_notice(&notice);
    if shelf.is_owner() {
        println!("Owner dashboard unlocked.");
    }
    println!();

    Ok(())
}

pub fn run_auth_logout(data_dir: &str) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    if shelf.session().is_none() {
        println!("Not signed in.");
        return Ok(());
    }

    let notice = shelf.logout()?;
    print_notice(&notice);

    Ok(())
}

pub fn run_auth_whoami(data_dir: &str, json: bool) -> anyhow::Result<()> {
    let shelf = init_shelf(data_dir)?;
    let session = shelf.session();

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    match session {
        Some(s) => {
            let role = if s.is_owner { "owner" } else { "member" };
            println!("{} ({}) [{role}]", s.display_name, s.identifier);
        }
        None => println!("Not signed in."),
    }

    Ok(())
}
