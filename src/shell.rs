//! Shell Command Parser
//!
//! Turns one line typed at the `veridia` prompt into a [`Command`].
//!
//! # Supported Syntax
//!
//! ```text
//! go <view>
//! set <field> <value...>
//! submit | reset
//! login <email> [password]
//! register "<full name>" <email> [role]
//! filter role|status <value> | filter query [text...]
//! shortlist <id> | reject <id> | view <id> | status <id> <status>
//! logout | sso | forgot | show | help | quit
//! ```
//!
//! Words are separated by whitespace; single or double quotes group words
//! into one argument. `set` and `submit` act on the form of the current
//! screen.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::map,
    multi::separated_list0,
    sequence::delimited,
    IResult,
};
use thiserror::Error;

use crate::screens::status_options;
use crate::session::{Action, Credentials, Field, Registration, View};
use crate::tracker::{
    parse_role_choice, parse_status_choice, ApplicationRecord, Role, TrackerError,
};

/// What the shell should do with a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply an action to the state
    Dispatch(Action),
    /// Print the current screen again
    Show,
    Help,
    Quit,
}

/// Errors from reading a shell line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command '{0}', type `help` for the list")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unexpected input near '{0}', separate words with spaces")]
    Syntax(String),

    #[error("`{0}` only works on the register, login and apply screens")]
    NoForm(&'static str),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Parse one input line in the context of the current screen
pub fn parse_command(line: &str, view: View) -> ShellResult<Command> {
    let words = split_words(line)?;
    let Some((name, args)) = words.split_first() else {
        return Ok(Command::Show);
    };

    let action = match name.to_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "show" => return Ok(Command::Show),

        "go" => match args {
            [target] => Action::Navigate {
                view: target.parse()?,
            },
            _ => return Err(ShellError::Usage("go <home|register|login|apply|applicant|admin>")),
        },

        "set" => {
            let (field, value) = match args {
                [field, rest @ ..] => (field.parse::<Field>()?, rest.join(" ")),
                [] => return Err(ShellError::Usage("set <field> <value>")),
            };
            match view {
                View::Register => Action::EditRegister { field, value },
                View::Login => Action::EditLogin { field, value },
                View::Apply => Action::EditApplication { field, value },
                _ => return Err(ShellError::NoForm("set")),
            }
        }

        "submit" => match view {
            View::Register => Action::SubmitRegister,
            View::Login => Action::SubmitLogin,
            View::Apply => Action::SubmitApplication,
            _ => return Err(ShellError::NoForm("submit")),
        },

        "reset" => Action::ResetApplication,

        "login" => match args {
            [email] | [email, _] => Action::Login {
                credentials: Credentials {
                    email: email.clone(),
                    password: args.get(1).cloned().unwrap_or_default(),
                },
            },
            _ => return Err(ShellError::Usage("login <email> [password]")),
        },

        "register" => match args {
            [full_name, email] | [full_name, email, _] => Action::Register {
                registration: Registration {
                    full_name: full_name.clone(),
                    email: email.clone(),
                    password: String::new(),
                    role: match args.get(2) {
                        Some(role) => role.parse()?,
                        None => Role::default(),
                    },
                },
            },
            _ => return Err(ShellError::Usage("register \"<full name>\" <email> [role]")),
        },

        "logout" | "signout" => Action::SignOut,

        "filter" => match args {
            [kind, value] if kind.eq_ignore_ascii_case("role") => Action::SetFilterRole {
                role: parse_role_choice(value)?,
            },
            [kind, value] if kind.eq_ignore_ascii_case("status") => Action::SetFilterStatus {
                status: parse_status_choice(value)?,
            },
            [kind, rest @ ..] if kind.eq_ignore_ascii_case("query") => Action::SetFilterQuery {
                query: rest.join(" "),
            },
            _ => return Err(ShellError::Usage("filter role|status <value> | filter query [text]")),
        },

        "shortlist" => Action::Shortlist {
            id: single_id(args, "shortlist <id>")?,
        },
        "reject" => Action::Reject {
            id: single_id(args, "reject <id>")?,
        },
        "view" => Action::ViewProfile {
            id: single_id(args, "view <id>")?,
        },
        "status" => match args {
            [id, status] => Action::SetStatus {
                id: parse_id(id)?,
                status: status.parse()?,
            },
            _ => return Err(ShellError::Usage("status <id> <Submitted|Shortlisted|Rejected>")),
        },

        "sso" => Action::RequestSso,
        "forgot" => Action::ForgotPassword,

        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };

    Ok(Command::Dispatch(action))
}

/// Command reference printed by `help`
pub fn help() -> String {
    let views = View::all()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    let roles = Role::all()
        .iter()
        .map(|r| format!("\"{}\"", r))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "Commands:
  go <view>                      views: {views}
  set <field> <value>            edit the form on this screen
  submit                         submit the form on this screen
  reset                          clear the application form
  login <email> [password]       emails containing hr@ open the admin dashboard
  register \"<name>\" <email> [role]
  logout
  filter role <role|All>         roles: {roles}
  filter status <status|All>     statuses: {statuses}
  filter query [text]            matches name or email
  shortlist <id>  reject <id>  status <id> <status>  view <id>
  sso  forgot  show  help  quit",
        views = views,
        roles = roles,
        statuses = status_options(),
    )
}

/// Short confirmation line for a record an action touched
pub fn describe(record: &ApplicationRecord) -> String {
    format!(
        "#{} {} ({}) {}",
        record.id,
        record.name,
        record.role,
        record.status.as_str()
    )
}

fn single_id(args: &[String], usage: &'static str) -> ShellResult<u32> {
    match args {
        [id] => parse_id(id),
        _ => Err(ShellError::Usage(usage)),
    }
}

fn parse_id(s: &str) -> ShellResult<u32> {
    s.trim_start_matches('#')
        .parse()
        .map_err(|_| TrackerError::parse("application id", s).into())
}

/// Split a line into words, honouring quotes
///
/// Text glued to a closing quote is rejected rather than dropped.
fn split_words(line: &str) -> ShellResult<Vec<String>> {
    match parse_words(line) {
        Ok(("", words)) => Ok(words),
        Ok((rest, _)) => Err(ShellError::Syntax(rest.to_string())),
        Err(_) => Err(ShellError::Syntax(line.trim().to_string())),
    }
}

fn parse_words(input: &str) -> IResult<&str, Vec<String>> {
    delimited(
        multispace0,
        separated_list0(multispace1, parse_word),
        multispace0,
    )(input)
}

fn parse_word(input: &str) -> IResult<&str, String> {
    alt((
        map(parse_quoted, String::from),
        map(take_while1(|c: char| !c.is_whitespace()), String::from),
    ))(input)
}

fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Status;

    fn dispatch(line: &str, view: View) -> Action {
        match parse_command(line, view).unwrap() {
            Command::Dispatch(action) => action,
            other => panic!("expected an action, got {:?}", other),
        }
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"  register "Neha Patil"  neha@example.com 'Data Scientist' "#).unwrap(),
            vec!["register", "Neha Patil", "neha@example.com", "Data Scientist"]
        );
        assert_eq!(
            split_words(r#"set cover_letter """#).unwrap(),
            vec!["set", "cover_letter", ""]
        );
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_text_after_closing_quote_is_rejected() {
        assert_eq!(
            split_words(r#"set full_name "Aarav"Sharma"#),
            Err(ShellError::Syntax("Sharma".to_string()))
        );
        assert!(matches!(
            parse_command(r#"set full_name "Aarav"Sharma"#, View::Apply),
            Err(ShellError::Syntax(_))
        ));
    }

    #[test]
    fn test_blank_line_shows_screen() {
        assert_eq!(parse_command("", View::Home), Ok(Command::Show));
        assert_eq!(parse_command("QUIT", View::Home), Ok(Command::Quit));
        assert_eq!(parse_command("help", View::Admin), Ok(Command::Help));
    }

    #[test]
    fn test_go() {
        assert_eq!(
            dispatch("go admin", View::Home),
            Action::Navigate { view: View::Admin }
        );
        assert!(matches!(
            parse_command("go settings", View::Home),
            Err(ShellError::Tracker(TrackerError::Parse { .. }))
        ));
    }

    #[test]
    fn test_set_follows_current_screen() {
        assert_eq!(
            dispatch("set full_name Aarav Sharma", View::Apply),
            Action::EditApplication {
                field: Field::FullName,
                value: "Aarav Sharma".to_string(),
            }
        );
        assert_eq!(
            dispatch("set email a@b.com", View::Login),
            Action::EditLogin {
                field: Field::Email,
                value: "a@b.com".to_string(),
            }
        );
        assert_eq!(
            parse_command("set email a@b.com", View::Admin),
            Err(ShellError::NoForm("set"))
        );
    }

    #[test]
    fn test_submit_follows_current_screen() {
        assert_eq!(dispatch("submit", View::Register), Action::SubmitRegister);
        assert_eq!(dispatch("submit", View::Apply), Action::SubmitApplication);
        assert!(parse_command("submit", View::Home).is_err());
    }

    #[test]
    fn test_login_and_register() {
        assert_eq!(
            dispatch("login hr@veridia.com", View::Home),
            Action::Login {
                credentials: Credentials {
                    email: "hr@veridia.com".to_string(),
                    password: String::new(),
                },
            }
        );

        match dispatch(r#"register "Neha Patil" neha@example.com "Data Scientist""#, View::Home) {
            Action::Register { registration } => {
                assert_eq!(registration.full_name, "Neha Patil");
                assert_eq!(registration.role, Role::DataScientist);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_filters() {
        assert_eq!(
            dispatch("filter role backend", View::Admin),
            Action::SetFilterRole {
                role: Some(Role::BackendDev),
            }
        );
        assert_eq!(
            dispatch("filter status All", View::Admin),
            Action::SetFilterStatus { status: None }
        );
        assert_eq!(
            dispatch("filter query neha patil", View::Admin),
            Action::SetFilterQuery {
                query: "neha patil".to_string(),
            }
        );
        assert_eq!(
            dispatch("filter query", View::Admin),
            Action::SetFilterQuery {
                query: String::new(),
            }
        );
    }

    #[test]
    fn test_review_commands() {
        assert_eq!(dispatch("shortlist 2", View::Admin), Action::Shortlist { id: 2 });
        assert_eq!(dispatch("reject #3", View::Admin), Action::Reject { id: 3 });
        assert_eq!(
            dispatch("status 1 rejected", View::Admin),
            Action::SetStatus {
                id: 1,
                status: Status::Rejected,
            }
        );
        assert!(matches!(
            parse_command("view abc", View::Admin),
            Err(ShellError::Tracker(TrackerError::Parse { .. }))
        ));
        assert_eq!(
            parse_command("shortlist", View::Admin),
            Err(ShellError::Usage("shortlist <id>"))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("dance", View::Home),
            Err(ShellError::UnknownCommand("dance".to_string()))
        );
    }

    #[test]
    fn test_help_lists_statuses() {
        let text = help();
        assert!(text.contains("Submitted | Shortlisted | Rejected"));
        assert!(text.contains("\"Data Scientist\""));
    }
}
