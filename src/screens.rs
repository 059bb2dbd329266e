//! Screen Rendering
//!
//! One pure render function per view. Each takes the application state and
//! returns the text the terminal shell prints; none of them mutate anything.

use std::fmt::{self, Formatter};

use crate::session::{AppState, Notice, NoticeLevel, View};
use crate::tracker::filter::choice_label;
use crate::tracker::{ApplicationRecord, Role, Status};

/// Open positions listed on the home screen
pub const SAMPLE_OPEN_ROLES: &[&str] = &[
    "Frontend Developer (React)",
    "Backend Developer (Node.js)",
    "Data Scientist",
];

const RULE_WIDTH: usize = 78;

/// Adapts a writer function into something `Display`
struct Page<F>(F);

impl<F> fmt::Display for Page<F>
where
    F: Fn(&mut Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Render the whole page: header, the active screen, footer
pub fn render(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| {
        write_header(f, state)?;
        writeln!(f)?;
        match state.view() {
            View::Home => write_home(f, state)?,
            View::Register => write_register(f, state)?,
            View::Login => write_login(f, state)?,
            View::Apply => write_apply(f, state)?,
            View::Applicant => write_applicant(f, state)?,
            View::Admin => write_admin(f, state)?,
        }
        writeln!(f)?;
        write_footer(f)
    })
    .to_string()
}

/// Brand, navigation and sign-in status
pub fn render_header(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_header(f, state)).to_string()
}

pub fn render_footer() -> String {
    Page(write_footer).to_string()
}

pub fn render_home(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_home(f, state)).to_string()
}

pub fn render_register(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_register(f, state)).to_string()
}

pub fn render_login(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_login(f, state)).to_string()
}

pub fn render_apply(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_apply(f, state)).to_string()
}

/// Profile and the three most recent applications
///
/// Without a signed-in user only a prompt is shown.
pub fn render_applicant(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_applicant(f, state)).to_string()
}

/// Filter bar and the filtered applications table
pub fn render_admin(state: &AppState) -> String {
    Page(|f: &mut Formatter<'_>| write_admin(f, state)).to_string()
}

/// Applications as a fixed-width table
pub fn render_table(records: &[&ApplicationRecord]) -> String {
    Page(|f: &mut Formatter<'_>| write_table(f, records)).to_string()
}

/// One-line rendering of a notice
pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Info => "ℹ",
    };
    format!("{} {}", marker, notice.message)
}

fn write_header(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "Veridia Hiring    [home] [apply] [admin]")?;
    match state.user() {
        Some(user) => writeln!(f, "Signed in as {}    (logout)", user.name)?,
        None => writeln!(f, "(login) (register)")?,
    }
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn write_footer(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(f, "Prototype · Veridia Hiring Platform (in-memory, no backend)")
}

fn write_home(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    let stats = state.home_stats();

    writeln!(f, "{}", View::Home.title())?;
    writeln!(
        f,
        "Candidate registration, an application form, an applicant dashboard and an\n\
         HR dashboard for managing and filtering applications."
    )?;
    writeln!(f)?;
    writeln!(f, "  Applications:      {}", stats.applications)?;
    writeln!(f, "  Open Roles:        {}", stats.open_roles)?;
    writeln!(f, "  Avg Time to Hire:  {} days", stats.avg_time_to_hire_days)?;
    writeln!(f)?;
    writeln!(f, "Sample open roles:")?;
    for role in SAMPLE_OPEN_ROLES {
        writeln!(f, "  - {}", role)?;
    }
    writeln!(f)?;
    writeln!(f, "Get started: `go register`    Apply now: `go apply`")
}

fn write_register(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    let form = state.register_form();
    card_title(f, View::Register)?;
    field_line(f, "full_name*", &form.full_name)?;
    field_line(f, "email*", &form.email)?;
    field_line(f, "password", &mask(&form.password))?;
    field_line(f, "role", form.role.as_str())?;
    writeln!(f, "  roles: {}", role_options())?;
    writeln!(f, "`submit` to create the account, `sso` for single sign-on")
}

fn write_login(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    let form = state.login_form();
    card_title(f, View::Login)?;
    field_line(f, "email*", &form.email)?;
    field_line(f, "password", &mask(&form.password))?;
    writeln!(f, "`submit` to log in, `forgot` to reset the password")
}

fn write_apply(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    let form = state.application_form();
    card_title(f, View::Apply)?;
    field_line(f, "full_name*", &form.full_name)?;
    field_line(f, "email*", &form.email)?;
    field_line(f, "phone", &form.phone)?;
    field_line(f, "role", form.role.as_str())?;
    field_line(f, "experience", &form.experience)?;
    field_line(f, "resume_url", &form.resume_url)?;
    field_line(f, "cover_letter", &form.cover_letter)?;
    writeln!(f, "  roles: {}", role_options())?;
    writeln!(f, "`submit` to send the application, `reset` to clear the form")
}

fn write_applicant(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    card_title(f, View::Applicant)?;
    let Some(user) = state.user() else {
        return writeln!(f, "Log in to see your dashboard.");
    };

    writeln!(
        f,
        "Welcome back, {}. View your application status, update your profile and submit new applications.",
        user.name
    )?;
    writeln!(f)?;
    writeln!(f, "Your profile")?;
    writeln!(f, "  Email: {}", user.email)?;
    writeln!(f, "  Role:  {}", user.role.map(|r| r.as_str()).unwrap_or("-"))?;
    writeln!(f, "  `go apply` to update or apply")?;
    writeln!(f)?;
    writeln!(f, "Recent applications")?;
    let recent = state.store().recent(3);
    if recent.is_empty() {
        writeln!(f, "  (none yet)")?;
    }
    for record in recent {
        writeln!(
            f,
            "  {:<20} {:<16} {:<24} {}",
            record.name, record.role, record.email, record.status
        )?;
    }
    Ok(())
}

fn write_admin(f: &mut Formatter<'_>, state: &AppState) -> fmt::Result {
    let filters = state.filters();
    card_title(f, View::Admin)?;

    writeln!(
        f,
        "Role: [{}]  Status: [{}]  Search: [{}]",
        choice_label(&filters.role),
        choice_label(&filters.status),
        filters.query
    )?;
    writeln!(f)?;
    write_table(f, &state.visible_applications())?;
    writeln!(f)?;
    writeln!(f, "`view <id>`  `shortlist <id>`  `reject <id>`  `filter role|status|query <value>`")
}

fn write_table(f: &mut Formatter<'_>, records: &[&ApplicationRecord]) -> fmt::Result {
    writeln!(
        f,
        "{:<4} {:<20} {:<24} {:<16} {:<12} {}",
        "ID", "Name", "Email", "Role", "Status", "Submitted"
    )?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH + 10))?;

    if records.is_empty() {
        writeln!(f, "No applications match the current filters.")?;
    }
    for record in records {
        writeln!(
            f,
            "{:<4} {:<20} {:<24} {:<16} {:<12} {}",
            record.id,
            record.name,
            record.email,
            record.role.as_str(),
            record.status.as_str(),
            record.submitted_on
        )?;
    }
    Ok(())
}

fn card_title(f: &mut Formatter<'_>, view: View) -> fmt::Result {
    writeln!(f, "{}", view.title())?;
    writeln!(f, "{}", "-".repeat(view.title().len()))
}

fn field_line(f: &mut Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "  {:<14} {}", label, value)
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

fn role_options() -> String {
    Role::all()
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Status values an admin can pick from
pub fn status_options() -> String {
    Status::all()
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}
