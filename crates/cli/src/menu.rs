//! Interactive console menu
//!
//! Reads choices and field values line by line from any [`BufRead`] and
//! writes prompts and results to any [`Write`]. End of input leaves the loop
//! as if "0" had been chosen.

use std::io::{self, BufRead, Write};

use bitacora_core::report::format_activity_line;
use bitacora_core::Session;
use bitacora_domain::{ActivityFields, BitacoraError};

use crate::commands;
use crate::context::AppContext;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RecordActivity,
    QueryActivities,
    GenerateReport,
    CreateAccount,
    LogIn,
    ChangePassword,
    LogOut,
    Exit,
}

impl MenuOption {
    /// Map a typed choice to its entry, ignoring surrounding whitespace
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::RecordActivity),
            "2" => Some(Self::QueryActivities),
            "3" => Some(Self::GenerateReport),
            "4" => Some(Self::CreateAccount),
            "5" => Some(Self::LogIn),
            "6" => Some(Self::ChangePassword),
            "7" => Some(Self::LogOut),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Options that are refused without a logged-in user
    pub fn requires_session(self) -> bool {
        matches!(
            self,
            Self::RecordActivity | Self::QueryActivities | Self::GenerateReport | Self::ChangePassword
        )
    }
}

const MENU_ENTRIES: [&str; 8] = [
    "1. Record activity",
    "2. Query activities",
    "3. Generate report",
    "4. Create account",
    "5. Log in",
    "6. Change password",
    "7. Log out",
    "0. Exit",
];

/// Console loop over the services in an [`AppContext`]
pub struct Menu<'a, R, W> {
    ctx: &'a AppContext,
    session: Session,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Menu reading from `input` and writing to `output`
    pub fn new(ctx: &'a AppContext, session: Session, input: R, output: W) -> Self {
        Self { ctx, session, input, output }
    }

    /// Serve menu choices until "0" or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let outcome = self.prompt("Select an option: ").and_then(|choice| {
                match MenuOption::parse(&choice) {
                    Some(MenuOption::Exit) => {
                        writeln!(self.output, "Goodbye.")?;
                        Ok(false)
                    }
                    Some(option) => self.dispatch(option).map(|()| true),
                    None => {
                        writeln!(self.output, "Invalid option. Try again.")?;
                        Ok(true)
                    }
                }
            });

            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    writeln!(self.output)?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        self.output.flush()
    }

    /// Hand back the session, e.g. to inspect it after a scripted run
    pub fn into_session(self) -> Session {
        self.session
    }

    fn dispatch(&mut self, option: MenuOption) -> io::Result<()> {
        if option.requires_session() && !self.session.is_active() {
            return writeln!(self.output, "Error: you must log in first.");
        }

        match option {
            MenuOption::RecordActivity => self.record_activity(),
            MenuOption::QueryActivities => self.query_activities(),
            MenuOption::GenerateReport => self.generate_report(),
            MenuOption::CreateAccount => self.create_account(),
            MenuOption::LogIn => self.log_in(),
            MenuOption::ChangePassword => self.change_password(),
            MenuOption::LogOut => self.log_out(),
            MenuOption::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let active = self.session.current().map_or("none", |user| user.name.as_str());
        writeln!(self.output, "\n--- MAIN MENU --- (active user: {active})")?;
        for entry in MENU_ENTRIES {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    /// Print `label` and read one line without its line terminator
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn print_error(&mut self, err: &BitacoraError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")
    }

    fn record_activity(&mut self) -> io::Result<()> {
        let fields = ActivityFields {
            date: self.prompt("Date (YYYY-MM-DD): ")?,
            supervisor: self.prompt("Supervisor: ")?,
            description: self.prompt("Description: ")?,
            attachments: Some(self.prompt("Attachments: ")?),
            responsible: self.prompt("Responsible: ")?,
            weather: Some(self.prompt("Weather: ")?),
            recorded_by: None,
        };

        match commands::record_activity(self.ctx, &self.session, fields) {
            Ok(activity) => writeln!(self.output, "Activity #{} recorded.", activity.id),
            Err(err) => self.print_error(&err),
        }
    }

    fn query_activities(&mut self) -> io::Result<()> {
        let start = self.prompt("Start date (YYYY-MM-DD): ")?;
        let end = self.prompt("End date (YYYY-MM-DD): ")?;

        match commands::query_activities(self.ctx, &start, &end) {
            Ok(activities) if activities.is_empty() => {
                writeln!(self.output, "No activities found.")
            }
            Ok(activities) => {
                writeln!(self.output, "Activities found:")?;
                for activity in &activities {
                    writeln!(self.output, "{}", format_activity_line(activity))?;
                }
                Ok(())
            }
            Err(err) => self.print_error(&err),
        }
    }

    fn generate_report(&mut self) -> io::Result<()> {
        let start = self.prompt("Start date (YYYY-MM-DD): ")?;
        let end = self.prompt("End date (YYYY-MM-DD): ")?;
        let name = self.prompt("Report file name [report.txt]: ")?;

        match commands::generate_report(self.ctx, &start, &end, &name) {
            Ok(summary) => writeln!(
                self.output,
                "Report written to {} ({} activities).",
                summary.destination, summary.activity_count
            ),
            Err(err) => self.print_error(&err),
        }
    }

    fn create_account(&mut self) -> io::Result<()> {
        let name = self.prompt("Name: ")?;
        let email = self.prompt("Email: ")?;
        let password = self.prompt("Password: ")?;

        match commands::create_account(self.ctx, &mut self.session, &name, &email, &password) {
            Ok(user) => writeln!(self.output, "Account created. Logged in as {}.", user.name),
            Err(err) => self.print_error(&err),
        }
    }

    fn log_in(&mut self) -> io::Result<()> {
        let email = self.prompt("Email: ")?;
        let password = self.prompt("Password: ")?;

        match commands::log_in(self.ctx, &mut self.session, &email, &password) {
            Ok(user) => writeln!(self.output, "Welcome {}", user.name),
            Err(err) => self.print_error(&err),
        }
    }

    fn change_password(&mut self) -> io::Result<()> {
        let new_password = self.prompt("New password: ")?;

        match commands::change_password(self.ctx, &mut self.session, &new_password) {
            Ok(()) => writeln!(self.output, "Password changed. You have been logged out."),
            Err(err) => self.print_error(&err),
        }
    }

    fn log_out(&mut self) -> io::Result<()> {
        match commands::log_out(&mut self.session) {
            Ok(Some(_)) => writeln!(self.output, "Session closed."),
            Ok(None) => writeln!(self.output, "No active session."),
            Err(err) => self.print_error(&err),
        }
    }
}
