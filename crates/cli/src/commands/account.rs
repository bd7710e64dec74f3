use bitacora_core::Session;
use bitacora_domain::{BitacoraError, Result, SessionUser, User};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Register an account and log it in straight away
pub fn create_account(
    ctx: &AppContext,
    session: &mut Session,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    execute_command("account::create", || {
        let user = ctx.credentials.create_account(name, email, password)?;
        session.login(&user)?;
        Ok(user)
    })
}

/// Authenticate and start a session
pub fn log_in(ctx: &AppContext, session: &mut Session, email: &str, password: &str) -> Result<User> {
    execute_command("account::log_in", || {
        let user = ctx.credentials.authenticate(email, password)?;
        session.login(&user)?;
        Ok(user)
    })
}

/// Change the logged-in user's password, then end the session
pub fn change_password(ctx: &AppContext, session: &mut Session, new_password: &str) -> Result<()> {
    execute_command("account::change_password", || {
        let email = session
            .current()
            .map(|user| user.email.clone())
            .ok_or_else(|| BitacoraError::MissingField("no active session".into()))?;

        ctx.credentials.change_password(&email, new_password)?;
        session.logout()
    })
}

/// End the session. Returns the user that was logged in, if any.
pub fn log_out(session: &mut Session) -> Result<Option<SessionUser>> {
    execute_command("account::log_out", || {
        let previous = session.current().cloned();
        session.logout()?;
        Ok(previous)
    })
}
