use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::password::{check_password, generate_password};

/// Generate a password and say whether it happens to meet the policy.
pub fn generate(length: usize) -> Result<CmdResult> {
    let password = generate_password(length)?;
    let mut result = CmdResult::default();
    if let Err(issue) = check_password(&password) {
        result.add_message(CmdMessage::warning(format!(
            "Generated password does not meet the policy: {}",
            issue
        )));
    }
    Ok(result.with_password(password))
}

pub fn check(password: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match check_password(password) {
        Ok(()) => result.add_message(CmdMessage::success(crate::password::STRONG_ENOUGH)),
        Err(issue) => result.add_message(CmdMessage::warning(issue.to_string())),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::IdregError;

    #[test]
    fn generate_returns_password() {
        let result = generate(16).unwrap();
        assert_eq!(result.password.as_deref().map(str::len), Some(16));
    }

    #[test]
    fn generate_too_short_is_an_error() {
        assert!(matches!(
            generate(4),
            Err(IdregError::PasswordTooShort { .. })
        ));
    }

    #[test]
    fn policy_warning_is_not_a_missing_user() {
        let mut result = CmdResult::default().with_password("aaaaaaaa".into());
        result.add_message(CmdMessage::warning("Generated password does not meet the policy"));
        assert!(!result.is_not_found());

        let generated = generate(8).unwrap();
        assert!(!generated.is_not_found());
    }

    #[test]
    fn check_reports_level() {
        let weak = check("short").unwrap();
        assert_eq!(weak.messages[0].level, MessageLevel::Warning);

        let strong = check("Abcdef12!").unwrap();
        assert_eq!(strong.messages[0].level, MessageLevel::Success);
    }
}
