use colored::Colorize;
use idreg::api::{CmdMessage, MessageLevel};
use idreg::model::UserRecord;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const NOT_PROVIDED: &str = "(not provided)";

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One line per user, names aligned past the widest id.
pub(super) fn print_users<W: Write>(out: &mut W, users: &[UserRecord]) -> io::Result<()> {
    let id_width = users
        .iter()
        .map(|u| u.user_id.width())
        .max()
        .unwrap_or(0);

    writeln!(out)?;
    for user in users {
        let padding = id_width.saturating_sub(user.user_id.width());
        let name = user.name.as_deref().unwrap_or(NOT_PROVIDED);
        writeln!(
            out,
            "User {}:{} {}{}",
            user.user_id.yellow(),
            " ".repeat(padding),
            name.bold(),
            identifiers_suffix(user).dimmed()
        )?;
    }
    Ok(())
}

fn identifiers_suffix(user: &UserRecord) -> String {
    let parts: Vec<String> = [
        ("PESEL", user.pesel.as_deref()),
        ("NIP", user.nip.as_deref()),
        ("REGON", user.regon.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("{} {}", label, v)))
    .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("  [{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(users: &[UserRecord]) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        print_users(&mut buf, users).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn missing_name_is_marked() {
        let text = render(&[UserRecord::new("1")]);
        assert!(text.contains("User 1: (not provided)"));
    }

    #[test]
    fn names_align_on_widest_id() {
        let text = render(&[
            UserRecord::new("1").with_name("Ala"),
            UserRecord::new("100").with_name("Ola"),
        ]);
        assert!(text.contains("User 1:   Ala"));
        assert!(text.contains("User 100: Ola"));
    }

    #[test]
    fn identifiers_are_listed_when_present() {
        let text = render(&[UserRecord::new("1")
            .with_name("Jan")
            .with_pesel("44051401458")
            .with_regon("123456785")]);
        assert!(text.contains("[PESEL 44051401458, REGON 123456785]"));
    }
}
