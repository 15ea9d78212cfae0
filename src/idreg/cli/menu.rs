//! The interactive numbered menu.
//!
//! Reads choices and field values line by line, so it runs the same against
//! a terminal, a pipe, or an in-memory buffer in tests. End of input leaves
//! the menu as if "exit" had been chosen.

use super::print::{print_messages, print_users};
use colored::Colorize;
use idreg::api::{CmdMessage, IdregApi};
use idreg::error::Result;
use idreg::model::{non_blank, RecordUpdate, UserRecord};
use idreg::store::RecordStore;
use std::io::{BufRead, Write};

const MENU: &str = "\nChoose one of the options below:\n\
1. List users\n\
2. Add user\n\
3. Remove user\n\
4. Edit user\n\
5. Save and exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    List,
    Add,
    Remove,
    Edit,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Choice::List),
            2 => Some(Choice::Add),
            3 => Some(Choice::Remove),
            4 => Some(Choice::Edit),
            5 => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub(super) struct Menu<'a, S: RecordStore, R: BufRead, W: Write> {
    api: &'a mut IdregApi<S>,
    input: R,
    out: W,
    location: String,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(super) fn new(api: &'a mut IdregApi<S>, input: R, out: W, location: String) -> Self {
        Self {
            api,
            input,
            out,
            location,
        }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", MENU)?;
            let Some(line) = self.prompt("Choice: ")? else {
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::List) => self.list()?,
                Some(Choice::Add) => self.add()?,
                Some(Choice::Remove) => self.remove()?,
                Some(Choice::Edit) => self.edit()?,
                Some(Choice::Exit) => break,
                None => self.say(&[CmdMessage::warning(
                    "Invalid choice. Pick a number from the list.",
                )])?,
            }
        }

        writeln!(self.out, "\n{}", "Goodbye!".bold())?;
        writeln!(self.out, "User data is saved in {}.", self.location)?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_users()?;
        print_users(&mut self.out, &result.listed_users)?;
        self.say(&result.messages)
    }

    fn add(&mut self) -> Result<()> {
        let Some(user_id) = self.prompt_required("User ID: ")? else {
            return Ok(());
        };
        let name = self.prompt_field("Name: ")?;
        let pesel = self.prompt_field("PESEL: ")?;
        let nip = self.prompt_field("NIP: ")?;
        let regon = self.prompt_field("REGON: ")?;

        let record = UserRecord {
            name,
            pesel,
            nip,
            regon,
            ..UserRecord::new(user_id)
        };

        if !self.identifiers_ok(&record)? {
            return self.say(&[CmdMessage::warning("User not added.")]);
        }

        let result = self.api.add_user(record)?;
        self.say(&result.messages)
    }

    fn remove(&mut self) -> Result<()> {
        let Some(user_id) = self.prompt_required("User ID to remove: ")? else {
            return Ok(());
        };
        let result = self.api.remove_user(&user_id)?;
        self.say(&result.messages)
    }

    fn edit(&mut self) -> Result<()> {
        let Some(user_id) = self.prompt_required("User ID to edit: ")? else {
            return Ok(());
        };
        writeln!(self.out, "{}", "Leave a field empty to keep its value.".dimmed())?;
        let name = self.prompt("New name: ")?.unwrap_or_default();
        let pesel = self.prompt("New PESEL: ")?.unwrap_or_default();
        let nip = self.prompt("New NIP: ")?.unwrap_or_default();
        let regon = self.prompt("New REGON: ")?.unwrap_or_default();

        let update = RecordUpdate::from_input(&name, &pesel, &nip, &regon);
        let candidate = UserRecord {
            pesel: update.pesel.clone(),
            nip: update.nip.clone(),
            regon: update.regon.clone(),
            ..UserRecord::new(user_id.clone())
        };
        if !self.identifiers_ok(&candidate)? {
            return self.say(&[CmdMessage::warning("User not changed.")]);
        }

        let result = self.api.edit_user(&user_id, &update)?;
        self.say(&result.messages)
    }

    /// Runs the validators; prints only the failures.
    fn identifiers_ok(&mut self, record: &UserRecord) -> Result<bool> {
        let check = self.api.check_identifiers(record)?;
        if !check.affected_users.is_empty() {
            return Ok(true);
        }
        let failures: Vec<CmdMessage> = check
            .messages
            .into_iter()
            .filter(|m| m.level == idreg::api::MessageLevel::Error)
            .collect();
        self.say(&failures)?;
        Ok(false)
    }

    fn say(&mut self, messages: &[CmdMessage]) -> Result<()> {
        print_messages(&mut self.out, messages)?;
        Ok(())
    }

    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_field(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.prompt(label)?.as_deref().and_then(non_blank))
    }

    fn prompt_required(&mut self, label: &str) -> Result<Option<String>> {
        let value = self.prompt_field(label)?;
        if value.is_none() {
            self.say(&[CmdMessage::warning("User ID is required.")])?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idreg::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn run_menu(api: &mut IdregApi<InMemoryStore>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Menu::new(api, Cursor::new(script.to_string()), &mut out, "memory".into())
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(Choice::parse("1"), Some(Choice::List));
        assert_eq!(Choice::parse(" 5 \n"), Some(Choice::Exit));
        assert_eq!(Choice::parse("6"), None);
        assert_eq!(Choice::parse("abc"), None);
        assert_eq!(Choice::parse(""), None);
    }

    #[test]
    fn add_then_list() {
        let mut api = IdregApi::new(InMemoryStore::new());
        let out = run_menu(&mut api, "2\n7\nJan\n44051401458\n\n\n1\n5\n");

        assert!(out.contains("User 7 added."));
        assert!(out.contains("User 7: Jan"));
        assert!(out.contains("Goodbye!"));
        let user = &api.load().users[0];
        assert_eq!(user.pesel.as_deref(), Some("44051401458"));
        assert_eq!(user.nip, None);
    }

    #[test]
    fn invalid_identifier_blocks_add() {
        let mut api = IdregApi::new(InMemoryStore::new());
        let out = run_menu(&mut api, "2\n7\nJan\n12345678901\n\n\n5\n");

        assert!(out.contains("PESEL 12345678901 is invalid."));
        assert!(out.contains("User not added."));
        assert!(api.load().is_empty());
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut api = IdregApi::new(InMemoryStore::new());
        let out = run_menu(&mut api, "9\nxyz\n5\n");
        assert_eq!(out.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn edit_keeps_blank_fields() {
        let mut api = IdregApi::new(InMemoryStore::new());
        api.add_user(
            UserRecord::new("1")
                .with_name("Old")
                .with_nip("1234563218"),
        )
        .unwrap();

        let out = run_menu(&mut api, "4\n1\nNew\n\n\n\n5\n");

        assert!(out.contains("User 1 updated."));
        let user = &api.load().users[0];
        assert_eq!(user.name.as_deref(), Some("New"));
        assert_eq!(user.nip.as_deref(), Some("1234563218"));
    }

    #[test]
    fn remove_unknown_reports_not_found() {
        let mut api = IdregApi::new(InMemoryStore::new());
        let out = run_menu(&mut api, "3\n42\n5\n");
        assert!(out.contains("User 42 not found."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut api = IdregApi::new(InMemoryStore::new());
        let out = run_menu(&mut api, "1\n");
        assert!(out.contains("No users in the registry."));
        assert!(out.contains("Goodbye!"));
    }
}
