//! Domain entities: tags, command words and parsed commands

use std::fmt;

use crate::domain::messages::{
    ADD_DESCRIPTION, CHECK_DESCRIPTION, DELETE_DESCRIPTION, LIST_DESCRIPTION,
    MESSAGE_UNRECOGNIZED_TAG, UPDATE_DESCRIPTION,
};

/// Number of values `add` requires, in [`Tag::ADD_ORDER`].
pub const ADD_ARITY: usize = 6;

/// Field tags shared by `add` and `update`.
///
/// `check` and `delete` use their own single markers (`n/` and `s/`), see
/// [`CHECK_MARKER`] and [`DELETE_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Name,
    SerialNumber,
    EquipmentType,
    Cost,
    PurchasedFrom,
    PurchasedDate,
}

pub const CHECK_MARKER: &str = "n";
pub const DELETE_MARKER: &str = "s";

impl Tag {
    /// Positional order of the `add` arguments.
    pub const ADD_ORDER: [Tag; ADD_ARITY] = [
        Tag::Name,
        Tag::SerialNumber,
        Tag::EquipmentType,
        Tag::Cost,
        Tag::PurchasedFrom,
        Tag::PurchasedDate,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Tag::Name => "n",
            Tag::SerialNumber => "sn",
            Tag::EquipmentType => "t",
            Tag::Cost => "c",
            Tag::PurchasedFrom => "pf",
            Tag::PurchasedDate => "pd",
        }
    }

    /// Case-sensitive lookup of a tag name (without the `/`).
    pub fn from_marker(marker: &str) -> Option<Self> {
        Tag::ADD_ORDER.into_iter().find(|t| t.marker() == marker)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.marker())
    }
}

/// Recognized command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Check,
    Delete,
    Update,
    List,
}

impl CommandWord {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "add" => Some(CommandWord::Add),
            "check" | "view" => Some(CommandWord::Check),
            "delete" => Some(CommandWord::Delete),
            "update" => Some(CommandWord::Update),
            "list" => Some(CommandWord::List),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Check => "check",
            CommandWord::Delete => "delete",
            CommandWord::Update => "update",
            CommandWord::List => "list",
        }
    }

    /// Capitalized name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            CommandWord::Add => "Add",
            CommandWord::Check => "Check",
            CommandWord::Delete => "Delete",
            CommandWord::Update => "Update",
            CommandWord::List => "List",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandWord::Add => ADD_DESCRIPTION,
            CommandWord::Check => CHECK_DESCRIPTION,
            CommandWord::Delete => DELETE_DESCRIPTION,
            CommandWord::Update => UPDATE_DESCRIPTION,
            CommandWord::List => LIST_DESCRIPTION,
        }
    }

    /// Word followed by its description, as shown for a malformed command.
    pub fn usage(self) -> String {
        format!("{}{}", self.as_str(), self.description())
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    pub item_name: String,
    pub serial_number: String,
    pub equipment_type: String,
    pub cost: String,
    pub purchased_from: String,
    pub purchased_date: String,
}

impl AddCommand {
    /// Build from values in [`Tag::ADD_ORDER`].
    pub fn from_args(args: [String; ADD_ARITY]) -> Self {
        let [item_name, serial_number, equipment_type, cost, purchased_from, purchased_date] =
            args;
        Self {
            item_name,
            serial_number,
            equipment_type,
            cost,
            purchased_from,
            purchased_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    pub item_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    pub serial_number: String,
}

/// Why an update token was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnrecognizedTag,
    EmptyValue,
}

/// An update token that did not change any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredTag {
    pub tag: String,
    pub value: String,
    pub reason: IgnoreReason,
}

impl fmt::Display for IgnoredTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            IgnoreReason::UnrecognizedTag => write!(
                f,
                "`{}` not updated for type {}: {}",
                self.value, self.tag, MESSAGE_UNRECOGNIZED_TAG
            ),
            IgnoreReason::EmptyValue => write!(f, "{}/ ignored: no value given", self.tag),
        }
    }
}

/// Finalized update: the serial number is always present, every other field
/// only when it was given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateCommand {
    pub serial_number: String,
    pub item_name: Option<String>,
    pub equipment_type: Option<String>,
    pub cost: Option<String>,
    pub purchased_from: Option<String>,
    pub purchased_date: Option<String>,
    /// Tokens that were skipped while building, in input order.
    pub ignored: Vec<IgnoredTag>,
}

impl UpdateCommand {
    /// Fields to change, in [`Tag::ADD_ORDER`] minus the serial number.
    pub fn changes(&self) -> Vec<(Tag, &str)> {
        [
            (Tag::Name, &self.item_name),
            (Tag::EquipmentType, &self.equipment_type),
            (Tag::Cost, &self.cost),
            (Tag::PurchasedFrom, &self.purchased_from),
            (Tag::PurchasedDate, &self.purchased_date),
        ]
        .into_iter()
        .filter_map(|(tag, value)| value.as_deref().map(|v| (tag, v)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand {
    pub equipment_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectCommand {
    pub message: String,
}

/// Result of parsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Check(CheckCommand),
    Delete(DeleteCommand),
    Update(UpdateCommand),
    List(ListCommand),
    Incorrect(IncorrectCommand),
}

impl Command {
    pub fn incorrect(message: impl Into<String>) -> Self {
        Command::Incorrect(IncorrectCommand {
            message: message.into(),
        })
    }

    pub fn is_incorrect(&self) -> bool {
        matches!(self, Command::Incorrect(_))
    }

    pub fn word(&self) -> Option<CommandWord> {
        match self {
            Command::Add(_) => Some(CommandWord::Add),
            Command::Check(_) => Some(CommandWord::Check),
            Command::Delete(_) => Some(CommandWord::Delete),
            Command::Update(_) => Some(CommandWord::Update),
            Command::List(_) => Some(CommandWord::List),
            Command::Incorrect(_) => None,
        }
    }
}

/// Renders valid commands back in input syntax; incorrect ones as their message.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add(add) => {
                write!(f, "{}", CommandWord::Add)?;
                let values = [
                    &add.item_name,
                    &add.serial_number,
                    &add.equipment_type,
                    &add.cost,
                    &add.purchased_from,
                    &add.purchased_date,
                ];
                for (tag, value) in Tag::ADD_ORDER.iter().zip(values) {
                    write!(f, " {}{}", tag, value)?;
                }
                Ok(())
            }
            Command::Check(check) => {
                write!(f, "{} {}/{}", CommandWord::Check, CHECK_MARKER, check.item_name)
            }
            Command::Delete(delete) => write!(
                f,
                "{} {}/{}",
                CommandWord::Delete,
                DELETE_MARKER,
                delete.serial_number
            ),
            Command::Update(update) => {
                write!(
                    f,
                    "{} {}{}",
                    CommandWord::Update,
                    Tag::SerialNumber,
                    update.serial_number
                )?;
                for (tag, value) in update.changes() {
                    write!(f, " {}{}", tag, value)?;
                }
                Ok(())
            }
            Command::List(list) => match &list.equipment_type {
                Some(equipment_type) => write!(f, "{} {}", CommandWord::List, equipment_type),
                None => write!(f, "{}", CommandWord::List),
            },
            Command::Incorrect(incorrect) => f.write_str(&incorrect.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("n", Some(Tag::Name))]
    #[case("sn", Some(Tag::SerialNumber))]
    #[case("t", Some(Tag::EquipmentType))]
    #[case("c", Some(Tag::Cost))]
    #[case("pf", Some(Tag::PurchasedFrom))]
    #[case("pd", Some(Tag::PurchasedDate))]
    #[case("N", None)]
    #[case("s", None)]
    #[case("", None)]
    fn test_tag_from_marker(#[case] marker: &str, #[case] expected: Option<Tag>) {
        assert_eq!(Tag::from_marker(marker), expected);
    }

    #[test]
    fn test_view_is_alias_for_check() {
        assert_eq!(CommandWord::from_word("view"), Some(CommandWord::Check));
        assert_eq!(CommandWord::from_word("check"), Some(CommandWord::Check));
        assert_eq!(CommandWord::from_word("Add"), None);
    }

    #[test]
    fn test_usage_joins_word_and_description() {
        let usage = CommandWord::Delete.usage();
        assert!(usage.starts_with("delete: "));
        assert!(usage.contains("s/SERIAL_NUMBER"));
    }

    #[test]
    fn test_update_display_lists_only_given_fields() {
        let command = Command::Update(UpdateCommand {
            serial_number: "ABC".into(),
            cost: Some("2000".into()),
            item_name: Some("Mixer".into()),
            ..Default::default()
        });
        assert_eq!(command.to_string(), "update sn/ABC n/Mixer c/2000");
    }

    #[test]
    fn test_ignored_tag_display() {
        let ignored = IgnoredTag {
            tag: "zz".into(),
            value: "ignored".into(),
            reason: IgnoreReason::UnrecognizedTag,
        };
        assert_eq!(
            ignored.to_string(),
            "`ignored` not updated for type zz: Unrecognised Tag"
        );
    }
}
