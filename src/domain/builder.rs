//! Accumulator for `update` commands.

use tracing::{debug, warn};

use crate::domain::entities::{Command, IgnoreReason, IgnoredTag, Tag, UpdateCommand};
use crate::domain::messages::ErrorKind;

/// Collects update fields token by token.
///
/// Setting a field twice keeps the later value. Unknown tags and empty values
/// are recorded and skipped; they never abort the build.
#[derive(Debug, Default)]
pub struct UpdateBuilder {
    serial_number: Option<String>,
    item_name: Option<String>,
    equipment_type: Option<String>,
    cost: Option<String>,
    purchased_from: Option<String>,
    purchased_date: Option<String>,
    ignored: Vec<IgnoredTag>,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, tag: Tag, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        let slot = match tag {
            Tag::Name => &mut self.item_name,
            Tag::SerialNumber => &mut self.serial_number,
            Tag::EquipmentType => &mut self.equipment_type,
            Tag::Cost => &mut self.cost,
            Tag::PurchasedFrom => &mut self.purchased_from,
            Tag::PurchasedDate => &mut self.purchased_date,
        };
        debug!(%tag, %value, "set");
        if let Some(previous) = slot.replace(value) {
            debug!(%tag, %previous, "overwritten by later tag");
        }
        self
    }

    /// Apply one `tag/value` token.
    pub fn apply_token(&mut self, token: &str) -> &mut Self {
        // extract_arguments only yields tokens that contain a '/'
        debug_assert!(token.contains('/'), "tag token without '/': {token:?}");
        let Some((marker, value)) = token.split_once('/') else {
            return self.ignore(token, "", IgnoreReason::UnrecognizedTag);
        };
        let value = value.trim();

        match Tag::from_marker(marker) {
            Some(_) if value.is_empty() => self.ignore(marker, value, IgnoreReason::EmptyValue),
            Some(tag) => self.set(tag, value),
            None => self.ignore(marker, value, IgnoreReason::UnrecognizedTag),
        }
    }

    fn ignore(&mut self, tag: &str, value: &str, reason: IgnoreReason) -> &mut Self {
        let ignored = IgnoredTag {
            tag: tag.to_string(),
            value: value.to_string(),
            reason,
        };
        warn!("{}", ignored);
        self.ignored.push(ignored);
        self
    }

    pub fn ignored(&self) -> &[IgnoredTag] {
        &self.ignored
    }

    /// Finalize into an update, or an incorrect command when no serial number was given.
    pub fn finish(self) -> Command {
        let Some(serial_number) = self.serial_number else {
            debug!("update without serial number rejected");
            return Command::incorrect(ErrorKind::MissingRequiredField.message());
        };
        Command::Update(UpdateCommand {
            serial_number,
            item_name: self.item_name,
            equipment_type: self.equipment_type,
            cost: self.cost,
            purchased_from: self.purchased_from,
            purchased_date: self.purchased_date,
            ignored: self.ignored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messages::MESSAGE_SERIAL_REQUIRED;

    fn update_of(command: Command) -> UpdateCommand {
        match command {
            Command::Update(update) => update,
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_later_value_wins() {
        let mut builder = UpdateBuilder::new();
        builder
            .apply_token("sn/ABC")
            .apply_token("c/1000")
            .apply_token("c/2000");
        let update = update_of(builder.finish());
        assert_eq!(update.cost.as_deref(), Some("2000"));
    }

    #[test]
    fn test_missing_serial_number_is_incorrect() {
        let mut builder = UpdateBuilder::new();
        builder.apply_token("n/Foo").apply_token("c/500");
        assert_eq!(builder.finish(), Command::incorrect(MESSAGE_SERIAL_REQUIRED));
    }

    #[test]
    fn test_unknown_tag_is_recorded_not_fatal() {
        let mut builder = UpdateBuilder::new();
        builder.apply_token("sn/ABC").apply_token("zz/ignored");
        assert_eq!(builder.ignored().len(), 1);
        let update = update_of(builder.finish());
        assert_eq!(update.serial_number, "ABC");
        assert_eq!(update.ignored[0].tag, "zz");
        assert_eq!(update.ignored[0].reason, IgnoreReason::UnrecognizedTag);
    }

    #[test]
    fn test_empty_value_is_skipped() {
        let mut builder = UpdateBuilder::new();
        builder.apply_token("sn/ABC").apply_token("n/");
        let update = update_of(builder.finish());
        assert_eq!(update.item_name, None);
        assert_eq!(update.ignored[0].reason, IgnoreReason::EmptyValue);
    }

    #[test]
    fn test_empty_serial_number_does_not_satisfy_requirement() {
        let mut builder = UpdateBuilder::new();
        builder.apply_token("sn/").apply_token("c/1");
        assert!(builder.finish().is_incorrect());
    }
}
