//! In-memory equipment registry executing parsed commands.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{AddCommand, Command, Tag, UpdateCommand};

/// One inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub item_name: String,
    pub serial_number: String,
    pub equipment_type: String,
    pub cost: f64,
    pub purchased_from: String,
    pub purchased_date: String,
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (serial number {}, type {}, cost ${:.2}, purchased from {} on {})",
            self.item_name,
            self.serial_number,
            self.equipment_type,
            self.cost,
            self.purchased_from,
            self.purchased_date
        )
    }
}

/// Outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandResult {
    pub message: String,
    /// Records the command touched or selected, in serial-number order.
    pub equipment: Vec<Equipment>,
}

impl CommandResult {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            equipment: Vec::new(),
        }
    }

    fn with_equipment(message: impl Into<String>, equipment: Vec<Equipment>) -> Self {
        Self {
            message: message.into(),
            equipment,
        }
    }
}

/// Parse a cost: optional leading `$`, no thousands separators, finite and non-negative.
pub fn parse_cost(raw: &str) -> ApplicationResult<f64> {
    let invalid = |reason: &str| ApplicationError::InvalidCost {
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if digits.contains(',') {
        return Err(invalid("',' separators are not allowed"));
    }
    let cost: f64 = digits.parse().map_err(|_| invalid("not a number"))?;
    if !cost.is_finite() || cost < 0.0 {
        return Err(invalid("must be a non-negative amount"));
    }
    Ok(cost)
}

/// Equipment keyed by serial number.
#[derive(Debug, Default)]
pub struct EquipmentManager {
    equipment: BTreeMap<String, Equipment>,
}

impl EquipmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }

    pub fn get(&self, serial_number: &str) -> Option<&Equipment> {
        self.equipment.get(serial_number)
    }

    pub fn add_equipment(&mut self, equipment: Equipment) -> ApplicationResult<()> {
        if self.equipment.contains_key(&equipment.serial_number) {
            return Err(ApplicationError::DuplicateSerialNumber(
                equipment.serial_number,
            ));
        }
        debug!(serial_number = %equipment.serial_number, "added");
        self.equipment
            .insert(equipment.serial_number.clone(), equipment);
        Ok(())
    }

    /// All equipment, or only that of `equipment_type`.
    pub fn list_equipment(&self, equipment_type: Option<&str>) -> Vec<Equipment> {
        self.equipment
            .values()
            .filter(|e| equipment_type.map_or(true, |t| e.equipment_type == t))
            .cloned()
            .collect()
    }

    /// Execute a parsed command against the registry.
    ///
    /// Incorrect commands succeed with their message as the result, so a caller
    /// can print every outcome the same way.
    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: &Command) -> ApplicationResult<CommandResult> {
        let result = match command {
            Command::Add(add) => self.execute_add(add)?,
            Command::Check(check) => {
                let found: Vec<Equipment> = self
                    .equipment
                    .values()
                    .filter(|e| e.item_name == check.item_name)
                    .cloned()
                    .collect();
                CommandResult::with_equipment(
                    format!("Found {} equipment named {}", found.len(), check.item_name),
                    found,
                )
            }
            Command::Delete(delete) => {
                let removed = self
                    .equipment
                    .remove(&delete.serial_number)
                    .ok_or_else(|| {
                        ApplicationError::EquipmentNotFound(delete.serial_number.clone())
                    })?;
                CommandResult::with_equipment(
                    format!("Equipment deleted: {}", removed),
                    vec![removed],
                )
            }
            Command::Update(update) => self.execute_update(update)?,
            Command::List(list) => {
                let listed = self.list_equipment(list.equipment_type.as_deref());
                let label = list.equipment_type.as_deref().unwrap_or("EQUIPMENT");
                CommandResult::with_equipment(
                    format!("TOTAL QUANTITY OF {}: {}", label, listed.len()),
                    listed,
                )
            }
            Command::Incorrect(incorrect) => CommandResult::message(incorrect.message.clone()),
        };
        info!(message = %result.message, "executed");
        Ok(result)
    }

    fn execute_add(&mut self, add: &AddCommand) -> ApplicationResult<CommandResult> {
        let equipment = Equipment {
            item_name: add.item_name.clone(),
            serial_number: add.serial_number.clone(),
            equipment_type: add.equipment_type.clone(),
            cost: parse_cost(&add.cost)?,
            purchased_from: add.purchased_from.clone(),
            purchased_date: add.purchased_date.clone(),
        };
        let message = format!("Equipment successfully added: {}", equipment);
        self.add_equipment(equipment.clone())?;
        Ok(CommandResult::with_equipment(message, vec![equipment]))
    }

    /// Validates everything before touching the record; a failed update changes nothing.
    fn execute_update(&mut self, update: &UpdateCommand) -> ApplicationResult<CommandResult> {
        let cost = update.cost.as_deref().map(parse_cost).transpose()?;
        let record = self
            .equipment
            .get_mut(&update.serial_number)
            .ok_or_else(|| ApplicationError::EquipmentNotFound(update.serial_number.clone()))?;

        for (tag, value) in update.changes() {
            match tag {
                Tag::Name => record.item_name = value.to_string(),
                Tag::EquipmentType => record.equipment_type = value.to_string(),
                Tag::PurchasedFrom => record.purchased_from = value.to_string(),
                Tag::PurchasedDate => record.purchased_date = value.to_string(),
                Tag::Cost | Tag::SerialNumber => {}
            }
        }
        if let Some(cost) = cost {
            record.cost = cost;
        }

        let message = format!("Equipment updated: {}", record);
        Ok(CommandResult::with_equipment(message, vec![record.clone()]))
    }
}
