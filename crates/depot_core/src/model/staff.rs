//! Staff record.

use serde::{Deserialize, Serialize};

use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// Employment state of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    /// Currently working.
    Active,
    /// On leave.
    OnLeave,
}

/// One employee of the depot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: RecordId,
    pub name: String,
    /// Job title (cashier, driver, ...).
    pub role: String,
    /// Contact phone, free text.
    pub phone: String,
    /// Monthly salary.
    pub salary: u32,
    /// Outstanding salary advance.
    pub advance: u32,
    pub status: StaffStatus,
}

impl StaffMember {
    /// Creates a staff record with a fresh creation-time id.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        phone: impl Into<String>,
        salary: u32,
        advance: u32,
        status: StaffStatus,
    ) -> Self {
        Self {
            id: RecordId::now(),
            name: name.into(),
            role: role.into(),
            phone: phone.into(),
            salary,
            advance,
            status,
        }
    }

    /// Net pay: salary − advance. Signed; an advance can exceed the salary.
    pub fn net_pay(&self) -> i64 {
        i64::from(self.salary) - i64::from(self.advance)
    }
}

impl Record for StaffMember {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("role", &self.role)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{StaffMember, StaffStatus};

    #[test]
    fn net_pay_subtracts_the_advance() {
        let member = StaffMember::new("Konan Yao", "Caissier", "07 11 22 33", 120_000, 30_000, StaffStatus::Active);
        assert_eq!(member.net_pay(), 90_000);
    }
}
