//! Staff summaries.

use crate::model::staff::{StaffMember, StaffStatus};

/// Total number of staff records.
pub fn headcount(staff: &[StaffMember]) -> usize {
    staff.len()
}

/// Number of currently active staff members.
pub fn active_count(staff: &[StaffMember]) -> usize {
    staff
        .iter()
        .filter(|member| member.status == StaffStatus::Active)
        .count()
}

/// Salary mass: Σ monthly salaries.
pub fn total_salaries(staff: &[StaffMember]) -> u64 {
    staff.iter().map(|member| u64::from(member.salary)).sum()
}

/// Outstanding advances: Σ advances.
pub fn total_advances(staff: &[StaffMember]) -> u64 {
    staff.iter().map(|member| u64::from(member.advance)).sum()
}

#[cfg(test)]
mod tests {
    use super::{active_count, headcount, total_advances, total_salaries};
    use crate::model::staff::{StaffMember, StaffStatus};

    #[test]
    fn staff_totals() {
        let staff = vec![
            StaffMember::new("Konan Yao", "Caissier", "07 11 22 33", 120_000, 30_000, StaffStatus::Active),
            StaffMember::new("Diomandé Ali", "Aide", "05 66 77 88", 75_000, 20_000, StaffStatus::OnLeave),
        ];
        assert_eq!(headcount(&staff), 2);
        assert_eq!(active_count(&staff), 1);
        assert_eq!(total_salaries(&staff), 195_000);
        assert_eq!(total_advances(&staff), 50_000);
    }
}
