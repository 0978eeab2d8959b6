use crate::config::BillingPolicy;
use crate::domain::{BillingLine, ReminderEmail, ReminderLine};
use std::collections::HashMap;

/// One reminder per member, in the order members first appear in `lines`.
///
/// Members on the policy's exclusion list get no reminder.
pub fn group_reminders(lines: &[BillingLine], policy: &BillingPolicy) -> Vec<ReminderEmail> {
    let mut reminders: Vec<ReminderEmail> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for line in lines {
        let name = line.member_name();
        if policy.is_excluded(name) {
            continue;
        }

        let at = *position.entry(name).or_insert_with(|| {
            reminders.push(ReminderEmail {
                member_name: name.to_string(),
                recipient: line.member.email.clone(),
                due_date: line.item.due_date,
                lines: Vec::new(),
            });
            reminders.len() - 1
        });

        reminders[at].lines.push(ReminderLine {
            description: line.item.description.clone(),
            amount: line.item.amount,
        });
    }

    reminders
}
