use serde::Serialize;

/// Per-worker notification and privacy toggles.
///
/// One row per worker in `user_settings`; a worker without a row gets the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSettings {
    pub worker_id: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub worktime_reminder: bool,
    pub leave_status_update: bool,
    pub share_location: bool,
    pub show_online_status: bool,
    pub public_profile: bool,
    pub auto_checkout: bool,
    pub break_reminder: bool,
    pub overtime_alert: bool,
}

impl UserSettings {
    pub fn defaults_for(worker_id: &str) -> Self {
        Self {
            worker_id: worker_id.to_string(),
            email_notifications: true,
            push_notifications: true,
            sms_notifications: false,
            worktime_reminder: true,
            leave_status_update: true,
            share_location: true,
            show_online_status: true,
            public_profile: false,
            auto_checkout: false,
            break_reminder: true,
            overtime_alert: false,
        }
    }

    /// All known keys, in display order.
    pub const KEYS: [&'static str; 11] = [
        "email_notifications",
        "push_notifications",
        "sms_notifications",
        "worktime_reminder",
        "leave_status_update",
        "share_location",
        "show_online_status",
        "public_profile",
        "auto_checkout",
        "break_reminder",
        "overtime_alert",
    ];

    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            "email_notifications" => Some(self.email_notifications),
            "push_notifications" => Some(self.push_notifications),
            "sms_notifications" => Some(self.sms_notifications),
            "worktime_reminder" => Some(self.worktime_reminder),
            "leave_status_update" => Some(self.leave_status_update),
            "share_location" => Some(self.share_location),
            "show_online_status" => Some(self.show_online_status),
            "public_profile" => Some(self.public_profile),
            "auto_checkout" => Some(self.auto_checkout),
            "break_reminder" => Some(self.break_reminder),
            "overtime_alert" => Some(self.overtime_alert),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: bool) -> bool {
        match key {
            "email_notifications" => self.email_notifications = value,
            "push_notifications" => self.push_notifications = value,
            "sms_notifications" => self.sms_notifications = value,
            "worktime_reminder" => self.worktime_reminder = value,
            "leave_status_update" => self.leave_status_update = value,
            "share_location" => self.share_location = value,
            "show_online_status" => self.show_online_status = value,
            "public_profile" => self.public_profile = value,
            "auto_checkout" => self.auto_checkout = value,
            "break_reminder" => self.break_reminder = value,
            "overtime_alert" => self.overtime_alert = value,
            _ => return false,
        }
        true
    }
}
