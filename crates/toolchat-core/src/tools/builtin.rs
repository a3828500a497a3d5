//! Built-in local tools

use chrono::{DateTime, Local, TimeZone};

use super::registry::LocalToolRegistry;
use crate::types::ToolDescriptor;

pub const CURRENT_DATE_TOOL: &str = "get_current_date";

/// Add every built-in tool to `registry`
pub fn register_builtins(registry: &mut LocalToolRegistry) {
    registry.register(
        ToolDescriptor::new(CURRENT_DATE_TOOL, "Returns the current date and time"),
        |_args| Ok(format_long_date(&Local::now())),
    );
}

/// e.g. `Tuesday, March 4, 2025 at 09:05:07 PM +01:00`
pub fn format_long_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %B %-d, %Y at %I:%M:%S %p %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    #[test]
    fn test_format_long_date() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 21, 5, 7).unwrap();
        assert_eq!(format_long_date(&at), "Tuesday, March 4, 2025 at 09:05:07 PM UTC");

        let offset = FixedOffset::east_opt(3600).unwrap();
        let at = offset.with_ymd_and_hms(2024, 12, 25, 8, 0, 0).unwrap();
        assert_eq!(format_long_date(&at), "Wednesday, December 25, 2024 at 08:00:00 AM +01:00");
    }

    #[test]
    fn test_current_date_tool_ignores_arguments() {
        let registry = LocalToolRegistry::with_builtins();
        let text = registry.invoke(CURRENT_DATE_TOOL, &json!({"unused": true})).unwrap();
        assert!(text.contains(" at "));
    }
}
