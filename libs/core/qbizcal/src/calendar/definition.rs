// -----------------------------------------------------------------------------
// CalendarDefinition
// -----------------------------------------------------------------------------
/// Raw data of a calendar as stored by calendar sources.
///
/// Tokens are kept as written. They are normalized and validated when a
/// [`Calendar`](super::Calendar) is created from the definition.
///
/// ```
/// use qbizcal::calendar::{Calendar, CalendarDefinition};
///
/// let def: CalendarDefinition = serde_json::from_str(r#"{
///     "working_days": ["monday", "tuesday", "wednesday", "thursday", "friday"],
///     "holidays": ["January 1st, 2013", "2013-12-25"]
/// }"#).unwrap();
///
/// let cal = Calendar::from_definition(Some("bacs"), &def).unwrap();
/// assert_eq!(cal.name(), Some("bacs"));
/// assert_eq!(cal.holidays().len(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct CalendarDefinition {
    /// Weekdays which are working days. Monday to Friday when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<Vec<String>>,

    /// Dates which are not business days.
    #[serde(default)]
    pub holidays: Vec<String>,

    /// Dates which are business days although they are not working days.
    #[serde(default)]
    pub extra_working_dates: Vec<String>,
}
