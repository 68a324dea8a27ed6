//! Raw attendee records as read from the roster.

/// Symbolic column names used by the roster.
///
/// Headers are converted to lower-case symbols on ingest, so `"First_Name"`
/// and `"first name"` both resolve to [`FIRST_NAME`].
pub mod columns {
    pub const ID: &str = "id";
    pub const REGISTRATION_DATE: &str = "regdate";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email_address";
    pub const HOME_PHONE: &str = "homephone";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIPCODE: &str = "zipcode";

    /// Columns the pipeline reads for every record.
    pub const EXPECTED: [&str; 5] = [ID, FIRST_NAME, ZIPCODE, HOME_PHONE, REGISTRATION_DATE];
}

/// One attendee row: an ordered mapping from column symbol to cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRecord {
    /// 1-based line number in the source file (the header is line 1).
    pub line: usize,
    /// 1-based position of the record among data rows.
    pub ordinal: usize,
    fields: Vec<(String, String)>,
}

impl AttendeeRecord {
    pub fn new(line: usize, ordinal: usize, fields: Vec<(String, String)>) -> Self {
        Self {
            line,
            ordinal,
            fields,
        }
    }

    /// Returns the value for `column`, or `None` when the column is absent or the cell is blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.trim().is_empty())
    }

    /// Iterate over `(column, value)` pairs in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Record identifier; falls back to the record ordinal when the cell is blank.
    pub fn id(&self) -> String {
        self.get(columns::ID)
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| self.ordinal.to_string())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.get(columns::FIRST_NAME)
    }

    pub fn zipcode(&self) -> Option<&str> {
        self.get(columns::ZIPCODE)
    }

    pub fn home_phone(&self) -> Option<&str> {
        self.get(columns::HOME_PHONE)
    }

    pub fn registered_at(&self) -> Option<&str> {
        self.get(columns::REGISTRATION_DATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> AttendeeRecord {
        AttendeeRecord::new(
            2,
            1,
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn blank_cells_read_as_missing() {
        let record = record(&[("id", "1"), ("zipcode", "  ")]);
        assert_eq!(record.zipcode(), None);
        assert_eq!(record.home_phone(), None);
    }

    #[test]
    fn id_falls_back_to_ordinal() {
        let record = record(&[("first_name", "Allison")]);
        assert_eq!(record.id(), "1");
        assert_eq!(record.first_name(), Some("Allison"));
    }

    #[test]
    fn fields_keep_source_order() {
        let record = record(&[("id", "7"), ("first_name", "Sarah"), ("zipcode", "14841")]);
        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "first_name", "zipcode"]);
    }
}
