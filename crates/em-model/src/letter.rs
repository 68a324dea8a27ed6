/// Values merged into one attendee's form letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFields {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub zipcode: String,
    /// Comma-separated official names, or the lookup fallback sentence.
    pub legislators: String,
    pub hour: u32,
    pub weekday: String,
}
