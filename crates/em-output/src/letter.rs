//! The thank-you form letter.

use askama::Template;

use em_model::LetterFields;

use crate::error::Result;

/// Form letter template; placeholders are the [`LetterFields`] names.
#[derive(Template)]
#[template(path = "form_letter.html")]
pub struct FormLetter<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub phone: &'a str,
    pub zipcode: &'a str,
    pub legislators: &'a str,
    pub hour: u32,
    pub weekday: &'a str,
}

impl<'a> From<&'a LetterFields> for FormLetter<'a> {
    fn from(fields: &'a LetterFields) -> Self {
        Self {
            id: &fields.id,
            name: &fields.name,
            phone: &fields.phone,
            zipcode: &fields.zipcode,
            legislators: &fields.legislators,
            hour: fields.hour,
            weekday: &fields.weekday,
        }
    }
}

/// Render the form letter for one attendee. Field values are HTML-escaped.
pub fn render_letter(fields: &LetterFields) -> Result<String> {
    Ok(FormLetter::from(fields).render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> LetterFields {
        LetterFields {
            id: "1".to_string(),
            name: "Allison".to_string(),
            phone: "6154385000".to_string(),
            zipcode: "20010".to_string(),
            legislators: "Eleanor Holmes Norton".to_string(),
            hour: 10,
            weekday: "Wednesday".to_string(),
        }
    }

    #[test]
    fn fills_every_placeholder() {
        let html = render_letter(&fields()).unwrap();
        assert!(html.contains("<h1>Thanks Allison</h1>"));
        assert!(html.contains("Eleanor Holmes Norton"));
        assert!(html.contains("on a Wednesday at 10:00"));
        assert!(html.contains("6154385000"));
        assert!(html.contains("zip code 20010"));
        assert!(html.contains("Attendee #1"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn escapes_markup_in_values() {
        let mut fields = fields();
        fields.name = "<b>Al".to_string();
        let html = render_letter(&fields).unwrap();
        assert!(html.contains("Thanks &lt;b&gt;Al</h1>"));
    }
}
