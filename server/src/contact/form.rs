use serde::Deserialize;

use super::provider::ContactMessage;

/// What the visitor has typed so far. Every field starts out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub contact: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Contact,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Contact,
        FormField::Subject,
        FormField::Message,
    ];
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Contact => &self.contact,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Contact => &mut self.contact,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Replaces a single field. Nothing is validated until submit.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Exact emptiness, whitespace counts as content
    pub fn has_empty_field(&self) -> bool {
        FormField::ALL
            .into_iter()
            .any(|field| self.get(field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn into_fields(self) -> [(FormField, String); 4] {
        [
            (FormField::Name, self.name),
            (FormField::Contact, self.contact),
            (FormField::Subject, self.subject),
            (FormField::Message, self.message),
        ]
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            from_name: self.name.clone(),
            contact_info: self.contact.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}
