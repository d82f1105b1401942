use super::finder::BookingGroup;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

/// Characters escaped inside `mailto:` header values (RFC 6068).
const MAILTO_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Mail the passenger sends to ask the transport team for a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmendmentRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl AmendmentRequest {
    /// `None` for an empty group: there is nothing to amend.
    pub fn for_group(group: &BookingGroup, recipient: &str) -> Option<Self> {
        let contact = group.primary_contact()?;
        let code = &group.code;

        Some(Self {
            recipient: recipient.to_string(),
            subject: format!("Change Request: {code}"),
            body: format!(
                "Hello Transport Team,\r\n\r\nI need to request a change for booking {code} (Main Contact: {contact})."
            ),
        })
    }

    pub fn mailto(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            utf8_percent_encode(&self.subject, MAILTO_VALUE),
            utf8_percent_encode(&self.body, MAILTO_VALUE)
        )
    }

    pub fn view(&self) -> AmendmentView {
        AmendmentView {
            recipient: self.recipient.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            mailto: self.mailto(),
        }
    }
}

/// Serializable amendment details, including the ready-made link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmendmentView {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub mailto: String,
}
