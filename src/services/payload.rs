//! Wire shapes sent to the record store and the notification function

use crate::catalog::expand_labels;
use crate::state::{names, Draft};
use serde::{Deserialize, Serialize};

/// Row inserted into the submissions table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    pub company: String,
    /// `null` when the client left it blank
    pub website: Option<String>,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub goals: String,
    pub selected_services: Vec<String>,
    pub budget: String,
    pub timeline: String,
}

impl OnboardingRecord {
    pub fn from_draft(draft: &Draft) -> Self {
        let website = draft.text(names::WEBSITE);
        Self {
            company: draft.text(names::COMPANY).to_string(),
            website: (!website.is_empty()).then(|| website.to_string()),
            contact_name: draft.text(names::CONTACT_NAME).to_string(),
            email: draft.text(names::EMAIL).to_string(),
            phone: draft.text(names::PHONE).to_string(),
            goals: draft.text(names::GOALS).to_string(),
            selected_services: draft.selections(names::SERVICES).to_vec(),
            budget: draft.text(names::BUDGET).to_string(),
            timeline: draft.text(names::TIMELINE).to_string(),
        }
    }
}

/// JSON body for the notification function
///
/// Missing keys read as empty so the endpoint accepts partial bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationPayload {
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub goals: String,
    /// Plan identifiers
    pub services: Vec<String>,
    /// "Label (price)" for each entry of `services`
    pub service_labels: Vec<String>,
    pub budget: String,
    pub timeline: String,
}

impl NotificationPayload {
    pub fn from_record(record: &OnboardingRecord) -> Self {
        Self {
            company: record.company.clone(),
            website: record.website.clone(),
            contact_name: record.contact_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            goals: record.goals.clone(),
            services: record.selected_services.clone(),
            service_labels: expand_labels(&record.selected_services),
            budget: record.budget.clone(),
            timeline: record.timeline.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn example_draft() -> Draft {
        let mut draft = Draft::new();
        draft.set_field(names::COMPANY, "Acme Co.");
        draft.set_field(names::WEBSITE, "");
        draft.set_field(names::CONTACT_NAME, "Jane Doe");
        draft.set_field(names::EMAIL, "jane@acme.com");
        draft.set_field(names::PHONE, "9876543210");
        draft.set_field(names::GOALS, "Grow Instagram reach and launch a campaign");
        draft.toggle_multi_value(names::SERVICES, "social-media", true);
        draft.set_field(names::BUDGET, "₹20,000–₹50,000");
        draft.set_field(names::TIMELINE, "Start next month");
        draft
    }

    #[test]
    fn test_record_uses_snake_case_columns() {
        let record = OnboardingRecord::from_draft(&example_draft());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "company": "Acme Co.",
                "website": null,
                "contact_name": "Jane Doe",
                "email": "jane@acme.com",
                "phone": "9876543210",
                "goals": "Grow Instagram reach and launch a campaign",
                "selected_services": ["social-media"],
                "budget": "₹20,000–₹50,000",
                "timeline": "Start next month"
            })
        );
    }

    #[test]
    fn test_record_keeps_website_when_present() {
        let mut draft = example_draft();
        draft.set_field(names::WEBSITE, "https://acme.com");
        let record = OnboardingRecord::from_draft(&draft);
        assert_eq!(record.website.as_deref(), Some("https://acme.com"));
    }

    #[test]
    fn test_notification_payload_expands_labels() {
        let record = OnboardingRecord::from_draft(&example_draft());
        let payload = NotificationPayload::from_record(&record);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["contactName"], "Jane Doe");
        assert_eq!(value["services"], json!(["social-media"]));
        assert_eq!(
            value["serviceLabels"],
            json!(["Social Media Marketing (₹15,000 - ₹35,000/month)"])
        );
        assert!(value.get("website").is_none());
    }

    #[test]
    fn test_notification_payload_accepts_minimal_body() {
        // Older clients send neither phone nor labels
        let payload: NotificationPayload = serde_json::from_value(json!({
            "company": "Acme Co.",
            "contactName": "Jane Doe",
            "email": "jane@acme.com",
            "goals": "Grow Instagram reach",
            "services": ["custom"],
            "budget": "₹1",
            "timeline": "Soon"
        }))
        .unwrap();
        assert_eq!(payload.phone, "");
        assert!(payload.service_labels.is_empty());
        assert_eq!(payload.website, None);
    }
}
