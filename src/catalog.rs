//! Marketing plan catalog
//!
//! The single source of plan identifiers, labels and price ranges. The form,
//! the persisted record and the notification endpoint all resolve plans
//! through this table so they cannot drift apart.

use serde::{Deserialize, Serialize};

/// A selectable marketing plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketingPlan {
    BrandBuilding,
    DigitalMarketing,
    FullManagement,
    SocialMedia,
    ContentCreation,
    InfluencerMarketing,
    PerformanceMarketing,
    Custom,
}

impl MarketingPlan {
    /// All plans in display order
    pub const ALL: [MarketingPlan; 8] = [
        Self::BrandBuilding,
        Self::DigitalMarketing,
        Self::FullManagement,
        Self::SocialMedia,
        Self::ContentCreation,
        Self::InfluencerMarketing,
        Self::PerformanceMarketing,
        Self::Custom,
    ];

    /// Stable identifier stored in `selected_services`
    pub fn id(&self) -> &'static str {
        match self {
            Self::BrandBuilding => "brand-building",
            Self::DigitalMarketing => "digital-marketing",
            Self::FullManagement => "full-management",
            Self::SocialMedia => "social-media",
            Self::ContentCreation => "content-creation",
            Self::InfluencerMarketing => "influencer-marketing",
            Self::PerformanceMarketing => "performance-marketing",
            Self::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BrandBuilding => "Brand Building Package",
            Self::DigitalMarketing => "Digital Marketing Suite",
            Self::FullManagement => "Full Marketing Management",
            Self::SocialMedia => "Social Media Marketing",
            Self::ContentCreation => "Content Creation & Strategy",
            Self::InfluencerMarketing => "Influencer Marketing",
            Self::PerformanceMarketing => "Performance Marketing",
            Self::Custom => "Custom Package",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            Self::BrandBuilding => "₹25,000 - ₹50,000/month",
            Self::DigitalMarketing => "₹35,000 - ₹75,000/month",
            Self::FullManagement => "₹80,000 - ₹1,50,000/month",
            Self::SocialMedia => "₹15,000 - ₹35,000/month",
            Self::ContentCreation => "₹20,000 - ₹45,000/month",
            Self::InfluencerMarketing => "₹30,000 - ₹60,000/month",
            Self::PerformanceMarketing => "₹40,000 - ₹90,000/month",
            Self::Custom => "Let's discuss your needs",
        }
    }

    /// Look up a plan by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|plan| plan.id() == id)
    }

    /// Human-readable form used in notifications: "Label (price)"
    pub fn display(&self) -> String {
        format!("{} ({})", self.label(), self.price())
    }
}

/// Expand plan identifiers into their display strings.
///
/// Unknown identifiers are passed through unchanged so nothing the client
/// selected is silently dropped from a notification.
pub fn expand_labels(ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| match MarketingPlan::from_id(id) {
            Some(plan) => plan.display(),
            None => id.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = MarketingPlan::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), MarketingPlan::ALL.len());
    }

    #[test]
    fn test_from_id_resolves_every_plan() {
        for plan in MarketingPlan::ALL {
            assert_eq!(MarketingPlan::from_id(plan.id()), Some(plan));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(MarketingPlan::from_id("seo"), None);
        assert_eq!(MarketingPlan::from_id(""), None);
    }

    #[test]
    fn test_serde_uses_catalog_ids() {
        let json = serde_json::to_string(&MarketingPlan::InfluencerMarketing).unwrap();
        assert_eq!(json, "\"influencer-marketing\"");
        for plan in MarketingPlan::ALL {
            let json = serde_json::to_string(&plan).unwrap();
            assert_eq!(json, format!("\"{}\"", plan.id()));
        }
    }

    #[test]
    fn test_display_combines_label_and_price() {
        assert_eq!(
            MarketingPlan::SocialMedia.display(),
            "Social Media Marketing (₹15,000 - ₹35,000/month)"
        );
    }

    #[test]
    fn test_expand_labels_keeps_order_and_unknowns() {
        let ids = vec![
            "custom".to_string(),
            "mystery".to_string(),
            "brand-building".to_string(),
        ];
        assert_eq!(
            expand_labels(&ids),
            vec![
                "Custom Package (Let's discuss your needs)".to_string(),
                "mystery".to_string(),
                "Brand Building Package (₹25,000 - ₹50,000/month)".to_string(),
            ]
        );
    }
}
