//! Requirement records and the dashboard's fixed inventory.
//!
//! DESIGN
//! ======
//! The inventory is statically seeded and never mutated at runtime, so the
//! aggregate figures shown in the summary tiles are plain derivations over
//! the list rather than cached counters.

#[cfg(test)]
#[path = "requirements_test.rs"]
mod requirements_test;

use std::collections::HashSet;

/// Review priority attached to a requirement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Uppercase display label, matching the badge text.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// CSS modifier selecting the badge color scheme.
    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "requirement-card__badge--high",
            Priority::Medium => "requirement-card__badge--medium",
            Priority::Low => "requirement-card__badge--low",
        }
    }
}

/// A business-change request record displayed in the dashboard.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Requirement {
    pub id: String,
    pub title: String,
    pub department: String,
    pub priority: Priority,
    /// Display string; never parsed.
    pub date: String,
    pub description: String,
    /// Filenames for display only. May be empty.
    #[serde(default)]
    pub attachments: Vec<String>,
    pub status: String,
    pub story_points: u32,
}

/// Requirement inventory shared across dashboard widgets.
#[derive(Clone, Debug, PartialEq)]
pub struct RequirementsState {
    pub items: Vec<Requirement>,
}

impl Default for RequirementsState {
    fn default() -> Self {
        Self { items: seed_requirements() }
    }
}

impl RequirementsState {
    /// Sum of story points across the whole inventory.
    pub fn total_story_points(&self) -> u32 {
        self.items.iter().map(|req| req.story_points).sum()
    }

    /// Number of distinct departments among the listed requirements.
    pub fn department_count(&self) -> usize {
        self.items
            .iter()
            .map(|req| req.department.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Departments offered by the new-requirement form.
pub const DEPARTMENTS: &[&str] = &["Financial Operations", "Digital Banking", "Compliance"];

/// The fixed inventory rendered by the dashboard.
pub fn seed_requirements() -> Vec<Requirement> {
    vec![
        Requirement {
            id: "REQ-001".to_owned(),
            title: "Real-time Payment Processing System".to_owned(),
            department: "Financial Operations".to_owned(),
            priority: Priority::High,
            date: "3/15/2024".to_owned(),
            description: "Implement a real-time payment processing system with support for \
                          multiple payment rails and instant settlement."
                .to_owned(),
            attachments: vec!["payment_flows.docx".to_owned(), "compliance_requirements.pdf".to_owned()],
            status: "Processing".to_owned(),
            story_points: 13,
        },
        Requirement {
            id: "REQ-002".to_owned(),
            title: "Digital Wallet Integration".to_owned(),
            department: "Digital Banking".to_owned(),
            priority: Priority::Medium,
            date: "3/14/2024".to_owned(),
            description: "Integrate major digital wallet providers and enable seamless fund \
                          transfers between accounts."
                .to_owned(),
            attachments: vec!["wallet_specs.pdf".to_owned()],
            status: "Approved".to_owned(),
            story_points: 21,
        },
        Requirement {
            id: "REQ-003".to_owned(),
            title: "KYC/AML Automation Platform".to_owned(),
            department: "Compliance".to_owned(),
            priority: Priority::Low,
            date: "3/13/2024".to_owned(),
            description: "Develop an automated platform for KYC verification and AML monitoring \
                          using AI/ML."
                .to_owned(),
            attachments: vec!["compliance_workflow.pdf".to_owned()],
            status: "Pending Approval".to_owned(),
            story_points: 13,
        },
    ]
}
