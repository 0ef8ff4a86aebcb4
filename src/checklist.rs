/// Checklist registry: checklists and the hostname rules that select them
use serde::{Deserialize, Serialize};

/// A named, ordered list of talking points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checklist {
    pub key: String,
    pub items: Vec<String>,
}

/// Exact hostname → checklist keys, in display order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostnameRule {
    pub hostname: String,
    pub checklists: Vec<String>,
}

/// Immutable lookup tables handed to the refresher at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChecklistRegistry {
    #[serde(default)]
    pub checklists: Vec<Checklist>,
    #[serde(default)]
    pub rules: Vec<HostnameRule>,
}

impl ChecklistRegistry {
    pub fn new() -> Self {
        ChecklistRegistry {
            checklists: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// The built-in checklists and hostname rules
    pub fn builtin() -> Self {
        ChecklistRegistry::new()
            .with_checklist(
                "hiring.review.mlre",
                &[
                    "Product Development Depth",
                    "ML Depth",
                    "Engineering Depth",
                    "Ownership, Agency, and ability to lead projects",
                    "Learnability",
                    "Ambitiousness",
                ],
            )
            .with_checklist(
                "hiring.interview",
                &[
                    "Difficult piece to learn",
                    "Projects that impress you",
                    "Thoughts on general intelligence",
                ],
            )
            .with_checklist(
                "hiring.refcheck",
                &[
                    "Explain the role",
                    "Ask about conflicts",
                    "Ask about speed",
                    "Ask about growth in some aspect",
                    "Figure out reasons why this person could leave",
                    "What would be a complementary hire for this person",
                ],
            )
            .with_checklist(
                "1:1",
                &[
                    "What are they learning? What am I learning?",
                    "Clarify current responsibilities",
                    "Feedback from striving for excellence angle",
                    "Anything I can do for them?",
                ],
            )
            .with_checklist(
                "communication",
                &["Is it true", "Is it necessary", "Is it polite"],
            )
            .with_rule(
                "skit.hire.trakstar.com",
                &["hiring.review.mlre", "hiring.interview", "hiring.refcheck"],
            )
            .with_rule("meet.google.com", &["1:1"])
            .with_rule("app.slack.com", &["communication"])
            .with_rule("app.shortwave.com", &["communication"])
            .with_rule("mail.google.com", &["communication"])
    }

    /// Add a checklist, replacing any earlier one with the same key in place.
    pub fn with_checklist(mut self, key: &str, items: &[&str]) -> Self {
        let checklist = Checklist {
            key: key.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        };

        match self.checklists.iter_mut().find(|c| c.key == key) {
            Some(existing) => *existing = checklist,
            None => self.checklists.push(checklist),
        }
        self
    }

    /// Add a hostname rule, replacing any earlier rule for the same hostname in place.
    pub fn with_rule(mut self, hostname: &str, keys: &[&str]) -> Self {
        let rule = HostnameRule {
            hostname: hostname.to_string(),
            checklists: keys.iter().map(|key| key.to_string()).collect(),
        };

        match self.rules.iter_mut().find(|r| r.hostname == hostname) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    pub fn checklist(&self, key: &str) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.key == key)
    }

    pub fn rule(&self, hostname: &str) -> Option<&HostnameRule> {
        self.rules.iter().find(|r| r.hostname == hostname)
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.hostname.as_str())
    }

    /// Checklists for an exact hostname match, in rule order.
    ///
    /// Keys that name no known checklist are skipped. An unmatched hostname
    /// yields an empty vector.
    pub fn resolve(&self, hostname: &str) -> Vec<&Checklist> {
        let Some(rule) = self.rule(hostname) else {
            return Vec::new();
        };

        rule.checklists
            .iter()
            .filter_map(|key| {
                let checklist = self.checklist(key);
                if checklist.is_none() {
                    log::debug!("rule for {} names unknown checklist {}", hostname, key);
                }
                checklist
            })
            .collect()
    }
}
