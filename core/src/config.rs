use serde::{Deserialize, Serialize};

/// Which suggestion catalog a session is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanCategory {
    Health,
    Life,
}

/// One entry of a suggestion catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanListing {
    pub plan_id: String,
    pub label: String,
    pub provider: String,
    pub url: String,
}

/// Fixed narration strings spoken at each stage of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationPrompts {
    pub greeting: String,
    pub profile_prompt: String,
    pub health_leadin: String,
    pub life_leadin: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PlanCatalogFile {
    health: Vec<PlanListing>,
    life: Vec<PlanListing>,
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub health_plans: Vec<PlanListing>,
    pub life_plans: Vec<PlanListing>,
    pub narration: NarrationPrompts,
}

impl AdvisorConfig {
    pub fn plans_for(&self, category: PlanCategory) -> &[PlanListing] {
        match category {
            PlanCategory::Health => &self.health_plans,
            PlanCategory::Life => &self.life_plans,
        }
    }

    /// Load from the data/ directory.
    /// In tests, use AdvisorConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/plans/plan_suggestions.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let catalog: PlanCatalogFile = serde_json::from_str(&content)?;

        let prompts_path = format!("{data_dir}/narration/prompts.json");
        let prompts_content = std::fs::read_to_string(&prompts_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {prompts_path}: {e}"))?;
        let narration: NarrationPrompts = serde_json::from_str(&prompts_content)?;

        Ok(Self {
            health_plans: catalog.health,
            life_plans: catalog.life,
            narration,
        })
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        let health_plans = vec![
            PlanListing {
                plan_id: "star_comprehensive".into(),
                label: "Star Health Comprehensive Plan".into(),
                provider: "Star Health".into(),
                url: "https://www.starhealth.in".into(),
            },
            PlanListing {
                plan_id: "niva_recharge".into(),
                label: "Niva Bupa Health Recharge".into(),
                provider: "Niva Bupa".into(),
                url: "https://www.nivabupa.com".into(),
            },
            PlanListing {
                plan_id: "care_health".into(),
                label: "Care Health Insurance".into(),
                provider: "Care".into(),
                url: "https://www.careinsurance.com".into(),
            },
        ];

        let life_plans = vec![
            PlanListing {
                plan_id: "hdfc_click2protect".into(),
                label: "HDFC Click 2 Protect".into(),
                provider: "HDFC Life".into(),
                url: "https://www.hdfclife.com".into(),
            },
            PlanListing {
                plan_id: "max_smart_secure".into(),
                label: "Max Life Smart Secure Plus".into(),
                provider: "Max Life".into(),
                url: "https://www.maxlifeinsurance.com".into(),
            },
            PlanListing {
                plan_id: "lic_tech_term".into(),
                label: "LIC Tech Term Plan".into(),
                provider: "LIC".into(),
                url: "https://licindia.in".into(),
            },
        ];

        Self {
            health_plans,
            life_plans,
            narration: NarrationPrompts {
                greeting: "How can I help you today?".into(),
                profile_prompt:
                    "Please provide your age, income, dependents, assets, and cover.".into(),
                health_leadin: "Here are some good health insurance plans.".into(),
                life_leadin: "These are the best life insurance options.".into(),
            },
        }
    }
}
