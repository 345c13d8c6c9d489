//! Project structures for crowdfunded and crowdsourced work

use crate::enums::ProjectStatus;
use crate::identity::{ProjectId, TierId, Timestamp};
use serde::{Deserialize, Serialize};

/// A community project, either funded with money or built from contributed
/// ideas and labor.
///
/// The variant is carried as an explicit `kind` tag on the wire. The
/// `is_crowdfunded`/`is_crowdsourced` predicates are derived from the tag,
/// so every Project value satisfies exactly one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Project {
    Crowdfunded(CrowdfundedProject),
    Crowdsourced(CrowdsourcedProject),
}

impl Project {
    pub fn is_crowdfunded(&self) -> bool {
        matches!(self, Project::Crowdfunded(_))
    }

    pub fn is_crowdsourced(&self) -> bool {
        matches!(self, Project::Crowdsourced(_))
    }

    pub fn id(&self) -> ProjectId {
        match self {
            Project::Crowdfunded(p) => p.project_id,
            Project::Crowdsourced(p) => p.project_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Project::Crowdfunded(p) => &p.title,
            Project::Crowdsourced(p) => &p.title,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        match self {
            Project::Crowdfunded(p) => p.status,
            Project::Crowdsourced(p) => p.status,
        }
    }
}

/// A project raising money toward a fixed goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdfundedProject {
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub funding_goal: f64,
    pub current_amount: f64,
    pub end_date: Option<Timestamp>,
    pub backers: Vec<Backer>,
    pub tiers: Vec<FundingTier>,
}

impl CrowdfundedProject {
    /// Count of backers pledged at a given tier.
    pub fn backer_count(&self, tier_id: TierId) -> usize {
        self.backers
            .iter()
            .filter(|b| b.tier_id == Some(tier_id))
            .count()
    }

    /// Whether a tier has reached its backer limit.
    pub fn tier_is_full(&self, tier: &FundingTier) -> bool {
        tier.is_full(self.backer_count(tier.tier_id))
    }
}

/// A project built from contributed ideas and work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdsourcedProject {
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub ideas: Vec<ProjectIdea>,
    pub contributors: Vec<Contributor>,
}

/// A user who has pledged funding to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backer {
    pub user: String,
    pub amount: f64,
    pub date: Timestamp,
    pub tier_id: Option<TierId>,
    /// Whether the pledge is publicly visible.
    pub public: bool,
}

/// A predefined funding level with its own rewards and optional capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingTier {
    pub tier_id: TierId,
    pub title: String,
    pub amount: f64,
    pub description: String,
    pub rewards: Vec<String>,
    /// Maximum number of backers, when the tier is capacity-limited.
    pub backer_limit: Option<u32>,
}

impl FundingTier {
    /// Whether the tier can accept no more backers.
    pub fn is_full(&self, backer_count: usize) -> bool {
        match self.backer_limit {
            Some(limit) => backer_count >= limit as usize,
            None => false,
        }
    }
}

/// An idea proposed for a crowdsourced project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub author: String,
    pub content: String,
    pub date: Timestamp,
}

/// A contributor to a crowdsourced project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub user: String,
    pub role: Option<String>,
    pub joined_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::EntityIdType;
    use chrono::Utc;

    fn crowdfunded() -> CrowdfundedProject {
        CrowdfundedProject {
            project_id: ProjectId::generate(),
            title: "Restaurar el manglar".to_string(),
            description: "Reforestation of a coastal mangrove".to_string(),
            status: ProjectStatus::Active,
            tags: vec!["mangrove".to_string()],
            created_at: Utc::now(),
            funding_goal: 5_000.0,
            current_amount: 1_200.0,
            end_date: None,
            backers: Vec::new(),
            tiers: Vec::new(),
        }
    }

    fn crowdsourced() -> CrowdsourcedProject {
        CrowdsourcedProject {
            project_id: ProjectId::generate(),
            title: "Censo de polinizadores".to_string(),
            description: "Community pollinator census".to_string(),
            status: ProjectStatus::Draft,
            tags: Vec::new(),
            created_at: Utc::now(),
            ideas: Vec::new(),
            contributors: Vec::new(),
        }
    }

    #[test]
    fn predicates_are_total_and_exclusive() {
        let funded = Project::Crowdfunded(crowdfunded());
        let sourced = Project::Crowdsourced(crowdsourced());
        for project in [&funded, &sourced] {
            assert_ne!(project.is_crowdfunded(), project.is_crowdsourced());
        }
        assert!(funded.is_crowdfunded());
        assert!(sourced.is_crowdsourced());
    }

    #[test]
    fn kind_tag_appears_on_the_wire() {
        let json = serde_json::to_value(Project::Crowdfunded(crowdfunded())).unwrap();
        assert_eq!(json["kind"], "crowdfunded");
        let json = serde_json::to_value(Project::Crowdsourced(crowdsourced())).unwrap();
        assert_eq!(json["kind"], "crowdsourced");
    }

    #[test]
    fn tier_with_limit_fills_up() {
        let tier = FundingTier {
            tier_id: TierId::generate(),
            title: "Padrino".to_string(),
            amount: 50.0,
            description: "Sponsor a sapling".to_string(),
            rewards: vec!["photo updates".to_string()],
            backer_limit: Some(2),
        };
        assert!(!tier.is_full(0));
        assert!(!tier.is_full(1));
        assert!(tier.is_full(2));
        assert!(tier.is_full(3));
    }

    #[test]
    fn unlimited_tier_never_fills() {
        let tier = FundingTier {
            tier_id: TierId::generate(),
            title: "Open".to_string(),
            amount: 10.0,
            description: String::new(),
            rewards: Vec::new(),
            backer_limit: None,
        };
        assert!(!tier.is_full(usize::MAX));
    }

    #[test]
    fn backer_count_is_per_tier() {
        let mut project = crowdfunded();
        let tier_a = TierId::generate();
        let tier_b = TierId::generate();
        project.backers = vec![
            Backer {
                user: "ana".to_string(),
                amount: 50.0,
                date: Utc::now(),
                tier_id: Some(tier_a),
                public: true,
            },
            Backer {
                user: "luis".to_string(),
                amount: 50.0,
                date: Utc::now(),
                tier_id: Some(tier_a),
                public: false,
            },
            Backer {
                user: "mar".to_string(),
                amount: 25.0,
                date: Utc::now(),
                tier_id: Some(tier_b),
                public: true,
            },
        ];
        assert_eq!(project.backer_count(tier_a), 2);
        assert_eq!(project.backer_count(tier_b), 1);
    }

    #[test]
    fn project_round_trips_through_json() {
        let project = Project::Crowdsourced(crowdsourced());
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
