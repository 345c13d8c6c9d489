//! Funding dialog state machine.
//!
//! closed -> tier-selection -> submitting -> (closed on success |
//! tier-selection on failure). The submit handler is injected; its
//! rejection leaves the dialog open and is logged, never propagated.

use chrono::Utc;
use simbioset_core::{CrowdfundedProject, Timestamp, TierId};
use std::fmt::Display;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingState {
    Closed,
    TierSelection,
    Submitting,
}

/// The user's current pick: a fixed tier or a custom amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TierChoice {
    Tier(TierId),
    Custom(f64),
}

/// The pledge handed to the submit handler.
#[derive(Debug, Clone, PartialEq)]
pub struct BackingRecord {
    pub amount: f64,
    pub date: Timestamp,
    pub tier_id: Option<TierId>,
    pub public: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FundingError {
    #[error("Dialog is not open")]
    NotOpen,
    #[error("Unknown tier {0}")]
    UnknownTier(TierId),
    #[error("Tier {0} has reached its backer limit")]
    TierFull(TierId),
    #[error("No positive amount selected")]
    NoAmount,
}

#[derive(Debug)]
pub struct FundingDialog {
    state: FundingState,
    project: Option<CrowdfundedProject>,
    choice: Option<TierChoice>,
    public: bool,
}

impl Default for FundingDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FundingDialog {
    pub fn new() -> Self {
        Self {
            state: FundingState::Closed,
            project: None,
            choice: None,
            public: true,
        }
    }

    pub fn state(&self) -> FundingState {
        self.state
    }

    pub fn choice(&self) -> Option<TierChoice> {
        self.choice
    }

    /// Open the dialog for a project, entering tier selection.
    pub fn open(&mut self, project: CrowdfundedProject) {
        self.project = Some(project);
        self.choice = None;
        self.state = FundingState::TierSelection;
    }

    pub fn close(&mut self) {
        self.state = FundingState::Closed;
        self.project = None;
        self.choice = None;
    }

    pub fn set_public(&mut self, public: bool) {
        self.public = public;
    }

    /// Whether a tier can currently be picked.
    pub fn tier_selectable(&self, tier_id: TierId) -> bool {
        let Some(project) = &self.project else {
            return false;
        };
        project
            .tiers
            .iter()
            .find(|t| t.tier_id == tier_id)
            .map(|t| !project.tier_is_full(t))
            .unwrap_or(false)
    }

    /// Pick a tier. Re-selection is allowed; a tier at its backer limit is
    /// rejected.
    pub fn select_tier(&mut self, tier_id: TierId) -> Result<(), FundingError> {
        if self.state != FundingState::TierSelection {
            return Err(FundingError::NotOpen);
        }
        let project = self.project.as_ref().ok_or(FundingError::NotOpen)?;
        let tier = project
            .tiers
            .iter()
            .find(|t| t.tier_id == tier_id)
            .ok_or(FundingError::UnknownTier(tier_id))?;
        if project.tier_is_full(tier) {
            return Err(FundingError::TierFull(tier_id));
        }
        self.choice = Some(TierChoice::Tier(tier_id));
        Ok(())
    }

    /// Pick the custom-amount option.
    pub fn select_custom(&mut self, amount: f64) -> Result<(), FundingError> {
        if self.state != FundingState::TierSelection {
            return Err(FundingError::NotOpen);
        }
        self.choice = Some(TierChoice::Custom(amount));
        Ok(())
    }

    /// The total the pledge would be: the tier's fixed amount, or the
    /// user-entered custom amount.
    pub fn computed_total(&self) -> Option<f64> {
        match (self.choice, &self.project) {
            (Some(TierChoice::Tier(tier_id)), Some(project)) => project
                .tiers
                .iter()
                .find(|t| t.tier_id == tier_id)
                .map(|t| t.amount),
            (Some(TierChoice::Custom(amount)), _) => Some(amount),
            _ => None,
        }
    }

    /// Submission stays blocked until a positive total is computed.
    pub fn can_submit(&self) -> bool {
        matches!(self.computed_total(), Some(total) if total >= 1.0)
    }

    /// Build the backing record and delegate to the injected handler.
    ///
    /// Returns `true` when the pledge was accepted (dialog closes) and
    /// `false` when the handler rejected it (dialog returns to tier
    /// selection, error logged).
    pub async fn confirm<F, Fut, E>(&mut self, handler: F) -> Result<bool, FundingError>
    where
        F: FnOnce(BackingRecord) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        if self.state != FundingState::TierSelection {
            return Err(FundingError::NotOpen);
        }
        if !self.can_submit() {
            return Err(FundingError::NoAmount);
        }
        let amount = self.computed_total().ok_or(FundingError::NoAmount)?;
        let tier_id = match self.choice {
            Some(TierChoice::Tier(tier_id)) => Some(tier_id),
            _ => None,
        };
        let record = BackingRecord {
            amount,
            date: Utc::now(),
            tier_id,
            public: self.public,
        };

        self.state = FundingState::Submitting;
        match handler(record).await {
            Ok(()) => {
                self.close();
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "funding submission failed");
                self.state = FundingState::TierSelection;
                Ok(false)
            }
        }
    }
}
