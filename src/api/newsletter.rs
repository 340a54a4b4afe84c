use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateCampaignRequest, UpdateCampaignRequest};
use crate::api::dtos::responses::SendReport;
use crate::api::simulate_latency;
use crate::domain::models::campaign::{Campaign, CAMPAIGN_STATUSES};
use crate::error::AppError;
use crate::state::AppState;

/// Mock recipient count reported by a campaign send.
const MOCK_AUDIENCE_SIZE: i64 = 1250;

pub struct NewsletterApi {
    state: Arc<AppState>,
}

impl NewsletterApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn get_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        simulate_latency(&self.state.config, 600).await;
        self.state.campaign_repo.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Campaign, AppError> {
        simulate_latency(&self.state.config, 400).await;

        self.state
            .campaign_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))
    }

    pub async fn create(&self, payload: CreateCampaignRequest) -> Result<Campaign, AppError> {
        simulate_latency(&self.state.config, 800).await;

        let campaign = Campaign::new(
            payload.name,
            payload.subject,
            payload.content,
            payload.audience_id,
        );

        info!("Creating campaign: {}", campaign.name);
        self.state.campaign_repo.insert(&campaign).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: UpdateCampaignRequest,
    ) -> Result<Campaign, AppError> {
        simulate_latency(&self.state.config, 700).await;

        let mut campaign = self
            .state
            .campaign_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

        if let Some(name) = payload.name {
            campaign.name = name;
        }
        if let Some(subject) = payload.subject {
            campaign.subject = subject;
        }
        if let Some(content) = payload.content {
            campaign.content = content;
        }
        if let Some(status) = payload.status {
            if !CAMPAIGN_STATUSES.contains(&status.as_str()) {
                return Err(AppError::Validation("Invalid status".to_string()));
            }
            campaign.status = status;
        }
        if let Some(scheduled_at) = payload.scheduled_at {
            campaign.scheduled_at = Some(scheduled_at);
        }

        self.state
            .campaign_repo
            .update(&campaign)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<Campaign, AppError> {
        simulate_latency(&self.state.config, 500).await;

        info!("Deleting campaign: {}", id);
        self.state
            .campaign_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))
    }

    /// No real delivery happens; the campaign is marked "sent" and a mock
    /// recipient count is reported.
    pub async fn send(&self, id: &str) -> Result<SendReport, AppError> {
        simulate_latency(&self.state.config, 2000).await;

        let mut campaign = self
            .state
            .campaign_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

        campaign.status = "sent".to_string();
        self.state
            .campaign_repo
            .update(&campaign)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

        info!("Sent campaign {} to {} recipients", id, MOCK_AUDIENCE_SIZE);
        Ok(SendReport {
            sent: MOCK_AUDIENCE_SIZE,
        })
    }
}
