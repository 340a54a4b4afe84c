use crate::domain::{models::campaign::Campaign, ports::CampaignRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryCampaignRepo {
    campaigns: RwLock<Vec<Campaign>>,
}

impl MemoryCampaignRepo {
    pub fn new() -> Self {
        Self {
            campaigns: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryCampaignRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampaignRepository for MemoryCampaignRepo {
    async fn insert(&self, campaign: &Campaign) -> Result<Campaign, AppError> {
        let mut campaigns = self.campaigns.write().await;
        campaigns.push(campaign.clone());
        Ok(campaign.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Campaign>, AppError> {
        let campaigns = self.campaigns.read().await;
        Ok(campaigns.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Campaign>, AppError> {
        let campaigns = self.campaigns.read().await;
        Ok(campaigns.clone())
    }

    async fn update(&self, campaign: &Campaign) -> Result<Option<Campaign>, AppError> {
        let mut campaigns = self.campaigns.write().await;
        match campaigns.iter_mut().find(|c| c.id == campaign.id) {
            Some(existing) => {
                *existing = campaign.clone();
                Ok(Some(campaign.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<Campaign>, AppError> {
        let mut campaigns = self.campaigns.write().await;
        match campaigns.iter().position(|c| c.id == id) {
            Some(index) => Ok(Some(campaigns.remove(index))),
            None => Ok(None),
        }
    }
}
