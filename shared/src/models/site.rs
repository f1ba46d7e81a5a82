//! Marketing Site Models
//!
//! Content records edited through the admin endpoints and served on the
//! public site. Slugs are derived from the title once, at creation.

use serde::{Deserialize, Serialize};

/// Service offering shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create service payload (`slug` derived from title when absent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Update service payload (slug is never regenerated)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// Portfolio project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "portfolio_category", rename_all = "snake_case")
)]
pub enum PortfolioCategory {
    Advertising,
    Branding,
    Web,
    It,
    Design,
}

/// Portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Portfolio {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub client: Option<String>,
    pub category: PortfolioCategory,
    pub description: String,
    pub short_description: Option<String>,
    pub featured_image: String,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create portfolio payload (`slug` derived from title when absent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioCreate {
    pub title: String,
    pub slug: Option<String>,
    pub client: Option<String>,
    pub category: PortfolioCategory,
    pub description: String,
    pub short_description: Option<String>,
    pub featured_image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Update portfolio payload (slug is never regenerated)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioUpdate {
    pub title: Option<String>,
    pub client: Option<String>,
    pub category: Option<PortfolioCategory>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub featured_image: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// Gallery image attached to a portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PortfolioImage {
    pub id: i64,
    pub portfolio_id: i64,
    pub image: String,
    pub caption: Option<String>,
    pub display_order: i32,
}

/// Create portfolio image payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioImageCreate {
    pub image: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Team member shown on the about page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub photo: Option<String>,
    pub display_order: i32,
    pub active: bool,
}

/// Create team member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberCreate {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub photo: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Update team member payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub display_order: Option<i32>,
    pub active: Option<bool>,
}

/// Key-value page content block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SiteContent {
    pub id: i64,
    pub key: String,
    pub title: Option<String>,
    pub content: String,
    pub updated_at: i64,
}

/// Upsert payload for a site content key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContentUpsert {
    pub title: Option<String>,
    pub content: String,
}

/// Contact inquiry triage status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "inquiry_status", rename_all = "snake_case")
)]
pub enum InquiryStatus {
    New,
    Read,
    Responded,
    Closed,
}

impl Default for InquiryStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Contact form submission stored for follow-up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub responded_at: Option<i64>,
    pub created_at: i64,
}

/// Raw contact form payload (public endpoint, untrusted)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}
