//! Profile database model

use sqlx::FromRow;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: String,
    pub location: Option<String>,
    pub interests: Vec<String>,
    pub is_pro: bool,
}
