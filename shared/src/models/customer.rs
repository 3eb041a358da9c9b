//! Customer Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// CPF document number (empty for walk-in customers)
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub address: String,
    pub created_at: Timestamp,
}
