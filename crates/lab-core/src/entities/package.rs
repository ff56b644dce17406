//! Package entity - a bookable bundle of diagnostic tests

use chrono::{DateTime, Utc};

/// Health checkup package. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i32,
    pub original_price: Option<i32>,
    pub parameter_count: i32,
    pub category: Option<String>,
    /// Report turnaround, e.g. "24 hours"
    pub duration: Option<String>,
    pub sample_type: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub popularity_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Package {
    /// Percentage saved against the original price, rounded down.
    ///
    /// `None` when there is no original price or it is not above the current price.
    pub fn discount_percent(&self) -> Option<i32> {
        match self.original_price {
            Some(original) if original > self.price && original > 0 => {
                Some((original - self.price) * 100 / original)
            }
            _ => None,
        }
    }

    /// Amount saved in rupees, if discounted
    pub fn savings(&self) -> Option<i32> {
        self.discount_percent()
            .and(self.original_price)
            .map(|original| original - self.price)
    }
}
