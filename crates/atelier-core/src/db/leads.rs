//! Lead intake and tracking operations

use rusqlite::params;
use sha2::{Digest, Sha256};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::estimate::{LeadEstimate, PricingSource};
use crate::models::{Lead, LeadStatus, NewLead};

/// Hash identifying a lead submission for duplicate rejection
pub fn lead_dedup_hash(brand_id: i64, customer_email: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(brand_id.to_le_bytes());
    hasher.update(customer_email.trim().to_lowercase().as_bytes());
    hasher.update(message.as_bytes());
    hex::encode(hasher.finalize())
}

impl Database {
    /// Record a lead together with its estimate snapshot.
    ///
    /// Returns `Error::Duplicate` when the same customer already sent the
    /// same message to this brand.
    pub fn insert_lead(
        &self,
        brand_id: i64,
        lead: &NewLead,
        estimate: &LeadEstimate,
    ) -> Result<i64> {
        let hash = lead_dedup_hash(brand_id, &lead.customer_email, &lead.message);

        if self.find_lead_by_hash(&hash)?.is_some() {
            return Err(Error::Duplicate(format!(
                "Lead already recorded for brand {}",
                brand_id
            )));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO leads (brand_id, customer_name, customer_email, message, inquiry_type,
                                company_name, location, referral_source, status, dedup_hash,
                                estimated_value, confidence_score, pricing_source,
                                recommended_follow_up)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                brand_id,
                lead.customer_name,
                lead.customer_email,
                lead.message,
                lead.inquiry_type,
                lead.company_name,
                lead.location,
                lead.referral_source,
                LeadStatus::New.as_str(),
                hash,
                estimate.estimated_value,
                estimate.confidence_score,
                estimate.pricing_source.as_str(),
                estimate.recommended_follow_up,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Find a lead by dedup hash
    pub fn find_lead_by_hash(&self, hash: &str) -> Result<Option<i64>> {
        let conn = self.conn()?;
        let id = conn
            .query_row(
                "SELECT id FROM leads WHERE dedup_hash = ?",
                params![hash],
                |row| row.get(0),
            )
            .ok();
        Ok(id)
    }

    /// Get a lead by ID
    pub fn get_lead(&self, id: i64) -> Result<Option<Lead>> {
        let conn = self.conn()?;
        let lead = conn
            .query_row(
                "SELECT id, brand_id, customer_name, customer_email, message, inquiry_type,
                        company_name, location, referral_source, status, dedup_hash,
                        estimated_value, confidence_score, pricing_source,
                        recommended_follow_up, created_at
                 FROM leads WHERE id = ?",
                params![id],
                map_lead_row,
            )
            .ok();

        Ok(lead)
    }

    /// List leads, optionally filtered by brand and status, newest first
    pub fn list_leads(
        &self,
        brand_id: Option<i64>,
        status: Option<LeadStatus>,
    ) -> Result<Vec<Lead>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, brand_id, customer_name, customer_email, message, inquiry_type,
                    company_name, location, referral_source, status, dedup_hash,
                    estimated_value, confidence_score, pricing_source,
                    recommended_follow_up, created_at
             FROM leads
             WHERE (?1 IS NULL OR brand_id = ?1)
               AND (?2 IS NULL OR status = ?2)
             ORDER BY created_at DESC, id DESC",
        )?;

        let leads = stmt
            .query_map(
                params![brand_id, status.map(|s| s.as_str())],
                map_lead_row,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(leads)
    }

    /// Update a lead's lifecycle status
    pub fn update_lead_status(&self, id: i64, status: LeadStatus) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE leads SET status = ? WHERE id = ?",
            params![status.as_str(), id],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(format!("Lead {} not found", id)));
        }
        Ok(())
    }

    /// Count recorded leads
    pub fn lead_count(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn map_lead_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lead> {
    let status_str: String = row.get(9)?;
    let pricing_source_str: String = row.get(13)?;
    let created_at_str: String = row.get(15)?;

    Ok(Lead {
        id: row.get(0)?,
        brand_id: row.get(1)?,
        customer_name: row.get(2)?,
        customer_email: row.get(3)?,
        message: row.get(4)?,
        inquiry_type: row.get(5)?,
        company_name: row.get(6)?,
        location: row.get(7)?,
        referral_source: row.get(8)?,
        status: status_str.parse().unwrap_or(LeadStatus::New),
        dedup_hash: row.get(10)?,
        estimated_value: row.get(11)?,
        confidence_score: row.get(12)?,
        pricing_source: pricing_source_str
            .parse()
            .unwrap_or(PricingSource::IndustryFallback),
        recommended_follow_up: row.get(14)?,
        created_at: parse_datetime(&created_at_str),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::ValueBreakdown;

    fn seed_brand(db: &Database) -> i64 {
        db.upsert_brand("Maison Lumière", "Bridal", "Paris", "")
            .unwrap()
    }

    fn sample_lead(message: &str) -> NewLead {
        NewLead {
            customer_name: "Ada".to_string(),
            customer_email: "ada@example.com".to_string(),
            message: message.to_string(),
            inquiry_type: "custom".to_string(),
            company_name: None,
            location: None,
            referral_source: None,
        }
    }

    fn sample_estimate() -> LeadEstimate {
        LeadEstimate {
            estimated_value: 14_000,
            confidence_score: 70,
            pricing_source: PricingSource::CategoryAverage,
            breakdown: ValueBreakdown {
                base_value: 10_000,
                project_multiplier: 1.0,
                quantity_multiplier: 1.0,
                urgency_multiplier: 1.4,
                luxury_multiplier: 1.0,
                final_value: 14_000,
            },
            recommended_follow_up: "High-value lead - Schedule consultation within 24 hours"
                .to_string(),
        }
    }

    #[test]
    fn test_insert_and_fetch_lead() {
        let db = Database::in_memory().unwrap();
        let brand_id = seed_brand(&db);

        let id = db
            .insert_lead(brand_id, &sample_lead("wedding dress, urgent"), &sample_estimate())
            .unwrap();

        let lead = db.get_lead(id).unwrap().unwrap();
        assert_eq!(lead.brand_id, brand_id);
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.estimated_value, 14_000);
        assert_eq!(lead.pricing_source, PricingSource::CategoryAverage);
        assert_eq!(db.lead_count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_lead_rejected() {
        let db = Database::in_memory().unwrap();
        let brand_id = seed_brand(&db);

        db.insert_lead(brand_id, &sample_lead("same message"), &sample_estimate())
            .unwrap();
        let err = db
            .insert_lead(brand_id, &sample_lead("same message"), &sample_estimate())
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate(_)));

        // A different message from the same customer is a new lead
        db.insert_lead(brand_id, &sample_lead("another message"), &sample_estimate())
            .unwrap();
        assert_eq!(db.lead_count().unwrap(), 2);
    }

    #[test]
    fn test_dedup_hash_normalizes_email() {
        let a = lead_dedup_hash(1, "Ada@Example.com ", "hello");
        let b = lead_dedup_hash(1, "ada@example.com", "hello");
        assert_eq!(a, b);

        assert_ne!(a, lead_dedup_hash(2, "ada@example.com", "hello"));
        assert_ne!(a, lead_dedup_hash(1, "ada@example.com", "other"));
    }

    #[test]
    fn test_list_and_status_filters() {
        let db = Database::in_memory().unwrap();
        let brand_a = seed_brand(&db);
        let brand_b = db.upsert_brand("Noir Atelier", "Streetwear", "Berlin", "").unwrap();

        let first = db
            .insert_lead(brand_a, &sample_lead("message one"), &sample_estimate())
            .unwrap();
        db.insert_lead(brand_b, &sample_lead("message two"), &sample_estimate())
            .unwrap();

        db.update_lead_status(first, LeadStatus::Contacted).unwrap();

        assert_eq!(db.list_leads(None, None).unwrap().len(), 2);
        assert_eq!(db.list_leads(Some(brand_a), None).unwrap().len(), 1);
        assert_eq!(
            db.list_leads(None, Some(LeadStatus::Contacted)).unwrap().len(),
            1
        );
        assert_eq!(
            db.list_leads(Some(brand_b), Some(LeadStatus::Contacted))
                .unwrap()
                .len(),
            0
        );

        assert!(matches!(
            db.update_lead_status(9999, LeadStatus::Closed).unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
