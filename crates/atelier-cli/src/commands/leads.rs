//! Lead listing command

use anyhow::Result;
use atelier_core::db::Database;
use atelier_core::models::LeadStatus;

use super::resolve_brand;

pub fn cmd_leads_list(db: &Database, brand: Option<&str>, status: Option<&str>) -> Result<()> {
    let brand_id = match brand {
        Some(b) => Some(resolve_brand(db, b)?.id),
        None => None,
    };
    let status = match status {
        Some(s) => Some(s.parse::<LeadStatus>().map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };

    let leads = db.list_leads(brand_id, status)?;

    if leads.is_empty() {
        println!("No leads match.");
        return Ok(());
    }

    println!(
        "{:<5} {:<6} {:<10} {:>9} {:>5} {:<16} MESSAGE",
        "ID", "BRAND", "STATUS", "VALUE", "CONF", "SOURCE"
    );
    for lead in leads {
        println!(
            "{:<5} {:<6} {:<10} {:>9} {:>5} {:<16} {}",
            lead.id,
            lead.brand_id,
            lead.status,
            format!("${}", lead.estimated_value),
            lead.confidence_score,
            lead.pricing_source,
            truncate(&lead.message, 40)
        );
    }

    Ok(())
}

/// Shorten a message for table display
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
