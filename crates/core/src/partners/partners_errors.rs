use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartnerError {
    #[error("Partner not found: {0}")]
    NotFound(String),

    #[error("Partner {partner_id} is referenced by {transaction_count} transaction(s)")]
    InUse {
        partner_id: String,
        transaction_count: usize,
    },

    #[error("Invalid partner data: {0}")]
    InvalidData(String),
}
