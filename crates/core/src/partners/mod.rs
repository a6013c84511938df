//! Partners module - contributing parties, contribution summaries, and services.

mod contributions;
mod partners_errors;
mod partners_model;
mod partners_service;
mod partners_traits;


pub use contributions::partner_contributions;
pub use partners_errors::PartnerError;
pub use partners_model::{NewPartner, Partner, PartnerContribution, PartnerUpdate};
pub use partners_service::PartnerService;
pub use partners_traits::{PartnerRepositoryTrait, PartnerServiceTrait};
