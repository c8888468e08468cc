//! External API integrations

pub mod crm;

pub use crm::CrmClient;
