//! Inquiry board repository interface and mock

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockInquiryRepository;
pub use r#trait::InquiryRepository;
