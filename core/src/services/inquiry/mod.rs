//! Inquiry board service

mod service;

pub use service::InquiryService;
