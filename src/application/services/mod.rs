//! Business logic services for the application layer.

pub mod admission_service;
pub mod origin_policy;
pub mod redirect_service;

pub use admission_service::{Admission, AdmissionService, CreateLinkCommand};
pub use origin_policy::OriginPolicy;
pub use redirect_service::RedirectService;
