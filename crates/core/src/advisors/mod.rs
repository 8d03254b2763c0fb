//! Advisors module - domain models, validation, services, and traits.

mod advisors_command_service;
mod advisors_model;
mod advisors_query_service;
mod advisors_traits;
mod advisors_validator;


pub use advisors_command_service::AdvisorCommandService;
pub use advisors_model::{AdvisorProfile, NewAdvisorProfile};
pub use advisors_query_service::AdvisorQueryService;
pub use advisors_traits::{
    AdvisorCommandServiceTrait, AdvisorQueryServiceTrait, AdvisorRepositoryTrait,
};
pub use advisors_validator::{AdvisorProfileValidator, ModelValidator};
