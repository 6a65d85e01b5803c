pub mod balance_policy;
pub mod constants;
pub mod helpers;
