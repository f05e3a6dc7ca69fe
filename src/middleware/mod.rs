pub mod authorizer;
pub mod identity;
