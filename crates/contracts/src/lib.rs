//! Shared data contracts between the MoldERP frontend and the hosted
//! tabular gateway: record/draft types per business table, the role
//! model, and auth DTOs. This crate is UI-free and target-independent.

pub mod domain;
pub mod system;
