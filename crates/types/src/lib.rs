#![allow(clippy::too_long_first_doc_paragraph)]

pub mod client;
pub mod contract_bindings;
pub mod input;
pub mod pool;
pub mod primitive;
