pub mod address;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contracts;
pub mod eas;
pub mod rpc;
pub mod scanner;
pub mod signer;
pub mod workflow;
