// Command-line front end for the lane draft recommender.

pub mod catalog;
pub mod command;
pub mod config;
pub mod request;
