//! Fuel stop planner server.
//!
//! A web service that answers: "Driving this truck from A to B, where
//! should I refuel to spend the least on fuel?"

pub mod cache;
pub mod catalog;
pub mod geo;
pub mod planner;
pub mod routing;
pub mod web;
