// src/specs/mod.rs
//! # Page specs
//!
//! A spec knows *where the ground truth lives in the HTML* of one page and how to
//! pull it out into typed values. Nothing here fetches, caches, compares or prints.
//!
//! ## Conventions
//! - Pure functions over a markup string, testable offline against fixtures.
//! - Document order is the only ordering trusted from the page.
//! - Unreadable fields become `None`; a spec never fails a whole page over one card.
//!
//! ## Current specs
//! - `leaderboard` – creator ranking cards on the 100 Mario Super Expert board.
pub mod leaderboard;
