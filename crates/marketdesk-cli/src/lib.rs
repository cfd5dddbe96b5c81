//! # Marketdesk CLI
//!
//! Terminal front end for a running Marketdesk service: prints the permission
//! catalog, lists and edits permission profiles, seeds fake profiles and
//! manages the signed-in administrator's account.
//!
//! ## Usage
//!
//! ```ignore
//! use marketdesk_cli::seeder::seed_profiles;
//!
//! let ids = seed_profiles(&repo, catalog, 10).await?;
//! ```

pub mod render;
pub mod seeder;
