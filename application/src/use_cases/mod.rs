//! Use cases
//!
//! One module per operation. Use cases receive their collaborators as
//! `Arc<dyn Port>` / `Arc<dyn Repository>` and expose a single `execute`.

pub mod calculate_lcm;
pub mod create_joke;
pub mod delete_joke;
pub mod fetch_external_joke;
pub mod fetch_paired_jokes;
pub mod get_joke;
pub mod get_jokes;
pub mod increment_number;
pub mod login;
pub mod send_alert;
pub mod update_joke;

#[cfg(test)]
pub(crate) mod test_support;
