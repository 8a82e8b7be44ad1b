pub mod search;
pub mod segment;
pub mod sieve;
