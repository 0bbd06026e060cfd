pub mod payout_created;
pub mod payout_failed;
pub mod payout_paid;
