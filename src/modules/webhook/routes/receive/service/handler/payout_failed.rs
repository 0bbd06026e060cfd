use crate::modules::payout::model::Payout;

// Nothing is persisted yet, failures are only surfaced in the logs.
pub fn handler(event_id: &str, payout: &Payout) {
    tracing::warn!(
        event_id,
        payout_id = %payout.id,
        amount = payout.amount,
        currency = %payout.currency,
        status = %payout.status,
        failure_code = ?payout.failure_code,
        failure_message = ?payout.failure_message,
        "Payout failed"
    );
}
