use crate::modules::payout::model::Payout;

pub fn handler(event_id: &str, payout: &Payout) {
    tracing::info!(
        event_id,
        payout_id = %payout.id,
        amount = payout.amount,
        currency = %payout.currency,
        status = %payout.status,
        "Payout paid"
    );
}
