use tracing::warn;

use forgecart_cart::{CartNotice, Notifier};

/// Emits every notice as a `warn` event.
///
/// Stands in for the storefront's toast layer when the cart runs headless;
/// the notice kind and product id become structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: CartNotice) {
        warn!(
            kind = ?notice.kind,
            product_id = %notice.product_id,
            occurred_at = %notice.occurred_at,
            "cart notice"
        );
    }
}
