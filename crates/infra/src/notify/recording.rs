use std::sync::Mutex;

use forgecart_cart::{CartNotice, Notifier, NoticeKind};

/// Collects notices instead of showing them.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<CartNotice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notice emitted so far, in emission order.
    pub fn notices(&self) -> Vec<CartNotice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Just the kinds, in emission order.
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices().into_iter().map(|n| n.kind).collect()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<CartNotice> {
        self.notices
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: CartNotice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use forgecart_cart::NoticeKind;
    use forgecart_core::ProductId;

    use super::*;

    #[test]
    fn records_in_emission_order_and_take_drains() {
        let notifier = RecordingNotifier::new();
        notifier.notify(CartNotice::now(NoticeKind::OutOfStock, ProductId::new(1)));
        notifier.notify(CartNotice::now(NoticeKind::RemoveFailed, ProductId::new(2)));

        assert_eq!(
            notifier.kinds(),
            vec![NoticeKind::OutOfStock, NoticeKind::RemoveFailed]
        );

        let drained = notifier.take();
        assert_eq!(drained.len(), 2);
        assert!(notifier.notices().is_empty());
    }
}
