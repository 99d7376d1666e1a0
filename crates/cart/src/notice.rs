//! User-facing rejection notices.

use chrono::{DateTime, Utc};

use forgecart_core::ProductId;

/// Kind of notice a rejected operation emits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// Requested amount exceeds current availability.
    OutOfStock,
    /// Adding the product failed for a non-stock reason.
    AddFailed,
    /// Removing the product failed (product not in the cart).
    RemoveFailed,
    /// Changing the amount failed for a non-stock reason.
    UpdateFailed,
}

/// A single user-facing notice.
///
/// Emitted at most once per rejected operation, alongside the explicit error
/// return. The store never reads anything back from the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartNotice {
    pub kind: NoticeKind,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

impl CartNotice {
    pub fn now(kind: NoticeKind, product_id: ProductId) -> Self {
        Self {
            kind,
            product_id,
            occurred_at: Utc::now(),
        }
    }
}
