//! The cart collection: ordered line items keyed by product id.

use serde::{Deserialize, Serialize};

use forgecart_core::ProductId;
use forgecart_products::Product;

/// One product entry in the cart with its chosen quantity.
///
/// Invariant: `amount >= 1`. A zero-amount line never enters the cart; the
/// store either replaces a line's amount or drops the line entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display attributes, persisted exactly as the catalog supplied them.
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl LineItem {
    pub fn new(product: Product, amount: u32) -> Self {
        Self { product, amount }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.product_id
    }
}

/// The shopper's current selection: an ordered sequence of line items.
///
/// Insertion order is preserved on append; order is otherwise irrelevant to
/// correctness. At most one line per product id.
///
/// Transforms return new `Cart` values instead of mutating in place. The
/// store swaps a transformed cart in only after the snapshot write succeeds,
/// so a rejected mutation cannot leave partial state behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for `product_id`, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|l| l.product_id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    /// The chosen amount for `product_id`, if present.
    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.line(product_id).map(|l| l.amount)
    }

    /// A new cart with `item` appended at the end.
    #[must_use]
    pub fn appended(&self, item: LineItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// A new cart with the matching line's amount replaced.
    ///
    /// Map semantics: when no line matches `product_id`, the result is equal
    /// to `self`.
    #[must_use]
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|l| {
                if l.product_id() == product_id {
                    LineItem::new(l.product.clone(), amount)
                } else {
                    l.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// A new cart with the matching line dropped (filter semantics).
    #[must_use]
    pub fn without(&self, product_id: ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|l| l.product_id() != product_id)
            .cloned()
            .collect();
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u64) -> Product {
        Product {
            product_id: ProductId::new(id),
            title: format!("Product {id}"),
            price_cents: id * 1000,
            image_url: format!("https://cdn.example.com/p/{id}.jpg"),
        }
    }

    fn test_cart() -> Cart {
        Cart::empty()
            .appended(LineItem::new(test_product(1), 1))
            .appended(LineItem::new(test_product(2), 3))
            .appended(LineItem::new(test_product(3), 2))
    }

    #[test]
    fn appended_preserves_insertion_order() {
        let cart = test_cart();
        let ids: Vec<u64> = cart.items().iter().map(|l| l.product_id().as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn with_amount_replaces_only_the_matching_line() {
        let cart = test_cart();
        let next = cart.with_amount(ProductId::new(2), 7);

        assert_eq!(next.amount_of(ProductId::new(2)), Some(7));
        assert_eq!(next.amount_of(ProductId::new(1)), Some(1));
        assert_eq!(next.amount_of(ProductId::new(3)), Some(2));
        assert_eq!(next.len(), 3);
        // Untouched lines are identical, order included.
        assert_eq!(next.items()[0], cart.items()[0]);
        assert_eq!(next.items()[2], cart.items()[2]);
    }

    #[test]
    fn with_amount_on_absent_id_yields_an_equal_cart() {
        let cart = test_cart();
        let next = cart.with_amount(ProductId::new(99), 5);
        assert_eq!(next, cart);
    }

    #[test]
    fn without_drops_exactly_one_line() {
        let cart = test_cart();
        let next = cart.without(ProductId::new(2));

        assert_eq!(next.len(), 2);
        assert!(!next.contains(ProductId::new(2)));
        let ids: Vec<u64> = next.items().iter().map(|l| l.product_id().as_u64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn without_on_absent_id_yields_an_equal_cart() {
        let cart = test_cart();
        assert_eq!(cart.without(ProductId::new(99)), cart);
    }

    #[test]
    fn amount_of_absent_product_is_none() {
        assert_eq!(Cart::empty().amount_of(ProductId::new(1)), None);
    }
}
