//! Cart and cart-line types.

use partstore_catalog::Product;
use partstore_core::ProductId;
use serde::{Deserialize, Serialize};

/// One selected product with its quantity.
///
/// Title and unit price are snapshotted from the catalog entry on first
/// add; the catalog is immutable for the session, so the snapshot cannot
/// drift from the source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    /// Unit price in the base currency.
    pub unit_base: f64,
    pub quantity: u32,
}

impl CartLine {
    /// Line value in the base currency, unrounded.
    pub fn line_base(&self) -> f64 {
        self.unit_base * f64::from(self.quantity)
    }
}

/// In-memory ordered collection of selected items.
///
/// Session-scoped: dropped with the session, never persisted. Lines keep
/// their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product: bumps the existing line's quantity, or
    /// appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                title: product.title.clone(),
                unit_base: product.base_price,
                quantity: 1,
            });
        }
    }

    /// Remove the whole line for a product (not a decrement).
    ///
    /// Returns whether a line was removed; ids without a line are a no-op.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != id);
        self.lines.len() < before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| &l.product_id == id)
            .map_or(0, |l| l.quantity)
    }

    /// Cart total in the base currency, unrounded; display conversion is
    /// the pricing layer's job.
    pub fn total_base(&self) -> f64 {
        self.lines.iter().map(CartLine::line_base).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, format!("part {id}"), price)
    }

    #[test]
    fn adding_twice_accumulates_one_line() {
        let mut cart = Cart::new();
        let p = product("p1", 10.0);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(&p.id), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn remove_drops_the_whole_line() {
        let mut cart = Cart::new();
        let p = product("p1", 10.0);
        cart.add(&p);
        cart.add(&p);

        assert!(cart.remove(&p.id));
        assert_eq!(cart.quantity_of(&p.id), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 10.0));

        assert!(!cart.remove(&ProductId::new("missing")));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("b", 1.0));
        cart.add(&product("a", 2.0));
        cart.add(&product("b", 1.0));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn total_base_is_sum_of_quantity_times_price() {
        let mut cart = Cart::new();
        let filter = product("p1", 10.0);
        let belt = product("p2", 5.0);
        cart.add(&filter);
        cart.add(&filter);
        cart.add(&belt);

        assert_eq!(cart.total_base(), 25.0);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 10.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_base(), 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u8),
            Remove(u8),
        }

        fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
            proptest::collection::vec(
                prop_oneof![
                    (0u8..5).prop_map(Op::Add),
                    (0u8..5).prop_map(Op::Remove),
                ],
                0..40,
            )
        }

        proptest! {
            /// Property: after any add/remove sequence the total equals the
            /// sum of quantity × unit price over the surviving lines.
            #[test]
            fn total_matches_line_recomputation(ops in arb_ops()) {
                let products: Vec<Product> = (0u8..5)
                    .map(|i| Product::new(format!("p{i}"), format!("part {i}"), f64::from(i) + 0.5))
                    .collect();

                let mut cart = Cart::new();
                for op in ops {
                    match op {
                        Op::Add(i) => cart.add(&products[usize::from(i)]),
                        Op::Remove(i) => {
                            cart.remove(&products[usize::from(i)].id);
                        }
                    }
                }

                let expected: f64 = cart
                    .lines()
                    .iter()
                    .map(|l| l.unit_base * f64::from(l.quantity))
                    .sum();
                prop_assert_eq!(cart.total_base(), expected);

                // Each product has at most one line.
                for p in &products {
                    let count = cart
                        .lines()
                        .iter()
                        .filter(|l| l.product_id == p.id)
                        .count();
                    prop_assert!(count <= 1);
                }
            }
        }
    }
}
