//! Cache namespaces.

/// Hash holding every user's shopping cart.
pub const DEFAULT_CART_NAMESPACE: &str = "luffy_shopping_car";

/// Hash holding every user's latest checkout summary.
pub const DEFAULT_CHECKOUT_NAMESPACE: &str = "luffy_checkout";

/// Names of the hashes used by the cart and checkout services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheNamespaces {
    pub cart: String,
    pub checkout: String,
}

impl Default for CacheNamespaces {
    fn default() -> Self {
        Self {
            cart: DEFAULT_CART_NAMESPACE.to_string(),
            checkout: DEFAULT_CHECKOUT_NAMESPACE.to_string(),
        }
    }
}
