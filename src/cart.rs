//! Per-page cart reducer
//!
//! A `CartStore` maps service ids to a strictly positive quantity. It lives
//! as long as the salon or artist screen that created it and is handed to the
//! booking screen by value.
//!
//! # Invariants
//!
//! - Every stored quantity is at least 1 (`NonZeroU32`); an entry that would
//!   drop to zero is removed instead.
//! - Only ids present in the cart's service list are stored, so `count()`
//!   and `total()` always cover the same entries.
//! - `total()` and `count()` are recomputed from the entries on every call.

use crate::catalog::Service;
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use tracing::debug;

/// One resolved cart line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine<'a> {
    pub service: &'a Service,
    pub quantity: u32,
}

impl CartLine<'_> {
    /// Price of the line (unit price times quantity)
    pub fn amount(&self) -> u64 {
        u64::from(self.service.price) * u64::from(self.quantity)
    }
}

/// Service quantities selected on a single salon or artist page.
#[derive(Debug, Clone)]
pub struct CartStore<'a> {
    /// Services this cart prices against
    services: &'a [Service],
    /// Quantities keyed by service id (ordered for stable display)
    entries: BTreeMap<String, NonZeroU32>,
}

impl<'a> CartStore<'a> {
    /// Create an empty cart priced against the given service list.
    pub fn new(services: &'a [Service]) -> Self {
        Self {
            services,
            entries: BTreeMap::new(),
        }
    }

    /// Increment the quantity of a service, creating the entry at 1.
    ///
    /// There is no upper bound; the count saturates at `u32::MAX`. Ids not
    /// in the service list are ignored and return 0.
    pub fn add(&mut self, service_id: &str) -> u32 {
        if !self.services.iter().any(|s| s.id == service_id) {
            debug!(service_id, "cart add ignored: unknown service");
            return 0;
        }
        let qty = self
            .entries
            .entry(service_id.to_string())
            .and_modify(|q| *q = q.saturating_add(1))
            .or_insert(NonZeroU32::MIN);
        debug!(service_id, quantity = qty.get(), "cart add");
        qty.get()
    }

    /// Decrement the quantity of a service, dropping the entry at zero.
    ///
    /// Removing a service that is not in the cart does nothing. Returns the
    /// remaining quantity.
    pub fn remove(&mut self, service_id: &str) -> u32 {
        let Some(qty) = self.entries.get_mut(service_id) else {
            return 0;
        };
        let remaining = match NonZeroU32::new(qty.get() - 1) {
            Some(next) => {
                *qty = next;
                next.get()
            }
            None => {
                self.entries.remove(service_id);
                0
            }
        };
        debug!(service_id, quantity = remaining, "cart remove");
        remaining
    }

    /// Quantity currently selected for a service (0 when absent)
    pub fn quantity(&self, service_id: &str) -> u32 {
        self.entries.get(service_id).map_or(0, |q| q.get())
    }

    /// Sum of `price * quantity` over all entries.
    ///
    /// Entries whose id is not in the service list contribute nothing.
    pub fn total(&self) -> u64 {
        self.lines().iter().map(CartLine::amount).sum()
    }

    /// Sum of quantities (not the number of distinct entries)
    pub fn count(&self) -> u64 {
        self.entries.values().map(|q| u64::from(q.get())).sum()
    }

    /// Number of distinct services in the cart
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw `(service id, quantity)` pairs in id order
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(id, q)| (id.as_str(), q.get()))
    }

    /// Entries resolved against the service list, skipping unknown ids.
    pub fn lines(&self) -> Vec<CartLine<'a>> {
        self.entries
            .iter()
            .filter_map(|(id, qty)| {
                self.services
                    .iter()
                    .find(|s| s.id == id.as_str())
                    .map(|service| CartLine {
                        service,
                        quantity: qty.get(),
                    })
            })
            .collect()
    }

    /// Amount still needed to reach `minimum`, or `None` once it is met.
    pub fn shortfall(&self, minimum: u32) -> Option<u64> {
        crate::pricing::shortfall(self.total(), minimum)
    }

    /// Label used next to the cart total, e.g. `3 services`
    pub fn count_label(&self) -> String {
        match self.count() {
            1 => "1 service".to_string(),
            n => format!("{} services", n),
        }
    }
}
