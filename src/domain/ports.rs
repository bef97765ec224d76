use super::errors::DomainError;
use super::order::{NewOrder, Order};

pub trait OrderRepository: Send + Sync + 'static {
    /// Persist an order and its items, returning the storage-assigned id.
    fn create(&self, order: NewOrder) -> Result<i32, DomainError>;
    /// All orders with their items, items kept in insertion order.
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    /// Remove the order's items, then the order. `NotFound` when no order row
    /// was deleted.
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}
