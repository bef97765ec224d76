use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::OrderRepository;

/// Entry point used by the HTTP layer. Cloning is cheap; all clones share the
/// same repository.
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: impl OrderRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn create_order(&self, order: NewOrder) -> Result<i32, DomainError> {
        self.repo.create(order)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}

#[cfg(test)]
pub(crate) mod in_memory {
    use std::sync::Mutex;

    use crate::domain::errors::DomainError;
    use crate::domain::order::{NewOrder, Order};
    use crate::domain::ports::OrderRepository;

    /// Repository double holding orders in a vector. `fail` makes every call
    /// return a storage error.
    #[derive(Default)]
    pub struct InMemoryOrderRepository {
        state: Mutex<(i32, Vec<Order>)>,
        fail: bool,
    }

    impl InMemoryOrderRepository {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::Storage("connection refused".to_string()));
            }
            Ok(())
        }
    }

    impl OrderRepository for InMemoryOrderRepository {
        fn create(&self, order: NewOrder) -> Result<i32, DomainError> {
            self.check()?;
            let mut state = self.state.lock().expect("poisoned");
            state.0 += 1;
            let id = state.0;
            state.1.push(Order {
                id,
                details: order.details,
                items: order.items,
            });
            Ok(id)
        }

        fn list(&self) -> Result<Vec<Order>, DomainError> {
            self.check()?;
            Ok(self.state.lock().expect("poisoned").1.clone())
        }

        fn delete(&self, id: i32) -> Result<(), DomainError> {
            self.check()?;
            let mut state = self.state.lock().expect("poisoned");
            let before = state.1.len();
            state.1.retain(|o| o.id != id);
            if state.1.len() == before {
                return Err(DomainError::NotFound);
            }
            Ok(())
        }
    }
}
