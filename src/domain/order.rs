#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
}

/// Customer, contact and delivery data shared by new and stored orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub total: f64,
    pub receipt_name: String,
    pub identification_number: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub workshop_address: String,
    pub date: String,
    pub hour: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub details: OrderDetails,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub details: OrderDetails,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn details(total: f64) -> OrderDetails {
        OrderDetails {
            total,
            receipt_name: "John Doe".to_string(),
            identification_number: "123456789".to_string(),
            phone_number: "+1234567890".to_string(),
            email: "john.doe@example.com".to_string(),
            address: "123 Main St, Cityville".to_string(),
            workshop_address: "456 Workshop St, Garage City".to_string(),
            date: "2023-10-25".to_string(),
            hour: "14:30".to_string(),
        }
    }

    pub fn item(name: &str, price: f64) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            price,
        }
    }
}
