use diesel::prelude::*;

use crate::domain::order::{OrderDetails, OrderItem};
use crate::schema::{order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
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

impl OrderRow {
    pub fn into_details(self) -> OrderDetails {
        OrderDetails {
            total: self.total,
            receipt_name: self.receipt_name,
            identification_number: self.identification_number,
            phone_number: self.phone_number,
            email: self.email,
            address: self.address,
            workshop_address: self.workshop_address,
            date: self.date,
            hour: self.hour,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub total: f64,
    pub receipt_name: &'a str,
    pub identification_number: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub workshop_address: &'a str,
    pub date: &'a str,
    pub hour: &'a str,
}

impl<'a> From<&'a OrderDetails> for NewOrderRow<'a> {
    fn from(d: &'a OrderDetails) -> Self {
        Self {
            total: d.total,
            receipt_name: &d.receipt_name,
            identification_number: &d.identification_number,
            phone_number: &d.phone_number,
            email: &d.email,
            address: &d.address,
            workshop_address: &d.workshop_address,
            date: &d.date,
            hour: &d.hour,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub name: String,
    pub price: f64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            name: row.name,
            price: row.price,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow<'a> {
    pub order_id: i32,
    pub name: &'a str,
    pub price: f64,
}
