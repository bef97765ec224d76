use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::OrderService;
use crate::domain::order::{NewOrder, Order, OrderDetails, OrderItem};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Missing or `null` fields fall back to zero values (`0`, `""`, no items),
/// so any well-formed JSON object is a storable order.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub items: Option<Vec<CreateOrderItemRequest>>,
    pub total: Option<f64>,
    pub receipt_name: Option<String>,
    pub identification_number: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub workshop_address: Option<String>,
    /// Free-form date, stored verbatim, e.g. "2023-10-25"
    pub date: Option<String>,
    /// Free-form time of day, stored verbatim, e.g. "14:30"
    pub hour: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub items: Vec<OrderItemDto>,
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

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<CreateOrderItemRequest> for OrderItem {
    fn from(req: CreateOrderItemRequest) -> Self {
        OrderItem {
            name: req.name.unwrap_or_default(),
            price: req.price.unwrap_or_default(),
        }
    }
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        OrderItemDto {
            name: item.name,
            price: item.price,
        }
    }
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            details: OrderDetails {
                total: req.total.unwrap_or_default(),
                receipt_name: req.receipt_name.unwrap_or_default(),
                identification_number: req.identification_number.unwrap_or_default(),
                phone_number: req.phone_number.unwrap_or_default(),
                email: req.email.unwrap_or_default(),
                address: req.address.unwrap_or_default(),
                workshop_address: req.workshop_address.unwrap_or_default(),
                date: req.date.unwrap_or_default(),
                hour: req.hour.unwrap_or_default(),
            },
            items: req
                .items
                .unwrap_or_default()
                .into_iter()
                .map(OrderItem::from)
                .collect(),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let d = order.details;
        OrderResponse {
            id: order.id,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total: d.total,
            receipt_name: d.receipt_name,
            identification_number: d.identification_number,
            phone_number: d.phone_number,
            email: d.email,
            address: d.address,
            workshop_address: d.workshop_address,
            date: d.date,
            hour: d.hour,
        }
    }
}

// ── Routing ──────────────────────────────────────────────────────────────────

/// Register the `/orders` routes together with extractor configs that turn
/// body and path errors into JSON error responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| {
                AppError::BadRequest(format!("Invalid JSON: {err}")).into()
            }),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()))
    .service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("/{id}", web::delete().to(delete_order)),
    );
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Stores the order and all of its items.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order received", body = MessageResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = NewOrder::from(body.into_inner());
    let service = service.into_inner();

    let order_id = web::block(move || service.create_order(order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Order {} received", order_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Order received successfully")))
}

/// GET /orders
///
/// Returns every order with its nested items.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();

    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let service = service.into_inner();

    web::block(move || service.delete_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("Order {} deleted", order_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Order deleted successfully")))
}
