use chrono::{DateTime, Utc};
use domain_categories::models::validate_not_blank;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Largest value a NUMERIC(12, 2) column holds
const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || price.is_zero() {
        return Err(ValidationError::new("price")
            .with_message("price must be greater than 0".into()));
    }
    if *price > MAX_PRICE {
        return Err(ValidationError::new("price")
            .with_message("price must be at most 9999999999.99".into()));
    }
    Ok(())
}

/// Product entity with its category name denormalized
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: i32,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// New product; `category_name` is filled in on read
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            price: input.price,
            stock: input.stock,
            category_id: input.category_id,
            category_name: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and bump `updated_at`
    pub fn apply_update(&mut self, input: UpdateProduct) {
        self.name = input.name;
        self.price = input.price;
        self.stock = input.stock;
        self.category_id = input.category_id;
        self.updated_at = Utc::now();
    }
}

/// Embedded category reference in product responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    pub id: i32,
    pub name: String,
}

/// Wire shape of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,
    pub stock: i32,
    pub category: CategoryRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            category: CategoryRef {
                id: product.category_id,
                name: product.category_name,
            },
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "name must be at most 255 characters")
    )]
    #[schema(example = "Laptop")]
    pub name: String,

    #[serde(default, with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 1299.99)]
    pub price: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i32,
}

/// DTO for replacing a product's fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "name must be at most 255 characters")
    )]
    pub name: String,

    #[serde(default, with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub price: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(body: serde_json::Value) -> CreateProduct {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_max_price_constant() {
        assert_eq!(MAX_PRICE.to_string(), "9999999999.99");
    }

    #[test]
    fn test_valid_product() {
        let input = create(json!({ "name": "Laptop", "price": 1299.99, "stock": 5, "category_id": 1 }));
        assert!(input.validate().is_ok());
        assert_eq!(input.price, Decimal::new(129_999, 2));
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in [0.0, -1.5] {
            let input = create(json!({ "name": "Laptop", "price": price, "stock": 1, "category_id": 1 }));
            let errors = input.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("price"));
        }
    }

    #[test]
    fn test_negative_stock_is_invalid() {
        let input = create(json!({ "name": "Laptop", "price": 1.0, "stock": -1, "category_id": 1 }));
        assert!(input.validate().unwrap_err().field_errors().contains_key("stock"));
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let input = create(json!({}));
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("category_id"));
    }

    #[test]
    fn test_response_embeds_category() {
        let mut product = Product::new(
            3,
            create(json!({ "name": "Laptop", "price": 10.5, "stock": 2, "category_id": 7 })),
        );
        product.category_name = "Electronics".into();

        let value = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(value["category"], json!({ "id": 7, "name": "Electronics" }));
        assert_eq!(value["price"], json!(10.5));
        assert!(value["created_at"].as_str().unwrap().ends_with('Z'));
    }
}
