//! Products Domain
//!
//! Catalog products. Every product references an existing category and is
//! returned with that category's name embedded.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::InMemoryCategoryRepository;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let categories = InMemoryCategoryRepository::new();
//! let repository = InMemoryProductRepository::new(categories.clone());
//! let service = ProductService::new(repository, categories);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CategoryRef, CreateProduct, Product, ProductResponse, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
