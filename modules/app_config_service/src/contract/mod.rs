//! Contract layer - public API for in-process consumers
//!
//! Transport-agnostic models, errors, and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::AppConfigApi;
pub use error::ConfigError;
pub use model::{
    AddressField, AppConfig, AppId, AppSummary, AppearanceConfig, Bounds, BoundsViolation,
    BrandingConfig, CartConfig, ConfigSnapshot, FilterKind, FilterOption, NumericField,
    OrderConfig, OrderStatus, PaymentMethod, PaymentOptions, ProductDisplayConfig, ProductLayout,
    SearchConfig, ShippingConfig, SortOption, StatusAttr, PLACEHOLDER_LOGO,
};
