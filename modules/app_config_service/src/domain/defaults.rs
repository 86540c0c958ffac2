//! Documented per-domain defaults
//!
//! These are the values an editor is seeded with when a stored snapshot does
//! not carry the corresponding domain.

use crate::contract::model::{
    AddressField, AppearanceConfig, BrandingConfig, CartConfig, FilterKind, FilterOption,
    OrderConfig, OrderStatus, PaymentOptions, ProductDisplayConfig, ProductLayout, SearchConfig,
    ShippingConfig, SortOption, PLACEHOLDER_LOGO,
};

pub fn branding() -> BrandingConfig {
    BrandingConfig {
        name: String::new(),
        description: String::new(),
        logo: PLACEHOLDER_LOGO.to_string(),
    }
}

pub fn appearance() -> AppearanceConfig {
    AppearanceConfig {
        primary_color: "#6366f1".to_string(),
        secondary_color: "#8b5cf6".to_string(),
    }
}

pub fn payment_options() -> PaymentOptions {
    PaymentOptions {
        credit_card: true,
        paypal: true,
        apple_pay: false,
        google_pay: false,
        bank_transfer: true,
    }
}

pub fn product_display() -> ProductDisplayConfig {
    ProductDisplayConfig {
        layout: ProductLayout::Grid,
        show_ratings: true,
        show_seller: true,
        show_price: true,
        enable_quick_view: true,
        items_per_row: 3,
    }
}

pub fn cart() -> CartConfig {
    CartConfig { enabled: true }
}

pub fn shipping() -> ShippingConfig {
    ShippingConfig {
        enable_pin_code_check: true,
        enable_delivery_estimates: true,
        show_delivery_charge: true,
        base_delivery_charge: 40.0,
        address_fields: address_fields(),
    }
}

/// All address fields ship required and enabled; required fields cannot be
/// disabled afterwards.
pub fn address_fields() -> Vec<AddressField> {
    let fields = [
        ("flatNo", "Flat, House no, Building"),
        ("street", "Area, Street, Sector, Village"),
        ("city", "City/Town"),
        ("pincode", "Pincode"),
        ("state", "State/Province"),
        ("country", "Country"),
        ("phone", "Mobile Number"),
    ];
    fields
        .into_iter()
        .map(|(key, label)| AddressField {
            key: key.to_string(),
            label: label.to_string(),
            required: true,
            enabled: true,
        })
        .collect()
}

pub fn search() -> SearchConfig {
    SearchConfig {
        enable_auto_suggest: true,
        enable_voice_search: true,
        min_search_length: 2,
        show_filter_bar: true,
        show_sort_bar: true,
        filter_options: filter_options(),
        sort_options: sort_options(),
    }
}

pub fn filter_options() -> Vec<FilterOption> {
    let options = [
        ("price", "Price Range", FilterKind::Price),
        ("rating", "Rating", FilterKind::Rating),
        ("seller", "Seller", FilterKind::Seller),
        ("category", "Category", FilterKind::Category),
    ];
    options
        .into_iter()
        .map(|(key, label, kind)| FilterOption {
            key: key.to_string(),
            label: label.to_string(),
            enabled: true,
            r#type: kind,
        })
        .collect()
}

pub fn sort_options() -> Vec<SortOption> {
    let options = [
        ("price_asc", "Price: Low to High"),
        ("price_desc", "Price: High to Low"),
        ("rating", "Rating"),
        ("newest", "Newest First"),
    ];
    options
        .into_iter()
        .map(|(key, label)| SortOption {
            key: key.to_string(),
            label: label.to_string(),
            enabled: true,
        })
        .collect()
}

pub fn order_management() -> OrderConfig {
    OrderConfig {
        enable_order_tracking: true,
        enable_push_notifications: true,
        show_order_history: true,
        items_per_page: 10,
        order_statuses: order_statuses(),
        enable_invoice_download: true,
        show_cancel_button: true,
        cancel_time_limit: 24,
    }
}

pub fn order_statuses() -> Vec<OrderStatus> {
    let statuses = [
        ("pending", "Order Pending", false),
        ("confirmed", "Order Confirmed", true),
        ("processing", "Processing", true),
        ("shipped", "Shipped", true),
        ("delivered", "Delivered", false),
        ("cancelled", "Cancelled", false),
    ];
    statuses
        .into_iter()
        .map(|(key, label, show_estimated_time)| OrderStatus {
            key: key.to_string(),
            label: label.to_string(),
            enabled: true,
            show_estimated_time,
        })
        .collect()
}
