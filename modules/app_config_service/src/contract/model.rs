//! Contract models for the app config service
//!
//! These models describe one reference application and its full configuration
//! snapshot. Serde derives use camelCase names so a serialized snapshot matches
//! the payload shape of the admin dashboard's save request.

use serde::{Deserialize, Serialize};

/// Placeholder logo used when an app has no uploaded logo
pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg?height=80&width=80";

/// Application identifier assigned by the dashboard
pub type AppId = u32;

/// Dashboard card data for one reference application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    /// Application identifier
    pub id: AppId,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Logo URL
    pub logo: String,
    /// Human-readable last-modified text
    pub last_modified: String,
    /// Deployed application URL
    pub url: String,
}

/// Complete configuration snapshot for one application
///
/// Every domain is present; missing domains in a stored snapshot are filled
/// with documented defaults before an editor is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub app_id: AppId,
    pub branding: BrandingConfig,
    pub appearance: AppearanceConfig,
    pub payment_options: PaymentOptions,
    pub product_display: ProductDisplayConfig,
    pub cart_config: CartConfig,
    pub shipping: ShippingConfig,
    pub search: SearchConfig,
    pub order_management: OrderConfig,
}

/// Partial configuration snapshot as supplied by a configuration store
///
/// Domains absent from the stored snapshot fall back to their defaults when
/// the snapshot is resolved into an [`AppConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<AppearanceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<PaymentOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_display: Option<ProductDisplayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_config: Option<CartConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_management: Option<OrderConfig>,
}

/// Application name, description, and logo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    pub name: String,
    pub description: String,
    pub logo: String,
}

/// Theme colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    pub primary_color: String,
    pub secondary_color: String,
}

/// Available payment methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    pub credit_card: bool,
    pub paypal: bool,
    pub apple_pay: bool,
    pub google_pay: bool,
    pub bank_transfer: bool,
}

/// Payment method selector for toggle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    ApplePay,
    GooglePay,
    BankTransfer,
}

/// Product listing layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductLayout {
    Grid,
    List,
}

/// Product listing presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDisplayConfig {
    pub layout: ProductLayout,
    pub show_ratings: bool,
    pub show_seller: bool,
    pub show_price: bool,
    pub enable_quick_view: bool,
    /// Declared range 2..=4, grid layout only
    pub items_per_row: u8,
}

/// Checkout mode: cart-based when enabled, direct checkout otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartConfig {
    pub enabled: bool,
}

impl CartConfig {
    /// Direct checkout is always the logical complement of cart-based checkout
    pub fn direct_checkout(&self) -> bool {
        !self.enabled
    }
}

/// One toggleable address form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressField {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub enabled: bool,
}

/// Delivery and address form settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingConfig {
    pub enable_pin_code_check: bool,
    pub enable_delivery_estimates: bool,
    pub show_delivery_charge: bool,
    /// Base delivery charge in rupees; retained while the charge is hidden
    pub base_delivery_charge: f64,
    /// Display order is insertion order
    pub address_fields: Vec<AddressField>,
}

impl ShippingConfig {
    /// The base charge input is only rendered while charges are shown; the
    /// stored amount persists either way.
    pub fn base_charge_visible(&self) -> bool {
        self.show_delivery_charge
    }
}

/// Filter category offered in the search UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Price,
    Rating,
    Seller,
    Category,
}

/// One toggleable search filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub key: String,
    pub label: String,
    pub enabled: bool,
    pub r#type: FilterKind,
}

/// One toggleable sort order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOption {
    pub key: String,
    pub label: String,
    pub enabled: bool,
}

/// Search, filter, and sort settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub enable_auto_suggest: bool,
    pub enable_voice_search: bool,
    /// Declared range 1..=5 characters
    pub min_search_length: u32,
    pub show_filter_bar: bool,
    pub show_sort_bar: bool,
    pub filter_options: Vec<FilterOption>,
    pub sort_options: Vec<SortOption>,
}

/// One order status row with its per-item flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub key: String,
    pub label: String,
    pub enabled: bool,
    pub show_estimated_time: bool,
}

/// Per-item attribute selector for order status toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusAttr {
    Enabled,
    ShowEstimatedTime,
}

/// Order tracking, history, and cancellation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    pub enable_order_tracking: bool,
    pub enable_push_notifications: bool,
    pub show_order_history: bool,
    /// Declared range 5..=50; retained while history is hidden
    pub items_per_page: u32,
    pub order_statuses: Vec<OrderStatus>,
    pub enable_invoice_download: bool,
    pub show_cancel_button: bool,
    /// Declared range 1..=72 hours; retained while cancellation is hidden
    pub cancel_time_limit: u32,
}

impl OrderConfig {
    pub fn items_per_page_visible(&self) -> bool {
        self.show_order_history
    }

    pub fn cancel_limit_visible(&self) -> bool {
        self.show_cancel_button
    }
}

/// Numeric settings with declared UI bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    ItemsPerRow,
    MinSearchLength,
    ItemsPerPage,
    CancelTimeLimit,
    BaseDeliveryCharge,
}

/// Inclusive bounds declared by the corresponding input widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl NumericField {
    /// Declared widget bounds, if any. Bounds are metadata only: state is not
    /// clamped against them and out-of-range values remain representable.
    pub fn declared_bounds(&self) -> Option<Bounds> {
        match self {
            NumericField::ItemsPerRow => Some(Bounds { min: 2, max: 4 }),
            NumericField::MinSearchLength => Some(Bounds { min: 1, max: 5 }),
            NumericField::ItemsPerPage => Some(Bounds { min: 5, max: 50 }),
            NumericField::CancelTimeLimit => Some(Bounds { min: 1, max: 72 }),
            // The base charge input declares no min/max
            NumericField::BaseDeliveryCharge => None,
        }
    }
}

/// One numeric setting currently outside its declared bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsViolation {
    pub field: NumericField,
    pub value: i64,
    pub bounds: Bounds,
}

impl AppConfig {
    /// Resolve a possibly-partial stored snapshot into a complete config,
    /// substituting documented defaults for absent domains.
    pub fn from_snapshot(app_id: AppId, snapshot: ConfigSnapshot) -> Self {
        use crate::domain::defaults;
        Self {
            app_id,
            branding: snapshot.branding.unwrap_or_else(defaults::branding),
            appearance: snapshot.appearance.unwrap_or_else(defaults::appearance),
            payment_options: snapshot
                .payment_options
                .unwrap_or_else(defaults::payment_options),
            product_display: snapshot
                .product_display
                .unwrap_or_else(defaults::product_display),
            cart_config: snapshot.cart_config.unwrap_or_else(defaults::cart),
            shipping: snapshot.shipping.unwrap_or_else(defaults::shipping),
            search: snapshot.search.unwrap_or_else(defaults::search),
            order_management: snapshot
                .order_management
                .unwrap_or_else(defaults::order_management),
        }
    }

    /// Advisory check of every bounded numeric setting
    ///
    /// The editor never rejects or clamps out-of-range values; callers that
    /// care (a future remote commit, a form-level warning) inspect this.
    pub fn bounds_violations(&self) -> Vec<BoundsViolation> {
        let checks: [(NumericField, i64); 4] = [
            (
                NumericField::ItemsPerRow,
                i64::from(self.product_display.items_per_row),
            ),
            (
                NumericField::MinSearchLength,
                i64::from(self.search.min_search_length),
            ),
            (
                NumericField::ItemsPerPage,
                i64::from(self.order_management.items_per_page),
            ),
            (
                NumericField::CancelTimeLimit,
                i64::from(self.order_management.cancel_time_limit),
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(field, value)| {
                let bounds = field.declared_bounds()?;
                (!bounds.contains(value)).then_some(BoundsViolation {
                    field,
                    value,
                    bounds,
                })
            })
            .collect()
    }
}
