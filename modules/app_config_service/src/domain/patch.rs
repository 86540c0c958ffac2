//! Configuration patches - pure copy-on-write updates
//!
//! Every user interaction on a configuration form maps to one [`ConfigPatch`].
//! Applying a patch never mutates the previous snapshot: `apply` returns a new
//! [`AppConfig`] with exactly the addressed field changed, so callers can keep
//! the prior value for diffing and re-render decisions.
//!
//! Patches are serializable tagged variants; adding a configuration domain
//! means adding a variant, not duplicating editor logic.

use crate::contract::model::{
    AddressField, AppConfig, FilterOption, OrderStatus, PaymentMethod, ProductLayout, SortOption,
    StatusAttr, PLACEHOLDER_LOGO,
};
use crate::contract::ConfigError;
use serde::{Deserialize, Serialize};

/// One edit to a configuration snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigPatch {
    Branding(BrandingPatch),
    Appearance(AppearancePatch),
    Payment(PaymentPatch),
    ProductDisplay(ProductDisplayPatch),
    Cart(CartPatch),
    Shipping(ShippingPatch),
    Search(SearchPatch),
    OrderManagement(OrderPatch),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandingPatch {
    SetName(String),
    SetDescription(String),
    SetLogo(String),
    /// Reset the logo to the placeholder image
    ClearLogo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppearancePatch {
    SetPrimaryColor(String),
    SetSecondaryColor(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentPatch {
    /// Flip one payment method on or off
    Toggle(PaymentMethod),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductDisplayPatch {
    SetLayout(ProductLayout),
    SetShowRatings(bool),
    SetShowSeller(bool),
    SetShowPrice(bool),
    SetEnableQuickView(bool),
    SetItemsPerRow(u8),
}

/// Cart-based and direct checkout are presented as two switches but share one
/// stored flag; either patch direction keeps them logical complements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CartPatch {
    SetCartCheckout(bool),
    SetDirectCheckout(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShippingPatch {
    SetPinCodeCheck(bool),
    SetDeliveryEstimates(bool),
    SetShowDeliveryCharge(bool),
    SetBaseDeliveryCharge(f64),
    ToggleAddressField { key: String, enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchPatch {
    SetAutoSuggest(bool),
    SetVoiceSearch(bool),
    SetMinSearchLength(u32),
    SetShowFilterBar(bool),
    SetShowSortBar(bool),
    ToggleFilter { key: String, enabled: bool },
    ToggleSort { key: String, enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderPatch {
    SetOrderTracking(bool),
    SetPushNotifications(bool),
    SetShowOrderHistory(bool),
    SetItemsPerPage(u32),
    SetInvoiceDownload(bool),
    SetShowCancelButton(bool),
    SetCancelTimeLimit(u32),
    SetStatus {
        key: String,
        attr: StatusAttr,
        value: bool,
    },
}

/// Shared behavior of list-valued settings (address fields, order statuses,
/// filter and sort options): identity by key, insertion order preserved,
/// required items refuse to be disabled.
pub trait ListField {
    fn key(&self) -> &str;

    fn is_required(&self) -> bool {
        false
    }

    fn set_enabled(&mut self, enabled: bool);
}

impl ListField for AddressField {
    fn key(&self) -> &str {
        &self.key
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl ListField for FilterOption {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl ListField for SortOption {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl ListField for OrderStatus {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Copy a list with exactly one item updated, identified by key
///
/// Fails with [`ConfigError::UnknownField`] when no item has the key.
fn update_list_item<T: ListField + Clone>(
    list: &str,
    items: &[T],
    key: &str,
    update: impl FnOnce(&mut T),
) -> Result<Vec<T>, ConfigError> {
    let index = items
        .iter()
        .position(|item| item.key() == key)
        .ok_or_else(|| ConfigError::UnknownField {
            list: list.to_string(),
            key: key.to_string(),
        })?;

    let mut next = items.to_vec();
    update(&mut next[index]);
    Ok(next)
}

/// Copy a list with exactly one item's enabled flag set
///
/// On top of the shared lookup, fails with
/// [`ConfigError::RequiredFieldLocked`] when disabling a required item.
fn set_list_enabled<T: ListField + Clone>(
    list: &str,
    items: &[T],
    key: &str,
    enabled: bool,
) -> Result<Vec<T>, ConfigError> {
    if !enabled {
        if let Some(item) = items.iter().find(|item| item.key() == key) {
            if item.is_required() {
                return Err(ConfigError::RequiredFieldLocked {
                    key: key.to_string(),
                });
            }
        }
    }

    update_list_item(list, items, key, |item| item.set_enabled(enabled))
}

impl AppConfig {
    /// Apply one patch, producing a new snapshot
    ///
    /// The receiver is never mutated. On error the patch had no effect and the
    /// caller's snapshot is unchanged.
    pub fn apply(&self, patch: &ConfigPatch) -> Result<AppConfig, ConfigError> {
        let mut next = self.clone();
        match patch {
            ConfigPatch::Branding(p) => match p {
                BrandingPatch::SetName(name) => next.branding.name = name.clone(),
                BrandingPatch::SetDescription(description) => {
                    next.branding.description = description.clone();
                }
                BrandingPatch::SetLogo(logo) => next.branding.logo = logo.clone(),
                BrandingPatch::ClearLogo => next.branding.logo = PLACEHOLDER_LOGO.to_string(),
            },
            ConfigPatch::Appearance(p) => match p {
                AppearancePatch::SetPrimaryColor(color) => {
                    next.appearance.primary_color = color.clone();
                }
                AppearancePatch::SetSecondaryColor(color) => {
                    next.appearance.secondary_color = color.clone();
                }
            },
            ConfigPatch::Payment(PaymentPatch::Toggle(method)) => {
                let options = &mut next.payment_options;
                let flag = match method {
                    PaymentMethod::CreditCard => &mut options.credit_card,
                    PaymentMethod::Paypal => &mut options.paypal,
                    PaymentMethod::ApplePay => &mut options.apple_pay,
                    PaymentMethod::GooglePay => &mut options.google_pay,
                    PaymentMethod::BankTransfer => &mut options.bank_transfer,
                };
                *flag = !*flag;
            }
            ConfigPatch::ProductDisplay(p) => match p {
                ProductDisplayPatch::SetLayout(layout) => next.product_display.layout = *layout,
                ProductDisplayPatch::SetShowRatings(v) => next.product_display.show_ratings = *v,
                ProductDisplayPatch::SetShowSeller(v) => next.product_display.show_seller = *v,
                ProductDisplayPatch::SetShowPrice(v) => next.product_display.show_price = *v,
                ProductDisplayPatch::SetEnableQuickView(v) => {
                    next.product_display.enable_quick_view = *v;
                }
                ProductDisplayPatch::SetItemsPerRow(v) => next.product_display.items_per_row = *v,
            },
            ConfigPatch::Cart(p) => match p {
                CartPatch::SetCartCheckout(v) => next.cart_config.enabled = *v,
                CartPatch::SetDirectCheckout(v) => next.cart_config.enabled = !*v,
            },
            ConfigPatch::Shipping(p) => match p {
                ShippingPatch::SetPinCodeCheck(v) => next.shipping.enable_pin_code_check = *v,
                ShippingPatch::SetDeliveryEstimates(v) => {
                    next.shipping.enable_delivery_estimates = *v;
                }
                ShippingPatch::SetShowDeliveryCharge(v) => {
                    // Hiding the charge is presentation only; the stored
                    // amount is retained for when it is shown again.
                    next.shipping.show_delivery_charge = *v;
                }
                ShippingPatch::SetBaseDeliveryCharge(amount) => {
                    next.shipping.base_delivery_charge = *amount;
                }
                ShippingPatch::ToggleAddressField { key, enabled } => {
                    next.shipping.address_fields = set_list_enabled(
                        "addressFields",
                        &self.shipping.address_fields,
                        key,
                        *enabled,
                    )?;
                }
            },
            ConfigPatch::Search(p) => match p {
                SearchPatch::SetAutoSuggest(v) => next.search.enable_auto_suggest = *v,
                SearchPatch::SetVoiceSearch(v) => next.search.enable_voice_search = *v,
                SearchPatch::SetMinSearchLength(v) => next.search.min_search_length = *v,
                SearchPatch::SetShowFilterBar(v) => next.search.show_filter_bar = *v,
                SearchPatch::SetShowSortBar(v) => next.search.show_sort_bar = *v,
                SearchPatch::ToggleFilter { key, enabled } => {
                    next.search.filter_options = set_list_enabled(
                        "filterOptions",
                        &self.search.filter_options,
                        key,
                        *enabled,
                    )?;
                }
                SearchPatch::ToggleSort { key, enabled } => {
                    next.search.sort_options =
                        set_list_enabled("sortOptions", &self.search.sort_options, key, *enabled)?;
                }
            },
            ConfigPatch::OrderManagement(p) => match p {
                OrderPatch::SetOrderTracking(v) => {
                    next.order_management.enable_order_tracking = *v;
                }
                OrderPatch::SetPushNotifications(v) => {
                    next.order_management.enable_push_notifications = *v;
                }
                OrderPatch::SetShowOrderHistory(v) => {
                    next.order_management.show_order_history = *v;
                }
                OrderPatch::SetItemsPerPage(v) => next.order_management.items_per_page = *v,
                OrderPatch::SetInvoiceDownload(v) => {
                    next.order_management.enable_invoice_download = *v;
                }
                OrderPatch::SetShowCancelButton(v) => {
                    next.order_management.show_cancel_button = *v;
                }
                OrderPatch::SetCancelTimeLimit(v) => next.order_management.cancel_time_limit = *v,
                OrderPatch::SetStatus { key, attr, value } => {
                    let statuses = &self.order_management.order_statuses;
                    next.order_management.order_statuses = match attr {
                        StatusAttr::Enabled => {
                            set_list_enabled("orderStatuses", statuses, key, *value)?
                        }
                        StatusAttr::ShowEstimatedTime => {
                            update_list_item("orderStatuses", statuses, key, |status| {
                                status.show_estimated_time = *value;
                            })?
                        }
                    };
                }
            },
        }
        Ok(next)
    }
}
