//! Domain layer - editor, patches, and services

pub mod defaults;
pub mod editor;
pub mod notifications;
pub mod patch;
pub mod repository;
pub mod service;

pub use editor::{CommitOutcome, CommitReceipt, ConfigEditor};
pub use notifications::{MemoryNotifier, NoOpNotifier, Notification, Notifier, NotifyError, Severity};
pub use patch::{
    AppearancePatch, BrandingPatch, CartPatch, ConfigPatch, ListField, OrderPatch, PaymentPatch,
    ProductDisplayPatch, SearchPatch, ShippingPatch,
};
pub use repository::ConfigStore;
pub use service::Service;
