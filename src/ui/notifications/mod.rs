// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for save outcomes and startup warnings.
//!
//! - [`notification`]: a message key plus severity
//! - [`manager`]: the visible set and the waiting queue
//! - [`toast`]: rendering
//!
//! Success and info toasts disappear after 3s, warnings after 5s, errors stay
//! until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
