// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations live in `assets/i18n/<locale>.ftl` and are embedded in the
//! binary. The locale is chosen from the `--lang` argument, then the config,
//! then the OS locale, falling back to `en-US`. Unknown keys render as
//! `MISSING: <key>`.

pub mod fluent;

pub use fluent::I18n;
