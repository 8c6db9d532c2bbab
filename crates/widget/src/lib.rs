//! Pillbox Widget - WASM bindings and DOM glue for the pillbox
//! multi-value input.
//!
//! This crate holds everything that touches JavaScript or the DOM: the
//! `DomSurface` rendering backend for the reconciler, the `EmailsInput`
//! widget class exposed to the page, and the JS value conversion helpers.
//! The model and reconciler underneath are plain Rust and know nothing
//! about the DOM.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { EmailsInput } from 'pillbox';
//!
//! const widget = new EmailsInput(document.querySelector('#emails-input'));
//!
//! await widget.addItem('a@b.com, c@d.com');
//! widget.getCount(); // 2
//!
//! const unsubscribe = widget.subscribe(items => render(items));
//! unsubscribe();
//! ```

extern crate alloc;

pub mod convert;
pub mod surface;
pub mod widget;

pub use convert::entries_to_js;
pub use surface::DomSurface;
pub use widget::EmailsInput;
