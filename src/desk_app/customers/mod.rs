//! Customer Client Module
//!
//! Talks to the customer server and keeps the desk app's view of the
//! collection in sync with it.
//!
//! # Module Structure
//!
//! ```text
//! customers/
//! ├── mod.rs          - Module exports and documentation
//! ├── http_store.rs   - reqwest-backed record store
//! ├── controller.rs   - Synchronization controller and its state
//! ├── form.rs         - Editable form buffers and parsing
//! └── notice.rs       - Transient success/error notices
//! ```

pub mod controller;
pub mod form;
pub mod http_store;
pub mod notice;

pub use controller::{ControllerState, FormMode, SyncAction, SyncController};
pub use form::CustomerForm;
pub use http_store::HttpCustomerStore;
pub use notice::{Notice, NoticeKind, NOTICE_TTL};
