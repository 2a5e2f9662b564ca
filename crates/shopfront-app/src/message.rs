//! Message types for the application (TEA pattern)

use shopfront_core::{Product, ProductPage};

use crate::edit::SaveFailure;
use crate::input_key::InputKey;
use crate::request::{ListOrigin, RequestToken};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Exit the application
    Quit,

    /// Periodic tick from the event loop
    Tick,

    // ─────────────────────────────────────────────────────────
    // Home Page
    // ─────────────────────────────────────────────────────────
    /// Request page 1 at the configured page size
    FetchFirstPage,
    /// Re-fetch the page currently shown
    ReloadPage,
    /// Follow `navigation.next` if present
    NextPage,
    /// Follow `navigation.prev` if present
    PrevPage,
    /// Reset list selection and viewport
    ScrollToTop,
    SelectNextProduct,
    SelectPrevProduct,
    /// Expand or collapse the selected product
    ToggleProductDetails,
    IncrementQuantity,
    DecrementQuantity,

    /// A list fetch returned a page
    PageLoaded {
        token: RequestToken,
        origin: ListOrigin,
        page: ProductPage,
    },
    /// A list fetch failed
    PageFailed {
        token: RequestToken,
        origin: ListOrigin,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Search Panel
    // ─────────────────────────────────────────────────────────
    FocusSearch,
    BlurSearch,
    ToggleAdvancedSearch,
    SearchFocusNext,
    SearchFocusPrev,
    /// Replace the focused text field's contents
    SearchInput { text: String },
    /// Flip the focused range checkbox
    SearchToggleRange,
    /// Move the focused slider handle by whole steps
    SearchNudge { steps: i32 },
    SubmitSearch,

    // ─────────────────────────────────────────────────────────
    // Edit Page
    // ─────────────────────────────────────────────────────────
    OpenEdit { id: String },
    CloseEdit,
    RetryLoadProduct,
    ProductLoaded {
        token: RequestToken,
        product: Product,
    },
    ProductLoadFailed {
        token: RequestToken,
        error: String,
    },
    EditFocusNext,
    EditFocusPrev,
    /// Replace the focused form field's contents
    EditInput { text: String },
    EditCycleCategory { forward: bool },
    SaveProduct,
    SaveCompleted { token: RequestToken },
    SaveFailed {
        token: RequestToken,
        failure: SaveFailure,
    },
    /// Close the success/error alert
    DismissAlert,
}
