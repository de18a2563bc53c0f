//! Page-scanning and highlight engine.
//!
//! A scan walks a document's text nodes (shadow trees included, frames
//! excluded), matches each node against the active entry list, and paints
//! the matches as named overlay highlights without modifying the tree:
//!
//! ```text
//! entry store ─► normalize ─► walker ─► matcher ─► highlight layer ─► count
//!                                                   └─► minimap (top frame)
//! ```

pub mod dom;
pub mod fold;
pub mod highlight;
pub mod matcher;
pub mod minimap;
pub mod normalize;
pub mod range;
pub mod scan;
pub mod walker;
pub mod whitespace;

pub use dom::{Document, FrameContent, Namespace, NodeId};
pub use highlight::{MemoryRenderLayer, RenderLayer, HIGHLIGHT_PREFIX};
pub use minimap::{MemoryOverlayHost, Minimap, MinimapSettings, OverlayHost};
pub use normalize::{normalize, EntryError, NormalizedEntries};
pub use range::{EntryMatches, MatchSpan, RangeSet, TextRange};
pub use scan::{PreparedScan, ScanOptions, ScanResult, ScanTarget, Scanner, TopLevel};
pub use walker::{TextNodes, WalkPolicy, Walker};
