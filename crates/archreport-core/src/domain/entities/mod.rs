pub mod adapter;
pub mod arrangement;
pub mod bookmark;
pub mod port;

pub use crate::domain::DomainError;
pub use adapter::{Adapter, AdapterCatalog, AdapterDef, BUILTIN_ADAPTERS};
pub use arrangement::{ARRANGEMENT_BOOKMARK_TITLE, Arrangement, ArrangementEntry};
pub use bookmark::{Annotation, Bookmark, BookmarkDraft};
pub use port::{Port, PortSet};
