//! PDF rendering modules for tiling
//!
//! This module handles all PDF-specific operations:
//! - Creating XObjects from the logo's host page
//! - Building the single output page
//! - Painting the background and tile placements
//! - Deep copying PDF objects

mod page;
mod sheet;
mod xobject;

pub use page::*;
pub use sheet::*;
pub use xobject::{
    copy_object_deep, create_page_xobject, get_page_content, get_page_dimensions,
    inherited_attribute, page_media_box, rect_to_array, resolve,
};
pub(crate) use xobject::{extract_number, stream_bytes};
