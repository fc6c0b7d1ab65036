//! Comment text normalization
//!
//! Everything that turns a raw source comment into plain lines before any
//! rule looks at it:
//! - `delimiters`: comment-syntax borders and continuation stars
//! - `asides`: parenthetical `(e.g. ...)` / `(i.e. ...)` asides
//! - `url`: URL and special-character scrubbing
//! - `markup`: markup-tag stripping port and its default implementation

mod asides;
mod delimiters;
mod markup;
mod url;

pub use asides::remove_irrelevant_asides;
pub use delimiters::remove_comment_delimiters;
pub use markup::{HtmlTagStripper, MarkupStripper, PassthroughStripper};
pub use url::{remove_special_character, remove_url};
