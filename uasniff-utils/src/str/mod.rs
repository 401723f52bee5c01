//! string utilities

mod search;
#[doc(inline)]
pub use search::{
    any_submatch_ignore_ascii_case, contains_ignore_ascii_case, starts_with_ignore_ascii_case,
    submatch_ignore_ascii_case,
};
